use chrono::NaiveDateTime;

fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `+12%` for growth, `-4%` for decline.
pub fn format_growth(growth_percent: i64) -> String {
    if growth_percent >= 0 {
        format!("+{}%", growth_percent)
    } else {
        format!("{}%", growth_percent)
    }
}

/// Long form used on dashboard chips, e.g. `Jan 3, 2024, 09:15 AM`.
pub fn format_date_time(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn currency_has_separators_and_cents() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(4.5, "$"), "$4.50");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-1000.0, "$"), "-$1,000.00");
    }

    #[test]
    fn currency_does_not_print_negative_zero() {
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn growth_sign() {
        assert_eq!(format_growth(0), "+0%");
        assert_eq!(format_growth(150), "+150%");
        assert_eq!(format_growth(-67), "-67%");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn date_time_label() {
        let date = at(2024, 1, 3, 9, 15);
        assert_eq!(format_date_time(&date), "Jan 3, 2024, 09:15 AM");
    }
}
