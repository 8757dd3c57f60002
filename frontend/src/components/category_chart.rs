use std::collections::HashMap;

use yew::prelude::*;

use super::icons::icon_category;
use crate::config::AppConfig;
use crate::format::{format_currency, format_percent};
use crate::insights::category_breakdown;
use crate::theme::Theme;

// Circumference is 100 so dash lengths are plain percentages.
const RADIUS: f64 = 15.915_494_309_189_533;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub category_totals: HashMap<String, f64>,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();
    let segments = category_breakdown(&props.category_totals);

    html! {
        <div class="bg-[rgba(13,19,33,0.7)] rounded-[10px] border border-white/10 shadow-lg p-5">
            <h3 class="text-white font-semibold text-lg flex items-center gap-2 mb-4">
                <span style={format!("color: {}", theme.primary)}>{ icon_category() }</span>
                {"Spending by Category"}
            </h3>
            {
                if segments.is_empty() {
                    html! { <p class="text-center text-white/60 py-10">{"No spending yet."}</p> }
                } else {
                    html! {
                        <div class="flex flex-col items-center gap-6">
                            <svg viewBox="0 0 42 42" class="w-56 h-56 -rotate-90">
                                <circle cx="21" cy="21" r={RADIUS.to_string()} fill="transparent" stroke="rgba(255,255,255,0.05)" stroke-width="6" />
                                { for segments.iter().map(|s| html! {
                                    <circle
                                        key={s.category.clone()}
                                        cx="21" cy="21" r={RADIUS.to_string()}
                                        fill="transparent"
                                        stroke={theme.category_color(&s.category)}
                                        stroke-width="6"
                                        stroke-dasharray={format!("{} {}", s.share, 100.0 - s.share)}
                                        stroke-dashoffset={format!("{}", -s.offset)}
                                    >
                                        <title>{ format!("{}: {} ({})", s.category, format_currency(s.total, &config.currency_symbol), format_percent(s.share)) }</title>
                                    </circle>
                                }) }
                            </svg>
                            <ul class="w-full space-y-2">
                                { for segments.iter().map(|s| html! {
                                    <li key={s.category.clone()} class="flex items-center justify-between text-sm text-white/80">
                                        <span class="flex items-center gap-2">
                                            <span class="w-3 h-3 rounded-full" style={format!("background-color: {}", theme.category_color(&s.category))}></span>
                                            { s.category.clone() }
                                        </span>
                                        <span>{ format!("{} ({})", format_currency(s.total, &config.currency_symbol), format_percent(s.share)) }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }
                }
            }
        </div>
    }
}
