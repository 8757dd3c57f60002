use gloo_timers::callback::Interval;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::category_chart::CategoryChart;
use super::expense_list::ExpenseList;
use super::icons::icon_wallet;
use super::stat_card::{StatCard, StatIcon};
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::format::{format_currency, format_growth};
use crate::insights::resolve_summary;
use crate::models::{BudgetRecommendation, DashboardSnapshot};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Bumped by the parent to force an immediate refresh.
    pub refresh_token: u32,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();

    let snapshot = use_state(|| None::<DashboardSnapshot>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    // Overlapping cycles are not deduplicated; whichever finishes last wins.
    let refresh = {
        let snapshot = snapshot.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let client = ApiClient::new(config.clone());
        Callback::from(move |_: ()| {
            let snapshot = snapshot.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let client = client.clone();
            loading.set(true);
            spawn_local(async move {
                match client.load_dashboard().await {
                    Ok(next) => {
                        load_error.set(None);
                        snapshot.set(Some(next));
                    }
                    Err(e) => {
                        error!("error fetching data: {}", e);
                        load_error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |token| {
                debug!("refreshing dashboard (token {})", token);
                refresh.emit(());
                || ()
            },
            props.refresh_token,
        );
    }

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |interval_ms| {
                let interval = Interval::new(*interval_ms, move || refresh.emit(()));
                move || drop(interval)
            },
            config.refresh_interval_ms,
        );
    }

    if let Some(msg) = &*load_error {
        return status_panel(format!("Error: {}", msg));
    }

    let Some(current) = &*snapshot else {
        return if *loading {
            status_panel("Loading...".to_string())
        } else {
            html! {}
        };
    };

    let summary = resolve_summary(&current.insights, &current.expenses);

    html! {
        <div class="bg-gradient-to-br from-[#0A1929]/95 to-[#1A1A2E]/95 rounded-2xl p-6 shadow-2xl space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title="Total Spent"
                    value={format_currency(summary.total_spent, &config.currency_symbol)}
                    icon={StatIcon::Dollar}
                    color={theme.primary}
                />
                <StatCard
                    title="Categories"
                    value={summary.category_totals.len().to_string()}
                    icon={StatIcon::Category}
                    color={theme.primary}
                />
                <StatCard
                    title="Spending Growth"
                    value={format_growth(summary.growth_percent)}
                    icon={StatIcon::TrendingUp}
                    color={theme.growth_color(summary.growth_percent)}
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <ExpenseList expenses={current.expenses.clone()} />
                <CategoryChart category_totals={summary.category_totals.clone()} />
            </div>

            {
                match &current.budget {
                    Some(budget) => budget_card(budget, &config.currency_symbol, &theme),
                    None => html! {},
                }
            }
        </div>
    }
}

fn status_panel(message: String) -> Html {
    html! {
        <div class="bg-gradient-to-br from-[#0A1929]/95 to-[#1A1A2E]/95 rounded-2xl p-6 shadow-2xl flex items-center justify-center min-h-[50vh]">
            <h2 class="text-3xl text-white">{ message }</h2>
        </div>
    }
}

fn budget_card(budget: &BudgetRecommendation, symbol: &str, theme: &Theme) -> Html {
    let rows = [
        ("Essentials", budget.breakdown.essentials),
        ("Savings", budget.breakdown.savings),
        ("Discretionary", budget.breakdown.discretionary),
    ];

    html! {
        <div class="bg-[rgba(13,19,33,0.7)] rounded-[10px] border border-white/10 shadow-lg p-5">
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-white font-semibold text-lg flex items-center gap-2">
                    <span style={format!("color: {}", theme.primary)}>{ icon_wallet() }</span>
                    {"Recommended Monthly Budget"}
                </h3>
                <span class="text-2xl font-bold" style={format!("color: {}", theme.primary)}>
                    { format_currency(budget.recommended_monthly_budget, symbol) }
                </span>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                { for rows.iter().map(|(label, amount)| html! {
                    <div key={*label} class="bg-[#0A1929] rounded-[10px] p-3">
                        <p class="text-xs" style={format!("color: {}", theme.text_muted)}>{ *label }</p>
                        <p class="text-white font-semibold">{ format_currency(*amount, symbol) }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
