use yew::prelude::*;

use super::icons::{icon_calendar, icon_list};
use crate::config::AppConfig;
use crate::format::{format_currency, format_date_time};
use crate::models::Expense;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();
    let expanded = use_state(|| true);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    html! {
        <div class="bg-[rgba(13,19,33,0.7)] rounded-[10px] border border-white/10 shadow-lg h-full">
            <button type="button" onclick={on_toggle} class="w-full p-5 flex items-center justify-between text-white">
                <span class="flex items-center gap-2 font-semibold text-lg">{ icon_list() }{"Recent Expenses"}</span>
                <span class="text-xs text-white/60">{ if *expanded { "Hide" } else { "Show" } }</span>
            </button>
            {
                if !*expanded {
                    html! {}
                } else if props.expenses.is_empty() {
                    html! { <p class="px-5 pb-6 text-center text-white/60">{"No expenses found"}</p> }
                } else {
                    html! {
                        <div class="max-h-[400px] overflow-y-auto px-5 pb-5 space-y-2">
                            { for props.expenses.iter().map(|expense| {
                                let chip_color = theme.category_color(&expense.category);
                                let date_label = format_date_time(&expense.date);
                                html! {
                                    <div key={expense.id} class="bg-[#0A1929] rounded-[10px] p-4 flex items-center justify-between hover:-translate-y-0.5 transition-transform">
                                        <div>
                                            <p class="text-white font-bold">{ expense.description.clone() }</p>
                                            <div class="flex flex-wrap gap-2 mt-2">
                                                <span class="px-3 py-1 rounded-full text-[10px] font-bold text-white" style={format!("background-color: {}", chip_color)}>
                                                    { expense.category.clone() }
                                                </span>
                                                <span title={expense.payment_method.clone()} class="px-3 py-1 rounded-full text-[10px] border border-white/30 text-white/80">
                                                    { expense.payment_method.clone() }
                                                </span>
                                                <span title={date_label.clone()} class="px-3 py-1 rounded-full text-[10px] border border-white/30 text-white/80 flex items-center gap-1">
                                                    { icon_calendar() }{ date_label }
                                                </span>
                                            </div>
                                            {
                                                match expense.notes.as_deref() {
                                                    Some(notes) if !notes.trim().is_empty() => html! {
                                                        <p class="text-xs text-white/50 mt-2">{ notes.to_string() }</p>
                                                    },
                                                    _ => html! {},
                                                }
                                            }
                                        </div>
                                        <p class="text-lg font-bold" style={format!("color: {}", theme.primary)}>
                                            { format_currency(expense.amount, &config.currency_symbol) }
                                        </p>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
