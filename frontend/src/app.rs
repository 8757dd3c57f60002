use yew::prelude::*;

use crate::components::{Dashboard, ExpenseForm};
use crate::config::AppConfig;
use crate::theme::Theme;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo(|_| AppConfig::default(), ());
    let theme = use_memo(|_| Theme::default(), ());
    let refresh_token = use_state(|| 0u32);

    let on_expense_added = {
        let refresh_token = refresh_token.clone();
        Callback::from(move |_: ()| refresh_token.set(refresh_token.wrapping_add(1)))
    };

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<Theme> context={(*theme).clone()}>
                <div class="min-h-screen bg-gradient-to-br from-[#0A1929] to-[#1A1A2E]">
                    <div class="max-w-6xl mx-auto px-4 py-8">
                        <h1 class="text-4xl font-bold text-center tracking-widest mb-8 bg-gradient-to-r from-[#3f51b5] to-[#f50057] bg-clip-text text-transparent">
                            {"Expense Tracker"}
                        </h1>
                        <div class="flex flex-col gap-8">
                            <ExpenseForm on_expense_added={on_expense_added} />
                            <Dashboard refresh_token={*refresh_token} />
                        </div>
                    </div>
                </div>
            </ContextProvider<Theme>>
        </ContextProvider<AppConfig>>
    }
}
