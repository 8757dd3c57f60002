use chrono::{Local, NaiveDate};
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use super::icons::{icon_info, icon_plus};
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::form::{
    ExpenseFormInput, FieldError, ValidationErrors, CATEGORY_EXAMPLES, SUBMIT_FAILED_MESSAGE,
};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub on_expense_added: Callback<()>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn input_class(error: Option<FieldError>) -> &'static str {
    if error.is_some() {
        "w-full bg-white/5 rounded-[10px] px-3 py-2 text-sm text-white border border-red-500"
    } else {
        "w-full bg-white/5 rounded-[10px] px-3 py-2 text-sm text-white border border-white/10"
    }
}

fn helper_text(error: Option<FieldError>) -> Html {
    match error {
        Some(e) => html! { <p class="text-xs text-red-400 mt-1">{ e.to_string() }</p> },
        None => html! {},
    }
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let form = {
        let payment_method = config.default_payment_method.clone();
        use_state(move || ExpenseFormInput::new(today(), &payment_method))
    };
    let field_errors = use_state(ValidationErrors::default);
    let form_error = use_state(|| None::<String>);
    let show_categories = use_state(|| false);
    let saving = use_state(|| false);

    // Each input writes one field of the form state.
    let bind_input = |apply: fn(&mut ExpenseFormInput, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_description = bind_input(|f, v| f.description = v);
    let on_amount = bind_input(|f, v| f.amount = v);
    let on_date = bind_input(|f, v| f.date = v);
    let on_category = bind_input(|f, v| f.category = v);
    let on_payment_method = bind_input(|f, v| f.payment_method = v);
    let on_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notes = input.value();
            form.set(next);
        })
    };

    let on_toggle_categories = {
        let show_categories = show_categories.clone();
        Callback::from(move |_| show_categories.set(!*show_categories))
    };

    let on_submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let config = config.clone();
        let on_expense_added = props.on_expense_added.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let body = match form.validate(&config.default_payment_method) {
                Ok(body) => body,
                Err(errors) => {
                    form_error.set(errors.summary());
                    field_errors.set(errors);
                    return;
                }
            };

            field_errors.set(ValidationErrors::default());
            form_error.set(None);
            saving.set(true);

            let form = form.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let client = ApiClient::new(config.clone());
            let payment_method = config.default_payment_method.clone();
            let on_expense_added = on_expense_added.clone();
            spawn_local(async move {
                match client.create_expense(&body).await {
                    Ok(()) => {
                        form.set(ExpenseFormInput::new(today(), &payment_method));
                        on_expense_added.emit(());
                    }
                    Err(e) => {
                        error!("error adding expense: {}", e);
                        form_error.set(Some(SUBMIT_FAILED_MESSAGE.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="bg-[rgba(13,19,33,0.7)] p-6 rounded-[10px] border border-white/10 shadow-lg">
            <div class="flex items-center gap-2 mb-4">
                <h2 class="text-white font-semibold text-xl">{"Add New Expense"}</h2>
                <button type="button" title="View available categories" onclick={on_toggle_categories} class="text-[#3f51b5] hover:scale-110 transition-transform">
                    { icon_info() }
                </button>
            </div>

            {
                if *show_categories {
                    html! {
                        <div class="bg-white/90 rounded-[10px] p-4 mb-4">
                            <p class="text-sm font-semibold text-[#3f51b5] mb-2">{"Available Categories & Examples:"}</p>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                                { for CATEGORY_EXAMPLES.iter().map(|(category, examples)| html! {
                                    <div key={*category}>
                                        <p class="text-sm font-semibold text-slate-800">{ capitalize(category) }</p>
                                        <p class="text-xs text-slate-500">{ *examples }</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                } else { html! {} }
            }

            <form onsubmit={on_submit} class="flex flex-col gap-4">
                <div>
                    <label class="text-xs font-bold text-white/60">{"Description"}</label>
                    <input type="text" placeholder="Expense description" value={form.description.clone()} oninput={on_description} class={input_class(field_errors.description)} />
                    { helper_text(field_errors.description) }
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class="text-xs font-bold text-white/60">{ format!("Amount ({})", config.currency_symbol) }</label>
                        <input type="number" step="0.01" placeholder="0.00" value={form.amount.clone()} oninput={on_amount} class={input_class(field_errors.amount)} />
                        { helper_text(field_errors.amount) }
                    </div>
                    <div>
                        <label class="text-xs font-bold text-white/60">{"Date"}</label>
                        <input type="date" value={form.date.clone()} oninput={on_date} class={input_class(field_errors.date)} />
                        { helper_text(field_errors.date) }
                    </div>
                    <div>
                        <label class="text-xs font-bold text-white/60">{"Category"}</label>
                        <input type="text" placeholder="Leave blank to auto-categorize" value={form.category.clone()} oninput={on_category} class={input_class(None)} />
                    </div>
                    <div>
                        <label class="text-xs font-bold text-white/60">{"Payment Method"}</label>
                        <input type="text" value={form.payment_method.clone()} oninput={on_payment_method} class={input_class(None)} />
                    </div>
                </div>
                <div>
                    <label class="text-xs font-bold text-white/60">{"Notes"}</label>
                    <textarea rows="2" value={form.notes.clone()} oninput={on_notes} class={input_class(None)} />
                </div>
                <button type="submit" disabled={*saving} class="mt-2 h-12 bg-[#3f51b5] text-white rounded-[10px] font-medium flex items-center justify-center gap-2 hover:opacity-90 transition-all">
                    { icon_plus() }
                    { if *saving { "Saving..." } else { "Add Expense" } }
                </button>
            </form>

            {
                if let Some(msg) = &*form_error {
                    html! { <p class="text-sm text-red-400 mt-3">{ msg.clone() }</p> }
                } else { html! {} }
            }
        </div>
    }
}
