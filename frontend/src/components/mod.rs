mod category_chart;
mod dashboard;
mod expense_form;
mod expense_list;
mod icons;
mod stat_card;

pub use dashboard::Dashboard;
pub use expense_form::ExpenseForm;
