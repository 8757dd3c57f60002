mod api;
mod app;
mod components;
mod config;
mod error;
mod form;
mod format;
mod insights;
mod models;
mod theme;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("starting expense tracker frontend");
    yew::Renderer::<app::App>::new().render();
}
