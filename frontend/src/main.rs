use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod roster;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
