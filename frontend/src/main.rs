use crate::app::App;

mod app;
mod components;
mod config;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
