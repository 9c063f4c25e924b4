mod components;
mod config;
mod error;
mod gesture;
mod mapper;
mod render_loop;
mod renderer;
mod resize;
mod state;
mod util;
mod viewer;

use components::app::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
