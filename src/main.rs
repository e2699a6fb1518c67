use log::{info, Level};
use yew::prelude::*;

mod config;

mod animation {
    pub mod easing;
    pub mod frame;
}

mod effects {
    pub mod dom;
    pub mod dropdown;
    pub mod hero;
    pub mod progress_ring;
    pub mod reveal;
    pub mod scroll_stylers;
    pub mod smooth_scroll;
}

mod pages {
    pub mod landing;
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests;

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
