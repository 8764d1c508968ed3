use yew::prelude::*;
use log::info;

mod config;
mod error;
mod dom;
mod timer;
mod debounce;
mod visibility;
mod effects {
    pub mod smooth_scroll;
    pub mod navbar;
    pub mod mobile_menu;
    pub mod reveal;
    pub mod counter;
    pub mod gallery;
    pub mod zoom;
    pub mod cta;
    pub mod progress;
    pub mod tilt;
    mod install;
    pub use install::{install, Effects};
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let config = use_state(config::load);

    html! {
        <Landing config={(*config).clone()} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
