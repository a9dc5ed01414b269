use log::info;
use yew::prelude::*;

mod anchors;
mod carousel;
mod config;
mod content;
mod dom;
mod effects;
mod focus;
mod navbar;
mod signup;
mod theme;

mod components {
    pub mod anchor_link;
    pub mod email_signup;
    pub mod global_styles;
    pub mod navbar;
    pub mod reveal;
    pub mod ripple_button;
    pub mod screenshot_carousel;
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
}

use components::{global_styles::GlobalStyles, navbar::Navbar};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    focus::use_keyboard_focus_outlines();

    html! {
        <>
            <GlobalStyles />
            <Navbar />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
