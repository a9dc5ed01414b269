use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::anchor_link::AnchorLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::navbar::{NavbarPosition, ScrollTracker};

fn scroll_top() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let from_window = window.page_y_offset().unwrap_or(0.0);
    if from_window > 0.0 {
        return from_window;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_top() as f64)
        .unwrap_or(0.0)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let tracker = use_mut_ref(ScrollTracker::default);
    let position = use_state_eq(NavbarPosition::default);
    let menu_open = use_state(|| false);

    {
        let position = position.clone();
        use_event_with_window("scroll", move |_: Event| {
            position.set(tracker.borrow_mut().observe(scroll_top()));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let style = format!("transform: {};", position.transform());

    html! {
        <nav class="navbar" {style}>
            <div class="nav-content">
                <AnchorLink href="#top" class="nav-logo">{content::APP_NAME}</AnchorLink>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for [("#features", "Features"), ("#screenshots", "Screenshots"), ("#testimonials", "Stories"), ("#signup", "Get Notified")]
                        .into_iter()
                        .map(|(href, text)| html! {
                            <div onclick={close_menu.clone()}>
                                <AnchorLink {href} class="nav-link">{text}</AnchorLink>
                            </div>
                        })
                    }
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}
