use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;

pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

pub fn starts_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}

/// Shows focus outlines only after the visitor starts tabbing, and hides them
/// again on the next mouse press.
#[hook]
pub fn use_keyboard_focus_outlines() {
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if starts_keyboard_navigation(&e.key()) {
            dom::set_body_class(KEYBOARD_NAVIGATION_CLASS, true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| {
        dom::set_body_class(KEYBOARD_NAVIGATION_CLASS, false);
    });
}
