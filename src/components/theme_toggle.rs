use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

use crate::config;
use crate::theme::{self, Theme};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let saved = use_state(theme::load_saved);
    let current = use_state(|| theme::initial_theme(*saved, theme::system_prefers_dark()));
    let pressed = use_state(|| false);

    // Keep <body> in sync with the active theme.
    use_effect_with_deps(
        |current: &Theme| {
            theme::apply(*current);
            || ()
        },
        *current,
    );

    // Follow the OS setting until the visitor picks a theme themselves.
    {
        let current = current.clone();
        use_effect_with_deps(
            move |saved: &Option<Theme>| {
                let query = theme::follows_system(*saved)
                    .then(|| web_sys::window())
                    .flatten()
                    .and_then(|w| w.match_media(theme::DARK_SCHEME_QUERY).ok().flatten());

                let listener = query.as_ref().map(|query| {
                    let on_change = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                        current.set(Theme::from_system(e.matches()));
                    }) as Box<dyn FnMut(MediaQueryListEvent)>);
                    if query
                        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not watch system color scheme");
                    }
                    on_change
                });

                move || {
                    if let (Some(query), Some(listener)) = (query, listener) {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            *saved,
        );
    }

    let onclick = {
        let current = current.clone();
        let saved = saved.clone();
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current.toggled();
            info!("Switching to {} theme", next.as_str());
            theme::save(next);
            saved.set(Some(next));
            current.set(next);

            pressed.set(true);
            let pressed = pressed.clone();
            Timeout::new(config::THEME_TOGGLE_PRESS_MS, move || pressed.set(false)).forget();
        })
    };

    let icon = if current.is_dark() { "sunny-outline" } else { "moon-outline" };
    let label = if current.is_dark() { "Switch to light mode" } else { "Switch to dark mode" };
    let style = format!("transform: scale({});", if *pressed { "0.95" } else { "1" });

    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label={label} {style} {onclick}>
            <ion-icon name={icon}></ion-icon>
        </button>
    }
}
