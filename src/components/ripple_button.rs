use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::effects::{RippleAction, RippleSet, HOVER_LIFT, HOVER_REST};

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra inline style, e.g. a background that changes with form state.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or(true)]
    pub ripple: bool,
    #[prop_or(true)]
    pub lift: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Button with a hover lift and a click ripple.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();
    let ripples = use_reducer(RippleSet::default);
    let next_ripple_id = use_mut_ref(|| 0u32);
    let hovered = use_state(|| false);

    let onclick = {
        let node = node.clone();
        let ripples = ripples.clone();
        let next_ripple_id = next_ripple_id.clone();
        let onclick = props.onclick.clone();
        let ripple = props.ripple;
        Callback::from(move |e: MouseEvent| {
            if ripple {
                if let Some(button) = node.cast::<HtmlElement>() {
                    let rect = button.get_bounding_client_rect();
                    let id = {
                        let mut next = next_ripple_id.borrow_mut();
                        let id = *next;
                        *next = next.wrapping_add(1);
                        id
                    };
                    ripples.dispatch(RippleAction::Spawn {
                        id,
                        rect: (rect.left(), rect.top(), rect.width(), rect.height()),
                        client_x: e.client_x() as f64,
                        client_y: e.client_y() as f64,
                    });
                    let ripples = ripples.clone();
                    Timeout::new(config::RIPPLE_DURATION_MS, move || {
                        ripples.dispatch(RippleAction::Expire(id));
                    })
                    .forget();
                }
            }
            onclick.emit(e);
        })
    };

    let (onmouseenter, onmouseleave) = {
        let enter = hovered.clone();
        let leave = hovered.clone();
        (
            Callback::from(move |_: MouseEvent| enter.set(true)),
            Callback::from(move |_: MouseEvent| leave.set(false)),
        )
    };

    let mut style = String::new();
    if props.lift {
        style.push_str(&format!(
            "transform: {}; ",
            if *hovered { HOVER_LIFT } else { HOVER_REST }
        ));
    }
    if props.ripple {
        style.push_str("position: relative; overflow: hidden; ");
    }
    if let Some(extra) = &props.style {
        style.push_str(extra);
    }

    html! {
        <button ref={node} class={props.class.clone()} {style} {onclick} {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
            { for ripples.ripples.iter().map(|r| html! {
                <span key={r.id} class="ripple" style={r.style()}></span>
            }) }
        </button>
    }
}
