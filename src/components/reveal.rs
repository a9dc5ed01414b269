use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::effects::{self, RevealAnimation};

#[derive(Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ViewportOptions {
    pub const REVEAL: Self = Self {
        threshold: effects::REVEAL_THRESHOLD,
        root_margin: effects::REVEAL_ROOT_MARGIN,
    };
    pub const ANY: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
    };
}

/// Becomes true the first time `node` intersects the viewport and stays true.
#[hook]
pub fn use_seen_once(node: NodeRef, options: ViewportOptions) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                match node.cast::<Element>() {
                    Some(element) if !*seen => {
                        let seen_on_entry = seen.clone();
                        let on_entries = Closure::wrap(Box::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let visible = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                if visible {
                                    seen_on_entry.set(true);
                                    observer.disconnect();
                                }
                            },
                        )
                            as Box<dyn FnMut(Array, IntersectionObserver)>);

                        let mut init = IntersectionObserverInit::new();
                        init.threshold(&JsValue::from_f64(options.threshold))
                            .root_margin(options.root_margin);

                        match IntersectionObserver::new_with_options(
                            on_entries.as_ref().unchecked_ref(),
                            &init,
                        ) {
                            Ok(obs) => {
                                obs.observe(&element);
                                observer = Some(obs);
                            }
                            Err(_) => {
                                // Without observer support, just show the content.
                                log::warn!("IntersectionObserver unavailable, revealing immediately");
                                seen.set(true);
                            }
                        }
                        callback = Some(on_entries);
                    }
                    Some(_) => {}
                    None => log::debug!("Reveal target not mounted yet"),
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *seen
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub animation: RevealAnimation,
    /// Position within a staggered group.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub stagger_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that animates in when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_seen_once(node.clone(), ViewportOptions::REVEAL);

    let class = classes!(
        props.class.clone(),
        props.animation.class(),
        visible.then_some("visible")
    );
    let style = format!(
        "transition-delay: {};",
        effects::stagger_delay(props.index, props.stagger_ms)
    );

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that only starts loading once it reaches the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_seen_once(node.clone(), ViewportOptions::ANY);

    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), (!loaded).then_some("lazy"))}
            src={loaded.then(|| props.src.clone())}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
        />
    }
}
