//! Decorative effects: scroll reveal timing, click ripples, hover lift.

use std::rc::Rc;

use yew::functional::Reducible;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FEATURE_STAGGER_MS: u32 = 100;
pub const TESTIMONIAL_STAGGER_MS: u32 = 200;
pub const PREVIEW_STAGGER_MS: u32 = 150;
pub const ICON_STAGGER_MS: u32 = 100;

pub const HOVER_LIFT: &str = "translateY(-2px)";
pub const HOVER_REST: &str = "translateY(0)";

/// CSS delay for the n-th element of a staggered group.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * step_ms as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAnimation {
    FadeIn,
    SlideInLeft,
}

impl RevealAnimation {
    pub fn class(self) -> &'static str {
        match self {
            RevealAnimation::FadeIn => "fade-in",
            RevealAnimation::SlideInLeft => "slide-in-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// Centers a circle covering the element on the click point. `rect` is
    /// `(left, top, width, height)` in client coordinates.
    pub fn at_click(id: u32, rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            id,
            size,
            x: client_x - left - size / 2.0,
            y: client_y - top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s ease-out; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

pub enum RippleAction {
    Spawn { id: u32, rect: (f64, f64, f64, f64), client_x: f64, client_y: f64 },
    Expire(u32),
}

/// Ripples currently animating inside one button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RippleSet {
    pub ripples: Vec<Ripple>,
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut set = (*self).clone();
        match action {
            RippleAction::Spawn { id, rect, client_x, client_y } => {
                set.ripples.push(Ripple::at_click(id, rect, client_x, client_y));
            }
            RippleAction::Expire(id) => set.ripples.retain(|r| r.id != id),
        }
        Rc::new(set)
    }
}
