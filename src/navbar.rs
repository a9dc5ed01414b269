use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarPosition {
    #[default]
    Shown,
    Hidden,
}

impl NavbarPosition {
    pub fn transform(self) -> &'static str {
        match self {
            NavbarPosition::Shown => "translateY(0)",
            NavbarPosition::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the navbar while scrolling down past the hide offset and brings it
/// back on any upward scroll.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_scroll_top: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, scroll_top: f64) -> NavbarPosition {
        let position = if scroll_top > self.last_scroll_top && scroll_top > config::NAVBAR_HIDE_OFFSET {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_scroll_top = scroll_top;
        position
    }
}
