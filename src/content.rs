//! Static copy for the landing page.

use crate::components::screenshot_carousel::Slide;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub struct Preview {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const APP_NAME: &str = "Launchpad";

pub const HERO_TITLE: &str = "Your Day, Organized in One App";
pub const HERO_SUBTITLE: &str =
    "Plan tasks, track habits and keep notes in sync across every device. Launching soon.";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "flash-outline",
        title: "Fast by Default",
        body: "Opens instantly and stays out of your way while you work.",
    },
    Feature {
        icon: "sync-outline",
        title: "Syncs Everywhere",
        body: "Start on your phone, finish on your laptop. Changes follow you.",
    },
    Feature {
        icon: "lock-closed-outline",
        title: "Private",
        body: "Your data stays yours. No ads and no tracking.",
    },
    Feature {
        icon: "cloud-offline-outline",
        title: "Works Offline",
        body: "Keep going without a connection and catch up when you are back online.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "It replaced three apps on my home screen.",
        author: "Mia, designer",
    },
    Testimonial {
        quote: "The weekly overview keeps my whole team on track.",
        author: "Jonas, project lead",
    },
    Testimonial {
        quote: "Simple enough that I actually use it every day.",
        author: "Priya, nurse",
    },
];

pub const PREVIEWS: &[Preview] = &[
    Preview { src: "/assets/preview-today.png", alt: "Today view on a phone" },
    Preview { src: "/assets/preview-habits.png", alt: "Habit tracker on a phone" },
    Preview { src: "/assets/preview-notes.png", alt: "Notes list on a phone" },
];

const SCREENSHOTS: &[(&str, &str, &str)] = &[
    ("/assets/screenshot-today.png", "Today view", "See everything due today at a glance"),
    ("/assets/screenshot-habits.png", "Habit tracker", "Build streaks that stick"),
    ("/assets/screenshot-notes.png", "Notes", "Capture ideas and find them again"),
];

pub fn screenshots() -> Vec<Slide> {
    SCREENSHOTS
        .iter()
        .map(|&(src, alt, caption)| Slide {
            src: src.into(),
            alt: alt.into(),
            caption: caption.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screenshot_slides_follow_table_order() {
        let slides = screenshots();
        assert_eq!(slides.len(), SCREENSHOTS.len());
        assert_eq!(slides[0].alt, "Today view");
        assert!(slides.iter().all(|s| s.src.starts_with("/assets/")));
    }

    #[test]
    fn copy_is_filled_in() {
        assert!(!APP_NAME.is_empty());
        assert!(HERO_SUBTITLE.contains("Launching soon"));
        assert!(FEATURES.iter().all(|f| !f.icon.is_empty() && !f.title.is_empty()));
        assert!(TESTIMONIALS.iter().all(|t| !t.author.is_empty()));
    }
}
