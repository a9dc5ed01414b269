use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

/// Selector of the in-page target of an anchor href, if it has one.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Some(href),
        _ => None,
    }
}

pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Smoothly scrolls the element matching `selector` to the top of the
/// viewport. Returns false when nothing matched.
pub fn scroll_to(selector: &str) -> bool {
    let Some(document) = dom::document() else {
        return false;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let mut options = ScrollIntoViewOptions::new();
            options
                .behavior(ScrollBehavior::Smooth)
                .block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        Ok(None) => {
            log::debug!("No element for anchor {}", selector);
            false
        }
        Err(_) => {
            log::warn!("Invalid anchor selector {}", selector);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_fragments_have_targets() {
        assert_eq!(anchor_target("#features"), Some("#features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#two words"), None);
        assert_eq!(anchor_target("/pricing#plans"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn in_page_detection() {
        assert!(is_in_page("#"));
        assert!(is_in_page("#signup"));
        assert!(!is_in_page("/blog"));
    }
}
