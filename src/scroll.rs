use wasm_bindgen::JsValue;
use web_sys::{window, Element, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Only `#id`-style hrefs with something after the hash are in-page targets.
pub fn in_page_selector(href: &str) -> Option<&str> {
    if href.len() < 2 || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Document-relative scroll position that puts the target just below the
/// fixed header.
pub fn scroll_target_top(target_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    target_top + page_y_offset - (header_height + config::HEADER_GAP_PX)
}

/// Element an in-page href points at. An href that is not a valid selector
/// is treated like a missing target.
pub fn resolve_anchor(href: &str) -> Option<Element> {
    let selector = in_page_selector(href)?;
    let document = window()?.document()?;
    document.query_selector(selector).ok().flatten()
}

/// Smoothly scrolls so `target` sits just below the fixed header. Fire and
/// forget: the animation is left to the browser.
pub fn scroll_to_element(target: &Element) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let header_height = window
        .document()
        .and_then(|d| d.query_selector(config::HEADER_SELECTOR).ok().flatten())
        .map(|header| header.get_bounding_client_rect().height())
        .unwrap_or(0.0);
    let top = scroll_target_top(
        target.get_bounding_client_rect().top(),
        window.page_y_offset()?,
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_a_target() {
        assert_eq!(in_page_selector("#"), None);
        assert_eq!(in_page_selector(""), None);
        assert_eq!(in_page_selector("/pricing"), None);
        assert_eq!(in_page_selector("#programs"), Some("#programs"));
    }

    #[test]
    fn offset_accounts_for_header_and_gap() {
        assert_eq!(scroll_target_top(400.0, 1200.0, 72.0), 1518.0);
    }

    #[test]
    fn missing_header_keeps_gap_only() {
        assert_eq!(scroll_target_top(300.0, 0.0, 0.0), 290.0);
    }
}
