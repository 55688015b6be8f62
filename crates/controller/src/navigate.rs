/// Fragment identifier of a same-page link (`"#work"` → `"work"`).
///
/// Returns `None` for external destinations and for a bare `"#"`.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Absolute scroll destination for a smooth-scroll jump.
///
/// `bounding_top_px` is the target's viewport-relative top; adding the page
/// offset makes it absolute, and the header compensation keeps the section
/// from landing hidden under the fixed header.
pub fn scroll_target_y(bounding_top_px: f64, page_y_offset: f64, header_offset_px: f64) -> f64 {
    bounding_top_px + page_y_offset - header_offset_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve() {
        assert_eq!(fragment_id("#work"), Some("work"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("https://example.test/page"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn destination_compensates_for_the_fixed_header() {
        // Target renders 350px below the viewport top while scrolled to 1000.
        assert_eq!(scroll_target_y(350.0, 1000.0, 100.0), 1250.0);
    }

    #[test]
    fn destination_above_current_scroll() {
        assert_eq!(scroll_target_y(-600.0, 1000.0, 100.0), 300.0);
    }
}
