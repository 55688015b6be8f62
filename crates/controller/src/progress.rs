/// Scroll progress through the document as a percentage in [0, 100].
///
/// The scrollable track is `scroll_height - viewport_height`, clamped to at
/// least 1px so a document that cannot scroll yields 0 instead of NaN.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let track = (scroll_height - viewport_height).max(1.0);
    (scroll_y / track * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midway_through_a_scrollable_document() {
        // 2000px tall, 800px viewport, scrolled 600 of the 1200px track.
        assert_eq!(progress_percent(600.0, 2000.0, 800.0), 50.0);
    }

    #[test]
    fn ends_of_the_track() {
        assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn non_scrollable_document_yields_zero() {
        let percent = progress_percent(0.0, 800.0, 800.0);
        assert!(percent.is_finite());
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        // Rubber-band overscroll can report offsets past the track.
        assert_eq!(progress_percent(1500.0, 2000.0, 800.0), 100.0);
        assert_eq!(progress_percent(-60.0, 2000.0, 800.0), 0.0);
    }
}
