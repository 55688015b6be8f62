/// Vertical extent of one scroll-spy landmark, captured in document order.
///
/// Metrics are transient: the page owns its layout, so callers re-read
/// offsets from the DOM on every pass instead of caching a stale copy here.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkMetrics {
    /// Fragment identifier the section is addressed by (`#id`).
    pub id: String,
    /// Top offset from the document origin, in pixels.
    pub top: f64,
    /// Rendered height, in pixels.
    pub height: f64,
}

impl LandmarkMetrics {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Picks the landmark whose nav link should be flagged active.
///
/// Contract: among all landmarks whose `top - threshold_px` is at or above
/// the current scroll offset, the one appearing latest in document order
/// wins. Above the first landmark's activation point nothing is active.
pub fn active_landmark(
    scroll_y: f64,
    landmarks: &[LandmarkMetrics],
    threshold_px: f64,
) -> Option<usize> {
    let mut active = None;
    for (index, landmark) in landmarks.iter().enumerate() {
        if scroll_y >= landmark.top - threshold_px {
            active = Some(index);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmarks() -> Vec<LandmarkMetrics> {
        vec![
            LandmarkMetrics::new("home", 0.0, 600.0),
            LandmarkMetrics::new("work", 600.0, 900.0),
            LandmarkMetrics::new("contact", 1500.0, 500.0),
        ]
    }

    #[test]
    fn nothing_active_above_first_activation_point() {
        let lm = vec![LandmarkMetrics::new("work", 600.0, 900.0)];
        assert_eq!(active_landmark(0.0, &lm, 200.0), None);
        assert_eq!(active_landmark(399.0, &lm, 200.0), None);
    }

    #[test]
    fn threshold_pulls_activation_forward() {
        let lm = landmarks();
        // "work" starts at 600; with a 200px threshold it activates at 400.
        assert_eq!(active_landmark(399.0, &lm, 200.0), Some(0));
        assert_eq!(active_landmark(400.0, &lm, 200.0), Some(1));
    }

    #[test]
    fn latest_matching_landmark_wins() {
        let lm = landmarks();
        assert_eq!(active_landmark(5000.0, &lm, 200.0), Some(2));
    }

    #[test]
    fn empty_landmark_list_is_a_no_op() {
        assert_eq!(active_landmark(500.0, &[], 200.0), None);
    }
}
