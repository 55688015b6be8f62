use serde::Deserialize;

/// Speed ramp for the decorative shapes.
///
/// Shape `i` drifts at `base_speed + i * speed_increment` times the scroll
/// offset, so successive shapes trail at different rates and the stack reads
/// as layered depth. Below `min_viewport_width_px` the effect is disabled
/// outright and no scroll listener is registered for it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxProfile {
    pub base_speed: f64,
    pub speed_increment: f64,
    pub min_viewport_width_px: f64,
}

impl Default for ParallaxProfile {
    fn default() -> Self {
        Self {
            base_speed: 0.3,
            speed_increment: 0.1,
            min_viewport_width_px: 768.0,
        }
    }
}

impl ParallaxProfile {
    pub fn speed_for(&self, index: usize) -> f64 {
        self.base_speed + index as f64 * self.speed_increment
    }

    /// Vertical translation for shape `index` at the given scroll offset.
    /// Negative: shapes drift up as the page scrolls down.
    pub fn offset_y(&self, scroll_y: f64, index: usize) -> f64 {
        -(scroll_y * self.speed_for(index))
    }

    /// Width gate, evaluated once at load and re-evaluated on resize.
    pub fn enabled(&self, viewport_width_px: f64) -> bool {
        viewport_width_px >= self.min_viewport_width_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_ramps_by_index() {
        let profile = ParallaxProfile::default();
        assert_eq!(profile.speed_for(0), 0.3);
        assert_eq!(profile.speed_for(1), 0.4);
        assert_eq!(profile.speed_for(4), 0.7);
    }

    #[test]
    fn offset_opposes_scroll_direction() {
        let profile = ParallaxProfile::default();
        assert_eq!(profile.offset_y(1000.0, 0), -300.0);
        assert_eq!(profile.offset_y(1000.0, 2), -500.0);
        assert_eq!(profile.offset_y(0.0, 3), 0.0);
    }

    #[test]
    fn gate_is_strict_below_the_minimum_width() {
        let profile = ParallaxProfile::default();
        assert!(!profile.enabled(767.9));
        assert!(profile.enabled(768.0));
        assert!(profile.enabled(1920.0));
    }
}
