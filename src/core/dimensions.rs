// Dimension Types
// Published size values and the raw measurement they are derived from

/// Raw bounding box reported by a measurable element
///
/// Values come straight from the platform and may be zero when the element
/// has not been laid out yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    /// Measured width (may be 0.0 before first layout)
    pub width: f64,
    /// Measured height (may be 0.0 before first layout)
    pub height: f64,
}

impl ElementBox {
    /// Create a raw bounding box
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Published dimensions handed to the owner on each emission
///
/// Invariants: height never goes below the configured floor, width falls
/// back to the configured default when the raw measurement is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Published width (>= 0)
    pub width: f64,
    /// Published height (>= configured floor)
    pub height: f64,
}

impl Dimensions {
    /// Starting dimensions before the first real measurement
    pub fn initial(default_width: f64, min_height: f64) -> Self {
        Self {
            width: default_width,
            height: min_height,
        }
    }

    /// Clamp a raw measurement into publishable dimensions
    ///
    /// A zero width falls back to `default_width`; height is floored at
    /// `min_height` (a zero height first falls back to the floor itself).
    pub fn clamped(raw: ElementBox, default_width: f64, min_height: f64) -> Self {
        let width = if raw.width > 0.0 {
            raw.width
        } else {
            default_width
        };
        let height = if raw.height > 0.0 {
            raw.height.max(min_height)
        } else {
            min_height
        };
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_WIDTH: f64 = 300.0;
    const MIN_HEIGHT: f64 = 60.0;

    #[test]
    fn test_initial_defaults() {
        let dims = Dimensions::initial(DEFAULT_WIDTH, MIN_HEIGHT);
        assert_eq!(dims.width, 300.0);
        assert_eq!(dims.height, 60.0);
    }

    #[test]
    fn test_clamp_passes_through_normal_box() {
        let dims = Dimensions::clamped(ElementBox::new(800.0, 400.0), DEFAULT_WIDTH, MIN_HEIGHT);
        assert_eq!(dims.width, 800.0);
        assert_eq!(dims.height, 400.0);
    }

    #[test]
    fn test_clamp_applies_height_floor() {
        let dims = Dimensions::clamped(ElementBox::new(500.0, 40.0), DEFAULT_WIDTH, MIN_HEIGHT);
        assert_eq!(dims.width, 500.0);
        assert_eq!(dims.height, 60.0);
    }

    #[test]
    fn test_clamp_defaults_zero_box() {
        // Element unmounted mid-measure reports a zero box
        let dims = Dimensions::clamped(ElementBox::new(0.0, 0.0), DEFAULT_WIDTH, MIN_HEIGHT);
        assert_eq!(dims.width, 300.0);
        assert_eq!(dims.height, 60.0);
    }

    #[test]
    fn test_clamp_zero_width_only() {
        let dims = Dimensions::clamped(ElementBox::new(0.0, 120.0), DEFAULT_WIDTH, MIN_HEIGHT);
        assert_eq!(dims.width, 300.0);
        assert_eq!(dims.height, 120.0);
    }
}
