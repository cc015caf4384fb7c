// crates/thumbview-layout/src/constraints.rs
use glam::DVec2;
use thumbview_core::Bounds;

/// Real-valued min/max envelope used while scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintBox {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl From<Bounds> for ConstraintBox {
    fn from(bounds: Bounds) -> Self {
        Self {
            min_width: bounds.min_width as f64,
            max_width: bounds.max_width as f64,
            min_height: bounds.min_height as f64,
            max_height: bounds.max_height as f64,
        }
    }
}

/// Per-axis ratios of a size against its envelope. A ratio above 1 means
/// the size is larger than the limit it was divided by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRatios {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl BoundRatios {
    pub fn overflows(&self) -> bool {
        self.max_width > 1.0 || self.max_height > 1.0
    }

    pub fn underflows(&self) -> bool {
        self.min_width < 1.0 || self.min_height < 1.0
    }

    /// Larger of the two max ratios; width wins ties.
    pub fn overflow_divisor(&self) -> f64 {
        if self.max_width >= self.max_height {
            self.max_width
        } else {
            self.max_height
        }
    }

    /// Smaller of the two min ratios; width wins ties.
    pub fn underflow_divisor(&self) -> f64 {
        if self.min_width <= self.min_height {
            self.min_width
        } else {
            self.min_height
        }
    }
}

impl ConstraintBox {
    pub fn contains_width(&self, width: f64) -> bool {
        width >= self.min_width && width <= self.max_width
    }

    pub fn contains_height(&self, height: f64) -> bool {
        height >= self.min_height && height <= self.max_height
    }

    pub fn contains(&self, size: DVec2) -> bool {
        self.contains_width(size.x) && self.contains_height(size.y)
    }

    pub fn ratios(&self, size: DVec2) -> BoundRatios {
        BoundRatios {
            min_width: size.x / self.min_width,
            max_width: size.x / self.max_width,
            min_height: size.y / self.min_height,
            max_height: size.y / self.max_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let constraints = ConstraintBox::from(Bounds::new(100, 200, 50, 150));
        assert!(constraints.contains(DVec2::new(100.0, 150.0)));
        assert!(constraints.contains(DVec2::new(200.0, 50.0)));
        assert!(!constraints.contains(DVec2::new(99.0, 100.0)));
        assert!(!constraints.contains(DVec2::new(150.0, 151.0)));
    }

    #[test]
    fn test_ratios() {
        let constraints = ConstraintBox::from(Bounds::new(100, 100, 50, 50));
        let ratios = constraints.ratios(DVec2::new(200.0, 25.0));
        assert_eq!(ratios.max_width, 2.0);
        assert_eq!(ratios.min_height, 0.5);
        assert!(ratios.overflows());
        assert!(ratios.underflows());
    }

    #[test]
    fn test_divisor_selection() {
        let ratios = BoundRatios {
            min_width: 0.8,
            max_width: 2.0,
            min_height: 0.4,
            max_height: 4.0,
        };
        assert_eq!(ratios.overflow_divisor(), 4.0);
        assert_eq!(ratios.underflow_divisor(), 0.4);

        let ratios = BoundRatios {
            min_width: 0.3,
            max_width: 5.0,
            min_height: 0.6,
            max_height: 2.5,
        };
        assert_eq!(ratios.overflow_divisor(), 5.0);
        assert_eq!(ratios.underflow_divisor(), 0.3);
    }
}
