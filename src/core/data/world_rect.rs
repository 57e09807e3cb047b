use crate::core::data::world_point::WorldPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WorldRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for WorldRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "world rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for WorldRectError {}

/// Axis-aligned region of the mathematical plane, `min` is the bottom-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldRect {
    min: WorldPoint,
    max: WorldPoint,
}

impl WorldRect {
    pub fn new(min: WorldPoint, max: WorldPoint) -> Result<Self, WorldRectError> {
        let width = max.x - min.x;
        let height = max.y - min.y;

        // NaN fails both comparisons, so test for the valid case
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(WorldRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> WorldPoint {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> WorldPoint {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn contains_point(&self, point: WorldPoint) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && self.max.x >= point.x
            && self.max.y >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_rect_new_valid() {
        let min = WorldPoint::new(-2.0, -1.0);
        let max = WorldPoint::new(5.0, 6.0);

        let rect = WorldRect::new(min, max).unwrap();

        assert_eq!(rect.min(), min);
        assert_eq!(rect.max(), max);
        assert_eq!(rect.width(), 7.0);
        assert_eq!(rect.height(), 7.0);
    }

    #[test]
    fn test_world_rect_dimensions_must_be_positive() {
        let zero_width = WorldRect::new(WorldPoint::new(1.0, 0.0), WorldPoint::new(1.0, 4.0));
        let negative_height = WorldRect::new(WorldPoint::new(0.0, 0.0), WorldPoint::new(4.0, -3.0));

        assert_eq!(
            zero_width,
            Err(WorldRectError::InvalidSize {
                width: 0.0,
                height: 4.0
            })
        );
        assert_eq!(
            negative_height,
            Err(WorldRectError::InvalidSize {
                width: 4.0,
                height: -3.0
            })
        );
    }

    #[test]
    fn test_world_rect_rejects_non_finite_corners() {
        let nan = WorldRect::new(WorldPoint::new(f64::NAN, 0.0), WorldPoint::new(1.0, 1.0));
        let infinite = WorldRect::new(
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(f64::INFINITY, 1.0),
        );

        assert!(nan.is_err());
        assert!(infinite.is_err());
    }

    #[test]
    fn test_world_rect_contains_point() {
        let rect = WorldRect::new(WorldPoint::new(-8.0, -4.0), WorldPoint::new(8.0, 4.0)).unwrap();

        assert!(rect.contains_point(WorldPoint::new(0.0, 0.0)));
        assert!(rect.contains_point(WorldPoint::new(-8.0, 4.0)));
        assert!(!rect.contains_point(WorldPoint::new(8.1, 0.0)));
        assert!(!rect.contains_point(WorldPoint::new(0.0, -4.1)));
    }
}
