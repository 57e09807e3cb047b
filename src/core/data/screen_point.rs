/// Sub-pixel position on a drawing surface. `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixels. `width` and `height` may be negative,
/// in which case the rect extends left of / above its origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect spanning two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self::new(a.x, a.y, b.x - a.x, b.y - a.y).normalized()
    }

    /// Same rect with non-negative `width` and `height`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };

        Self::new(x, y, width, height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_flips_negative_extent() {
        let rect = ScreenRect::new(10.0, 20.0, -4.0, -6.0).normalized();

        assert_eq!(rect, ScreenRect::new(6.0, 14.0, 4.0, 6.0));
    }

    #[test]
    fn test_from_corners_order_independent() {
        let a = ScreenPoint::new(1.0, 9.0);
        let b = ScreenPoint::new(5.0, 2.0);

        assert_eq!(ScreenRect::from_corners(a, b), ScreenRect::from_corners(b, a));
        assert_eq!(ScreenRect::from_corners(a, b), ScreenRect::new(1.0, 2.0, 4.0, 7.0));
    }
}
