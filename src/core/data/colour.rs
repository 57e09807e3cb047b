/// Opaque 8-bit RGB colour, the storage format of `PixelBuffer`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn opaque(self) -> Rgba {
        Rgba {
            colour: self,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            colour: self,
            alpha,
        }
    }
}

/// RGB colour with a straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub colour: Colour,
    pub alpha: f32,
}

impl Rgba {
    /// Composites this colour over `dst` with the given extra coverage factor.
    #[must_use]
    pub fn over(self, dst: Colour, coverage: f32) -> Colour {
        let a = (self.alpha * coverage).clamp(0.0, 1.0);

        if a >= 1.0 {
            return self.colour;
        }

        let mix = |src: u8, dst: u8| -> u8 {
            (src as f32 * a + dst as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8
        };

        Colour {
            r: mix(self.colour.r, dst.r),
            g: mix(self.colour.g, dst.g),
            b: mix(self.colour.b, dst.b),
        }
    }
}

impl From<Colour> for Rgba {
    fn from(colour: Colour) -> Self {
        colour.opaque()
    }
}
