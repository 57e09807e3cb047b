use crate::core::data::colour::Rgba;

/// On/off lengths, in pixels, of a dashed stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub colour: Rgba,
    pub width: f64,
    pub dash: Option<Dash>,
}

impl Stroke {
    #[must_use]
    pub fn solid(colour: impl Into<Rgba>, width: f64) -> Self {
        Self {
            colour: colour.into(),
            width,
            dash: None,
        }
    }

    #[must_use]
    pub fn dashed(self, on: f64, off: f64) -> Self {
        Self {
            dash: Some(Dash { on, off }),
            ..self
        }
    }
}
