use crate::core::visualizers::weierstrass::errors::WeierstrassError;

pub const DEFAULT_A: f64 = 0.5;
pub const DEFAULT_B: u32 = 7;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 1000.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeierstrassParams {
    a: f64,
    b: u32,
    zoom: f64,
    pan_offset: f64,
}

impl Default for WeierstrassParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            zoom: DEFAULT_ZOOM,
            pan_offset: 0.0,
        }
    }
}

fn validate_a(a: f64) -> Result<(), WeierstrassError> {
    if !(a > 0.0 && a < 1.0) {
        return Err(WeierstrassError::AmplitudeOutOfRange { a });
    }

    Ok(())
}

fn validate_b(b: u32) -> Result<(), WeierstrassError> {
    if b == 0 {
        return Err(WeierstrassError::ZeroFrequency);
    }

    Ok(())
}

impl WeierstrassParams {
    pub fn new(a: f64, b: u32) -> Result<Self, WeierstrassError> {
        validate_a(a)?;
        validate_b(b)?;

        Ok(Self {
            a,
            b,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// World x shown at the horizontal centre of the surface.
    #[must_use]
    pub fn pan_offset(&self) -> f64 {
        self.pan_offset
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), WeierstrassError> {
        validate_a(a)?;
        self.a = a;
        Ok(())
    }

    pub fn set_b(&mut self, b: u32) -> Result<(), WeierstrassError> {
        validate_b(b)?;
        self.b = b;
        Ok(())
    }

    /// Sets the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns the value actually stored.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let clamped = if zoom.is_nan() {
            self.zoom
        } else {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };

        if clamped != zoom {
            log::warn!("zoom {} clamped to {}", zoom, clamped);
        }

        self.zoom = clamped;
        clamped
    }

    /// Multiplies the zoom by `factor`, keeping it within range.
    pub fn zoom_by(&mut self, factor: f64) -> f64 {
        if !(factor > 0.0) || !factor.is_finite() {
            return self.zoom;
        }

        self.set_zoom(self.zoom * factor)
    }

    /// Shifts the view by a world distance. Non-finite shifts are dropped.
    pub fn pan_by(&mut self, world_dx: f64) {
        let next = self.pan_offset + world_dx;

        if next.is_finite() {
            self.pan_offset = next;
        }
    }

    pub fn reset_view(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.pan_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_controls() {
        let params = WeierstrassParams::default();

        assert_eq!(params.a(), 0.5);
        assert_eq!(params.b(), 7);
        assert_eq!(params.zoom(), 1.0);
        assert_eq!(params.pan_offset(), 0.0);
    }

    #[test]
    fn test_new_validates_amplitude_and_frequency() {
        assert_eq!(
            WeierstrassParams::new(1.0, 3),
            Err(WeierstrassError::AmplitudeOutOfRange { a: 1.0 })
        );
        assert_eq!(
            WeierstrassParams::new(0.0, 3),
            Err(WeierstrassError::AmplitudeOutOfRange { a: 0.0 })
        );
        assert_eq!(WeierstrassParams::new(0.5, 0), Err(WeierstrassError::ZeroFrequency));
        assert!(WeierstrassParams::new(0.9, 20).is_ok());
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut params = WeierstrassParams::default();

        assert!(params.set_a(f64::NAN).is_err());
        assert!(params.set_b(0).is_err());

        assert_eq!(params.a(), DEFAULT_A);
        assert_eq!(params.b(), DEFAULT_B);
    }

    #[test]
    fn test_zoom_is_clamped_positive() {
        let mut params = WeierstrassParams::default();

        assert_eq!(params.set_zoom(0.0), MIN_ZOOM);
        assert_eq!(params.set_zoom(-4.0), MIN_ZOOM);
        assert_eq!(params.set_zoom(1e9), MAX_ZOOM);
        assert_eq!(params.set_zoom(f64::NAN), MAX_ZOOM);
        assert_eq!(params.set_zoom(3.0), 3.0);
    }

    #[test]
    fn test_zoom_by_multiplies_and_ignores_bad_factors() {
        let mut params = WeierstrassParams::default();

        assert_eq!(params.zoom_by(2.0), 2.0);
        assert_eq!(params.zoom_by(0.0), 2.0);
        assert_eq!(params.zoom_by(-1.0), 2.0);
        assert_eq!(params.zoom_by(1e6), MAX_ZOOM);
    }

    #[test]
    fn test_reset_view_keeps_shape_parameters() {
        let mut params = WeierstrassParams::new(0.7, 3).unwrap();
        params.set_zoom(12.0);
        params.pan_by(4.0);

        params.reset_view();

        assert_eq!(params.zoom(), 1.0);
        assert_eq!(params.pan_offset(), 0.0);
        assert_eq!(params.a(), 0.7);
        assert_eq!(params.b(), 3);
    }
}
