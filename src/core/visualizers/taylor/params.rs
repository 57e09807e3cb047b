use crate::core::visualizers::taylor::errors::TaylorError;
use crate::core::visualizers::taylor::function_family::FunctionFamily;

pub const DEFAULT_DEGREE: u32 = 1;
pub const DEFAULT_CENTER: f64 = 0.0;
pub const MAX_DEGREE: u32 = 64;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaylorParams {
    degree: u32,
    center: f64,
    family: FunctionFamily,
}

impl Default for TaylorParams {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            center: DEFAULT_CENTER,
            family: FunctionFamily::default(),
        }
    }
}

fn validate_degree(degree: u32) -> Result<(), TaylorError> {
    if degree > MAX_DEGREE {
        return Err(TaylorError::DegreeTooLarge {
            degree,
            max: MAX_DEGREE,
        });
    }

    Ok(())
}

fn validate_center(center: f64) -> Result<(), TaylorError> {
    if !center.is_finite() {
        return Err(TaylorError::NonFiniteCenter { center });
    }

    Ok(())
}

impl TaylorParams {
    pub fn new(degree: u32, center: f64, family: FunctionFamily) -> Result<Self, TaylorError> {
        validate_degree(degree)?;
        validate_center(center)?;

        Ok(Self {
            degree,
            center,
            family,
        })
    }

    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[must_use]
    pub fn family(&self) -> FunctionFamily {
        self.family
    }

    pub fn set_degree(&mut self, degree: u32) -> Result<(), TaylorError> {
        validate_degree(degree)?;
        self.degree = degree;
        Ok(())
    }

    pub fn set_center(&mut self, center: f64) -> Result<(), TaylorError> {
        validate_center(center)?;
        self.center = center;
        Ok(())
    }

    pub fn set_family(&mut self, family: FunctionFamily) {
        self.family = family;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_controls() {
        let params = TaylorParams::default();

        assert_eq!(params.degree(), 1);
        assert_eq!(params.center(), 0.0);
        assert_eq!(params.family(), FunctionFamily::Sin);
    }

    #[test]
    fn test_new_validates_degree_and_center() {
        assert_eq!(
            TaylorParams::new(65, 0.0, FunctionFamily::Exp),
            Err(TaylorError::DegreeTooLarge { degree: 65, max: 64 })
        );
        assert!(matches!(
            TaylorParams::new(3, f64::NAN, FunctionFamily::Cos),
            Err(TaylorError::NonFiniteCenter { .. })
        ));
        assert!(TaylorParams::new(0, -8.0, FunctionFamily::Cos).is_ok());
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut params = TaylorParams::default();

        assert!(params.set_degree(1000).is_err());
        assert!(params.set_center(f64::NEG_INFINITY).is_err());
        params.set_family(FunctionFamily::Exp);

        assert_eq!(params.degree(), DEFAULT_DEGREE);
        assert_eq!(params.center(), DEFAULT_CENTER);
        assert_eq!(params.family(), FunctionFamily::Exp);
    }
}
