use crate::core::visualizers::epsilon_delta::errors::EpsilonDeltaError;

pub const DEFAULT_C: f64 = 2.0;
pub const DEFAULT_EPSILON: f64 = 0.5;
pub const DEFAULT_DELTA: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EpsilonDeltaParams {
    c: f64,
    epsilon: f64,
    delta: f64,
}

impl Default for EpsilonDeltaParams {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            epsilon: DEFAULT_EPSILON,
            delta: DEFAULT_DELTA,
        }
    }
}

fn validate_c(c: f64) -> Result<(), EpsilonDeltaError> {
    if !c.is_finite() {
        return Err(EpsilonDeltaError::NonFiniteCenter { c });
    }

    Ok(())
}

fn validate_epsilon(epsilon: f64) -> Result<(), EpsilonDeltaError> {
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(EpsilonDeltaError::NonPositiveEpsilon { epsilon });
    }

    Ok(())
}

fn validate_delta(delta: f64) -> Result<(), EpsilonDeltaError> {
    if !(delta > 0.0 && delta.is_finite()) {
        return Err(EpsilonDeltaError::NonPositiveDelta { delta });
    }

    Ok(())
}

impl EpsilonDeltaParams {
    pub fn new(c: f64, epsilon: f64, delta: f64) -> Result<Self, EpsilonDeltaError> {
        validate_c(c)?;
        validate_epsilon(epsilon)?;
        validate_delta(delta)?;

        Ok(Self { c, epsilon, delta })
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn set_c(&mut self, c: f64) -> Result<(), EpsilonDeltaError> {
        validate_c(c)?;
        self.c = c;
        Ok(())
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), EpsilonDeltaError> {
        validate_epsilon(epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }

    pub fn set_delta(&mut self, delta: f64) -> Result<(), EpsilonDeltaError> {
        validate_delta(delta)?;
        self.delta = delta;
        Ok(())
    }
}
