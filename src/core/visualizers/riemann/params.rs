use crate::core::visualizers::riemann::errors::RiemannError;
use crate::core::visualizers::riemann::sampling_rule::SamplingRule;

pub const DEFAULT_SUBDIVISIONS: u32 = 10;
/// Above this the rectangles are thinner than a pixel on any practical surface.
pub const MAX_SUBDIVISIONS: u32 = 10_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RiemannParams {
    subdivisions: u32,
    rule: SamplingRule,
}

impl Default for RiemannParams {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            rule: SamplingRule::default(),
        }
    }
}

fn validate_subdivisions(n: u32) -> Result<(), RiemannError> {
    if n == 0 {
        return Err(RiemannError::ZeroSubdivisions);
    }

    if n > MAX_SUBDIVISIONS {
        return Err(RiemannError::TooManySubdivisions {
            n,
            max: MAX_SUBDIVISIONS,
        });
    }

    Ok(())
}

impl RiemannParams {
    pub fn new(subdivisions: u32, rule: SamplingRule) -> Result<Self, RiemannError> {
        validate_subdivisions(subdivisions)?;

        Ok(Self { subdivisions, rule })
    }

    #[must_use]
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    #[must_use]
    pub fn rule(&self) -> SamplingRule {
        self.rule
    }

    pub fn set_subdivisions(&mut self, n: u32) -> Result<(), RiemannError> {
        validate_subdivisions(n)?;
        self.subdivisions = n;
        Ok(())
    }

    pub fn set_rule(&mut self, rule: SamplingRule) {
        self.rule = rule;
    }
}
