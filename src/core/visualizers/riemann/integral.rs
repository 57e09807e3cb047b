//! The integrated function, its closed-form antiderivative and the Riemann sum.

use std::fmt;

use crate::core::visualizers::riemann::sampling_rule::SamplingRule;

pub const LOWER_BOUND: f64 = 0.0;
pub const UPPER_BOUND: f64 = 4.0;

/// `f(x) = 0.1x³ − 0.5x² + 2`
#[must_use]
pub fn curve(x: f64) -> f64 {
    0.1 * x.powi(3) - 0.5 * x.powi(2) + 2.0
}

/// `F(x) = 0.025x⁴ − x³/6 + 2x`, so that `F' = curve`.
#[must_use]
pub fn antiderivative(x: f64) -> f64 {
    0.025 * x.powi(4) - x.powi(3) / 6.0 + 2.0 * x
}

/// One rectangle of a Riemann sum: `[left, right]` with height `f(sample)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Subinterval {
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

/// Splits `[a, b]` into `n` equal subintervals and samples `f` in each per `rule`.
///
/// Endpoints are computed as `a + i * dx` rather than accumulated, so the last
/// right edge is `b` up to one rounding.
pub fn subintervals<F>(f: F, a: f64, b: f64, n: u32, rule: SamplingRule) -> Vec<Subinterval>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Vec::new();
    }

    let dx = (b - a) / n as f64;

    (0..n)
        .map(|i| {
            let left = a + i as f64 * dx;
            let right = a + (i + 1) as f64 * dx;

            Subinterval {
                left,
                right,
                height: f(rule.sample_point(left, right)),
            }
        })
        .collect()
}

/// `Σ f(sample_i) · dx`; zero when `n == 0`.
pub fn riemann_sum<F>(f: F, a: f64, b: f64, n: u32, rule: SamplingRule) -> f64
where
    F: Fn(f64) -> f64,
{
    area(&subintervals(f, a, b, n, rule))
}

fn area(parts: &[Subinterval]) -> f64 {
    parts
        .iter()
        .map(|part| part.height * (part.right - part.left))
        .sum()
}

/// Exact and approximate areas under `curve` over `[LOWER_BOUND, UPPER_BOUND]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RiemannSummary {
    pub actual: f64,
    pub approx: f64,
    pub error: f64,
}

impl RiemannSummary {
    #[must_use]
    pub fn from_parts(parts: &[Subinterval]) -> Self {
        let actual = antiderivative(UPPER_BOUND) - antiderivative(LOWER_BOUND);
        let approx = area(parts);

        Self {
            actual,
            approx,
            error: (actual - approx).abs(),
        }
    }

    #[must_use]
    pub fn compute(n: u32, rule: SamplingRule) -> Self {
        Self::from_parts(&subintervals(curve, LOWER_BOUND, UPPER_BOUND, n, rule))
    }
}

impl fmt::Display for RiemannSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "actual area = {:.4}, approx area = {:.4}, error = {:.4}",
            self.actual, self.approx, self.error
        )
    }
}
