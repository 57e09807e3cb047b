use std::f64::consts::PI;

/// Number of terms in the partial sum. Past this the curve no longer changes visibly.
pub const TERMS: u32 = 100;

/// Partial sum `Σ_{n<TERMS} aⁿ · cos(bⁿ · π · x)` of the Weierstrass function.
///
/// Stops early once `aⁿ` underflows to zero or `bⁿ · π · x` stops being finite; later
/// terms could only contribute zero or NaN.
#[must_use]
pub fn weierstrass(a: f64, b: f64, x: f64) -> f64 {
    let mut sum: f64 = 0.0;
    let mut weight: f64 = 1.0;
    let mut frequency: f64 = 1.0;

    for _ in 0..TERMS {
        let phase = frequency * PI * x;
        if weight == 0.0 || !phase.is_finite() {
            break;
        }

        sum += weight * phase.cos();
        weight *= a;
        frequency *= b;
    }

    sum
}

/// Upper bound `1 / (1 - a)` of `|weierstrass(a, b, x)|` for `0 < a < 1`.
#[must_use]
pub fn geometric_bound(a: f64) -> f64 {
    1.0 / (1.0 - a)
}
