use crate::core::visualizers::taylor::function_family::FunctionFamily;

/// Samples whose polynomial value exceeds this in magnitude are not drawn.
pub const PLOT_LIMIT: f64 = 100.0;

/// `P_n(x) = Σ_{k=0}^{n} f⁽ᵏ⁾(c) / k! · (x − c)ᵏ`.
///
/// `(x − c)ᵏ / k!` is carried as a running product, so neither factor is formed on its own.
#[must_use]
pub fn taylor_polynomial(family: FunctionFamily, degree: u32, center: f64, x: f64) -> f64 {
    let offset = x - center;
    let mut power_over_factorial = 1.0;
    let mut sum = family.derivative(0, center);

    for k in 1..=degree {
        power_over_factorial *= offset / k as f64;
        sum += family.derivative(k, center) * power_over_factorial;
    }

    sum
}

#[must_use]
pub fn is_plottable(value: f64) -> bool {
    value.abs() <= PLOT_LIMIT
}
