//! Integrand and midpoint evaluation.
//!
//! The estimator integrates f(x) = 4/(1+x²) over [0,1]; the antiderivative
//! is 4·arctan(x), so the exact integral is π. Each subinterval contributes
//! the integrand evaluated at its midpoint.

/// Evaluates the integrand f(x) = 4 / (1 + x²).
#[inline]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Returns the midpoint of the `i`-th subinterval of width `step`.
///
/// The midpoint is `(i + 0.5) * step`; for `step = 1/N` the midpoints of
/// all `i` in `[0, N)` tile the open interval (0, 1).
#[inline]
pub fn midpoint(i: u64, step: f64) -> f64 {
    (i as f64 + 0.5) * step
}

/// Evaluates the integrand at the midpoint of the `i`-th subinterval.
#[inline]
pub fn midpoint_term(i: u64, step: f64) -> f64 {
    integrand(midpoint(i, step))
}
