//! Floating-point tolerance helpers (spec §9: "all ≥/≤ on rates use a
//! small relative epsilon"). Time comparisons stay strict and do not use
//! these helpers.

/// Relative epsilon used for rate comparisons throughout the crate.
pub const EPSILON: f64 = 1e-9;

/// `a >= b`, tolerant of floating-point noise on the order of `EPSILON`
/// relative to the larger magnitude of the two operands.
pub fn ge_tolerant(a: f64, b: f64) -> bool {
    a >= b - EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// `a <= b`, tolerant of floating-point noise on the order of `EPSILON`
/// relative to the larger magnitude of the two operands.
pub fn le_tolerant(a: f64, b: f64) -> bool {
    ge_tolerant(b, a)
}
