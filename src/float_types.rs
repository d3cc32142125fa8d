// Our Real scalar type:
pub type Real = f64;

/// Tolerance used across the crate for plane classification and
/// degenerate-geometry checks.
pub const EPSILON: Real = 1e-6;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
