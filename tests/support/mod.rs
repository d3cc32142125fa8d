//! Shared helpers for integration tests

#![allow(dead_code)]

use macrodial_case::float_types::Real;
use macrodial_case::solid::Solid;

pub const EPS: Real = 1e-6;

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Assert that a solid's bounding-box size matches the expected envelope
pub fn assert_envelope(solid: &Solid, width: Real, height: Real, depth: Real) {
    let size = solid.bounding_box().size();
    assert!(
        approx_eq(size.x, width, EPS)
            && approx_eq(size.y, height, EPS)
            && approx_eq(size.z, depth, EPS),
        "envelope {:.4} x {:.4} x {:.4}, expected {width} x {height} x {depth}",
        size.x,
        size.y,
        size.z,
    );
}
