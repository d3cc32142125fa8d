//! Geometry kernel behavior: primitives, Boolean operations, transforms,
//! swept tubes and STL output.

mod support;

use macrodial_case::errors::ValidationError;
use macrodial_case::solid::Solid;
use nalgebra::Point3;
use support::{EPS, approx_eq, assert_envelope};

#[test]
fn cuboid_envelope_and_watertightness() {
    let solid = Solid::cuboid(2.0, 3.0, 4.0);
    assert_envelope(&solid, 2.0, 3.0, 4.0);
    assert_eq!(solid.polygons.len(), 6);
    assert!(solid.is_watertight());
}

#[test]
fn sphere_is_watertight() {
    let solid = Solid::sphere(5.0, 12, 6);
    assert!(solid.is_watertight());
    assert_envelope(&solid, 10.0, 10.0, 10.0);
}

#[test]
fn cylinder_envelope() {
    let solid = Solid::cylinder(3.0, 7.0, 32);
    let bb = solid.bounding_box();
    // The ring touches +X exactly; other extremes are within one sagitta
    assert!(approx_eq(bb.maxs.x, 3.0, EPS));
    assert!(approx_eq(bb.mins.z, 0.0, EPS));
    assert!(approx_eq(bb.maxs.z, 7.0, EPS));
    assert!(solid.is_watertight());
}

#[test]
fn union_of_disjoint_cubes_keeps_both() {
    let a = Solid::cube(1.0);
    let b = Solid::cube(1.0).translate(5.0, 0.0, 0.0);
    let joined = a.union(&b);
    let bb = joined.bounding_box();
    assert!(approx_eq(bb.mins.x, 0.0, EPS));
    assert!(approx_eq(bb.maxs.x, 6.0, EPS));
}

#[test]
fn difference_removes_through_hole() {
    let slab = Solid::cuboid(10.0, 10.0, 2.0);
    let hole = Solid::cylinder(1.0, 4.0, 16).translate(5.0, 5.0, -1.0);
    let pierced = slab.difference(&hole);

    // Envelope is unchanged by an interior cutout
    assert_envelope(&pierced, 10.0, 10.0, 2.0);
    // The hole axis is now empty: intersecting with a thin probe there
    // yields nothing
    let probe = Solid::cuboid(0.5, 0.5, 0.5).translate(4.75, 4.75, 0.75);
    let leftovers = pierced.intersection(&probe);
    assert!(
        leftovers.polygons.is_empty() || leftovers.bounding_box().size().norm() < EPS,
        "material left inside the hole"
    );
}

#[test]
fn intersection_of_offset_cubes() {
    let a = Solid::cube(2.0);
    let b = Solid::cube(2.0).translate(1.0, 1.0, 1.0);
    let overlap = a.intersection(&b);
    let bb = overlap.bounding_box();
    assert!(approx_eq(bb.mins.x, 1.0, EPS));
    assert!(approx_eq(bb.maxs.x, 2.0, EPS));
    assert!(approx_eq(bb.size().norm(), 3.0_f64.sqrt(), 1e-4));
}

#[test]
fn translate_and_center_roundtrip() {
    let moved = Solid::cube(2.0).translate(10.0, -4.0, 3.0);
    let centered = moved.center();
    let c = centered.bounding_box().center();
    assert!(c.coords.norm() < EPS);
}

#[test]
fn float_rests_on_z_zero() {
    let solid = Solid::cube(2.0).translate(0.0, 0.0, -5.0).float();
    assert!(approx_eq(solid.bounding_box().mins.z, 0.0, EPS));
}

#[test]
fn scale_stretches_each_axis_independently() {
    let solid = Solid::cube(1.0).scale(2.0, 3.0, 4.0);
    assert_envelope(&solid, 2.0, 3.0, 4.0);
    // Normals stay axis-aligned under axis-aligned scaling
    for poly in &solid.polygons {
        let n = poly.plane.normal();
        assert!(approx_eq(n.norm(), 1.0, EPS));
        assert!(approx_eq(n.x.abs() + n.y.abs() + n.z.abs(), 1.0, EPS));
    }
}

#[test]
fn inverse_flips_every_polygon_plane() {
    let solid = Solid::cuboid(2.0, 3.0, 4.0);
    let flipped = solid.inverse();
    assert_eq!(solid.polygons.len(), flipped.polygons.len());
    for (a, b) in solid.polygons.iter().zip(flipped.polygons.iter()) {
        assert!((a.plane.normal() + b.plane.normal()).norm() < EPS);
        assert!(approx_eq(a.plane.offset(), -b.plane.offset(), EPS));
    }
}

#[test]
fn rotate_quarter_turn_swaps_extents() {
    let solid = Solid::cuboid(4.0, 1.0, 1.0).rotate(0.0, 0.0, 90.0);
    let size = solid.bounding_box().size();
    assert!(approx_eq(size.x, 1.0, EPS));
    assert!(approx_eq(size.y, 4.0, EPS));
}

#[test]
fn polyhedron_rejects_bad_face_index() {
    let pts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let faces: [&[usize]; 1] = [&[0, 1, 7]];
    let err = Solid::polyhedron(&pts, &faces).unwrap_err();
    assert_eq!(
        err,
        ValidationError::FaceIndexOutOfRange {
            face: 0,
            index: 7,
            points: 3
        }
    );
}

#[test]
fn polyhedron_rejects_degenerate_face() {
    let pts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let faces: [&[usize]; 1] = [&[0, 1]];
    assert_eq!(
        Solid::polyhedron(&pts, &faces).unwrap_err(),
        ValidationError::DegenerateFace(0)
    );
}

#[test]
fn tube_needs_two_waypoints() {
    let err = Solid::tube(&[(Point3::new(0.0, 0.0, 0.0), 1.0)], 12).unwrap_err();
    assert_eq!(err, ValidationError::DegeneratePath(1));
}

#[test]
fn straight_tube_spans_its_waypoints() {
    let tube = Solid::tube(
        &[
            (Point3::new(0.0, 0.0, 0.0), 1.0),
            (Point3::new(0.0, 0.0, 10.0), 1.0),
        ],
        16,
    )
    .unwrap();
    let bb = tube.bounding_box();
    assert!(approx_eq(bb.mins.z, 0.0, EPS));
    assert!(approx_eq(bb.maxs.z, 10.0, EPS));
    assert!(approx_eq(bb.maxs.x, 1.0, EPS));
}

#[test]
fn bent_tube_covers_the_elbow() {
    let tube = Solid::tube(
        &[
            (Point3::new(0.0, 0.0, 0.0), 1.0),
            (Point3::new(0.0, 0.0, 10.0), 1.0),
            (Point3::new(10.0, 0.0, 10.0), 1.0),
        ],
        12,
    )
    .unwrap();
    let bb = tube.bounding_box();
    // The elbow ball sticks out one radius past the corner waypoint
    assert!(approx_eq(bb.maxs.z, 11.0, EPS));
    assert!(approx_eq(bb.maxs.x, 10.0, EPS));
}

#[test]
fn ascii_stl_is_well_formed() {
    let text = Solid::cube(1.0).to_stl_ascii("unit_cube");
    assert!(text.starts_with("solid unit_cube\n"));
    assert!(text.ends_with("endsolid unit_cube\n"));
    // 6 quad faces, 2 triangles each
    assert_eq!(text.matches("facet normal").count(), 12);
}

#[test]
fn binary_stl_has_expected_length() {
    let bytes = Solid::cube(1.0).to_stl_binary().unwrap();
    // 80-byte header + u32 count + 50 bytes per triangle
    assert_eq!(bytes.len(), 80 + 4 + 50 * 12);
}
