//! Board-cover part: grid layout, cutout envelopes and reproducibility.

mod support;

use macrodial_case::parts::cover;
use macrodial_case::parts::dimensions::*;
use macrodial_case::solid::Solid;
use std::sync::OnceLock;
use support::{EPS, approx_eq, assert_envelope};

fn generated_cover() -> &'static Solid {
    static COVER: OnceLock<Solid> = OnceLock::new();
    COVER.get_or_init(|| cover::generate().expect("cover generation failed"))
}

#[test]
fn envelope_matches_declared_constants() {
    // Internal cutouts must not change the outer envelope
    assert_envelope(
        generated_cover(),
        BOARD_COVER_WIDTH,
        BOARD_COVER_HEIGHT,
        BOARD_COVER_DEPTH,
    );
}

#[test]
fn key_hole_stays_inside_keycap_footprint() {
    // The tab slot is the widest lateral feature after the top socket and
    // must stay strictly inside it
    assert!(KEY_TAB_LENGTH < KEY_TOP_WIDTH);

    let bb = cover::key_hole().bounding_box();
    let size = bb.size();
    assert!(size.x <= KEY_TOP_WIDTH + EPS);
    assert!(size.y <= KEY_TOP_WIDTH + EPS);
    // Full through-cut plus the flush margin at both faces
    assert!(approx_eq(size.z, BOARD_COVER_DEPTH + 2.0 * FLUSH, EPS));
}

#[test]
fn keypad_grid_has_twelve_distinct_positions() {
    let positions = cover::keypad_positions();
    assert_eq!(positions.len(), KEY_COLUMNS * KEY_ROWS);

    for (x, y) in &positions {
        let i = x / KEY_X_OFFSET;
        let j = y / KEY_Y_OFFSET;
        assert!(approx_eq(i.round(), i, EPS), "x={x} off the column pitch");
        assert!(approx_eq(j.round(), j, EPS), "y={y} off the row pitch");
    }

    for (a, pa) in positions.iter().enumerate() {
        for pb in positions.iter().skip(a + 1) {
            assert!(
                !(approx_eq(pa.0, pb.0, EPS) && approx_eq(pa.1, pb.1, EPS)),
                "duplicate key position {pa:?}"
            );
        }
    }
}

#[test]
fn key_nearest_origin_sits_at_origin() {
    let positions = cover::keypad_positions();
    let nearest = positions
        .iter()
        .min_by(|a, b| {
            let da = a.0 * a.0 + a.1 * a.1;
            let db = b.0 * b.0 + b.1 * b.1;
            da.total_cmp(&db)
        })
        .unwrap();
    assert!(approx_eq(nearest.0, 0.0, EPS));
    assert!(approx_eq(nearest.1, 0.0, EPS));
}

#[test]
fn grid_translation_formula() {
    let expected = -(BOARD_COVER_HEIGHT - 4.0 * KEY_Y_OFFSET) / 2.0 + FIRST_KEY_Y_OFFSET;
    assert!(approx_eq(cover::grid_y_offset(), expected, EPS));

    // After the grid translation, the origin key's absolute Y equals the
    // offset exactly
    let translated_y = 0.0 + cover::grid_y_offset();
    assert!(approx_eq(translated_y, expected, EPS));
}

#[test]
fn display_bevel_is_watertight_with_outward_normals() {
    let bevel = cover::display_bevel().unwrap();
    assert_eq!(bevel.polygons.len(), 6);
    assert!(bevel.is_watertight());

    // Every face normal points away from the centroid
    let centroid = bevel.bounding_box().center();
    for poly in &bevel.polygons {
        let face_point = poly.vertices[0].pos;
        let outward = face_point - centroid;
        assert!(
            poly.plane.normal().dot(&outward) > 0.0,
            "face normal points inward"
        );
    }
}

#[test]
fn rotary_key_square_reaches_past_the_bore() {
    // The rotated square must poke out of the bore or the union adds nothing
    let circumradius = ROTARY_KEY_SQUARE * std::f64::consts::SQRT_2 / 2.0;
    assert!(circumradius > ROTARY_BORE_RADIUS);

    let bb = cover::rotary_cutout().bounding_box();
    assert!(bb.size().x > 2.0 * ROTARY_BORE_RADIUS + EPS);
    assert!(bb.size().y > 2.0 * ROTARY_BORE_RADIUS + EPS);
}

#[test]
fn cutouts_do_not_overlap_each_other() {
    let grid = cover::keypad_grid().bounding_box();
    let display = cover::display_cutout().unwrap().bounding_box();
    let rotary = cover::rotary_cutout().bounding_box();

    assert!(!grid.intersects(&display));
    assert!(!grid.intersects(&rotary));
    assert!(!display.intersects(&rotary));
}

#[test]
fn regeneration_is_bit_identical() {
    let again = cover::generate().unwrap();
    assert_eq!(generated_cover().polygons, again.polygons);
}
