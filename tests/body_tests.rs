//! Main-body part: dial fastener layout, screw placement and envelope.

mod support;

use macrodial_case::parts::body;
use macrodial_case::parts::dimensions::*;
use macrodial_case::solid::Solid;
use std::sync::OnceLock;
use support::{EPS, approx_eq, assert_envelope};

fn generated_body() -> &'static Solid {
    static BODY: OnceLock<Solid> = OnceLock::new();
    BODY.get_or_init(|| body::generate().expect("body generation failed"))
}

#[test]
fn envelope_matches_declared_constants() {
    assert_envelope(generated_body(), MAIN_WIDTH, MAIN_HEIGHT, MAIN_DEPTH);
}

#[test]
fn dial_fasteners_are_equally_spaced_on_the_bore_circle() {
    let centers = body::dial_fastener_centers();
    assert_eq!(centers.len(), 3);

    for (k, &(x, y)) in centers.iter().enumerate() {
        let dy = y - DIAL_CENTER_Y;
        let radius = (x * x + dy * dy).sqrt();
        assert!(
            approx_eq(radius, DIAL_SCREW_OFFSET, EPS),
            "fastener {k} at radius {radius}"
        );

        let angle = dy.atan2(x).to_degrees().rem_euclid(360.0);
        let expected = (k as f64) * 120.0;
        assert!(
            approx_eq(angle, expected, 1e-9),
            "fastener {k} at {angle}°, expected {expected}°"
        );
    }
}

#[test]
fn nut_recess_is_strictly_shorter_than_its_through_hole() {
    assert!(approx_eq(DIAL_NUT_LENGTH, MAIN_DEPTH - 5.0, EPS));
    assert!(DIAL_NUT_LENGTH < DIAL_SCREW_LENGTH);
    // The through-hole pierces the whole body, the nut recess must not
    assert!(DIAL_SCREW_LENGTH > MAIN_DEPTH);
    assert!(DIAL_NUT_LENGTH < MAIN_DEPTH);
}

#[test]
fn board_screws_sit_inset_from_the_board_corners() {
    let positions = body::board_screw_positions();
    assert_eq!(positions.len(), 4);

    let half_w = BOARD_WIDTH / 2.0 - BOARD_SCREW_INSET;
    let half_h = BOARD_HEIGHT / 2.0 - BOARD_SCREW_INSET;
    for (x, y) in positions {
        assert!(approx_eq(x.abs(), half_w, EPS));
        assert!(approx_eq((y - BOARD_RECESS_CENTER_Y).abs(), half_h, EPS));
    }
}

#[test]
fn usb_slot_pierces_the_top_wall() {
    let bb = body::usb_slot().bounding_box();
    let recess_floor = MAIN_DEPTH - BOARD_RECESS_DEPTH;
    let recess_top = BOARD_RECESS_CENTER_Y + (BOARD_HEIGHT + 2.0 * BOARD_CLEARANCE) / 2.0;

    assert!(approx_eq(bb.size().x, USB_SLOT_WIDTH, EPS));
    // Runs from inside the recess out past the body's top edge
    assert!(approx_eq(bb.mins.y, recess_top - FLUSH, EPS));
    assert!(approx_eq(bb.maxs.y, MAIN_HEIGHT / 2.0 + FLUSH, EPS));
    // The slot floor dips below the recess floor so the cuts cannot meet
    // in a coplanar face
    assert!(approx_eq(bb.mins.z, recess_floor - FLUSH, EPS));
    assert!(approx_eq(bb.maxs.z, recess_floor + USB_SLOT_HEIGHT + FLUSH, EPS));
}

#[test]
fn board_recess_keeps_the_hanger_boss() {
    let recess = body::board_recess().unwrap();
    // A probe inside the boss region must survive the notch subtraction:
    // intersecting the recess there yields nothing
    let boss_probe = Solid::cube(2.0).translate(
        -1.0,
        BOARD_RECESS_CENTER_Y + BOARD_HEIGHT / 2.0 - 4.0,
        MAIN_DEPTH - BOARD_RECESS_DEPTH / 2.0,
    );
    let overlap = recess.intersection(&boss_probe);
    assert!(
        overlap.polygons.is_empty() || overlap.bounding_box().size().norm() < EPS,
        "hanger boss region was hollowed out"
    );
}

#[test]
fn conduit_stays_within_the_body_depth() {
    let bb = body::conduit().unwrap().bounding_box();
    for &(_, _, z, r) in &CONDUIT_WAYPOINTS {
        assert!(z + r <= MAIN_DEPTH + EPS, "waypoint at z={z} r={r} escapes");
    }
    assert!(bb.maxs.z <= MAIN_DEPTH + EPS);
    assert!(bb.mins.z >= 0.0 - EPS);
}

#[test]
fn hanger_slot_fits_inside_the_boss() {
    let bb = body::hanger_slot().unwrap().bounding_box();
    assert!(bb.size().x <= HANGER_BOSS_WIDTH + EPS);
    assert!(approx_eq(bb.mins.z, -FLUSH, EPS));
    assert!(approx_eq(bb.maxs.z, HANGER_DEPTH, EPS));
}

#[test]
fn regeneration_is_bit_identical() {
    let again = body::generate().unwrap();
    assert_eq!(generated_body().polygons, again.polygons);
}
