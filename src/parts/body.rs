//! Main-body generator: the wall-mountable enclosure shell holding the
//! board, the dial assembly, the cable run and the hanger slot.
//!
//! The body is centered on the XY origin and extruded from z=0 (back, the
//! wall side) to z=[`MAIN_DEPTH`] (front, closed by the board cover).

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::parts::dimensions::*;
use crate::profile::Profile;
use crate::solid::Solid;
use nalgebra::Point3;

/// Cuboid centered on the XY origin, spanning `z0..z1`
fn centered_box(width: Real, length: Real, z0: Real, z1: Real) -> Solid {
    Solid::cuboid(width, length, z1 - z0).translate(-width / 2.0, -length / 2.0, z0)
}

fn recess_floor_z() -> Real {
    MAIN_DEPTH - BOARD_RECESS_DEPTH
}

fn recess_top_y() -> Real {
    BOARD_RECESS_CENTER_Y + (BOARD_HEIGHT + 2.0 * BOARD_CLEARANCE) / 2.0
}

/// Board recess pocket sunk into the front face: a rounded extrusion sized
/// to the board plus clearance, minus a notch that keeps the wall-hanger
/// boss solid.
pub fn board_recess() -> Result<Solid, ValidationError> {
    let pocket = Profile::rounded_rectangle(
        BOARD_WIDTH + 2.0 * BOARD_CLEARANCE,
        BOARD_HEIGHT + 2.0 * BOARD_CLEARANCE,
        BOARD_RECESS_CORNER_RADIUS,
    )?
    .extrude(BOARD_RECESS_DEPTH + FLUSH)?
    .translate(0.0, BOARD_RECESS_CENTER_Y, recess_floor_z());

    // The notch spans the pocket in z with margin on both sides so the boss
    // face comes out clean
    let notch = centered_box(
        HANGER_BOSS_WIDTH,
        HANGER_BOSS_HEIGHT + 2.0 * FLUSH,
        recess_floor_z() - FLUSH,
        MAIN_DEPTH + 2.0 * FLUSH,
    )
    .translate(0.0, recess_top_y() - HANGER_BOSS_HEIGHT / 2.0 + FLUSH, 0.0);

    Ok(pocket.difference(&notch))
}

/// Centers of the four board mounting screws, each inset from a board
/// corner.
pub fn board_screw_positions() -> Vec<(Real, Real)> {
    let span_x = BOARD_WIDTH - 2.0 * BOARD_SCREW_INSET;
    let span_y = BOARD_HEIGHT - 2.0 * BOARD_SCREW_INSET;
    let mut positions = Vec::with_capacity(4);
    for iy in 0..2 {
        for ix in 0..2 {
            positions.push((
                -BOARD_WIDTH / 2.0 + BOARD_SCREW_INSET + ix as Real * span_x,
                BOARD_RECESS_CENTER_Y - BOARD_HEIGHT / 2.0
                    + BOARD_SCREW_INSET
                    + iy as Real * span_y,
            ));
        }
    }
    positions
}

/// All four board screw holes, each a pilot bore below the recess floor
/// with a countersink at the floor.
pub fn board_screw_holes() -> Solid {
    let floor = recess_floor_z();
    let mut holes = Solid::new();
    for (x, y) in board_screw_positions() {
        let pilot = Solid::cylinder(
            BOARD_SCREW_RADIUS,
            BOARD_SCREW_DEPTH + FLUSH,
            CYLINDER_SEGMENTS,
        )
        .translate(x, y, floor - BOARD_SCREW_DEPTH);
        let sink = Solid::cylinder(
            BOARD_SCREW_SINK_RADIUS,
            BOARD_SCREW_SINK_DEPTH + FLUSH,
            CYLINDER_SEGMENTS,
        )
        .translate(x, y, floor - BOARD_SCREW_SINK_DEPTH);

        let hole = pilot.union(&sink);
        holes = if holes.polygons.is_empty() {
            hole
        } else {
            holes.union(&hole)
        };
    }
    holes
}

/// USB connector slot through the top wall, opening into the board recess
pub fn usb_slot() -> Solid {
    let floor = recess_floor_z();
    // Spans the wall from inside the recess to past the outer edge; the
    // slot floor dips below the recess floor so the two cuts don't meet in
    // a coplanar face
    let wall_run = (MAIN_HEIGHT / 2.0 - recess_top_y()) + 2.0 * FLUSH;
    centered_box(
        USB_SLOT_WIDTH,
        wall_run,
        floor - FLUSH,
        floor + USB_SLOT_HEIGHT + FLUSH,
    )
    .translate(0.0, (MAIN_HEIGHT / 2.0 + recess_top_y()) / 2.0, 0.0)
}

/// Centers of the three dial fastener pairs: 0°, 120° and 240° around the
/// bore axis at radius [`DIAL_SCREW_OFFSET`].
pub fn dial_fastener_centers() -> [(Real, Real); 3] {
    let mut centers = [(0.0, 0.0); 3];
    for (k, slot) in centers.iter_mut().enumerate() {
        let angle = (k as Real) * 120.0_f64.to_radians();
        *slot = (
            DIAL_SCREW_OFFSET * angle.cos(),
            DIAL_CENTER_Y + DIAL_SCREW_OFFSET * angle.sin(),
        );
    }
    centers
}

/// Dial mount negative volume: the housing seat, the shaft through-bore and
/// the three screw/nut recess pairs.
///
/// Each through-hole is [`DIAL_SCREW_LENGTH`] long and pierces the whole
/// body; its paired nut recess enters from the back and stops
/// [`MAIN_DEPTH`]−[`DIAL_NUT_LENGTH`] short of the front face.
pub fn dial_cutout() -> Solid {
    let seat = Solid::cylinder(
        DIAL_BORE_RADIUS,
        DIAL_RECESS_DEPTH + FLUSH,
        CYLINDER_SEGMENTS,
    )
    .translate(0.0, DIAL_CENTER_Y, MAIN_DEPTH - DIAL_RECESS_DEPTH);

    let shaft = Solid::cylinder(
        DIAL_SHAFT_RADIUS,
        MAIN_DEPTH + 2.0 * FLUSH,
        CYLINDER_SEGMENTS,
    )
    .translate(0.0, DIAL_CENTER_Y, -FLUSH);

    let mut cutout = seat.union(&shaft);

    for (x, y) in dial_fastener_centers() {
        let through = Solid::cylinder(DIAL_SCREW_RADIUS, DIAL_SCREW_LENGTH, CYLINDER_SEGMENTS)
            .translate(x, y, (MAIN_DEPTH - DIAL_SCREW_LENGTH) / 2.0);
        let nut = Solid::cylinder(DIAL_NUT_RADIUS, DIAL_NUT_LENGTH, CYLINDER_SEGMENTS)
            .translate(x, y, -FLUSH);
        cutout = cutout.union(&through).union(&nut);
    }

    cutout
}

/// Swept cable conduit following the measured waypoint polyline
pub fn conduit() -> Result<Solid, ValidationError> {
    let waypoints: Vec<(Point3<Real>, Real)> = CONDUIT_WAYPOINTS
        .iter()
        .map(|&(x, y, z, r)| (Point3::new(x, y, z), r))
        .collect();
    Solid::tube(&waypoints, CONDUIT_SEGMENTS)
}

/// Teardrop wall-hanger slot cut into the back face: wide enough for a
/// screw head at the bottom, tapering to the shank width at the top.
pub fn hanger_slot() -> Result<Solid, ValidationError> {
    let teardrop = Profile::new([
        (-4.0, 0.0, 3.0),
        (4.0, 0.0, 3.0),
        (1.5, 14.0, 1.5),
        (-1.5, 14.0, 1.5),
    ])?;

    Ok(teardrop
        .extrude(HANGER_DEPTH + FLUSH)?
        .translate(0.0, HANGER_Y, -FLUSH))
}

/// Reset-button access bore, straight through the body
pub fn reset_hole() -> Solid {
    Solid::cylinder(RESET_RADIUS, MAIN_DEPTH + 2.0 * FLUSH, CYLINDER_SEGMENTS)
        .translate(RESET_X, RESET_Y, -FLUSH)
}

/// Generate the complete main-body part.
pub fn generate() -> Result<Solid, ValidationError> {
    let base = Profile::rounded_rectangle(MAIN_WIDTH, MAIN_HEIGHT, MAIN_CORNER_RADIUS)?
        .extrude(MAIN_DEPTH)?;

    let body = base
        .difference(&board_recess()?)
        .difference(&board_screw_holes())
        .difference(&usb_slot())
        .difference(&dial_cutout())
        .difference(&conduit()?)
        .difference(&hanger_slot()?)
        .difference(&reset_hole());

    log::debug!("main body: {} boundary polygons", body.polygons.len());
    Ok(body)
}
