//! Board-cover generator: a thin rounded slab with a lowered key well, the
//! 3×4 key-switch grid, a display window with a flared bevel, and the rotary
//! shaft cutout.
//!
//! The cover is centered on the XY origin and extruded from z=0 (underside,
//! facing the board) to z=[`BOARD_COVER_DEPTH`] (top surface).

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::parts::dimensions::*;
use crate::profile::Profile;
use crate::solid::Solid;

/// Cuboid centered on the XY origin, spanning `z0..z1`
fn centered_box(width: Real, length: Real, z0: Real, z1: Real) -> Solid {
    Solid::cuboid(width, length, z1 - z0).translate(-width / 2.0, -length / 2.0, z0)
}

/// Y translation applied to the whole keypad grid: centers the 4-row key
/// field on the cover, then nudges it by the first-key offset.
pub fn grid_y_offset() -> Real {
    -(BOARD_COVER_HEIGHT - KEY_ROWS as Real * KEY_Y_OFFSET) / 2.0 + FIRST_KEY_Y_OFFSET
}

/// Center positions of all key cutouts before the grid Y translation.
///
/// Columns are indexed -1, 0, 1 around the cover centerline, rows 0..4
/// upward, so the key nearest the origin sits exactly at (0, 0).
pub fn keypad_positions() -> Vec<(Real, Real)> {
    let mut positions = Vec::with_capacity(KEY_COLUMNS * KEY_ROWS);
    for j in 0..KEY_ROWS {
        for i in 0..KEY_COLUMNS {
            let col = i as Real - (KEY_COLUMNS as Real - 1.0) / 2.0;
            positions.push((col * KEY_X_OFFSET, j as Real * KEY_Y_OFFSET));
        }
    }
    positions
}

/// One key-switch cutout centered on the XY origin: the union of three
/// stacked negative volumes.
///
/// From the top down: a wider socket for the keycap plate, a narrower socket
/// for the switch body, and a lateral slot for the retention tabs. The top
/// socket overshoots the top surface and the bottom socket overshoots the
/// underside by [`FLUSH`].
pub fn key_hole() -> Solid {
    let top_socket = centered_box(
        KEY_TOP_WIDTH,
        KEY_TOP_WIDTH,
        BOARD_COVER_DEPTH - KEY_TOP_DEPTH,
        BOARD_COVER_DEPTH + FLUSH,
    );
    let bottom_socket = centered_box(
        KEY_BOTTOM_WIDTH,
        KEY_BOTTOM_WIDTH,
        -FLUSH,
        BOARD_COVER_DEPTH - KEY_TOP_DEPTH + FLUSH,
    );
    let tab_slot = centered_box(
        KEY_TAB_LENGTH,
        KEY_TAB_WIDTH,
        KEY_TAB_Z,
        KEY_TAB_Z + KEY_TAB_DEPTH,
    );

    top_socket.union(&bottom_socket).union(&tab_slot)
}

/// The whole keypad grid as one negative volume, already shifted by
/// [`grid_y_offset`].
pub fn keypad_grid() -> Solid {
    let hole = key_hole();
    let mut grid = Solid::new();
    for (x, y) in keypad_positions() {
        let placed = hole.translate(x, y, 0.0);
        grid = if grid.polygons.is_empty() {
            placed
        } else {
            grid.union(&placed)
        };
    }
    grid.translate(0.0, grid_y_offset(), 0.0)
}

/// Step cut that lowers the cover top around the key field so the keycaps
/// sit proud of the surrounding surface.
fn key_well() -> Solid {
    let width =
        (KEY_COLUMNS as Real - 1.0) * KEY_X_OFFSET + KEY_TOP_WIDTH + 2.0 * KEY_WELL_MARGIN;
    let height =
        (KEY_ROWS as Real - 1.0) * KEY_Y_OFFSET + KEY_TOP_WIDTH + 2.0 * KEY_WELL_MARGIN;
    let field_center_y = grid_y_offset() + (KEY_ROWS as Real - 1.0) / 2.0 * KEY_Y_OFFSET;

    centered_box(
        width,
        height,
        BOARD_COVER_DEPTH - KEY_WELL_DROP,
        BOARD_COVER_DEPTH + FLUSH,
    )
    .translate(0.0, field_center_y, 0.0)
}

/// Center of the display window, placed from the board's bottom-left corner
/// plus the per-axis padding.
pub fn display_center() -> (Real, Real) {
    (
        -BOARD_WIDTH / 2.0 + DISPLAY_X_PADDING + DISPLAY_WIDTH / 2.0,
        -BOARD_HEIGHT / 2.0 + DISPLAY_Y_PADDING + DISPLAY_HEIGHT / 2.0,
    )
}

/// Flared bevel around the display window: a six-face polyhedron whose
/// bottom rectangle matches the window and whose top rectangle grows by an
/// independent flare distance per edge. Local coordinates, centered on the
/// window.
pub fn display_bevel() -> Result<Solid, ValidationError> {
    let hw = DISPLAY_WIDTH / 2.0;
    let hh = DISPLAY_HEIGHT / 2.0;
    let z0 = DISPLAY_BEVEL_Z0;
    let z1 = BOARD_COVER_DEPTH + FLUSH;

    let points: [[Real; 3]; 8] = [
        [-hw, -hh, z0],
        [hw, -hh, z0],
        [hw, hh, z0],
        [-hw, hh, z0],
        [-hw - DISPLAY_FLARE_LEFT, -hh - DISPLAY_FLARE_BOTTOM, z1],
        [hw + DISPLAY_FLARE_RIGHT, -hh - DISPLAY_FLARE_BOTTOM, z1],
        [hw + DISPLAY_FLARE_RIGHT, hh + DISPLAY_FLARE_TOP, z1],
        [-hw - DISPLAY_FLARE_LEFT, hh + DISPLAY_FLARE_TOP, z1],
    ];

    // Outward-wound faces, same layout as a cuboid
    let faces: [&[usize]; 6] = [
        &[0, 3, 2, 1], // bottom
        &[4, 5, 6, 7], // top
        &[0, 1, 5, 4], // front (-Y)
        &[3, 7, 6, 2], // back (+Y)
        &[0, 4, 7, 3], // left (-X)
        &[1, 2, 6, 5], // right (+X)
    ];

    Solid::polyhedron(&points, &faces)
}

/// Display cutout: the straight through-cut of the active area unioned with
/// the flared bevel, positioned at [`display_center`].
pub fn display_cutout() -> Result<Solid, ValidationError> {
    let window = centered_box(
        DISPLAY_WIDTH,
        DISPLAY_HEIGHT,
        -FLUSH,
        BOARD_COVER_DEPTH + FLUSH,
    );
    let (cx, cy) = display_center();
    Ok(window.union(&display_bevel()?).translate(cx, cy, 0.0))
}

/// Rotary-shaft cutout: the circular through-bore for the encoder shaft
/// unioned with a 45°-rotated square recess for the flat-keyed coupling,
/// sunk into the top so its base sits flush with the bore's top.
pub fn rotary_cutout() -> Solid {
    let bore = Solid::cylinder(
        ROTARY_BORE_RADIUS,
        BOARD_COVER_DEPTH + 2.0 * FLUSH,
        CYLINDER_SEGMENTS,
    )
    .translate(0.0, 0.0, -FLUSH);

    let key = centered_box(
        ROTARY_KEY_SQUARE,
        ROTARY_KEY_SQUARE,
        BOARD_COVER_DEPTH - ROTARY_KEY_HEIGHT,
        BOARD_COVER_DEPTH + FLUSH,
    )
    .rotate(0.0, 0.0, 45.0);

    bore.union(&key)
        .translate(-ROTARY_X_OFFSET, -ROTARY_Y_OFFSET, 0.0)
}

/// Base cover slab: board outline plus overhang, with the key well already
/// lowered.
pub fn slab() -> Result<Solid, ValidationError> {
    let base = Profile::rounded_rectangle(
        BOARD_COVER_WIDTH,
        BOARD_COVER_HEIGHT,
        COVER_CORNER_RADIUS,
    )?
    .extrude(BOARD_COVER_DEPTH)?;

    Ok(base.difference(&key_well()))
}

/// Generate the complete board-cover part.
pub fn generate() -> Result<Solid, ValidationError> {
    let cover = slab()?
        .difference(&keypad_grid())
        .difference(&display_cutout()?)
        .difference(&rotary_cutout());

    log::debug!("board cover: {} boundary polygons", cover.polygons.len());
    Ok(cover)
}
