//! Every measurement used by the part generators, in millimetres.
//!
//! All downstream placements are arithmetic over these constants, so
//! changing one value repositions every dependent feature consistently.

use crate::float_types::Real;

/// Flush-cut tolerance. Every cutout that must terminate flush with a
/// coplanar face of its parent solid is oversized by this amount along the
/// axis of coincidence, so the kernel sees a clean through-cut instead of
/// a degenerate touching-face case.
pub const FLUSH: Real = 0.1;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Circuit board
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

pub const BOARD_WIDTH: Real = 59.69;
pub const BOARD_HEIGHT: Real = 104.14;
/// Side play around the board in its recess
pub const BOARD_CLEARANCE: Real = 0.5;
/// Mounting holes sit this far in from each board corner
pub const BOARD_SCREW_INSET: Real = 4.4;
pub const BOARD_SCREW_RADIUS: Real = 1.25;
pub const BOARD_SCREW_DEPTH: Real = 8.0;
pub const BOARD_SCREW_SINK_RADIUS: Real = 2.5;
pub const BOARD_SCREW_SINK_DEPTH: Real = 2.0;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Key switches
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Key pitch along X and Y
pub const KEY_X_OFFSET: Real = 19.0;
pub const KEY_Y_OFFSET: Real = 19.0;
/// The first key row sits this far above the centered key-field position
pub const FIRST_KEY_Y_OFFSET: Real = 2.7;
pub const KEY_COLUMNS: usize = 3;
pub const KEY_ROWS: usize = 4;

/// Keycap plate socket
pub const KEY_TOP_WIDTH: Real = 15.6;
pub const KEY_TOP_DEPTH: Real = 2.2;
/// Switch body socket
pub const KEY_BOTTOM_WIDTH: Real = 14.0;
/// Retention tab slot. Its length stays strictly inside the top socket
/// width so the whole cutout fits within the keycap footprint.
pub const KEY_TAB_WIDTH: Real = 5.0;
pub const KEY_TAB_LENGTH: Real = 15.0;
pub const KEY_TAB_DEPTH: Real = 1.5;
/// Tab slot floor height above the cover underside
pub const KEY_TAB_Z: Real = 0.8;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Board cover
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Cover margin beyond the board outline on every side
pub const COVER_OVERHANG: Real = 3.0;
pub const BOARD_COVER_WIDTH: Real = BOARD_WIDTH + 2.0 * COVER_OVERHANG;
pub const BOARD_COVER_HEIGHT: Real = BOARD_HEIGHT + 2.0 * COVER_OVERHANG;
pub const BOARD_COVER_DEPTH: Real = 4.0;
pub const COVER_CORNER_RADIUS: Real = 3.0;
/// The key field sits in a step lowered into the cover top
pub const KEY_WELL_DROP: Real = 1.6;
pub const KEY_WELL_MARGIN: Real = 1.5;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Display window
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Active area of the OLED module
pub const DISPLAY_WIDTH: Real = 26.0;
pub const DISPLAY_HEIGHT: Real = 13.0;
/// Window placement from the board's bottom-left corner
pub const DISPLAY_X_PADDING: Real = 16.85;
pub const DISPLAY_Y_PADDING: Real = 6.0;
/// Viewing-angle flare of the window bevel, per edge
pub const DISPLAY_FLARE_LEFT: Real = 2.0;
pub const DISPLAY_FLARE_RIGHT: Real = 2.0;
pub const DISPLAY_FLARE_BOTTOM: Real = 2.0;
pub const DISPLAY_FLARE_TOP: Real = 6.0;
/// The bevel starts this far above the cover underside
pub const DISPLAY_BEVEL_Z0: Real = 1.5;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Rotary encoder shaft
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Shaft cutout position, measured back from the cover center
pub const ROTARY_X_OFFSET: Real = 20.0;
pub const ROTARY_Y_OFFSET: Real = 35.0;
pub const ROTARY_BORE_RADIUS: Real = 3.55;
/// Flat-keyed coupling recess, a square rotated 45 degrees. Its corners
/// must reach past the bore wall so the recess joins the bore without gaps.
pub const ROTARY_KEY_SQUARE: Real = 5.8;
pub const ROTARY_KEY_HEIGHT: Real = 2.0;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Main body
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

pub const MAIN_WIDTH: Real = 70.0;
pub const MAIN_HEIGHT: Real = 190.0;
pub const MAIN_DEPTH: Real = 55.0;
pub const MAIN_CORNER_RADIUS: Real = 6.0;

/// Board recess pocket in the front face
pub const BOARD_RECESS_DEPTH: Real = 7.0;
pub const BOARD_RECESS_CORNER_RADIUS: Real = 3.0;
pub const BOARD_RECESS_CENTER_Y: Real = 38.0;

/// Material kept inside the recess for the wall-hanger slot
pub const HANGER_BOSS_WIDTH: Real = 16.0;
pub const HANGER_BOSS_HEIGHT: Real = 12.0;
/// Hanger teardrop profile base position (measured fit)
pub const HANGER_Y: Real = 75.0;
pub const HANGER_DEPTH: Real = 6.0;

/// USB connector slot through the top wall
pub const USB_SLOT_WIDTH: Real = 13.0;
pub const USB_SLOT_HEIGHT: Real = 8.0;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Dial assembly
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

pub const DIAL_CENTER_Y: Real = -55.0;
/// Seat for the dial housing
pub const DIAL_BORE_RADIUS: Real = 30.25;
pub const DIAL_RECESS_DEPTH: Real = 24.0;
/// Encoder shaft passes all the way through
pub const DIAL_SHAFT_RADIUS: Real = 5.0;
/// Fastener circle radius around the bore axis
pub const DIAL_SCREW_OFFSET: Real = 25.5;
pub const DIAL_SCREW_RADIUS: Real = 1.6;
/// Through-hole length, longer than the body is deep
pub const DIAL_SCREW_LENGTH: Real = 60.0;
pub const DIAL_NUT_RADIUS: Real = 3.1;
/// Nut recess stops short of the front face, leaving thread engagement
pub const DIAL_NUT_LENGTH: Real = MAIN_DEPTH - 5.0;

/// Reset-button access bore (measured against the board layout)
pub const RESET_X: Real = -14.0;
pub const RESET_Y: Real = 66.0;
pub const RESET_RADIUS: Real = 1.5;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Cable conduit (calibration data, measured against the assembly)
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Waypoints of the USB cable channel: (x, y, z, radius)
pub const CONDUIT_WAYPOINTS: [(Real, Real, Real, Real); 4] = [
    (0.0, 92.0, 44.0, 4.5),
    (0.0, 60.0, 30.0, 4.0),
    (0.0, -20.0, 30.0, 4.0),
    (0.0, -55.0, 36.0, 4.5),
];

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Mesh resolution
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

pub const CYLINDER_SEGMENTS: usize = 24;
pub const CONDUIT_SEGMENTS: usize = 12;
