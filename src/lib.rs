//! Parametric solid-modeling crate that generates the two halves of a
//! 3D-printable enclosure for a CNC macropad/dial controller: a board cover
//! with key, display and rotary-shaft cutouts, and a wall-mountable main body
//! with a board recess, dial mount, cable conduit and hanger slot.
//!
//! Geometry is built from Boolean operations (*union*, *difference*,
//! *intersection*) on sets of polygons stored in [BSP](solid::bsp) trees,
//! plus a rounded corner-point [`Profile`](profile::Profile) extrusion
//! primitive from which both enclosure halves are composed.
//!
//! Everything is a pure function of the constants in [`parts::dimensions`]:
//! regenerating a part from identical constants yields identical geometry.

#![forbid(unsafe_code)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod parts;
pub mod profile;
pub mod solid;

pub use profile::Profile;
pub use solid::Solid;
