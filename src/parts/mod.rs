//! The two enclosure halves, composed from the geometry kernel

pub mod body;
pub mod cover;
pub mod dimensions;
