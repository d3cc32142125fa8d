//! Mesh file export

pub mod stl;
