//! STL export for [`Solid`]s

use crate::solid::Solid;
use std::io::Cursor;

impl Solid {
    /// Convert this Solid to an **ASCII STL** string with the given `name`.
    ///
    /// ```rust,no_run
    /// # use macrodial_case::Solid;
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let solid = Solid::cube(1.0);
    /// let text = solid.to_stl_ascii("my_solid");
    /// std::fs::write("stl/my_solid.stl", text)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("solid {name}\n"));

        for poly in &self.polygons {
            // Facet normal comes from the polygon plane, shared by all of
            // its triangles
            let n = poly.plane.normal();
            for tri in poly.triangulate() {
                out.push_str(&format!(
                    "  facet normal {:.6} {:.6} {:.6}\n",
                    n.x, n.y, n.z
                ));
                out.push_str("    outer loop\n");
                for v in &tri {
                    let p = v.pos;
                    out.push_str(&format!(
                        "      vertex {:.6} {:.6} {:.6}\n",
                        p.x, p.y, p.z
                    ));
                }
                out.push_str("    endloop\n");
                out.push_str("  endfacet\n");
            }
        }

        out.push_str(&format!("endsolid {name}\n"));
        out
    }

    /// Convert this Solid to a **binary STL** byte vector.
    ///
    /// The resulting `Vec<u8>` can then be written to a file or handled in
    /// memory:
    ///
    /// ```rust,no_run
    /// # use macrodial_case::Solid;
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let solid = Solid::cube(1.0);
    /// let bytes = solid.to_stl_binary()?;
    /// std::fs::write("stl/my_solid.stl", bytes)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex, write_stl};

        let mut triangles = Vec::<Triangle>::new();

        for poly in &self.polygons {
            let n = poly.plane.normal();
            for tri in poly.triangulate() {
                triangles.push(Triangle {
                    normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                    vertices: tri.map(|v| {
                        Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])
                    }),
                });
            }
        }

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }
}
