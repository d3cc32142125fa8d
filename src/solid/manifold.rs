//! Watertightness check over the triangulated boundary

use crate::float_types::Real;
use crate::solid::Solid;
use nalgebra::Point3;
use std::collections::HashMap;

impl Solid {
    /// Checks that the solid bounds a closed volume.
    ///
    /// ### Returns
    /// Returns `true` if every edge of the triangulated boundary is shared by
    /// exactly 2 triangles.
    ///
    /// Coordinates are quantized before comparison so vertices produced by
    /// separate Boolean splits still merge into the same edge key.
    pub fn is_watertight(&self) -> bool {
        const QUANTIZATION_FACTOR: Real = 1e7;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct QuantizedPoint(i64, i64, i64);

        fn quantize_point(p: &Point3<Real>) -> QuantizedPoint {
            QuantizedPoint(
                (p.x * QUANTIZATION_FACTOR).round() as i64,
                (p.y * QUANTIZATION_FACTOR).round() as i64,
                (p.z * QUANTIZATION_FACTOR).round() as i64,
            )
        }

        let triangles = self.triangulate();
        let mut edge_counts: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();

        for tri in &triangles {
            // Edges 0->1, 1->2, 2->0
            for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                let p0 = quantize_point(&tri[i0].pos);
                let p1 = quantize_point(&tri[i1].pos);

                if p0 == p1 {
                    continue; // degenerate edge from a sliver triangle
                }

                // Order them so (p0, p1) and (p1, p0) become the same key
                let key = if (p0.0, p0.1, p0.2) < (p1.0, p1.1, p1.2) {
                    (p0, p1)
                } else {
                    (p1, p0)
                };

                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }

        !edge_counts.is_empty() && edge_counts.values().all(|&count| count == 2)
    }
}
