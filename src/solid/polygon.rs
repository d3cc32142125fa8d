//! A flat [`Polygon`] in 3D space, bounded by a loop of [`Vertex`]s.

use crate::float_types::Real;
use crate::solid::aabb::Aabb;
use crate::solid::plane::Plane;
use crate::solid::vertex::Vertex;
use geo::{Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::{Point3, Vector3};

/// A convex or concave planar polygon with at least three vertices.
///
/// Vertices wind counter-clockwise when viewed from the side the plane
/// normal points toward.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
}

impl Polygon {
    /// Create a polygon from vertices, fitting the plane to the loop.
    ///
    /// # Panics
    /// Panics if `vertices` has fewer than three entries.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        assert!(
            vertices.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        let plane = Plane::from_vertices(&vertices);
        Polygon { vertices, plane }
    }

    /// Create a polygon that keeps a caller-supplied plane instead of
    /// refitting one. Split fragments use this so both halves stay exactly
    /// on the plane of the polygon they came from.
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Polygon { vertices, plane }
    }

    /// Reverses winding order and flips the plane and all vertex normals
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Axis-aligned bounding box of this polygon
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| v.pos))
    }

    /// Triangulate this polygon into a list of triangles, each [v0, v1, v2],
    /// keeping the polygon's winding.
    ///
    /// Triangles are returned directly; larger loops are rotated into the XY
    /// plane, ear-cut there, and rotated back.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }

        let normal = self.plane.normal();

        if self.vertices.len() == 3 {
            return vec![[
                self.vertices[0].clone(),
                self.vertices[1].clone(),
                self.vertices[2].clone(),
            ]];
        }

        let (to_xy, from_xy) = self.plane.to_xy_transform();

        let ring: Vec<[Real; 2]> = self
            .vertices
            .iter()
            .map(|v| {
                let flat = to_xy.transform_point(&v.pos);
                [flat.x, flat.y]
            })
            .collect();

        let triangles_2d = triangulate_2d(&ring);

        triangles_2d
            .iter()
            .map(|tri| {
                tri.map(|p| {
                    let back = from_xy.transform_point(&p);
                    Vertex::new(back, normal)
                })
            })
            .collect()
    }
}

/// Ear-cut triangulation of a simple 2D ring.
///
/// Earcut does not promise an output winding, so every triangle is
/// normalized to counter-clockwise before being returned.
pub fn triangulate_2d(ring: &[[Real; 2]]) -> Vec<[Point3<Real>; 3]> {
    let coords: Vec<Coord<Real>> = ring.iter().map(|&[x, y]| Coord { x, y }).collect();
    let polygon = GeoPolygon::new(LineString::new(coords), Vec::new());

    let triangulation = polygon.earcut_triangles_raw();
    let triangle_indices = triangulation.triangle_indices;
    let vertices = triangulation.vertices;

    let mut result = Vec::with_capacity(triangle_indices.len() / 3);
    for tri in triangle_indices.chunks_exact(3) {
        let mut pts = [
            Point3::new(vertices[2 * tri[0]], vertices[2 * tri[0] + 1], 0.0),
            Point3::new(vertices[2 * tri[1]], vertices[2 * tri[1] + 1], 0.0),
            Point3::new(vertices[2 * tri[2]], vertices[2 * tri[2] + 1], 0.0),
        ];
        let signed = (pts[1] - pts[0]).cross(&(pts[2] - pts[0])).dot(&Vector3::z());
        if signed < 0.0 {
            pts.swap(1, 2);
        }
        result.push(pts);
    }
    result
}
