//! [`Solid`] is the boundary representation at the heart of the crate:
//! a bag of polygons bounding a closed volume, combined with Boolean
//! operations backed by [BSP](bsp) trees.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};
use std::sync::OnceLock;

pub mod aabb;
pub mod bsp;
pub mod manifold;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod sweep;
pub mod vertex;

use aabb::Aabb;
use bsp::Node;
use plane::Plane;
use polygon::Polygon;
use vertex::Vertex;

#[derive(Debug, Clone)]
pub struct Solid {
    /// Boundary polygons of the volume
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Solid {
    /// Returns a new empty Solid
    pub fn new() -> Self {
        Solid {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Build a Solid from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let mut solid = Solid::new();
        solid.polygons = polygons.to_vec();
        solid
    }

    /// Split polygons into (may_touch, cannot_touch) using bounding-box tests
    fn partition_polys(polys: &[Polygon], other_bb: &Aabb) -> (Vec<Polygon>, Vec<Polygon>) {
        let mut maybe = Vec::new();
        let mut never = Vec::new();
        for p in polys {
            if p.bounding_box().intersects(other_bb) {
                maybe.push(p.clone());
            } else {
                never.push(p.clone());
            }
        }
        (maybe, never)
    }

    /// Return a new Solid representing the union of the two Solids.
    ///
    /// ```text
    /// let c = a.union(&b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    pub fn union(&self, other: &Solid) -> Solid {
        // avoid splitting obvious non-intersecting faces
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());

        // combine results and untouched faces
        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);
        final_polys.extend(b_passthru);

        Solid {
            polygons: final_polys,
            bounding_box: OnceLock::new(),
        }
    }

    /// Return a new Solid representing the difference of the two Solids.
    ///
    /// ```text
    /// let c = a.difference(&b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    pub fn difference(&self, other: &Solid) -> Solid {
        // avoid splitting obvious non-intersecting faces
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();

        // combine results and untouched faces
        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);

        Solid {
            polygons: final_polys,
            bounding_box: OnceLock::new(),
        }
    }

    /// Return a new Solid representing the intersection of the two Solids.
    pub fn intersection(&self, other: &Solid) -> Solid {
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();

        Solid {
            polygons: a.all_polygons(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the solid.
    /// Normals transform by the inverse transpose so they stay
    /// perpendicular under non-uniform scaling.
    pub fn transform(&self, mat: &Matrix4<Real>) -> Solid {
        let mat_inv_transpose = mat
            .try_inverse()
            .expect("transform matrix must be invertible")
            .transpose();
        let mut solid = self.clone();

        for poly in &mut solid.polygons {
            for vert in &mut poly.vertices {
                let homog_pos = mat * vert.pos.to_homogeneous();
                vert.pos = Point3::from_homogeneous(homog_pos)
                    .expect("transform matrix must not be projective");
                vert.normal = mat_inv_transpose.transform_vector(&vert.normal).normalize();
            }

            // keep the cached plane consistent with the new vertex positions
            poly.plane = Plane::from_vertices(&poly.vertices);
        }

        solid.bounding_box = OnceLock::new();
        solid
    }

    /// Returns a new Solid translated by the given vector.
    pub fn translate_vector(&self, vector: Vector3<Real>) -> Solid {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Solid translated by x, y and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Solid {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Rotates the solid by x_deg, y_deg, z_deg degrees, composed z·y·x.
    pub fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Solid {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Scales the solid by scale_x, scale_y, scale_z
    pub fn scale(&self, sx: Real, sy: Real, sz: Real) -> Solid {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }

    /// Returns a new Solid translated so that its bounding-box center is at
    /// the origin.
    pub fn center(&self) -> Solid {
        let aabb = self.bounding_box();
        let c = aabb.center();
        self.translate(-c.x, -c.y, -c.z)
    }

    /// Translates the solid so that its bottommost point(s) sit exactly at z=0.
    pub fn float(&self) -> Solid {
        let aabb = self.bounding_box();
        self.translate(0.0, 0.0, -aabb.mins.z)
    }

    /// Invert this Solid (flip inside vs. outside)
    pub fn inverse(&self) -> Solid {
        let mut solid = self.clone();
        for p in &mut solid.polygons {
            p.flip();
        }
        solid
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `polygons`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            if self.polygons.is_empty() {
                return Aabb::new(Point3::origin(), Point3::origin());
            }
            Aabb::from_points(
                self.polygons
                    .iter()
                    .flat_map(|p| p.vertices.iter().map(|v| v.pos)),
            )
        })
    }

    /// Triangulate every polygon of the solid.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        self.polygons.iter().flat_map(|p| p.triangulate()).collect()
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new()
    }
}
