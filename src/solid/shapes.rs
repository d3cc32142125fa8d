//! Primitive 3D shapes as [`Solid`]s

use crate::errors::ValidationError;
use crate::float_types::{EPSILON, PI, Real, TAU};
use crate::solid::Solid;
use crate::solid::polygon::Polygon;
use crate::solid::vertex::Vertex;
use nalgebra::{Point3, Vector3};

impl Solid {
    /// Axis-aligned rectangular prism with one corner at the origin and the
    /// opposite corner at `(width, length, height)`.
    ///
    /// ```text
    /// Vertex layout (8 corners):
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    pub fn cuboid(width: Real, length: Real, height: Real) -> Solid {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),          // 0: origin
            Point3::new(width, 0.0, 0.0),        // 1: +X
            Point3::new(width, length, 0.0),     // 2: +X+Y
            Point3::new(0.0, length, 0.0),       // 3: +Y
            Point3::new(0.0, 0.0, height),       // 4: +Z
            Point3::new(width, 0.0, height),     // 5: +X+Z
            Point3::new(width, length, height),  // 6: +X+Y+Z
            Point3::new(0.0, length, height),    // 7: +Y+Z
        ];

        // Quad faces wound counter-clockwise from outside
        let face_definitions: [([usize; 4], Vector3<Real>); 6] = [
            ([0, 3, 2, 1], -Vector3::z()), // Bottom face
            ([4, 5, 6, 7], Vector3::z()),  // Top face
            ([0, 1, 5, 4], -Vector3::y()), // Front face
            ([3, 7, 6, 2], Vector3::y()),  // Back face
            ([0, 4, 7, 3], -Vector3::x()), // Left face
            ([1, 2, 6, 5], Vector3::x()),  // Right face
        ];

        let polygons: Vec<Polygon> = face_definitions
            .iter()
            .map(|(indices, normal)| {
                Polygon::new(
                    indices
                        .iter()
                        .map(|&i| Vertex::new(corners[i], *normal))
                        .collect(),
                )
            })
            .collect();

        Solid::from_polygons(&polygons)
    }

    /// Cube with edge length `width`, one corner at the origin
    pub fn cube(width: Real) -> Solid {
        Self::cuboid(width, width, width)
    }

    /// Right circular cylinder along +Z, base at z=0
    pub fn cylinder(radius: Real, height: Real, segments: usize) -> Solid {
        Self::frustum(radius, radius, height, segments)
    }

    /// Conical frustum along +Z from a base ring of `radius1` at z=0 to a top
    /// ring of `radius2` at z=`height`. A cap collapses to nothing when its
    /// radius is below [`EPSILON`], which also degenerates the adjacent side
    /// quads to triangles.
    pub fn frustum(radius1: Real, radius2: Real, height: Real, segments: usize) -> Solid {
        let segments = segments.max(3);

        let ring = |radius: Real, z: Real| -> Vec<Point3<Real>> {
            (0..segments)
                .map(|i| {
                    let angle = (i as Real / segments as Real) * TAU;
                    Point3::new(angle.cos() * radius, angle.sin() * radius, z)
                })
                .collect()
        };

        let bottom = ring(radius1, 0.0);
        let top = ring(radius2, height);
        let mut polygons = Vec::new();

        if radius1 > EPSILON {
            // Bottom cap, wound clockwise seen from above so it faces -Z
            polygons.push(Polygon::new(
                bottom
                    .iter()
                    .rev()
                    .map(|&p| Vertex::new(p, -Vector3::z()))
                    .collect(),
            ));
        }

        if radius2 > EPSILON {
            polygons.push(Polygon::new(
                top.iter().map(|&p| Vertex::new(p, Vector3::z())).collect(),
            ));
        }

        for i in 0..segments {
            let next_i = (i + 1) % segments;

            // Radial direction at the midpoint of the quad
            let mid = (bottom[i].coords + top[i].coords) * 0.5;
            let side_normal = Vector3::new(mid.x, mid.y, 0.0)
                .try_normalize(EPSILON)
                .unwrap_or_else(Vector3::x);

            let mut loop_points = vec![bottom[i], bottom[next_i], top[next_i], top[i]];
            // Collapsed ring leaves duplicate points, drop them
            loop_points.dedup_by(|a, b| (*a - *b).norm_squared() < EPSILON * EPSILON);
            if loop_points.len() < 3 {
                continue;
            }

            polygons.push(Polygon::new(
                loop_points
                    .into_iter()
                    .map(|p| Vertex::new(p, side_normal))
                    .collect(),
            ));
        }

        Solid::from_polygons(&polygons)
    }

    /// UV sphere centered at the origin with poles on the Z axis.
    ///
    /// `segments` counts longitude bands, `stacks` latitude bands. Quads are
    /// wound counter-clockwise seen from outside; the rows touching a pole
    /// collapse to triangles.
    pub fn sphere(radius: Real, segments: usize, stacks: usize) -> Solid {
        let segments = segments.max(3);
        let stacks = stacks.max(2);

        let vertex = |theta_step: usize, phi_step: usize| -> Vertex {
            let theta = (theta_step as Real / segments as Real) * TAU;
            let phi = (phi_step as Real / stacks as Real) * PI;
            let dir = Vector3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );
            Vertex::new(Point3::from(dir * radius), dir)
        };

        let mut polygons = Vec::new();
        for i in 0..segments {
            for j in 0..stacks {
                let mut loop_vertices = Vec::with_capacity(4);
                loop_vertices.push(vertex(i, j));
                if j < stacks - 1 {
                    loop_vertices.push(vertex(i, j + 1));
                    loop_vertices.push(vertex(i + 1, j + 1));
                } else {
                    // South pole row
                    loop_vertices.push(vertex(i, j + 1));
                }
                if j > 0 {
                    loop_vertices.push(vertex(i + 1, j));
                }
                polygons.push(Polygon::new(loop_vertices));
            }
        }

        Solid::from_polygons(&polygons)
    }

    /// Creates a polyhedron from raw vertex data and face indices.
    ///
    /// # Parameters
    /// - `points`: a slice of `[x,y,z]` coordinates.
    /// - `faces`: each element is a list of indices into `points`, describing
    ///   one face wound counter-clockwise seen from outside. Each face must
    ///   have at least 3 indices.
    pub fn polyhedron(
        points: &[[Real; 3]],
        faces: &[&[usize]],
    ) -> Result<Solid, ValidationError> {
        let mut polygons = Vec::with_capacity(faces.len());

        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ValidationError::DegenerateFace(face_idx));
            }
            for &idx in face.iter() {
                if idx >= points.len() {
                    return Err(ValidationError::FaceIndexOutOfRange {
                        face: face_idx,
                        index: idx,
                        points: points.len(),
                    });
                }
            }

            let positions: Vec<Point3<Real>> = face
                .iter()
                .map(|&idx| Point3::new(points[idx][0], points[idx][1], points[idx][2]))
                .collect();

            // Fit the plane first so vertex normals agree with the face
            let probe = Polygon::new(
                positions
                    .iter()
                    .map(|&p| Vertex::new(p, Vector3::zeros()))
                    .collect(),
            );
            let normal = probe.plane.normal();
            polygons.push(Polygon::new(
                positions
                    .into_iter()
                    .map(|p| Vertex::new(p, normal))
                    .collect(),
            ));
        }

        Ok(Solid::from_polygons(&polygons))
    }
}
