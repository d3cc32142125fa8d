//! 2D rounded-corner profiles and their extrusion into [`Solid`]s.
//!
//! A [`Profile`] is a counter-clockwise loop of corner points, each carrying
//! a fillet radius. The discretized outline replaces every rounded corner
//! with a tangent circular arc, which is how every rounded face of both
//! enclosure halves is produced.

use crate::errors::ValidationError;
use crate::float_types::{EPSILON, PI, Real};
use crate::solid::Solid;
use crate::solid::polygon::{Polygon, triangulate_2d};
use crate::solid::vertex::Vertex;
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Area, Coord, Line, LineString, Polygon as GeoPolygon};
use nalgebra::{Point3, Vector2, Vector3};

/// Number of arc samples per rounded corner unless overridden
pub const DEFAULT_CORNER_SEGMENTS: usize = 8;

/// One corner of a [`Profile`]: a position plus the radius of the fillet arc
/// that replaces the sharp corner. A radius of zero keeps the corner sharp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPoint {
    pub x: Real,
    pub y: Real,
    pub radius: Real,
}

impl From<(Real, Real, Real)> for CornerPoint {
    fn from((x, y, radius): (Real, Real, Real)) -> Self {
        CornerPoint { x, y, radius }
    }
}

/// A simple closed 2D loop with per-corner fillet radii.
///
/// Corners must wind counter-clockwise and the raw corner polygon must not
/// self-intersect. Both are validated at construction, so an existing
/// `Profile` can always be extruded.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    corners: Vec<CornerPoint>,
    segments_per_corner: usize,
}

impl Profile {
    /// Validate `corners` and build a profile with the default corner
    /// resolution.
    pub fn new<C, I>(corners: I) -> Result<Self, ValidationError>
    where
        C: Into<CornerPoint>,
        I: IntoIterator<Item = C>,
    {
        Self::with_segments(corners, DEFAULT_CORNER_SEGMENTS)
    }

    /// Validate `corners` and build a profile sampling each fillet arc with
    /// `segments_per_corner` segments.
    pub fn with_segments<C, I>(
        corners: I,
        segments_per_corner: usize,
    ) -> Result<Self, ValidationError>
    where
        C: Into<CornerPoint>,
        I: IntoIterator<Item = C>,
    {
        let corners: Vec<CornerPoint> = corners.into_iter().map(Into::into).collect();

        if corners.len() < 3 {
            return Err(ValidationError::TooFewPoints {
                min: 3,
                got: corners.len(),
            });
        }
        for c in &corners {
            if !c.x.is_finite() || !c.y.is_finite() || !c.radius.is_finite() {
                return Err(ValidationError::InvalidCoordinate(c.x, c.y));
            }
            if c.radius < 0.0 {
                return Err(ValidationError::NegativeRadius(c.x, c.y));
            }
        }

        let ring: Vec<Coord<Real>> = corners.iter().map(|c| Coord { x: c.x, y: c.y }).collect();
        let raw = GeoPolygon::new(LineString::new(ring), Vec::new());
        if raw.signed_area() <= 0.0 {
            return Err(ValidationError::NotCounterClockwise);
        }

        Self::check_self_intersection(&corners)?;

        Ok(Profile {
            corners,
            segments_per_corner: segments_per_corner.max(1),
        })
    }

    /// Axis-aligned rectangle centered at the origin with a uniform corner
    /// radius.
    pub fn rounded_rectangle(
        width: Real,
        height: Real,
        radius: Real,
    ) -> Result<Self, ValidationError> {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self::new([
            (-hw, -hh, radius),
            (hw, -hh, radius),
            (hw, hh, radius),
            (-hw, hh, radius),
        ])
    }

    /// Any pair of non-adjacent raw edges crossing makes the loop
    /// non-simple. Adjacent edges always touch at their shared corner and
    /// are skipped.
    fn check_self_intersection(corners: &[CornerPoint]) -> Result<(), ValidationError> {
        let n = corners.len();
        let edge = |i: usize| -> Line<Real> {
            let a = &corners[i];
            let b = &corners[(i + 1) % n];
            Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y })
        };

        for i in 0..n {
            for j in i + 1..n {
                // Skip the two neighbours sharing a corner with edge i
                if (j + 1) % n == i || (i + 1) % n == j {
                    continue;
                }
                if let Some(hit) = line_intersection(edge(i), edge(j)) {
                    let at = match hit {
                        LineIntersection::SinglePoint { intersection, .. } => intersection,
                        LineIntersection::Collinear { intersection } => intersection.start,
                    };
                    return Err(ValidationError::SelfIntersection(at.x, at.y));
                }
            }
        }
        Ok(())
    }

    /// Discretize the profile into a counter-clockwise point loop, replacing
    /// each positive-radius corner with a tangent arc.
    ///
    /// The tangent length `r / tan(θ/2)` is clamped to half the shorter
    /// adjacent edge, shrinking the effective radius instead of letting
    /// neighbouring fillets overlap.
    pub fn outline(&self) -> Vec<[Real; 2]> {
        let n = self.corners.len();
        let mut points = Vec::new();

        for i in 0..n {
            let prev = &self.corners[(i + n - 1) % n];
            let here = &self.corners[i];
            let next = &self.corners[(i + 1) % n];

            let b = Vector2::new(here.x, here.y);
            let to_prev = Vector2::new(prev.x - here.x, prev.y - here.y);
            let to_next = Vector2::new(next.x - here.x, next.y - here.y);
            let len_prev = to_prev.norm();
            let len_next = to_next.norm();

            if here.radius < EPSILON || len_prev < EPSILON || len_next < EPSILON {
                points.push([here.x, here.y]);
                continue;
            }

            let u = to_prev / len_prev;
            let v = to_next / len_next;

            let cos_theta = u.dot(&v).clamp(-1.0, 1.0);
            let theta = cos_theta.acos();
            if theta < EPSILON || (PI - theta) < EPSILON {
                // Collinear edges leave nothing to round
                points.push([here.x, here.y]);
                continue;
            }

            let half = theta * 0.5;
            let mut tan_len = here.radius / half.tan();
            let max_tan = 0.5 * len_prev.min(len_next);
            if tan_len > max_tan {
                tan_len = max_tan;
            }
            let r_eff = tan_len * half.tan();

            let bisector = (u + v).normalize();
            let center = b + bisector * (r_eff / half.sin());
            let arc_start = b + u * tan_len;
            let arc_end = b + v * tan_len;

            let a0 = (arc_start.y - center.y).atan2(arc_start.x - center.x);
            let a1 = (arc_end.y - center.y).atan2(arc_end.x - center.x);
            let mut delta = a1 - a0;
            // Shortest rotation from arc start to arc end
            while delta > PI {
                delta -= 2.0 * PI;
            }
            while delta < -PI {
                delta += 2.0 * PI;
            }

            for k in 0..=self.segments_per_corner {
                let angle = a0 + delta * (k as Real / self.segments_per_corner as Real);
                points.push([
                    center.x + r_eff * angle.cos(),
                    center.y + r_eff * angle.sin(),
                ]);
            }
        }

        points
    }

    /// Extrude the profile straight up from z=0 to z=`height`.
    ///
    /// The result is watertight: side quads share their edges with the cap
    /// triangulations exactly because both are built from the same outline.
    pub fn extrude(&self, height: Real) -> Result<Solid, ValidationError> {
        if !(height > 0.0) {
            return Err(ValidationError::NonPositiveHeight(height));
        }

        let ring = self.outline();
        let triangles = triangulate_2d(&ring);

        let mut polygons = Vec::new();

        // Bottom cap faces -Z, so the CCW triangles are reversed
        for tri in &triangles {
            polygons.push(Polygon::new(vec![
                Vertex::new(Point3::new(tri[0].x, tri[0].y, 0.0), -Vector3::z()),
                Vertex::new(Point3::new(tri[2].x, tri[2].y, 0.0), -Vector3::z()),
                Vertex::new(Point3::new(tri[1].x, tri[1].y, 0.0), -Vector3::z()),
            ]));
        }

        // Top cap faces +Z
        for tri in &triangles {
            polygons.push(Polygon::new(vec![
                Vertex::new(Point3::new(tri[0].x, tri[0].y, height), Vector3::z()),
                Vertex::new(Point3::new(tri[1].x, tri[1].y, height), Vector3::z()),
                Vertex::new(Point3::new(tri[2].x, tri[2].y, height), Vector3::z()),
            ]));
        }

        // One outward-facing quad per outline edge
        let n = ring.len();
        for i in 0..n {
            let [x0, y0] = ring[i];
            let [x1, y1] = ring[(i + 1) % n];
            let d = Vector2::new(x1 - x0, y1 - y0);
            if d.norm_squared() < EPSILON * EPSILON {
                continue;
            }
            // Outward normal of a CCW loop edge
            let normal = Vector3::new(d.y, -d.x, 0.0).normalize();
            polygons.push(Polygon::new(vec![
                Vertex::new(Point3::new(x0, y0, 0.0), normal),
                Vertex::new(Point3::new(x1, y1, 0.0), normal),
                Vertex::new(Point3::new(x1, y1, height), normal),
                Vertex::new(Point3::new(x0, y0, height), normal),
            ]));
        }

        Ok(Solid::from_polygons(&polygons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_corners() {
        let err = Profile::new([(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewPoints { min: 3, got: 2 });
    }

    #[test]
    fn rejects_clockwise_winding() {
        let err = Profile::new([
            (0.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::NotCounterClockwise);
    }

    #[test]
    fn rejects_crossing_edges() {
        // The last two edges both cross the bottom edge
        let err = Profile::new([
            (0.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
            (4.0, 4.0, 0.0),
            (2.0, -1.0, 0.0),
            (0.0, 4.0, 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, ValidationError::SelfIntersection(_, _)));
    }

    #[test]
    fn sharp_outline_keeps_corner_points() {
        let profile = Profile::new([
            (0.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(
            profile.outline(),
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]]
        );
    }

    #[test]
    fn fillet_arc_stays_inside_corner() {
        let profile = Profile::new([
            (0.0, 0.0, 1.0),
            (10.0, 0.0, 0.0),
            (10.0, 10.0, 0.0),
            (0.0, 10.0, 0.0),
        ])
        .unwrap();
        let outline = profile.outline();
        // Every sample of the rounded corner lies on the fillet circle
        // centered one radius inside the corner.
        for p in outline.iter().filter(|p| p[0] < 1.5 && p[1] < 1.5) {
            let d = ((p[0] - 1.0).powi(2) + (p[1] - 1.0).powi(2)).sqrt();
            assert!((d - 1.0).abs() < 1e-9, "sample {p:?} off the fillet circle");
        }
    }

    #[test]
    fn oversized_radius_is_clamped() {
        // Radius larger than the short edges can host
        let profile = Profile::new([
            (0.0, 0.0, 5.0),
            (2.0, 0.0, 0.0),
            (2.0, 2.0, 0.0),
            (0.0, 2.0, 0.0),
        ])
        .unwrap();
        let outline = profile.outline();
        for p in &outline {
            assert!(p[0] >= -1e-9 && p[1] >= -1e-9, "sample {p:?} escaped");
        }
    }

    #[test]
    fn extrusion_is_watertight() {
        let solid = Profile::rounded_rectangle(20.0, 10.0, 2.0)
            .unwrap()
            .extrude(5.0)
            .unwrap();
        assert!(solid.is_watertight());
        let bb = solid.bounding_box();
        assert!((bb.mins.z).abs() < 1e-9);
        assert!((bb.maxs.z - 5.0).abs() < 1e-9);
    }

    #[test]
    fn extrusion_rejects_zero_height() {
        let profile = Profile::rounded_rectangle(4.0, 4.0, 0.5).unwrap();
        assert_eq!(
            profile.extrude(0.0).unwrap_err(),
            ValidationError::NonPositiveHeight(0.0)
        );
    }
}
