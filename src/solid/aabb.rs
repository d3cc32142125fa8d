//! Axis-aligned bounding boxes, used to short-circuit Boolean operations
//! on polygon sets that cannot interact.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Aabb { mins, maxs }
    }

    /// An inverted box that grows to fit the first point it absorbs
    pub fn empty() -> Self {
        Aabb {
            mins: Point3::new(Real::MAX, Real::MAX, Real::MAX),
            maxs: Point3::new(-Real::MAX, -Real::MAX, -Real::MAX),
        }
    }

    /// Smallest box containing all `points`
    pub fn from_points<I: IntoIterator<Item = Point3<Real>>>(points: I) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.absorb(p);
        }
        bb
    }

    /// Grow to include `p`
    pub fn absorb(&mut self, p: Point3<Real>) {
        self.mins.x = self.mins.x.min(p.x);
        self.mins.y = self.mins.y.min(p.y);
        self.mins.z = self.mins.z.min(p.z);
        self.maxs.x = self.maxs.x.max(p.x);
        self.maxs.y = self.maxs.y.max(p.y);
        self.maxs.z = self.maxs.z.max(p.z);
    }

    /// True when the two boxes overlap or touch on any axis
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && self.maxs.x >= other.mins.x
            && self.mins.y <= other.maxs.y
            && self.maxs.y >= other.mins.y
            && self.mins.z <= other.maxs.z
            && self.maxs.z >= other.mins.z
    }

    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    pub fn size(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}
