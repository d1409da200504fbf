//! Cubic regions of 3D space, stored the way the tree's pruning step wants
//! to read them: an explicit center plus a scalar edge length.

use nalgebra::Point3;

use crate::{Float, Octant};

/// Squared Euclidean distance between two points.
#[inline]
pub(crate) fn distance_squared<R: Float>(a: &Point3<R>, b: &Point3<R>) -> R {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    dx * dx + dy * dy + dz * dz
}

/// Axis-Aligned Cube, as center + edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube<R: Float> {
    pub center: Point3<R>,
    pub size: R,
}

impl<R: Float> Cube<R> {
    pub fn new(center: Point3<R>, size: R) -> Self {
        Self { center, size }
    }

    /// Bounding cube of a point set: centered on the centroid, sized to the
    /// largest per-axis extent. Conservative, not minimal.
    ///
    /// `None` for an empty set, which has no centroid.
    pub fn from_points(points: &[Point3<R>]) -> Option<Self> {
        let first = points.first()?;
        let mut sum = first.coords;
        let mut mins = *first;
        let mut maxs = *first;
        for p in &points[1..] {
            sum += p.coords;
            mins = mins.inf(p);
            maxs = maxs.sup(p);
        }
        Some(Self {
            center: Point3::from(sum / R::from_usize(points.len())),
            size: (maxs - mins).max(),
        })
    }

    /// The lower corner of `self`.
    pub fn mins(&self) -> Point3<R> {
        let h = self.size / R::TWO;
        Point3::new(self.center.x - h, self.center.y - h, self.center.z - h)
    }

    /// The upper corner of `self`.
    pub fn maxs(&self) -> Point3<R> {
        let h = self.size / R::TWO;
        Point3::new(self.center.x + h, self.center.y + h, self.center.z + h)
    }

    /// Construct the cube occupying the [Octant] `oct` of `self`.
    pub fn child(&self, oct: Octant) -> Self {
        let q = self.size / (R::TWO + R::TWO);
        Self {
            center: self.center + oct.signs::<R>() * q,
            size: self.size / R::TWO,
        }
    }

    /// Whether `p` lies within this cube's inscribed ball, i.e. no farther
    /// than half the edge from the center.
    ///
    /// This is the routing test: a point outside the inscribed ball stays at
    /// the owning node instead of descending into a child.
    #[inline]
    pub fn encloses(&self, p: &Point3<R>) -> bool {
        let h = self.size / R::TWO;
        distance_squared(&self.center, p) <= h * h
    }

    /// Upper bound on the distance from `center` to any point a node with
    /// these bounds can hold in its subtree.
    ///
    /// A node's local points were admitted through its parent's routing ball
    /// (radius `size`, this cube's own edge) and this center sits `√3·size/2`
    /// from the parent's; anything deeper lies within `size/2` by the routing
    /// test itself.
    #[inline]
    pub fn reach(&self) -> R {
        self.size * (R::ONE + R::SQRT_3 / R::TWO)
    }
}

#[cfg(feature = "spatial")]
impl From<Cube<parry3d::math::Real>> for parry3d::bounding_volume::Aabb {
    fn from(c: Cube<parry3d::math::Real>) -> Self {
        Self {
            mins: c.mins(),
            maxs: c.maxs(),
        }
    }
}

#[cfg(feature = "spatial")]
impl From<parry3d::bounding_volume::Aabb> for Cube<parry3d::math::Real> {
    fn from(bb: parry3d::bounding_volume::Aabb) -> Self {
        Self {
            center: bb.center(),
            size: (bb.maxs - bb.mins).max(),
        }
    }
}
