use nalgebra::{Point3, Vector3};

use crate::Float;

/// A way to refer to octants in a 3D volume.
///
/// The three axis comparisons of a point against a region's center pack into
/// one child-array index: bit 2/1/0 is set iff the point's x/y/z coordinate
/// exceeds the center's.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Octant(pub u8);

impl Octant {
    /// Iterator through all possible octants.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }

    /// Construct an Octant from per-axis comparisons.
    pub fn new(i: bool, j: bool, k: bool) -> Self {
        Self((i as u8 * 0b100) | (j as u8 * 0b010) | (k as u8))
    }

    /// Find the Octant of a point `p` relative to a center `c`.
    ///
    /// This works even for `p` outside any particular volume around `c`; the
    /// result is the octant `p` occupies in an unbounded partition of space
    /// through `c`.
    pub fn from_center<R: Float>(c: &Point3<R>, p: &Point3<R>) -> Self {
        Self::new(p.x > c.x, p.y > c.y, p.z > c.z)
    }

    /// The `i` (x-axis) component of self.
    #[inline]
    pub fn i(self) -> bool {
        self.0 & 0b100 != 0
    }
    /// The `j` (y-axis) component of self.
    #[inline]
    pub fn j(self) -> bool {
        self.0 & 0b010 != 0
    }
    /// The `k` (z-axis) component of self.
    #[inline]
    pub fn k(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Per-axis signs (±1) pointing from a region's center into this octant.
    ///
    /// Child centers are offset from their parent's by `sign · size/4` per
    /// axis; the sign comes from the octant bit, never the raw bit value.
    pub fn signs<R: Float>(self) -> Vector3<R> {
        #[inline]
        fn sign<R: Float>(set: bool) -> R {
            if set {
                R::ONE
            } else {
                -R::ONE
            }
        }
        Vector3::new(sign(self.i()), sign(self.j()), sign(self.k()))
    }
}

impl From<Octant> for usize {
    fn from(oct: Octant) -> Self {
        oct.0 as usize
    }
}

impl From<Octant> for u8 {
    fn from(oct: Octant) -> Self {
        oct.0
    }
}
