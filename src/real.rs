use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Trait for floating-point types, so that trees can be generic over
/// {f32, f64} without weird macros at every use site.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + nalgebra::SimdPartialOrd
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Copy
    + Send
    + Sync
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    /// √3, the diagonal of a unit cube.
    const SQRT_3: Self;

    /// Conversion from a count, for centroid averaging.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_float {
    ($($Real:ty),+) => {$(
        impl Float for $Real {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const SQRT_3: Self = 1.732_050_807_568_877_293_5;

            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $Real
            }
        }
    )+};
}

impl_float!(f32, f64);
