use std::ops::Sub;

/// A predicate deciding whether two pixels belong to the same region.
///
/// Implementations must be symmetric and reflexive. Transitivity is not
/// required, but an intransitive predicate can chain dissimilar pixels into
/// one region through a path of pairwise-equal neighbors.
///
/// Any closure `Fn(&P, &P) -> bool` is a predicate.
pub trait PixelEquality<P: ?Sized> {
    /// Returns true if `a` and `b` are considered equal.
    fn equal(&self, a: &P, b: &P) -> bool;
}

/// Plain value equality through [`PartialEq`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEquality;

impl<P: PartialEq + ?Sized> PixelEquality<P> for DefaultEquality {
    #[inline]
    fn equal(&self, a: &P, b: &P) -> bool {
        a == b
    }
}

impl<P: ?Sized, F> PixelEquality<P> for F
where
    F: Fn(&P, &P) -> bool,
{
    #[inline]
    fn equal(&self, a: &P, b: &P) -> bool {
        self(a, b)
    }
}

/// Two values are equal when their absolute difference is at most the tolerance.
///
/// # Examples
///
/// ```
/// use labelkit_imgproc::label::{PixelEquality, Tolerance};
///
/// let equal = Tolerance(2u8);
///
/// assert!(equal.equal(&10, &12));
/// assert!(!equal.equal(&12, &9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tolerance<T>(pub T);

impl<T> PixelEquality<T> for Tolerance<T>
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        let diff = if a > b { *a - *b } else { *b - *a };
        diff <= self.0
    }
}
