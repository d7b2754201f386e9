//! Tabulated one-dimensional curves: an ascending list of samples,
//! a bisection locator for the segment bracketing a query, and
//! piecewise-linear evaluators with either linear extrapolation or
//! hold-last clamping beyond the tabulated range.

pub mod linear;
pub mod locate;

use alloc::vec::Vec;

use itertools::Itertools;
use num_traits::Float;

use crate::MaterialError;

pub use linear::{Linear, LinearHoldLast};
pub use locate::{classify, find_segment};

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// The segment of a table that brackets (or is nearest to) a query point.
///
/// For queries outside the table, `x0..x1` does not contain the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSample<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
    pub extrap: Extrap,
}

/// Ordered `(x, y)` samples of a curve, ascending in `x`, with at least two points.
///
/// Tables are validated once when they are built and are immutable afterwards,
/// so every evaluator can assume the invariants without checking them again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<(T, T)>",
        into = "Vec<(T, T)>",
        bound(
            serialize = "T: Float + serde::Serialize",
            deserialize = "T: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct SampleTable<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> SampleTable<T> {
    /// Build a table from its abscissa and value columns.
    ///
    /// # Errors
    /// * If the columns have different lengths
    /// * If there are fewer than 2 samples
    /// * If any sample is not finite
    /// * If the abscissae are not ascending
    /// * If the first or last segment has zero width
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, MaterialError> {
        if xs.len() != ys.len() {
            return Err(MaterialError::LengthMismatch {
                expected: xs.len(),
                got: ys.len(),
            });
        }
        let n = xs.len();
        if n < 2 {
            return Err(MaterialError::TooFewSamples(n));
        }
        if let Some(i) = (0..n).find(|&i| !(xs[i].is_finite() && ys[i].is_finite())) {
            return Err(MaterialError::NonFiniteSample(i));
        }
        if let Some((i, _)) = xs
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b < a)
        {
            return Err(MaterialError::NotAscending(i));
        }
        // Only the boundary segments can be selected with zero width
        if xs[1] <= xs[0] {
            return Err(MaterialError::DegenerateSegment(0));
        }
        if xs[n - 1] <= xs[n - 2] {
            return Err(MaterialError::DegenerateSegment(n - 2));
        }

        let steps = xs.iter().tuple_windows().filter(|(a, b)| a == b).count();
        if steps > 0 {
            log::warn!("sample table has {steps} repeated abscissae; the curve is discontinuous there");
        }
        log::debug!("built sample table with {n} points");

        Ok(Self { xs, ys })
    }

    /// Build a table from `(x, y)` pairs.
    ///
    /// # Errors
    /// * Same as [`SampleTable::new`]
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MaterialError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (xs, ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Number of samples, always at least 2
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// First sample as `(x, y)`
    #[inline]
    pub fn front(&self) -> (T, T) {
        (self.xs[0], self.ys[0])
    }

    /// Last sample as `(x, y)`
    #[inline]
    pub fn back(&self) -> (T, T) {
        let n = self.len();
        (self.xs[n - 1], self.ys[n - 1])
    }

    /// Tabulated abscissa range `(first x, last x)`
    #[inline]
    pub fn x_range(&self) -> (T, T) {
        (self.xs[0], self.xs[self.len() - 1])
    }

    /// Iterate over the samples as `(x, y)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Locate the segment for an observation point and return its endpoints.
    ///
    /// It is highly recommended to inline calls to this function.
    #[inline]
    pub fn at(&self, loc: T) -> TableSample<T> {
        let i = find_segment(&self.xs, loc);
        TableSample {
            x0: self.xs[i],
            y0: self.ys[i],
            x1: self.xs[i + 1],
            y1: self.ys[i + 1],
            extrap: classify(&self.xs, loc),
        }
    }
}

impl<T: Float> TryFrom<Vec<(T, T)>> for SampleTable<T> {
    type Error = MaterialError;

    fn try_from(pairs: Vec<(T, T)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl<T: Float> From<SampleTable<T>> for Vec<(T, T)> {
    fn from(table: SampleTable<T>) -> Self {
        table.xs.into_iter().zip(table.ys).collect()
    }
}

/// A one-dimensional tabulated curve with a value and a derivative.
pub trait Curve1D<T: Float> {
    /// Evaluate the curve at an observation point.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the derivative of the curve at an observation point.
    fn deriv_one(&self, loc: T) -> T;

    /// Evaluate the curve at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), MaterialError> {
        if locs.len() != out.len() {
            return Err(MaterialError::LengthMismatch {
                expected: locs.len(),
                got: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the derivative at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    #[inline]
    fn deriv(&self, locs: &[T], out: &mut [T]) -> Result<(), MaterialError> {
        if locs.len() != out.len() {
            return Err(MaterialError::LengthMismatch {
                expected: locs.len(),
                got: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.deriv_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the curve at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        locs.iter().map(|&x| self.eval_one(x)).collect()
    }
}
