//! Piecewise-linear evaluation of a sample table.

use num_traits::Float;

use super::{Curve1D, Extrap, SampleTable, TableSample};

/// Linearly interpolate on a segment. Outside of `x0..x1` this extends the
/// segment's line.
///
/// Both segment ends reproduce their sample value exactly, so a curve that
/// holds its last value beyond the table is continuous at the last sample.
#[inline]
pub fn value<T: Float>(s: &TableSample<T>, loc: T) -> T {
    if loc == s.x1 {
        return s.y1;
    }
    let alpha = (loc - s.x0) / (s.x1 - s.x0);
    s.y0 + (s.y1 - s.y0) * alpha
}

/// Constant slope of a segment
#[inline]
pub fn slope<T: Float>(s: &TableSample<T>) -> T {
    (s.y1 - s.y0) / (s.x1 - s.x0)
}

/// Simple linear interpolation / extrapolation.
///
/// Beyond the table, the boundary segment's line is continued and the
/// derivative is that segment's slope.
#[derive(Debug, Clone, Copy)]
pub struct Linear<'a, T> {
    table: &'a SampleTable<T>,
}

impl<'a, T: Float> Linear<'a, T> {
    pub fn new(table: &'a SampleTable<T>) -> Self {
        Self { table }
    }
}

impl<T: Float> Curve1D<T> for Linear<'_, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        value(&self.table.at(loc), loc)
    }

    #[inline]
    fn deriv_one(&self, loc: T) -> T {
        slope(&self.table.at(loc))
    }
}

/// Linear interpolation with hold-last extrapolation;
/// holds the leftmost value when extrapolating low, and the rightmost
/// value when extrapolating high. The derivative is zero outside.
#[derive(Debug, Clone, Copy)]
pub struct LinearHoldLast<'a, T> {
    table: &'a SampleTable<T>,
}

impl<'a, T: Float> LinearHoldLast<'a, T> {
    pub fn new(table: &'a SampleTable<T>) -> Self {
        Self { table }
    }
}

impl<T: Float> Curve1D<T> for LinearHoldLast<'_, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        let s = self.table.at(loc);
        match s.extrap {
            Extrap::Inside => value(&s, loc),
            Extrap::OutsideLow => s.y0,
            Extrap::OutsideHigh => s.y1,
        }
    }

    #[inline]
    fn deriv_one(&self, loc: T) -> T {
        let s = self.table.at(loc);
        match s.extrap {
            Extrap::Inside => slope(&s),
            _ => T::zero(),
        }
    }
}
