//! Segment location on an ascending table of abscissae.

use num_traits::Float;

use super::Extrap;

/// Get the index `i` of the segment `xs[i]..=xs[i + 1]` containing `x`.
///
/// Points outside the table saturate to the boundary segments: `0` below the
/// first sample and `n - 2` above the last one, so the caller extrapolates
/// with the boundary segment's slope.
///
/// For `xs[0] <= x <= xs[n - 1]` the returned index satisfies
/// `xs[i] <= x <= xs[i + 1]`. A point that coincides with an interior sample
/// lands on the segment to its left.
///
/// Assumes `xs` is ascending with at least two entries, which
/// [`SampleTable`](super::SampleTable) guarantees on construction.
#[inline]
pub fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2, "need at least two sampling points");
    let n = xs.len() - 1;
    if xs[n] < x {
        return n - 1;
    } else if xs[0] > x {
        return 0;
    }

    // Bisection search; `lo` only moves onto samples strictly below `x`
    let (mut lo, mut hi) = (0_usize, n);
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if xs[mid] < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Classify an observation point against the tabulated range.
/// The endpoints themselves are inside.
#[inline]
pub fn classify<T: Float>(xs: &[T], x: T) -> Extrap {
    match x {
        x if x < xs[0] => Extrap::OutsideLow,
        x if x > xs[xs.len() - 1] => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    }
}

#[cfg(test)]
mod test {
    use super::{classify, find_segment};
    use crate::table::Extrap;
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::linspace;

    #[test]
    fn test_find_segment_brackets() {
        let rng = &mut rng_fixed_seed();

        for n in [2, 3, 4, 17, 100] {
            let mut xs = randn::<f64>(rng, n);
            xs.sort_unstable_by(|a, b| a.total_cmp(b));

            // Random points and every sample location
            let mut locs = randn::<f64>(rng, 5 * n);
            locs.extend_from_slice(&xs);

            for &x in locs.iter() {
                if x < xs[0] || x > xs[n - 1] {
                    continue;
                }
                let i = find_segment(&xs, x);
                assert!(i <= n - 2);
                assert!(
                    xs[i] <= x && x <= xs[i + 1],
                    "Didn't find the correct segment"
                );
            }
        }
    }

    #[test]
    fn test_find_segment_matches_partition_point() {
        let rng = &mut rng_fixed_seed();
        let n = 77;
        let mut xs = randn::<f64>(rng, n);
        xs.sort_unstable_by(|a, b| a.total_cmp(b));

        let mut locs = randn::<f64>(rng, 3 * n);
        locs.iter_mut().for_each(|x| *x = 3.0 * *x - 1.0);

        for &loc in locs.iter() {
            let j: usize = ((xs.partition_point(|v| v < &loc) as isize - 1).max(0) as usize)
                .min(xs.len() - 2);
            assert_eq!(find_segment(&xs, loc), j);
        }
    }

    #[test]
    fn test_find_segment_outside() {
        let xs = linspace(0.0, 1.0, 11);
        assert_eq!(find_segment(&xs, -0.5), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 1.0), 9);
        assert_eq!(find_segment(&xs, 7.0), 9);

        let xs = [0.2, 1.0];
        assert_eq!(find_segment(&xs, -3.0), 0);
        assert_eq!(find_segment(&xs, 0.5), 0);
        assert_eq!(find_segment(&xs, 3.0), 0);
    }

    #[test]
    fn test_find_segment_steps() {
        // Repeated interior abscissa: never select the zero-width segment
        let xs = [0.0, 0.5, 0.5, 1.0];
        assert_eq!(find_segment(&xs, 0.5), 0);
        assert_eq!(find_segment(&xs, 0.25), 0);
        assert_eq!(find_segment(&xs, 0.75), 2);
    }

    #[test]
    fn test_classify() {
        let xs = [0.2, 0.5, 0.8];
        assert_eq!(classify(&xs, 0.1), Extrap::OutsideLow);
        assert_eq!(classify(&xs, 0.2), Extrap::Inside);
        assert_eq!(classify(&xs, 0.8), Extrap::Inside);
        assert_eq!(classify(&xs, 0.9), Extrap::OutsideHigh);
    }
}
