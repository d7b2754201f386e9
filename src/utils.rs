//! Convenience methods for building sample tables from closed-form curves,
//! e.g. to tabulate a Corey-type relative permeability for a rock type.
use alloc::vec::Vec;

use num_traits::Float;

use crate::{MaterialError, SampleTable};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let cast = |i: usize| T::from(i).unwrap_or_else(T::nan);
    let dx: T = (stop - start) / cast(n.saturating_sub(1));
    (0..n).map(|i| start + cast(i) * dx).collect()
}

/// Tabulate `f` at `n` evenly spaced abscissae between `start` and `stop`.
///
/// # Errors
/// * If the resulting table is invalid (`n < 2`, non-finite values, `start >= stop`)
pub fn tabulate<T, F>(start: T, stop: T, n: usize, f: F) -> Result<SampleTable<T>, MaterialError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if n < 2 {
        return Err(MaterialError::TooFewSamples(n));
    }
    let xs = linspace(start, stop, n);
    let ys = xs.iter().map(|&x| f(x)).collect();
    SampleTable::new(xs, ys)
}

/// Tabulate a Corey-type relative permeability `kr = kr_max * se^exponent`
/// against wetting saturation, where `se = (sw - sw_min) / (sw_max - sw_min)`.
///
/// With `rising = false` the curve is mirrored (`se` replaced by `1 - se`),
/// which is the shape of a non-wetting curve indexed by wetting saturation.
///
/// # Errors
/// * If the resulting table is invalid
pub fn corey_table<T: Float>(
    sw_min: T,
    sw_max: T,
    kr_max: T,
    exponent: T,
    n: usize,
    rising: bool,
) -> Result<SampleTable<T>, MaterialError> {
    tabulate(sw_min, sw_max, n, |sw| {
        let se = (sw - sw_min) / (sw_max - sw_min);
        let se = if rising { se } else { T::one() - se };
        kr_max * se.max(T::zero()).powf(exponent)
    })
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{corey_table, linspace, tabulate};
    use crate::MaterialError;

    #[test]
    fn test_linspace() {
        let x = linspace(-1.0_f64, 1.0, 5);
        assert_eq!(x, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_tabulate() {
        let t = tabulate(0.0_f64, 1.0, 3, |x| 2.0 * x).unwrap();
        assert_eq!(t.ys(), &[0.0, 1.0, 2.0]);
        assert_eq!(
            tabulate(0.0_f64, 1.0, 1, |x| x).unwrap_err(),
            MaterialError::TooFewSamples(1)
        );
        assert_eq!(
            tabulate(1.0_f64, 1.0, 3, |x| x).unwrap_err(),
            MaterialError::DegenerateSegment(0)
        );
    }

    #[test]
    fn test_corey_table() {
        let krw = corey_table(0.2_f64, 1.0, 1.0, 2.0, 5, true).unwrap();
        assert_eq!(krw.front(), (0.2, 0.0));
        assert_relative_eq!(krw.back().1, 1.0, epsilon = 1e-14);
        assert_relative_eq!(krw.ys()[2], 0.25, epsilon = 1e-14);

        let krn = corey_table(0.2_f64, 1.0, 0.8, 2.0, 5, false).unwrap();
        assert_relative_eq!(krn.front().1, 0.8, epsilon = 1e-14);
        assert_relative_eq!(krn.back().1, 0.0, epsilon = 1e-14);
    }
}
