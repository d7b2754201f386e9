//! Pure chemical components with constant properties.

use num_traits::Float;

/// Constant property lookups of a component in its liquid state.
///
/// Temperature is in K and pressure in Pa.
pub trait Component<T: Float> {
    /// A human readable name
    fn name(&self) -> &'static str;

    /// Whether the liquid is assumed to be compressible
    fn liquid_is_compressible(&self) -> bool;

    /// Liquid density in kg/m³
    fn liquid_density(&self, temperature: T, pressure: T) -> T;

    /// Liquid dynamic viscosity in Pa·s
    fn liquid_viscosity(&self, temperature: T, pressure: T) -> T;
}

/// A light non-aqueous phase liquid, e.g. a kind of oil.
///
/// Density and viscosity are rough estimates independent of the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lnapl;

impl Lnapl {
    pub const DENSITY: f64 = 890.0;
    pub const VISCOSITY: f64 = 8e-3;
}

impl<T: Float> Component<T> for Lnapl {
    fn name(&self) -> &'static str {
        "LNAPL"
    }

    fn liquid_is_compressible(&self) -> bool {
        false
    }

    fn liquid_density(&self, _temperature: T, _pressure: T) -> T {
        T::from(Self::DENSITY).unwrap_or_else(T::nan)
    }

    fn liquid_viscosity(&self, _temperature: T, _pressure: T) -> T {
        T::from(Self::VISCOSITY).unwrap_or_else(T::nan)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{Component, Lnapl};

    #[test]
    fn test_lnapl() {
        let c = Lnapl;
        assert_eq!(Component::<f64>::name(&c), "LNAPL");
        assert!(!Component::<f64>::liquid_is_compressible(&c));
        assert_eq!(c.liquid_density(293.15_f64, 1e5), 890.0);
        assert_eq!(c.liquid_density(400.0_f64, 1e7), 890.0);
        assert_relative_eq!(c.liquid_viscosity(293.15_f32, 1e5), 8e-3_f32);
    }
}
