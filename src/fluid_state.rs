//! Per-phase thermodynamic state consumed by material laws.
//!
//! Material laws only read from a fluid state; the state itself is filled
//! by the surrounding simulator.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::MaterialError;

/// Read access to the quantities of a multi-phase, multi-component fluid.
///
/// Phase and component indices are assumed to be in range; implementations
/// may panic otherwise.
pub trait FluidState<T: Float> {
    fn num_phases(&self) -> usize;

    fn num_components(&self) -> usize;

    /// Volume fraction of the pore space occupied by a phase
    fn saturation(&self, phase: usize) -> T;

    fn pressure(&self, phase: usize) -> T;

    fn temperature(&self, phase: usize) -> T;

    fn mole_fraction(&self, phase: usize, component: usize) -> T;

    /// Fugacity of a component in a phase
    fn fugacity(&self, phase: usize, component: usize) -> T;

    fn density(&self, phase: usize) -> T;

    fn viscosity(&self, phase: usize) -> T;

    /// Specific enthalpy, or `None` if the state does not carry it
    fn enthalpy(&self, _phase: usize) -> Option<T> {
        None
    }
}

/// A fluid state storing every quantity explicitly, one value per phase.
///
/// Temperatures are stored per phase since the phases are not assumed to be
/// in thermal equilibrium. Enthalpies are only stored when enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitFluidState<T> {
    num_components: usize,
    saturation: Vec<T>,
    pressure: Vec<T>,
    temperature: Vec<T>,
    /// Row-major `[phase][component]`
    mole_fraction: Vec<T>,
    /// Row-major `[phase][component]`
    fugacity: Vec<T>,
    density: Vec<T>,
    viscosity: Vec<T>,
    enthalpy: Option<Vec<T>>,
}

impl<T: Float> ExplicitFluidState<T> {
    /// A zeroed state without enthalpies
    pub fn new(num_phases: usize, num_components: usize) -> Self {
        Self {
            num_components,
            saturation: vec![T::zero(); num_phases],
            pressure: vec![T::zero(); num_phases],
            temperature: vec![T::zero(); num_phases],
            mole_fraction: vec![T::zero(); num_phases * num_components],
            fugacity: vec![T::zero(); num_phases * num_components],
            density: vec![T::zero(); num_phases],
            viscosity: vec![T::zero(); num_phases],
            enthalpy: None,
        }
    }

    /// A zeroed state that also stores one enthalpy per phase
    pub fn with_enthalpy(num_phases: usize, num_components: usize) -> Self {
        Self {
            enthalpy: Some(vec![T::zero(); num_phases]),
            ..Self::new(num_phases, num_components)
        }
    }

    /// Set all phase saturations at once.
    ///
    /// # Errors
    /// * If `values` does not have one entry per phase
    pub fn set_saturations(&mut self, values: &[T]) -> Result<(), MaterialError> {
        if values.len() != self.saturation.len() {
            return Err(MaterialError::LengthMismatch {
                expected: self.saturation.len(),
                got: values.len(),
            });
        }
        self.saturation.copy_from_slice(values);
        Ok(())
    }

    pub fn set_saturation(&mut self, phase: usize, value: T) {
        self.saturation[phase] = value;
    }

    pub fn set_pressure(&mut self, phase: usize, value: T) {
        self.pressure[phase] = value;
    }

    pub fn set_temperature(&mut self, phase: usize, value: T) {
        self.temperature[phase] = value;
    }

    pub fn set_mole_fraction(&mut self, phase: usize, component: usize, value: T) {
        self.mole_fraction[phase * self.num_components + component] = value;
    }

    pub fn set_fugacity(&mut self, phase: usize, component: usize, value: T) {
        self.fugacity[phase * self.num_components + component] = value;
    }

    pub fn set_density(&mut self, phase: usize, value: T) {
        self.density[phase] = value;
    }

    pub fn set_viscosity(&mut self, phase: usize, value: T) {
        self.viscosity[phase] = value;
    }

    /// Set the enthalpy of a phase; ignored if enthalpies are not stored
    pub fn set_enthalpy(&mut self, phase: usize, value: T) {
        if let Some(h) = self.enthalpy.as_mut() {
            h[phase] = value;
        }
    }

    /// Copy every quantity from another state with the same dimensions.
    /// Enthalpies are copied only if both states store them.
    ///
    /// # Errors
    /// * If the number of phases or components differ
    pub fn assign<F: FluidState<T> + ?Sized>(&mut self, other: &F) -> Result<(), MaterialError> {
        let np = self.saturation.len();
        if other.num_phases() != np {
            return Err(MaterialError::LengthMismatch {
                expected: np,
                got: other.num_phases(),
            });
        }
        if other.num_components() != self.num_components {
            return Err(MaterialError::LengthMismatch {
                expected: self.num_components,
                got: other.num_components(),
            });
        }
        for p in 0..np {
            self.saturation[p] = other.saturation(p);
            self.pressure[p] = other.pressure(p);
            self.temperature[p] = other.temperature(p);
            self.density[p] = other.density(p);
            self.viscosity[p] = other.viscosity(p);
            for c in 0..self.num_components {
                self.set_mole_fraction(p, c, other.mole_fraction(p, c));
                self.set_fugacity(p, c, other.fugacity(p, c));
            }
            if let Some(h) = other.enthalpy(p) {
                self.set_enthalpy(p, h);
            }
        }
        Ok(())
    }
}

impl<T: Float> FluidState<T> for ExplicitFluidState<T> {
    #[inline]
    fn num_phases(&self) -> usize {
        self.saturation.len()
    }

    #[inline]
    fn num_components(&self) -> usize {
        self.num_components
    }

    #[inline]
    fn saturation(&self, phase: usize) -> T {
        self.saturation[phase]
    }

    #[inline]
    fn pressure(&self, phase: usize) -> T {
        self.pressure[phase]
    }

    #[inline]
    fn temperature(&self, phase: usize) -> T {
        self.temperature[phase]
    }

    #[inline]
    fn mole_fraction(&self, phase: usize, component: usize) -> T {
        self.mole_fraction[phase * self.num_components + component]
    }

    #[inline]
    fn fugacity(&self, phase: usize, component: usize) -> T {
        self.fugacity[phase * self.num_components + component]
    }

    #[inline]
    fn density(&self, phase: usize) -> T {
        self.density[phase]
    }

    #[inline]
    fn viscosity(&self, phase: usize) -> T {
        self.viscosity[phase]
    }

    #[inline]
    fn enthalpy(&self, phase: usize) -> Option<T> {
        self.enthalpy.as_ref().map(|h| h[phase])
    }
}

#[cfg(test)]
mod test {
    use super::{ExplicitFluidState, FluidState};

    #[test]
    fn test_explicit_fluid_state() {
        let mut fs = ExplicitFluidState::<f64>::new(2, 3);
        assert_eq!((fs.num_phases(), fs.num_components()), (2, 3));

        fs.set_saturations(&[0.3, 0.7]).unwrap();
        assert!(fs.set_saturations(&[1.0]).is_err());
        fs.set_pressure(1, 2e5);
        fs.set_temperature(0, 293.15);
        fs.set_mole_fraction(1, 2, 0.25);
        fs.set_fugacity(0, 1, 1.5e3);
        fs.set_density(0, 1000.0);
        fs.set_viscosity(0, 1e-3);
        fs.set_enthalpy(0, 42.0);

        assert_eq!(fs.saturation(1), 0.7);
        assert_eq!(fs.pressure(1), 2e5);
        assert_eq!(fs.temperature(0), 293.15);
        assert_eq!(fs.mole_fraction(1, 2), 0.25);
        assert_eq!(fs.mole_fraction(0, 2), 0.0);
        assert_eq!(fs.fugacity(0, 1), 1.5e3);
        assert_eq!(fs.fugacity(1, 0), 0.0);
        assert_eq!(fs.density(0), 1000.0);
        assert_eq!(fs.viscosity(0), 1e-3);
        assert_eq!(fs.enthalpy(0), None);
    }

    #[test]
    fn test_enthalpy_and_assign() {
        let mut src = ExplicitFluidState::<f64>::with_enthalpy(2, 1);
        src.set_saturation(0, 0.4);
        src.set_saturation(1, 0.6);
        src.set_mole_fraction(1, 0, 1.0);
        src.set_fugacity(1, 0, 9.8e4);
        src.set_enthalpy(1, 3.5e4);
        assert_eq!(src.enthalpy(1), Some(3.5e4));

        let mut dst = ExplicitFluidState::<f64>::with_enthalpy(2, 1);
        dst.assign(&src).unwrap();
        assert_eq!(dst, src);
        assert_eq!(dst.fugacity(1, 0), 9.8e4);

        let mut other = ExplicitFluidState::<f64>::new(3, 1);
        assert!(other.assign(&src).is_err());
    }
}
