//! Material laws mapping the state of the fluids in the pore space to
//! capillary pressures and relative permeabilities.
//!
//! A law fills caller-provided containers with one value per phase, in the
//! phase order of its traits record. Each law also reports a [`Capabilities`]
//! descriptor so that a consumer can skip derivatives that are zero by
//! construction.

pub mod piecewise_linear;

pub use piecewise_linear::{PiecewiseLinearParams, PiecewiseLinearTwoPhase};

use num_traits::Float;

use crate::{FluidState, MaterialError};

/// Which quantities a material law depends on, and which APIs it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub num_phases: usize,
    /// Offers the two-phase API taking a fluid state
    pub implements_two_phase_api: bool,
    /// Offers the two-phase API taking only a saturation
    pub implements_two_phase_sat_api: bool,
    pub is_saturation_dependent: bool,
    pub is_pressure_dependent: bool,
    pub is_temperature_dependent: bool,
    pub is_composition_dependent: bool,
}

/// Common interface of the material laws.
///
/// Every `values` container must have exactly `num_phases` entries.
pub trait MaterialLaw<T: Float> {
    fn capabilities(&self) -> Capabilities;

    /// Capillary pressure of every phase relative to the reference phase
    fn capillary_pressures<F>(&self, values: &mut [T], fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    /// Phase saturations from the phase pressures
    fn saturations<F>(&self, values: &mut [T], fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    fn relative_permeabilities<F>(&self, values: &mut [T], fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    /// ∂pc/∂S of all capillary pressures with respect to the saturation of `sat_phase`
    fn d_capillary_pressures_d_saturation<F>(
        &self,
        values: &mut [T],
        fs: &F,
        sat_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    /// ∂pc/∂p of all capillary pressures with respect to the pressure of `p_phase`
    fn d_capillary_pressures_d_pressure<F>(
        &self,
        values: &mut [T],
        fs: &F,
        p_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    fn d_capillary_pressures_d_temperature<F>(
        &self,
        values: &mut [T],
        fs: &F,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    /// ∂pc/∂x of all capillary pressures with respect to the mole fraction
    /// of `component` in `phase`
    fn d_capillary_pressures_d_mole_fraction<F>(
        &self,
        values: &mut [T],
        fs: &F,
        phase: usize,
        component: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    /// ∂kr/∂S of all relative permeabilities with respect to the saturation of `sat_phase`
    fn d_relative_permeabilities_d_saturation<F>(
        &self,
        values: &mut [T],
        fs: &F,
        sat_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    fn d_relative_permeabilities_d_pressure<F>(
        &self,
        values: &mut [T],
        fs: &F,
        p_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    fn d_relative_permeabilities_d_temperature<F>(
        &self,
        values: &mut [T],
        fs: &F,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;

    fn d_relative_permeabilities_d_mole_fraction<F>(
        &self,
        values: &mut [T],
        fs: &F,
        phase: usize,
        component: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized;
}

/// Check that a per-phase container has one entry per phase
#[inline]
pub(crate) fn check_len<T>(values: &[T], num_phases: usize) -> Result<(), MaterialError> {
    if values.len() == num_phases {
        Ok(())
    } else {
        Err(MaterialError::LengthMismatch {
            expected: num_phases,
            got: values.len(),
        })
    }
}
