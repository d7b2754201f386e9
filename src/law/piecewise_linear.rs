//! Tabulated, piecewise-linear two-phase capillary pressure and relative
//! permeability law.
//!
//! Capillary pressure is interpolated linearly and extrapolated linearly
//! beyond the table. Relative permeabilities are interpolated linearly and
//! held constant beyond the table, so they never leave their tabulated range.
//!
//! ```rust
//! use pwlaw::{PiecewiseLinearParams, PiecewiseLinearTwoPhase, SampleTable, TwoPhaseTraits};
//!
//! let pcnw = SampleTable::from_pairs([(0.2, 5000.0), (0.5, 1000.0), (0.8, 200.0)]).unwrap();
//! let krw = SampleTable::from_pairs([(0.2, 0.0), (1.0, 1.0)]).unwrap();
//! let krn = SampleTable::from_pairs([(0.0, 1.0), (0.8, 0.0)]).unwrap();
//!
//! let params = PiecewiseLinearParams::new(pcnw, krw, krn);
//! let law = PiecewiseLinearTwoPhase::new(TwoPhaseTraits::wetting_first(), params);
//!
//! assert_eq!(law.two_phase_sat_pcnw(0.5), 1000.0);
//! assert_eq!(law.two_phase_sat_krw(1.5), 1.0);
//! assert!(law.two_phase_sat_sw(1000.0).is_err());
//! ```

use num_traits::Float;

use super::{check_len, Capabilities, MaterialLaw};
use crate::table::{Curve1D, Linear, LinearHoldLast, SampleTable};
use crate::{FluidState, MaterialError, TwoPhaseTraits};

/// The three sample tables configuring a [`PiecewiseLinearTwoPhase`] law.
///
/// All three tables are indexed by wetting-phase saturation. The
/// non-wetting relative permeability table therefore runs "backwards"
/// with respect to the non-wetting saturation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        deny_unknown_fields,
        bound(
            serialize = "T: Float + serde::Serialize",
            deserialize = "T: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct PiecewiseLinearParams<T> {
    /// Capillary pressure pc_nw against S_w
    pub pcnw: SampleTable<T>,
    /// Wetting relative permeability against S_w
    pub krw: SampleTable<T>,
    /// Non-wetting relative permeability against S_w
    pub krn: SampleTable<T>,
}

impl<T: Float> PiecewiseLinearParams<T> {
    pub fn new(pcnw: SampleTable<T>, krw: SampleTable<T>, krn: SampleTable<T>) -> Self {
        Self { pcnw, krw, krn }
    }
}

/// Piecewise-linear two-phase material law.
///
/// Every operation is a pure function of the immutable tables and the query,
/// so a single instance can be shared between threads without locking.
/// Queries cost one bisection search over the relevant table.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearTwoPhase<T> {
    traits: TwoPhaseTraits,
    params: PiecewiseLinearParams<T>,
}

impl<T: Float> PiecewiseLinearTwoPhase<T> {
    pub fn new(traits: TwoPhaseTraits, params: PiecewiseLinearParams<T>) -> Self {
        log::debug!(
            "piecewise-linear two-phase law: wetting={}, non-wetting={}, samples pcnw={} krw={} krn={}",
            traits.wetting(),
            traits.non_wetting(),
            params.pcnw.len(),
            params.krw.len(),
            params.krn.len(),
        );
        Self { traits, params }
    }

    #[inline]
    pub fn traits(&self) -> &TwoPhaseTraits {
        &self.traits
    }

    #[inline]
    pub fn params(&self) -> &PiecewiseLinearParams<T> {
        &self.params
    }

    // Saturation-only API

    /// Capillary pressure pc_nw at wetting saturation `sw`, extrapolated
    /// linearly outside of the table.
    #[inline]
    pub fn two_phase_sat_pcnw(&self, sw: T) -> T {
        Linear::new(&self.params.pcnw).eval_one(sw)
    }

    /// ∂pc_nw/∂S_w, the slope of the segment used by [`Self::two_phase_sat_pcnw`]
    #[inline]
    pub fn two_phase_sat_dpcnw_dsw(&self, sw: T) -> T {
        Linear::new(&self.params.pcnw).deriv_one(sw)
    }

    /// Wetting saturation from capillary pressure.
    ///
    /// A piecewise-linear capillary pressure curve is not guaranteed to be
    /// invertible, so this is not provided.
    ///
    /// # Errors
    /// * Always
    pub fn two_phase_sat_sw(&self, _pc: T) -> Result<T, MaterialError> {
        Err(MaterialError::NotImplemented("two_phase_sat_sw()"))
    }

    /// Non-wetting saturation from capillary pressure.
    ///
    /// # Errors
    /// * Always, see [`Self::two_phase_sat_sw`]
    pub fn two_phase_sat_sn(&self, pc: T) -> Result<T, MaterialError> {
        self.two_phase_sat_sw(pc).map(|sw| T::one() - sw)
    }

    /// Wetting relative permeability, held at the first or last sample
    /// outside of the table.
    #[inline]
    pub fn two_phase_sat_krw(&self, sw: T) -> T {
        LinearHoldLast::new(&self.params.krw).eval_one(sw)
    }

    /// ∂kr_w/∂S_w, zero outside of the table
    #[inline]
    pub fn two_phase_sat_dkrw_dsw(&self, sw: T) -> T {
        LinearHoldLast::new(&self.params.krw).deriv_one(sw)
    }

    /// Non-wetting relative permeability at wetting saturation `sw`, held at
    /// the first or last sample outside of the table.
    #[inline]
    pub fn two_phase_sat_krn(&self, sw: T) -> T {
        LinearHoldLast::new(&self.params.krn).eval_one(sw)
    }

    /// ∂kr_n/∂S_w, zero outside of the non-wetting table
    #[inline]
    pub fn two_phase_sat_dkrn_dsw(&self, sw: T) -> T {
        LinearHoldLast::new(&self.params.krn).deriv_one(sw)
    }

    // Fluid-state API

    #[inline]
    pub fn pcnw<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_pcnw(fs.saturation(self.traits.wetting()))
    }

    #[inline]
    pub fn dpcnw_dsw<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_dpcnw_dsw(fs.saturation(self.traits.wetting()))
    }

    /// # Errors
    /// * Always, see [`Self::two_phase_sat_sw`]
    pub fn sw<F: FluidState<T> + ?Sized>(&self, _fs: &F) -> Result<T, MaterialError> {
        Err(MaterialError::NotImplemented("sw()"))
    }

    /// # Errors
    /// * Always, see [`Self::two_phase_sat_sw`]
    pub fn sn<F: FluidState<T> + ?Sized>(&self, fs: &F) -> Result<T, MaterialError> {
        self.sw(fs).map(|sw| T::one() - sw)
    }

    #[inline]
    pub fn krw<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_krw(fs.saturation(self.traits.wetting()))
    }

    #[inline]
    pub fn dkrw_dsw<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_dkrw_dsw(fs.saturation(self.traits.wetting()))
    }

    /// Non-wetting relative permeability, looked up at `1 - S_n`
    #[inline]
    pub fn krn<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_krn(T::one() - fs.saturation(self.traits.non_wetting()))
    }

    #[inline]
    pub fn dkrn_dsw<F: FluidState<T> + ?Sized>(&self, fs: &F) -> T {
        self.two_phase_sat_dkrn_dsw(fs.saturation(self.traits.wetting()))
    }

    /// Set every entry of a per-phase container to zero
    fn zeros(&self, values: &mut [T]) -> Result<(), MaterialError> {
        check_len(values, self.traits.num_phases())?;
        values.iter_mut().for_each(|v| *v = T::zero());
        Ok(())
    }
}

impl<T: Float> MaterialLaw<T> for PiecewiseLinearTwoPhase<T> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            num_phases: TwoPhaseTraits::NUM_PHASES,
            implements_two_phase_api: true,
            implements_two_phase_sat_api: true,
            is_saturation_dependent: true,
            is_pressure_dependent: false,
            is_temperature_dependent: false,
            is_composition_dependent: false,
        }
    }

    fn capillary_pressures<F>(&self, values: &mut [T], fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        check_len(values, self.traits.num_phases())?;
        values[self.traits.wetting()] = T::zero(); // reference phase
        values[self.traits.non_wetting()] = self.pcnw(fs);
        Ok(())
    }

    fn saturations<F>(&self, values: &mut [T], _fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        check_len(values, self.traits.num_phases())?;
        Err(MaterialError::NotImplemented("saturations()"))
    }

    fn relative_permeabilities<F>(&self, values: &mut [T], fs: &F) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        check_len(values, self.traits.num_phases())?;
        values[self.traits.wetting()] = self.krw(fs);
        values[self.traits.non_wetting()] = self.krn(fs);
        Ok(())
    }

    fn d_capillary_pressures_d_saturation<F>(
        &self,
        values: &mut [T],
        fs: &F,
        sat_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        self.traits.check_phase(sat_phase)?;
        self.zeros(values)?;
        if sat_phase == self.traits.wetting() {
            values[self.traits.non_wetting()] = self.dpcnw_dsw(fs);
        }
        Ok(())
    }

    fn d_capillary_pressures_d_pressure<F>(
        &self,
        values: &mut [T],
        _fs: &F,
        p_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not pressure dependent
        self.traits.check_phase(p_phase)?;
        self.zeros(values)
    }

    fn d_capillary_pressures_d_temperature<F>(
        &self,
        values: &mut [T],
        _fs: &F,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not temperature dependent
        self.zeros(values)
    }

    fn d_capillary_pressures_d_mole_fraction<F>(
        &self,
        values: &mut [T],
        _fs: &F,
        phase: usize,
        _component: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not composition dependent
        self.traits.check_phase(phase)?;
        self.zeros(values)
    }

    fn d_relative_permeabilities_d_saturation<F>(
        &self,
        values: &mut [T],
        fs: &F,
        sat_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        self.traits.check_phase(sat_phase)?;
        self.zeros(values)?;
        let (w, n) = (self.traits.wetting(), self.traits.non_wetting());
        if sat_phase == w {
            values[w] = self.dkrw_dsw(fs);
        } else {
            // kr_n is tabulated against 1 - S_n
            let sw = T::one() - fs.saturation(n);
            values[n] = T::zero() - self.two_phase_sat_dkrn_dsw(sw);
        }
        Ok(())
    }

    fn d_relative_permeabilities_d_pressure<F>(
        &self,
        values: &mut [T],
        _fs: &F,
        p_phase: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not pressure dependent
        self.traits.check_phase(p_phase)?;
        self.zeros(values)
    }

    fn d_relative_permeabilities_d_temperature<F>(
        &self,
        values: &mut [T],
        _fs: &F,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not temperature dependent
        self.zeros(values)
    }

    fn d_relative_permeabilities_d_mole_fraction<F>(
        &self,
        values: &mut [T],
        _fs: &F,
        phase: usize,
        _component: usize,
    ) -> Result<(), MaterialError>
    where
        F: FluidState<T> + ?Sized,
    {
        // not composition dependent
        self.traits.check_phase(phase)?;
        self.zeros(values)
    }
}
