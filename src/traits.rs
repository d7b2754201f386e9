//! Phase-index records connecting a fluid system to its material laws.
//!
//! The indices are validated once on construction, so a law never checks
//! them per query.

use crate::MaterialError;

/// Wetting and non-wetting phase indices of a two-phase material law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TwoPhaseIndices", into = "TwoPhaseIndices")
)]
pub struct TwoPhaseTraits {
    wetting: usize,
    non_wetting: usize,
}

impl TwoPhaseTraits {
    /// Number of fluid phases
    pub const NUM_PHASES: usize = 2;

    /// # Errors
    /// * If either index is not in `[0, 2)`
    /// * If both indices are equal
    pub fn new(wetting: usize, non_wetting: usize) -> Result<Self, MaterialError> {
        for index in [wetting, non_wetting] {
            if index >= Self::NUM_PHASES {
                return Err(MaterialError::PhaseIndexOutOfRange {
                    index,
                    num_phases: Self::NUM_PHASES,
                });
            }
        }
        if wetting == non_wetting {
            return Err(MaterialError::PhaseIndicesNotDistinct(wetting));
        }
        Ok(Self {
            wetting,
            non_wetting,
        })
    }

    /// Wetting phase is phase 0, non-wetting phase is phase 1
    pub fn wetting_first() -> Self {
        Self {
            wetting: 0,
            non_wetting: 1,
        }
    }

    #[inline]
    pub fn num_phases(&self) -> usize {
        Self::NUM_PHASES
    }

    #[inline]
    pub fn wetting(&self) -> usize {
        self.wetting
    }

    #[inline]
    pub fn non_wetting(&self) -> usize {
        self.non_wetting
    }

    /// Check that a phase index supplied at call time refers to a phase.
    ///
    /// # Errors
    /// * If `index` is not in `[0, 2)`
    #[inline]
    pub fn check_phase(&self, index: usize) -> Result<(), MaterialError> {
        if index < Self::NUM_PHASES {
            Ok(())
        } else {
            Err(MaterialError::PhaseIndexOutOfRange {
                index,
                num_phases: Self::NUM_PHASES,
            })
        }
    }
}

impl Default for TwoPhaseTraits {
    fn default() -> Self {
        Self::wetting_first()
    }
}

/// Unvalidated wire form of [`TwoPhaseTraits`]
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TwoPhaseIndices {
    wetting: usize,
    non_wetting: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<TwoPhaseIndices> for TwoPhaseTraits {
    type Error = MaterialError;

    fn try_from(raw: TwoPhaseIndices) -> Result<Self, Self::Error> {
        Self::new(raw.wetting, raw.non_wetting)
    }
}

#[cfg(feature = "serde")]
impl From<TwoPhaseTraits> for TwoPhaseIndices {
    fn from(traits: TwoPhaseTraits) -> Self {
        Self {
            wetting: traits.wetting,
            non_wetting: traits.non_wetting,
        }
    }
}
