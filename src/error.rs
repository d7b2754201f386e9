//! Error type shared by table construction, law configuration and the
//! law operations that are undefined for a tabulated curve.

use thiserror::Error;

/// Failures raised while configuring or querying a material law.
///
/// Out-of-range saturations are never an error; they are handled by the
/// extrapolation policy of each curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaterialError {
    /// A sample table needs at least two points to define a segment
    #[error("sample table needs at least 2 points, got {0}")]
    TooFewSamples(usize),

    /// Abscissa and value columns have different lengths
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A sample abscissa or value is NaN or infinite
    #[error("sample {0} is not finite")]
    NonFiniteSample(usize),

    /// The abscissa decreases between samples `i` and `i + 1`
    #[error("sample abscissae must be ascending (violated at sample {0})")]
    NotAscending(usize),

    /// The first or last segment has zero width
    #[error("boundary segment {0} has zero width")]
    DegenerateSegment(usize),

    /// A phase index is outside of `[0, num_phases)`
    #[error("phase index {index} is out of range for {num_phases} phases")]
    PhaseIndexOutOfRange { index: usize, num_phases: usize },

    /// Wetting and non-wetting phase share the same index
    #[error("wetting and non-wetting phase indices must differ (both are {0})")]
    PhaseIndicesNotDistinct(usize),

    /// The operation is mathematically undefined for this law
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
