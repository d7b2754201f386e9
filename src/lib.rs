//! Tabulated material laws for two-phase flow in porous media,
//! no-std compatible (with `alloc`).
//!
//! A material law maps the saturation of the fluids in the pore space to
//! capillary pressure and relative permeabilities, together with the partial
//! derivatives a nonlinear solver needs for its Jacobian.
//!
//! The laws here are built from sample tables: ascending `(saturation, value)`
//! pairs that are interpolated linearly between samples. Each query performs
//! a bisection search for the segment containing the saturation, which takes a
//! worst-case number of iterations of log2(number of samples), followed by a
//! constant amount of arithmetic. No evaluation allocates.
//!
//! | Curve                      | Inside the table | Outside the table          |
//! |----------------------------|------------------|----------------------------|
//! | capillary pressure pc_nw   | linear           | boundary segment continued |
//! | relative permeability kr_w | linear           | held at the boundary value |
//! | relative permeability kr_n | linear           | held at the boundary value |
//!
//! Derivatives are the slope of the segment used for the value, so they are
//! zero wherever a relative permeability is held constant.
//!
//! # Example
//! ```rust
//! use pwlaw::{
//!     ExplicitFluidState, MaterialLaw, PiecewiseLinearParams, PiecewiseLinearTwoPhase,
//!     SampleTable, TwoPhaseTraits,
//! };
//!
//! let params = PiecewiseLinearParams::new(
//!     SampleTable::from_pairs([(0.2, 5000.0), (0.5, 1000.0), (0.8, 200.0)]).unwrap(),
//!     SampleTable::from_pairs([(0.2, 0.0), (1.0, 1.0)]).unwrap(),
//!     SampleTable::from_pairs([(0.0, 1.0), (0.8, 0.0)]).unwrap(),
//! );
//! let traits = TwoPhaseTraits::new(0, 1).unwrap();
//! let law = PiecewiseLinearTwoPhase::new(traits, params);
//!
//! // Fluid state with S_w = 0.35
//! let mut fs = ExplicitFluidState::<f64>::new(2, 1);
//! fs.set_saturations(&[0.35, 0.65]).unwrap();
//!
//! let mut pc = [0.0; 2];
//! law.capillary_pressures(&mut pc, &fs).unwrap();
//! assert_eq!(pc[0], 0.0); // wetting phase is the reference
//! assert!((pc[1] - 3000.0).abs() < 1e-9);
//!
//! let mut kr = [0.0; 2];
//! law.relative_permeabilities(&mut kr, &fs).unwrap();
//! assert!((kr[0] - 0.1875).abs() < 1e-12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod error;
pub use error::MaterialError;

pub mod table;
pub use table::{Curve1D, Extrap, Linear, LinearHoldLast, SampleTable, TableSample};

pub mod traits;
pub use traits::TwoPhaseTraits;

pub mod fluid_state;
pub use fluid_state::{ExplicitFluidState, FluidState};

pub mod components;
pub use components::{Component, Lnapl};

pub mod law;
pub use law::{Capabilities, MaterialLaw, PiecewiseLinearParams, PiecewiseLinearTwoPhase};

pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
