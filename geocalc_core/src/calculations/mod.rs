//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam`] - Point-loaded beam with any supported pair of end conditions

pub mod beam;

pub use beam::{
    BeamField, BeamPointLoad, BeamPointLoadInput, BeamPointLoadResult, SupportType,
};
