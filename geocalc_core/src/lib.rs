//! # geocalc_core - Geotechnical and Structural Formula Engine
//!
//! `geocalc_core` collects closed-form engineering formulas behind a uniform,
//! JSON-friendly API: a point-loaded beam with arbitrary end conditions,
//! cross-section properties, and a library of soil mechanics formulas and
//! empirical correlations.
//!
//! ## Design Philosophy
//!
//! - **Typed inputs**: Every calculation takes an `*Input` struct and returns a `*Result`
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types with stable error codes
//! - **Silent or strict**: Failures can surface as errors or as all-NaN results
//!
//! ## Quick Start
//!
//! ```rust
//! use geocalc_core::{BeamPointLoad, BeamPointLoadInput, SupportType};
//!
//! // 6 m propped cantilever, 25 kN at 2 m from the simple support
//! let input = BeamPointLoadInput::new(6.0, 210e6, 1e-4, 25.0)
//!     .with_load_position(2.0)
//!     .with_supports(SupportType::Support, SupportType::Clamped);
//!
//! let mut beam = BeamPointLoad::new(input).unwrap();
//! assert_eq!(beam.deflection().len(), 50);
//!
//! // Every setter recomputes the profiles
//! beam.set_point_load(50.0).unwrap();
//!
//! let json = serde_json::to_string_pretty(beam.result()).unwrap();
//! assert!(json.contains("SupportClamped"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stateful beam point-load calculation
//! - [`equations`] - Beam boundary values, section properties, chart interpolation
//! - [`geotechnical`] - Soil classification, consolidation, correlations, bearing capacity, stresses
//! - [`validation`] - Declarative parameter checks shared by every calculation
//! - [`errors`] - Structured error types and the failure policy

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geotechnical;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BeamPointLoad, BeamPointLoadInput, BeamPointLoadResult, SupportType};
pub use errors::{CalcError, CalcResult, FailureMode, Undefined};
