//! # Geotechnical Calculations
//!
//! Stateless soil mechanics formulas and empirical correlations. Every
//! function takes an input struct and returns a `CalcResult` of a small result
//! struct. Results implement [`Undefined`](crate::errors::Undefined) so callers
//! can opt into NaN results with [`FailureMode::resolve`](crate::errors::FailureMode::resolve).
//!
//! ## Units
//!
//! - Stresses and pressures: kPa (cone resistance: MPa)
//! - Lengths: m
//! - Time: s (consolidation coefficient: m²/yr)
//! - Angles: degrees
//! - Water content, Atterberg limits, relative density: %
//!
//! ## Modules
//!
//! - [`classification`] - Casagrande plasticity chart
//! - [`consolidation`] - One-dimensional consolidation degree (Janbu charts)
//! - [`correlations`] - Empirical clay and sand property correlations
//! - [`bearing_capacity`] - Shallow foundation bearing capacity factors
//! - [`stress`] - Boussinesq stress distributions in an elastic half-space

pub mod bearing_capacity;
pub mod classification;
pub mod consolidation;
pub mod correlations;
pub mod stress;

pub use classification::{plasticity_chart, PlasticityChartInput, PlasticityChartResult, PlasticityClass};
pub use consolidation::{
    consolidation_degree_janbu, ConsolidationInput, ConsolidationResult, DrainageType,
    StressDistribution,
};
pub use stress::{
    stresses_circle, stresses_line_load, stresses_point_load, stresses_rectangle_corner,
    stresses_strip_constant, stresses_strip_triangular,
};
