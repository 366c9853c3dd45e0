//! # Engineering Equations
//!
//! Closed-form formulas shared by the calculations. Keeping them in one place
//! makes them easy to check against the references they come from and keeps
//! sign conventions consistent.
//!
//! ## Modules
//!
//! - [`beam`] - Point-load boundary values for the six supported end-condition pairs
//! - [`section`] - Cross-section geometric properties (A, I, J, r)
//! - [`interpolate`] - Linear lookup in digitized design charts
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive sagging
//! - **Shear**: R - P·H(x-a), measured from the left end
//! - **Deflection**: Positive upward
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Gere & Goodno, Mechanics of Materials

pub mod beam;
pub mod interpolate;
pub mod section;

pub use beam::{BoundaryValues, CanonicalCase};
pub use interpolate::{interp, interp_log_log};
pub use section::{section_properties, SectionProperties, SectionShape};
