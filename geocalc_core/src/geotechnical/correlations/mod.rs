//! # Soil Property Correlations
//!
//! Empirical relations between index properties, in-situ test results and
//! engineering parameters. Each correlation is only valid over the range of
//! the data it was fitted to, and those ranges are enforced as validation
//! bounds.
//!
//! - [`clay`] - K0, secondary compression, small-strain stiffness, permeability
//! - [`sand`] - Friction angle and K0

pub mod clay;
pub mod sand;

pub use clay::{
    gmax_cpt_clay_mayne_rix, k0_plasticity_massarsch, permeability_remoulded_clay_carrier_beckman,
    secondary_compression_ratio_mesri,
};
pub use sand::{friction_angle_kleven, k0_relative_density_bellotti};
