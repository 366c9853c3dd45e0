//! # Plasticity Chart
//!
//! Classification of fine-grained soils from their Atterberg limits
//! (Casagrande, 1948). The A-line `PI = 0.73 (LL - 20)` separates inorganic
//! clays (on or above the line) from silts and organic soils (below it). The
//! liquid limit splits each side into low, medium and high plasticity bands.
//!
//! ```text
//!  PI │              A-line ╱
//!     │      CL   │  CI  ╱ │   CH
//!     │           │   ╱    │
//!     │           │╱  MI   │   MH
//!     └───────────┴────────┴──────── LL
//!          20    30       50
//! ```
//!
//! Reference: Casagrande, A. (1948). Classification and Identification of
//! Soils. Transactions ASCE, 113, 901-930.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

/// Region of the plasticity chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlasticityClass {
    SiltLowCompressibility,
    ClayLowPlasticity,
    SiltMediumCompressibility,
    ClayMediumPlasticity,
    SiltHighCompressibility,
    ClayHighPlasticity,
}

impl PlasticityClass {
    pub fn description(&self) -> &'static str {
        match self {
            PlasticityClass::SiltLowCompressibility => "Inorganic silts of low compressibility",
            PlasticityClass::ClayLowPlasticity => "Inorganic clays of low plasticity",
            PlasticityClass::SiltMediumCompressibility => {
                "Inorganic silts of medium compressibility and organic silts"
            }
            PlasticityClass::ClayMediumPlasticity => "Inorganic clays of medium plasticity",
            PlasticityClass::SiltHighCompressibility => {
                "Inorganic silts of high compressibility and organic clays"
            }
            PlasticityClass::ClayHighPlasticity => "Inorganic clays of high plasticity",
        }
    }

    /// True for the regions on or above the A-line
    pub fn is_clay(&self) -> bool {
        matches!(
            self,
            PlasticityClass::ClayLowPlasticity
                | PlasticityClass::ClayMediumPlasticity
                | PlasticityClass::ClayHighPlasticity
        )
    }
}

impl fmt::Display for PlasticityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticityChartInput {
    /// Liquid limit LL (%)
    pub liquid_limit: f64,
    /// Plasticity index PI (%)
    pub plasticity_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticityChartResult {
    /// `None` when undefined
    pub classification: Option<PlasticityClass>,
    /// Plasticity index of the A-line at this liquid limit (%)
    pub aline_pi: f64,
}

impl Undefined for PlasticityChartResult {
    fn undefined() -> Self {
        PlasticityChartResult {
            classification: None,
            aline_pi: f64::NAN,
        }
    }
}

static PLASTICITY_CHART_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("liquid_limit", Some(0.0), Some(100.0)),
        FieldRule::float("plasticity_index", Some(0.0), Some(70.0)),
    ]
});

/// Plasticity index of the A-line
pub fn aline_plasticity_index(liquid_limit: f64) -> f64 {
    if liquid_limit < 20.0 {
        0.0
    } else {
        0.73 * (liquid_limit - 20.0)
    }
}

/// Classify a fine-grained soil on the plasticity chart.
///
/// # Example
/// ```rust
/// use geocalc_core::geotechnical::{plasticity_chart, PlasticityChartInput, PlasticityClass};
///
/// let result = plasticity_chart(&PlasticityChartInput { liquid_limit: 60.0, plasticity_index: 40.0 }).unwrap();
/// assert_eq!(result.classification, Some(PlasticityClass::ClayHighPlasticity));
/// ```
pub fn plasticity_chart(input: &PlasticityChartInput) -> CalcResult<PlasticityChartResult> {
    validation::check(
        &[
            ("liquid_limit", ParamValue::Float(input.liquid_limit)),
            ("plasticity_index", ParamValue::Float(input.plasticity_index)),
        ],
        &PLASTICITY_CHART_RULES,
    )?;

    let aline_pi = aline_plasticity_index(input.liquid_limit);
    let below_aline = input.plasticity_index < aline_pi;

    let classification = match (input.liquid_limit, below_aline) {
        (ll, true) if ll < 30.0 => PlasticityClass::SiltLowCompressibility,
        (ll, false) if ll < 30.0 => PlasticityClass::ClayLowPlasticity,
        (ll, true) if ll < 50.0 => PlasticityClass::SiltMediumCompressibility,
        (ll, false) if ll < 50.0 => PlasticityClass::ClayMediumPlasticity,
        (_, true) => PlasticityClass::SiltHighCompressibility,
        (_, false) => PlasticityClass::ClayHighPlasticity,
    };

    Ok(PlasticityChartResult {
        classification: Some(classification),
        aline_pi,
    })
}
