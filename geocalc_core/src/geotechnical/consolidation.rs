//! # One-Dimensional Consolidation
//!
//! Average degree of consolidation of a clay layer for different drainage
//! conditions and initial excess pore pressure distributions, read from the
//! digitized charts of Janbu (1956).
//!
//! ## Formula
//!
//! ```text
//! Tv = cv·t / H²
//! ```
//!
//! where `H` is the drainage path length: half the layer thickness for double
//! drainage, the full thickness for single drainage. The degree of
//! consolidation `U` is interpolated linearly in log10(Tv).
//!
//! With double drainage the triangular distributions give the same curve as
//! the constant one. With single drainage each distribution has its own curve:
//! a distribution decreasing with depth (deep homogeneous clay) consolidates
//! faster than one increasing with depth.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::interpolate::interp;
use crate::errors::{ensure_finite, CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrainageType {
    /// Drainage at one face of the layer
    Single,
    /// Drainage at both faces of the layer
    #[default]
    Double,
}

impl DrainageType {
    pub const NAMES: [&'static str; 2] = ["single", "double"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrainageType::Single => "single",
            DrainageType::Double => "double",
        }
    }
}

impl fmt::Display for DrainageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initial excess pore pressure distribution over the layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StressDistribution {
    /// Uniform (thin layer)
    #[default]
    Constant,
    /// Zero at the drained face, maximum at the impermeable face
    TriangularIncreasing,
    /// Maximum at the drained face, zero at the impermeable face
    TriangularDecreasing,
}

impl StressDistribution {
    pub const NAMES: [&'static str; 3] = ["constant", "triangular increasing", "triangular decreasing"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressDistribution::Constant => "constant",
            StressDistribution::TriangularIncreasing => "triangular increasing",
            StressDistribution::TriangularDecreasing => "triangular decreasing",
        }
    }
}

impl fmt::Display for StressDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for [`consolidation_degree_janbu`]
///
/// ## JSON Example
///
/// ```json
/// {
///   "time": 31536000.0,
///   "consolidation_coefficient": 0.4,
///   "drainage_path_length": 1.0,
///   "drainage_type": "Single",
///   "stress_distribution": "TriangularDecreasing"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationInput {
    /// Time since loading (s)
    pub time: f64,
    /// Coefficient of consolidation cv (m²/yr)
    pub consolidation_coefficient: f64,
    /// Drainage path length H (m)
    pub drainage_path_length: f64,
    #[serde(default)]
    pub drainage_type: DrainageType,
    #[serde(default)]
    pub stress_distribution: StressDistribution,
}

impl ConsolidationInput {
    /// Double drainage with a constant distribution
    pub fn new(time: f64, consolidation_coefficient: f64, drainage_path_length: f64) -> Self {
        ConsolidationInput {
            time,
            consolidation_coefficient,
            drainage_path_length,
            drainage_type: DrainageType::Double,
            stress_distribution: StressDistribution::Constant,
        }
    }

    pub fn with_drainage(mut self, drainage_type: DrainageType, stress_distribution: StressDistribution) -> Self {
        self.drainage_type = drainage_type;
        self.stress_distribution = stress_distribution;
        self
    }

    /// Dimensionless time factor Tv
    pub fn time_factor(&self) -> f64 {
        (self.consolidation_coefficient / SECONDS_PER_YEAR) * self.time
            / self.drainage_path_length.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationResult {
    /// Average degree of consolidation U (%)
    pub consolidation_degree: f64,
    /// Time factor Tv
    pub time_factor: f64,
}

impl Undefined for ConsolidationResult {
    fn undefined() -> Self {
        ConsolidationResult {
            consolidation_degree: f64::NAN,
            time_factor: f64::NAN,
        }
    }
}

static CONSOLIDATION_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("time", Some(0.0), None),
        FieldRule::float("consolidation_coefficient", Some(0.1), Some(10000.0)),
        FieldRule::float("drainage_path_length", Some(0.0), None),
        FieldRule::options("drainage_type", &DrainageType::NAMES),
        FieldRule::options("stress_distribution", &StressDistribution::NAMES),
    ]
});

// =============================================================================
// JANBU (1956) CHARTS
// log10(Tv) against U (%)
// =============================================================================

const CONSTANT_LOG_TV: [f64; 23] = [
    -3.02247191011236, -2.75280898876405, -2.48876404494382, -2.32022471910112,
    -2.13483146067416, -1.9438202247191, -1.76404494382023, -1.55056179775281,
    -1.32022471910112, -1.14044943820225, -0.966292134831463, -0.808988764044945,
    -0.691011235955056, -0.606741573033708, -0.516853932584271, -0.387640449438202,
    -0.280898876404495, -0.179775280898877, -7.86516853932586E-02, 5.05617977528079E-02,
    0.191011235955055, 0.348314606741571, 0.494382022471909,
];

const CONSTANT_U: [f64; 23] = [
    2.95554469956033, 4.91548607718612, 6.87445041524182, 8.81680508060576,
    10.4142647777235, 13.0561797752809, 15.696140693698, 19.9071812408402,
    25.3385442110405, 31.4567659990229, 38.2696629213483, 44.905715681485,
    51.7088422081094, 56.7669760625305, 62.8695652173913, 71.2398632144601,
    77.867122618466, 84.3194919394235, 89.9022960429897, 93.9247679531021,
    97.2535417684416, 99.3678553981436, 100.0,
];

const INCREASING_LOG_TV: [f64; 21] = [
    -2.07303370786517, -1.79213483146068, -1.52808988764045, -1.33707865168539,
    -1.1685393258427, -1.01123595505618, -0.876404494382024, -0.764044943820226,
    -0.679775280898877, -0.601123595505619, -0.51123595505618, -0.432584269662921,
    -0.342696629213483, -0.264044943820225, -0.179775280898877, -0.106741573033708,
    0.0, 0.117977528089886, 0.241573033707864, 0.365168539325842, 0.499999999999999,
];

const INCREASING_U: [f64; 21] = [
    0.511968734733757, 3.34342940889106, 6.69369809477284, 10.3790913531998,
    14.7562286272594, 20.6966292134831, 26.8070346849047, 32.9135319980459,
    39.5368832437713, 45.4636052760136, 52.609672691744, 58.8842208109428,
    66.3781143136297, 72.4787493893502, 78.9281875915974, 85.0278456277479,
    90.7855398143624, 94.6321446018563, 97.2623351245725, 99.1968734733756, 100.0,
];

const DECREASING_LOG_TV: [f64; 19] = [
    -3.01685393258427, -2.75280898876405, -2.53932584269663, -2.3314606741573,
    -2.09550561797753, -1.89887640449438, -1.62921348314607, -1.38202247191011,
    -1.13483146067416, -0.955056179775282, -0.769662921348315, -0.629213483146068,
    -0.48876404494382, -0.303370786516854, -0.185393258426966, -6.17977528089892E-02,
    0.056179775280898, 0.151685393258425, 0.264044943820223,
];

const DECREASING_U: [f64; 19] = [
    9.56521739130434, 11.3502686858817, 13.648265754763, 16.2931118710307,
    20.1602344894968, 24.3683439179286, 30.6761113825109, 38.0234489496824,
    46.2403517342452, 53.923790913532, 61.4342940889105, 68.4152418172935,
    75.04836345872, 83.0806057645334, 88.3185148998534, 93.0356619443087,
    96.3605276013678, 98.8119198827552, 100.0,
];

/// Chart curve used for a drainage condition
fn janbu_curve(drainage: DrainageType, distribution: StressDistribution) -> (&'static [f64], &'static [f64]) {
    match (drainage, distribution) {
        (DrainageType::Double, _) | (DrainageType::Single, StressDistribution::Constant) => {
            (&CONSTANT_LOG_TV, &CONSTANT_U)
        }
        (DrainageType::Single, StressDistribution::TriangularIncreasing) => {
            (&INCREASING_LOG_TV, &INCREASING_U)
        }
        (DrainageType::Single, StressDistribution::TriangularDecreasing) => {
            (&DECREASING_LOG_TV, &DECREASING_U)
        }
    }
}

/// Average degree of consolidation from the Janbu charts.
///
/// Time factors outside the chart take the end values of the curve, except
/// Tv = 0 (no elapsed time), which gives U = 0.
///
/// # Errors
/// - [`CalcError::Validation`](crate::errors::CalcError::Validation) for out-of-range inputs
/// - [`CalcError::NumericDomain`](crate::errors::CalcError::NumericDomain) when Tv is not
///   finite (zero drainage path length)
///
/// # Example
/// ```rust
/// use geocalc_core::geotechnical::consolidation::{consolidation_degree_janbu, ConsolidationInput};
///
/// let one_year = 365.0 * 24.0 * 3600.0;
/// let result = consolidation_degree_janbu(&ConsolidationInput::new(one_year, 0.4, 1.0)).unwrap();
/// assert!((result.time_factor - 0.4).abs() < 1e-12);
/// assert!((result.consolidation_degree - 70.6).abs() < 0.05);
/// ```
pub fn consolidation_degree_janbu(input: &ConsolidationInput) -> CalcResult<ConsolidationResult> {
    validation::check(
        &[
            ("time", ParamValue::Float(input.time)),
            (
                "consolidation_coefficient",
                ParamValue::Float(input.consolidation_coefficient),
            ),
            ("drainage_path_length", ParamValue::Float(input.drainage_path_length)),
            ("drainage_type", ParamValue::from(input.drainage_type.as_str())),
            (
                "stress_distribution",
                ParamValue::from(input.stress_distribution.as_str()),
            ),
        ],
        &CONSOLIDATION_RULES,
    )?;

    let time_factor = ensure_finite("time factor", input.time_factor())?;
    let (log_tv, degree) = janbu_curve(input.drainage_type, input.stress_distribution);
    let consolidation_degree = if time_factor == 0.0 {
        0.0
    } else {
        interp(time_factor.log10(), log_tv, degree)
    };

    Ok(ConsolidationResult {
        consolidation_degree,
        time_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_YEAR: f64 = SECONDS_PER_YEAR;

    fn degree(cv: f64, drainage: DrainageType, distribution: StressDistribution) -> f64 {
        let input = ConsolidationInput::new(ONE_YEAR, cv, 1.0).with_drainage(drainage, distribution);
        consolidation_degree_janbu(&input).unwrap().consolidation_degree
    }

    #[test]
    fn test_time_factor() {
        let result = consolidation_degree_janbu(&ConsolidationInput::new(ONE_YEAR, 10.0, 1.0)).unwrap();
        assert!((result.time_factor - 10.0).abs() < 1e-12);
        // Beyond the chart
        assert_eq!(result.consolidation_degree, 100.0);
    }

    #[test]
    fn test_double_drainage_ignores_distribution() {
        let constant = degree(0.4, DrainageType::Double, StressDistribution::Constant);
        let increasing = degree(0.4, DrainageType::Double, StressDistribution::TriangularIncreasing);
        assert!((constant - 70.6).abs() < 0.05, "U = {}", constant);
        assert_eq!(constant, increasing);
    }

    #[test]
    fn test_single_drainage_triangular() {
        let increasing = degree(0.4, DrainageType::Single, StressDistribution::TriangularIncreasing);
        let decreasing = degree(0.4, DrainageType::Single, StressDistribution::TriangularDecreasing);
        assert!((increasing - 61.8).abs() < 0.05, "U = {}", increasing);
        assert!((decreasing - 79.0).abs() < 0.05, "U = {}", decreasing);
    }

    #[test]
    fn test_degree_increases_with_time() {
        let mut previous = 0.0;
        for cv in [0.1, 0.5, 1.0, 5.0, 10.0] {
            let u = degree(cv, DrainageType::Single, StressDistribution::TriangularDecreasing);
            assert!(u >= previous);
            previous = u;
        }
    }

    #[test]
    fn test_no_elapsed_time_gives_no_consolidation() {
        for distribution in [
            StressDistribution::Constant,
            StressDistribution::TriangularIncreasing,
            StressDistribution::TriangularDecreasing,
        ] {
            let input = ConsolidationInput::new(0.0, 1.0, 1.0)
                .with_drainage(DrainageType::Single, distribution);
            let result = consolidation_degree_janbu(&input).unwrap();
            assert_eq!(result.time_factor, 0.0);
            assert_eq!(result.consolidation_degree, 0.0);
        }
    }

    #[test]
    fn test_zero_drainage_path_fails() {
        let err = consolidation_degree_janbu(&ConsolidationInput::new(ONE_YEAR, 1.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_coefficient_outside_range() {
        let err = consolidation_degree_janbu(&ConsolidationInput::new(ONE_YEAR, 0.01, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
        assert!(err.to_string().contains("consolidation_coefficient"));
    }

    #[test]
    fn test_charts_are_sorted() {
        for (xs, ys) in [
            (&CONSTANT_LOG_TV[..], &CONSTANT_U[..]),
            (&INCREASING_LOG_TV[..], &INCREASING_U[..]),
            (&DECREASING_LOG_TV[..], &DECREASING_U[..]),
        ] {
            assert_eq!(xs.len(), ys.len());
            assert!(xs.windows(2).all(|w| w[0] < w[1]));
            assert!(ys.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
