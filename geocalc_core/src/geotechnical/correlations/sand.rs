//! Sand correlations.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::interpolate::interp;
use crate::errors::{CalcError, CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

use super::clay::K0Result;

// =============================================================================
// FRICTION ANGLE (KLEVEN, 1986)
// =============================================================================

/// Kleven chart curves: mean effective stress (kPa) and the straight line
/// `φ = slope · Dr + intercept` drawn for it
const KLEVEN_CURVES: [(f64, f64, f64); 7] = [
    (10.0, 0.2183, 25.667),
    (25.0, 0.2175, 24.75),
    (50.0, 0.22, 23.5),
    (100.0, 0.2175, 22.75),
    (200.0, 0.2, 23.0),
    (400.0, 0.1925, 22.75),
    (800.0, 0.195, 21.3),
];

/// Input for [`friction_angle_kleven`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KlevenInput {
    /// Vertical effective stress σ'v0 (kPa)
    pub sigma_vo_eff: f64,
    /// Relative density Dr (%)
    pub relative_density: f64,
    /// Coefficient of lateral earth pressure at rest
    #[serde(default = "KlevenInput::default_k0")]
    pub k0: f64,
    /// Cap on the returned friction angle (degrees)
    #[serde(default = "KlevenInput::default_max_friction_angle")]
    pub max_friction_angle: f64,
}

impl KlevenInput {
    fn default_k0() -> f64 {
        0.5
    }

    fn default_max_friction_angle() -> f64 {
        45.0
    }

    pub fn new(sigma_vo_eff: f64, relative_density: f64) -> Self {
        KlevenInput {
            sigma_vo_eff,
            relative_density,
            k0: Self::default_k0(),
            max_friction_angle: Self::default_max_friction_angle(),
        }
    }

    pub fn with_k0(mut self, k0: f64) -> Self {
        self.k0 = k0;
        self
    }

    pub fn with_max_friction_angle(mut self, max_friction_angle: f64) -> Self {
        self.max_friction_angle = max_friction_angle;
        self
    }

    /// Mean effective stress σ'm = (1 + 2K0)/3 · σ'v0
    pub fn mean_effective_stress(&self) -> f64 {
        ((1.0 + 2.0 * self.k0) / 3.0) * self.sigma_vo_eff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionAngleResult {
    /// Peak friction angle φ (degrees)
    pub friction_angle: f64,
    /// Mean effective stress σ'm (kPa)
    pub sigma_m: f64,
}

impl Undefined for FrictionAngleResult {
    fn undefined() -> Self {
        FrictionAngleResult {
            friction_angle: f64::NAN,
            sigma_m: f64::NAN,
        }
    }
}

static KLEVEN_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("sigma_vo_eff", Some(10.0), Some(800.0)),
        FieldRule::float("relative_density", Some(40.0), Some(100.0)),
        FieldRule::float("k0", Some(0.3), Some(2.0)),
        FieldRule::any_float("max_friction_angle"),
    ]
});

/// Friction angle of North Sea sand from confinement and relative density.
///
/// The chart has one line per mean effective stress level between 10 and
/// 800 kPa. Between two levels the angle is interpolated linearly in σ'm;
/// below 10 kPa the 10 kPa line applies. Lower confinement gives a higher
/// angle. The fit to the data is loose, so compare the result with
/// site-specific tests.
///
/// Reference: Lunne, T., Robertson, P.K., Powell, J.J.M. (1997). Cone
/// Penetration Testing in Geotechnical Practice. Spon Press.
///
/// # Errors
/// [`CalcError::OutOfRange`] when σ'm reaches 800 kPa, the top of the chart.
///
/// # Example
/// ```rust
/// use geocalc_core::geotechnical::correlations::sand::{friction_angle_kleven, KlevenInput};
///
/// let result = friction_angle_kleven(&KlevenInput::new(100.0, 60.0).with_k0(1.0)).unwrap();
/// assert!((result.friction_angle - 35.8).abs() < 1e-9);
/// ```
pub fn friction_angle_kleven(input: &KlevenInput) -> CalcResult<FrictionAngleResult> {
    validation::check(
        &[
            ("sigma_vo_eff", ParamValue::Float(input.sigma_vo_eff)),
            ("relative_density", ParamValue::Float(input.relative_density)),
            ("k0", ParamValue::Float(input.k0)),
            ("max_friction_angle", ParamValue::Float(input.max_friction_angle)),
        ],
        &KLEVEN_RULES,
    )?;

    let sigma_m = input.mean_effective_stress();
    let dr = input.relative_density;
    let line = |(_, slope, intercept): (f64, f64, f64)| slope * dr + intercept;

    let (lowest, highest) = (KLEVEN_CURVES[0].0, KLEVEN_CURVES[KLEVEN_CURVES.len() - 1].0);
    let phi = if sigma_m < lowest {
        line(KLEVEN_CURVES[0])
    } else {
        let pair = KLEVEN_CURVES
            .windows(2)
            .find(|w| sigma_m >= w[0].0 && sigma_m < w[1].0)
            .ok_or_else(|| CalcError::out_of_range("mean effective stress", sigma_m, 0.0, highest))?;
        let (lower, upper) = (pair[0], pair[1]);
        let (phi1, phi2) = (line(lower), line(upper));
        phi1 + ((phi2 - phi1) / (upper.0 - lower.0)) * (sigma_m - lower.0)
    };

    Ok(FrictionAngleResult {
        friction_angle: phi.min(input.max_friction_angle),
        sigma_m,
    })
}

// =============================================================================
// K0 FROM RELATIVE DENSITY (BELLOTTI ET AL., 1985)
// =============================================================================

const BELLOTTI_DR: [f64; 29] = [
    19.3421756638788, 21.026724113654915, 22.858269268677304, 24.98493424572667,
    27.41347751400974, 29.989017487539066, 32.86193010616428, 35.884092253104676,
    38.75249922559207, 41.16752555546169, 43.73405423671538, 45.99645180366647,
    49.16223142124975, 52.025006336064884, 55.18965954211371, 57.75055616569515,
    60.76145419729098, 64.67573427951902, 67.83588183943004, 70.99940863394443,
    74.46143448508914, 77.0189518740672, 80.47985131367744, 84.24262904452144,
    87.70352848413168, 90.86254963250826, 94.47495142350257, 98.23547633127762,
    99.43961026160909,
];

const BELLOTTI_K0: [f64; 29] = [
    0.6584269662921348, 0.6280898876404495, 0.601123595505618, 0.5797752808988764,
    0.5573033707865169, 0.5382022471910113, 0.5224719101123596, 0.5078651685393258,
    0.4966292134831461, 0.4876404494382023, 0.4775280898876405, 0.47078651685393264,
    0.46292134831460674, 0.45730337078651684, 0.450561797752809, 0.4460674157303371,
    0.4426966292134832, 0.43820224719101125, 0.4359550561797753, 0.43033707865168547,
    0.4269662921348315, 0.42584269662921354, 0.42359550561797754, 0.42022471910112363,
    0.41797752808988764, 0.41685393258426967, 0.41348314606741576, 0.41235955056179774,
    0.41123595505617977,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BellottiInput {
    /// Relative density Dr (%)
    pub relative_density: f64,
}

static BELLOTTI_RULES: Lazy<Vec<FieldRule>> =
    Lazy::new(|| vec![FieldRule::float("relative_density", Some(20.0), Some(100.0))]);

/// K0 of normally consolidated sand from calibration chamber tests.
///
/// Reference: Bellotti et al. (1985). Laboratory validation of in-situ tests.
/// Italian Geotechnical Society Jubilee Volume, XI ICSMFE, San Francisco.
pub fn k0_relative_density_bellotti(input: &BellottiInput) -> CalcResult<K0Result> {
    validation::check(
        &[("relative_density", ParamValue::Float(input.relative_density))],
        &BELLOTTI_RULES,
    )?;

    Ok(K0Result {
        k0: interp(input.relative_density, &BELLOTTI_DR, &BELLOTTI_K0),
    })
}
