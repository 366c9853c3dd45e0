//! # Bearing Capacity Factors
//!
//! Dimensionless factors of the shallow foundation bearing capacity equation
//! for drained conditions, as functions of the peak friction angle φ'p.
//!
//! ```text
//! Nq = exp(π tan φ) · tan²(45° + φ/2)
//! Nγ = 2 (Nq + 1) tan φ                      (Vesic)
//! Nγ = (Nq - 1) tan(1.4 φ)                    (Meyerhof)
//! Nγ = 0.0663 exp(9.3 φ)  smooth footing     (Davis & Booker, φ in radians)
//! Nγ = 0.1054 exp(9.6 φ)  rough footing
//! ```
//!
//! Reference: Budhu, M. (2011). Soil Mechanics and Foundations. Wiley.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::interpolate::interp;
use crate::errors::{ensure_finite, CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

/// Peak friction angle φ'p (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionAngleInput {
    pub friction_angle: f64,
}

/// A single bearing capacity factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingFactorResult {
    pub factor: f64,
}

impl Undefined for BearingFactorResult {
    fn undefined() -> Self {
        BearingFactorResult { factor: f64::NAN }
    }
}

static FRICTION_ANGLE_RULES: Lazy<Vec<FieldRule>> =
    Lazy::new(|| vec![FieldRule::float("friction_angle", Some(20.0), Some(50.0))]);

fn check_friction_angle(friction_angle: f64) -> CalcResult<()> {
    validation::check(
        &[("friction_angle", ParamValue::Float(friction_angle))],
        &FRICTION_ANGLE_RULES,
    )
}

fn nq(phi_deg: f64) -> f64 {
    (std::f64::consts::PI * phi_deg.to_radians().tan()).exp()
        * (45.0 + 0.5 * phi_deg).to_radians().tan().powi(2)
}

/// Nq for a drained sand.
///
/// ```rust
/// use geocalc_core::geotechnical::bearing_capacity::{nq_friction_angle, FrictionAngleInput};
///
/// let nq = nq_friction_angle(&FrictionAngleInput { friction_angle: 30.0 }).unwrap();
/// assert!((nq.factor - 18.4).abs() < 0.05);
/// ```
pub fn nq_friction_angle(input: &FrictionAngleInput) -> CalcResult<BearingFactorResult> {
    check_friction_angle(input.friction_angle)?;
    Ok(BearingFactorResult {
        factor: ensure_finite("Nq", nq(input.friction_angle))?,
    })
}

/// Nγ according to Vesic.
pub fn ngamma_vesic(input: &FrictionAngleInput) -> CalcResult<BearingFactorResult> {
    check_friction_angle(input.friction_angle)?;
    let phi = input.friction_angle;
    let ngamma = 2.0 * (nq(phi) + 1.0) * phi.to_radians().tan();
    Ok(BearingFactorResult {
        factor: ensure_finite("Ngamma", ngamma)?,
    })
}

/// Input for [`ngamma_meyerhof`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeyerhofInput {
    pub friction_angle: f64,
    /// Multiplier on φ inside the tangent
    #[serde(default = "MeyerhofInput::default_multiplier")]
    pub friction_angle_multiplier: f64,
}

impl MeyerhofInput {
    fn default_multiplier() -> f64 {
        1.4
    }

    pub fn new(friction_angle: f64) -> Self {
        MeyerhofInput {
            friction_angle,
            friction_angle_multiplier: Self::default_multiplier(),
        }
    }
}

/// Nγ according to Meyerhof.
pub fn ngamma_meyerhof(input: &MeyerhofInput) -> CalcResult<BearingFactorResult> {
    check_friction_angle(input.friction_angle)?;
    let phi = input.friction_angle;
    let ngamma = (nq(phi) - 1.0) * (input.friction_angle_multiplier * phi).to_radians().tan();
    Ok(BearingFactorResult {
        factor: ensure_finite("Ngamma", ngamma)?,
    })
}

/// Input for [`ngamma_davis_booker`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DavisBookerInput {
    pub friction_angle: f64,
    /// 0 for a perfectly smooth footing, 1 for a perfectly rough footing
    pub roughness_factor: f64,
    /// `[multiplier_smooth, multiplier_rough, exponent_smooth, exponent_rough]`
    #[serde(default = "DavisBookerInput::default_coefficients")]
    pub coefficients: [f64; 4],
}

impl DavisBookerInput {
    fn default_coefficients() -> [f64; 4] {
        [0.0663, 0.1054, 9.3, 9.6]
    }

    pub fn new(friction_angle: f64, roughness_factor: f64) -> Self {
        DavisBookerInput {
            friction_angle,
            roughness_factor,
            coefficients: Self::default_coefficients(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DavisBookerResult {
    /// Nγ at the given roughness, linear between smooth and rough
    pub ngamma: f64,
    pub ngamma_smooth: f64,
    pub ngamma_rough: f64,
}

impl Undefined for DavisBookerResult {
    fn undefined() -> Self {
        DavisBookerResult {
            ngamma: f64::NAN,
            ngamma_smooth: f64::NAN,
            ngamma_rough: f64::NAN,
        }
    }
}

static DAVIS_BOOKER_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("friction_angle", Some(20.0), Some(50.0)),
        FieldRule::float("roughness_factor", Some(0.0), Some(1.0)),
    ]
});

/// Nγ from the plasticity solutions of Davis & Booker.
pub fn ngamma_davis_booker(input: &DavisBookerInput) -> CalcResult<DavisBookerResult> {
    validation::check(
        &[
            ("friction_angle", ParamValue::Float(input.friction_angle)),
            ("roughness_factor", ParamValue::Float(input.roughness_factor)),
        ],
        &DAVIS_BOOKER_RULES,
    )?;

    let [mult_smooth, mult_rough, exp_smooth, exp_rough] = input.coefficients;
    let phi = input.friction_angle.to_radians();
    let ngamma_smooth = ensure_finite("Ngamma (smooth)", mult_smooth * (exp_smooth * phi).exp())?;
    let ngamma_rough = ensure_finite("Ngamma (rough)", mult_rough * (exp_rough * phi).exp())?;

    Ok(DavisBookerResult {
        ngamma: interp(input.roughness_factor, &[0.0, 1.0], &[ngamma_smooth, ngamma_rough]),
        ngamma_smooth,
        ngamma_rough,
    })
}
