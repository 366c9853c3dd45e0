//! Clay correlations.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::interpolate::{interp, interp_log_log};
use crate::errors::{ensure_finite, CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

// =============================================================================
// K0 FROM PLASTICITY (MASSARSCH, 1979)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassarschInput {
    /// Plasticity index PI (%)
    pub plasticity_index: f64,
}

/// Coefficient of lateral earth pressure at rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct K0Result {
    pub k0: f64,
}

impl Undefined for K0Result {
    fn undefined() -> Self {
        K0Result { k0: f64::NAN }
    }
}

static MASSARSCH_RULES: Lazy<Vec<FieldRule>> =
    Lazy::new(|| vec![FieldRule::float("plasticity_index", Some(20.0), Some(70.0))]);

/// K0 of a normally consolidated clay from its plasticity index.
///
/// Fitted on Italian clays; overestimates K0 for PI < 20 %.
///
/// Reference: Massarsch, K.R. (1979). Lateral earth pressure in normally
/// consolidated clay. 7th ECSMFE, Brighton, 2, 245-249.
pub fn k0_plasticity_massarsch(input: &MassarschInput) -> CalcResult<K0Result> {
    validation::check(
        &[("plasticity_index", ParamValue::Float(input.plasticity_index))],
        &MASSARSCH_RULES,
    )?;

    let k0 = interp(
        input.plasticity_index,
        &[0.0, 110.0],
        &[0.4668587896253603, 0.8631123919308359],
    );
    Ok(K0Result { k0 })
}

// =============================================================================
// SECONDARY COMPRESSION RATIO (MESRI & GODLEWSKI, 1977)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MesriInput {
    /// Natural water content (%)
    pub water_content: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryCompressionResult {
    /// Secondary compression ratio Cαε = Cα / (1 + e0) (%)
    pub secondary_compression_ratio: f64,
}

impl Undefined for SecondaryCompressionResult {
    fn undefined() -> Self {
        SecondaryCompressionResult {
            secondary_compression_ratio: f64::NAN,
        }
    }
}

static MESRI_RULES: Lazy<Vec<FieldRule>> =
    Lazy::new(|| vec![FieldRule::float("water_content", Some(10.0), Some(2000.0))]);

/// Secondary compression ratio from the natural water content.
///
/// The ratio is a straight line against water content on a log-log plot
/// (data from 12 natural clays). It is not the ratio Cα/Cc.
///
/// Reference: Mesri, G., Godlewski, P.M. (1977). Time and stress-compressibility
/// interrelationship. Journal of the Geotechnical Engineering Division, ASCE,
/// GT5, 417-430.
pub fn secondary_compression_ratio_mesri(input: &MesriInput) -> CalcResult<SecondaryCompressionResult> {
    validation::check(
        &[("water_content", ParamValue::Float(input.water_content))],
        &MESRI_RULES,
    )?;

    let ratio = interp_log_log(
        input.water_content,
        &[9.999703334951846, 3822.2040801773114],
        &[0.10000890047953175, 39.942386556889026],
    );
    Ok(SecondaryCompressionResult {
        secondary_compression_ratio: ratio,
    })
}

// =============================================================================
// GMAX FROM CPT (MAYNE & RIX, 1995)
// =============================================================================

/// Input for [`gmax_cpt_clay_mayne_rix`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MayneRixInput {
    /// Cone resistance qc (MPa)
    pub cone_resistance: f64,
    /// Bulk density ρ (kg/m³)
    pub density: f64,
    #[serde(default = "MayneRixInput::default_coefficient_1")]
    pub coefficient_1: f64,
    #[serde(default = "MayneRixInput::default_coefficient_2")]
    pub coefficient_2: f64,
}

impl MayneRixInput {
    fn default_coefficient_1() -> f64 {
        1.75
    }

    fn default_coefficient_2() -> f64 {
        0.627
    }

    pub fn new(cone_resistance: f64, density: f64) -> Self {
        MayneRixInput {
            cone_resistance,
            density,
            coefficient_1: Self::default_coefficient_1(),
            coefficient_2: Self::default_coefficient_2(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmallStrainStiffnessResult {
    /// Shear wave velocity Vs (m/s)
    pub shear_wave_velocity: f64,
    /// Small-strain shear modulus Gmax (kPa)
    pub gmax: f64,
}

impl Undefined for SmallStrainStiffnessResult {
    fn undefined() -> Self {
        SmallStrainStiffnessResult {
            shear_wave_velocity: f64::NAN,
            gmax: f64::NAN,
        }
    }
}

static MAYNE_RIX_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("cone_resistance", Some(0.0), Some(120.0)),
        FieldRule::float("density", Some(1000.0), Some(3000.0)),
        FieldRule::any_float("coefficient_1"),
        FieldRule::any_float("coefficient_2"),
    ]
});

/// Small-strain shear modulus of intact and fissured clays from the cone
/// resistance, for use when the void ratio is hard to estimate.
///
/// ```text
/// Vs = 1.75 · qc^0.627    (qc in kPa)
/// Gmax = ρ · Vs²
/// ```
///
/// Reference: Ameratunga, J., Sivakugan, N., Das, B.M. (2016). Correlations of
/// Soil and Rock Properties in Geotechnical Engineering. Springer.
pub fn gmax_cpt_clay_mayne_rix(input: &MayneRixInput) -> CalcResult<SmallStrainStiffnessResult> {
    validation::check(
        &[
            ("cone_resistance", ParamValue::Float(input.cone_resistance)),
            ("density", ParamValue::Float(input.density)),
            ("coefficient_1", ParamValue::Float(input.coefficient_1)),
            ("coefficient_2", ParamValue::Float(input.coefficient_2)),
        ],
        &MAYNE_RIX_RULES,
    )?;

    let vs = input.coefficient_1 * (1e3 * input.cone_resistance).powf(input.coefficient_2);
    let gmax = input.density * vs.powi(2) * 1e-3;
    Ok(SmallStrainStiffnessResult {
        shear_wave_velocity: ensure_finite("shear wave velocity", vs)?,
        gmax: ensure_finite("Gmax", gmax)?,
    })
}

// =============================================================================
// PERMEABILITY OF REMOULDED CLAY (CARRIER & BECKMAN, 1984)
// =============================================================================

/// Input for [`permeability_remoulded_clay_carrier_beckman`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarrierBeckmanInput {
    pub void_ratio: f64,
    /// Plastic limit PL (%)
    pub plastic_limit: f64,
    /// Plasticity index PI (%)
    pub plasticity_index: f64,
    /// Correlation coefficients c1..c4, defaults `[0.0174, 0.027, 0.242, 4.29]`
    #[serde(default = "CarrierBeckmanInput::default_coefficients")]
    pub coefficients: [f64; 4],
}

impl CarrierBeckmanInput {
    fn default_coefficients() -> [f64; 4] {
        [0.0174, 0.027, 0.242, 4.29]
    }

    pub fn new(void_ratio: f64, plastic_limit: f64, plasticity_index: f64) -> Self {
        CarrierBeckmanInput {
            void_ratio,
            plastic_limit,
            plasticity_index,
            coefficients: Self::default_coefficients(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PermeabilityResult {
    /// Hydraulic conductivity k (m/s)
    pub permeability: f64,
}

impl Undefined for PermeabilityResult {
    fn undefined() -> Self {
        PermeabilityResult {
            permeability: f64::NAN,
        }
    }
}

static CARRIER_BECKMAN_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("void_ratio", Some(0.0), Some(4.0)),
        FieldRule::float("plastic_limit", Some(0.0), Some(100.0)),
        FieldRule::float("plasticity_index", Some(0.0), Some(100.0)),
    ]
});

/// Permeability of remoulded clay from its void ratio and Atterberg limits.
///
/// ```text
/// k = c1 / (1 + e) · [(e - c2 (PL - c3 PI)) / PI]^c4
/// ```
///
/// Reference: Carrier, W.D., Beckman, J.F. (1984). Correlations between index
/// tests and the properties of remoulded clays. Géotechnique 34(2), 211-228.
///
/// # Errors
/// [`CalcError::NumericDomain`](crate::errors::CalcError::NumericDomain) when the
/// bracketed term is negative or PI is zero.
pub fn permeability_remoulded_clay_carrier_beckman(
    input: &CarrierBeckmanInput,
) -> CalcResult<PermeabilityResult> {
    validation::check(
        &[
            ("void_ratio", ParamValue::Float(input.void_ratio)),
            ("plastic_limit", ParamValue::Float(input.plastic_limit)),
            ("plasticity_index", ParamValue::Float(input.plasticity_index)),
        ],
        &CARRIER_BECKMAN_RULES,
    )?;

    let [c1, c2, c3, c4] = input.coefficients;
    let e = input.void_ratio;
    let bracket = (e - c2 * (input.plastic_limit - c3 * input.plasticity_index)) / input.plasticity_index;
    let k = (c1 / (1.0 + e)) * bracket.powf(c4);

    Ok(PermeabilityResult {
        permeability: ensure_finite("permeability", k)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_massarsch() {
        let result = k0_plasticity_massarsch(&MassarschInput {
            plasticity_index: 50.0,
        })
        .unwrap();
        assert!((result.k0 - 0.65).abs() < 0.005, "K0 = {}", result.k0);
    }

    #[test]
    fn test_massarsch_range() {
        let err = k0_plasticity_massarsch(&MassarschInput {
            plasticity_index: 10.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
    }

    #[test]
    fn test_mesri() {
        let ratio = |w: f64| {
            secondary_compression_ratio_mesri(&MesriInput { water_content: w })
                .unwrap()
                .secondary_compression_ratio
        };
        assert!((ratio(77.8) - 0.80).abs() < 0.05);
        assert!((ratio(56.1) - 0.57).abs() < 0.05);
        assert!((ratio(811.0) - 8.38).abs() < 0.005);
    }

    #[test]
    fn test_mayne_rix() {
        let result = gmax_cpt_clay_mayne_rix(&MayneRixInput::new(1.0, 1750.0)).unwrap();
        assert!((result.gmax - 30982.3).abs() < 0.05, "Gmax = {}", result.gmax);
        assert!((result.gmax - 1.75 * result.shear_wave_velocity.powi(2)).abs() < 1e-6);
    }

    #[test]
    fn test_carrier_beckman() {
        let result =
            permeability_remoulded_clay_carrier_beckman(&CarrierBeckmanInput::new(1.0, 30.0, 30.0)).unwrap();
        assert!((result.permeability - 6.75e-11).abs() < 1e-13, "k = {}", result.permeability);
    }

    #[test]
    fn test_carrier_beckman_negative_bracket() {
        // e below the Atterberg term makes the base negative
        let err = permeability_remoulded_clay_carrier_beckman(&CarrierBeckmanInput::new(0.1, 90.0, 5.0))
            .unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }
}
