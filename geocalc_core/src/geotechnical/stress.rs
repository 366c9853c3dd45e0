//! # Boussinesq Stress Distributions
//!
//! Stress increase in a homogeneous, isotropic, linear elastic half-space
//! under surface loads. `z` is the depth below the loaded surface, positive
//! downward; `x` and `y` are horizontal offsets. Stresses take the unit of the
//! applied pressure (kPa for pressures, kN with m for point and line loads).
//!
//! Every result is checked for finiteness: evaluating directly under a point
//! or line load at the surface raises
//! [`CalcError::NumericDomain`](crate::errors::CalcError::NumericDomain).
//!
//! ## References
//!
//! - Boussinesq, J. (1885). Application des potentiels à l'étude de
//!   l'équilibre et du mouvement des solides élastiques.
//! - Poulos, H.G., Davis, E.H. (1974). Elastic Solutions for Soil and Rock
//!   Mechanics. Wiley.

use std::f64::consts::PI;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

fn default_poisson_ratio() -> f64 {
    0.3
}

// =============================================================================
// POINT LOAD
// =============================================================================

/// Input for [`stresses_point_load`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadStressInput {
    /// Point load P (kN)
    pub point_load: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,
}

impl PointLoadStressInput {
    pub fn new(point_load: f64, x: f64, y: f64, z: f64) -> Self {
        PointLoadStressInput {
            point_load,
            x,
            y,
            z,
            poisson_ratio: default_poisson_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadStressResult {
    pub sigma_z: f64,
    pub sigma_x: f64,
    pub sigma_y: f64,
    pub tau_zx: f64,
    pub tau_yz: f64,
    pub tau_xy: f64,
    /// Distance from the load to the point (m)
    pub radius: f64,
}

impl Undefined for PointLoadStressResult {
    fn undefined() -> Self {
        PointLoadStressResult {
            sigma_z: f64::NAN,
            sigma_x: f64::NAN,
            sigma_y: f64::NAN,
            tau_zx: f64::NAN,
            tau_yz: f64::NAN,
            tau_xy: f64::NAN,
            radius: f64::NAN,
        }
    }
}

static POINT_LOAD_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("point_load"),
        FieldRule::any_float("x"),
        FieldRule::any_float("y"),
        FieldRule::float("z", Some(0.0), None),
        FieldRule::float("poisson_ratio", Some(0.0), Some(0.5)),
    ]
});

/// Stresses under a vertical point load on the surface.
///
/// ```rust
/// use geocalc_core::geotechnical::stress::{stresses_point_load, PointLoadStressInput};
///
/// let result = stresses_point_load(&PointLoadStressInput::new(100.0, 0.0, 0.0, 1.0)).unwrap();
/// assert!((result.sigma_z - 47.75).abs() < 0.005);
/// ```
pub fn stresses_point_load(input: &PointLoadStressInput) -> CalcResult<PointLoadStressResult> {
    validation::check(
        &[
            ("point_load", ParamValue::Float(input.point_load)),
            ("x", ParamValue::Float(input.x)),
            ("y", ParamValue::Float(input.y)),
            ("z", ParamValue::Float(input.z)),
            ("poisson_ratio", ParamValue::Float(input.poisson_ratio)),
        ],
        &POINT_LOAD_RULES,
    )?;

    let PointLoadStressInput { x, y, z, .. } = *input;
    let k = 3.0 * input.point_load / (2.0 * PI);
    let c = (1.0 - 2.0 * input.poisson_ratio) / 3.0;
    let r = (x.powi(2) + y.powi(2) + z.powi(2)).sqrt();
    let r3 = r.powi(3);
    let r5 = r.powi(5);

    let horizontal = |h: f64| {
        k * (h.powi(2) * z / r5
            + c * (-1.0 / (r * (r + z)) - h.powi(2) * (2.0 * r + z) / (r3 * (r + z).powi(2)) - z / r3))
    };

    Ok(PointLoadStressResult {
        sigma_z: ensure_finite("sigma_z", k * z.powi(3) / r5)?,
        sigma_x: ensure_finite("sigma_x", horizontal(x))?,
        sigma_y: ensure_finite("sigma_y", horizontal(y))?,
        tau_zx: ensure_finite("tau_zx", -k * x * z.powi(2) / r5)?,
        tau_yz: ensure_finite("tau_yz", -k * y * z.powi(2) / r5)?,
        tau_xy: ensure_finite(
            "tau_xy",
            k * (x * y * z / r5 - c * x * y * (2.0 * r + z) / (r3 * (r + z).powi(2))),
        )?,
        radius: r,
    })
}

// =============================================================================
// LINE AND STRIP LOADS (PLANE STRAIN)
// =============================================================================

/// Plane strain stresses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneStressResult {
    pub sigma_z: f64,
    pub sigma_x: f64,
    pub tau_zx: f64,
}

impl Undefined for PlaneStressResult {
    fn undefined() -> Self {
        PlaneStressResult {
            sigma_z: f64::NAN,
            sigma_x: f64::NAN,
            tau_zx: f64::NAN,
        }
    }
}

impl PlaneStressResult {
    fn checked(sigma_z: f64, sigma_x: f64, tau_zx: f64) -> CalcResult<Self> {
        Ok(PlaneStressResult {
            sigma_z: ensure_finite("sigma_z", sigma_z)?,
            sigma_x: ensure_finite("sigma_x", sigma_x)?,
            tau_zx: ensure_finite("tau_zx", tau_zx)?,
        })
    }
}

/// Input for [`stresses_line_load`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLoadStressInput {
    /// Line load q (kN/m)
    pub line_load: f64,
    pub x: f64,
    pub z: f64,
}

static LINE_LOAD_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("line_load"),
        FieldRule::any_float("x"),
        FieldRule::float("z", Some(0.0), None),
    ]
});

/// Stresses under an infinitely long vertical line load.
pub fn stresses_line_load(input: &LineLoadStressInput) -> CalcResult<PlaneStressResult> {
    validation::check(
        &[
            ("line_load", ParamValue::Float(input.line_load)),
            ("x", ParamValue::Float(input.x)),
            ("z", ParamValue::Float(input.z)),
        ],
        &LINE_LOAD_RULES,
    )?;

    let LineLoadStressInput { line_load: q, x, z } = *input;
    let denominator = PI * (x.powi(2) + z.powi(2)).powi(2);
    PlaneStressResult::checked(
        2.0 * q * z.powi(3) / denominator,
        2.0 * q * x.powi(2) * z / denominator,
        2.0 * q * x * z.powi(2) / denominator,
    )
}

/// Input for the strip load solutions. `x` is measured from the edge of the
/// strip where a triangular load is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripLoadStressInput {
    /// Strip pressure q (maximum pressure for a triangular strip) (kPa)
    pub strip_load: f64,
    /// Strip width B (m)
    pub load_width: f64,
    pub x: f64,
    pub z: f64,
}

static STRIP_CONSTANT_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("strip_load"),
        FieldRule::float("load_width", Some(0.0), None),
        FieldRule::any_float("x"),
        FieldRule::float("z", Some(0.0), None),
    ]
});

static STRIP_TRIANGULAR_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("strip_load"),
        FieldRule::float("load_width", Some(0.0), None),
        FieldRule::any_float("x"),
        FieldRule::any_float("z"),
    ]
});

impl StripLoadStressInput {
    fn params(&self) -> [(&'static str, ParamValue); 4] {
        [
            ("strip_load", ParamValue::Float(self.strip_load)),
            ("load_width", ParamValue::Float(self.load_width)),
            ("x", ParamValue::Float(self.x)),
            ("z", ParamValue::Float(self.z)),
        ]
    }

    /// Angles (α, β) subtended by the strip at the point
    fn angles(&self) -> (f64, f64) {
        let beta = ((self.x - self.load_width) / self.z).atan();
        let alpha = (self.x / self.z).atan() - beta;
        (alpha, beta)
    }
}

/// Stresses under a uniformly loaded strip.
pub fn stresses_strip_constant(input: &StripLoadStressInput) -> CalcResult<PlaneStressResult> {
    validation::check(&input.params(), &STRIP_CONSTANT_RULES)?;

    let (alpha, beta) = input.angles();
    let q = input.strip_load / PI;
    PlaneStressResult::checked(
        q * (alpha + alpha.sin() * (alpha + 2.0 * beta).cos()),
        q * (alpha - alpha.sin() * (alpha + 2.0 * beta).cos()),
        q * alpha.sin() * (alpha + 2.0 * beta).sin(),
    )
}

/// Stresses under a strip with pressure rising linearly from zero at `x = 0`
/// to `strip_load` at `x = load_width`.
pub fn stresses_strip_triangular(input: &StripLoadStressInput) -> CalcResult<PlaneStressResult> {
    validation::check(&input.params(), &STRIP_TRIANGULAR_RULES)?;

    let StripLoadStressInput {
        strip_load,
        load_width: b,
        x,
        z,
    } = *input;
    let (alpha, beta) = input.angles();
    let r1_sq = x.powi(2) + z.powi(2);
    let r2_sq = (x - b).powi(2) + z.powi(2);
    let q = strip_load / PI;

    PlaneStressResult::checked(
        q * ((x / b) * alpha - 0.5 * (2.0 * beta).sin()),
        q * ((x / b) * alpha - (z / b) * (r1_sq / r2_sq).ln() + 0.5 * (2.0 * beta).sin()),
        0.5 * q * (1.0 + (2.0 * beta).cos() - 2.0 * alpha * z / b),
    )
}

// =============================================================================
// UNIFORMLY LOADED CIRCLE
// =============================================================================

/// Input for [`stresses_circle`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleStressInput {
    /// Uniform pressure q (kPa)
    pub circle_stress: f64,
    /// Radius of the loaded circle R (m)
    pub circle_radius: f64,
    pub z: f64,
    /// Horizontal distance from the centreline (m). Only 0 is supported.
    #[serde(default)]
    pub radius: f64,
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,
}

impl CircleStressInput {
    /// Point on the centreline at depth `z`
    pub fn new(circle_stress: f64, circle_radius: f64, z: f64) -> Self {
        CircleStressInput {
            circle_stress,
            circle_radius,
            z,
            radius: 0.0,
            poisson_ratio: default_poisson_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleStressResult {
    pub sigma_z: f64,
    pub sigma_r: f64,
    pub sigma_theta: f64,
}

impl Undefined for CircleStressResult {
    fn undefined() -> Self {
        CircleStressResult {
            sigma_z: f64::NAN,
            sigma_r: f64::NAN,
            sigma_theta: f64::NAN,
        }
    }
}

static CIRCLE_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("circle_stress"),
        FieldRule::float("circle_radius", Some(0.0), None),
        FieldRule::float("z", Some(0.0), None),
        FieldRule::float("radius", Some(0.0), None),
        FieldRule::float("poisson_ratio", Some(0.0), Some(0.5)),
    ]
});

/// Stresses on the centreline of a uniformly loaded circle.
///
/// Radial and tangential stresses are equal on the centreline.
///
/// # Errors
/// [`CalcError::InvalidInput`] for points off the centreline.
pub fn stresses_circle(input: &CircleStressInput) -> CalcResult<CircleStressResult> {
    validation::check(
        &[
            ("circle_stress", ParamValue::Float(input.circle_stress)),
            ("circle_radius", ParamValue::Float(input.circle_radius)),
            ("z", ParamValue::Float(input.z)),
            ("radius", ParamValue::Float(input.radius)),
            ("poisson_ratio", ParamValue::Float(input.poisson_ratio)),
        ],
        &CIRCLE_RULES,
    )?;

    if input.radius != 0.0 {
        return Err(CalcError::invalid_input(
            "radius",
            input.radius.to_string(),
            "only points on the centreline (radius = 0) are supported",
        ));
    }

    let q = input.circle_stress;
    let nu = input.poisson_ratio;
    let ratio = 1.0 + (input.circle_radius / input.z).powi(2);

    let sigma_z = q * (1.0 - (1.0 / ratio).powf(1.5));
    let sigma_r = 0.5 * q * ((1.0 + 2.0 * nu) - 4.0 * (1.0 + nu) / ratio.sqrt() + 1.0 / ratio.powf(1.5));
    let sigma_r = ensure_finite("sigma_r", sigma_r)?;

    Ok(CircleStressResult {
        sigma_z: ensure_finite("sigma_z", sigma_z)?,
        sigma_r,
        sigma_theta: sigma_r,
    })
}

// =============================================================================
// UNIFORMLY LOADED RECTANGLE
// =============================================================================

/// Input for [`stresses_rectangle_corner`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleStressInput {
    /// Uniform pressure q (kPa)
    pub rectangle_stress: f64,
    /// Longest side L (m)
    pub rectangle_length: f64,
    /// Shortest side B (m)
    pub rectangle_width: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleStressResult {
    pub sigma_z: f64,
    pub sigma_x: f64,
    pub sigma_y: f64,
    pub tau_zx: f64,
}

impl Undefined for RectangleStressResult {
    fn undefined() -> Self {
        RectangleStressResult {
            sigma_z: f64::NAN,
            sigma_x: f64::NAN,
            sigma_y: f64::NAN,
            tau_zx: f64::NAN,
        }
    }
}

static RECTANGLE_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::any_float("rectangle_stress"),
        FieldRule::float("rectangle_length", Some(0.0), None),
        FieldRule::float("rectangle_width", Some(0.0), None),
        FieldRule::float("z", Some(0.0), None),
    ]
});

/// Stresses below the corner of a uniformly loaded rectangle.
///
/// Stresses under any other point follow by superposition of corner
/// solutions.
///
/// ```text
/// R1 = √(L² + z²),  R2 = √(B² + z²),  R3 = √(L² + B² + z²)
/// σz = q/2π · [atan(LB / zR3) + LBz/R3 · (1/R1² + 1/R2²)]
/// ```
///
/// # Errors
/// [`CalcError::InvalidInput`] if the width exceeds the length.
pub fn stresses_rectangle_corner(input: &RectangleStressInput) -> CalcResult<RectangleStressResult> {
    validation::check(
        &[
            ("rectangle_stress", ParamValue::Float(input.rectangle_stress)),
            ("rectangle_length", ParamValue::Float(input.rectangle_length)),
            ("rectangle_width", ParamValue::Float(input.rectangle_width)),
            ("z", ParamValue::Float(input.z)),
        ],
        &RECTANGLE_RULES,
    )?;

    let RectangleStressInput {
        rectangle_stress,
        rectangle_length: l,
        rectangle_width: b,
        z,
    } = *input;

    if b > l {
        return Err(CalcError::invalid_input(
            "rectangle_width",
            b.to_string(),
            format!("cannot be greater than rectangle_length ({})", l),
        ));
    }

    let r1_sq = l.powi(2) + z.powi(2);
    let r2_sq = b.powi(2) + z.powi(2);
    let r3 = (l.powi(2) + b.powi(2) + z.powi(2)).sqrt();
    let angle = (l * b / (z * r3)).atan();
    let q = rectangle_stress / (2.0 * PI);

    Ok(RectangleStressResult {
        sigma_z: ensure_finite("sigma_z", q * (angle + (l * b * z / r3) * (1.0 / r1_sq + 1.0 / r2_sq)))?,
        sigma_x: ensure_finite("sigma_x", q * (angle - l * b * z / (r1_sq * r3)))?,
        sigma_y: ensure_finite("sigma_y", q * (angle - l * b * z / (r2_sq * r3)))?,
        tau_zx: ensure_finite("tau_zx", q * (b / r2_sq.sqrt() - z.powi(2) * b / (r1_sq * r3)))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_point_load_below_load() {
        let result = stresses_point_load(&PointLoadStressInput::new(100.0, 0.0, 0.0, 1.0)).unwrap();
        assert!(approx_eq(result.sigma_z, 47.7465, 1e-4), "σz = {}", result.sigma_z);
        assert!(approx_eq(result.tau_zx, 0.0, 1e-12));
        assert!(approx_eq(result.sigma_x, result.sigma_y, 1e-12));
        assert_eq!(result.radius, 1.0);
    }

    #[test]
    fn test_point_load_at_surface_fails() {
        let err = stresses_point_load(&PointLoadStressInput::new(100.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_point_load_symmetry() {
        let a = stresses_point_load(&PointLoadStressInput::new(10.0, 1.0, 2.0, 3.0)).unwrap();
        let b = stresses_point_load(&PointLoadStressInput::new(10.0, 2.0, 1.0, 3.0)).unwrap();
        assert!(approx_eq(a.sigma_z, b.sigma_z, 1e-12));
        assert!(approx_eq(a.sigma_x, b.sigma_y, 1e-12));
        assert!(approx_eq(a.tau_zx, b.tau_yz, 1e-12));
    }

    #[test]
    fn test_line_load() {
        let result = stresses_line_load(&LineLoadStressInput {
            line_load: 1.0,
            x: 1.0,
            z: 1.0,
        })
        .unwrap();
        let expected = 1.0 / (2.0 * PI);
        assert!(approx_eq(result.sigma_z, expected, 1e-12));
        assert!(approx_eq(result.sigma_x, expected, 1e-12));
        assert!(approx_eq(result.tau_zx, expected, 1e-12));
        assert!(approx_eq(result.sigma_z, 0.159, 5e-4));
    }

    #[test]
    fn test_strip_constant() {
        let input = StripLoadStressInput {
            strip_load: 1.0,
            load_width: 1.0,
            x: 0.0,
            z: 1.0,
        };
        let result = stresses_strip_constant(&input).unwrap();
        assert!(approx_eq(result.sigma_z, 0.409, 5e-4), "σz = {}", result.sigma_z);
        assert!(approx_eq(result.sigma_x, 0.091, 5e-4), "σx = {}", result.sigma_x);
        assert!(approx_eq(result.tau_zx, -0.159, 5e-4), "τzx = {}", result.tau_zx);
    }

    #[test]
    fn test_strip_constant_deep_below_centre() {
        // Far below the strip the load acts like a line load
        let strip = stresses_strip_constant(&StripLoadStressInput {
            strip_load: 1.0,
            load_width: 0.1,
            x: 0.05,
            z: 50.0,
        })
        .unwrap();
        let line = stresses_line_load(&LineLoadStressInput {
            line_load: 0.1,
            x: 0.0,
            z: 50.0,
        })
        .unwrap();
        assert!(approx_eq(strip.sigma_z, line.sigma_z, 1e-8));
    }

    #[test]
    fn test_strip_triangular() {
        let input = StripLoadStressInput {
            strip_load: 1.0,
            load_width: 1.0,
            x: 0.0,
            z: 1.0,
        };
        let result = stresses_strip_triangular(&input).unwrap();
        assert!(approx_eq(result.sigma_z, 0.159, 5e-4), "σz = {}", result.sigma_z);
        assert!(approx_eq(result.sigma_x, 0.061, 5e-4), "σx = {}", result.sigma_x);
        assert!(approx_eq(result.tau_zx, -0.091, 5e-4), "τzx = {}", result.tau_zx);
    }

    #[test]
    fn test_circle_centreline() {
        let result = stresses_circle(&CircleStressInput::new(1.0, 1.0, 1.0)).unwrap();
        assert!(approx_eq(result.sigma_z, 0.646, 5e-4), "σz = {}", result.sigma_z);
        assert!(approx_eq(result.sigma_r, -0.862, 5e-4), "σr = {}", result.sigma_r);
        assert_eq!(result.sigma_r, result.sigma_theta);
    }

    #[test]
    fn test_circle_off_centre_rejected() {
        let mut input = CircleStressInput::new(1.0, 1.0, 1.0);
        input.radius = 0.5;
        let err = stresses_circle(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_circle_at_surface_carries_full_pressure() {
        let result = stresses_circle(&CircleStressInput::new(2.0, 1.0, 0.0)).unwrap();
        assert!(approx_eq(result.sigma_z, 2.0, 1e-12));
    }

    #[test]
    fn test_rectangle_corner() {
        let result = stresses_rectangle_corner(&RectangleStressInput {
            rectangle_stress: 1.0,
            rectangle_length: 1.0,
            rectangle_width: 0.5,
            z: 1.0,
        })
        .unwrap();
        assert!(approx_eq(result.sigma_z, 0.1202, 5e-5), "σz = {}", result.sigma_z);
        assert!(approx_eq(result.sigma_x, 0.0247, 5e-5), "σx = {}", result.sigma_x);
        assert!(approx_eq(result.sigma_y, 0.0088, 5e-5), "σy = {}", result.sigma_y);
        assert!(approx_eq(result.tau_zx, 0.0447, 5e-5), "τzx = {}", result.tau_zx);
    }

    #[test]
    fn test_rectangle_width_greater_than_length() {
        let err = stresses_rectangle_corner(&RectangleStressInput {
            rectangle_stress: 1.0,
            rectangle_length: 0.5,
            rectangle_width: 1.0,
            z: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
