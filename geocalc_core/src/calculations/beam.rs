//! # Beam Point-Load Calculation
//!
//! Shear force, bending moment, slope and deflection profiles of a thin linear
//! elastic beam carrying one transverse point load.
//!
//! ## Assumptions
//!
//! - The beam is initially straight and any taper is slight
//! - Deformation is linear elastic
//! - The beam is slender (length/height > 10)
//! - Deflections are small (less than 1/10 of the span)
//!
//! Under these conditions the deflection `w` obeys `w''(x) = M(x) / EI`, and
//! the six supported end-condition pairs have closed-form solutions (see
//! [`crate::equations::beam`]).
//!
//! ## Lifecycle
//!
//! [`BeamPointLoad`] owns its input and its computed result. The result is
//! computed on construction and recomputed by every setter, so a result that
//! disagrees with the input is never observable. Use [`BeamPointLoad::update`]
//! to change several fields with a single recompute.
//!
//! ## Example
//!
//! ```rust
//! use geocalc_core::calculations::beam::{BeamPointLoad, BeamPointLoadInput, SupportType};
//!
//! let input = BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0)
//!     .with_load_position(0.4)
//!     .with_supports(SupportType::Support, SupportType::Support);
//!
//! let mut beam = BeamPointLoad::new(input).unwrap();
//! let right = beam.shear_force().len() - 1;
//! assert!((beam.shear_force()[right] + 0.4).abs() < 1e-9);
//!
//! // Moving the load recomputes immediately
//! beam.set_load_position(0.5).unwrap();
//! assert_eq!(beam.input().load_position, 0.5);
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    deflection_at, moment_at, shear_at, slope_at, BoundaryValues, CanonicalCase,
};
use crate::errors::{CalcError, CalcResult, FailureMode, Undefined};
use crate::validation::{self, FieldRule, ParamValue};

/// Default number of sample points along the beam axis
pub const DEFAULT_RESOLUTION: usize = 50;

// =============================================================================
// SUPPORT TYPE
// =============================================================================

/// End condition at one end of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportType {
    /// No restraint
    ///
    /// - Deflection: free
    /// - Rotation: free
    Free,

    /// Simple (pinned) support
    ///
    /// - Deflection: restrained
    /// - Rotation: free
    #[default]
    Support,

    /// Fixed end
    ///
    /// - Deflection: restrained
    /// - Rotation: restrained
    Clamped,

    /// Sliding end that cannot rotate
    ///
    /// - Deflection: free
    /// - Rotation: restrained
    Guided,
}

impl SupportType {
    /// All available support types
    pub const ALL: [SupportType; 4] = [
        SupportType::Free,
        SupportType::Support,
        SupportType::Clamped,
        SupportType::Guided,
    ];

    /// Names accepted by [`SupportType::from_str`]
    pub const NAMES: [&'static str; 4] = ["Free", "Support", "Clamped", "Guided"];

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportType::Free => "Free",
            SupportType::Support => "Support",
            SupportType::Clamped => "Clamped",
            SupportType::Guided => "Guided",
        }
    }

    /// Returns true if this support restrains deflection
    pub fn restrains_deflection(&self) -> bool {
        matches!(self, SupportType::Support | SupportType::Clamped)
    }

    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportType::Clamped | SupportType::Guided)
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportType::ALL
            .iter()
            .copied()
            .find(|support| support.as_str() == s)
            .ok_or_else(|| {
                CalcError::validation(format!(
                    "support type (\"{}\") not included in list of allowable strings ({})",
                    s,
                    SupportType::NAMES.join(", ")
                ))
            })
    }
}

/// Match an end-condition pair to its canonical case.
///
/// Returns the case and whether the physical beam is the mirror image of the
/// canonical orientation. `None` when the pair has no closed-form solution.
pub fn classify(left: SupportType, right: SupportType) -> Option<(CanonicalCase, bool)> {
    use SupportType::*;

    match (left, right) {
        (Free, Clamped) => Some((CanonicalCase::FreeClamped, false)),
        (Clamped, Free) => Some((CanonicalCase::FreeClamped, true)),
        (Support, Clamped) => Some((CanonicalCase::SupportClamped, false)),
        (Clamped, Support) => Some((CanonicalCase::SupportClamped, true)),
        (Guided, Clamped) => Some((CanonicalCase::GuidedClamped, false)),
        (Clamped, Guided) => Some((CanonicalCase::GuidedClamped, true)),
        (Clamped, Clamped) => Some((CanonicalCase::ClampedClamped, false)),
        (Support, Support) => Some((CanonicalCase::SupportSupport, false)),
        (Guided, Support) => Some((CanonicalCase::GuidedSupport, false)),
        (Support, Guided) => Some((CanonicalCase::GuidedSupport, true)),
        (Free, Free) | (Free, Support) | (Support, Free) | (Free, Guided) | (Guided, Free)
        | (Guided, Guided) => None,
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// Input parameters for a point-loaded beam.
///
/// Units must be consistent: with lengths in m and the modulus in kPa, loads
/// are in kN, moments in kN·m and slopes in radians.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_length": 6.0,
///   "youngs_modulus": 210000000.0,
///   "moment_of_inertia": 0.0001,
///   "point_load": 25.0,
///   "load_position": 2.0,
///   "left_support": "Support",
///   "right_support": "Clamped",
///   "resolution": 50,
///   "failure_mode": "Silent"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamPointLoadInput {
    /// Total length of the beam (L)
    pub beam_length: f64,

    /// Young's modulus (E)
    pub youngs_modulus: f64,

    /// Area moment of inertia (I)
    pub moment_of_inertia: f64,

    /// Point load magnitude (P), positive downward
    pub point_load: f64,

    /// Load position measured from the left end
    #[serde(default)]
    pub load_position: f64,

    #[serde(default)]
    pub left_support: SupportType,

    #[serde(default)]
    pub right_support: SupportType,

    /// Number of sample points along the beam, end points included
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    #[serde(default)]
    pub failure_mode: FailureMode,
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

impl Default for BeamPointLoadInput {
    fn default() -> Self {
        BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0)
    }
}

static BEAM_POINT_LOAD_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::float("beam_length", Some(0.0), None),
        FieldRule::float("youngs_modulus", Some(0.0), None),
        FieldRule::float("moment_of_inertia", Some(0.0), None),
        FieldRule::any_float("point_load"),
        FieldRule::any_float("load_position"),
        FieldRule::options("left_support", &SupportType::NAMES),
        FieldRule::options("right_support", &SupportType::NAMES),
        FieldRule::integer("resolution", Some(1), None),
    ]
});

impl BeamPointLoadInput {
    /// Create an input with the documented defaults: load at the left end,
    /// simple supports at both ends, [`DEFAULT_RESOLUTION`] samples, silent
    /// failure.
    pub fn new(beam_length: f64, youngs_modulus: f64, moment_of_inertia: f64, point_load: f64) -> Self {
        BeamPointLoadInput {
            beam_length,
            youngs_modulus,
            moment_of_inertia,
            point_load,
            load_position: 0.0,
            left_support: SupportType::Support,
            right_support: SupportType::Support,
            resolution: DEFAULT_RESOLUTION,
            failure_mode: FailureMode::Silent,
        }
    }

    pub fn with_load_position(mut self, load_position: f64) -> Self {
        self.load_position = load_position;
        self
    }

    pub fn with_supports(mut self, left: SupportType, right: SupportType) -> Self {
        self.left_support = left;
        self.right_support = right;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.youngs_modulus * self.moment_of_inertia
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let params = [
            ("beam_length", ParamValue::Float(self.beam_length)),
            ("youngs_modulus", ParamValue::Float(self.youngs_modulus)),
            ("moment_of_inertia", ParamValue::Float(self.moment_of_inertia)),
            ("point_load", ParamValue::Float(self.point_load)),
            ("load_position", ParamValue::Float(self.load_position)),
            ("left_support", ParamValue::from(self.left_support.as_str())),
            ("right_support", ParamValue::from(self.right_support.as_str())),
            ("resolution", ParamValue::from(self.resolution)),
        ];
        validation::check(&params, &BEAM_POINT_LOAD_RULES)
    }
}

/// One field of [`BeamPointLoadInput`] together with its new value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BeamField {
    BeamLength(f64),
    YoungsModulus(f64),
    MomentOfInertia(f64),
    PointLoad(f64),
    LoadPosition(f64),
    LeftSupport(SupportType),
    RightSupport(SupportType),
    Resolution(usize),
    FailureMode(FailureMode),
}

impl BeamField {
    /// Write this value into `input`
    pub fn apply(self, input: &mut BeamPointLoadInput) {
        match self {
            BeamField::BeamLength(v) => input.beam_length = v,
            BeamField::YoungsModulus(v) => input.youngs_modulus = v,
            BeamField::MomentOfInertia(v) => input.moment_of_inertia = v,
            BeamField::PointLoad(v) => input.point_load = v,
            BeamField::LoadPosition(v) => input.load_position = v,
            BeamField::LeftSupport(v) => input.left_support = v,
            BeamField::RightSupport(v) => input.right_support = v,
            BeamField::Resolution(v) => input.resolution = v,
            BeamField::FailureMode(v) => input.failure_mode = v,
        }
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Computed profiles and the boundary values they were built from.
///
/// All five sequences have `resolution` entries and are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamPointLoadResult {
    /// Canonical case used, `None` when the calculation failed
    pub case: Option<CanonicalCase>,

    /// True when the canonical solution was reversed onto the physical beam
    pub mirrored: bool,

    /// EI
    pub flexural_rigidity: f64,

    /// Load offset from the canonical left end
    pub effective_load_offset: f64,

    /// Boundary values at the canonical left end
    pub reaction_left: f64,
    pub moment_left: f64,
    /// Radians
    pub slope_left: f64,
    pub deflection_left: f64,

    /// Sample positions from the physical left end
    pub positions: Vec<f64>,
    pub shear_force: Vec<f64>,
    pub bending_moment: Vec<f64>,
    /// Radians
    pub slope: Vec<f64>,
    pub deflection: Vec<f64>,
}

impl BeamPointLoadResult {
    /// Result with every value NaN and `len` entries per sequence
    pub fn undefined_with_len(len: usize) -> Self {
        let bv = BoundaryValues::UNDEFINED;
        BeamPointLoadResult {
            case: None,
            mirrored: false,
            flexural_rigidity: f64::NAN,
            effective_load_offset: f64::NAN,
            reaction_left: bv.reaction,
            moment_left: bv.moment,
            slope_left: bv.slope,
            deflection_left: bv.deflection,
            positions: vec![f64::NAN; len],
            shear_force: vec![f64::NAN; len],
            bending_moment: vec![f64::NAN; len],
            slope: vec![f64::NAN; len],
            deflection: vec![f64::NAN; len],
        }
    }

    /// True when the calculation produced a defined solution
    pub fn is_defined(&self) -> bool {
        self.case.is_some()
    }

    /// Position and value of the largest deflection magnitude.
    ///
    /// `None` when the result is undefined.
    pub fn max_abs_deflection(&self) -> Option<(f64, f64)> {
        self.positions
            .iter()
            .copied()
            .zip(self.deflection.iter().copied())
            .filter(|(_, d)| !d.is_nan())
            .fold(None, |best: Option<(f64, f64)>, (x, d)| match best {
                Some((_, best_d)) if best_d.abs() >= d.abs() => best,
                _ => Some((x, d)),
            })
    }
}

impl Undefined for BeamPointLoadResult {
    fn undefined() -> Self {
        BeamPointLoadResult::undefined_with_len(0)
    }
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Sample positions: `n` equally spaced points over [0, length], end points included.
pub fn linspace(length: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = length / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { length } else { i as f64 * step })
                .collect()
        }
    }
}

/// Evaluate all four profiles for a validated input.
///
/// # Errors
/// - [`CalcError::Validation`] if a field is out of range
/// - [`CalcError::UnsupportedConfiguration`] if the support pair has no solution
/// - [`CalcError::NumericDomain`] if a value is not finite (zero length or zero EI)
pub fn calculate(input: &BeamPointLoadInput) -> CalcResult<BeamPointLoadResult> {
    input.validate()?;

    let ei = input.flexural_rigidity();
    let (case, mirrored) = classify(input.left_support, input.right_support).ok_or_else(|| {
        CalcError::unsupported_configuration(input.left_support.as_str(), input.right_support.as_str())
    })?;

    let l = input.beam_length;
    let p = input.point_load;
    let a = if mirrored {
        l - input.load_position
    } else {
        input.load_position
    };

    log::debug!(
        "beam point load: case {} (mirrored: {}), a = {}, EI = {}",
        case,
        mirrored,
        a,
        ei
    );

    let bv = case.boundary_values(p, l, a, ei);
    if !bv.is_finite() {
        return Err(CalcError::numeric_domain(
            "boundary values",
            format!("{} boundary values are not finite (L = {}, EI = {})", case, l, ei),
        ));
    }

    let positions = linspace(l, input.resolution);
    // Canonical coordinate of each physical sample. A single sample sits at
    // physical x = 0, which is canonical x = L on a mirrored beam.
    let canonical: Vec<f64> = match (mirrored, positions.len()) {
        (false, _) => positions.clone(),
        (true, 1) => vec![l - positions[0]],
        (true, _) => positions.iter().rev().copied().collect(),
    };
    let shear_force: Vec<f64> = canonical.iter().map(|&x| shear_at(&bv, p, a, x)).collect();
    let bending_moment: Vec<f64> = canonical.iter().map(|&x| moment_at(&bv, p, a, x)).collect();
    let slope: Vec<f64> = canonical.iter().map(|&x| slope_at(&bv, p, a, ei, x)).collect();
    let deflection: Vec<f64> = canonical
        .iter()
        .map(|&x| deflection_at(&bv, p, a, ei, x))
        .collect();

    for (quantity, values) in [
        ("shear force", &shear_force),
        ("bending moment", &bending_moment),
        ("slope", &slope),
        ("deflection", &deflection),
    ] {
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(CalcError::numeric_domain(
                quantity,
                format!("non-finite value at sample {} (x = {})", i, positions[i]),
            ));
        }
    }

    Ok(BeamPointLoadResult {
        case: Some(case),
        mirrored,
        flexural_rigidity: ei,
        effective_load_offset: a,
        reaction_left: bv.reaction,
        moment_left: bv.moment,
        slope_left: bv.slope,
        deflection_left: bv.deflection,
        positions,
        shear_force,
        bending_moment,
        slope,
        deflection,
    })
}

// =============================================================================
// STATEFUL ENGINE
// =============================================================================

/// A beam configuration that keeps its profiles in step with its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamPointLoad {
    input: BeamPointLoadInput,
    result: BeamPointLoadResult,
}

impl BeamPointLoad {
    /// Build the beam and compute its profiles.
    ///
    /// In silent mode this always succeeds; a failed calculation leaves an
    /// all-NaN result.
    pub fn new(input: BeamPointLoadInput) -> CalcResult<Self> {
        let len = input.resolution;
        let mut beam = BeamPointLoad {
            input,
            result: BeamPointLoadResult::undefined_with_len(len),
        };
        beam.recompute()?;
        Ok(beam)
    }

    /// Re-run the full calculation from the current input.
    ///
    /// On failure the result is reset to NaN as a unit. The error is
    /// returned only in [`FailureMode::Strict`].
    pub fn recompute(&mut self) -> CalcResult<()> {
        match calculate(&self.input) {
            Ok(result) => {
                self.result = result;
                Ok(())
            }
            Err(err) => {
                self.result = BeamPointLoadResult::undefined_with_len(self.input.resolution);
                if self.input.failure_mode.is_silent() {
                    log::warn!("Error raised but silenced: {}", err);
                    Ok(())
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Set one field and recompute.
    pub fn set_field(&mut self, field: BeamField) -> CalcResult<()> {
        field.apply(&mut self.input);
        self.recompute()
    }

    /// Apply several changes, then recompute once.
    ///
    /// ```rust
    /// use geocalc_core::calculations::beam::{BeamPointLoad, BeamPointLoadInput, SupportType};
    ///
    /// let mut beam = BeamPointLoad::new(BeamPointLoadInput::default()).unwrap();
    /// beam.update(|input| {
    ///     input.left_support = SupportType::Clamped;
    ///     input.right_support = SupportType::Free;
    ///     input.load_position = 1.0;
    /// })
    /// .unwrap();
    /// assert!(beam.result().mirrored);
    /// ```
    pub fn update<F>(&mut self, change: F) -> CalcResult<()>
    where
        F: FnOnce(&mut BeamPointLoadInput),
    {
        change(&mut self.input);
        self.recompute()
    }

    pub fn set_beam_length(&mut self, value: f64) -> CalcResult<()> {
        self.set_field(BeamField::BeamLength(value))
    }

    pub fn set_youngs_modulus(&mut self, value: f64) -> CalcResult<()> {
        self.set_field(BeamField::YoungsModulus(value))
    }

    pub fn set_moment_of_inertia(&mut self, value: f64) -> CalcResult<()> {
        self.set_field(BeamField::MomentOfInertia(value))
    }

    pub fn set_point_load(&mut self, value: f64) -> CalcResult<()> {
        self.set_field(BeamField::PointLoad(value))
    }

    pub fn set_load_position(&mut self, value: f64) -> CalcResult<()> {
        self.set_field(BeamField::LoadPosition(value))
    }

    pub fn set_left_support(&mut self, value: SupportType) -> CalcResult<()> {
        self.set_field(BeamField::LeftSupport(value))
    }

    pub fn set_right_support(&mut self, value: SupportType) -> CalcResult<()> {
        self.set_field(BeamField::RightSupport(value))
    }

    pub fn set_resolution(&mut self, value: usize) -> CalcResult<()> {
        self.set_field(BeamField::Resolution(value))
    }

    /// Change the failure mode. The profiles do not depend on it, so the
    /// stored result is kept as is.
    pub fn set_failure_mode(&mut self, value: FailureMode) {
        self.input.failure_mode = value;
    }

    pub fn input(&self) -> &BeamPointLoadInput {
        &self.input
    }

    pub fn result(&self) -> &BeamPointLoadResult {
        &self.result
    }

    pub fn positions(&self) -> &[f64] {
        &self.result.positions
    }

    pub fn shear_force(&self) -> &[f64] {
        &self.result.shear_force
    }

    pub fn bending_moment(&self) -> &[f64] {
        &self.result.bending_moment
    }

    pub fn slope(&self) -> &[f64] {
        &self.result.slope
    }

    pub fn deflection(&self) -> &[f64] {
        &self.result.deflection
    }

    /// See [`BeamPointLoadResult::max_abs_deflection`]
    pub fn max_abs_deflection(&self) -> Option<(f64, f64)> {
        self.result.max_abs_deflection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn unit_beam(load_position: f64, left: SupportType, right: SupportType) -> BeamPointLoad {
        let input = BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0)
            .with_load_position(load_position)
            .with_supports(left, right);
        BeamPointLoad::new(input).unwrap()
    }

    fn last(values: &[f64]) -> f64 {
        values[values.len() - 1]
    }

    fn all_nan(values: &[f64]) -> bool {
        values.iter().all(|v| v.is_nan())
    }

    const SUPPORTED_PAIRS: [(SupportType, SupportType); 6] = [
        (SupportType::Free, SupportType::Clamped),
        (SupportType::Support, SupportType::Clamped),
        (SupportType::Guided, SupportType::Clamped),
        (SupportType::Clamped, SupportType::Clamped),
        (SupportType::Support, SupportType::Support),
        (SupportType::Guided, SupportType::Support),
    ];

    // Classification
    #[test]
    fn test_every_pair_classifies_once() {
        let mut supported = 0;
        let mut reached = Vec::new();
        for left in SupportType::ALL {
            for right in SupportType::ALL {
                if let Some((case, _)) = classify(left, right) {
                    supported += 1;
                    reached.push(case);
                }
            }
        }
        // 4 asymmetric cases in both orientations + 2 symmetric cases
        assert_eq!(supported, 10);
        for case in CanonicalCase::ALL {
            assert!(reached.contains(&case), "{} is never selected", case);
        }
    }

    #[test]
    fn test_symmetric_cases_never_mirror() {
        assert_eq!(
            classify(SupportType::Clamped, SupportType::Clamped),
            Some((CanonicalCase::ClampedClamped, false))
        );
        assert_eq!(
            classify(SupportType::Support, SupportType::Support),
            Some((CanonicalCase::SupportSupport, false))
        );
    }

    #[test]
    fn test_support_type_parsing() {
        assert_eq!("Clamped".parse::<SupportType>(), Ok(SupportType::Clamped));
        let err = "Pinned".parse::<SupportType>().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(2.0, 1), vec![0.0]);
        assert_eq!(linspace(2.0, 3), vec![0.0, 1.0, 2.0]);
        let xs = linspace(1.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[49], 1.0);
    }

    // Reference values
    #[test]
    fn test_support_support() {
        let beam = unit_beam(0.4, SupportType::Support, SupportType::Support);
        assert!(approx_eq(last(beam.shear_force()), -0.4));
        assert!(approx_eq(last(beam.bending_moment()), 0.0));
        assert!(approx_eq(last(beam.slope()), (0.4 / 6.0) * (1.0 - 0.4_f64.powi(2))));
        assert!(approx_eq(last(beam.deflection()), 0.0));
        assert!(approx_eq(beam.deflection()[0], 0.0));
    }

    #[test]
    fn test_clamped_clamped() {
        let beam = unit_beam(0.4, SupportType::Clamped, SupportType::Clamped);
        assert!(approx_eq(beam.deflection()[0], 0.0));
        assert!(approx_eq(beam.slope()[0], 0.0));
        assert!(approx_eq(last(beam.deflection()), 0.0));
        assert!(approx_eq(last(beam.slope()), 0.0));
        let expected_moment = (-1.0 * 0.4_f64.powi(2) / 1.0) * (1.0 - 0.4);
        assert!(approx_eq(last(beam.bending_moment()), expected_moment));
        let expected_reaction = 0.4_f64.powi(2) * (3.0 - 2.0 * 0.4);
        assert!(approx_eq(last(beam.shear_force()), -expected_reaction));
    }

    #[test]
    fn test_free_clamped() {
        let beam = unit_beam(0.5, SupportType::Free, SupportType::Clamped);
        assert_eq!(last(beam.shear_force()), -1.0);
        assert_eq!(last(beam.bending_moment()), -0.5);
        assert!(approx_eq(last(beam.slope()), 0.0));
        assert!(approx_eq(last(beam.deflection()), 0.0));
    }

    #[test]
    fn test_clamped_free_load_at_clamp() {
        let beam = unit_beam(0.0, SupportType::Clamped, SupportType::Free);
        assert!(beam.result().mirrored);
        for (&slope, &deflection) in beam.slope().iter().zip(beam.deflection()) {
            assert!(approx_eq(slope, 0.0), "slope = {}", slope);
            assert!(approx_eq(deflection, 0.0), "deflection = {}", deflection);
        }
    }

    #[test]
    fn test_support_clamped() {
        let beam = unit_beam(0.4, SupportType::Support, SupportType::Clamped);
        let reaction_b = (0.4 / 2.0) * (3.0 - 0.4_f64.powi(2));
        assert!(approx_eq(last(beam.shear_force()), -reaction_b));
        let moment_b = (-0.4 / 2.0) * (1.0 - 0.4_f64.powi(2));
        assert!(approx_eq(last(beam.bending_moment()), moment_b));
        assert!(approx_eq(last(beam.slope()), 0.0));
        assert!(approx_eq(last(beam.deflection()), 0.0));
    }

    #[test]
    fn test_guided_clamped() {
        let beam = unit_beam(0.4, SupportType::Guided, SupportType::Clamped);
        assert_eq!(last(beam.shear_force()), -1.0);
        assert!(approx_eq(last(beam.bending_moment()), -(1.0 - 0.4_f64.powi(2)) / 2.0));
        assert!(approx_eq(last(beam.slope()), 0.0));
        assert!(approx_eq(last(beam.deflection()), 0.0));
        // Guided end does not rotate
        assert!(approx_eq(beam.slope()[0], 0.0));
    }

    #[test]
    fn test_guided_support() {
        let beam = unit_beam(0.4, SupportType::Guided, SupportType::Support);
        assert!(approx_eq(last(beam.shear_force()), -1.0));
        assert!(approx_eq(last(beam.bending_moment()), 0.0));
        assert!(approx_eq(last(beam.slope()), 0.5 * (1.0 - 0.4_f64.powi(2))));
        assert!(approx_eq(last(beam.deflection()), 0.0));
    }

    // Mirroring
    #[test]
    fn test_mirrored_pairs_reverse_profiles() {
        for (left, right) in SUPPORTED_PAIRS {
            if left == right {
                continue;
            }
            let original = unit_beam(0.3, left, right);
            let swapped = unit_beam(1.0 - 0.3, right, left);
            assert!(swapped.result().mirrored, "{} / {}", right, left);

            let check = |a: &[f64], b: &[f64], name: &str| {
                for (i, (x, y)) in a.iter().zip(b.iter().rev()).enumerate() {
                    assert!(approx_eq(*x, *y), "{}/{} {}[{}]: {} vs {}", left, right, name, i, x, y);
                }
            };
            check(original.shear_force(), swapped.shear_force(), "shear");
            check(original.bending_moment(), swapped.bending_moment(), "moment");
            check(original.slope(), swapped.slope(), "slope");
            check(original.deflection(), swapped.deflection(), "deflection");
        }
    }

    #[test]
    fn test_symmetric_pairs_mirror_physically() {
        // Swapping identical supports with the load reflected gives the
        // reflected beam: moment and deflection reverse, shear and slope reverse
        // with a sign change
        for support in [SupportType::Clamped, SupportType::Support] {
            let original = unit_beam(0.3, support, support);
            let reflected = unit_beam(1.0 - 0.3, support, support);
            let n = original.deflection().len();
            for i in 0..n {
                let j = n - 1 - i;
                assert!(approx_eq(original.deflection()[i], reflected.deflection()[j]));
                assert!(approx_eq(original.bending_moment()[i], reflected.bending_moment()[j]));
                assert!(approx_eq(original.slope()[i], -reflected.slope()[j]));
                assert!(approx_eq(original.shear_force()[i], -reflected.shear_force()[j]));
            }
        }
    }

    #[test]
    fn test_mirrored_tip_matches() {
        let left = unit_beam(0.4, SupportType::Free, SupportType::Clamped);
        let right = unit_beam(0.6, SupportType::Clamped, SupportType::Free);
        assert!(approx_eq(last(right.deflection()), left.deflection()[0]));
        assert!(approx_eq(last(right.slope()), left.slope()[0]));
    }

    // Failure handling
    #[test]
    fn test_unsupported_pair_silent() {
        let beam = unit_beam(0.5, SupportType::Free, SupportType::Free);
        let result = beam.result();
        assert!(!result.is_defined());
        assert_eq!(result.shear_force.len(), DEFAULT_RESOLUTION);
        assert!(all_nan(&result.shear_force));
        assert!(all_nan(&result.bending_moment));
        assert!(all_nan(&result.slope));
        assert!(all_nan(&result.deflection));
        assert!(result.reaction_left.is_nan());
        assert_eq!(beam.max_abs_deflection(), None);
    }

    #[test]
    fn test_unsupported_pair_strict() {
        let input = BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0)
            .with_supports(SupportType::Free, SupportType::Free)
            .with_failure_mode(FailureMode::Strict);
        let err = BeamPointLoad::new(input).unwrap_err();
        assert_eq!(err, CalcError::unsupported_configuration("Free", "Free"));
    }

    #[test]
    fn test_strict_error_still_resets_result() {
        let mut beam = unit_beam(0.4, SupportType::Support, SupportType::Support);
        beam.set_failure_mode(FailureMode::Strict);
        beam.set_right_support(SupportType::Guided).unwrap();
        let err = beam.set_left_support(SupportType::Free).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
        assert!(all_nan(beam.deflection()));
    }

    #[test]
    fn test_validation_failure() {
        let input = BeamPointLoadInput::new(-1.0, 1.0, 1.0, 1.0).with_failure_mode(FailureMode::Strict);
        let err = BeamPointLoad::new(input).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
        assert!(err.to_string().contains("beam_length"));

        let input = BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0).with_resolution(0);
        let beam = BeamPointLoad::new(input).unwrap();
        assert!(beam.deflection().is_empty());
        assert!(!beam.result().is_defined());
    }

    #[test]
    fn test_zero_length_is_numeric_domain_error() {
        let input = BeamPointLoadInput::new(0.0, 1.0, 1.0, 1.0).with_failure_mode(FailureMode::Strict);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_zero_rigidity_is_numeric_domain_error() {
        let input = BeamPointLoadInput::new(1.0, 0.0, 1.0, 1.0)
            .with_load_position(0.5)
            .with_failure_mode(FailureMode::Strict);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");

        let beam = BeamPointLoad::new(input.with_failure_mode(FailureMode::Silent)).unwrap();
        assert!(all_nan(beam.slope()));
    }

    #[test]
    fn test_single_sample() {
        let input = BeamPointLoadInput::new(2.0, 1.0, 1.0, 1.0)
            .with_load_position(1.0)
            .with_resolution(1);
        let beam = BeamPointLoad::new(input).unwrap();
        assert_eq!(beam.positions(), &[0.0]);
        assert_eq!(beam.deflection().len(), 1);
        assert!(approx_eq(beam.deflection()[0], 0.0));
    }

    #[test]
    fn test_single_sample_mirrored_reports_clamped_end() {
        let input = BeamPointLoadInput::new(2.0, 1.0, 1.0, 1.0)
            .with_load_position(1.0)
            .with_supports(SupportType::Clamped, SupportType::Free)
            .with_resolution(1);
        let beam = BeamPointLoad::new(input).unwrap();
        assert!(beam.result().mirrored);
        assert_eq!(beam.positions(), &[0.0]);
        assert!(approx_eq(beam.deflection()[0], 0.0), "δ(0) = {}", beam.deflection()[0]);
        assert!(approx_eq(beam.slope()[0], 0.0), "θ(0) = {}", beam.slope()[0]);
    }

    #[test]
    fn test_restrained_ends_hold() {
        let swapped = SUPPORTED_PAIRS.map(|(left, right)| (right, left));
        for (left, right) in SUPPORTED_PAIRS.into_iter().chain(swapped) {
            let beam = unit_beam(0.35, left, right);
            let ends = [(left, 0), (right, beam.positions().len() - 1)];
            for (support, i) in ends {
                if support.restrains_deflection() {
                    let d = beam.deflection()[i];
                    assert!(approx_eq(d, 0.0), "{}/{}: δ[{}] = {}", left, right, i, d);
                }
                if support.restrains_rotation() {
                    let s = beam.slope()[i];
                    assert!(approx_eq(s, 0.0), "{}/{}: θ[{}] = {}", left, right, i, s);
                }
            }
        }
    }

    // Lifecycle
    #[test]
    fn test_recompute_is_idempotent() {
        let mut beam = unit_beam(0.37, SupportType::Guided, SupportType::Clamped);
        beam.recompute().unwrap();
        let first = beam.result().clone();
        beam.recompute().unwrap();
        let second = beam.result();
        for (a, b) in first.deflection.iter().zip(&second.deflection) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        for (a, b) in first.shear_force.iter().zip(&second.shear_force) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(&first, second);
    }

    #[test]
    fn test_setters_recompute() {
        let mut beam = unit_beam(0.4, SupportType::Free, SupportType::Clamped);
        let tip = beam.deflection()[0];

        beam.set_left_support(SupportType::Clamped).unwrap();
        assert!(approx_eq(beam.deflection()[0], 0.0));

        beam.update(|input| {
            input.left_support = SupportType::Free;
            input.youngs_modulus = 10.0;
        })
        .unwrap();
        assert!(tip.abs() > beam.deflection()[0].abs());
        assert!(approx_eq(beam.deflection()[0], tip / 10.0));
    }

    #[test]
    fn test_zero_value_setter_still_recomputes() {
        let mut beam = unit_beam(0.4, SupportType::Support, SupportType::Support);
        beam.set_point_load(0.0).unwrap();
        assert!(beam.deflection().iter().all(|d| approx_eq(*d, 0.0)));
        assert!(approx_eq(beam.result().reaction_left, 0.0));
    }

    #[test]
    fn test_resolution_change_resizes_profiles() {
        let mut beam = unit_beam(0.4, SupportType::Support, SupportType::Support);
        beam.set_resolution(11).unwrap();
        assert_eq!(beam.positions().len(), 11);
        assert_eq!(beam.shear_force().len(), 11);
        assert!(approx_eq(beam.positions()[5], 0.5));
    }

    #[test]
    fn test_centered_load_symmetry() {
        let input = BeamPointLoadInput::new(1.0, 1.0, 1.0, 1.0)
            .with_load_position(0.5)
            .with_resolution(51);
        let beam = BeamPointLoad::new(input).unwrap();
        let d = beam.deflection();
        let n = d.len();
        for i in 0..n {
            assert!(approx_eq(d[i], d[n - 1 - i]), "d[{}] = {} vs {}", i, d[i], d[n - 1 - i]);
        }
        let (x, dmax) = beam.max_abs_deflection().unwrap();
        assert!(approx_eq(x, 0.5), "max at x = {}", x);
        assert!(approx_eq(dmax, -1.0 / 48.0), "δ_max = {}", dmax);
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{
            "beam_length": 2.0,
            "youngs_modulus": 1.0,
            "moment_of_inertia": 1.0,
            "point_load": 1.0
        }"#;
        let input: BeamPointLoadInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, BeamPointLoadInput::new(2.0, 1.0, 1.0, 1.0));
    }
}
