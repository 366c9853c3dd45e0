//! # Point-Load Beam Formulas
//!
//! Left-end boundary values for a thin Euler-Bernoulli beam carrying a single
//! transverse point load, for the six end-condition pairs with a closed-form
//! solution.
//!
//! Each case is written in its canonical orientation. Once the four boundary
//! values at the canonical left end are known, shear, moment, slope and
//! deflection anywhere on the span follow from the singularity-function
//! expressions in [`shear_at`], [`moment_at`], [`slope_at`] and
//! [`deflection_at`].
//!
//! ## Notation
//!
//! - `P` = Point load (positive downward)
//! - `L` = Beam length
//! - `a` = Load offset from the canonical left end
//! - `EI` = Flexural rigidity
//! - `R` = Shear reaction at the canonical left end
//! - `M` = Moment at the canonical left end
//! - `θ` = Slope at the canonical left end (radians)
//! - `δ` = Deflection at the canonical left end
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Reactions: Positive upward
//! - Moment: Positive sagging
//! - Deflection: Positive upward (a downward load gives negative deflection)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Gere & Goodno, Mechanics of Materials, Appendix H

use serde::{Deserialize, Serialize};

/// End-condition pair written in the orientation its formulas were derived for.
///
/// The first named end is the canonical left end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalCase {
    /// Free left end, clamped right end (cantilever)
    FreeClamped,
    /// Simply supported left end, clamped right end (propped cantilever)
    SupportClamped,
    /// Guided left end, clamped right end
    GuidedClamped,
    /// Both ends clamped
    ClampedClamped,
    /// Both ends simply supported
    SupportSupport,
    /// Guided left end, simply supported right end
    GuidedSupport,
}

impl CanonicalCase {
    /// All six cases
    pub const ALL: [CanonicalCase; 6] = [
        CanonicalCase::FreeClamped,
        CanonicalCase::SupportClamped,
        CanonicalCase::GuidedClamped,
        CanonicalCase::ClampedClamped,
        CanonicalCase::SupportSupport,
        CanonicalCase::GuidedSupport,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CanonicalCase::FreeClamped => "Free/Clamped",
            CanonicalCase::SupportClamped => "Support/Clamped",
            CanonicalCase::GuidedClamped => "Guided/Clamped",
            CanonicalCase::ClampedClamped => "Clamped/Clamped",
            CanonicalCase::SupportSupport => "Support/Support",
            CanonicalCase::GuidedSupport => "Guided/Support",
        }
    }

    /// Evaluate the left-end boundary values for this case.
    ///
    /// # Arguments
    /// * `p` - Point load (positive downward)
    /// * `l` - Beam length
    /// * `a` - Load offset from the canonical left end
    /// * `ei` - Flexural rigidity
    pub fn boundary_values(&self, p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
        match self {
            CanonicalCase::FreeClamped => free_clamped(p, l, a, ei),
            CanonicalCase::SupportClamped => support_clamped(p, l, a, ei),
            CanonicalCase::GuidedClamped => guided_clamped(p, l, a, ei),
            CanonicalCase::ClampedClamped => clamped_clamped(p, l, a),
            CanonicalCase::SupportSupport => support_support(p, l, a, ei),
            CanonicalCase::GuidedSupport => guided_support(p, l, a, ei),
        }
    }
}

impl std::fmt::Display for CanonicalCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shear, moment, slope and deflection at the canonical left end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryValues {
    pub reaction: f64,
    pub moment: f64,
    /// Radians
    pub slope: f64,
    pub deflection: f64,
}

impl BoundaryValues {
    /// All four values NaN
    pub const UNDEFINED: BoundaryValues = BoundaryValues {
        reaction: f64::NAN,
        moment: f64::NAN,
        slope: f64::NAN,
        deflection: f64::NAN,
    };

    /// `true` when all four values are finite
    pub fn is_finite(&self) -> bool {
        self.reaction.is_finite()
            && self.moment.is_finite()
            && self.slope.is_finite()
            && self.deflection.is_finite()
    }
}

// =============================================================================
// CANONICAL CASES
// =============================================================================

/// Cantilever, free at the left end
///
/// ```text
///          P
///          ↓
///    ──────┬──────────▐
///    ←─a──→           ▐
///    ←───────L───────→▐
/// ```
///
/// # Formulas
/// - R = 0, M = 0
/// - θ = P(L-a)² / (2EI)
/// - δ = -P(2L³ - 3L²a + a³) / (6EI)
#[inline]
pub fn free_clamped(p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: 0.0,
        moment: 0.0,
        slope: p * (l - a).powi(2) / (2.0 * ei),
        deflection: (-p / (6.0 * ei)) * (2.0 * l.powi(3) - 3.0 * l.powi(2) * a + a.powi(3)),
    }
}

/// Propped cantilever, simply supported at the left end
///
/// ```text
///          P
///          ↓
///    ──────┬──────────▐
///    △                ▐
///    ←───────L───────→▐
/// ```
///
/// # Formulas
/// - R = P(L-a)²(2L+a) / (2L³)
/// - M = 0
/// - θ = -Pa(L-a)² / (4EIL)
/// - δ = 0
#[inline]
pub fn support_clamped(p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: (p / (2.0 * l.powi(3))) * (l - a).powi(2) * (2.0 * l + a),
        moment: 0.0,
        slope: ((-p * a) / (4.0 * ei * l)) * (l - a).powi(2),
        deflection: 0.0,
    }
}

/// Guided (sliding, rotation fixed) left end, clamped right end
///
/// # Formulas
/// - R = 0
/// - M = P(L-a)² / (2L)
/// - θ = 0
/// - δ = -P(L-a)²(L+2a) / (12EI)
#[inline]
pub fn guided_clamped(p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: 0.0,
        moment: p * (l - a).powi(2) / (2.0 * l),
        slope: 0.0,
        deflection: (-p / (12.0 * ei)) * (l - a).powi(2) * (l + 2.0 * a),
    }
}

/// Fixed-fixed beam
///
/// ```text
///    ▌     P
///    ▌     ↓
///    ▌─────┬──────────▐
///    ▌←─a─→           ▐
///    ▌←──────L───────→▐
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1d)
/// - R = P(L-a)²(L+2a) / L³
/// - M = -Pa(L-a)² / L²
/// - θ = 0, δ = 0
#[inline]
pub fn clamped_clamped(p: f64, l: f64, a: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: (p / l.powi(3)) * (l - a).powi(2) * (l + 2.0 * a),
        moment: ((-p * a) / l.powi(2)) * (l - a).powi(2),
        slope: 0.0,
        deflection: 0.0,
    }
}

/// Simply supported beam
///
/// ```text
///          P
///          ↓
///    ──────┬───────────
///    △                △
///    ←───────L───────→
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R = P(L-a) / L
/// - M = 0
/// - θ = -Pa(2L-a)(L-a) / (6EIL)
/// - δ = 0
#[inline]
pub fn support_support(p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: (p / l) * (l - a),
        moment: 0.0,
        slope: ((-p * a) / (6.0 * ei * l)) * (2.0 * l - a) * (l - a),
        deflection: 0.0,
    }
}

/// Guided left end, simply supported right end
///
/// # Formulas
/// - R = 0
/// - M = P(L-a)
/// - θ = 0
/// - δ = -P(L-a)(2L² + 2aL - a²) / (6EI)
#[inline]
pub fn guided_support(p: f64, l: f64, a: f64, ei: f64) -> BoundaryValues {
    BoundaryValues {
        reaction: 0.0,
        moment: p * (l - a),
        slope: 0.0,
        deflection: ((-p * (l - a)) / (6.0 * ei)) * (2.0 * l.powi(2) + 2.0 * a * l - a.powi(2)),
    }
}

// =============================================================================
// FIELD EQUATIONS
// Singularity-function form, valid for every case once the boundary values are known
// =============================================================================

/// Unit step at the load: 0 for x < a, 1 for x ≥ a
#[inline]
pub fn step(x: f64, a: f64) -> f64 {
    if x < a {
        0.0
    } else {
        1.0
    }
}

/// V(x) = R - P·H(x-a)
#[inline]
pub fn shear_at(bv: &BoundaryValues, p: f64, a: f64, x: f64) -> f64 {
    bv.reaction - p * step(x, a)
}

/// M(x) = M₀ + R·x - P·H(x-a)·(x-a)
#[inline]
pub fn moment_at(bv: &BoundaryValues, p: f64, a: f64, x: f64) -> f64 {
    bv.moment + bv.reaction * x - p * step(x, a) * (x - a)
}

/// θ(x) = θ₀ + M₀x/EI + Rx²/(2EI) - P(H·(x-a))²/(2EI)
#[inline]
pub fn slope_at(bv: &BoundaryValues, p: f64, a: f64, ei: f64, x: f64) -> f64 {
    let past = step(x, a) * (x - a);
    bv.slope + bv.moment * x / ei + bv.reaction * x.powi(2) / (2.0 * ei)
        - p * past.powi(2) / (2.0 * ei)
}

/// δ(x) = δ₀ + θ₀x + M₀x²/(2EI) + Rx³/(6EI) - P(H·(x-a))³/(6EI)
#[inline]
pub fn deflection_at(bv: &BoundaryValues, p: f64, a: f64, ei: f64, x: f64) -> f64 {
    let past = step(x, a) * (x - a);
    bv.deflection
        + bv.slope * x
        + bv.moment * x.powi(2) / (2.0 * ei)
        + bv.reaction * x.powi(3) / (6.0 * ei)
        - p * past.powi(3) / (6.0 * ei)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Displacement and rotation at the far end (x = L) for a case
    fn far_end(case: CanonicalCase, p: f64, l: f64, a: f64, ei: f64) -> (f64, f64, f64, f64) {
        let bv = case.boundary_values(p, l, a, ei);
        (
            shear_at(&bv, p, a, l),
            moment_at(&bv, p, a, l),
            slope_at(&bv, p, a, ei, l),
            deflection_at(&bv, p, a, ei, l),
        )
    }

    #[test]
    fn test_step_is_inclusive_at_load() {
        assert_eq!(step(0.3, 0.4), 0.0);
        assert_eq!(step(0.4, 0.4), 1.0);
        assert_eq!(step(0.9, 0.4), 1.0);
    }

    #[test]
    fn test_clamped_far_end_is_fixed() {
        // Every case with a clamp on the right must give zero slope and deflection there
        for case in [
            CanonicalCase::FreeClamped,
            CanonicalCase::SupportClamped,
            CanonicalCase::GuidedClamped,
            CanonicalCase::ClampedClamped,
        ] {
            let (_, _, slope, deflection) = far_end(case, 3.0, 2.0, 0.7, 5.0);
            assert!(approx_eq(slope, 0.0), "{}: slope(L) = {}", case, slope);
            assert!(approx_eq(deflection, 0.0), "{}: deflection(L) = {}", case, deflection);
        }
    }

    #[test]
    fn test_supported_far_end_has_no_moment_or_deflection() {
        for case in [CanonicalCase::SupportSupport, CanonicalCase::GuidedSupport] {
            let (_, moment, _, deflection) = far_end(case, 3.0, 2.0, 0.7, 5.0);
            assert!(approx_eq(moment, 0.0), "{}: M(L) = {}", case, moment);
            assert!(approx_eq(deflection, 0.0), "{}: deflection(L) = {}", case, deflection);
        }
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        // Load at the free end: δ = -PL³/(3EI)
        let bv = free_clamped(1.0, 2.0, 0.0, 4.0);
        assert!(approx_eq(bv.deflection, -8.0 / 12.0), "δ = {}", bv.deflection);
        // θ = PL²/(2EI)
        assert!(approx_eq(bv.slope, 0.5));
    }

    #[test]
    fn test_simply_supported_midspan_deflection() {
        // Centered load: δ_max = -PL³/(48EI)
        let (p, l, ei) = (1000.0, 4.0, 2.0e4);
        let bv = support_support(p, l, 2.0, ei);
        let mid = deflection_at(&bv, p, 2.0, ei, 2.0);
        assert!(approx_eq(mid, -p * l.powi(3) / (48.0 * ei)), "δ = {}", mid);
    }

    #[test]
    fn test_fixed_fixed_end_moments() {
        // Centered load: M_ends = -PL/8
        let bv = clamped_clamped(8.0, 2.0, 1.0);
        assert!(approx_eq(bv.moment, -2.0));
        assert!(approx_eq(bv.reaction, 4.0));
    }

    #[test]
    fn test_undefined_boundary_values() {
        assert!(!BoundaryValues::UNDEFINED.is_finite());
        assert!(support_support(1.0, 1.0, 0.5, 1.0).is_finite());
        assert!(!support_support(1.0, 0.0, 0.0, 1.0).is_finite());
    }
}
