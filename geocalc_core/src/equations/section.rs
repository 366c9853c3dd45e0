//! # Cross-Section Property Formulas
//!
//! Geometric properties of common plane shapes, used to obtain the moment of
//! inertia that feeds the beam calculation.
//!
//! ## Notation
//!
//! - `A` = Area
//! - `x_c`, `y_c` = Centroid measured from the reference axes
//! - `I_xc`, `I_yc` = Second moments of area about the centroidal axes
//! - `I_x`, `I_y` = Second moments of area about the reference axes
//! - `J` = Polar moment of area about the centroid
//! - `r` = Radius of gyration (√(I/A))
//! - `I_xc_yc`, `I_xy` = Products of inertia
//!
//! ## Reference Axes
//!
//! The reference x-axis runs along the bottom edge (or is tangent to the
//! bottom of a round shape) and the reference y-axis along the left edge (or
//! tangent to the left side). Properties a shape has no closed form for are
//! NaN.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - Gere & Goodno, Mechanics of Materials, Appendix E

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{self, FieldRule, ParamValue};

/// Plane shape with its defining dimensions (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum SectionShape {
    /// ```text
    ///     ┌─────────┐
    ///   h │         │
    ///     └─────────┘
    ///          b
    /// ```
    Rectangle { base_width: f64, height: f64 },

    Circle { radius: f64 },

    /// Annulus; `inner_radius` must not exceed `outer_radius`
    Ring { outer_radius: f64, inner_radius: f64 },

    /// Right angle at the bottom right
    ///
    /// ```text
    ///           ╱│
    ///         ╱  │ h
    ///       ╱____│
    ///         b
    /// ```
    RightTriangleRight { base_width: f64, height: f64 },

    /// Right angle at the bottom left
    ///
    /// ```text
    ///     │╲
    ///   h │  ╲
    ///     │____╲
    ///       b
    /// ```
    RightTriangleLeft { base_width: f64, height: f64 },

    /// Half disc resting on its diameter
    SemiCircle { radius: f64 },

    /// Isosceles trapezoid resting on its longest base
    Trapezoid {
        longest_base: f64,
        shortest_base: f64,
        height: f64,
    },
}

impl SectionShape {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            SectionShape::Rectangle { .. } => "Rectangle",
            SectionShape::Circle { .. } => "Circle",
            SectionShape::Ring { .. } => "Ring",
            SectionShape::RightTriangleRight { .. } => "Right triangle (right angle at right)",
            SectionShape::RightTriangleLeft { .. } => "Right triangle (right angle at left)",
            SectionShape::SemiCircle { .. } => "Semicircle",
            SectionShape::Trapezoid { .. } => "Trapezoid",
        }
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SectionShape::Rectangle { base_width, height }
            | SectionShape::RightTriangleRight { base_width, height }
            | SectionShape::RightTriangleLeft { base_width, height } => {
                vec![("base_width", base_width), ("height", height)]
            }
            SectionShape::Circle { radius } | SectionShape::SemiCircle { radius } => {
                vec![("radius", radius)]
            }
            SectionShape::Ring {
                outer_radius,
                inner_radius,
            } => vec![("outer_radius", outer_radius), ("inner_radius", inner_radius)],
            SectionShape::Trapezoid {
                longest_base,
                shortest_base,
                height,
            } => vec![
                ("longest_base", longest_base),
                ("shortest_base", shortest_base),
                ("height", height),
            ],
        }
    }

    /// Every dimension must be a non-negative number, and the nested
    /// dimension of a ring or trapezoid must not exceed its outer one.
    pub fn validate(&self) -> CalcResult<()> {
        let dimensions = self.dimensions();
        let rules: Vec<FieldRule> = dimensions
            .iter()
            .map(|(name, _)| FieldRule::float(*name, Some(0.0), None))
            .collect();
        let params: Vec<(&str, ParamValue)> = dimensions
            .iter()
            .map(|(name, value)| (*name, ParamValue::Float(*value)))
            .collect();
        validation::check(&params, &rules)?;

        match *self {
            SectionShape::Ring {
                outer_radius,
                inner_radius,
            } if inner_radius > outer_radius => Err(CalcError::invalid_input(
                "inner_radius",
                inner_radius.to_string(),
                format!("cannot be greater than outer_radius ({})", outer_radius),
            )),
            SectionShape::Trapezoid {
                longest_base,
                shortest_base,
                ..
            } if shortest_base > longest_base => Err(CalcError::invalid_input(
                "shortest_base",
                shortest_base.to_string(),
                format!("cannot be greater than longest_base ({})", longest_base),
            )),
            _ => Ok(()),
        }
    }
}

/// Geometric properties of a plane shape (m-based units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// m²
    pub area: f64,
    pub centroid_x: f64,
    pub centroid_y: f64,
    /// m⁴
    pub i_xc: f64,
    pub i_yc: f64,
    pub i_x: f64,
    pub i_y: f64,
    /// Polar moment about the centroid (m⁴)
    pub j: f64,
    /// m
    pub r_xc: f64,
    pub r_yc: f64,
    pub r_x: f64,
    pub r_y: f64,
    pub r_p: f64,
    /// m⁴
    pub i_xc_yc: f64,
    pub i_xy: f64,
}

impl SectionProperties {
    /// All properties NaN
    pub const UNDEFINED: SectionProperties = SectionProperties {
        area: f64::NAN,
        centroid_x: f64::NAN,
        centroid_y: f64::NAN,
        i_xc: f64::NAN,
        i_yc: f64::NAN,
        i_x: f64::NAN,
        i_y: f64::NAN,
        j: f64::NAN,
        r_xc: f64::NAN,
        r_yc: f64::NAN,
        r_x: f64::NAN,
        r_y: f64::NAN,
        r_p: f64::NAN,
        i_xc_yc: f64::NAN,
        i_xy: f64::NAN,
    };
}

impl crate::errors::Undefined for SectionProperties {
    fn undefined() -> Self {
        SectionProperties::UNDEFINED
    }
}

/// Calculate the geometric properties of `shape`.
///
/// # Example
/// ```rust
/// use geocalc_core::equations::section::{section_properties, SectionShape};
///
/// let props = section_properties(&SectionShape::Rectangle { base_width: 0.2, height: 0.4 }).unwrap();
/// assert!((props.i_xc - 0.2 * 0.4_f64.powi(3) / 12.0).abs() < 1e-12);
/// ```
pub fn section_properties(shape: &SectionShape) -> CalcResult<SectionProperties> {
    shape.validate()?;

    let props = match *shape {
        SectionShape::Rectangle { base_width, height } => rectangle(base_width, height),
        SectionShape::Circle { radius } => circle(radius),
        SectionShape::Ring {
            outer_radius,
            inner_radius,
        } => ring(outer_radius, inner_radius),
        SectionShape::RightTriangleRight { base_width, height } => {
            right_triangle_right(base_width, height)
        }
        SectionShape::RightTriangleLeft { base_width, height } => {
            right_triangle_left(base_width, height)
        }
        SectionShape::SemiCircle { radius } => semicircle(radius),
        SectionShape::Trapezoid {
            longest_base,
            shortest_base,
            height,
        } => trapezoid(longest_base, shortest_base, height),
    };
    Ok(props)
}

// =============================================================================
// SHAPE FORMULAS
// =============================================================================

fn rectangle(b: f64, h: f64) -> SectionProperties {
    SectionProperties {
        area: b * h,
        centroid_x: b / 2.0,
        centroid_y: h / 2.0,
        i_xc: b * h.powi(3) / 12.0,
        i_yc: h * b.powi(3) / 12.0,
        i_x: b * h.powi(3) / 3.0,
        i_y: h * b.powi(3) / 3.0,
        j: b * h * (b.powi(2) + h.powi(2)) / 12.0,
        r_xc: (h.powi(2) / 12.0).sqrt(),
        r_yc: (b.powi(2) / 12.0).sqrt(),
        r_x: (h.powi(2) / 3.0).sqrt(),
        r_y: (b.powi(2) / 3.0).sqrt(),
        r_p: ((b.powi(2) + h.powi(2)) / 12.0).sqrt(),
        i_xc_yc: 0.0,
        i_xy: b.powi(2) * h.powi(2) / 4.0,
    }
}

fn circle(r: f64) -> SectionProperties {
    SectionProperties {
        area: PI * r.powi(2),
        centroid_x: r,
        centroid_y: r,
        i_xc: 0.25 * PI * r.powi(4),
        i_yc: 0.25 * PI * r.powi(4),
        i_x: 1.25 * PI * r.powi(4),
        i_y: 1.25 * PI * r.powi(4),
        j: 0.5 * PI * r.powi(4),
        r_xc: 0.5 * r,
        r_yc: 0.5 * r,
        r_x: (1.25 * r.powi(2)).sqrt(),
        r_y: (1.25 * r.powi(2)).sqrt(),
        r_p: (0.5 * r.powi(2)).sqrt(),
        i_xc_yc: 0.0,
        i_xy: PI * r.powi(4),
    }
}

fn ring(ro: f64, ri: f64) -> SectionProperties {
    // Tangent-axis moments: 5πro⁴/4 - πro²ri² - πri⁴/4
    let i_tangent = 1.25 * PI * ro.powi(4) - PI * ro.powi(2) * ri.powi(2) - 0.25 * PI * ri.powi(4);
    SectionProperties {
        area: PI * (ro.powi(2) - ri.powi(2)),
        centroid_x: ro,
        centroid_y: ro,
        i_xc: 0.25 * PI * (ro.powi(4) - ri.powi(4)),
        i_yc: 0.25 * PI * (ro.powi(4) - ri.powi(4)),
        i_x: i_tangent,
        i_y: i_tangent,
        j: 0.5 * PI * (ro.powi(4) - ri.powi(4)),
        r_xc: (0.25 * (ro.powi(2) + ri.powi(2))).sqrt(),
        r_yc: (0.25 * (ro.powi(2) + ri.powi(2))).sqrt(),
        r_x: (0.25 * (5.0 * ro.powi(2) + ri.powi(2))).sqrt(),
        r_y: (0.25 * (5.0 * ro.powi(2) + ri.powi(2))).sqrt(),
        r_p: (0.5 * (ro.powi(2) + ri.powi(2))).sqrt(),
        i_xc_yc: 0.0,
        i_xy: PI * ro.powi(2) * (ro.powi(2) - ri.powi(2)),
    }
}

fn right_triangle_right(b: f64, h: f64) -> SectionProperties {
    SectionProperties {
        area: 0.5 * b * h,
        centroid_x: 2.0 * b / 3.0,
        centroid_y: h / 3.0,
        i_xc: b * h.powi(3) / 36.0,
        i_yc: h * b.powi(3) / 36.0,
        i_x: b * h.powi(3) / 12.0,
        i_y: h * b.powi(3) / 4.0,
        j: f64::NAN,
        r_xc: (h.powi(2) / 18.0).sqrt(),
        r_yc: (b.powi(2) / 18.0).sqrt(),
        r_x: (h.powi(2) / 6.0).sqrt(),
        r_y: (b.powi(2) / 2.0).sqrt(),
        r_p: f64::NAN,
        i_xc_yc: b.powi(2) * h.powi(2) / 72.0,
        i_xy: b.powi(2) * h.powi(2) / 8.0,
    }
}

fn right_triangle_left(b: f64, h: f64) -> SectionProperties {
    SectionProperties {
        area: 0.5 * b * h,
        centroid_x: b / 3.0,
        centroid_y: h / 3.0,
        i_xc: b * h.powi(3) / 36.0,
        i_yc: h * b.powi(3) / 36.0,
        i_x: b * h.powi(3) / 12.0,
        i_y: h * b.powi(3) / 12.0,
        j: f64::NAN,
        r_xc: (h.powi(2) / 18.0).sqrt(),
        r_yc: (b.powi(2) / 18.0).sqrt(),
        r_x: (h.powi(2) / 6.0).sqrt(),
        r_y: (b.powi(2) / 6.0).sqrt(),
        r_p: f64::NAN,
        i_xc_yc: -b.powi(2) * h.powi(2) / 72.0,
        i_xy: b.powi(2) * h.powi(2) / 24.0,
    }
}

fn semicircle(r: f64) -> SectionProperties {
    let k = 9.0 * PI.powi(2) - 64.0;
    SectionProperties {
        area: 0.5 * PI * r.powi(2),
        centroid_x: r,
        centroid_y: 4.0 * r / (3.0 * PI),
        i_xc: r.powi(4) * k / (72.0 * PI),
        i_yc: 0.125 * PI * r.powi(4),
        i_x: 0.125 * PI * r.powi(4),
        i_y: 0.625 * PI * r.powi(4),
        j: f64::NAN,
        r_xc: (r.powi(2) * k / (36.0 * PI.powi(2))).sqrt(),
        r_yc: 0.5 * r,
        r_x: 0.5 * r,
        r_y: (1.25 * r.powi(2)).sqrt(),
        r_p: f64::NAN,
        i_xc_yc: 0.0,
        i_xy: 2.0 * r.powi(4) / 3.0,
    }
}

/// Only the properties about horizontal axes are defined for a trapezoid.
fn trapezoid(b_long: f64, b_short: f64, h: f64) -> SectionProperties {
    let sum = b_long + b_short;
    let spread = b_short.powi(2) + 4.0 * b_short * b_long + b_long.powi(2);
    SectionProperties {
        area: 0.5 * h * sum,
        centroid_y: h * (2.0 * b_short + b_long) / (3.0 * sum),
        i_xc: h.powi(3) * spread / (36.0 * sum),
        i_x: h.powi(3) * (3.0 * b_short + b_long) / 12.0,
        r_xc: (h.powi(2) * spread / (18.0 * sum)).sqrt(),
        r_x: (h.powi(2) * (3.0 * b_short + b_long) / (6.0 * sum)).sqrt(),
        ..SectionProperties::UNDEFINED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn props(shape: SectionShape) -> SectionProperties {
        section_properties(&shape).unwrap()
    }

    #[test]
    fn test_rectangle() {
        let p = props(SectionShape::Rectangle {
            base_width: 1.0,
            height: 2.0,
        });
        assert!(approx_eq(p.area, 2.0));
        assert!(approx_eq(p.centroid_y, 1.0));
        assert!(approx_eq(p.i_xc, 8.0 / 12.0));
        assert!(approx_eq(p.j, 10.0 / 12.0));
        assert!(approx_eq(p.i_xc_yc, 0.0));
        // Parallel axis theorem
        assert!(approx_eq(p.i_x, p.i_xc + p.area * p.centroid_y.powi(2)));
        assert!(approx_eq(p.r_xc, (p.i_xc / p.area).sqrt()));
    }

    #[test]
    fn test_circle() {
        let p = props(SectionShape::Circle { radius: 1.0 });
        assert!(approx_eq(p.area, PI));
        assert!(approx_eq(p.j, PI / 2.0));
        assert!(approx_eq(p.j, p.i_xc + p.i_yc));
        assert!(approx_eq(p.i_x, p.i_xc + p.area));
        assert!(approx_eq(p.r_xc, 0.5));
    }

    #[test]
    fn test_ring_is_circle_minus_hole() {
        let outer = props(SectionShape::Circle { radius: 1.0 });
        let hole = props(SectionShape::Circle { radius: 0.5 });
        let ring = props(SectionShape::Ring {
            outer_radius: 1.0,
            inner_radius: 0.5,
        });
        assert!(approx_eq(ring.area, outer.area - hole.area));
        assert!(approx_eq(ring.i_xc, outer.i_xc - hole.i_xc));
        assert!(approx_eq(ring.j, outer.j - hole.j));
        assert!(approx_eq(ring.i_x, ring.i_xc + ring.area));
        assert!(approx_eq(ring.r_p, (ring.j / ring.area).sqrt()));
    }

    #[test]
    fn test_ring_with_oversized_hole_fails() {
        let err = section_properties(&SectionShape::Ring {
            outer_radius: 0.5,
            inner_radius: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_right_triangles() {
        let right = props(SectionShape::RightTriangleRight {
            base_width: 3.0,
            height: 6.0,
        });
        let left = props(SectionShape::RightTriangleLeft {
            base_width: 3.0,
            height: 6.0,
        });
        assert!(approx_eq(right.area, 9.0));
        assert!(approx_eq(right.centroid_x, 2.0));
        assert!(approx_eq(left.centroid_x, 1.0));
        assert!(approx_eq(right.i_xc, left.i_xc));
        assert!(approx_eq(right.i_xc_yc, -left.i_xc_yc));
        assert!(approx_eq(right.i_y, right.i_yc + right.area * right.centroid_x.powi(2)));
        assert!(approx_eq(left.i_y, left.i_yc + left.area * left.centroid_x.powi(2)));
        assert!(right.j.is_nan());
    }

    #[test]
    fn test_semicircle() {
        let p = props(SectionShape::SemiCircle { radius: 1.0 });
        assert!(approx_eq(p.centroid_y, 4.0 / (3.0 * PI)));
        assert!(approx_eq(p.i_x, p.i_xc + p.area * p.centroid_y.powi(2)));
        assert!(approx_eq(p.i_yc, p.i_x));
    }

    #[test]
    fn test_trapezoid_with_equal_bases_is_rectangle() {
        let trap = props(SectionShape::Trapezoid {
            longest_base: 2.0,
            shortest_base: 2.0,
            height: 3.0,
        });
        let rect = props(SectionShape::Rectangle {
            base_width: 2.0,
            height: 3.0,
        });
        assert!(approx_eq(trap.area, rect.area));
        assert!(approx_eq(trap.centroid_y, rect.centroid_y));
        assert!(approx_eq(trap.i_xc, rect.i_xc));
        assert!(approx_eq(trap.i_x, rect.i_x));
        assert!(trap.i_yc.is_nan());
    }

    #[test]
    fn test_trapezoid_bases_order() {
        let err = section_properties(&SectionShape::Trapezoid {
            longest_base: 1.0,
            shortest_base: 2.0,
            height: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_dimension_fails_validation() {
        let err = section_properties(&SectionShape::Circle { radius: -1.0 }).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_shape_json() {
        let shape: SectionShape =
            serde_json::from_str(r#"{"shape":"Rectangle","base_width":0.3,"height":0.5}"#).unwrap();
        assert_eq!(
            shape,
            SectionShape::Rectangle {
                base_width: 0.3,
                height: 0.5
            }
        );
    }
}
