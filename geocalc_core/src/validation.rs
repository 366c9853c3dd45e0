//! # Parameter Validation
//!
//! Declarative range and option checks run before every calculation.
//!
//! A calculation declares a table of [`FieldRule`]s, collects its runtime
//! parameters as `(name, ParamValue)` pairs and calls [`validate`]. The
//! returned [`ValidationReport`] lists every failing field, not just the first.
//! Bounds are inclusive: a value equal to a bound passes.
//!
//! ## Example
//!
//! ```rust
//! use geocalc_core::validation::{validate, FieldRule, ParamValue};
//!
//! let rules = vec![
//!     FieldRule::float("liquid_limit", Some(0.0), Some(100.0)),
//!     FieldRule::options("drainage", &["single", "double"]),
//! ];
//!
//! let report = validate(
//!     &[
//!         ("liquid_limit", ParamValue::Float(120.0)),
//!         ("drainage", ParamValue::from("double")),
//!     ],
//!     &rules,
//! );
//! assert!(!report.ok);
//! assert!(report.error_message.contains("liquid_limit"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Runtime value of one calculation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Float(f64),
    Integer(i64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Integer(v) => write!(f, "{}", v),
            ParamValue::Text(v) => write!(f, "\"{}\"", v),
        }
    }
}

/// Expected type and constraint for a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Floating point number with optional inclusive bounds
    Float { min: Option<f64>, max: Option<f64> },
    /// Integer with optional inclusive bounds
    Integer { min: Option<i64>, max: Option<i64> },
    /// String restricted to a fixed set of options
    Options(&'static [&'static str]),
}

/// Validation rule for one named parameter
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: RuleKind,
}

impl FieldRule {
    /// Float rule
    pub fn float(name: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        FieldRule {
            name,
            kind: RuleKind::Float { min, max },
        }
    }

    /// Float rule without bounds
    pub fn any_float(name: &'static str) -> Self {
        Self::float(name, None, None)
    }

    /// Integer rule
    pub fn integer(name: &'static str, min: Option<i64>, max: Option<i64>) -> Self {
        FieldRule {
            name,
            kind: RuleKind::Integer { min, max },
        }
    }

    /// String option rule
    pub fn options(name: &'static str, options: &'static [&'static str]) -> Self {
        FieldRule {
            name,
            kind: RuleKind::Options(options),
        }
    }

    /// Check a single value against this rule.
    pub fn check(&self, value: &ParamValue) -> Result<(), String> {
        match (&self.kind, value) {
            (RuleKind::Float { min, max }, ParamValue::Float(v)) => {
                if v.is_nan() {
                    return Err(format!("{} ({}) is not a floating point number", self.name, v));
                }
                check_bounds(self.name, *v, *min, *max)
            }
            (RuleKind::Integer { min, max }, ParamValue::Integer(v)) => {
                check_bounds(self.name, *v, *min, *max)
            }
            (RuleKind::Options(options), ParamValue::Text(v)) => {
                if options.contains(&v.as_str()) {
                    Ok(())
                } else {
                    Err(format!(
                        "{} (\"{}\") not included in list of allowable strings ({})",
                        self.name,
                        v,
                        options.join(", ")
                    ))
                }
            }
            (kind, value) => Err(format!(
                "{} ({}) is not {}",
                self.name,
                value,
                kind.expected()
            )),
        }
    }
}

impl RuleKind {
    fn expected(&self) -> &'static str {
        match self {
            RuleKind::Float { .. } => "a floating point number",
            RuleKind::Integer { .. } => "an integer number",
            RuleKind::Options(_) => "a string",
        }
    }
}

fn check_bounds<T: PartialOrd + fmt::Display>(
    name: &str,
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), String> {
    if let Some(min) = min {
        if value < min {
            return Err(format!("{} ({}) cannot be smaller than {}", name, value, min));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(format!("{} ({}) cannot be greater than {}", name, value, max));
        }
    }
    Ok(())
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,
    /// `"; "`-joined messages for every failing field, empty when `ok`
    pub error_message: String,
}

impl ValidationReport {
    /// Convert a failed report into [`CalcError::Validation`].
    pub fn into_result(self) -> CalcResult<()> {
        if self.ok {
            Ok(())
        } else {
            Err(CalcError::validation(self.error_message))
        }
    }
}

/// Check every rule against the supplied parameters.
///
/// A rule with no matching parameter fails as missing. Parameters without a
/// rule are ignored.
pub fn validate(params: &[(&str, ParamValue)], rules: &[FieldRule]) -> ValidationReport {
    let errors: Vec<String> = rules
        .iter()
        .filter_map(|rule| {
            match params.iter().find(|(name, _)| *name == rule.name) {
                Some((_, value)) => rule.check(value).err(),
                None => Some(format!("{} is missing", rule.name)),
            }
        })
        .collect();

    ValidationReport {
        ok: errors.is_empty(),
        error_message: errors.join("; "),
    }
}

/// [`validate`] followed by [`ValidationReport::into_result`].
pub fn check(params: &[(&str, ParamValue)], rules: &[FieldRule]) -> CalcResult<()> {
    validate(params, rules).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<FieldRule> {
        vec![
            FieldRule::float("beam_length", Some(0.0), None),
            FieldRule::integer("resolution", Some(1), None),
            FieldRule::options("support", &["Free", "Support"]),
        ]
    }

    #[test]
    fn test_valid_parameters_pass() {
        let report = validate(
            &[
                ("beam_length", ParamValue::Float(2.0)),
                ("resolution", ParamValue::Integer(50)),
                ("support", ParamValue::from("Free")),
            ],
            &rules(),
        );
        assert!(report.ok);
        assert!(report.error_message.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rule = FieldRule::float("x", Some(0.0), Some(1.0));
        assert!(rule.check(&ParamValue::Float(0.0)).is_ok());
        assert!(rule.check(&ParamValue::Float(1.0)).is_ok());
        assert!(rule.check(&ParamValue::Float(1.0 + 1e-12)).is_err());
    }

    #[test]
    fn test_all_failures_reported() {
        let report = validate(
            &[
                ("beam_length", ParamValue::Float(-1.0)),
                ("resolution", ParamValue::Integer(0)),
                ("support", ParamValue::from("Hinged")),
            ],
            &rules(),
        );
        assert!(!report.ok);
        assert_eq!(report.error_message.matches("; ").count(), 2);
        assert!(report.error_message.contains("cannot be smaller than 0"));
        assert!(report.error_message.contains("Hinged"));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let rule = FieldRule::integer("resolution", Some(1), None);
        let err = rule.check(&ParamValue::Float(50.0)).unwrap_err();
        assert!(err.contains("is not an integer number"), "{}", err);
    }

    #[test]
    fn test_nan_fails_float_rule() {
        assert!(FieldRule::any_float("p").check(&ParamValue::Float(f64::NAN)).is_err());
        assert!(FieldRule::any_float("p").check(&ParamValue::Float(f64::INFINITY)).is_ok());
    }

    #[test]
    fn test_missing_parameter_fails() {
        let report = validate(&[("beam_length", ParamValue::Float(1.0))], &rules());
        assert!(!report.ok);
        assert!(report.error_message.contains("resolution is missing"));
    }

    #[test]
    fn test_into_result() {
        let err = check(&[], &[FieldRule::any_float("p")]).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
    }
}
