//! Symbolic and concrete gate parameters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{GateError, GateResult};

/// A gate parameter: either a concrete value or a named placeholder.
///
/// Placeholders stand in for values supplied later, typically once per sweep
/// point of a parameter scan, and are collapsed by a [`ParamResolver`]. A
/// symbolic parameter never participates in arithmetic directly; the
/// `try_*` helpers fail with [`GateError::NotConcrete`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Param {
    /// A concrete numeric value.
    Value(f64),
    /// A named placeholder, resolved later via a [`ParamResolver`].
    Symbol(String),
}

impl Param {
    /// Create a concrete parameter.
    pub fn value(value: f64) -> Self {
        Param::Value(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        Param::Symbol(name.into())
    }

    /// Check if this parameter is an unresolved placeholder.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Param::Symbol(_))
    }

    /// The concrete value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Param::Value(v) => Some(*v),
            Param::Symbol(_) => None,
        }
    }

    /// The concrete value, or [`GateError::NotConcrete`] for placeholders.
    pub fn try_f64(&self) -> GateResult<f64> {
        match self {
            Param::Value(v) => Ok(*v),
            Param::Symbol(name) => Err(GateError::NotConcrete {
                symbol: name.clone(),
            }),
        }
    }

    /// Negated parameter. Defined only for concrete values.
    pub fn try_neg(&self) -> GateResult<Param> {
        Ok(Param::Value(-self.try_f64()?))
    }

    /// Sum of two parameters. Defined only for concrete values.
    pub fn try_add(&self, other: &Param) -> GateResult<Param> {
        Ok(Param::Value(self.try_f64()? + other.try_f64()?))
    }

    /// Reduce into the `[0, 2)` half-turn window. Defined only for concrete
    /// values; rotations here are periodic with period two half turns.
    pub fn try_mod2(&self) -> GateResult<Param> {
        Ok(Param::Value(crate::canonical::canonical_half_turns(
            self.try_f64()?,
        )))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Value(v) => write!(f, "{v}"),
            Param::Symbol(name) => write!(f, "{name}"),
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Value(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Value(f64::from(value))
    }
}

/// Choice of angle unit when constructing a rotation gate.
///
/// At most one field may be set; the angle is stored in half turns
/// (`half_turns = degs / 180 = rads / π`). With no field set the gate's
/// default angle is used.
#[derive(Debug, Clone, Default)]
pub struct Angle {
    /// Angle in half turns (1 half turn = π radians = 180°).
    pub half_turns: Option<Param>,
    /// Angle in radians.
    pub rads: Option<f64>,
    /// Angle in degrees.
    pub degs: Option<f64>,
}

impl Angle {
    /// An angle given in half turns.
    pub fn half_turns(half_turns: impl Into<Param>) -> Self {
        Self {
            half_turns: Some(half_turns.into()),
            ..Self::default()
        }
    }

    /// An angle given in radians.
    pub fn rads(rads: f64) -> Self {
        Self {
            rads: Some(rads),
            ..Self::default()
        }
    }

    /// An angle given in degrees.
    pub fn degs(degs: f64) -> Self {
        Self {
            degs: Some(degs),
            ..Self::default()
        }
    }

    /// Collapse to half turns.
    ///
    /// Fails with [`GateError::AmbiguousAngle`] when more than one unit was
    /// supplied; falls back to `default` when none was.
    pub fn into_half_turns(self, default: Param) -> GateResult<Param> {
        let supplied = usize::from(self.half_turns.is_some())
            + usize::from(self.rads.is_some())
            + usize::from(self.degs.is_some());
        if supplied > 1 {
            return Err(GateError::AmbiguousAngle);
        }
        if let Some(p) = self.half_turns {
            return Ok(p);
        }
        if let Some(rads) = self.rads {
            return Ok(Param::Value(rads / PI));
        }
        if let Some(degs) = self.degs {
            return Ok(Param::Value(degs / 180.0));
        }
        Ok(default)
    }
}

/// A read-only mapping from placeholder names to concrete values.
///
/// Resolution is partial and idempotent: names absent from the mapping pass
/// through unchanged, and resolving an already-concrete parameter is a
/// no-op. The core never mutates a resolver during a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamResolver {
    assignments: FxHashMap<String, f64>,
}

impl ParamResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to a placeholder name.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.assignments.insert(name.into(), value);
    }

    /// Look up the value assigned to a name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.assignments.get(name).copied()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if the resolver holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Resolve a parameter. Unknown names pass through unchanged.
    pub fn resolve(&self, param: &Param) -> Param {
        match param {
            Param::Value(_) => param.clone(),
            Param::Symbol(name) => match self.assignments.get(name) {
                Some(&value) => Param::Value(value),
                None => param.clone(),
            },
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParamResolver {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            assignments: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value() {
        let p = Param::value(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
        assert_eq!(format!("{p}"), "1.5");
    }

    #[test]
    fn test_symbol() {
        let p = Param::symbol("theta");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert_eq!(format!("{p}"), "theta");
    }

    #[test]
    fn test_arithmetic_requires_concrete() {
        let a = Param::value(0.5);
        let b = Param::symbol("b");

        assert_eq!(a.try_neg().unwrap(), Param::value(-0.5));
        assert_eq!(a.try_add(&Param::value(1.0)).unwrap(), Param::value(1.5));
        assert_eq!(Param::value(-1.5).try_mod2().unwrap(), Param::value(0.5));

        assert!(matches!(
            b.try_neg(),
            Err(GateError::NotConcrete { symbol }) if symbol == "b"
        ));
        assert!(a.try_add(&b).is_err());
        assert!(b.try_mod2().is_err());
    }

    #[test]
    fn test_angle_units() {
        let default = Param::value(1.0);
        assert_eq!(
            Angle::degs(180.0).into_half_turns(default.clone()).unwrap(),
            Param::value(1.0)
        );
        assert_eq!(
            Angle::rads(PI / 2.0)
                .into_half_turns(default.clone())
                .unwrap(),
            Param::value(0.5)
        );
        assert_eq!(
            Angle::half_turns(Param::symbol("a"))
                .into_half_turns(default.clone())
                .unwrap(),
            Param::symbol("a")
        );
        assert_eq!(
            Angle::default().into_half_turns(default).unwrap(),
            Param::value(1.0)
        );
    }

    #[test]
    fn test_angle_ambiguous() {
        let both = Angle {
            half_turns: Some(Param::value(1.0)),
            degs: Some(180.0),
            ..Angle::default()
        };
        assert!(matches!(
            both.into_half_turns(Param::value(1.0)),
            Err(GateError::AmbiguousAngle)
        ));
    }

    #[test]
    fn test_resolver_partial_and_idempotent() {
        let resolver: ParamResolver = [("a", 0.1)].into_iter().collect();

        assert_eq!(resolver.resolve(&Param::symbol("a")), Param::value(0.1));
        assert_eq!(resolver.resolve(&Param::symbol("b")), Param::symbol("b"));
        assert_eq!(resolver.resolve(&Param::value(2.0)), Param::value(2.0));

        // Resolving a resolved parameter changes nothing.
        let once = resolver.resolve(&Param::symbol("a"));
        assert_eq!(resolver.resolve(&once), once);
    }

    #[test]
    fn test_resolver_insert_get() {
        let mut resolver = ParamResolver::new();
        assert!(resolver.is_empty());
        resolver.insert("phi", 0.25);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.get("phi"), Some(0.25));
        assert_eq!(resolver.get("missing"), None);
    }
}
