//! Wire message shapes.
//!
//! Field names here are part of the wire contract and must not change. The
//! op container serializes externally tagged, so the JSON shape is
//! `{"exp_z": {...}}`, `{"measurement": {...}}` and so on.

use serde::{Deserialize, Serialize};

use grani_ir::{GridQubit, Param};

use crate::error::{WireError, WireResult};

/// A float that is either a raw value or a named parameter reference.
///
/// Exactly one of the two fields is populated on a valid message; decoding
/// enforces this via [`ParamFloat::to_param`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamFloat {
    /// Concrete value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<f64>,
    /// Placeholder name to be resolved at run time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
}

impl ParamFloat {
    /// Decode into a [`Param`].
    ///
    /// Fails with [`WireError::MalformedParam`] when neither or both fields
    /// are set; a message with neither field is invalid rather than zero.
    pub fn to_param(&self) -> WireResult<Param> {
        match (self.raw, &self.parameter_key) {
            (Some(value), None) => Ok(Param::Value(value)),
            (None, Some(key)) => Ok(Param::Symbol(key.clone())),
            _ => Err(WireError::MalformedParam),
        }
    }
}

impl From<&Param> for ParamFloat {
    fn from(param: &Param) -> Self {
        match param {
            Param::Value(value) => ParamFloat {
                raw: Some(*value),
                parameter_key: None,
            },
            Param::Symbol(name) => ParamFloat {
                raw: None,
                parameter_key: Some(name.clone()),
            },
        }
    }
}

/// Grid coordinate of one target qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Row on the device grid.
    pub row: i32,
    /// Column on the device grid.
    pub col: i32,
}

impl From<GridQubit> for Target {
    fn from(q: GridQubit) -> Self {
        Target {
            row: q.row,
            col: q.col,
        }
    }
}

impl From<Target> for GridQubit {
    fn from(t: Target) -> Self {
        GridQubit::new(t.row, t.col)
    }
}

/// Multi-qubit measurement message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementMsg {
    /// Measured qubits, in application order.
    pub targets: Vec<Target>,
    /// Result key.
    pub key: String,
    /// Per-qubit result flips. Absent means no inversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert_mask: Option<Vec<bool>>,
}

/// Z-axis rotation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpZMsg {
    /// Target qubit.
    pub target: Target,
    /// Rotation angle in half turns.
    pub half_turns: ParamFloat,
}

/// Equatorial-axis rotation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpWMsg {
    /// Target qubit.
    pub target: Target,
    /// Axis angle in half turns, measured from X.
    pub axis_half_turns: ParamFloat,
    /// Rotation angle in half turns.
    pub half_turns: ParamFloat,
}

/// Controlled phase rotation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exp11Msg {
    /// First target qubit, in the order the operation was built with.
    pub target1: Target,
    /// Second target qubit.
    pub target2: Target,
    /// Phasing angle in half turns.
    pub half_turns: ParamFloat,
}

/// One gate operation on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateMessage {
    /// `{"measurement": {...}}`
    #[serde(rename = "measurement")]
    Measurement(MeasurementMsg),
    /// `{"exp_z": {...}}`
    #[serde(rename = "exp_z")]
    ExpZ(ExpZMsg),
    /// `{"exp_w": {...}}`
    #[serde(rename = "exp_w")]
    ExpW(ExpWMsg),
    /// `{"exp_11": {...}}`
    #[serde(rename = "exp_11")]
    Exp11(Exp11Msg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_float_exactly_one_field() {
        let raw = ParamFloat {
            raw: Some(5.0),
            parameter_key: None,
        };
        assert_eq!(raw.to_param().unwrap(), Param::value(5.0));

        let keyed = ParamFloat {
            raw: None,
            parameter_key: Some("rr".into()),
        };
        assert_eq!(keyed.to_param().unwrap(), Param::symbol("rr"));

        assert!(matches!(
            ParamFloat::default().to_param(),
            Err(WireError::MalformedParam)
        ));
        let both = ParamFloat {
            raw: Some(5.0),
            parameter_key: Some("rr".into()),
        };
        assert!(matches!(both.to_param(), Err(WireError::MalformedParam)));
    }

    #[test]
    fn test_param_float_omits_absent_fields() {
        let raw = ParamFloat::from(&Param::value(0.5));
        assert_eq!(serde_json::to_string(&raw).unwrap(), r#"{"raw":0.5}"#);

        let keyed = ParamFloat::from(&Param::symbol("k"));
        assert_eq!(
            serde_json::to_string(&keyed).unwrap(),
            r#"{"parameter_key":"k"}"#
        );
    }

    #[test]
    fn test_target_roundtrip() {
        let q = GridQubit::new(2, 3);
        let t = Target::from(q);
        assert_eq!(GridQubit::from(t), q);
    }
}
