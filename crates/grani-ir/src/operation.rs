//! Gates bound to target qubits.

use serde::{Deserialize, Serialize};

use crate::diagram::DiagramInfo;
use crate::error::{GateError, GateResult};
use crate::gate::{Gate, Measurement};
use crate::parameter::ParamResolver;
use crate::qubit::GridQubit;

/// A gate applied to a concrete ordered list of target qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    gate: Gate,
    qubits: Vec<GridQubit>,
}

impl Operation {
    /// Bind a gate to its target qubits.
    ///
    /// Fails when the qubit count does not match the gate's arity, or when a
    /// measurement's invert mask does not cover its targets.
    pub fn new(
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = GridQubit>,
    ) -> GateResult<Self> {
        let gate = gate.into();
        let qubits: Vec<GridQubit> = qubits.into_iter().collect();
        if let Some(expected) = gate.fixed_qubits() {
            if qubits.len() != expected {
                return Err(GateError::ArityMismatch {
                    gate: gate.name(),
                    expected,
                    got: qubits.len(),
                });
            }
        }
        if let Gate::Measurement(m) = &gate {
            m.validate_mask(qubits.len())?;
        }
        Ok(Self { gate, qubits })
    }

    /// The gate being applied.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// The target qubits, in application order.
    pub fn qubits(&self) -> &[GridQubit] {
        &self.qubits
    }

    /// Check if any gate parameter is still a placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.gate.is_parameterized()
    }

    /// Substitute placeholder parameters, leaving the targets untouched.
    pub fn resolve(&self, resolver: &ParamResolver) -> Self {
        Self {
            gate: self.gate.resolve(resolver),
            qubits: self.qubits.clone(),
        }
    }

    /// Diagram symbols for this operation's wires.
    pub fn diagram_info(&self) -> DiagramInfo {
        self.gate.diagram_info(self.qubits.len())
    }
}

/// Measure the given qubits jointly under one key.
///
/// With no key given, the key defaults to the comma-joined coordinates of
/// the measured qubits, e.g. `"(0, 0),(0, 1)"`.
pub fn measure(
    qubits: impl IntoIterator<Item = GridQubit>,
    key: Option<&str>,
    invert_mask: impl Into<Vec<bool>>,
) -> GateResult<Operation> {
    let qubits: Vec<GridQubit> = qubits.into_iter().collect();
    let key = match key {
        Some(key) => key.to_string(),
        None => qubits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    };
    Operation::new(
        Measurement::new(key).with_invert_mask(invert_mask),
        qubits,
    )
}

/// Measure each qubit separately, keyed by its own coordinates.
pub fn measure_each(
    qubits: impl IntoIterator<Item = GridQubit>,
) -> GateResult<Vec<Operation>> {
    qubits
        .into_iter()
        .map(|q| Operation::new(Measurement::new(q.to_string()), [q]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{Exp11, ExpW, ExpZ};
    use crate::parameter::Param;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    #[test]
    fn test_arity_checked_at_construction() {
        assert!(Operation::new(ExpZ::new(), [q(0, 0)]).is_ok());
        assert!(Operation::new(Exp11::new(), [q(0, 0), q(0, 1)]).is_ok());

        let err = Operation::new(ExpZ::new(), [q(0, 0), q(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            GateError::ArityMismatch {
                gate: "exp_z",
                expected: 1,
                got: 2,
            }
        ));
        assert!(Operation::new(Exp11::new(), [q(0, 0)]).is_err());
        assert!(Operation::new(ExpW::new(), []).is_err());
    }

    #[test]
    fn test_measurement_mask_checked_at_construction() {
        let gate = Measurement::new("m").with_invert_mask([true]);
        assert!(Operation::new(gate.clone(), [q(0, 0)]).is_ok());

        let err = Operation::new(gate, [q(0, 0), q(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            GateError::InvertMaskLength {
                mask_len: 1,
                n_qubits: 2,
            }
        ));
    }

    #[test]
    fn test_measurement_takes_any_arity() {
        let targets = [q(0, 0), q(1, 0), q(2, 0)];
        let op = Operation::new(Measurement::new("m"), targets).unwrap();
        assert_eq!(op.qubits().len(), 3);
    }

    #[test]
    fn test_resolve_keeps_targets() {
        let resolver: ParamResolver = [("a", 0.1)].into_iter().collect();
        let op = Operation::new(ExpZ::from_half_turns(Param::symbol("a")), [q(2, 3)]).unwrap();
        assert!(op.is_parameterized());

        let resolved = op.resolve(&resolver);
        assert!(!resolved.is_parameterized());
        assert_eq!(resolved.qubits(), &[q(2, 3)]);
        assert_eq!(
            resolved,
            Operation::new(ExpZ::from_half_turns(0.1), [q(2, 3)]).unwrap()
        );
    }

    #[test]
    fn test_measure_default_key() {
        let op = measure([q(0, 0), q(0, 1)], None, []).unwrap();
        match op.gate() {
            Gate::Measurement(m) => assert_eq!(m.key, "(0, 0),(0, 1)"),
            other => panic!("expected measurement, got {other:?}"),
        }

        let keyed = measure([q(0, 0)], Some("test"), [true]).unwrap();
        match keyed.gate() {
            Gate::Measurement(m) => {
                assert_eq!(m.key, "test");
                assert_eq!(m.invert_mask, vec![true]);
            }
            other => panic!("expected measurement, got {other:?}"),
        }
    }

    #[test]
    fn test_measure_each() {
        let ops = measure_each([q(0, 0), q(0, 1)]).unwrap();
        assert_eq!(ops.len(), 2);
        match ops[1].gate() {
            Gate::Measurement(m) => assert_eq!(m.key, "(0, 1)"),
            other => panic!("expected measurement, got {other:?}"),
        }
    }
}
