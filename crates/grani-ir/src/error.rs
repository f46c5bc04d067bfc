//! Error types for the gate algebra crate.

use thiserror::Error;

/// Errors that can occur constructing or querying gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// More than one angle unit was supplied for the same rotation.
    #[error("ambiguous angle: more than one of half_turns, rads, degs supplied")]
    AmbiguousAngle,

    /// Operation built with the wrong number of qubits for its gate.
    #[error("gate '{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate: &'static str,
        /// Number of qubits the gate acts on.
        expected: usize,
        /// Number of qubits actually provided.
        got: usize,
    },

    /// Measurement invert mask does not cover the measured qubits.
    #[error("invert mask has {mask_len} entries but the measurement targets {n_qubits} qubits")]
    InvertMaskLength {
        /// Length of the supplied mask.
        mask_len: usize,
        /// Number of measured qubits.
        n_qubits: usize,
    },

    /// Arithmetic or matrix synthesis attempted on a symbolic parameter.
    #[error("parameter '{symbol}' has no concrete value")]
    NotConcrete {
        /// Name of the unresolved placeholder.
        symbol: String,
    },

    /// Matrix requested for a gate with no unitary representation.
    #[error("gate '{gate}' has no unitary matrix")]
    NonUnitary {
        /// Name of the gate.
        gate: &'static str,
    },
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
