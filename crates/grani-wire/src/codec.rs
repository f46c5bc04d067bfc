//! Conversion between bound operations and wire messages.

use tracing::debug;

use grani_ir::{Exp11, ExpW, ExpZ, Gate, Measurement, Operation};

use crate::error::WireResult;
use crate::message::{Exp11Msg, ExpWMsg, ExpZMsg, GateMessage, MeasurementMsg, ParamFloat};

/// Encode an operation into its wire message.
///
/// Infallible: an [`Operation`] has already validated arity and mask length,
/// so every gate shape maps onto its message. An empty invert mask encodes
/// as an absent field.
pub fn encode(op: &Operation) -> GateMessage {
    let qubits = op.qubits();
    match op.gate() {
        Gate::ExpZ(g) => GateMessage::ExpZ(ExpZMsg {
            target: qubits[0].into(),
            half_turns: ParamFloat::from(&g.half_turns),
        }),
        Gate::ExpW(g) => GateMessage::ExpW(ExpWMsg {
            target: qubits[0].into(),
            axis_half_turns: ParamFloat::from(&g.axis_half_turns),
            half_turns: ParamFloat::from(&g.half_turns),
        }),
        Gate::Exp11(g) => GateMessage::Exp11(Exp11Msg {
            target1: qubits[0].into(),
            target2: qubits[1].into(),
            half_turns: ParamFloat::from(&g.half_turns),
        }),
        Gate::Measurement(m) => GateMessage::Measurement(MeasurementMsg {
            targets: qubits.iter().copied().map(Into::into).collect(),
            key: m.key.clone(),
            invert_mask: if m.invert_mask.is_empty() {
                None
            } else {
                Some(m.invert_mask.clone())
            },
        }),
    }
}

/// Decode a wire message into a bound operation.
///
/// Re-validates what the wire cannot guarantee: each parameter must carry
/// exactly one of its fields, and a measurement's invert mask must cover its
/// targets.
pub fn decode(msg: &GateMessage) -> WireResult<Operation> {
    let op = match msg {
        GateMessage::ExpZ(m) => Operation::new(
            ExpZ::from_half_turns(m.half_turns.to_param()?),
            [m.target.into()],
        )?,
        GateMessage::ExpW(m) => Operation::new(
            ExpW::with_axis(m.half_turns.to_param()?, m.axis_half_turns.to_param()?),
            [m.target.into()],
        )?,
        GateMessage::Exp11(m) => Operation::new(
            Exp11::from_half_turns(m.half_turns.to_param()?),
            [m.target1.into(), m.target2.into()],
        )?,
        GateMessage::Measurement(m) => Operation::new(
            Measurement::new(m.key.clone())
                .with_invert_mask(m.invert_mask.clone().unwrap_or_default()),
            m.targets.iter().copied().map(Into::into),
        )?,
    };
    debug!(
        gate = op.gate().name(),
        n_qubits = op.qubits().len(),
        "decoded wire operation"
    );
    Ok(op)
}

/// Serialize an operation to its JSON transport form.
pub fn to_json(op: &Operation) -> WireResult<String> {
    Ok(serde_json::to_string(&encode(op))?)
}

/// Deserialize an operation from its JSON transport form.
pub fn from_json(json: &str) -> WireResult<Operation> {
    decode(&serde_json::from_str(json)?)
}
