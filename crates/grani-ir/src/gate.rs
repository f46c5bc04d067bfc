//! The hardware gate set.
//!
//! Four gate shapes cover the native operations of the target device: a
//! Z-axis rotation, a rotation about an arbitrary equatorial axis, a
//! controlled phase rotation, and a multi-qubit measurement. Rotation angles
//! are stored in half turns (1 half turn = π radians) exactly as given;
//! periodicity and symmetry folding happen only in [`crate::canonical`].

use serde::{Deserialize, Serialize};

use crate::error::GateResult;
use crate::parameter::{Angle, Param, ParamResolver};

/// Trace-distance sentinel for gates whose angle is still symbolic.
///
/// Callers doing optimization passes treat this as "maximally different from
/// the identity" and must not assume a near-no-op without proof.
const SYMBOLIC_TRACE_BOUND: f64 = 1.0;

/// Conservative slope of the linear trace-distance bound in half turns.
const TRACE_BOUND_SLOPE: f64 = 3.5;

fn trace_bound(half_turns: &Param) -> f64 {
    match half_turns.as_f64() {
        Some(t) => (t * TRACE_BOUND_SLOPE).abs(),
        None => SYMBOLIC_TRACE_BOUND,
    }
}

/// Single-qubit rotation about the Z axis.
///
/// `half_turns = 1` is Pauli Z up to global phase; `half_turns = 0.5` and
/// `0.25` are the S and T gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpZ {
    /// Rotation angle in half turns.
    pub half_turns: Param,
}

impl ExpZ {
    /// The default rotation of one half turn.
    pub fn new() -> Self {
        Self::from_half_turns(1.0)
    }

    /// Rotation by the given number of half turns.
    pub fn from_half_turns(half_turns: impl Into<Param>) -> Self {
        Self {
            half_turns: half_turns.into(),
        }
    }

    /// Rotation by the given angle in radians.
    pub fn from_rads(rads: f64) -> Self {
        Self::from_half_turns(rads / std::f64::consts::PI)
    }

    /// Rotation by the given angle in degrees.
    pub fn from_degs(degs: f64) -> Self {
        Self::from_half_turns(degs / 180.0)
    }

    /// Construct from an explicit [`Angle`] choice.
    pub fn from_angle(angle: Angle) -> GateResult<Self> {
        Ok(Self {
            half_turns: angle.into_half_turns(Param::value(1.0))?,
        })
    }

    /// Check if the rotation angle is still a placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.half_turns.is_symbolic()
    }

    /// Substitute placeholder parameters known to the resolver.
    pub fn resolve(&self, resolver: &ParamResolver) -> Self {
        Self {
            half_turns: resolver.resolve(&self.half_turns),
        }
    }

    /// Check if the inverse rotation is known.
    ///
    /// A symbolic angle makes the inverse's angle unknown, so the gate is
    /// reported as non-invertible even though every unitary has an inverse.
    pub fn has_inverse(&self) -> bool {
        !self.is_parameterized()
    }

    /// The rotation with its direction reversed, when the angle is concrete.
    pub fn inverse(&self) -> Option<Self> {
        match self.half_turns.try_neg() {
            Ok(neg) => Some(Self { half_turns: neg }),
            Err(_) => None,
        }
    }

    /// Upper bound on the trace distance between this gate and the identity.
    pub fn trace_distance_bound(&self) -> f64 {
        trace_bound(&self.half_turns)
    }
}

impl Default for ExpZ {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-qubit rotation about an axis in the XY plane of the Bloch sphere.
///
/// The axis sits at `axis_half_turns` from the X axis; `axis_half_turns = 0`
/// with `half_turns = 1` is Pauli X, axis `0.5` is Pauli Y. Flipping the
/// axis by a half turn while negating the rotation yields the identical
/// operator, which equality and hashing account for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpW {
    /// Rotation angle in half turns.
    pub half_turns: Param,
    /// Angle of the rotation axis in half turns, measured from X.
    pub axis_half_turns: Param,
}

impl ExpW {
    /// The default rotation: one half turn about the X axis.
    pub fn new() -> Self {
        Self::with_axis(1.0, 0.0)
    }

    /// Rotation about the X axis by the given number of half turns.
    pub fn from_half_turns(half_turns: impl Into<Param>) -> Self {
        Self::with_axis(half_turns, 0.0)
    }

    /// Rotation by `half_turns` about the axis at `axis_half_turns`.
    pub fn with_axis(half_turns: impl Into<Param>, axis_half_turns: impl Into<Param>) -> Self {
        Self {
            half_turns: half_turns.into(),
            axis_half_turns: axis_half_turns.into(),
        }
    }

    /// Construct from explicit [`Angle`] choices for rotation and axis.
    pub fn from_angles(half_turns: Angle, axis: Angle) -> GateResult<Self> {
        Ok(Self {
            half_turns: half_turns.into_half_turns(Param::value(1.0))?,
            axis_half_turns: axis.into_half_turns(Param::value(0.0))?,
        })
    }

    /// Check if either angle is still a placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.half_turns.is_symbolic() || self.axis_half_turns.is_symbolic()
    }

    /// Substitute placeholder parameters known to the resolver.
    pub fn resolve(&self, resolver: &ParamResolver) -> Self {
        Self {
            half_turns: resolver.resolve(&self.half_turns),
            axis_half_turns: resolver.resolve(&self.axis_half_turns),
        }
    }

    /// Check if the inverse rotation is known.
    pub fn has_inverse(&self) -> bool {
        !self.is_parameterized()
    }

    /// The reversed rotation about the same axis, when fully concrete.
    pub fn inverse(&self) -> Option<Self> {
        if self.axis_half_turns.is_symbolic() {
            return None;
        }
        match self.half_turns.try_neg() {
            Ok(neg) => Some(Self {
                half_turns: neg,
                axis_half_turns: self.axis_half_turns.clone(),
            }),
            Err(_) => None,
        }
    }

    /// Upper bound on the trace distance between this gate and the identity.
    pub fn trace_distance_bound(&self) -> f64 {
        trace_bound(&self.half_turns)
    }
}

impl Default for ExpW {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-qubit rotation phasing the `|11⟩` state.
///
/// `half_turns = 1` is the controlled-Z gate. The two targets play
/// interchangeable roles; the wire encoding nonetheless preserves the order
/// they were given in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exp11 {
    /// Relative phasing of the `|11⟩` state, in half turns.
    pub half_turns: Param,
}

impl Exp11 {
    /// The default phasing of one half turn (controlled Z).
    pub fn new() -> Self {
        Self::from_half_turns(1.0)
    }

    /// Phasing by the given number of half turns.
    pub fn from_half_turns(half_turns: impl Into<Param>) -> Self {
        Self {
            half_turns: half_turns.into(),
        }
    }

    /// Phasing by the given angle in radians.
    pub fn from_rads(rads: f64) -> Self {
        Self::from_half_turns(rads / std::f64::consts::PI)
    }

    /// Phasing by the given angle in degrees.
    pub fn from_degs(degs: f64) -> Self {
        Self::from_half_turns(degs / 180.0)
    }

    /// Construct from an explicit [`Angle`] choice.
    pub fn from_angle(angle: Angle) -> GateResult<Self> {
        Ok(Self {
            half_turns: angle.into_half_turns(Param::value(1.0))?,
        })
    }

    /// Check if the phasing angle is still a placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.half_turns.is_symbolic()
    }

    /// Substitute placeholder parameters known to the resolver.
    pub fn resolve(&self, resolver: &ParamResolver) -> Self {
        Self {
            half_turns: resolver.resolve(&self.half_turns),
        }
    }

    /// Check if the inverse phasing is known.
    pub fn has_inverse(&self) -> bool {
        !self.is_parameterized()
    }

    /// The reversed phasing, when the angle is concrete.
    pub fn inverse(&self) -> Option<Self> {
        match self.half_turns.try_neg() {
            Ok(neg) => Some(Self { half_turns: neg }),
            Err(_) => None,
        }
    }

    /// Upper bound on the trace distance between this gate and the identity.
    pub fn trace_distance_bound(&self) -> f64 {
        trace_bound(&self.half_turns)
    }
}

impl Default for Exp11 {
    fn default() -> Self {
        Self::new()
    }
}

/// Joint measurement of one or more qubits in the computational basis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement {
    /// Key identifying this measurement's results.
    pub key: String,
    /// Per-qubit flips applied to the recorded bits, in target order.
    /// Empty means no inversion; otherwise the length must equal the
    /// number of measured qubits.
    pub invert_mask: Vec<bool>,
}

impl Measurement {
    /// Measurement recording its results under the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            invert_mask: vec![],
        }
    }

    /// Attach a per-qubit inversion mask.
    #[must_use]
    pub fn with_invert_mask(mut self, invert_mask: impl Into<Vec<bool>>) -> Self {
        self.invert_mask = invert_mask.into();
        self
    }

    /// Check the mask against a concrete target qubit count.
    ///
    /// The mask length is only checkable once the gate is bound to qubits;
    /// the gate alone does not know its arity.
    pub fn validate_mask(&self, n_qubits: usize) -> GateResult<()> {
        if !self.invert_mask.is_empty() && self.invert_mask.len() != n_qubits {
            return Err(crate::error::GateError::InvertMaskLength {
                mask_len: self.invert_mask.len(),
                n_qubits,
            });
        }
        Ok(())
    }
}

/// A gate from the fixed hardware gate set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Z-axis rotation.
    ExpZ(ExpZ),
    /// Rotation about an equatorial axis.
    ExpW(ExpW),
    /// Controlled phase rotation.
    Exp11(Exp11),
    /// Multi-qubit measurement.
    Measurement(Measurement),
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::ExpZ(_) => "exp_z",
            Gate::ExpW(_) => "exp_w",
            Gate::Exp11(_) => "exp_11",
            Gate::Measurement(_) => "measurement",
        }
    }

    /// Number of qubits the gate acts on, when fixed by the gate shape.
    ///
    /// Measurements target any number of qubits and return `None`.
    #[inline]
    pub fn fixed_qubits(&self) -> Option<usize> {
        match self {
            Gate::ExpZ(_) | Gate::ExpW(_) => Some(1),
            Gate::Exp11(_) => Some(2),
            Gate::Measurement(_) => None,
        }
    }

    /// Check if any parameter is still a placeholder.
    pub fn is_parameterized(&self) -> bool {
        match self {
            Gate::ExpZ(g) => g.is_parameterized(),
            Gate::ExpW(g) => g.is_parameterized(),
            Gate::Exp11(g) => g.is_parameterized(),
            Gate::Measurement(_) => false,
        }
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measurement(_))
    }

    /// Substitute placeholder parameters known to the resolver.
    pub fn resolve(&self, resolver: &ParamResolver) -> Gate {
        match self {
            Gate::ExpZ(g) => Gate::ExpZ(g.resolve(resolver)),
            Gate::ExpW(g) => Gate::ExpW(g.resolve(resolver)),
            Gate::Exp11(g) => Gate::Exp11(g.resolve(resolver)),
            Gate::Measurement(_) => self.clone(),
        }
    }

    /// Check if the inverse gate is known. Measurements have none.
    pub fn has_inverse(&self) -> bool {
        match self {
            Gate::ExpZ(g) => g.has_inverse(),
            Gate::ExpW(g) => g.has_inverse(),
            Gate::Exp11(g) => g.has_inverse(),
            Gate::Measurement(_) => false,
        }
    }

    /// The inverse gate, when it is known.
    pub fn inverse(&self) -> Option<Gate> {
        match self {
            Gate::ExpZ(g) => g.inverse().map(Gate::ExpZ),
            Gate::ExpW(g) => g.inverse().map(Gate::ExpW),
            Gate::Exp11(g) => g.inverse().map(Gate::Exp11),
            Gate::Measurement(_) => None,
        }
    }

    /// Upper bound on the trace distance between this gate and the identity.
    ///
    /// Symbolic gates and measurements report the maximal-uncertainty
    /// sentinel of 1.0.
    pub fn trace_distance_bound(&self) -> f64 {
        match self {
            Gate::ExpZ(g) => g.trace_distance_bound(),
            Gate::ExpW(g) => g.trace_distance_bound(),
            Gate::Exp11(g) => g.trace_distance_bound(),
            Gate::Measurement(_) => SYMBOLIC_TRACE_BOUND,
        }
    }
}

impl From<ExpZ> for Gate {
    fn from(gate: ExpZ) -> Self {
        Gate::ExpZ(gate)
    }
}

impl From<ExpW> for Gate {
    fn from(gate: ExpW) -> Self {
        Gate::ExpW(gate)
    }
}

impl From<Exp11> for Gate {
    fn from(gate: Exp11) -> Self {
        Gate::Exp11(gate)
    }
}

impl From<Measurement> for Gate {
    fn from(gate: Measurement) -> Self {
        Gate::Measurement(gate)
    }
}
