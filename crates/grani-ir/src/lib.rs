//! Grani gate algebra
//!
//! This crate models the parameterized gate set of a grid-based quantum
//! device: Z-axis rotations ([`ExpZ`]), rotations about an arbitrary
//! equatorial axis ([`ExpW`]), controlled phase rotations ([`Exp11`]) and
//! multi-qubit measurements ([`Measurement`]), plus the machinery that makes
//! them usable in a larger circuit system.
//!
//! # Core Components
//!
//! - **Parameters**: [`Param`] values are concrete numbers or named
//!   placeholders; [`ParamResolver`] substitutes placeholders by name
//! - **Gates**: the four shapes above, closed over by [`Gate`]
//! - **Canonical equality**: rotation angles compare modulo two half turns,
//!   and an axis rotation is equal to its axis-flipped, angle-negated twin;
//!   hashing agrees with equality (see [`canonical`])
//! - **Unitaries**: [`Unitary`] synthesis for fully concrete rotations
//! - **Operations**: [`Operation`] binds a gate to target [`GridQubit`]s,
//!   validating arity
//! - **Diagrams**: [`DiagramInfo`] supplies wire symbols and exponents to an
//!   external text-diagram renderer
//!
//! # Example: resolving a sweep parameter
//!
//! ```rust
//! use grani_ir::{ExpW, GridQubit, Operation, Param, ParamResolver};
//!
//! let gate = ExpW::with_axis(Param::symbol("t"), 0.5);
//! assert!(gate.is_parameterized());
//! assert!(gate.matrix().is_err());
//!
//! let resolver: ParamResolver = [("t", 0.25)].into_iter().collect();
//! let solid = gate.resolve(&resolver);
//! assert_eq!(solid, ExpW::with_axis(0.25, 0.5));
//!
//! let op = Operation::new(solid, [GridQubit::new(0, 0)])?;
//! assert!(op.gate().matrix().is_ok());
//! # Ok::<(), grani_ir::GateError>(())
//! ```
//!
//! # Example: canonical equality
//!
//! ```rust
//! use grani_ir::ExpZ;
//!
//! // Rotations are periodic with period two half turns.
//! assert_eq!(ExpZ::from_half_turns(-1.5), ExpZ::from_half_turns(10.5));
//! assert_eq!(ExpZ::from_degs(180.0), ExpZ::from_half_turns(1.0));
//! ```

pub mod canonical;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod operation;
pub mod parameter;
pub mod qubit;

pub use diagram::DiagramInfo;
pub use error::{GateError, GateResult};
pub use gate::{Exp11, ExpW, ExpZ, Gate, Measurement};
pub use matrix::Unitary;
pub use operation::{Operation, measure, measure_each};
pub use parameter::{Angle, Param, ParamResolver};
pub use qubit::GridQubit;
