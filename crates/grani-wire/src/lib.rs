//! Grani wire encoding
//!
//! Converts bound gate operations from [`grani_ir`] to and from their wire
//! message shapes. Each gate has a fixed message form with normative field
//! names; parameters travel as [`ParamFloat`], which carries either a raw
//! value or a placeholder name, never both and never neither.
//!
//! # Example
//!
//! ```rust
//! use grani_ir::{ExpZ, GridQubit, Operation, Param};
//! use grani_wire::{decode, encode};
//!
//! let op = Operation::new(
//!     ExpZ::from_half_turns(Param::symbol("k")),
//!     [GridQubit::new(2, 3)],
//! )?;
//!
//! let msg = encode(&op);
//! assert_eq!(decode(&msg)?, op);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod error;
pub mod message;

pub use codec::{decode, encode, from_json, to_json};
pub use error::{WireError, WireResult};
pub use message::{Exp11Msg, ExpWMsg, ExpZMsg, GateMessage, MeasurementMsg, ParamFloat, Target};
