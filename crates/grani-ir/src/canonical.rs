//! Canonical representatives for gate equality and hashing.
//!
//! Rotation angles are periodic with period two half turns, and an axis
//! rotation is unchanged by flipping its axis half a turn while negating the
//! rotation. Every folding rule lives here, and both `PartialEq` and `Hash`
//! for the rotation gates delegate to the same canonical representative, so
//! the two cannot drift apart.
//!
//! Folding applies only to fully concrete values. A gate carrying any
//! symbolic parameter compares structurally: it is equal only to a gate that
//! is literally identical in every field.

use std::hash::{Hash, Hasher};

use crate::gate::{Exp11, ExpW, ExpZ};
use crate::parameter::Param;

/// Reduce a half-turn angle into the canonical `[0, 2)` window.
pub fn canonical_half_turns(half_turns: f64) -> f64 {
    let r = half_turns.rem_euclid(2.0);
    // rem_euclid can land exactly on the open bound for tiny negative
    // inputs, and -0.0 must collapse onto +0.0 so hashing sees one bit
    // pattern.
    if r >= 2.0 { 0.0 } else { r + 0.0 }
}

/// Canonical form of one periodic parameter. Symbols pass through.
fn canonical_param(param: &Param) -> Param {
    match param {
        Param::Value(v) => Param::Value(canonical_half_turns(*v)),
        Param::Symbol(_) => param.clone(),
    }
}

fn hash_param<H: Hasher>(param: &Param, state: &mut H) {
    match param {
        Param::Value(v) => {
            state.write_u8(0);
            state.write_u64(v.to_bits());
        }
        Param::Symbol(name) => {
            state.write_u8(1);
            name.hash(state);
        }
    }
}

impl ExpZ {
    /// Canonical rotation angle used by equality and hashing.
    pub(crate) fn canonical(&self) -> Param {
        canonical_param(&self.half_turns)
    }
}

impl PartialEq for ExpZ {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ExpZ {}

impl Hash for ExpZ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_param(&self.canonical(), state);
    }
}

impl Exp11 {
    /// Canonical phasing angle used by equality and hashing.
    pub(crate) fn canonical(&self) -> Param {
        canonical_param(&self.half_turns)
    }
}

impl PartialEq for Exp11 {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Exp11 {}

impl Hash for Exp11 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_param(&self.canonical(), state);
    }
}

impl ExpW {
    /// Canonical `(half_turns, axis_half_turns)` pair used by equality and
    /// hashing.
    ///
    /// When both angles are concrete the axis is folded into `[0, 1)`,
    /// negating the rotation: `(h, a)` and `(2 - h mod 2, a + 1 mod 2)`
    /// describe the identical operator and share one representative.
    pub(crate) fn canonical(&self) -> (Param, Param) {
        match (&self.half_turns, &self.axis_half_turns) {
            (Param::Value(h), Param::Value(a)) => {
                let mut h = canonical_half_turns(*h);
                let mut a = canonical_half_turns(*a);
                if a >= 1.0 {
                    a -= 1.0;
                    h = canonical_half_turns(-h);
                }
                (Param::Value(h), Param::Value(a))
            }
            _ => (self.half_turns.clone(), self.axis_half_turns.clone()),
        }
    }
}

impl PartialEq for ExpW {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ExpW {}

impl Hash for ExpW {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (half_turns, axis_half_turns) = self.canonical();
        hash_param(&half_turns, state);
        hash_param(&axis_half_turns, state);
    }
}
