//! Equivalence-class tests for gate equality and hashing.
//!
//! Gates constructed differently but describing the same physical operation
//! must compare equal and hash identically; everything else must stay
//! distinct. Groups cover mod-2 periodicity, the axis-flip symmetry of the
//! equatorial rotation, symbolic suppression of both, and measurement keys.

use std::collections::hash_map::DefaultHasher;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use grani_ir::{Angle, Exp11, ExpW, ExpZ, Gate, Measurement, Param};

fn hash_of(gate: &Gate) -> u64 {
    let mut hasher = DefaultHasher::new();
    gate.hash(&mut hasher);
    hasher.finish()
}

/// Assert that gates within one group are pairwise equal with equal hashes,
/// and gates from different groups are pairwise distinct.
fn assert_equality_groups(groups: &[Vec<Gate>]) {
    for (i, group) in groups.iter().enumerate() {
        for a in group {
            for b in group {
                assert_eq!(a, b, "group {i}: {a:?} != {b:?}");
                assert_eq!(
                    hash_of(a),
                    hash_of(b),
                    "group {i}: hash mismatch between {a:?} and {b:?}"
                );
            }
        }
        for (j, other) in groups.iter().enumerate() {
            if i == j {
                continue;
            }
            for a in group {
                for b in other {
                    assert_ne!(a, b, "groups {i}/{j}: {a:?} == {b:?}");
                }
            }
        }
    }
}

#[test]
fn z_equality_groups() {
    assert_equality_groups(&[
        vec![ExpZ::from_half_turns(0.0).into()],
        vec![
            ExpZ::new().into(),
            ExpZ::from_half_turns(1.0).into(),
            ExpZ::from_degs(180.0).into(),
            ExpZ::from_rads(PI).into(),
        ],
        vec![ExpZ::from_half_turns(Param::symbol("a")).into()],
        vec![ExpZ::from_half_turns(Param::symbol("b")).into()],
        vec![
            ExpZ::from_half_turns(-1.5).into(),
            ExpZ::from_half_turns(10.5).into(),
        ],
    ]);
}

#[test]
fn cz_equality_groups() {
    assert_equality_groups(&[
        vec![Exp11::from_half_turns(0.0).into()],
        vec![
            Exp11::new().into(),
            Exp11::from_half_turns(1.0).into(),
            Exp11::from_degs(180.0).into(),
            Exp11::from_rads(PI).into(),
        ],
        vec![Exp11::from_half_turns(Param::symbol("a")).into()],
        vec![Exp11::from_half_turns(Param::symbol("b")).into()],
        vec![
            Exp11::from_half_turns(-1.5).into(),
            Exp11::from_half_turns(6.5).into(),
        ],
    ]);
}

#[test]
fn w_equality_groups() {
    assert_equality_groups(&[
        vec![
            ExpW::new().into(),
            ExpW::with_axis(1.0, 0.0).into(),
            ExpW::from_angles(Angle::degs(180.0), Angle::degs(0.0))
                .unwrap()
                .into(),
            ExpW::from_angles(Angle::rads(PI), Angle::rads(0.0))
                .unwrap()
                .into(),
        ],
        vec![ExpW::from_half_turns(Param::symbol("a")).into()],
        vec![ExpW::from_half_turns(0.0).into()],
        vec![ExpW::with_axis(0.0, Param::symbol("a")).into()],
        vec![
            ExpW::with_axis(0.0, 0.5).into(),
            ExpW::from_angles(Angle::half_turns(0.0), Angle::rads(PI / 2.0))
                .unwrap()
                .into(),
        ],
        vec![ExpW::with_axis(Param::symbol("ab"), Param::symbol("xy")).into()],
        // Flipping the axis and negating the angle gives the same rotation...
        vec![
            ExpW::with_axis(0.25, 1.5).into(),
            ExpW::with_axis(1.75, 0.5).into(),
        ],
        // ...but not when either angle is symbolic.
        vec![ExpW::with_axis(Param::symbol("a"), 1.5).into()],
        vec![ExpW::with_axis(Param::symbol("a"), 0.5).into()],
        vec![ExpW::with_axis(0.25, Param::symbol("a")).into()],
        vec![ExpW::with_axis(1.75, Param::symbol("a")).into()],
        // Whole-turn shifts on both angles fold away.
        vec![
            ExpW::with_axis(-2.25, 1.25).into(),
            ExpW::with_axis(7.75, 11.25).into(),
        ],
    ]);
}

#[test]
fn measurement_equality_groups() {
    assert_equality_groups(&[
        vec![Measurement::new("").into()],
        vec![Measurement::new("a").into()],
        vec![Measurement::new("b").into()],
        vec![Measurement::new("").with_invert_mask([true]).into()],
        vec![Measurement::new("").with_invert_mask([false]).into()],
    ]);
}

#[test]
fn gate_variants_never_cross_compare() {
    assert_equality_groups(&[
        vec![ExpZ::from_half_turns(1.0).into()],
        vec![Exp11::from_half_turns(1.0).into()],
        vec![ExpW::from_half_turns(1.0).into()],
        vec![Measurement::new("exp_z").into()],
    ]);
}
