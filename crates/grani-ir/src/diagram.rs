//! Short text symbols for diagram rendering.
//!
//! An external renderer lays gates out on qubit wires; the core only supplies
//! one symbol per target wire plus an optional shared exponent.

use crate::gate::{Exp11, ExpW, ExpZ, Gate, Measurement};
use crate::parameter::Param;

/// Wire symbols and exponent for one gate in a text diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramInfo {
    /// One symbol per target qubit, in target order.
    pub wire_symbols: Vec<String>,
    /// Exponent suffix shared by the wire symbols. `None` renders the bare
    /// symbol; a symbolic exponent renders as its placeholder name.
    pub exponent: Option<Param>,
}

impl DiagramInfo {
    fn bare(wire_symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            wire_symbols: wire_symbols.into_iter().map(Into::into).collect(),
            exponent: None,
        }
    }

    fn with_exponent(
        wire_symbols: impl IntoIterator<Item = impl Into<String>>,
        exponent: Param,
    ) -> Self {
        Self {
            wire_symbols: wire_symbols.into_iter().map(Into::into).collect(),
            exponent: Some(exponent),
        }
    }

    /// Label for one wire, with the `^exponent` suffix when present.
    pub fn wire_label(&self, index: usize) -> String {
        match &self.exponent {
            Some(e) => format!("{}^{e}", self.wire_symbols[index]),
            None => self.wire_symbols[index].clone(),
        }
    }
}

impl ExpZ {
    /// Diagram symbol for the rotation.
    ///
    /// The quarter- and eighth-turn rotations have conventional names: S is
    /// a half turn of phase, T a quarter. Their inverses render with an
    /// explicit -1 exponent. Whole and zero turns render as bare Z.
    pub fn diagram_info(&self) -> DiagramInfo {
        match self.half_turns {
            Param::Value(t) if t == 0.5 => DiagramInfo::bare(["S"]),
            Param::Value(t) if t == 0.25 => DiagramInfo::bare(["T"]),
            Param::Value(t) if t == -0.5 => DiagramInfo::with_exponent(["S"], Param::value(-1.0)),
            Param::Value(t) if t == -0.25 => DiagramInfo::with_exponent(["T"], Param::value(-1.0)),
            Param::Value(t) if t == 0.0 || t == 1.0 => DiagramInfo::bare(["Z"]),
            _ => DiagramInfo::with_exponent(["Z"], self.half_turns.clone()),
        }
    }
}

impl ExpW {
    /// Diagram symbol for the rotation: the Pauli name when the axis is X
    /// or Y, otherwise `W(<axis>)`.
    pub fn diagram_info(&self) -> DiagramInfo {
        let symbol = match &self.axis_half_turns {
            Param::Value(a) if *a == 0.0 => "X".to_string(),
            Param::Value(a) if *a == 0.5 => "Y".to_string(),
            axis => format!("W({axis})"),
        };
        match &self.half_turns {
            Param::Value(t) if *t == 1.0 => DiagramInfo::bare([symbol]),
            exponent => DiagramInfo::with_exponent([symbol], exponent.clone()),
        }
    }
}

impl Exp11 {
    /// Diagram symbols for the phasing: `@` on both wires.
    pub fn diagram_info(&self) -> DiagramInfo {
        match &self.half_turns {
            Param::Value(t) if *t == 1.0 => DiagramInfo::bare(["@", "@"]),
            exponent => DiagramInfo::with_exponent(["@", "@"], exponent.clone()),
        }
    }
}

impl Measurement {
    /// Diagram symbols for the measurement: `M` on every measured wire.
    pub fn diagram_info(&self, n_qubits: usize) -> DiagramInfo {
        DiagramInfo::bare(std::iter::repeat_n("M", n_qubits.max(1)))
    }
}

impl Gate {
    /// Diagram symbols for this gate on `n_qubits` wires.
    ///
    /// Only measurements use `n_qubits`; the other gates have fixed arity.
    pub fn diagram_info(&self, n_qubits: usize) -> DiagramInfo {
        match self {
            Gate::ExpZ(g) => g.diagram_info(),
            Gate::ExpW(g) => g.diagram_info(),
            Gate::Exp11(g) => g.diagram_info(),
            Gate::Measurement(g) => g.diagram_info(n_qubits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_diagram_chars() {
        assert_eq!(ExpZ::new().diagram_info().wire_label(0), "Z");
        assert_eq!(ExpZ::from_half_turns(0.5).diagram_info().wire_label(0), "S");
        assert_eq!(ExpZ::from_half_turns(0.25).diagram_info().wire_label(0), "T");
        assert_eq!(
            ExpZ::from_half_turns(0.125).diagram_info().wire_label(0),
            "Z^0.125"
        );
        assert_eq!(
            ExpZ::from_half_turns(-0.5).diagram_info().wire_label(0),
            "S^-1"
        );
        assert_eq!(
            ExpZ::from_half_turns(-0.25).diagram_info().wire_label(0),
            "T^-1"
        );
        assert_eq!(ExpZ::from_half_turns(0.0).diagram_info().wire_label(0), "Z");
    }

    #[test]
    fn test_w_diagram_chars() {
        assert_eq!(ExpW::with_axis(1.0, 0.0).diagram_info().wire_label(0), "X");
        assert_eq!(
            ExpW::with_axis(1.0, 0.25).diagram_info().wire_label(0),
            "W(0.25)"
        );
        assert_eq!(ExpW::with_axis(1.0, 0.5).diagram_info().wire_label(0), "Y");
        assert_eq!(
            ExpW::with_axis(1.0, Param::symbol("a"))
                .diagram_info()
                .wire_label(0),
            "W(a)"
        );
    }

    #[test]
    fn test_symbolic_exponents_render_by_name() {
        let w = ExpW::with_axis(Param::symbol("b"), Param::symbol("a"));
        assert_eq!(w.diagram_info().wire_label(0), "W(a)^b");

        let z = ExpZ::from_half_turns(Param::symbol("c"));
        assert_eq!(z.diagram_info().wire_label(0), "Z^c");

        let cz = Exp11::from_half_turns(Param::symbol("d"));
        let info = cz.diagram_info();
        assert_eq!(info.wire_symbols, vec!["@", "@"]);
        assert_eq!(info.wire_label(1), "@^d");
    }

    #[test]
    fn test_cz_diagram_chars() {
        let info = Exp11::new().diagram_info();
        assert_eq!(info.wire_label(0), "@");
        assert_eq!(
            Exp11::from_half_turns(0.5).diagram_info().wire_label(1),
            "@^0.5"
        );
    }

    #[test]
    fn test_measurement_diagram_chars() {
        let info = Measurement::new("m").diagram_info(3);
        assert_eq!(info.wire_symbols, vec!["M", "M", "M"]);
        assert_eq!(info.exponent, None);
    }
}
