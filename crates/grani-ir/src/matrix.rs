//! Unitary matrix synthesis for the rotation gates.
//!
//! Matrices are only defined for fully concrete gates; synthesis on a gate
//! that still carries a placeholder fails with
//! [`GateError::NotConcrete`](crate::GateError::NotConcrete). Measurements
//! have no unitary representation at all.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{GateError, GateResult};
use crate::gate::{Exp11, ExpW, ExpZ, Gate};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A square complex matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    dim: usize,
    data: Vec<Complex64>,
}

impl Unitary {
    /// Build from row-major entries.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `dim * dim`.
    pub fn new(dim: usize, data: Vec<Complex64>) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "matrix length {} does not match {dim}x{dim}",
            data.len(),
        );
        Self { dim, data }
    }

    /// The `dim × dim` identity.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![ZERO; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = ONE;
        }
        Self { dim, data }
    }

    /// Side length of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// Row-major entries.
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Entry-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Unitary, tol: f64) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= tol)
    }
}

impl ExpZ {
    /// Unitary of the rotation: `diag(e^{-iπt/2}, e^{+iπt/2})`.
    pub fn matrix(&self) -> GateResult<Unitary> {
        let t = self.half_turns.try_f64()?;
        let phase = Complex64::from_polar(1.0, PI * t / 2.0);
        Ok(Unitary::new(2, vec![phase.conj(), ZERO, ZERO, phase]))
    }
}

impl ExpW {
    /// Unitary of the rotation, built by conjugating an X rotation with the
    /// axis phase: rotate the axis onto X, rotate, rotate back.
    pub fn matrix(&self) -> GateResult<Unitary> {
        let t = self.half_turns.try_f64()?;
        let a = self.axis_half_turns.try_f64()?;

        let c = Complex64::from_polar(1.0, PI * t);
        let plus = (ONE + c) / 2.0;
        let minus = (ONE - c) / 2.0;

        // Conjugation by diag(p̄, p) scales the off-diagonal entries only.
        let p = Complex64::from_polar(1.0, PI * a / 2.0);
        Ok(Unitary::new(
            2,
            vec![plus, minus * p.conj() * p.conj(), minus * p * p, plus],
        ))
    }
}

impl Exp11 {
    /// Unitary of the phasing: identity except for `e^{+iπt}` on `|11⟩`.
    pub fn matrix(&self) -> GateResult<Unitary> {
        let t = self.half_turns.try_f64()?;
        let mut u = Unitary::identity(4);
        u.data[15] = Complex64::from_polar(1.0, PI * t);
        Ok(u)
    }
}

impl Gate {
    /// Unitary of the gate.
    ///
    /// Fails with [`GateError::NotConcrete`] when a parameter is still
    /// symbolic, and with [`GateError::NonUnitary`] for measurements.
    pub fn matrix(&self) -> GateResult<Unitary> {
        match self {
            Gate::ExpZ(g) => g.matrix(),
            Gate::ExpW(g) => g.matrix(),
            Gate::Exp11(g) => g.matrix(),
            Gate::Measurement(_) => Err(GateError::NonUnitary { gate: self.name() }),
        }
    }
}
