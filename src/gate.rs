use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{Result, SimError};

/// Gates supported by the simulator, each carrying the qubits it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard: |0⟩ → (|0⟩+|1⟩)/√2, |1⟩ → (|0⟩-|1⟩)/√2.
    H(usize),
    X(usize),
    Y(usize),
    Z(usize),
    /// Phase gate: diag(1, i), a 90° rotation of |1⟩.
    S(usize),
    /// Identity; the location is validated but otherwise unused.
    I(usize),
    /// Controlled-NOT: flips `target` when `control` is |1⟩.
    CNOT { control: usize, target: usize },
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::CNOT { control, target } => {
                write!(f, "CNOT @ q[{}] -> q[{}]", control, target)
            }
            _ => write!(f, "{} @ q[{}]", self.name(), self.target()),
        }
    }
}

impl Gate {
    /// Short gate name, as used in menus and circuit listings.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "H",
            Gate::X(_) => "X",
            Gate::Y(_) => "Y",
            Gate::Z(_) => "Z",
            Gate::S(_) => "S",
            Gate::I(_) => "I",
            Gate::CNOT { .. } => "CNOT",
        }
    }

    /// The qubit the gate transforms.
    pub fn target(&self) -> usize {
        match *self {
            Gate::H(loc)
            | Gate::X(loc)
            | Gate::Y(loc)
            | Gate::Z(loc)
            | Gate::S(loc)
            | Gate::I(loc) => loc,
            Gate::CNOT { target, .. } => target,
        }
    }

    /// Returns all locations (control first for CNOT).
    pub fn locs(&self) -> Vec<usize> {
        match *self {
            Gate::CNOT { control, target } => vec![control, target],
            _ => vec![self.target()],
        }
    }

    /// Returns the number of qubits the gate acts on.
    pub fn num_sites(&self) -> usize {
        match self {
            Gate::CNOT { .. } => 2,
            _ => 1,
        }
    }

    /// Returns whether the gate is diagonal in the computational basis.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Gate::Z(_) | Gate::S(_) | Gate::I(_))
    }

    /// Returns whether applying the gate twice is the identity.
    pub fn is_self_inverse(&self) -> bool {
        !matches!(self, Gate::S(_))
    }

    /// Checks that every location is in `[0, num_qubits)` and that a
    /// controlled gate does not use the same qubit twice.
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        for loc in self.locs() {
            if loc >= num_qubits {
                return Err(SimError::LocOutOfRange { loc, num_qubits });
            }
        }
        if let Gate::CNOT { control, target } = *self {
            if control == target {
                return Err(SimError::OverlappingLocs { loc: control });
            }
        }
        Ok(())
    }

    /// Dense matrix of the gate on its own sites.
    ///
    /// Single-qubit gates give a 2x2 matrix. CNOT gives a 4x4 matrix whose
    /// local basis index is `2 * control_bit + target_bit`.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let neg_one = Complex64::new(-1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let neg_i = Complex64::new(0.0, -1.0);

        let entries = match self {
            Gate::X(_) => vec![zero, one, one, zero],
            Gate::Y(_) => vec![zero, neg_i, i, zero],
            Gate::Z(_) => vec![one, zero, zero, neg_one],
            Gate::S(_) => vec![one, zero, zero, i],
            Gate::I(_) => vec![one, zero, zero, one],
            Gate::H(_) => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                vec![s, s, s, -s]
            }
            Gate::CNOT { .. } => {
                // |00>->|00>, |01>->|01>, |10>->|11>, |11>->|10>
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one;
                m[[1, 1]] = one;
                m[[2, 3]] = one;
                m[[3, 2]] = one;
                return m;
            }
        };
        Array2::from_shape_vec((2, 2), entries).expect("2x2 gate has four entries")
    }
}
