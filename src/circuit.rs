use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::apply::{apply, transform};
use crate::error::{Result, SimError};
use crate::gate::Gate;
use crate::index::basis_label;
use crate::measure::{probs, sample_index};
use crate::state::State;

/// Largest register the simulator accepts; the state vector holds 2^N amplitudes.
pub const MAX_QUBITS: usize = 20;

/// A quantum circuit: an ordered list of gates on a fixed-width qubit register.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit on `num_qubits` qubits.
    ///
    /// # Errors
    /// Returns `SimError::InvalidQubitCount` unless `1 <= num_qubits <= MAX_QUBITS`.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(SimError::InvalidQubitCount {
                count: num_qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(Circuit {
            num_qubits,
            gates: Vec::new(),
        })
    }

    /// Creates a circuit and appends `gates` in order, validating each one.
    ///
    /// # Example
    /// ```
    /// use qce_rs::{Circuit, Gate};
    /// let bell = Circuit::with_gates(2, vec![
    ///     Gate::H(0),
    ///     Gate::CNOT { control: 0, target: 1 },
    /// ]).unwrap();
    /// assert_eq!(bell.len(), 2);
    /// ```
    pub fn with_gates(num_qubits: usize, gates: Vec<Gate>) -> Result<Self> {
        let mut circuit = Circuit::new(num_qubits)?;
        for gate in gates {
            circuit.add_gate(gate)?;
        }
        Ok(circuit)
    }

    /// Appends a gate after checking its locations against the register.
    pub fn add_gate(&mut self, gate: Gate) -> Result<()> {
        gate.validate(self.num_qubits)?;
        debug!(%gate, position = self.gates.len(), "gate added");
        self.gates.push(gate);
        Ok(())
    }

    /// Removes every gate, keeping the register width.
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the state vector length, 2^N.
    pub fn total_dim(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Runs the circuit on |0...0⟩ and returns the final state.
    pub fn run(&self) -> State {
        info!(num_qubits = self.num_qubits, gates = self.gates.len(), "running circuit");
        // gates were validated against this register in add_gate
        self.gates
            .iter()
            .fold(State::zero_state(self.num_qubits), |state, gate| {
                transform(gate, &state)
            })
    }

    /// Runs the circuit on a caller-supplied initial state.
    pub fn run_from(&self, initial: &State) -> Result<State> {
        apply(self, initial)
    }

    /// Samples one basis state from `state`, returning its N-bit label.
    ///
    /// Uses inverse-CDF sampling over the squared magnitudes without
    /// renormalizing them first. A state with zero total probability yields
    /// the all-zero label.
    pub fn measure(&self, state: &State, rng: &mut impl Rng) -> Result<String> {
        if state.num_qubits != self.num_qubits {
            return Err(SimError::QubitCountMismatch {
                expected: self.num_qubits,
                actual: state.num_qubits,
            });
        }
        let index = sample_index(&probs(state), rng);
        Ok(basis_label(index, self.num_qubits))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nqubits: {}", self.num_qubits)?;
        for gate in &self.gates {
            writeln!(f, "  {}", gate)?;
        }
        Ok(())
    }
}
