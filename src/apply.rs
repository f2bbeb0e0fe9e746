use num_complex::Complex64;
use tracing::debug;

use crate::circuit::Circuit;
use crate::complex::{ONE, from_phase};
use crate::error::{Result, SimError};
use crate::gate::Gate;
use crate::instruct::{instruct_cnot, instruct_diagonal, instruct_flip, instruct_hadamard};
use crate::state::State;

/// Apply a single gate, returning a new state.
///
/// The gate's locations are checked against the state's qubit count before
/// any amplitude is touched.
///
/// # Example
/// ```
/// use qce_rs::{Gate, State, apply_gate};
///
/// let state = apply_gate(&Gate::X(0), &State::zero_state(2)).unwrap();
/// assert_eq!(state.data[1].re, 1.0);
/// ```
pub fn apply_gate(gate: &Gate, state: &State) -> Result<State> {
    gate.validate(state.num_qubits)?;
    state.check_dim()?;
    Ok(transform(gate, state))
}

/// Dispatch to the gate's kernel. Callers guarantee the locations are valid.
pub(crate) fn transform(gate: &Gate, state: &State) -> State {
    debug!(%gate, num_qubits = state.num_qubits, "applying gate");

    let src = &state.data;
    let data = match *gate {
        Gate::H(loc) => instruct_hadamard(src, loc),
        Gate::X(loc) => instruct_flip(src, loc, [ONE, ONE]),
        Gate::Y(loc) => instruct_flip(
            src,
            loc,
            [Complex64::new(0.0, 1.0), Complex64::new(0.0, -1.0)],
        ),
        Gate::Z(loc) => instruct_diagonal(src, loc, Complex64::new(-1.0, 0.0)),
        Gate::S(loc) => instruct_diagonal(src, loc, from_phase(std::f64::consts::FRAC_PI_2)),
        Gate::I(_) => src.clone(),
        Gate::CNOT { control, target } => instruct_cnot(src, control, target),
    };

    State {
        num_qubits: state.num_qubits,
        data,
    }
}

/// Apply every gate of a circuit to a state, in insertion order.
///
/// Each gate consumes the previous result and produces a brand-new vector;
/// the input state is left untouched.
pub fn apply(circuit: &Circuit, state: &State) -> Result<State> {
    if state.num_qubits != circuit.num_qubits() {
        return Err(SimError::QubitCountMismatch {
            expected: circuit.num_qubits(),
            actual: state.num_qubits,
        });
    }
    state.check_dim()?;

    circuit
        .gates()
        .iter()
        .try_fold(state.clone(), |current, gate| apply_gate(gate, &current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_gate_rejects_short_vector() {
        let state = State {
            num_qubits: 2,
            data: ndarray::Array1::from_elem(3, ONE),
        };
        let err = apply_gate(&Gate::X(1), &state).unwrap_err();
        assert_eq!(err, SimError::DimensionMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn test_apply_gate_rejects_out_of_range() {
        let state = State::zero_state(2);
        let err = apply_gate(&Gate::H(2), &state).unwrap_err();
        assert_eq!(err, SimError::LocOutOfRange { loc: 2, num_qubits: 2 });
    }

    #[test]
    fn test_apply_gate_rejects_overlapping_cnot() {
        let state = State::zero_state(2);
        let err = apply_gate(&Gate::CNOT { control: 1, target: 1 }, &state).unwrap_err();
        assert_eq!(err, SimError::OverlappingLocs { loc: 1 });
    }

    #[test]
    fn test_apply_rejects_mismatched_state() {
        let circuit = Circuit::new(3).unwrap();
        let err = apply(&circuit, &State::zero_state(2)).unwrap_err();
        assert_eq!(err, SimError::QubitCountMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_phase_gate_rotates_one() {
        let one = State::basis_state(1, 1);
        let out = apply_gate(&Gate::S(0), &one).unwrap();
        assert!(out.data[1].re.abs() < 1e-15);
        assert!((out.data[1].im - 1.0).abs() < 1e-15);
    }
}
