//! Ready-made circuits for demos, tests and benchmarks.

use rand::Rng;

use crate::circuit::Circuit;
use crate::error::Result;
use crate::gate::Gate;

/// Ring entanglement layout: [(0,1), (1,2), ..., (n-2,n-1), (n-1,0)]
pub fn pair_ring(n: usize) -> Vec<(usize, usize)> {
    match n {
        0 | 1 => Vec::new(),
        2 => vec![(0, 1)],
        _ => (0..n).map(|i| (i, (i + 1) % n)).collect(),
    }
}

/// Bell pair preparation: H(0) then CNOT(0 -> 1), giving (|00⟩ + |11⟩)/√2.
pub fn bell_circuit() -> Result<Circuit> {
    Circuit::with_gates(2, vec![Gate::H(0), Gate::CNOT { control: 0, target: 1 }])
}

/// GHZ state on n qubits: H(0) followed by a CNOT chain 0->1->...->n-1.
pub fn ghz_circuit(n: usize) -> Result<Circuit> {
    let mut gates = vec![Gate::H(0)];
    gates.extend((1..n).map(|i| Gate::CNOT {
        control: i - 1,
        target: i,
    }));
    Circuit::with_gates(n, gates)
}

/// H on every qubit: the uniform superposition over all 2^n basis states.
pub fn uniform_circuit(n: usize) -> Result<Circuit> {
    Circuit::with_gates(n, (0..n).map(Gate::H).collect())
}

/// Random circuit of `depth` layers.
///
/// Each layer draws one single-qubit gate from {H, X, Y, Z, S, I} per qubit,
/// then applies CNOTs along `pair_ring(n)` on alternating pairs.
pub fn random_circuit(n: usize, depth: usize, rng: &mut impl Rng) -> Result<Circuit> {
    const SINGLE: [fn(usize) -> Gate; 6] = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::I];

    let pairs = pair_ring(n);
    let mut circuit = Circuit::new(n)?;
    for layer in 0..depth {
        for q in 0..n {
            let make = SINGLE[rng.gen_range(0..SINGLE.len())];
            circuit.add_gate(make(q))?;
        }
        for &(control, target) in pairs.iter().skip(layer % 2).step_by(2) {
            circuit.add_gate(Gate::CNOT { control, target })?;
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pair_ring() {
        assert!(pair_ring(1).is_empty());
        assert_eq!(pair_ring(2), vec![(0, 1)]);
        assert_eq!(pair_ring(3), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_ghz_gate_count() {
        let c = ghz_circuit(4).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.gates()[3], Gate::CNOT { control: 2, target: 3 });
    }

    #[test]
    fn test_random_circuit_is_valid() {
        let mut rng = StdRng::seed_from_u64(9);
        let c = random_circuit(3, 4, &mut rng).unwrap();
        assert!(c.len() >= 12);
        for gate in c.gates() {
            assert!(gate.validate(3).is_ok());
        }
    }
}
