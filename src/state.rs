use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{Result, SimError};
use crate::index::bits_to_index;

/// Amplitude vector of an N-qubit register.
///
/// `data[i]` is the amplitude of basis state `i`, where bit `k` of `i` is the
/// value of qubit `k` (qubit 0 is the least-significant bit).
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub num_qubits: usize,
    pub data: Array1<Complex64>,
}

impl State {
    /// Wraps raw amplitudes, checking that there are exactly 2^N of them.
    pub fn new(num_qubits: usize, data: Array1<Complex64>) -> Result<Self> {
        let state = State { num_qubits, data };
        state.check_dim()?;
        Ok(state)
    }

    /// Checks that `data` holds exactly 2^N amplitudes.
    /// Every gate application calls this before touching amplitudes.
    pub fn check_dim(&self) -> Result<()> {
        let expected = 1usize << self.num_qubits;
        if self.data.len() != expected {
            return Err(SimError::DimensionMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Creates |0,0,...,0> (amplitude 1 at index 0, 0 elsewhere).
    pub fn zero_state(num_qubits: usize) -> Self {
        Self::basis_state(num_qubits, 0)
    }

    /// Creates the computational basis state with the given flat index.
    ///
    /// # Panics
    /// Panics if `index >= 2^num_qubits`.
    pub fn basis_state(num_qubits: usize, index: usize) -> Self {
        let total = 1usize << num_qubits;
        assert!(
            index < total,
            "basis index {} is out of range for {} qubits",
            index,
            num_qubits
        );
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        State { num_qubits, data }
    }

    /// Creates |b_0, b_1, ..., b_{n-1}> where `bits[k]` is the value of qubit `k`.
    pub fn product_state(bits: &[usize]) -> Self {
        for (loc, &b) in bits.iter().enumerate() {
            assert!(b <= 1, "bits[{}] = {} is not a qubit value", loc, b);
        }
        Self::basis_state(bits.len(), bits_to_index(bits))
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum()
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }
}
