//! Shared test utilities for qce-rs integration tests.

use num_complex::Complex64;

use qce_rs::gate::Gate;
use qce_rs::index::bit_at;
use qce_rs::state::State;

pub const ATOL: f64 = 1e-10;

#[allow(dead_code)]
pub fn assert_state_approx(result: &State, expected: &[Complex64]) {
    assert_eq!(result.data.len(), expected.len());
    for (i, (r, e)) in result.data.iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "State mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}

#[allow(dead_code)]
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Reference application through the gate's dense matrix.
///
/// Each output amplitude sums matrix entries over the values of the gate's
/// own qubits, holding every other qubit fixed.
#[allow(dead_code)]
pub fn dense_apply(gate: &Gate, state: &State) -> Vec<Complex64> {
    let m = gate.matrix();
    let locs = gate.locs();
    let dim = state.total_dim();

    // local index: first loc is the most significant local bit
    let local = |i: usize| -> usize {
        locs.iter().fold(0, |acc, &loc| (acc << 1) | bit_at(i, loc))
    };
    let with_local = |i: usize, l: usize| -> usize {
        let k = locs.len();
        locs.iter().enumerate().fold(i, |acc, (pos, &loc)| {
            let bit = (l >> (k - 1 - pos)) & 1;
            (acc & !(1 << loc)) | (bit << loc)
        })
    };

    (0..dim)
        .map(|i| {
            let row = local(i);
            (0..m.ncols())
                .map(|col| m[[row, col]] * state.data[with_local(i, col)])
                .sum::<Complex64>()
        })
        .collect()
}
