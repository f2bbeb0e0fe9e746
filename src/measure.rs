//! Measurement in the computational basis.
//!
//! - [`probs`] - probability weight of every basis state
//! - [`sample_index`] - inverse-CDF draw over unnormalized weights
//! - [`measure`] - one sampled N-bit label
//! - [`measure_shots`] - repeated independent draws
//! - [`counts`] - label histogram over many shots
//!
//! Sampling never collapses the state and always takes its randomness from
//! the caller, so seeded generators give reproducible outcomes.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{trace, warn};

use crate::index::basis_label;
use crate::state::State;

/// Squared magnitude `re² + im²` of every amplitude.
///
/// # Example
/// ```
/// use qce_rs::{State, measure::probs};
/// let p = probs(&State::zero_state(2));
/// assert_eq!(p, vec![1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn probs(state: &State) -> Vec<f64> {
    state.data.iter().map(|c| c.norm_sqr()).collect()
}

/// Draw an index with probability proportional to `probs[i]`.
///
/// The weights are not renormalized: a uniform `r` in `[0, total)` is walked
/// down the list until it drops to zero or below on an entry with positive
/// weight, so a zero-weight index is never drawn. If the total weight is zero
/// (or not finite) index 0 is returned.
pub fn sample_index(probs: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = probs.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        warn!(total, "measuring a state with no probability weight, returning index 0");
        return 0;
    }

    let mut r = rng.r#gen::<f64>() * total;
    trace!(r, total, "sampling basis state");
    for (i, &p) in probs.iter().enumerate() {
        r -= p;
        if p > 0.0 && r <= 0.0 {
            return i;
        }
    }

    // Rounding left a sliver of `r`; land on the last state that carries weight.
    probs.iter().rposition(|&p| p > 0.0).unwrap_or(0)
}

/// Sample one outcome and return its zero-padded N-bit label.
///
/// # Example
/// ```
/// use qce_rs::{State, measure::measure};
/// use rand::SeedableRng;
///
/// let state = State::basis_state(3, 5);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// assert_eq!(measure(&state, &mut rng), "101");
/// ```
pub fn measure(state: &State, rng: &mut impl Rng) -> String {
    basis_label(sample_index(&probs(state), rng), state.num_qubits)
}

/// Sample `nshots` independent outcomes, returned as basis indices.
pub fn measure_shots(state: &State, nshots: usize, rng: &mut impl Rng) -> Vec<usize> {
    let p = probs(state);
    (0..nshots).map(|_| sample_index(&p, rng)).collect()
}

/// Histogram of sampled labels over `nshots` draws, ordered by label.
pub fn counts(state: &State, nshots: usize, rng: &mut impl Rng) -> BTreeMap<String, usize> {
    let mut hist = BTreeMap::new();
    for index in measure_shots(state, nshots, rng) {
        *hist.entry(basis_label(index, state.num_qubits)).or_insert(0) += 1;
    }
    hist
}
