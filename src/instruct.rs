//! Bit-indexed amplitude kernels for state vector simulation.
//!
//! Every kernel reads the input amplitudes and writes a freshly allocated
//! output vector, so permuting gates never read a slot they already
//! overwrote. Qubit `loc` is bit `loc` of the basis index.

use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::index::{bit_at, flip_bit, iter_pairs};

/// Apply a Hadamard on qubit `loc`.
///
/// For every pair `(i0, i1)` differing only in qubit `loc` (with `i0` holding 0):
/// - new[i0] = (a[i0] + a[i1]) / √2
/// - new[i1] = (a[i0] - a[i1]) / √2
///
/// # Example
/// ```
/// use ndarray::array;
/// use num_complex::Complex64;
/// use qce_rs::instruct::instruct_hadamard;
///
/// let zero = array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let plus = instruct_hadamard(&zero, 0);
/// assert!((plus[0].re - plus[1].re).abs() < 1e-15);
/// ```
pub fn instruct_hadamard(src: &Array1<Complex64>, loc: usize) -> Array1<Complex64> {
    let mut out = Array1::zeros(src.len());
    for i0 in iter_pairs(src.len(), loc) {
        let i1 = flip_bit(i0, loc);
        let (a0, a1) = (src[i0], src[i1]);
        out[i0] = (a0 + a1) * FRAC_1_SQRT_2;
        out[i1] = (a0 - a1) * FRAC_1_SQRT_2;
    }
    out
}

/// Move every amplitude to the index with qubit `loc` flipped, multiplying
/// by `phases[b]` where `b` is the value of qubit `loc` before the flip.
///
/// X is `phases = [1, 1]`; Y is `phases = [i, -i]`.
pub fn instruct_flip(
    src: &Array1<Complex64>,
    loc: usize,
    phases: [Complex64; 2],
) -> Array1<Complex64> {
    let mut out = Array1::zeros(src.len());
    for (i, &amp) in src.iter().enumerate() {
        out[flip_bit(i, loc)] = amp * phases[bit_at(i, loc)];
    }
    out
}

/// Multiply the amplitudes whose qubit `loc` is 1 by `phase`; the others are
/// copied unchanged.
///
/// Used for Z (`phase = -1`) and the phase gate (`phase = i`).
pub fn instruct_diagonal(
    src: &Array1<Complex64>,
    loc: usize,
    phase: Complex64,
) -> Array1<Complex64> {
    let mut out = src.clone();
    for (i, amp) in out.iter_mut().enumerate() {
        if bit_at(i, loc) == 1 {
            *amp = *amp * phase;
        }
    }
    out
}

/// Controlled-NOT: amplitudes whose `control` qubit is 1 move to the index
/// with `target` flipped; all others stay put.
///
/// The map is a permutation, so each output slot is written exactly once.
pub fn instruct_cnot(src: &Array1<Complex64>, control: usize, target: usize) -> Array1<Complex64> {
    debug_assert_ne!(control, target);
    let mut out = Array1::zeros(src.len());
    for (i, &amp) in src.iter().enumerate() {
        let dest = if bit_at(i, control) == 1 {
            flip_bit(i, target)
        } else {
            i
        };
        out[dest] = amp;
    }
    out
}
