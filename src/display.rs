//! Human-readable rendering of amplitudes and states.

use num_complex::Complex64;

use crate::index::basis_label;
use crate::state::State;

/// Formats an amplitude as `<re><sign><im>i` with two decimals, e.g. `0.71-0.71i`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qce_rs::display::format_amplitude;
/// assert_eq!(format_amplitude(Complex64::new(0.0, -1.0)), "0.00-1.00i");
/// ```
pub fn format_amplitude(c: Complex64) -> String {
    format!("{:.2}{:+.2}i", c.re, c.im)
}

/// One `|label⟩: amplitude` line per basis state, in index order.
pub fn format_state(state: &State) -> String {
    state
        .data
        .iter()
        .enumerate()
        .map(|(i, &amp)| {
            format!(
                "|{}⟩: {}\n",
                basis_label(i, state.num_qubits),
                format_amplitude(amp)
            )
        })
        .collect()
}
