//! Bit-level indexing utilities for qubit registers.
//!
//! A basis index `i` of an N-qubit register stores qubit `k` in bit `k`, so
//! qubit 0 is the least-significant bit. Labels print qubit N-1 first:
//! index 1 of a 3-qubit register is `"001"` and means qubit 0 is |1⟩.

/// Value (0 or 1) of qubit `loc` in basis index `index`.
///
/// # Example
/// ```
/// use qce_rs::index::bit_at;
/// // 6 = 0b110: qubit 0 is 0, qubits 1 and 2 are 1
/// assert_eq!(bit_at(6, 0), 0);
/// assert_eq!(bit_at(6, 1), 1);
/// assert_eq!(bit_at(6, 2), 1);
/// ```
#[inline]
pub fn bit_at(index: usize, loc: usize) -> usize {
    (index >> loc) & 1
}

/// Basis index with qubit `loc` flipped.
#[inline]
pub fn flip_bit(index: usize, loc: usize) -> usize {
    index ^ (1 << loc)
}

/// Zero-padded N-bit binary label of a basis index.
///
/// # Example
/// ```
/// use qce_rs::index::basis_label;
/// assert_eq!(basis_label(1, 3), "001");
/// assert_eq!(basis_label(6, 3), "110");
/// ```
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Decompose a basis index into per-qubit values; element `k` is qubit `k`.
///
/// # Example
/// ```
/// use qce_rs::index::index_to_bits;
/// assert_eq!(index_to_bits(6, 3), vec![0, 1, 1]);
/// ```
pub fn index_to_bits(index: usize, num_qubits: usize) -> Vec<usize> {
    (0..num_qubits).map(|loc| bit_at(index, loc)).collect()
}

/// Compose per-qubit values (element `k` is qubit `k`) into a basis index.
pub fn bits_to_index(bits: &[usize]) -> usize {
    debug_assert!(bits.iter().all(|&b| b <= 1), "qubit values must be 0 or 1");
    bits.iter()
        .enumerate()
        .fold(0, |acc, (loc, &b)| acc | (b << loc))
}

/// Iterate over the indices below `total_dim` whose qubit `loc` is 0.
///
/// Each yielded `i0` pairs with `flip_bit(i0, loc)`; together the pairs cover
/// every index of the register exactly once.
///
/// # Example
/// ```
/// use qce_rs::index::iter_pairs;
/// // 2 qubits, pairs along qubit 1: (0, 2) and (1, 3)
/// let lows: Vec<_> = iter_pairs(4, 1).collect();
/// assert_eq!(lows, vec![0, 1]);
/// ```
pub fn iter_pairs(total_dim: usize, loc: usize) -> impl Iterator<Item = usize> {
    (0..total_dim).filter(move |&i| bit_at(i, loc) == 0)
}
