//! Ordering of parallel code/payload arrays.

use crate::ops::Code;

/// Reorder `codes` ascending and apply the same permutation to `payload`.
///
/// The sort is unstable: entries with equal codes end up in an unspecified
/// relative order. Runs in `O(n log n)`.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn sort_by_code<T: Copy>(codes: &mut [Code], payload: &mut [T]) {
    assert_eq!(
        codes.len(),
        payload.len(),
        "codes and payload must have equal length"
    );
    let mut pairs: Vec<(Code, T)> = codes.iter().copied().zip(payload.iter().copied()).collect();
    pairs.sort_unstable_by_key(|&(code, _)| code);
    for (i, (code, item)) in pairs.into_iter().enumerate() {
        codes[i] = code;
        payload[i] = item;
    }
}

/// Whether `codes` is non-decreasing.
pub fn is_sorted(codes: &[Code]) -> bool {
    codes.windows(2).all(|w| w[0] <= w[1])
}
