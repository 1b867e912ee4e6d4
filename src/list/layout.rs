//! `const fn` helpers for folding sizes and alignments over a set.

/// The larger of two values, usable in constant evaluation.
#[inline]
pub const fn max_of(a: usize, b: usize) -> usize {
    if a >= b {
        a
    } else {
        b
    }
}

/// Rounds `size` up to the next multiple of `align`.
///
/// `align` must be a power of two.
#[inline]
pub const fn round_up(size: usize, align: usize) -> usize {
    (size + align - 1) & !(align - 1)
}

/// Maximum over a slice of values; `0` for an empty slice.
pub const fn max_n(values: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < values.len() {
        max = max_of(max, values[i]);
        i += 1;
    }
    max
}

const _: () = {
    assert!(max_n(&[1, 8, 12]) == 12);
    assert!(max_n(&[12, 8, 1]) == 12);
    assert!(max_n(&[7]) == 7);
    assert!(round_up(3, 4) == 4);
    assert!(round_up(16, 16) == 16);
    assert!(round_up(0, 8) == 0);
};
