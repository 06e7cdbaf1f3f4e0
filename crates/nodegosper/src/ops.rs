//! Code packing: three bits per level, coarsest level most significant.

use crate::hex::Digits;

/// A packed curve code. Only the low `3 * (level + 1)` bits are ever set.
pub type Code = u64;

/// Bits used to store one level.
pub const BITS_PER_LEVEL: u32 = 3;

/// Mask selecting one level's group.
pub const LEVEL_MASK: Code = 0b111;

/// Order in which per-level indices are written into a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accumulation {
    /// Each new group lands above the previous ones, so when digits arrive
    /// finest first the coarsest level ends up most significant.
    TopDown,
    /// The code is shifted left before each insertion, so the first digit
    /// ends up most significant.
    BottomUp,
}

/// Width in bits of a code at `level`.
#[inline]
pub const fn code_bits(level: u32) -> u32 {
    BITS_PER_LEVEL * (level + 1)
}

/// Mask covering every valid bit of a code at `level`.
#[inline]
pub const fn code_mask(level: u32) -> Code {
    match code_bits(level) {
        b if b >= Code::BITS => Code::MAX,
        b => (1 << b) - 1,
    }
}

/// Pack per-level indices, given in walk order, into a code.
pub fn pack(digits: &[u8], mode: Accumulation) -> Code {
    let mut code: Code = 0;
    for (l, &d) in digits.iter().enumerate() {
        let d = Code::from(d) & LEVEL_MASK;
        match mode {
            Accumulation::TopDown => code |= d << (BITS_PER_LEVEL as usize * l),
            Accumulation::BottomUp => code = (code << BITS_PER_LEVEL) | d,
        }
    }
    code
}

/// Pack indices that are already ordered coarsest first.
pub fn pack_coarsest_first(digits: impl IntoIterator<Item = u8>) -> Code {
    digits
        .into_iter()
        .fold(0, |code, d| (code << BITS_PER_LEVEL) | (Code::from(d) & LEVEL_MASK))
}

/// Index of the cell at `depth` levels below the top (0 = coarsest).
#[inline]
pub fn digit_at(code: Code, level: u32, depth: u32) -> u8 {
    debug_assert!(depth <= level, "depth {depth} below level {level}");
    ((code >> (BITS_PER_LEVEL * (level - depth))) & LEVEL_MASK) as u8
}

/// Unpack a code into its per-level indices, coarsest first.
pub fn digits(code: Code, level: u32) -> Digits {
    (0..=level).map(|depth| digit_at(code, level, depth)).collect()
}

/// Code of the ancestor `depth + 1` levels deep: the leading groups of
/// `code`, right-aligned.
pub fn prefix(code: Code, level: u32, depth: u32) -> Code {
    debug_assert!(depth <= level, "depth {depth} below level {level}");
    code >> (BITS_PER_LEVEL * (level - depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(code_bits(0), 3);
        assert_eq!(code_bits(20), 63);
        assert_eq!(code_mask(0), 7);
        assert_eq!(code_mask(2), 0o777);
        assert_eq!(code_mask(20), Code::MAX >> 1);
        assert_eq!(code_mask(21), Code::MAX);
    }

    #[test]
    fn accumulation_order() {
        // Finest first: 1, 2, 3.
        let walk = [1, 2, 3];
        assert_eq!(pack(&walk, Accumulation::TopDown), 0o321);
        assert_eq!(pack(&walk, Accumulation::BottomUp), 0o123);
        assert_eq!(pack(&[], Accumulation::TopDown), 0);
        assert_eq!(pack_coarsest_first([3, 2, 1]), 0o321);
    }

    #[test]
    fn unpack() {
        let code = 0o6054;
        assert_eq!(digits(code, 3).as_slice(), &[6, 0, 5, 4]);
        assert_eq!(digit_at(code, 3, 0), 6);
        assert_eq!(digit_at(code, 3, 3), 4);
        assert_eq!(pack_coarsest_first(digits(code, 3)), code);
        // Leading zero groups are still reported.
        assert_eq!(digits(0o5, 2).as_slice(), &[0, 0, 5]);
    }

    #[test]
    fn prefixes() {
        let code = 0o6054;
        assert_eq!(prefix(code, 3, 0), 0o6);
        assert_eq!(prefix(code, 3, 1), 0o60);
        assert_eq!(prefix(code, 3, 3), code);
    }
}
