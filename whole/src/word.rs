//! Word type, bit addressing, and boundary masks shared by every operation.

/// Storage word. 32 bits by default; the `wide-words` feature selects 64.
#[cfg(not(feature = "wide-words"))]
pub type Word = u32;

/// Storage word. 32 bits by default; the `wide-words` feature selects 64.
#[cfg(feature = "wide-words")]
pub type Word = u64;

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

pub(crate) const BITS_LOG2: u32 = Word::BITS.trailing_zeros();
pub(crate) const BITS_MASK: usize = WORD_BITS - 1;

/// Number of bits in the widest native unsigned integer, the target of
/// `to_uintmax`.
pub(crate) const UINTMAX_BITS: usize = u128::BITS as usize;

const _: () = assert!(WORD_BITS.is_power_of_two());
const _: () = assert!(UINTMAX_BITS % WORD_BITS == 0);

/// Words needed to hold `n` bits.
#[inline]
pub(crate) const fn words_needed(n: usize) -> usize {
    n.div_ceil(WORD_BITS)
}

/// Splits a bit index into its word index and in-word offset.
#[inline]
pub(crate) const fn locate(i: usize) -> (usize, usize) {
    (i >> BITS_LOG2, i & BITS_MASK)
}

/// Single-bit mask for an in-word offset.
#[inline]
pub(crate) const fn bit(offset: usize) -> Word {
    1 << offset
}

/// Bits at or above `offset` within one word.
#[inline]
pub(crate) const fn low_mask(offset: usize) -> Word {
    Word::MAX << offset
}

/// Bits at or below `offset` within one word.
#[inline]
pub(crate) const fn high_mask(offset: usize) -> Word {
    Word::MAX >> (BITS_MASK - offset)
}

/// Bit length of a single word: index of its highest set bit plus one.
#[inline]
pub(crate) const fn bit_length(w: Word) -> usize {
    WORD_BITS - w.leading_zeros() as usize
}

/// Orders a pair of inclusive endpoints.
#[inline]
pub(crate) const fn ordered(from: usize, to: usize) -> (usize, usize) {
    if from > to { (to, from) } else { (from, to) }
}
