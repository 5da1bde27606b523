//! The arbitrary-length whole-number value type.

use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::ones::Ones;
use crate::word::{self, UINTMAX_BITS, WORD_BITS, Word, locate, words_needed};


/// Arbitrary-length, non-negative whole number.
///
/// Stored as a growable buffer of [`Word`]s, least-significant word first.
/// Bit `i` lives in word `i / WORD_BITS` at offset `i % WORD_BITS`; bits past
/// the end of the buffer read as zero. The empty buffer is zero.
///
/// Mutations never shrink the buffer, so high words may be zero. Every query,
/// along with `==`, `Hash` and `Debug`, looks only at the significant words,
/// which makes two values equal exactly when they have the same set bits.
///
/// The value also behaves as a set of bit indices: [`set`](Self::set),
/// [`reset_bit`](Self::reset_bit) and [`flip`](Self::flip) work on single
/// bits, their `_range` forms on inclusive ranges given in either order.
#[derive(Default, Clone)]
pub struct WholeNumber {
    pub(crate) words: Vec<Word>,
}

impl WholeNumber {
    /// The value zero. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Builds a value from the widest native unsigned integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_uintmax(mut v: u128) -> Self {
        let bits = UINTMAX_BITS - v.leading_zeros() as usize;
        let mut words = Vec::with_capacity(words_needed(bits));
        while v != 0 {
            words.push(v as Word);
            v >>= WORD_BITS;
        }
        Self { words }
    }

    /// Builds a value from a boolean mask: bit `i` is set wherever `bits[i]`.
    #[must_use]
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut words = vec![0; words_needed(bits.len())];
        fill_from_bits(&mut words, bits);
        Self::from_words(words)
    }

    /// Like [`from_bits`](Self::from_bits), reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the word buffer cannot
    /// be allocated.
    pub fn try_from_bits(bits: &[bool]) -> Result<Self> {
        let mut words = try_zeroed(words_needed(bits.len()))?;
        fill_from_bits(&mut words, bits);
        Ok(Self::from_words(words))
    }

    /// Builds a value with exactly the given bit indices set.
    ///
    /// Order and duplicates do not matter; an empty slice gives zero.
    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        let Some(&max) = indices.iter().max() else {
            return Self::new();
        };
        let mut words = vec![0; locate(max).0 + 1];
        fill_from_indices(&mut words, indices);
        Self { words }
    }

    /// Like [`from_indices`](Self::from_indices), reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the word buffer cannot
    /// be allocated.
    pub fn try_from_indices(indices: &[usize]) -> Result<Self> {
        let Some(&max) = indices.iter().max() else {
            return Ok(Self::new());
        };
        let mut words = try_zeroed(locate(max).0 + 1)?;
        fill_from_indices(&mut words, indices);
        Ok(Self { words })
    }

    fn from_words(mut words: Vec<Word>) -> Self {
        let len = significant_len(&words);
        words.truncate(len);
        Self { words }
    }

    // Whole-value replacement. Each builds the new value first and swaps it
    // in, so the receiver is never left half-written.

    pub fn assign(&mut self, other: &Self) {
        let mut temp = other.clone();
        self.swap(&mut temp);
    }

    pub fn assign_uintmax(&mut self, v: u128) {
        let mut temp = Self::from_uintmax(v);
        self.swap(&mut temp);
    }

    pub fn reconfigure_bits(&mut self, bits: &[bool]) {
        let mut temp = Self::from_bits(bits);
        self.swap(&mut temp);
    }

    pub fn reconfigure_indices(&mut self, indices: &[usize]) {
        let mut temp = Self::from_indices(indices);
        self.swap(&mut temp);
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the new buffer cannot
    /// be allocated; `self` is unchanged in that case.
    pub fn try_reconfigure_bits(&mut self, bits: &[bool]) -> Result<()> {
        let mut temp = Self::try_from_bits(bits)?;
        self.swap(&mut temp);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the new buffer cannot
    /// be allocated; `self` is unchanged in that case.
    pub fn try_reconfigure_indices(&mut self, indices: &[usize]) -> Result<()> {
        let mut temp = Self::try_from_indices(indices)?;
        self.swap(&mut temp);
        Ok(())
    }

    /// Exchanges buffers with `other` without copying any words.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.words, &mut other.words);
    }

    /// Drops zero high words and releases spare capacity.
    pub fn shrink_to_fit(&mut self) {
        let len = significant_len(&self.words);
        log::trace!(
            "shrinking word buffer from {} to {len} words",
            self.words.capacity()
        );
        self.words.truncate(len);
        self.words.shrink_to_fit();
    }

    // Views

    /// Significant words, least-significant first. Empty for zero.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words[..significant_len(&self.words)]
    }

    /// The low 128 bits as a native integer. Higher bits are silently
    /// dropped; compare [`length`](Self::length) against 128 to detect that.
    #[must_use]
    pub fn to_uintmax(&self) -> u128 {
        self.words
            .iter()
            .take(UINTMAX_BITS / WORD_BITS)
            .enumerate()
            .fold(0, |acc, (k, &w)| acc | u128::from(w) << (k * WORD_BITS))
    }

    /// Boolean mask of length [`length`](Self::length).
    #[must_use]
    pub fn to_bit_vector(&self) -> Vec<bool> {
        let mut bits = vec![false; self.length()];
        for i in self.iter_ones() {
            bits[i] = true;
        }
        bits
    }

    /// Indices of the set bits, ascending.
    #[must_use]
    pub fn to_bit_indices(&self) -> Vec<usize> {
        self.iter_ones().collect()
    }

    /// Iterates over the indices of the set bits, ascending.
    #[must_use]
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones::new(self.words())
    }

    // Inspection

    /// Index of the highest set bit plus one; zero for zero.
    #[must_use]
    pub fn length(&self) -> usize {
        match self.words().split_last() {
            Some((&top, rest)) => rest.len() * WORD_BITS + word::bit_length(top),
            None => 0,
        }
    }

    /// Number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `true` if any bit is set, i.e. the value is non-zero.
    #[must_use]
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    #[must_use]
    pub fn test(&self, i: usize) -> bool {
        let (w, offset) = locate(i);
        self.words
            .get(w)
            .is_some_and(|&word| word & word::bit(offset) != 0)
    }

    /// The bits in `from..=to`, shifted down so that `from` becomes bit 0.
    #[must_use]
    pub fn test_range(&self, from: usize, to: usize) -> Self {
        let (from, to) = word::ordered(from, to);
        self.iter_ones()
            .skip_while(|&i| i < from)
            .take_while(|&i| i <= to)
            .map(|i| i - from)
            .collect()
    }

    /// Mirrors the bits within the window `0..=cap`: bit `i` moves to
    /// `cap - i`. Bits above `cap` are dropped.
    #[must_use]
    pub fn reverse_within(&self, cap: usize) -> Self {
        self.iter_ones()
            .take_while(|&i| i <= cap)
            .map(|i| cap - i)
            .collect()
    }

    /// Mirrors the bits within the value's own length. Zero stays zero.
    #[must_use]
    pub fn reverse(&self) -> Self {
        match self.length() {
            0 => Self::new(),
            len => self.reverse_within(len - 1),
        }
    }

    // Logical negation

    /// Logical NOT: a non-zero value becomes zero, zero becomes one.
    ///
    /// This is not a bitwise complement, which would be unbounded.
    pub fn not_self(&mut self) {
        self.words = self.logical_not_words();
    }

    fn logical_not_words(&self) -> Vec<Word> {
        if self.any() { Vec::new() } else { vec![1] }
    }
}

fn significant_len(words: &[Word]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |top| top + 1)
}

fn try_zeroed(len: usize) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    words.try_reserve_exact(len).inspect_err(|err| {
        log::warn!("cannot allocate {len} words: {err}");
    })?;
    words.resize(len, 0);
    Ok(words)
}

fn fill_from_bits(words: &mut [Word], bits: &[bool]) {
    for (i, _) in bits.iter().enumerate().filter(|&(_, &b)| b) {
        let (w, offset) = locate(i);
        words[w] |= word::bit(offset);
    }
}

fn fill_from_indices(words: &mut [Word], indices: &[usize]) {
    for &i in indices {
        let (w, offset) = locate(i);
        words[w] |= word::bit(offset);
    }
}

impl PartialEq for WholeNumber {
    fn eq(&self, other: &Self) -> bool {
        self.words() == other.words()
    }
}

impl Eq for WholeNumber {}

impl Hash for WholeNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words().hash(state);
    }
}

impl std::fmt::Debug for WholeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WholeNumber")
            .field("words", &self.words())
            .finish()
    }
}

impl std::ops::Not for &WholeNumber {
    type Output = WholeNumber;

    fn not(self) -> WholeNumber {
        WholeNumber {
            words: self.logical_not_words(),
        }
    }
}

impl std::ops::Not for WholeNumber {
    type Output = WholeNumber;

    fn not(mut self) -> WholeNumber {
        self.not_self();
        self
    }
}

impl From<&WholeNumber> for bool {
    fn from(w: &WholeNumber) -> bool {
        w.any()
    }
}

impl From<WholeNumber> for bool {
    fn from(w: WholeNumber) -> bool {
        w.any()
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for WholeNumber {
                fn from(v: $t) -> Self {
                    Self::from_uintmax(u128::from(v))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl From<usize> for WholeNumber {
    fn from(v: usize) -> Self {
        Self::from_uintmax(v as u128)
    }
}

impl FromIterator<usize> for WholeNumber {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let indices: Vec<usize> = iter.into_iter().collect();
        Self::from_indices(&indices)
    }
}

impl FromIterator<bool> for WholeNumber {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        Self::from_bits(&bits)
    }
}

impl<'a> IntoIterator for &'a WholeNumber {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter_ones()
    }
}
