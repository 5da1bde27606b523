//! Bit mutation: clearing, setting, toggling and splicing bits in place.
//!
//! Setting or toggling a bit past the end of the buffer grows the buffer to
//! exactly the word holding it; clearing never grows. The `try_` forms
//! reserve through [`Vec::try_reserve_exact`] and leave the value untouched
//! when that fails.

use crate::WholeNumber;
use crate::error::Result;
use crate::word::{self, Word, locate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub(crate) enum BitOperation {
    Reset,
    Set,
    Flip,
}

impl BitOperation {
    #[inline]
    const fn from_value(value: bool) -> Self {
        if value { Self::Set } else { Self::Reset }
    }

    /// Whether the operation can turn a zero bit into a one.
    #[inline]
    const fn grows(self) -> bool {
        !matches!(self, Self::Reset)
    }

    #[inline]
    fn apply(self, word: &mut Word, mask: Word) {
        match self {
            Self::Reset => *word &= !mask,
            Self::Set => *word |= mask,
            Self::Flip => *word ^= mask,
        }
    }
}

impl WholeNumber {
    /// Clears every bit and releases the buffer.
    pub fn reset(&mut self) {
        self.words = Vec::new();
    }

    pub fn reset_bit(&mut self, i: usize) {
        self.modify_bit(i, BitOperation::Reset);
    }

    /// Clears the bits in `from..=to`; the endpoints may come in either order.
    pub fn reset_range(&mut self, from: usize, to: usize) {
        self.modify_range(from, to, BitOperation::Reset);
    }

    pub fn set(&mut self, i: usize) {
        self.modify_bit(i, BitOperation::Set);
    }

    /// Sets the bits in `from..=to`; the endpoints may come in either order.
    pub fn set_range(&mut self, from: usize, to: usize) {
        self.modify_range(from, to, BitOperation::Set);
    }

    pub fn flip(&mut self, i: usize) {
        self.modify_bit(i, BitOperation::Flip);
    }

    /// Toggles the bits in `from..=to`; the endpoints may come in either order.
    pub fn flip_range(&mut self, from: usize, to: usize) {
        self.modify_range(from, to, BitOperation::Flip);
    }

    /// Sets bit `i` if `value`, clears it otherwise.
    pub fn bit_assign(&mut self, i: usize, value: bool) {
        self.modify_bit(i, BitOperation::from_value(value));
    }

    pub fn bit_assign_range(&mut self, from: usize, to: usize, value: bool) {
        self.modify_range(from, to, BitOperation::from_value(value));
    }

    /// Replaces the bits in `from..=to` with the low bits of `source`.
    ///
    /// Bit `k` of `source` lands on bit `from + k` for `k <= to - from`;
    /// higher bits of `source` are ignored, and bits of `self` outside the
    /// range are kept.
    pub fn bits_assign(&mut self, from: usize, to: usize, source: &Self) {
        let indices: Vec<usize> = self.spliced_indices(from, to, source).collect();
        self.reconfigure_indices(&indices);
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_set(&mut self, i: usize) -> Result<()> {
        self.try_modify_bit(i, BitOperation::Set)
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_set_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.try_modify_range(from, to, BitOperation::Set)
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_flip(&mut self, i: usize) -> Result<()> {
        self.try_modify_bit(i, BitOperation::Flip)
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_flip_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.try_modify_range(from, to, BitOperation::Flip)
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_bit_assign(&mut self, i: usize, value: bool) -> Result<()> {
        self.try_modify_bit(i, BitOperation::from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the buffer cannot
    /// grow; `self` is unchanged in that case.
    pub fn try_bit_assign_range(&mut self, from: usize, to: usize, value: bool) -> Result<()> {
        self.try_modify_range(from, to, BitOperation::from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`Error::Alloc`](crate::Error::Alloc) if the spliced index
    /// list or the rebuilt buffer cannot be allocated; `self` is unchanged in
    /// that case.
    pub fn try_bits_assign(&mut self, from: usize, to: usize, source: &Self) -> Result<()> {
        // Upper bound: pre and post come from self, new from source.
        let bound = self.count() + source.count();
        let mut indices = Vec::new();
        indices.try_reserve_exact(bound).inspect_err(|err| {
            log::warn!("cannot allocate {bound} spliced indices: {err}");
        })?;
        indices.extend(self.spliced_indices(from, to, source));
        self.try_reconfigure_indices(&indices)
    }

    fn spliced_indices<'a>(
        &'a self,
        from: usize,
        to: usize,
        source: &'a Self,
    ) -> impl Iterator<Item = usize> + 'a {
        let (from, to) = word::ordered(from, to);
        let pre = self.iter_ones().take_while(move |&i| i < from);
        let new = source
            .iter_ones()
            .take_while(move |&i| i <= to - from)
            .map(move |i| i + from);
        let post = self.iter_ones().skip_while(move |&i| i <= to);
        pre.chain(new).chain(post)
    }

    // Growth

    fn grow_to_fit(&mut self, bit: usize) {
        let needed = locate(bit).0 + 1;
        if needed > self.words.len() {
            log::trace!(
                "growing word buffer from {} to {needed} words",
                self.words.len()
            );
            self.words.resize(needed, 0);
        }
    }

    fn try_grow_to_fit(&mut self, bit: usize) -> Result<()> {
        let extra = (locate(bit).0 + 1).saturating_sub(self.words.len());
        if extra > 0 {
            self.words.try_reserve_exact(extra).inspect_err(|err| {
                log::warn!("cannot grow word buffer by {extra} words: {err}");
            })?;
            self.grow_to_fit(bit);
        }
        Ok(())
    }

    // Word-level mutation

    fn modify_bit(&mut self, i: usize, op: BitOperation) {
        if op.grows() {
            self.grow_to_fit(i);
        }
        self.change_bit(i, op);
    }

    fn try_modify_bit(&mut self, i: usize, op: BitOperation) -> Result<()> {
        if op.grows() {
            self.try_grow_to_fit(i)?;
        }
        self.change_bit(i, op);
        Ok(())
    }

    fn modify_range(&mut self, from: usize, to: usize, op: BitOperation) {
        let (from, to) = word::ordered(from, to);
        if op.grows() {
            self.grow_to_fit(to);
        }
        self.change_range(from, to, op);
    }

    fn try_modify_range(&mut self, from: usize, to: usize, op: BitOperation) -> Result<()> {
        let (from, to) = word::ordered(from, to);
        if op.grows() {
            self.try_grow_to_fit(to)?;
        }
        self.change_range(from, to, op);
        Ok(())
    }

    /// Applies `op` to `mask` within word `w`. Words past the buffer are
    /// zero already, which only a reset can reach.
    fn change_word(&mut self, w: usize, mask: Word, op: BitOperation) {
        match self.words.get_mut(w) {
            Some(word) => op.apply(word, mask),
            None => debug_assert_eq!(op, BitOperation::Reset),
        }
    }

    fn change_bit(&mut self, i: usize, op: BitOperation) {
        let (w, offset) = locate(i);
        self.change_word(w, word::bit(offset), op);
    }

    /// Requires `from <= to`, and the buffer to reach `to` unless `op` is a
    /// reset.
    fn change_range(&mut self, from: usize, to: usize, op: BitOperation) {
        let (from_word, from_offset) = locate(from);
        let (to_word, to_offset) = locate(to);
        let low = word::low_mask(from_offset);
        let high = word::high_mask(to_offset);

        if from_word == to_word {
            self.change_word(from_word, low & high, op);
            return;
        }

        self.change_word(from_word, low, op);
        let stop = to_word.min(self.words.len());
        if let Some(middle) = self.words.get_mut(from_word + 1..stop) {
            for word in middle {
                op.apply(word, Word::MAX);
            }
        }
        self.change_word(to_word, high, op);
    }
}
