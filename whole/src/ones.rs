//! Iteration over the indices of set bits.

use std::iter::FusedIterator;

use crate::word::{WORD_BITS, Word};

/// Iterator over the set-bit indices of a [`WholeNumber`](crate::WholeNumber),
/// in ascending order.
///
/// Created by [`WholeNumber::iter_ones`](crate::WholeNumber::iter_ones).
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    index: usize,
    current: Word,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            index: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            if self.index + 1 >= self.words.len() {
                return None;
            }
            self.index += 1;
            self.current = self.words[self.index];
        }
        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1; // clear lowest set bit
        Some(self.index * WORD_BITS + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let here = self.current.count_ones() as usize;
        let rest = self.words.len().saturating_sub(self.index + 1);
        (here, Some(here + rest * WORD_BITS))
    }
}

impl FusedIterator for Ones<'_> {}
