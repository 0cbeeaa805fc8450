use core::iter::FusedIterator;

use crate::{ExtendedItem, Window};

/// Number of back-to-back copies in an extended sequence.
pub const COPIES: usize = 3;

/// A read-only view of a sequence repeated [`COPIES`] times end to end.
///
/// Nothing is cloned: every extended index resolves to `items[index % items.len()]`. The middle
/// copy starts at `items.len()`, which is where a [`crate::LoopController`] keeps its position
/// between transitions.
#[derive(Debug)]
pub struct ExtendedSequence<'a, T> {
    items: &'a [T],
}

impl<T> Clone for ExtendedSequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ExtendedSequence<'_, T> {}

impl<'a, T> ExtendedSequence<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn source(&self) -> &'a [T] {
        self.items
    }

    pub fn source_len(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len().saturating_mul(COPIES)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ExtendedItem<'a, T>> {
        if index >= self.len() {
            return None;
        }
        let n = self.items.len();
        let source_index = index % n;
        Some(ExtendedItem {
            index,
            source_index,
            copy: index / n,
            item: &self.items[source_index],
        })
    }

    /// Iterates every card of all three copies, in render order.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            seq: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Iterates the cards inside `window` (clamped to the extended length).
    pub fn window(&self, window: Window) -> Iter<'a, T> {
        let back = window.end_index.min(self.len());
        Iter {
            seq: *self,
            front: window.start_index.min(back),
            back,
        }
    }
}

impl<'a, T> IntoIterator for ExtendedSequence<'a, T> {
    type Item = ExtendedItem<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct Iter<'a, T> {
    seq: ExtendedSequence<'a, T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ExtendedItem<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.saturating_sub(self.front);
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
