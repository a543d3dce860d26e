//! Lazy inspection of the backing array
//!
//! Read-only; walks slots in array order (root first, leaves last).

use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// One backing-array slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Slot<'a, A> {
    /// Position in the backing array (0 = root)
    pub index: usize,

    /// Aggregate stored at that position
    pub value: &'a A,
}

/// Iterator returned by [`RangeAggregationTree::dump`](super::RangeAggregationTree::dump)
#[derive(Debug, Clone)]
pub struct Dump<'a, A> {
    slots: Enumerate<slice::Iter<'a, A>>,
}

impl<'a, A> Dump<'a, A> {
    pub(super) fn new(nodes: &'a [A]) -> Self {
        Self {
            slots: nodes.iter().enumerate(),
        }
    }
}

impl<'a, A> Iterator for Dump<'a, A> {
    type Item = Slot<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|(index, value)| Slot { index, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<A> DoubleEndedIterator for Dump<'_, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|(index, value)| Slot { index, value })
    }
}

impl<A> ExactSizeIterator for Dump<'_, A> {}

impl<A> FusedIterator for Dump<'_, A> {}
