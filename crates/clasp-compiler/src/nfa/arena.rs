//! Position sets as ranges into an append-only arena.
//!
//! firstpos/lastpos values are computed for every subexpression, but each one
//! is only ever read, or merged into a new set. Storing them as ranges into a
//! single buffer avoids one heap allocation per node. The arena is cleared
//! at the start of every compile call, so `PosSet` handles never outlive the
//! call that produced them.

use std::cmp::Ordering;

use clasp_core::PositionId;

/// Handle to a sorted, duplicate-free run of positions in a `PositionSetArena`.
///
/// Layout: 8 bytes (4 + 4), align 4.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PosSet {
    start: u32,
    len: u32,
}

const _: () = assert!(size_of::<PosSet>() == 8);

impl PosSet {
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.start as usize + self.len as usize
    }
}

/// Append-only pool backing every `PosSet` of one compile call.
#[derive(Debug, Default)]
pub struct PositionSetArena {
    items: Vec<PositionId>,
}

impl PositionSetArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every set. Keeps the allocation for the next call.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of stored entries across all sets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, set: PosSet) -> &[PositionId] {
        &self.items[set.range()]
    }

    pub fn singleton(&mut self, position: PositionId) -> PosSet {
        let start = self.cursor();
        self.items.push(position);
        PosSet { start, len: 1 }
    }

    /// Sorted union of `a` and `b`, appended as a new set.
    ///
    /// Equal ids are kept once. An empty operand yields the other handle
    /// unchanged since sets are immutable once created.
    pub fn union(&mut self, a: PosSet, b: PosSet) -> PosSet {
        if a.is_empty() {
            return b;
        }
        if b.is_empty() {
            return a;
        }

        let start = self.cursor();
        self.items.reserve(a.len() + b.len());

        let (mut i, a_end) = (a.start as usize, a.range().end);
        let (mut j, b_end) = (b.start as usize, b.range().end);

        while i < a_end && j < b_end {
            let (x, y) = (self.items[i], self.items[j]);
            match x.cmp(&y) {
                Ordering::Less => {
                    self.items.push(x);
                    i += 1;
                }
                Ordering::Greater => {
                    self.items.push(y);
                    j += 1;
                }
                Ordering::Equal => {
                    self.items.push(x);
                    i += 1;
                    j += 1;
                }
            }
        }
        while i < a_end {
            let x = self.items[i];
            self.items.push(x);
            i += 1;
        }
        while j < b_end {
            let y = self.items[j];
            self.items.push(y);
            j += 1;
        }

        let len = self.items.len() as u32 - start;
        PosSet { start, len }
    }

    fn cursor(&self) -> u32 {
        u32::try_from(self.items.len()).expect("position set arena exceeds u32 range")
    }
}
