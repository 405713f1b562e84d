//! Edited address bookkeeping.
//!
//! A small interval set: sorted, disjoint half-open ranges. Insertion merges
//! overlapping and touching neighbours so `[0,1)` + `[1,2)` is stored as
//! `[0,2)`. Content deletion/insertion remaps the stored ranges into the new
//! address space so highlighting follows the bytes it marks.

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedRanges {
    ranges: Vec<Range<u64>>,
}

impl EditedRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Range<u64>] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Record `range`, merging with any overlapping or adjacent entries.
    pub fn insert(&mut self, range: Range<u64>) {
        if range.is_empty() {
            return;
        }
        let lo = self.ranges.partition_point(|r| r.end < range.start);
        let hi = self.ranges.partition_point(|r| r.start <= range.end);
        let mut merged = range;
        if lo < hi {
            merged.start = merged.start.min(self.ranges[lo].start);
            merged.end = merged.end.max(self.ranges[hi - 1].end);
        }
        self.ranges.splice(lo..hi, std::iter::once(merged));
    }

    pub fn contains(&self, address: u64) -> bool {
        let i = self.ranges.partition_point(|r| r.end <= address);
        self.ranges.get(i).is_some_and(|r| r.start <= address)
    }

    /// Remap after `count` bytes were removed at `start`. Addresses inside the
    /// removed span collapse onto `start`; addresses past it shift left.
    pub fn delete_adjust(&mut self, start: u64, count: u64) {
        if count == 0 || self.ranges.is_empty() {
            return;
        }
        let map = |x: u64| {
            if x <= start {
                x
            } else if x <= start.saturating_add(count) {
                start
            } else {
                x - count
            }
        };
        let old = std::mem::take(&mut self.ranges);
        for r in old {
            self.insert(map(r.start)..map(r.end));
        }
    }

    /// Remap after `count` bytes were inserted before `at`. A range that
    /// straddles `at` grows to cover the inserted bytes.
    pub fn insert_adjust(&mut self, at: u64, count: u64) {
        if count == 0 {
            return;
        }
        for r in &mut self.ranges {
            if r.start >= at {
                r.start += count;
            }
            if r.end > at {
                r.end += count;
            }
        }
    }
}
