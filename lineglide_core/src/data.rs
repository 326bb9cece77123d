// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed series data.

extern crate alloc;

use alloc::vec::Vec;

/// Stable identity for one data point.
///
/// Keys drive the keyed diff: an entry that reappears under the same key in a
/// later update keeps its on-screen node (and its in-flight animations), no
/// matter where in the list it moved. Keys must be unique within one update;
/// with duplicates, which node a key resolves to is unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(pub u64);

impl From<u64> for EntryKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One data point: a stable key and a scalar value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEntry {
    /// Stable identity used by the keyed diff.
    pub key: EntryKey,
    /// The plotted value.
    pub value: f64,
}

impl GraphEntry {
    /// Creates an entry.
    pub fn new(key: impl Into<EntryKey>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An ordered sequence of [`GraphEntry`].
///
/// Order defines X placement: entry `i` of `n` is drawn at the center of the
/// `i`-th of `n` equal horizontal slots. Value-based spacing is not supported.
/// An empty sequence renders nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGraphData {
    entries: Vec<GraphEntry>,
}

impl LineGraphData {
    /// Creates series data from entries in draw order.
    pub fn new(entries: Vec<GraphEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in draw order.
    pub fn entries(&self) -> &[GraphEntry] {
        &self.entries
    }

    /// Returns the entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&GraphEntry> {
        self.entries.get(index)
    }

    /// Returns `(min, max)` over all values, or `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.entries.iter();
        let first = iter.next()?.value;
        let mut min = first;
        let mut max = first;
        for entry in iter {
            min = min.min(entry.value);
            max = max.max(entry.value);
        }
        Some((min, max))
    }
}

impl FromIterator<GraphEntry> for LineGraphData {
    fn from_iter<T: IntoIterator<Item = GraphEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn value_range_spans_min_and_max() {
        let data = LineGraphData::new(vec![
            GraphEntry::new(0, 4.3),
            GraphEntry::new(1, 2.5),
            GraphEntry::new(2, 4.6),
        ]);
        assert_eq!(data.value_range(), Some((2.5, 4.6)));
    }

    #[test]
    fn value_range_of_empty_series_is_none() {
        assert_eq!(LineGraphData::default().value_range(), None);
    }

    #[test]
    fn value_range_of_flat_series_is_degenerate() {
        let data: LineGraphData = (0..3).map(|k| GraphEntry::new(k, 1.7)).collect();
        assert_eq!(data.value_range(), Some((1.7, 1.7)));
    }
}
