// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bill of materials: panels grouped by size and labelled
//!
//! Two panels are the same size when their width and length agree at
//! 0.01 mm, the precision the partitioners work at. Sizes are labelled
//! A, B, C, ... from the largest area down, so the same multiset of sizes
//! always gets the same labels regardless of panel order.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::panel::Panel;

/// Quantised (width, length) used as a panel's size identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeKey {
    width: i64,
    length: i64,
}

impl SizeKey {
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            width: quantize(width),
            length: quantize(length),
        }
    }

    pub fn of(panel: &Panel) -> Self {
        Self::new(panel.width, panel.length)
    }

    pub fn width(&self) -> f64 {
        self.width as f64 / 100.0
    }

    pub fn length(&self) -> f64 {
        self.length as f64 / 100.0
    }

    fn area(&self) -> i128 {
        i128::from(self.width) * i128::from(self.length)
    }

    /// Largest area first, then longest
    fn label_order(&self, other: &Self) -> Ordering {
        other
            .area()
            .cmp(&self.area())
            .then_with(|| other.length.cmp(&self.length))
            .then_with(|| other.width.cmp(&self.width))
    }
}

#[inline]
fn quantize(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Label for the `index`-th size: A..Z, then AA, AB, ...
pub fn size_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// One labelled size in the bill of materials
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    pub label: String,
    /// Extent along L
    pub width: f64,
    /// Extent along W
    pub length: f64,
    pub quantity: u32,
}

impl CatalogEntry {
    /// Cut-sheet size text, length first: `2400 x 644.0`
    pub fn size_string(&self) -> String {
        format!("{:.0} x {:.1}", self.length, self.width)
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Labelled, deduplicated panel sizes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: FxHashMap<SizeKey, usize>,
}

impl Catalog {
    /// Group panels by size and assign labels
    pub fn build(panels: &[Panel]) -> Self {
        let mut counts: FxHashMap<SizeKey, u32> = FxHashMap::default();
        for panel in panels {
            *counts.entry(SizeKey::of(panel)).or_insert(0) += 1;
        }

        let mut sizes: Vec<(SizeKey, u32)> = counts.into_iter().collect();
        sizes.sort_by(|a, b| a.0.label_order(&b.0));

        let mut index = FxHashMap::default();
        let entries = sizes
            .into_iter()
            .enumerate()
            .map(|(i, (key, quantity))| {
                index.insert(key, i);
                CatalogEntry {
                    label: size_label(i),
                    width: key.width(),
                    length: key.length(),
                    quantity,
                }
            })
            .collect();

        Self { entries, index }
    }

    /// Entries in label order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    /// Entry describing this panel's size, if it was catalogued
    pub fn entry_for(&self, panel: &Panel) -> Option<&CatalogEntry> {
        self.index
            .get(&SizeKey::of(panel))
            .map(|&i| &self.entries[i])
    }

    /// Label for this panel's size, if it was catalogued
    pub fn label_for(&self, panel: &Panel) -> Option<&str> {
        self.entry_for(panel).map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pieces to cut across all sizes
    pub fn total_pieces(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }
}

/// Group panels by size into a labelled bill of materials
pub fn catalog(panels: &[Panel]) -> Vec<CatalogEntry> {
    Catalog::build(panels).into_entries()
}
