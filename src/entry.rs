// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Construction of individual performance counter records.

use serde::Serialize;

use crate::hash::strhash;

/// First fixed prefix shared by every counter record.
pub const PREFIX_0: u32 = 632_693_968;
/// Second fixed prefix shared by every counter record.
pub const PREFIX_1: u32 = 858_015_015;
/// Third fixed prefix shared by every counter record.
pub const PREFIX_2: u32 = 2_675_035_495;
/// Mask combined with the metric name hash to form the final element.
pub const XOR_MASK: u32 = 0x61B3_7980;

/// Four-element performance counter entry.
///
/// The first three elements are the fixed prefixes, the last one is derived
/// from the metric name. Serializes as a plain JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CounterRecord([u32; 4]);

impl CounterRecord {
    /// Returns the record elements in output order.
    pub fn values(&self) -> &[u32; 4] {
        &self.0
    }

    /// Returns the element derived from the metric name.
    pub fn name_key(&self) -> u32 {
        self.0[3]
    }
}

/// Builds the counter record for `metric_name`.
///
/// # Examples
///
/// ```
/// use rdoc_counters::{PREFIX_0, PREFIX_1, PREFIX_2, XOR_MASK, counter_entry, strhash};
///
/// let record = counter_entry("GPU Time");
/// assert_eq!(
///     record.values(),
///     &[PREFIX_0, PREFIX_1, PREFIX_2, XOR_MASK ^ strhash("GPU Time")]
/// );
/// ```
pub fn counter_entry(metric_name: &str) -> CounterRecord {
    CounterRecord([PREFIX_0, PREFIX_1, PREFIX_2, XOR_MASK ^ strhash(metric_name)])
}
