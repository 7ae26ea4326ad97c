// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Byte-wise multiplicative string hash used to key performance counters.
//!
//! The hash is the classic djb2 recurrence `h = h * 33 + byte` evaluated with
//! 32-bit wrapping arithmetic over the UTF-8 encoding of the input. Consumers
//! of the generated settings compute the same value over raw bytes, so the
//! input is never normalized or decoded into code points.

/// Initial accumulator value used when no explicit seed is supplied.
pub const DEFAULT_SEED: u32 = 5381;

/// Hashes `name` with [`DEFAULT_SEED`].
///
/// # Examples
///
/// ```
/// use rdoc_counters::{DEFAULT_SEED, strhash};
///
/// assert_eq!(strhash(""), DEFAULT_SEED);
/// assert_eq!(strhash("a"), 177_670);
/// ```
pub fn strhash(name: &str) -> u32 {
    strhash_bytes(name.as_bytes(), DEFAULT_SEED)
}

/// Hashes an optional string starting from `seed`.
///
/// An absent input leaves the accumulator untouched and yields `seed`.
pub fn strhash_with_seed(input: Option<&str>, seed: u32) -> u32 {
    match input {
        Some(value) => strhash_bytes(value.as_bytes(), seed),
        None => seed
    }
}

/// Folds `bytes` into the accumulator starting from `seed`.
///
/// Overflow wraps modulo 2^32.
pub fn strhash_bytes(bytes: &[u8], seed: u32) -> u32 {
    bytes.iter().fold(seed, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(byte))
    })
}
