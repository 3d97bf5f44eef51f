//! Seed hashing.
//!
//! Turns a human-supplied seed into a 32-bit RNG seed with the classic
//! `hash * 31 + c` string hash over UTF-16 code units, so a seed string gives
//! the same draws here as in any JS page using the same fold.

use std::fmt::Display;

/// Hash the string form of `value` into a signed 32-bit integer.
///
/// Not cryptographic: collisions and reversibility are acceptable.
pub fn hash(value: impl Display) -> i32 {
    value
        .to_string()
        .encode_utf16()
        .fold(0i32, |acc, unit| {
            (acc << 5).wrapping_sub(acc).wrapping_add(i32::from(unit))
        })
}
