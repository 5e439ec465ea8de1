#![forbid(unsafe_code)]

//! Predefined character sets for [`random_string`](crate::random::random_string).
//!
//! Each set is available as a `&'static str` and as a memoized `[char]`
//! slice. The slices are built on first use and never mutated.
//!
//! # Example
//! ```
//! use runekit_text::charset::{ALPHANUMERIC_CHARSET, NUMBERS};
//!
//! assert_eq!(ALPHANUMERIC_CHARSET.len(), 62);
//! assert_eq!(NUMBERS, "0123456789");
//! ```

use std::sync::LazyLock;

pub const LOWER_CASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_CASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?";
pub const ALL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;':\",./<>?";

/// Collect a charset string into a boxed slice of code points.
#[must_use]
pub fn to_charset(set: &str) -> Box<[char]> {
    set.chars().collect()
}

pub static LOWER_CASE_LETTERS_CHARSET: LazyLock<Box<[char]>> =
    LazyLock::new(|| to_charset(LOWER_CASE_LETTERS));
pub static UPPER_CASE_LETTERS_CHARSET: LazyLock<Box<[char]>> =
    LazyLock::new(|| to_charset(UPPER_CASE_LETTERS));
pub static LETTERS_CHARSET: LazyLock<Box<[char]>> = LazyLock::new(|| to_charset(LETTERS));
pub static NUMBERS_CHARSET: LazyLock<Box<[char]>> = LazyLock::new(|| to_charset(NUMBERS));
pub static ALPHANUMERIC_CHARSET: LazyLock<Box<[char]>> =
    LazyLock::new(|| to_charset(ALPHANUMERIC));
pub static SPECIAL_CHARSET: LazyLock<Box<[char]>> = LazyLock::new(|| to_charset(SPECIAL));
pub static ALL_CHARSET: LazyLock<Box<[char]>> = LazyLock::new(|| to_charset(ALL));
