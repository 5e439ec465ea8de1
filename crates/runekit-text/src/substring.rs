#![forbid(unsafe_code)]

//! Code-point indexed substring extraction.
//!
//! Offsets and lengths count Unicode scalar values, never bytes. A
//! non-negative offset counts from the start of the string and a negative
//! offset counts back from the end. Out-of-range arguments clamp instead of
//! failing:
//!
//! | Arguments | Result |
//! |---|---|
//! | `length == 0` or `offset >= count` | empty |
//! | `offset > 0` | skip `offset`, take up to `length` |
//! | `offset == 0` or `offset <= -count` | take up to `length` from the start |
//! | `-count < offset < 0` | start `-offset` before the end, take up to `length` |
//!
//! # Example
//! ```
//! use runekit_text::substring::substring;
//!
//! assert_eq!(substring("hello world", 6, 5), "world");
//! assert_eq!(substring("hello world", -5, 3), "wor");
//! assert_eq!(substring("hello", -100, 3), "hel");
//! ```

use std::borrow::Cow;

/// Extract up to `length` code points starting at `offset`.
///
/// The result never contains NUL characters.
#[must_use]
pub fn substring(s: &str, offset: isize, length: usize) -> String {
    strip_nul(substring_view(s, offset, length))
}

/// Like [`substring`], for input that may not be valid UTF-8.
///
/// Each invalid byte is replaced with U+FFFD first and counts as one code
/// point.
#[must_use]
pub fn substring_lossy(bytes: &[u8], offset: isize, length: usize) -> String {
    let text = repair_utf8(bytes);
    substring(&text, offset, length)
}

/// Borrowing form of [`substring`] that keeps NUL characters.
#[must_use]
pub fn substring_view(s: &str, offset: isize, length: usize) -> &str {
    if length == 0 {
        return "";
    }
    let count = rune_length(s);
    let back = offset.unsigned_abs();

    if offset >= 0 && back >= count {
        return "";
    }

    if offset > 0 {
        // offset < count, so the skip always lands on a boundary.
        return s
            .char_indices()
            .nth(back)
            .map_or("", |(start, _)| take_prefix(&s[start..], length));
    }

    if offset == 0 || back >= count {
        return take_prefix(s, length);
    }

    let start = nth_boundary_from_end(s, back);
    if back <= length {
        return &s[start..];
    }
    let end = nth_boundary_from_end(s, back - length);
    &s[start..end]
}

/// Decode `bytes` as UTF-8, replacing every byte of a malformed sequence
/// with its own U+FFFD.
///
/// Borrows when the input is already well formed, so repairing twice is the
/// same as repairing once.
#[must_use]
pub fn repair_utf8(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let mut repaired = String::with_capacity(bytes.len() + 8);
    for chunk in bytes.utf8_chunks() {
        repaired.push_str(chunk.valid());
        repaired.extend(std::iter::repeat_n(
            char::REPLACEMENT_CHARACTER,
            chunk.invalid().len(),
        ));
    }
    tracing::debug!(
        input_len = bytes.len(),
        repaired_len = repaired.len(),
        "repaired malformed UTF-8"
    );
    Cow::Owned(repaired)
}

/// Number of code points in `s`.
#[must_use]
pub fn rune_length(s: &str) -> usize {
    s.chars().count()
}

/// First `length` code points of `s`, or all of it.
fn take_prefix(s: &str, length: usize) -> &str {
    s.char_indices()
        .nth(length)
        .map_or(s, |(end, _)| &s[..end])
}

/// Byte index where the `n`th code point from the end begins (`n >= 1`).
fn nth_boundary_from_end(s: &str, n: usize) -> usize {
    s.char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(0, |(idx, _)| idx)
}

fn strip_nul(s: &str) -> String {
    if s.contains('\0') {
        s.replace('\0', "")
    } else {
        s.to_owned()
    }
}
