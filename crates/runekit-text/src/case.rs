#![forbid(unsafe_code)]

//! Word splitting and case conversion.
//!
//! [`words`] finds word boundaries at case changes (`camelCase`), acronym
//! ends (`HTTPServer`), letter/digit transitions (`Int8Value`) and any
//! character that is neither a letter nor a decimal digit. The case helpers
//! are all built on top of it.
//!
//! # Example
//! ```
//! use runekit_text::case::{camel_case, kebab_case, pascal_case, snake_case, words};
//!
//! assert_eq!(words("Int8Value"), ["Int", "8", "Value"]);
//! assert_eq!(pascal_case("hello_world"), "HelloWorld");
//! assert_eq!(camel_case("hello world"), "helloWorld");
//! assert_eq!(kebab_case("HTTPServer"), "http-server");
//! assert_eq!(snake_case("XMLHttpRequest"), "xml_http_request");
//! ```

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static SPLIT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z])([A-Z0-9])|([a-zA-Z])([0-9])|([0-9])([a-zA-Z])|([A-Z])([A-Z])([a-z])")
        .expect("word boundary pattern is valid")
});

/// Second pass for digit/letter pairs the first pass consumed half of.
static SPLIT_NUMBER_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9])([a-zA-Z])").expect("digit/letter pattern is valid")
});

/// Anything that is not a letter (`L`) or decimal digit (`Nd`).
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]+").expect("separator pattern is valid"));

/// Split `s` into its words.
#[must_use]
pub fn words(s: &str) -> Vec<String> {
    let spaced =
        SPLIT_WORD.replace_all(s, "${1}${3}${5}${7} ${2}${4}${6}${8}${9}");
    // Int8Value => Int 8Value => Int 8 Value
    let spaced = SPLIT_NUMBER_LETTER.replace_all(&spaced, "${1} ${2}");

    let cleaned = NON_WORD.replace_all(&spaced, " ");
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Title-case every word: first letter in title case, the rest lower case.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for segment in s.split_word_bounds() {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                match to_titlecase(first) {
                    Some(title) => out.push(title),
                    None => out.extend(first.to_uppercase()),
                }
                out.extend(chars.flat_map(char::to_lowercase));
            }
            _ => out.push_str(segment),
        }
    }
    out
}

/// Titlecase form for the letters where it differs from upper case: the
/// Latin digraphs and Greek letters with iota subscript.
fn to_titlecase(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        // ᾀ..ᾇ -> ᾈ..ᾏ, same for the ᾐ and ᾠ rows.
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(u32::from(c) | 0x08),
        '\u{1FB3}' | '\u{1FBC}' => Some('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => Some('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => Some('\u{1FFC}'),
        _ => None,
    }
}

#[must_use]
pub fn pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

#[must_use]
pub fn camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                capitalize(w)
            }
        })
        .collect()
}

#[must_use]
pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

#[must_use]
pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

fn join_lower(s: &str, sep: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
