#![no_main]

use libfuzzer_sys::fuzz_target;
use runekit_text::case::{camel_case, capitalize, kebab_case, pascal_case, snake_case, words};
use runekit_text::chunk::chunk_string;
use runekit_text::ellipsis::ellipsis;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 1024 {
        return;
    }

    for word in words(text) {
        assert!(!word.is_empty());
        assert!(!word.chars().any(char::is_whitespace), "whitespace in {word:?}");
    }

    // Case helpers must never panic.
    let _ = capitalize(text);
    let _ = pascal_case(text);
    let _ = camel_case(text);
    assert!(!kebab_case(text).contains(' '));
    assert!(!snake_case(text).contains(' '));

    for size in [1, 3, 16] {
        let chunks = chunk_string(text, size).expect("size is non-zero");
        assert_eq!(chunks.concat(), text);
    }

    for length in [0, 3, 10, 80] {
        assert!(ellipsis(text, length).chars().count() <= length.max(3));
    }
});
