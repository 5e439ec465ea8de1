#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runekit_text::substring::{rune_length, substring, substring_lossy, substring_view};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    offset: isize,
    length: usize,
}

fuzz_target!(|input: Input<'_>| {
    // Lossy extraction must accept any bytes.
    let lossy = substring_lossy(input.bytes, input.offset, input.length);
    assert!(!lossy.contains('\0'));
    assert!(rune_length(&lossy) <= input.length);

    let Ok(text) = std::str::from_utf8(input.bytes) else {
        return;
    };

    // Valid input must agree with the lossy path.
    let out = substring(text, input.offset, input.length);
    assert_eq!(out, lossy);

    // The view is a slice on code-point boundaries.
    let view = substring_view(text, input.offset, input.length);
    assert!(text.contains(view));
    assert!(rune_length(view) <= input.length);
});
