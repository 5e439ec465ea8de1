//! Property-based invariant tests for the string helpers.
//!
//! 1. Random strings have the requested length and only charset members.
//! 2. Substring extraction matches a `Vec<char>` reference model.
//! 3. Substring output is always valid text and never contains NUL.
//! 4. Lossy repair is idempotent.
//! 5. Chunks re-join to the input and respect the size bound.
//! 6. Ellipsis output never exceeds the requested length.
//! 7. Case helpers never produce separators inside words.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use runekit_text::case::{kebab_case, snake_case, words};
use runekit_text::chunk::chunk_string;
use runekit_text::ellipsis::ellipsis;
use runekit_text::random::random_string_with;
use runekit_text::substring::{repair_utf8, substring, substring_lossy, substring_view};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Mix of ASCII, 2/3/4-byte code points and NUL.
fn arb_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            1 => Just('\0'),
            1 => Just('é'),
            1 => Just('中'),
            1 => Just('🦀'),
            1 => any::<char>(),
        ],
        0..max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_charset() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(any::<char>(), 1..100)
}

/// Offsets concentrated around the interesting range, plus extremes.
fn arb_offset() -> impl Strategy<Value = isize> {
    prop_oneof![
        8 => -40isize..40,
        1 => Just(isize::MIN),
        1 => Just(isize::MAX),
    ]
}

fn arb_length() -> impl Strategy<Value = usize> {
    prop_oneof![
        8 => 0usize..40,
        1 => Just(usize::MAX),
    ]
}

/// Straightforward model of the extraction policy over a char vector.
fn reference_substring(s: &str, offset: isize, length: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let count = chars.len() as i128;
    let offset = offset as i128;
    if length == 0 || offset >= count {
        return String::new();
    }
    let start = if offset >= 0 {
        offset
    } else {
        (count + offset).max(0)
    };
    let start = start as usize;
    let end = start.saturating_add(length).min(chars.len());
    chars[start..end].iter().filter(|&&c| c != '\0').collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Random strings
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn random_string_length_and_membership(
        seed in any::<u64>(),
        size in 1usize..200,
        charset in arb_charset(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = random_string_with(&mut rng, size, &charset).unwrap();
        prop_assert_eq!(out.chars().count(), size);
        prop_assert!(out.chars().all(|c| charset.contains(&c)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Substring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn substring_matches_reference(
        s in arb_text(40),
        offset in arb_offset(),
        length in arb_length(),
    ) {
        prop_assert_eq!(substring(&s, offset, length), reference_substring(&s, offset, length));
    }

    #[test]
    fn substring_never_contains_nul(
        s in arb_text(40),
        offset in arb_offset(),
        length in arb_length(),
    ) {
        let out = substring(&s, offset, length);
        prop_assert!(!out.contains('\0'));
        prop_assert!(out.chars().count() <= length);
    }

    #[test]
    fn substring_view_is_a_slice_of_input(
        s in arb_text(40),
        offset in arb_offset(),
        length in arb_length(),
    ) {
        let view = substring_view(&s, offset, length);
        prop_assert!(s.contains(view));
    }

    #[test]
    fn lossy_substring_on_arbitrary_bytes(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        offset in arb_offset(),
        length in arb_length(),
    ) {
        let out = substring_lossy(&bytes, offset, length);
        prop_assert!(std::str::from_utf8(out.as_bytes()).is_ok());
        prop_assert!(!out.contains('\0'));
    }

    #[test]
    fn repair_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let once = repair_utf8(&bytes).into_owned();
        let twice = repair_utf8(once.as_bytes()).into_owned();
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Chunking, ellipsis, case
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn chunks_rejoin_to_input(s in arb_text(60), size in 1usize..10) {
        let chunks = chunk_string(&s, size).unwrap();
        prop_assert_eq!(chunks.concat(), s.clone());
        for chunk in &chunks {
            let n = chunk.chars().count();
            prop_assert!(n >= 1 && n <= size);
        }
        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|c| c.chars().count() == size));
            prop_assert!(last.chars().count() <= size);
        }
    }

    #[test]
    fn ellipsis_respects_length(s in arb_text(60), length in 0usize..30) {
        let out = ellipsis(&s, length);
        let n = out.chars().count();
        prop_assert!(n <= length.max(3));
        if !out.ends_with("...") {
            prop_assert_eq!(out, s.trim());
        }
    }

    #[test]
    fn words_contain_only_letters_and_digits(s in "[a-zA-Z0-9 _.-]{0,40}") {
        for word in words(&s) {
            prop_assert!(!word.is_empty());
            prop_assert!(word.chars().all(char::is_alphanumeric));
        }
    }

    #[test]
    fn snake_and_kebab_agree(s in "[a-zA-Z0-9 _.-]{0,40}") {
        prop_assert_eq!(snake_case(&s).replace('_', "-"), kebab_case(&s));
    }
}
