#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use runekit_text::random::random_string_with;

#[derive(Debug, Arbitrary)]
struct Input {
    seed: u64,
    size: u16,
    charset: Vec<char>,
}

fuzz_target!(|input: Input| {
    let mut rng = SmallRng::seed_from_u64(input.seed);
    let size = usize::from(input.size % 512);
    match random_string_with(&mut rng, size, &input.charset) {
        Ok(out) => {
            assert_eq!(out.chars().count(), size);
            assert!(out.chars().all(|c| input.charset.contains(&c)));
        }
        Err(err) => {
            assert!(err.is_invalid_argument());
            assert!(size == 0 || input.charset.is_empty());
        }
    }
});
