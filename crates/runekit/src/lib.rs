#![forbid(unsafe_code)]

//! runekit public facade crate.
//!
//! Re-exports the string helpers from `runekit-text` and, with the default
//! `simd` feature, capability detection from `runekit-simd`. Most users only
//! need the [`prelude`].

// --- Text re-exports -------------------------------------------------------

pub use runekit_text::charset::{
    ALL, ALL_CHARSET, ALPHANUMERIC, ALPHANUMERIC_CHARSET, LETTERS, LETTERS_CHARSET,
    LOWER_CASE_LETTERS, LOWER_CASE_LETTERS_CHARSET, NUMBERS, NUMBERS_CHARSET, SPECIAL,
    SPECIAL_CHARSET, UPPER_CASE_LETTERS, UPPER_CASE_LETTERS_CHARSET,
};
pub use runekit_text::{
    camel_case, capitalize, chunk_string, ellipsis, kebab_case, nearest_power_of_two, pascal_case,
    random_string, random_string_with, repair_utf8, rune_length, snake_case, substring,
    substring_lossy, substring_view, words,
};

// --- SIMD re-exports -------------------------------------------------------

#[cfg(feature = "simd")]
pub use runekit_simd::{Lane, LaneKind, SimdCaps, SimdConfig, lanes};

// --- Errors ---------------------------------------------------------------

pub use runekit_text::{Result, StringError as Error};

pub mod prelude {
    pub use crate::{
        Error, Result, camel_case, capitalize, chunk_string, ellipsis, kebab_case, pascal_case,
        random_string, rune_length, snake_case, substring, words,
    };

    #[cfg(feature = "simd")]
    pub use crate::{SimdCaps, SimdConfig, simd};

    pub use crate::text;
}

#[cfg(feature = "simd")]
pub use runekit_simd as simd;
pub use runekit_text as text;
