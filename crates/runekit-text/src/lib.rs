#![forbid(unsafe_code)]

//! Unicode-aware string helpers.
//!
//! # Role in runekit
//! `runekit-text` holds every string operation in the workspace. Each one is
//! a stateless function: nothing is cached between calls apart from
//! immutable, lazily-built tables (charsets and word-boundary patterns).
//!
//! # Modules
//! - [`random`]: random strings sampled uniformly from a charset.
//! - [`substring`]: code-point indexed extraction with signed offsets.
//! - [`case`]: word splitting, capitalization, Pascal/camel/kebab/snake case.
//! - [`chunk`]: fixed-size code-point chunks.
//! - [`ellipsis`]: truncation with a trailing `"..."`.
//! - [`charset`]: predefined character sets.
//!
//! All counting is done in Unicode scalar values, so no helper ever splits a
//! multi-byte character.

pub mod case;
pub mod charset;
pub mod chunk;
pub mod ellipsis;
pub mod error;
pub mod random;
pub mod substring;

pub use case::{camel_case, capitalize, kebab_case, pascal_case, snake_case, words};
pub use chunk::chunk_string;
pub use ellipsis::ellipsis;
pub use error::{Result, StringError};
pub use random::{nearest_power_of_two, random_string, random_string_with};
pub use substring::{repair_utf8, rune_length, substring, substring_lossy, substring_view};
