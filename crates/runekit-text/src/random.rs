#![forbid(unsafe_code)]

//! Random string generation from a charset.
//!
//! Characters are sampled by slicing a 63-bit random draw into fixed-width
//! indices, so one call to the generator yields several output characters.
//! Indices that land in the padding between the charset length and the next
//! power of two are rejected, which keeps every charset member equally
//! likely.
//!
//! # Example
//! ```
//! use runekit_text::charset::ALPHANUMERIC_CHARSET;
//! use runekit_text::random::random_string;
//!
//! let token = random_string(16, &ALPHANUMERIC_CHARSET).unwrap();
//! assert_eq!(token.chars().count(), 16);
//! ```

use crate::error::{Result, StringError};
use rand::RngCore;

/// Largest value [`nearest_power_of_two`] will return.
pub const MAXIMUM_CAPACITY: isize = (isize::MAX >> 1) + 1;

/// Usable bits per draw; the top bit is discarded so draws are non-negative.
const RANDOM_BITS: u32 = 63;

/// Generate a `size`-character string from `charset` using the thread-local
/// generator.
///
/// # Errors
/// [`StringError::NonPositiveSize`] when `size` is zero and
/// [`StringError::EmptyCharset`] when `charset` is empty.
pub fn random_string(size: usize, charset: &[char]) -> Result<String> {
    random_string_with(&mut rand::rng(), size, charset)
}

/// Generate a `size`-character string from `charset` using `rng`.
///
/// # Errors
/// Same as [`random_string`].
pub fn random_string_with<R>(rng: &mut R, size: usize, charset: &[char]) -> Result<String>
where
    R: RngCore + ?Sized,
{
    if size == 0 {
        tracing::debug!(charset_len = charset.len(), "random_string rejected zero size");
        return Err(StringError::NonPositiveSize { op: "random_string" });
    }
    let Some(&first) = charset.first() else {
        tracing::debug!(size, "random_string rejected empty charset");
        return Err(StringError::EmptyCharset { op: "random_string" });
    };

    let mut out = String::with_capacity(size);

    // A one-element charset needs zero index bits; skip the generator.
    if charset.len() == 1 {
        out.extend(std::iter::repeat_n(first, size));
        return Ok(out);
    }

    let capacity = isize::try_from(charset.len()).unwrap_or(MAXIMUM_CAPACITY);
    let bits = nearest_power_of_two(capacity).trailing_zeros();
    let mask = (1u64 << bits) - 1;
    let max_draws = RANDOM_BITS / bits;

    let mut cache = draw(rng);
    let mut remaining = max_draws;
    let mut emitted = 0;
    while emitted < size {
        if remaining == 0 {
            cache = draw(rng);
            remaining = max_draws;
        }
        // `mask` is below the charset's padded length, so the cast is lossless.
        if let Some(&c) = charset.get((cache & mask) as usize) {
            out.push(c);
            emitted += 1;
        }
        cache >>= bits;
        remaining -= 1;
    }

    Ok(out)
}

/// Smallest power of two that is `>= capacity`.
///
/// Returns 1 for non-positive input and saturates at [`MAXIMUM_CAPACITY`].
#[must_use]
pub const fn nearest_power_of_two(capacity: isize) -> isize {
    if capacity <= 0 {
        return 1;
    }
    let mut n = capacity - 1;
    let mut shift = 1;
    while shift < isize::BITS {
        n |= n >> shift;
        shift <<= 1;
    }
    if n >= MAXIMUM_CAPACITY {
        return MAXIMUM_CAPACITY;
    }
    n + 1
}

#[inline]
fn draw<R: RngCore + ?Sized>(rng: &mut R) -> u64 {
    rng.next_u64() >> 1
}
