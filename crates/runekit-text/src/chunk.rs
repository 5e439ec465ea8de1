#![forbid(unsafe_code)]

//! Code-point chunking.

use crate::error::{Result, StringError};

/// Split `s` into pieces of `size` code points; the last piece holds the
/// remainder.
///
/// Empty input produces no chunks, matching `[T]::chunks`.
///
/// # Errors
/// [`StringError::NonPositiveSize`] when `size` is zero.
///
/// # Example
/// ```
/// use runekit_text::chunk::chunk_string;
///
/// assert_eq!(chunk_string("12345", 2).unwrap(), ["12", "34", "5"]);
/// assert!(chunk_string("", 2).unwrap().is_empty());
/// ```
pub fn chunk_string(s: &str, size: usize) -> Result<Vec<&str>> {
    if size == 0 {
        tracing::debug!(input_len = s.len(), "chunk_string rejected zero size");
        return Err(StringError::NonPositiveSize { op: "chunk_string" });
    }
    if s.is_empty() {
        return Ok(Vec::new());
    }
    // Byte length bounds the code-point count from above.
    if size >= s.len() {
        return Ok(vec![s]);
    }

    let mut chunks = Vec::with_capacity((s.len() - 1) / size + 1);
    let mut current_len = 0;
    let mut current_start = 0;
    for (idx, _) in s.char_indices() {
        if current_len == size {
            chunks.push(&s[current_start..idx]);
            current_len = 0;
            current_start = idx;
        }
        current_len += 1;
    }
    chunks.push(&s[current_start..]);
    Ok(chunks)
}
