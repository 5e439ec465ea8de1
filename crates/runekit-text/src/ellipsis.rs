#![forbid(unsafe_code)]

//! Ellipsis truncation measured in code points.

const ELLIPSIS: &str = "...";
const ELLIPSIS_LEN: usize = 3;

/// Trim `s` and, if it is longer than `length` code points, cut it so the
/// result including `"..."` is at most `length` code points.
///
/// When `length` is shorter than the ellipsis itself the result is just
/// `"..."`.
///
/// # Example
/// ```
/// use runekit_text::ellipsis::ellipsis;
///
/// assert_eq!(ellipsis("  hello world  ", 8), "hello...");
/// assert_eq!(ellipsis("hello", 10), "hello");
/// ```
#[must_use]
pub fn ellipsis(s: &str, length: usize) -> String {
    let trimmed = s.trim();
    let keep = length.saturating_sub(ELLIPSIS_LEN);

    let mut cut = 0;
    for (seen, (idx, _)) in trimmed.char_indices().enumerate() {
        if seen == keep {
            cut = idx;
        }
        if seen == length {
            let mut out = trimmed[..cut].trim_end().to_owned();
            out.push_str(ELLIPSIS);
            return out;
        }
    }
    trimmed.to_owned()
}
