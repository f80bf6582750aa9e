/// What: Remove a trailing `# comment` from a settings value.
///
/// Inputs:
/// - `s`: Raw value text after the `=` sign
///
/// Output:
/// - Value without the comment, trimmed.
///
/// Details:
/// - Only a `#` at the start or preceded by whitespace opens a comment, so URL
///   fragments such as `https://host/p#x` survive. `//` is never treated as a
///   comment because values are frequently URLs.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Parse a comma- or space-separated list of positive page sizes.
///
/// Inputs:
/// - `s`: List text such as `5, 10, 20`
///
/// Output:
/// - `Some(sizes)` when every token is a positive integer and at least one is
///   present; `None` otherwise.
pub(crate) fn parse_page_size_list(s: &str) -> Option<Vec<usize>> {
    let mut out = Vec::new();
    for tok in s.split(|c: char| c == ',' || c.is_whitespace()) {
        if tok.is_empty() {
            continue;
        }
        let n = tok.parse::<usize>().ok().filter(|n| *n > 0)?;
        out.push(n);
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Normalize a settings key: lowercase, with `.`, `-`, and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
