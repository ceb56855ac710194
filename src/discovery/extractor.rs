use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme, a dotted host of word characters, then a path/query/fragment that
/// must not end in `.` `,` or `:`.
///
/// This is a heuristic, not a URI grammar: a URL ending in `)` loses the
/// parenthesis, and punctuation inside the tail (`/a,b`) is kept.
const MARKDOWN_URL_PATTERN: &str = r"(?:http|https)://[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+[A-Za-z0-9_.,@?^=%&:/~+#-]*[A-Za-z0-9_@?^=%&/~+#-]";

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MARKDOWN_URL_PATTERN).expect("Failed to compile URL regex pattern"));

/// Every URL-shaped substring of `text`, in order of appearance.
///
/// Duplicates are kept and nothing is normalized.
pub fn extract_urls(text: &str) -> Vec<String> {
    if memmem::find(text.as_bytes(), b"http").is_none() {
        return Vec::new();
    }

    URL_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}
