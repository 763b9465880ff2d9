use once_cell::sync::Lazy;
use regex::Regex;

static CJK_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{4E00}-\u{9FA5}]").expect("valid CJK pattern"));
static ASCII_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("valid word pattern"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Estimate the number of language-model tokens a text will consume.
///
/// Canonical formula: `ceil(1.5 * cjk_chars + 1.3 * ascii_words + 0.25 * ws_runs)`
/// where `cjk_chars` counts ideographs in U+4E00..=U+9FA5, `ascii_words`
/// counts maximal `[A-Za-z]+` runs, and `ws_runs` counts maximal whitespace
/// runs. Punctuation and digits carry no weight.
///
/// Pure and deterministic; empty text yields 0.
#[must_use]
pub fn estimate_tokens(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }

    let cjk_chars = CJK_CHAR.find_iter(text).count() as f64;
    let ascii_words = ASCII_WORD.find_iter(text).count() as f64;
    let ws_runs = WHITESPACE_RUN.find_iter(text).count() as f64;

    (cjk_chars * 1.5 + ascii_words * 1.3 + ws_runs * 0.25).ceil() as u64
}
