//! Body capture for `end`-delimited (Ruby) step definitions.
//!
//! This is a textual heuristic, not a parser: keywords or `end` inside string
//! literals and trailing inline comments are not understood. A block opens on a
//! line that starts with one of the re-opening keywords, or on a line that ends
//! with a `do` block opener. It closes on a line that is only `end`.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::LineCursor;

static BLOCK_KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*,?\s*(?:Given|When|Then|Transform|while|case|if|do|begin)(?:\s|\(|$)")
        .unwrap()
});

static TRAILING_DO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdo\s*(?:\|[^|]*\|)?\s*(?:#.*)?$").unwrap());

static BLOCK_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*end\s*(?:#.*)?$").unwrap());

/// How one line moves the block balance: +1, -1 or 0.
pub fn balance_delta(line: &str) -> i32 {
    if line.trim_start().starts_with('#') {
        return 0;
    }
    if BLOCK_END_REGEX.is_match(line) {
        -1
    } else if BLOCK_KEYWORD_REGEX.is_match(line) || TRAILING_DO_REGEX.is_match(line) {
        1
    } else {
        0
    }
}

/// Consume lines into `code` until the balance returns to zero.
///
/// Returns `true` when the body closed, `false` when the cursor ran out first.
/// Either way everything consumed is kept.
pub fn capture_body(cursor: &mut LineCursor<'_>, code: &mut Vec<String>) -> bool {
    let mut balance: i32 = 0;
    while let Some(line) = cursor.next_line() {
        code.push(line.to_string());
        balance += balance_delta(line);
        if balance == 0 {
            return true;
        }
    }
    false
}
