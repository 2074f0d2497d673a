//! Line classification for the scan loop.

use std::sync::LazyLock;

use regex::Regex;

// `#` for Ruby, `//` for C#.
static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(?:#|/+)").unwrap());

static NATIVE_OPENER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:Given|When|Then|Before|After|AfterStep|Transform)[ (]").unwrap()
});

static ATTRIBUTE_OPENER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[(?:Given|When|Then|Before|After|AfterStep|Transform)").unwrap()
});

/// What a single source line means to the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#` or `//` comment, possibly indented.
    Comment,
    /// Ruby-style block opener (`Given /^...$/ do`).
    NativeOpener,
    /// C#-style attribute opener (`[Given(@"...")]`).
    AttributeOpener,
    Other,
}

pub fn classify_line(line: &str) -> LineKind {
    if COMMENT_REGEX.is_match(line) {
        LineKind::Comment
    } else if NATIVE_OPENER_REGEX.is_match(line) {
        LineKind::NativeOpener
    } else if ATTRIBUTE_OPENER_REGEX.is_match(line) {
        LineKind::AttributeOpener
    } else {
        LineKind::Other
    }
}
