//! `type` and `name` extraction from an opener line.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::step::StepType;

static LEADING_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)").unwrap());

/// `Given /^I am here$/ do` -> `Given`, `I am here`.
///
/// The `^`/`$` anchors are optional and the pattern body match is lazy, so the
/// first closing `/` (or `$/`) ends it.
static PATTERN_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Given|When|Then|Transform) *\(?/\^?(.*?)\$?/.*").unwrap()
});

/// Result of deriving a name from an opener line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedName {
    pub name: String,
    /// False when no `/.../` pattern literal was found and the line was kept.
    pub from_pattern: bool,
}

/// Leading alphabetic token of the line.
pub fn leading_token(line: &str) -> &str {
    LEADING_WORD_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Resolve the step type from the leading token, if it names one.
pub fn parse_step_type(line: &str) -> Option<StepType> {
    StepType::from_token(leading_token(line))
}

/// Keyword, a space, and the pattern body with anchors stripped.
///
/// Lines without a pattern literal (hooks, quoted C# patterns) are returned
/// unchanged apart from escaped-space substitution.
pub fn parse_step_name(line: &str) -> ExtractedName {
    let (name, from_pattern) = match PATTERN_NAME_REGEX.captures(line) {
        Some(caps) => (format!("{} {}", &caps[1], &caps[2]), true),
        None => (line.to_string(), false),
    };
    ExtractedName {
        name: name.replace("\\ ", " "),
        from_pattern,
    }
}

/// Strip attribute decoration: leading whitespace, then the first `@`, `[`
/// and `]`, each at most once.
pub fn clean_attribute(line: &str) -> String {
    let mut cleaned = line.trim_start().to_string();
    for decoration in ['@', '[', ']'] {
        if let Some(pos) = cleaned.find(decoration) {
            cleaned.remove(pos);
        }
    }
    cleaned
}
