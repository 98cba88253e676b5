//! Token substitution and path splitting.
//!
//! Tokens have the form `[[identifier]]` and are looked up in a [`Replacements`]
//! table. There is no escaping: every `[[identifier]]` sequence is a token.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::constants::TYPE_VALUE_SEPARATOR;
use crate::replacements::Replacements;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([A-Za-z0-9_]+)\]\]").unwrap());

static WORD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());

/// How a resolved value is written in place of its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// The value is inserted as is.
    Verbatim,
    /// The value is converted with [`to_pascal_case`] first.
    Pascal,
}

/// Splits `s` on a literal separator, dropping empty segments.
pub fn split_string<'a>(s: &'a str, separator: &str) -> Vec<&'a str> {
    s.split(separator).filter(|part| !part.is_empty()).collect()
}

/// Splits a slash-delimited path or type value into its non-empty segments.
///
/// ```
/// use cpm::substitute::split_path;
///
/// assert_eq!(split_path("a//b/"), vec!["a", "b"]);
/// ```
pub fn split_path(s: &str) -> Vec<&str> {
    split_string(s, TYPE_VALUE_SEPARATOR)
}

/// Converts a `-`/`_` separated word list to PascalCase.
///
/// Only the first letter of each word is upcased, the rest is kept as written,
/// so `"task-list"` becomes `"TaskList"` and `"HTML_view"` becomes `"HTMLView"`.
pub fn to_pascal_case(s: &str) -> String {
    WORD_SEPARATOR_RE
        .split(s)
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Replaces every token in `s` with its value from `replacements`.
///
/// Tokens without a value, or with an empty one, are replaced by the empty string.
pub fn substitute(s: &str, replacements: &Replacements, case: Case) -> String {
    TOKEN_RE
        .replace_all(s, |caps: &Captures| match replacements.get(&caps[1]) {
            Some(value) if !value.is_empty() => match case {
                Case::Pascal => to_pascal_case(value),
                Case::Verbatim => value.to_string(),
            },
            _ => String::new(),
        })
        .into_owned()
}

/// Directory paths keep values verbatim.
pub fn substitute_dir_path(path: &str, replacements: &Replacements) -> String {
    substitute(path, replacements, Case::Verbatim)
}

pub fn substitute_file_path(path: &str, replacements: &Replacements) -> String {
    substitute(path, replacements, Case::Pascal)
}

pub fn substitute_file_content(content: &str, replacements: &Replacements) -> String {
    substitute(content, replacements, Case::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_string_drops_empty_segments() {
        assert_eq!(split_string("/a//b/", "/"), vec!["a", "b"]);
        assert!(split_string("///", "/").is_empty());
        assert!(split_string("", "/").is_empty());
    }

    #[test]
    fn test_pascal_case_words() {
        assert_eq!(to_pascal_case("task-list"), "TaskList");
        assert_eq!(to_pascal_case("user_profile-card"), "UserProfileCard");
        assert_eq!(to_pascal_case("--a__b-"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_pascal_case_keeps_tail() {
        assert_eq!(to_pascal_case("TaskList"), "TaskList");
        assert_eq!(to_pascal_case("taskList"), "TaskList");
        assert_eq!(to_pascal_case("HTML_view"), "HTMLView");
    }
}
