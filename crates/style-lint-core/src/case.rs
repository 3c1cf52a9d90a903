//! Identifier case policies and validation.

use serde::{Deserialize, Serialize};

/// Required lexical casing convention for an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasePolicy {
    /// `fooBar`: lowercase (or `_`/`$`) first, words joined by case changes.
    CamelCase,
    /// `FooBar`: uppercase first, words joined by case changes.
    PascalCase,
    /// Any identifier is accepted.
    NoConstraint,
}

impl std::fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CamelCase => write!(f, "camelCase"),
            Self::PascalCase => write!(f, "PascalCase"),
            Self::NoConstraint => write!(f, "any case"),
        }
    }
}

impl CasePolicy {
    /// Converts `identifier` into this policy's casing, for rename suggestions.
    #[must_use]
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Self::CamelCase => to_camel_case(identifier),
            Self::PascalCase => to_pascal_case(identifier),
            Self::NoConstraint => identifier.to_string(),
        }
    }
}

/// Returns whether `identifier` conforms to `policy`.
///
/// Total over all strings: never panics, returns `false` for an empty
/// identifier under any constrained policy.
#[must_use]
pub fn validate(identifier: &str, policy: CasePolicy) -> bool {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return policy == CasePolicy::NoConstraint;
    };

    let head_ok = match policy {
        CasePolicy::NoConstraint => return true,
        CasePolicy::CamelCase => first.is_lowercase() || first == '_' || first == '$',
        CasePolicy::PascalCase => first.is_uppercase(),
    };

    head_ok && chars.all(is_word_char)
}

// `_` and `-` are word separators; only case changes may split words.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '$'
}

/// Splits an identifier into words on separators and case boundaries.
fn words(identifier: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in identifier.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_numeric()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_shouting(word: &str) -> bool {
    word.chars().all(|c| !c.is_lowercase())
}

fn capitalize(word: &str) -> String {
    let shouting = is_shouting(word);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if shouting => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts an identifier to `PascalCase` (e.g., `red` → `Red`, `user_id` → `UserId`).
#[must_use]
pub fn to_pascal_case(identifier: &str) -> String {
    words(identifier).iter().map(|w| capitalize(w)).collect()
}

/// Converts an identifier to `camelCase` (e.g., `UserId` → `userId`, `MAX` → `max`).
#[must_use]
pub fn to_camel_case(identifier: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(identifier).iter().enumerate() {
        if i == 0 {
            if is_shouting(word) {
                out.push_str(&word.to_lowercase());
            } else {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_lowercase());
                    out.extend(chars);
                }
            }
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}
