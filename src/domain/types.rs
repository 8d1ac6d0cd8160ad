//! Strongly-typed value objects used by the table query layer.
//!
//! These wrappers enforce basic invariants (non-empty path segments, trimmed
//! and lower-cased search terms) so that once a value reaches the engine it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// A dotted path contained an empty segment (`a..b`, `.a`, `a.`).
    #[error("invalid field path `{0}`: empty segment")]
    EmptyPathSegment(String),
    /// A dotted path started or ended with whitespace.
    #[error("invalid field path `{0}`: surrounding whitespace")]
    PathWhitespace(String),
}

/// Dotted path addressing a possibly nested field of a record, e.g.
/// `owner.fullName`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Tokenizes a dotted path, rejecting empty input, empty segments and
    /// surrounding whitespace.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if raw.trim() != raw {
            return Err(TypeConstraintError::PathWhitespace(raw));
        }

        let segments = raw
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(TypeConstraintError::EmptyPathSegment(raw.clone()))
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { raw, segments })
    }

    /// Path segments in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Borrow the original dotted form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.raw
    }
}

/// Trimmed, lower-cased, non-empty search needle.
///
/// Blank input has no `SearchTerm`: use [`SearchTerm::parse`] to get `None`
/// for "no filtering".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SearchTerm {
    display: String,
    needle: String,
}

impl SearchTerm {
    /// Validates that the trimmed input is non-empty.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let display = value.as_ref().trim();
        if display.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            display: display.to_string(),
            needle: display.to_lowercase(),
        })
    }

    /// Maps blank input to `None`.
    pub fn parse<S: AsRef<str>>(value: S) -> Option<Self> {
        Self::new(value).ok()
    }

    /// The trimmed term as typed by the user.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Lower-cased form used for matching.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive containment check against already lower-cased text.
    pub fn is_contained_in(&self, lowered: &str) -> bool {
        lowered.contains(&self.needle)
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl TryFrom<&str> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
