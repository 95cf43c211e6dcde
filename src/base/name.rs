//! Dotted type names and their simple-name keys.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;
use thiserror::Error;

/// Separator between namespace segments.
const SEPARATOR: char = '.';
/// Separator the binary form of a nested type uses (`Outer$Inner`).
const NESTED_SEPARATOR: char = '$';

/// Errors raised while constructing a [`QualifiedName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name text was empty.
    #[error("empty type name")]
    Empty,

    /// A segment between two separators was empty (`a..b`, `.a`, `a.`).
    #[error("empty segment in type name '{name}'")]
    EmptySegment { name: String },

    /// A segment is not a valid identifier.
    #[error("invalid segment '{segment}' in type name '{name}'")]
    InvalidSegment { name: String, segment: String },
}

/// The last segment of a qualified name.
///
/// Used as the key of the symbol table and the ignore set.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleName(SmolStr);

impl SimpleName {
    /// Wrap an identifier that is known to be a single segment.
    pub fn new(text: &str) -> Self {
        Self(SmolStr::new(text))
    }

    /// Get the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SimpleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SimpleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleName({})", self.0)
    }
}

impl fmt::Display for SimpleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dotted type name such as `java.util.List`.
///
/// A name with a single segment (`List`) is a *simple* name; anything longer
/// is qualified. The value is immutable and compares and sorts by its full
/// dotted text, ordinal and case-sensitive.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct QualifiedName {
    text: SmolStr,
    /// Byte offset where the last segment starts.
    simple_start: usize,
}

impl QualifiedName {
    /// Parse and validate a dotted name.
    ///
    /// Every segment must be a non-empty identifier. `$` is accepted inside
    /// segments so that binary nested names (`a.Outer$Inner`) round-trip.
    pub fn parse(text: &str) -> Result<Self, NameError> {
        if text.is_empty() {
            return Err(NameError::Empty);
        }
        for segment in text.split(SEPARATOR) {
            if segment.is_empty() {
                return Err(NameError::EmptySegment {
                    name: text.to_string(),
                });
            }
            if !is_identifier(segment) {
                return Err(NameError::InvalidSegment {
                    name: text.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(Self::from_trusted(text))
    }

    /// Build a name from text already known to be valid.
    pub(crate) fn from_trusted(text: &str) -> Self {
        let simple_start = text.rfind(SEPARATOR).map_or(0, |idx| idx + 1);
        Self {
            text: SmolStr::new(text),
            simple_start,
        }
    }

    /// Full dotted text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this name has no namespace segments.
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.simple_start == 0
    }

    /// The last segment as a string slice.
    #[inline]
    pub fn simple_str(&self) -> &str {
        &self.text[self.simple_start..]
    }

    /// The last segment, as a symbol-table key.
    pub fn simple_name(&self) -> SimpleName {
        SimpleName::new(self.simple_str())
    }

    /// Everything before the last segment, or `None` for a simple name.
    pub fn namespace(&self) -> Option<&str> {
        if self.is_simple() {
            None
        } else {
            Some(&self.text[..self.simple_start - 1])
        }
    }

    /// Whether the namespace of this name is exactly `namespace`.
    ///
    /// `java.lang.String` is in `java.lang`; `java.lang.reflect.Method` is not.
    pub fn is_in_namespace(&self, namespace: &QualifiedName) -> bool {
        self.namespace() == Some(namespace.as_str())
    }

    /// Iterate over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.text.split(SEPARATOR)
    }

    /// Source form of a binary nested name: `a.b.Outer$Inner` → `a.b.Outer.Inner`.
    ///
    /// Returns `None` when the name contains no nested separator, is simple,
    /// or would not form a valid name once split.
    pub fn nested_source_form(&self) -> Option<Self> {
        if self.is_simple() || !self.text.contains(NESTED_SEPARATOR) {
            return None;
        }
        let source = self.text.replace(NESTED_SEPARATOR, ".");
        Self::parse(&source).ok()
    }
}

impl From<SimpleName> for QualifiedName {
    fn from(name: SimpleName) -> Self {
        Self {
            text: name.0,
            simple_start: 0,
        }
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = NameError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = NameError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.text.to_string()
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.as_bytes().cmp(other.text.as_bytes())
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.text)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start_ok = first == '_' || first == NESTED_SEPARATOR || unicode_ident::is_xid_start(first);
    start_ok && chars.all(|c| c == NESTED_SEPARATOR || unicode_ident::is_xid_continue(c))
}
