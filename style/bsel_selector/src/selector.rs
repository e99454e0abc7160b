//! The selector string type and its validation.

use std::borrow::Cow;
use std::fmt;

/// An immutable CSS class selector.
///
/// A well-formed selector starts with the class marker `'.'` and contains no
/// empty class segment: `".row"` and `".btn.primary"` are well-formed,
/// `"row"`, `"."`, and `".btn."` are not.
///
/// Cheap to clone: constants borrow their static string, and only derived
/// selectors (from [`numbered`](Selector::numbered) or
/// [`and`](Selector::and)) own an allocation.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Selector(Cow<'static, str>);

impl Selector {
    /// Create a selector from a static string.
    ///
    /// The well-formedness check runs during `const` evaluation, so a
    /// malformed literal in a `const` item is a compile error rather than a
    /// runtime failure.
    #[inline]
    pub const fn from_static(selector: &'static str) -> Self {
        assert!(
            is_well_formed(selector.as_bytes()),
            "static selector must start with '.' and have non-empty class segments"
        );
        Selector(Cow::Borrowed(selector))
    }

    /// Create a selector from a runtime string, validating it.
    ///
    /// This is stricter than plain string concatenation: malformed input is
    /// rejected instead of silently producing a malformed selector.
    pub fn new(selector: impl Into<String>) -> Result<Self, SelectorError> {
        let selector = selector.into();
        validate(&selector)?;
        Ok(Selector(Cow::Owned(selector)))
    }

    /// The selector as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append the decimal representation of `n`, with no separator.
    ///
    /// `.span` numbered with `4` is `.span4`. Every `u32` value is accepted.
    pub fn numbered(&self, n: u32) -> Selector {
        Selector(Cow::Owned(format!("{}{n}", self.0)))
    }

    /// Compound selector matching elements carrying both selectors.
    ///
    /// `.btn` compounded with `.primary` is `.btn.primary`.
    pub fn and(&self, other: &Selector) -> Selector {
        Selector(Cow::Owned(format!("{}{}", self.0, other.0)))
    }
}

/// Well-formedness check shared by the `const` constructor and the runtime
/// validator: leading `'.'`, at least one class character, no empty segment.
///
/// Operates on bytes so it can run in `const` evaluation; `'.'` cannot occur
/// inside a multi-byte UTF-8 sequence, so byte inspection is sufficient.
const fn is_well_formed(bytes: &[u8]) -> bool {
    if bytes.len() < 2 || bytes[0] != b'.' {
        return false;
    }
    let mut i = 1;
    let mut prev_was_marker = true;
    while i < bytes.len() {
        if bytes[i] == b'.' {
            if prev_was_marker {
                return false;
            }
            prev_was_marker = true;
        } else {
            prev_was_marker = false;
        }
        i += 1;
    }
    !prev_was_marker
}

fn validate(selector: &str) -> Result<(), SelectorError> {
    if selector.is_empty() {
        return Err(SelectorError::Empty);
    }
    let Some(rest) = selector.strip_prefix('.') else {
        return Err(SelectorError::MissingClassMarker(selector.to_owned()));
    };
    if rest.split('.').any(str::is_empty) {
        return Err(SelectorError::EmptyClassName(selector.to_owned()));
    }
    Ok(())
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.0)
    }
}

impl AsRef<str> for Selector {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Selector {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Selector {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl TryFrom<String> for Selector {
    type Error = SelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Selector::new(value)
    }
}

impl TryFrom<&str> for Selector {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Selector::new(value)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> String {
        selector.0.into_owned()
    }
}

/// Error from validating a selector string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The string is empty.
    Empty,
    /// The string does not start with the class marker `'.'`.
    MissingClassMarker(String),
    /// The string contains an empty class segment (e.g. `"."` or `".btn."`).
    EmptyClassName(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "selector is empty"),
            Self::MissingClassMarker(s) => write!(f, "selector '{s}' does not start with '.'"),
            Self::EmptyClassName(s) => write!(f, "selector '{s}' has an empty class name"),
        }
    }
}

impl std::error::Error for SelectorError {}
