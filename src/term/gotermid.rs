use core::fmt::Debug;
use std::borrow::Borrow;
use std::fmt::Display;

/// The identifier of a [`crate::GoTerm`]
///
/// Identifiers are opaque strings, e.g. `GO:0005575`. The crate
/// does not require any specific format, so test ontologies can
/// use plain numbers as identifiers.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoTermId {
    inner: String,
}

impl GoTermId {
    /// Returns the identifier as `&str`
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::GoTermId;
    ///
    /// let id = GoTermId::from("GO:0005575");
    /// assert_eq!(id.as_str(), "GO:0005575");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for GoTermId {
    fn from(s: &str) -> Self {
        Self {
            inner: s.trim().to_string(),
        }
    }
}

impl From<String> for GoTermId {
    fn from(s: String) -> Self {
        if s.trim().len() == s.len() {
            Self { inner: s }
        } else {
            Self::from(s.as_str())
        }
    }
}

impl AsRef<str> for GoTermId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// `Hash` of a single-field struct is the `Hash` of its `String`,
// which is identical to `str`'s, so lookups by `&str` are consistent.
impl Borrow<str> for GoTermId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Debug for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTermId({})", self.inner)
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for GoTermId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for GoTermId {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}
