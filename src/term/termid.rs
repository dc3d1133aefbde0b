use core::fmt::Debug;
use std::borrow::Borrow;
use std::fmt::Display;

use crate::ROOT_SENTINEL;

/// Unique identifier of a [`GoTerm`](crate::GoTerm)
///
/// e.g.: `GO:0000280`
///
/// The identifier is not validated, any string is accepted. This allows
/// using the same type for the universal root sentinel (`all`) and for
/// fabricated ontologies in tests.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermId {
    inner: String,
}

impl TermId {
    /// Returns the identifier of the universal root sentinel
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::TermId;
    ///
    /// assert_eq!(TermId::root_sentinel().as_str(), "all");
    /// ```
    pub fn root_sentinel() -> Self {
        Self::from(ROOT_SENTINEL)
    }

    /// Returns `true` if the id is the universal root sentinel
    pub fn is_root_sentinel(&self) -> bool {
        self.inner == ROOT_SENTINEL
    }

    /// Returns the identifier as string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self {
            inner: s.trim().to_string(),
        }
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        if s.trim().len() == s.len() {
            Self { inner: s }
        } else {
            Self::from(s.as_str())
        }
    }
}

impl From<&TermId> for TermId {
    fn from(id: &TermId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Debug for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermId({})", self)
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for TermId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for TermId {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_trims() {
        let id = TermId::from(" GO:0000280\t");
        assert_eq!(id, "GO:0000280");
        assert_eq!(id.to_string(), "GO:0000280");
        assert_eq!(format!("{:?}", id), "TermId(GO:0000280)");
    }

    #[test]
    fn sentinel() {
        assert!(TermId::root_sentinel().is_root_sentinel());
        assert!(TermId::from("all").is_root_sentinel());
        assert!(!TermId::from("GO:0008150").is_root_sentinel());
    }

    #[test]
    fn ordering() {
        let mut ids = vec![TermId::from("GO:2"), TermId::from("GO:1")];
        ids.sort();
        assert_eq!(ids[0], "GO:1");
    }
}
