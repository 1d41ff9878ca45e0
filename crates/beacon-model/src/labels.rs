//! Label names, label values, and label sets.
//!
//! Labels are the identity-bearing metadata of the model: an alert *is* its
//! label set. This module provides:
//! - [`LabelName`]: a validated label name
//! - [`LabelValue`]: a label value (any string)
//! - [`LabelSet`]: an order-irrelevant name/value mapping with deterministic
//!   iteration
//! - the reserved label name constants

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::fingerprint::Fingerprint;

/// The reserved label name holding the logical name of an alert.
pub const ALERT_NAME_LABEL: &str = "alertname";

/// The conventional label name carrying alert severity.
pub const SEVERITY_LABEL: &str = "severity";

/// A label value. Any string is a valid label value.
pub type LabelValue = String;

/// A validated label name.
///
/// Label names must:
/// - Be non-empty
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter or underscore
/// - Be at most 256 characters long
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelName(String);

impl LabelName {
    /// Maximum allowed length for a label name.
    pub const MAX_LENGTH: usize = 256;

    /// Creates a new validated label name.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidLabelName` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ModelError::InvalidLabelName { name });
        }

        Ok(Self(name))
    }

    /// Checks whether a string is a valid label name.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        if name.is_empty() || name.len() > Self::MAX_LENGTH {
            return false;
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }

        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Returns the label name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `LabelName` and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LabelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LabelName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LabelName {
    type Error = ModelError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<LabelName> for String {
    fn from(name: LabelName) -> Self {
        name.0
    }
}

/// An order-irrelevant mapping from label name to label value.
///
/// Two label sets are equal iff they contain exactly the same name/value
/// pairs, regardless of insertion order. Iteration is always in sorted name
/// order, which is what makes the derived [`fingerprint`](Self::fingerprint)
/// and the textual form deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeMap<LabelName, LabelValue>);

impl LabelSet {
    /// Creates an empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a label set from name/value pairs, validating each name.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidLabelName` for the first invalid name.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<LabelValue>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Ok((LabelName::new(name)?, value.into())))
            .collect()
    }

    /// Inserts a label pair, replacing any existing value for the name.
    pub fn insert(&mut self, name: LabelName, value: impl Into<LabelValue>) {
        self.0.insert(name, value.into());
    }

    /// Returns the value for a label name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if the set contains the given label name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of label pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set contains no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the label pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&LabelName, &LabelValue)> {
        self.0.iter()
    }

    /// Returns a new set containing the labels of both sets.
    ///
    /// On a name collision the value from `other` wins.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.0.clone();
        for (name, value) in &other.0 {
            merged.insert(name.clone(), value.clone());
        }
        Self(merged)
    }

    /// Returns the deterministic fingerprint of this label set.
    ///
    /// Equal sets always produce equal fingerprints; distinct sets produce
    /// distinct fingerprints with overwhelming probability.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}

impl FromIterator<(LabelName, LabelValue)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (LabelName, LabelValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = (&'a LabelName, &'a LabelValue);
    type IntoIter = std::collections::btree_map::Iter<'a, LabelName, LabelValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        write!(f, "}}")
    }
}
