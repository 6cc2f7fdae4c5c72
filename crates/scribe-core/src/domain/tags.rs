use serde::{Deserialize, Serialize};

/// Insertion-ordered set of non-blank labels, used for tags and subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set from raw tokens. Tokens are trimmed; blank tokens and
    /// repeats are dropped.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            set.insert(token.as_ref());
        }
        set
    }

    /// Split a delimited list such as `"rust, web ,db"` into a set.
    pub fn parse_delimited(raw: &str) -> Self {
        Self::from_tokens(raw.trim().split(','))
    }

    /// Insert a single value. Returns true if it was not already present.
    pub fn insert(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Add every value of `other` that is not yet present. Existing values are
    /// never removed or reordered.
    pub fn union(&mut self, other: &TagSet) -> usize {
        other.iter().filter(|value| self.insert(value)).count()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// All-of containment: true when every value of `required` is present.
    pub fn contains_all(&self, required: &TagSet) -> bool {
        required.iter().all(|value| self.contains(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}
