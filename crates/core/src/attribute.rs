//! Attributes and insertion-ordered attribute sets.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter, Result};
use core::hash::{Hash, Hasher};

use hashbrown::HashSet;

/// A single attribute symbol, already case-folded to uppercase.
///
/// Attributes are only produced by normalizing an attribute group, see
/// [`Attribute::parse_group`]. No alphabet validation is performed: digits,
/// punctuation and whitespace are attributes like any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attribute(char);

impl Attribute {
    /// Splits an attribute group into attributes, one per character of the
    /// upper-cased group. Duplicates are kept; sets drop them.
    #[must_use]
    pub fn parse_group(group: &str) -> Vec<Self> {
        group.to_uppercase().chars().map(Self).collect()
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl core::fmt::Display for Attribute {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.0)
    }
}

/// An insertion-ordered set of unique attributes.
///
/// Iteration and rendering follow the order in which attributes were first
/// inserted. Membership is answered by a hash index, so `contains` is O(1)
/// amortized. Two sets are equal when they hold the same attributes,
/// regardless of order.
#[derive(Clone, Default)]
pub struct AttributeSet {
    order: Vec<Attribute>,
    index: HashSet<Attribute>,
}

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from an attribute group string, e.g. `"agA"` gives `{A, G}`.
    #[must_use]
    pub fn from_group(group: &str) -> Self {
        Attribute::parse_group(group).into_iter().collect()
    }

    /// Inserts `attribute`, returning `true` if it was not present.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        if self.index.insert(attribute) {
            self.order.push(attribute);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, attribute: &Attribute) -> bool {
        self.index.contains(attribute)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Attribute> {
        self.order.iter()
    }

    /// Returns `true` if every attribute of `self` is in `other`.
    /// The empty set is a subset of every set.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|attribute| other.contains(attribute))
    }

    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns a new set with the attributes of `self` followed by the ones of
    /// `other` that `self` lacks.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = self.clone();
        union.extend(other.iter().copied());
        union
    }

    /// Renders the set back to a group string in insertion order.
    #[must_use]
    pub fn to_group(&self) -> String {
        self.iter().map(|attribute| attribute.symbol()).collect()
    }
}

impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for AttributeSet {}

impl Hash for AttributeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // order-insensitive, consistent with `PartialEq`
        let mut sorted = self.order.clone();
        sorted.sort_unstable();
        sorted.hash(state);
    }
}

impl Debug for AttributeSet {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.debug_set().entries(self.order.iter()).finish()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::string::String;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Attribute, AttributeSet};

    impl Serialize for Attribute {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Attribute {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let group = String::deserialize(deserializer)?;
            match Self::parse_group(&group).as_slice() {
                [attribute] => Ok(*attribute),
                _ => Err(D::Error::custom(alloc::format!(
                    "expected a single attribute, found {group:?}"
                ))),
            }
        }
    }

    impl Serialize for AttributeSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_group())
        }
    }

    impl<'de> Deserialize<'de> for AttributeSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(|group| Self::from_group(&group))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_folds_case() {
        let attributes = Attribute::parse_group("aBc");
        let symbols: String = attributes.iter().map(|a| a.symbol()).collect();
        assert_eq!(symbols, "ABC");
    }

    #[test]
    fn test_from_group_dedups_and_keeps_order() {
        let set = AttributeSet::from_group("GAgA");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_group(), "GA");
    }

    #[test]
    fn test_empty_group() {
        let set = AttributeSet::from_group("");
        assert!(set.is_empty());
        assert!(set.is_subset(&AttributeSet::from_group("A")));
        assert!(set.is_subset(&AttributeSet::new()));
    }

    #[test]
    fn test_non_letters_are_attributes() {
        let set = AttributeSet::from_group("a1 -");
        assert_eq!(set.to_group(), "A1 -");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_subset_and_superset() {
        let small = AttributeSet::from_group("CG");
        let large = AttributeSet::from_group("ABCG");
        assert!(small.is_subset(&large));
        assert!(large.is_superset(&small));
        assert!(!large.is_subset(&small));
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(AttributeSet::from_group("ABC"), AttributeSet::from_group("cba"));
        assert_ne!(AttributeSet::from_group("AB"), AttributeSet::from_group("ABC"));
    }

    #[test]
    fn test_union_appends_missing() {
        let union = AttributeSet::from_group("AG").union(&AttributeSet::from_group("GBC"));
        assert_eq!(union.to_group(), "AGBC");
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = AttributeSet::new();
        let a = Attribute::parse_group("a")[0];
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.contains(&a));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut seen = HashSet::new();
        seen.insert(AttributeSet::from_group("AB"));
        assert!(seen.contains(&AttributeSet::from_group("BA")));
    }
}
