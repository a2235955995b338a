//! Functional dependencies between attribute sets.

use core::fmt::{Display, Formatter, Result};

use crate::attribute::AttributeSet;

/// A functional dependency `determiners -> determined`.
///
/// Both sides are normalized attribute sets. Either side may be empty: an
/// empty determiner side is satisfied by every set, so such a dependency fires
/// on the first iteration of any closure computation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionalDependency {
    determiners: AttributeSet,
    determined: AttributeSet,
}

impl FunctionalDependency {
    /// Builds `from -> to`, one attribute per character of each group.
    ///
    /// ```rust
    /// use fdclosure_core::FunctionalDependency;
    ///
    /// let dependency = FunctionalDependency::new("cg", "H");
    /// assert_eq!(dependency.to_string(), "CG -> H");
    /// ```
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self::from_sets(AttributeSet::from_group(from), AttributeSet::from_group(to))
    }

    #[must_use]
    pub const fn from_sets(determiners: AttributeSet, determined: AttributeSet) -> Self {
        Self {
            determiners,
            determined,
        }
    }

    #[must_use]
    pub const fn determiners(&self) -> &AttributeSet {
        &self.determiners
    }

    #[must_use]
    pub const fn determined(&self) -> &AttributeSet {
        &self.determined
    }

    /// A dependency is trivial when it determines nothing beyond its own
    /// determiners.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.determined.is_subset(&self.determiners)
    }

    /// Returns `true` if the determiner side is contained in `attributes`.
    #[must_use]
    pub fn applies_to(&self, attributes: &AttributeSet) -> bool {
        self.determiners.is_subset(attributes)
    }
}

impl Display for FunctionalDependency {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if !self.determiners.is_empty() {
            write!(f, "{} ", self.determiners.to_group())?;
        }
        write!(f, "->")?;
        if !self.determined.is_empty() {
            write!(f, " {}", self.determined.to_group())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_both_sides() {
        let dependency = FunctionalDependency::new("ac", "hH");
        assert_eq!(dependency.determiners().to_group(), "AC");
        assert_eq!(dependency.determined().to_group(), "H");
    }

    #[test]
    fn test_empty_sides_do_not_panic() {
        let dependency = FunctionalDependency::new("", "");
        assert!(dependency.determiners().is_empty());
        assert!(dependency.determined().is_empty());
        assert!(dependency.is_trivial());
        assert!(dependency.applies_to(&AttributeSet::new()));
    }

    #[test]
    fn test_is_trivial() {
        assert!(FunctionalDependency::new("AB", "A").is_trivial());
        assert!(!FunctionalDependency::new("AB", "C").is_trivial());
    }

    #[test]
    fn test_applies_to() {
        let dependency = FunctionalDependency::new("CG", "H");
        assert!(dependency.applies_to(&AttributeSet::from_group("ABCG")));
        assert!(!dependency.applies_to(&AttributeSet::from_group("ABC")));
    }

    #[test]
    fn test_display() {
        assert_eq!(FunctionalDependency::new("i", "jm").to_string(), "I -> JM");
        assert_eq!(FunctionalDependency::new("", "Z").to_string(), "-> Z");
        assert_eq!(FunctionalDependency::new("A", "").to_string(), "A ->");
    }
}
