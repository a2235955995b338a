//! Attribute closure by fixed-point saturation.
//!
//! Given a starting attribute set `X` and dependencies `D`, the closure `X+`
//! is the largest set reachable from `X` by repeatedly adding the determined
//! side of every dependency whose determiner side is already contained in the
//! working set.
//!
//! # Algorithm
//!
//! 1. Normalize the starting group into the working set and record it as
//!    iteration 0 of the trace.
//! 2. **Saturation loop**:
//!    a. Visit every dependency in input order. A dependency qualifies when its
//!    determiners are a subset of the working set and it still has progress
//!    to contribute according to the [`ProgressTracking`] mode.
//!    b. Qualifying dependencies mark their contribution as processed
//!    immediately, so later dependencies in the same round see it.
//!    c. If nothing qualified, the fixpoint is reached -- break.
//!    d. Otherwise merge every contribution into the working set, record the
//!    new set in the trace and repeat.
//!
//! The working set only grows, and every productive round marks at least one
//! new attribute (or dependency) as processed, so the loop ends after at most
//! as many rounds as there are distinct determined attributes (or
//! dependencies).
//!
//! # Data flow
//!
//! ```text
//! group -> AttributeSet -> trace[0]
//!     -> loop { qualifying dependencies? -> merge -> trace[i] }
//!     -> Closure { result, trace }
//! ```

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::attribute::AttributeSet;
use crate::dependency::FunctionalDependency;

/// How the saturation loop decides that a dependency has nothing left to add.
///
/// The final closure is identical under both modes; only the shape of the
/// trace may differ.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProgressTracking {
    /// Keep the set of attributes already contributed by any dependency. A
    /// dependency is skipped once all of its determined attributes have been
    /// contributed, whichever dependency contributed them.
    #[default]
    Attribute,
    /// Keep the set of dependencies that already fired. Every dependency fires
    /// at most once, as soon as its determiners are satisfied.
    Dependency,
}

/// The outcome of one closure computation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    /// The starting group as given by the caller, before normalization.
    attributes: String,
    result: AttributeSet,
    /// Working set after each iteration; entry 0 is the normalized start.
    trace: Vec<AttributeSet>,
}

impl Closure {
    #[must_use]
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    #[must_use]
    pub const fn result(&self) -> &AttributeSet {
        &self.result
    }

    #[must_use]
    pub fn trace(&self) -> &[AttributeSet] {
        &self.trace
    }

    /// Number of productive rounds; the trace holds one more entry than this.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    #[must_use]
    pub fn into_result(self) -> AttributeSet {
        self.result
    }
}

/// Returns `true` if every attribute of `candidate_group`, after case folding,
/// is in `reference`. An empty group is a subset of every set.
#[must_use]
pub fn is_subset(candidate_group: &str, reference: &AttributeSet) -> bool {
    AttributeSet::from_group(candidate_group).is_subset(reference)
}

/// Computes the closure of `attributes` under `dependencies` with the default
/// [`ProgressTracking::Attribute`] mode.
///
/// ```rust
/// use fdclosure_core::{closure, AttributeSet, FunctionalDependency};
///
/// let dependencies = [
///     FunctionalDependency::new("A", "B"),
///     FunctionalDependency::new("A", "C"),
///     FunctionalDependency::new("CG", "H"),
///     FunctionalDependency::new("CG", "I"),
///     FunctionalDependency::new("B", "H"),
///     FunctionalDependency::new("I", "JM"),
/// ];
/// let result = closure("AG", &dependencies);
/// assert_eq!(result.result(), &AttributeSet::from_group("AGBCIHJM"));
/// ```
#[must_use]
pub fn closure(attributes: &str, dependencies: &[FunctionalDependency]) -> Closure {
    closure_with(attributes, dependencies, ProgressTracking::default())
}

/// Computes the closure of `attributes` under `dependencies`, tracking progress
/// with `tracking`.
#[must_use]
pub fn closure_with(
    attributes: &str,
    dependencies: &[FunctionalDependency],
    tracking: ProgressTracking,
) -> Closure {
    let trace = saturate(
        AttributeSet::from_group(attributes),
        dependencies,
        tracking,
    );
    let result = trace.last().cloned().unwrap_or_default();
    Closure {
        attributes: attributes.to_string(),
        result,
        trace,
    }
}

/// Computes the closure of an already normalized set.
///
/// The reported starting group is the set's group string.
#[must_use]
pub fn closure_of_set(
    attributes: &AttributeSet,
    dependencies: &[FunctionalDependency],
    tracking: ProgressTracking,
) -> Closure {
    let trace = saturate(attributes.clone(), dependencies, tracking);
    let result = trace.last().cloned().unwrap_or_default();
    Closure {
        attributes: attributes.to_group(),
        result,
        trace,
    }
}

/// Runs the saturation loop and returns the trace. The trace is never empty
/// and its last entry is the closure.
fn saturate(
    mut results: AttributeSet,
    dependencies: &[FunctionalDependency],
    tracking: ProgressTracking,
) -> Vec<AttributeSet> {
    tracing::debug!(
        attributes = %results,
        dependencies = dependencies.len(),
        ?tracking,
        "closure: starting saturation"
    );

    let mut trace = vec![results.clone()];
    let mut contributed = AttributeSet::new();
    let mut fired = vec![false; dependencies.len()];

    loop {
        let mut added: Vec<&AttributeSet> = Vec::new();

        for (index, dependency) in dependencies.iter().enumerate() {
            if !dependency.applies_to(&results) {
                continue;
            }
            let pending = match tracking {
                ProgressTracking::Attribute => !dependency.determined().is_subset(&contributed),
                ProgressTracking::Dependency => !fired[index],
            };
            if pending {
                contributed.extend(dependency.determined().iter().copied());
                fired[index] = true;
                added.push(dependency.determined());
            }
        }

        if added.is_empty() {
            tracing::debug!(
                iterations = trace.len() - 1,
                size = results.len(),
                "closure: saturation fixpoint reached"
            );
            break;
        }

        for determined in &added {
            results.extend(determined.iter().copied());
        }

        tracing::trace!(
            iteration = trace.len(),
            fired = added.len(),
            size = results.len(),
            "closure: saturation iteration"
        );

        trace.push(results.clone());
    }

    trace
}
