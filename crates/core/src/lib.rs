//! Attribute closure under functional dependencies.
//!
//! `fdclosure_core` computes the closure of an attribute set: the largest set
//! of attributes derivable from a starting set by repeatedly applying
//! functional dependencies whose determiner side is already present.
//!
//! Attributes are single symbols (conventionally uppercase letters). Groups of
//! attributes are written as strings, one attribute per character, and are
//! case-folded to uppercase on construction, so `"ag"` and `"AG"` denote the
//! same set.
//!
//! The closure is computed by a saturation loop that grows the working set
//! until a fixed point is reached. Every intermediate set is kept as a trace,
//! which is what the textual report of a computation is rendered from.
//!
//! # Entry point
//!
//! The main entry point is [`closure()`], which takes an attribute group and a
//! slice of [`FunctionalDependency`] values and returns a [`Closure`] holding
//! both the final set and the per-iteration trace.
//!
//! ```rust
//! use fdclosure_core::{closure, FunctionalDependency};
//!
//! let dependencies = [
//!     FunctionalDependency::new("A", "B"),
//!     FunctionalDependency::new("B", "C"),
//! ];
//! let result = closure("A", &dependencies);
//! assert_eq!(result.result().to_group(), "ABC");
//! assert_eq!(result.iterations(), 2);
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` on [`Attribute`],
//!   [`AttributeSet`], [`FunctionalDependency`], [`ProgressTracking`] and
//!   [`Closure`]. Attribute sets serialize as their group string.
//!
//! This crate is `no_std` compatible (requires `alloc`). The text format for
//! dependency lists lives in the separate `fdclosure_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod attribute;
pub mod closure;
pub mod dependency;
pub mod display;

pub use attribute::{Attribute, AttributeSet};
pub use closure::{closure, closure_of_set, closure_with, is_subset, Closure, ProgressTracking};
pub use dependency::FunctionalDependency;
pub use display::format_dependencies;
