//! Text rendering of attribute sets, dependencies and closure reports.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result, Write};

use crate::attribute::AttributeSet;
use crate::closure::Closure;
use crate::dependency::FunctionalDependency;

/// Set notation: `{A, G, B}` in insertion order, `{}` when empty.
impl Display for AttributeSet {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{{")?;
        for (i, attribute) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{attribute}")?;
        }
        write!(f, "}}")
    }
}

/// `The results set is {A, G} after 0 iterations`, singular for 1.
#[must_use]
pub fn iteration_line(set: &AttributeSet, iteration: usize) -> String {
    let plural = if iteration == 1 { "" } else { "s" };
    alloc::format!("The results set is {set} after {iteration} iteration{plural}")
}

/// `The closure of AG is {A, G, B}`.
#[must_use]
pub fn closure_line(attributes: &str, set: &AttributeSet) -> String {
    alloc::format!("The closure of {attributes} is {set}")
}

impl Closure {
    /// One [`iteration_line`] per trace entry.
    #[must_use]
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace()
            .iter()
            .enumerate()
            .map(|(iteration, set)| iteration_line(set, iteration))
            .collect()
    }

    #[must_use]
    pub fn summary_line(&self) -> String {
        closure_line(self.attributes(), self.result())
    }

    /// The full textual report: the trace lines, a blank line, then the
    /// summary line. Always ends with a newline.
    #[must_use]
    pub fn report(&self) -> String {
        let mut output = String::new();
        for line in self.trace_lines() {
            let _ = writeln!(output, "{line}");
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", self.summary_line());
        output
    }
}

/// Format a dependency list in the text form read by `parse_dependencies`,
/// one `X -> Y` per line, with a trailing newline.
///
/// Groups containing whitespace, `-`, `>` or `/` are written as-is and will
/// not read back as the same dependency.
#[must_use]
pub fn format_dependencies(dependencies: &[FunctionalDependency]) -> String {
    let mut output = String::new();
    for dependency in dependencies {
        let _ = writeln!(output, "{dependency}");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::closure;

    #[test]
    fn test_set_notation() {
        assert_eq!(AttributeSet::from_group("AGB").to_string(), "{A, G, B}");
        assert_eq!(AttributeSet::from_group("x").to_string(), "{X}");
        assert_eq!(AttributeSet::new().to_string(), "{}");
    }

    #[test]
    fn test_iteration_line_pluralization() {
        let set = AttributeSet::from_group("AG");
        assert_eq!(
            iteration_line(&set, 0),
            "The results set is {A, G} after 0 iterations"
        );
        assert_eq!(
            iteration_line(&set, 1),
            "The results set is {A, G} after 1 iteration"
        );
        assert_eq!(
            iteration_line(&set, 2),
            "The results set is {A, G} after 2 iterations"
        );
    }

    #[test]
    fn test_report() {
        let dependencies = [
            FunctionalDependency::new("D", "B"),
            FunctionalDependency::new("B", "CE"),
        ];
        let result = closure("cd", &dependencies);
        assert_eq!(
            result.report(),
            "The results set is {C, D} after 0 iterations\n\
             The results set is {C, D, B} after 1 iteration\n\
             The results set is {C, D, B, E} after 2 iterations\n\
             \n\
             The closure of cd is {C, D, B, E}\n"
        );
    }

    #[test]
    fn test_format_dependencies() {
        let dependencies = [
            FunctionalDependency::new("ab", "c"),
            FunctionalDependency::new("", "Z"),
        ];
        assert_eq!(format_dependencies(&dependencies), "AB -> C\n-> Z\n");
    }

    #[test]
    fn test_format_dependencies_empty() {
        assert_eq!(format_dependencies(&[]), "");
    }
}
