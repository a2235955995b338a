//! The dependency sets behind the `demo` command.

use fdclosure_core::FunctionalDependency;

/// `A -> B, A -> C, CG -> H, CG -> I, B -> H, I -> JM`.
#[must_use]
pub fn textbook() -> Vec<FunctionalDependency> {
    vec![
        FunctionalDependency::new("A", "B"),
        FunctionalDependency::new("A", "C"),
        FunctionalDependency::new("CG", "H"),
        FunctionalDependency::new("CG", "I"),
        FunctionalDependency::new("B", "H"),
        FunctionalDependency::new("I", "JM"),
    ]
}

/// `A -> BC, B -> CE, A -> E, AC -> H, D -> B`.
#[must_use]
pub fn five_rules() -> Vec<FunctionalDependency> {
    vec![
        FunctionalDependency::new("A", "BC"),
        FunctionalDependency::new("B", "CE"),
        FunctionalDependency::new("A", "E"),
        FunctionalDependency::new("AC", "H"),
        FunctionalDependency::new("D", "B"),
    ]
}

/// Starting group and dependencies for each demo run, in print order.
#[must_use]
pub fn demo_runs() -> Vec<(&'static str, Vec<FunctionalDependency>)> {
    vec![("AG", textbook()), ("CD", five_rules())]
}

#[cfg(test)]
mod tests {
    use fdclosure_core::closure;

    use super::*;

    #[test]
    fn test_demo_closures() {
        let closures: Vec<String> = demo_runs()
            .iter()
            .map(|(start, dependencies)| closure(start, dependencies).summary_line())
            .collect();
        assert_eq!(
            closures,
            [
                "The closure of AG is {A, G, B, C, H, I, J, M}",
                "The closure of CD is {C, D, B, E}",
            ]
        );
    }
}
