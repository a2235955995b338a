use fdclosure_core::{closure_with, Closure, FunctionalDependency, ProgressTracking};
use rand::distr::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, TypedBuilder)]
pub struct ProblemParams {
    pub id: u64,
    /// Alphabet size; attributes are the first `n_attribute` uppercase letters.
    pub n_attribute: u64,
    pub n_dependency: u64,
    /// Largest number of attributes on either side of a dependency, and in
    /// the starting group.
    pub max_side: u64,
}

/// One dependency as written in a problem file, e.g. `{"from": "CG", "to": "H"}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct DependencyDef {
    pub from: String,
    pub to: String,
}

impl DependencyDef {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<&DependencyDef> for FunctionalDependency {
    fn from(def: &DependencyDef) -> Self {
        Self::new(&def.from, &def.to)
    }
}

/// A closure problem: a starting attribute group and a dependency list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Problem {
    params: ProblemParams,
    attributes: String,
    dependencies: Vec<DependencyDef>,
}

impl Problem {
    #[must_use]
    pub const fn new(
        params: ProblemParams,
        attributes: String,
        dependencies: Vec<DependencyDef>,
    ) -> Self {
        Self {
            params,
            attributes,
            dependencies,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_params(&self) -> &ProblemParams {
        &self.params
    }

    #[must_use]
    pub fn get_attributes(&self) -> &str {
        &self.attributes
    }

    #[must_use]
    pub fn get_dependency_defs(&self) -> &[DependencyDef] {
        &self.dependencies
    }

    #[must_use]
    pub fn dependencies(&self) -> Vec<FunctionalDependency> {
        self.dependencies.iter().map(FunctionalDependency::from).collect()
    }

    #[must_use]
    pub fn closure(&self, tracking: ProgressTracking) -> Closure {
        closure_with(&self.attributes, &self.dependencies(), tracking)
    }
}

/// Draws a group of `1..=max_side` letters; repeats are possible and are
/// deduplicated by the core crate.
fn random_group(
    random_generator: &mut ThreadRng,
    letters: &Uniform<usize>,
    sizes: &Uniform<u64>,
) -> String {
    (0..sizes.sample(random_generator))
        .map(|_| char::from(ALPHABET[letters.sample(random_generator)]))
        .collect()
}

/// The alphabet size and side bound the generator actually uses: `n_attribute`
/// clamped to `1..=26` and `max_side` to at least 1.
#[must_use]
pub fn effective_params(n_attribute: u64, max_side: u64) -> (u64, u64) {
    (n_attribute.clamp(1, 26), max_side.max(1))
}

/// Generate a starting group and `n_dependency` dependencies over the first
/// `n_attribute` letters.
///
/// Both bounds go through [`effective_params`] first. Roughly
/// one dependency in sixteen gets an empty determiner side, so generated
/// problems also exercise vacuously satisfied dependencies.
#[must_use]
pub fn generate_single_problem(
    n_attribute: u64,
    n_dependency: u64,
    max_side: u64,
) -> (String, Vec<DependencyDef>) {
    let (n_attribute, max_side) = effective_params(n_attribute, max_side);
    let n_attribute = usize::try_from(n_attribute).unwrap_or(26);
    let mut random_generator = rand::rng();
    let letters = Uniform::new(0, n_attribute).unwrap();
    let sizes = Uniform::new_inclusive(1, max_side).unwrap();
    let vacuous = Uniform::new(0u8, 16).unwrap();

    let attributes = random_group(&mut random_generator, &letters, &sizes);
    let dependencies = (0..n_dependency)
        .map(|_| {
            let from = if vacuous.sample(&mut random_generator) == 0 {
                String::new()
            } else {
                random_group(&mut random_generator, &letters, &sizes)
            };
            let to = random_group(&mut random_generator, &letters, &sizes);
            DependencyDef { from, to }
        })
        .collect();

    (attributes, dependencies)
}

#[must_use]
pub fn generate_mult_problems(
    n_problem: u64,
    n_attribute: u64,
    n_dependency: u64,
    max_side: u64,
) -> Vec<Problem> {
    let (n_attribute, max_side) = effective_params(n_attribute, max_side);
    (0..n_problem)
        .into_par_iter()
        .map(|id| {
            let (attributes, dependencies) =
                generate_single_problem(n_attribute, n_dependency, max_side);
            Problem {
                params: ProblemParams {
                    id,
                    n_attribute,
                    n_dependency,
                    max_side,
                },
                attributes,
                dependencies,
            }
        })
        .collect()
}
