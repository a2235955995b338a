//! Random closure problems for tests, benchmarks and the `generate` command.

pub mod generator;
