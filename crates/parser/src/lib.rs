//! Text format for functional dependency lists.
//!
//! One dependency per line, `//` comments and blank lines allowed:
//!
//! ```text
//! // textbook example
//! A  -> B
//! CG -> H   // trailing comments are fine too
//! I  -> JM
//! -> Z
//! ```

pub mod parser;

pub use parser::{parse_dependencies, ParseError};
