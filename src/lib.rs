#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
use thiserror::Error;

mod ontology;
mod parser;
pub mod path;
pub mod set;
pub mod similarity;
pub mod term;

pub use ontology::Ontology;
pub use path::{Path, PathElement, PathKind};
pub use set::GoSet;
pub use similarity::{Distance, GSesame, Similarity};
pub use term::{GoTerm, GoTermId, Relation};

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_PATHS: usize = 8;
const DEFAULT_NUM_TERMS: usize = 50_000;

/// Main Error type for this crate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GoError {
    /// The term (or alternative id) is not present in the ontology
    #[error("term {0} does not exist")]
    UnknownTerm(String),
    /// Input that cannot produce a score, e.g. an empty set of terms
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    /// A term is reachable from itself by following parent relations
    #[error("cyclic relation at term {0}")]
    CyclicRelation(String),
    /// Failed to open or write a file
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Failed to parse a stanza or line
    #[error("invalid data: {0}")]
    InvalidInput(String),
}

/// Shortcut for `Result<T, GoError>`
pub type GoResult<T> = Result<T, GoError>;
