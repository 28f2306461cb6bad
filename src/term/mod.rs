//! [`GoTerm`]s are the main building block of the Ontology.
//!
//! Each term is a node in a directed acyclic graph. A term is
//! connected to its parent terms via [`Relation`]s, either `is_a` or `part_of`.
//! Terms without any parents of a relation are roots for this relation.

use smallvec::SmallVec;

use crate::DEFAULT_NUM_PARENTS;

mod goterm;
mod gotermid;
pub(crate) mod internal;
mod relation;

pub use goterm::{GoTerm, Parents};
pub use gotermid::GoTermId;
pub use relation::Relation;

/// The raw parent references of a term for a single [`Relation`]
///
/// References are kept as they appear in the source data, e.g.
/// `GO:0005575 ! cellular_component`.
pub type ParentRefs = SmallVec<[String; DEFAULT_NUM_PARENTS]>;

/// Returns the identifier part of a parent reference
///
/// Parent references can carry a human readable comment after a `!`.
/// Only the leading identifier is used to look up the parent.
///
/// # Examples
///
/// ```
/// use gosim::term::reference_id;
///
/// assert_eq!(reference_id("GO:0005575 ! cellular_component"), "GO:0005575");
/// assert_eq!(reference_id("GO:0005575"), "GO:0005575");
/// ```
pub fn reference_id(raw: &str) -> &str {
    match raw.split_once('!') {
        Some((id, _)) => id.trim(),
        None => raw.trim(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference_with_comment() {
        assert_eq!(reference_id("4 ! four"), "4");
        assert_eq!(reference_id("  GO:0043226 !organelle"), "GO:0043226");
    }

    #[test]
    fn reference_without_comment() {
        assert_eq!(reference_id("GO:0043226"), "GO:0043226");
        assert_eq!(reference_id(" 12 "), "12");
    }

    #[test]
    fn reference_only_comment() {
        assert_eq!(reference_id("! orphan"), "");
    }
}
