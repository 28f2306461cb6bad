//! Root-ward paths through the ontology
//!
//! A [`Path`] is one ancestry chain from a term towards a root term.
//! Terms with several parents produce several paths, one for every route.

use std::fmt::Display;

use tracing::debug;

use crate::term::internal::GoTermInternal;
use crate::term::{reference_id, GoTermId, Relation};
use crate::{GoError, GoResult, Ontology, DEFAULT_NUM_PATHS};

/// The relations that are followed when building paths
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathKind {
    /// Follows `is_a` relations only
    #[default]
    Plain,
    /// Follows `is_a` and `part_of` relations and records
    /// the relation of every step
    Detailed,
}

impl PathKind {
    /// Returns the relations to follow, in the order they are followed
    pub fn relations(&self) -> &'static [Relation] {
        match self {
            PathKind::Plain => &[Relation::IsA],
            PathKind::Detailed => &[Relation::IsA, Relation::PartOf],
        }
    }
}

/// A single element of a [`Path`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathElement<'a> {
    /// A term on the path
    Term(&'a GoTermId),
    /// The relation from the previous term to the next one
    Relation(Relation),
}

impl Display for PathElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathElement::Term(id) => write!(f, "{id}"),
            PathElement::Relation(relation) => write!(f, "{relation}"),
        }
    }
}

/// An ordered chain of terms, starting at the queried term
///
/// Index `0` is the term itself, the last term is either a root
/// or the last term before a parent that is missing in the ontology.
///
/// Paths built with [`PathKind::Detailed`] contain a [`PathElement::Relation`]
/// between every two terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path<'a> {
    elements: Vec<PathElement<'a>>,
}

impl<'a> Path<'a> {
    fn start(id: &'a GoTermId) -> Self {
        Self {
            elements: vec![PathElement::Term(id)],
        }
    }

    /// Returns a new path that continues `self` to `parent`
    fn extend(&self, relation: Option<Relation>, parent: &'a GoTermId) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 2);
        elements.extend_from_slice(&self.elements);
        if let Some(relation) = relation {
            elements.push(PathElement::Relation(relation));
        }
        elements.push(PathElement::Term(parent));
        Self { elements }
    }

    /// Returns all elements of the path, including relations
    pub fn elements(&self) -> &[PathElement<'a>] {
        &self.elements
    }

    /// Returns an iterator of the terms on the path
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = &'a GoTermId> + '_ {
        self.elements.iter().filter_map(|element| match element {
            PathElement::Term(id) => Some(*id),
            PathElement::Relation(_) => None,
        })
    }

    /// Returns the number of terms on the path
    pub fn len(&self) -> usize {
        self.terms().count()
    }

    /// Returns `true` if the path does not contain any term
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the index of `id` among the terms of the path
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{GoTerm, Ontology, PathKind};
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// let term = GoTerm::try_new(&ontology, "4").unwrap();
    /// let path = &term.paths(PathKind::Detailed).unwrap()[0];
    ///
    /// assert_eq!(path.position("4"), Some(0));
    /// assert_eq!(path.position("1"), Some(2));
    /// assert_eq!(path.position("3"), None);
    /// ```
    pub fn position(&self, id: &str) -> Option<usize> {
        self.terms().position(|term| term == id)
    }

    /// Returns `true` if `id` is a term of the path
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Returns the first term, i.e. the term the path starts from
    pub fn first(&self) -> Option<&'a GoTermId> {
        self.terms().next()
    }

    /// Returns the last term, i.e. the root-most term of the path
    pub fn last(&self) -> Option<&'a GoTermId> {
        self.terms().next_back()
    }

    /// Returns the relations between `id` and the start of the path
    ///
    /// The relations are yielded from `id` backwards, i.e. the relation
    /// adjacent to `id` comes first. Returns `None` if `id` is not
    /// on the path. Plain paths never yield a relation.
    pub fn relations_to(&self, id: &str) -> Option<impl Iterator<Item = Relation> + '_> {
        let index = self
            .elements
            .iter()
            .position(|element| matches!(element, PathElement::Term(term) if *term == id))?;
        Some(
            self.elements[..index]
                .iter()
                .rev()
                .filter_map(|element| match element {
                    PathElement::Relation(relation) => Some(*relation),
                    PathElement::Term(_) => None,
                }),
        )
    }
}

impl Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut elements = self.elements.iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
        }
        for element in elements {
            write!(f, ",{element}")?;
        }
        Ok(())
    }
}

/// Returns every root-ward path of `term`
///
/// Parents are followed depth-first, relation by relation in the order
/// of [`PathKind::relations`] and, within a relation, in the order they
/// were added to the term.
///
/// A parent that is not present in the ontology ends the path at the
/// current term. The path is emitted once, even if the term references
/// several missing parents, and its other parents are still followed.
///
/// # Errors
///
/// [`GoError::CyclicRelation`] if a term is its own ancestor
pub(crate) fn enumerate<'a>(
    ontology: &'a Ontology,
    term: &'a GoTermInternal,
    kind: PathKind,
) -> GoResult<Vec<Path<'a>>> {
    let mut paths = Vec::with_capacity(DEFAULT_NUM_PATHS);
    expand(ontology, term, Path::start(term.id()), kind, &mut paths)?;
    Ok(paths)
}

fn expand<'a>(
    ontology: &'a Ontology,
    term: &'a GoTermInternal,
    current: Path<'a>,
    kind: PathKind,
    paths: &mut Vec<Path<'a>>,
) -> GoResult<()> {
    let mut is_root = true;
    let mut ended = false;

    for relation in kind.relations() {
        for raw in term.parent_refs(*relation) {
            is_root = false;
            let parent_id = reference_id(raw);
            let Some(parent) = ontology.get(parent_id) else {
                debug!("Parent {} of {} is missing", parent_id, term.id());
                if !ended {
                    paths.push(current.clone());
                    ended = true;
                }
                continue;
            };

            if current.contains(parent.id().as_str()) {
                return Err(GoError::CyclicRelation(parent.id().to_string()));
            }

            let marker = match kind {
                PathKind::Plain => None,
                PathKind::Detailed => Some(*relation),
            };
            expand(ontology, parent, current.extend(marker, parent.id()), kind, paths)?;
        }
    }

    if is_root {
        paths.push(current);
    }
    Ok(())
}
