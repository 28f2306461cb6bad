use core::fmt::Debug;

use tracing::info;

use crate::parser;
use crate::path::PathKind;
use crate::set::GoSet;
use crate::similarity::{Distance, GSesame, SemanticValues, StandardCombiner};
use crate::term::internal::GoTermInternal;
use crate::term::{GoTerm, GoTermId, Relation};
use crate::{GoError, GoResult};

mod termarena;
use termarena::Arena;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` is the main interface of the `gosim` crate and contains all terms
///
/// The ontology is built once, usually from an `.obo` file, and is read-only
/// afterwards. All scoring methods borrow it immutably, so it can be shared
/// between threads.
///
/// # Examples
///
/// ```
/// use gosim::Ontology;
///
/// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
///
/// // get single terms from the ontology
/// assert!(ontology.term("666").is_none());
/// let root = ontology.term("0").unwrap();
/// assert_eq!(root.name(), Some("zero"));
///
/// // alternative ids resolve to the same term
/// assert_eq!(ontology.term("12").unwrap().id(), "7");
///
/// // Iterate all terms
/// for term in &ontology {
///     // do something with term
///     println!("{}", term.id());
/// }
/// ```
///
/// # Construction
///
/// 1. Load an `.obo` file with [`Ontology::from_obo`] or
///     an in-memory string with [`Ontology::from_obo_str`].
/// 2. Build it manually (mostly useful for testing):
///     - construct an empty Ontology [`Ontology::default`]
///     - add all terms [`Ontology::insert_term`]
///     - connect terms to their parents [`Ontology::add_parent`]
///
/// # Layout
///
/// Every term points to its parents via `is_a` and `part_of` relations.
/// The terms of `tests/test.obo` are connected like this (`12` and `13`
/// are alternative ids of `7` and `8`):
///
/// ```mermaid
/// graph BT
///     1 --> 0
///     2 --> 1
///     3 --> 1
///     4 --> 2
///     5 --> 3
///     6 --> 4
///     11 --> 6
///     10 --> 0
///     7["7 (12)"] --> 10
///     8["8 (13)"] --> 7
///     9 --> 7
/// ```
#[derive(Default)]
pub struct Ontology {
    terms: Arena,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

/// Public API of the Ontology
impl Ontology {
    /// Loads the ontology from an `.obo` file
    ///
    /// Only `[Term]` stanzas are read.
    ///
    /// # Errors
    ///
    /// - file not present or readable: [`GoError::CannotOpenFile`]
    /// - a `[Term]` without `id`: [`GoError::InvalidInput`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// assert_eq!(ontology.len(), 12);
    /// ```
    pub fn from_obo<P: AsRef<std::path::Path>>(filename: P) -> GoResult<Self> {
        let mut ontology = Ontology::default();
        parser::go_obo::read_obo_file(filename, &mut ontology)?;
        Ok(ontology)
    }

    /// Loads the ontology from the content of an `.obo` file
    ///
    /// # Errors
    ///
    /// A `[Term]` without `id`: [`GoError::InvalidInput`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo_str("[Term]\nid: GO:0005575\nname: cellular_component\n").unwrap();
    /// assert_eq!(ontology.len(), 1);
    /// ```
    pub fn from_obo_str(content: &str) -> GoResult<Self> {
        let mut ontology = Ontology::default();
        parser::go_obo::read_obo_str(content, &mut ontology)?;
        Ok(ontology)
    }

    /// Serializes the ontology into the `.obo` format
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// let copy = Ontology::from_obo_str(&ontology.to_obo_string()).unwrap();
    /// assert_eq!(copy.len(), ontology.len());
    /// ```
    pub fn to_obo_string(&self) -> String {
        parser::go_obo::obo_string(self)
    }

    /// Writes the ontology into an `.obo` file
    ///
    /// # Errors
    ///
    /// [`GoError::CannotOpenFile`] if the file cannot be written
    pub fn write_obo<P: AsRef<std::path::Path>>(&self, filename: P) -> GoResult<()> {
        parser::go_obo::write_obo_file(self, filename)
    }

    /// Returns the number of terms in the Ontology
    ///
    /// Alternative ids are not counted
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the Ontology does not contain any terms
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    /// let ontology = Ontology::default();
    /// assert!(ontology.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`GoTerm`] of the provided id or alternative id
    ///
    /// If no such term is present in the Ontology, `None` is returned
    pub fn term(&self, id: &str) -> Option<GoTerm> {
        GoTerm::try_new(self, id).ok()
    }

    /// Returns an Iterator of all [`GoTerm`]s of the Ontology
    /// in the order they were added
    pub fn terms(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns a new ontology with all terms of the branch below `root_id`
    ///
    /// A term belongs to the branch if at least one of its `is_a` paths
    /// ends at `root_id`. This is mostly used to split the GO into
    /// its namespaces, e.g. `GO:0008150` for `biological_process`.
    ///
    /// # Errors
    ///
    /// - `root_id` does not exist: [`GoError::UnknownTerm`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// let branch = ontology.branch("0").unwrap();
    /// assert_eq!(branch.len(), ontology.len());
    /// ```
    pub fn branch(&self, root_id: &str) -> GoResult<Ontology> {
        let root = GoTerm::try_new(self, root_id)?;
        let mut branch = Ontology::default();
        for term in self {
            let paths = term.paths(PathKind::Plain)?;
            if paths.iter().any(|path| path.last() == Some(root.id())) {
                branch.add_term(term.internal().clone());
            }
        }
        info!("Extracted {} of {} terms below {}", branch.len(), self.len(), root.id());
        Ok(branch)
    }

    /// Returns the edge-count [`Distance`] between two terms
    ///
    /// # Errors
    ///
    /// - one of the ids does not exist: [`GoError::UnknownTerm`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// assert_eq!(ontology.distance("9", "5").unwrap().score(), Some(6.0));
    /// ```
    pub fn distance(&self, id1: &str, id2: &str) -> GoResult<Distance> {
        let term1 = GoTerm::try_new(self, id1)?;
        let term2 = GoTerm::try_new(self, id2)?;
        term1.distance(&term2)
    }

    /// Returns the G-SESAME semantic values of all ancestors of a term
    ///
    /// # Errors
    ///
    /// - `id` does not exist: [`GoError::UnknownTerm`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    pub fn semantic_values(&self, id: &str) -> GoResult<SemanticValues> {
        GoTerm::try_new(self, id)?.semantic_values()
    }

    /// Returns the G-SESAME semantic value of a term
    ///
    /// # Errors
    ///
    /// - `id` does not exist: [`GoError::UnknownTerm`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/article.obo").unwrap();
    /// assert_eq!(ontology.semantic_value("GO:0043229").unwrap(), 3.4000000000000004);
    /// ```
    pub fn semantic_value(&self, id: &str) -> GoResult<f64> {
        GoTerm::try_new(self, id)?.semantic_value()
    }

    /// Returns the G-SESAME similarity of two terms
    ///
    /// # Errors
    ///
    /// - one of the ids does not exist: [`GoError::UnknownTerm`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/article.obo").unwrap();
    /// let similarity = ontology.similarity("GO:0043229", "GO:0043231").unwrap();
    /// assert_eq!(similarity, 0.7727272727272726);
    /// ```
    pub fn similarity(&self, id1: &str, id2: &str) -> GoResult<f64> {
        let term1 = GoTerm::try_new(self, id1)?;
        let term2 = GoTerm::try_new(self, id2)?;
        GSesame::default().compare(&term1, &term2)
    }

    /// Returns the G-SESAME similarity of two genes, given their annotated terms
    ///
    /// Every term of one gene is matched with its most similar term
    /// of the other gene, in both directions. The result is the average
    /// of all best matches.
    ///
    /// # Errors
    ///
    /// - one of the ids does not exist: [`GoError::UnknownTerm`]
    /// - one of the genes has no terms: [`GoError::DegenerateInput`]
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/go_2012.obo").unwrap();
    /// let similarity = ontology.gene_similarity(
    ///     &["GO:0043229", "GO:0044424"],
    ///     &["GO:0043231", "GO:0043227"],
    /// ).unwrap();
    /// assert_eq!(similarity, 0.6743128041470686);
    /// ```
    pub fn gene_similarity<S: AsRef<str>>(&self, gene1: &[S], gene2: &[S]) -> GoResult<f64> {
        let set1 = GoSet::try_new(self, gene1)?;
        let set2 = GoSet::try_new(self, gene2)?;
        set1.similarity(&set2, &GSesame::default(), &StandardCombiner::default())
    }
}

/// Methods to add terms and relations to the Ontology
///
/// Those methods are used during loading, but can also be
/// used to build an ontology manually.
impl Ontology {
    /// Creates and inserts a new term to the ontology
    ///
    /// Returns `false` if a term with the same id (or alternative id)
    /// is already present. The existing term is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::Ontology;
    ///
    /// let mut ontology = Ontology::default();
    /// assert!(ontology.insert_term("GO:0005575"));
    /// assert!(!ontology.insert_term("GO:0005575"));
    ///
    /// assert_eq!(ontology.len(), 1);
    /// ```
    pub fn insert_term<I: Into<GoTermId>>(&mut self, id: I) -> bool {
        self.add_term(GoTermInternal::new(id))
    }

    /// Registers `alt_id` as an alternative id of the term `id`
    ///
    /// Returns `false` if `alt_id` already belongs to a term
    ///
    /// # Errors
    ///
    /// [`GoError::UnknownTerm`] if `id` does not exist
    pub fn add_alt_id(&mut self, id: &str, alt_id: &str) -> GoResult<bool> {
        self.terms
            .add_alias(id, alt_id.into())
            .ok_or_else(|| GoError::UnknownTerm(id.to_string()))
    }

    /// Adds a parent reference of `relation` to the term `child_id`
    ///
    /// The reference can carry a `! comment` suffix. The parent does
    /// not have to exist (yet), it is only resolved during path enumeration.
    ///
    /// # Errors
    ///
    /// [`GoError::UnknownTerm`] if `child_id` does not exist
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{Ontology, Relation};
    ///
    /// let mut ontology = Ontology::default();
    /// ontology.insert_term("1");
    /// ontology.insert_term("2");
    ///
    /// ontology.add_parent("2", Relation::IsA, "1 ! root").unwrap();
    ///
    /// let term = ontology.term("2").unwrap();
    /// assert_eq!(term.parent_ids(Relation::IsA).collect::<Vec<_>>(), ["1"]);
    /// ```
    pub fn add_parent(&mut self, child_id: &str, relation: Relation, parent_ref: &str) -> GoResult<()> {
        self.get_mut(child_id)?.add_parent(relation, parent_ref);
        Ok(())
    }

    /// Adds an opaque attribute, e.g. `name` or `def`, to the term `id`
    ///
    /// # Errors
    ///
    /// [`GoError::UnknownTerm`] if `id` does not exist
    pub fn add_attribute(&mut self, id: &str, key: &str, value: &str) -> GoResult<()> {
        self.get_mut(id)?.add_attribute(key, value);
        Ok(())
    }
}

/// Crate-only functions for loading the Ontology
impl Ontology {
    pub(crate) fn add_term(&mut self, term: GoTermInternal) -> bool {
        self.terms.insert(term)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&GoTermInternal> {
        self.terms.get(id)
    }

    fn get_mut(&mut self, id: &str) -> GoResult<&mut GoTermInternal> {
        self.terms
            .get_mut(id)
            .ok_or_else(|| GoError::UnknownTerm(id.to_string()))
    }

    pub(crate) fn aliases(&self) -> usize {
        self.terms.aliases()
    }
}

/// Iterates the Ontology and yields [`GoTerm`]s
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, GoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> std::iter::Iterator for Iter<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|term| GoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = GoTerm<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.terms.iter(),
            ontology: self,
        }
    }
}
