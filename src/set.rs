//! A `GoSet` can represent e.g. the GO annotations of a gene
use crate::similarity::{compare_sets, Similarity, SimilarityCombiner};
use crate::GoResult;
use crate::GoTerm;
use crate::Ontology;

/// A set of unique GO terms
///
/// A typical use-case for a [`GoSet`] is to record the GO annotations
/// of a gene. You can compare the aggregated annotations of two genes.
///
/// As in a set, each term can only appear once. Alternative ids
/// resolve to their term, so adding a term by its canonical id and an
/// alternative id keeps only one. Terms keep their insertion order.
///
/// # Examples
///
/// ```
/// use gosim::{GoSet, GSesame, Ontology};
/// use gosim::similarity::StandardCombiner;
///
/// let ontology = Ontology::from_obo("tests/go_2012.obo").unwrap();
///
/// let gene1 = GoSet::try_new(&ontology, &["GO:0043229", "GO:0044424"]).unwrap();
/// assert_eq!(gene1.len(), 2);
///
/// let mut gene2 = GoSet::new(&ontology);
/// gene2.insert("GO:0043231").unwrap();
/// gene2.insert("GO:0043227").unwrap();
///
/// let similarity = gene1.similarity(
///     &gene2,
///     &GSesame::default(),
///     &StandardCombiner::default()
/// ).unwrap();
/// assert_eq!(similarity, 0.6743128041470686);
/// ```
#[derive(Debug, Clone)]
pub struct GoSet<'a> {
    ontology: &'a Ontology,
    terms: Vec<GoTerm<'a>>,
}

impl<'a> GoSet<'a> {
    /// Constructs an empty `GoSet`
    pub fn new(ontology: &'a Ontology) -> Self {
        Self {
            ontology,
            terms: Vec::new(),
        }
    }

    /// Constructs a new `GoSet` from term ids
    ///
    /// # Errors
    ///
    /// [`crate::GoError::UnknownTerm`] if one of the ids does not exist
    pub fn try_new<S: AsRef<str>>(ontology: &'a Ontology, ids: &[S]) -> GoResult<Self> {
        let mut set = Self::new(ontology);
        for id in ids {
            set.insert(id.as_ref())?;
        }
        Ok(set)
    }

    /// Adds the term with id `id` to the set
    ///
    /// Returns `false` if the term was already present
    ///
    /// # Errors
    ///
    /// [`crate::GoError::UnknownTerm`] if the id does not exist
    pub fn insert(&mut self, id: &str) -> GoResult<bool> {
        let term = GoTerm::try_new(self.ontology, id)?;
        if self.terms.contains(&term) {
            return Ok(false);
        }
        self.terms.push(term);
        Ok(true)
    }

    /// Returns the number of terms in the set
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the set does not contain any terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns `true` if the term with `id` is part of the set
    pub fn contains(&self, id: &str) -> bool {
        GoTerm::try_new(self.ontology, id).is_ok_and(|term| self.terms.contains(&term))
    }

    /// Returns an iterator of all terms of the set
    pub fn iter(&self) -> impl Iterator<Item = GoTerm<'a>> + '_ {
        self.terms.iter().copied()
    }

    /// Calculates the similarity to another `GoSet`
    ///
    /// # Errors
    ///
    /// - one of the sets is empty: [`crate::GoError::DegenerateInput`]
    /// - errors of the term [`Similarity`] are forwarded
    pub fn similarity<S: Similarity, C: SimilarityCombiner>(
        &self,
        other: &GoSet,
        similarity: &S,
        combiner: &C,
    ) -> GoResult<f64> {
        compare_sets(similarity, combiner, self, other)
    }
}

impl<'a, 'b> IntoIterator for &'b GoSet<'a> {
    type Item = GoTerm<'a>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, GoTerm<'a>>>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter().copied()
    }
}
