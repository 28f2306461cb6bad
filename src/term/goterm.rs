use crate::path::{self, Path, PathKind};
use crate::similarity::{distance, Distance, GSesame, SemanticValues, Similarity};
use crate::term::internal::GoTermInternal;
use crate::term::{reference_id, GoTermId, Relation};
use crate::GoError;
use crate::GoResult;
use crate::Ontology;

/// The `GoTerm` represents a single term from the Gene Ontology
///
/// The term holds all required information and relationship data.
/// It provides functionality for path traversals and similarity calculations.
///
/// `GoTerm`s are cheap, `Copy`able views into the [`Ontology`]
#[derive(Debug, Clone, Copy)]
pub struct GoTerm<'a> {
    term: &'a GoTermInternal,
    ontology: &'a Ontology,
}

impl<'a> GoTerm<'a> {
    /// Constructs a new [`GoTerm`]
    ///
    /// `id` can be the canonical identifier or one of the
    /// alternative ids of the term.
    ///
    /// # Errors
    ///
    /// If the given id does not match an existing term
    /// it returns [`GoError::UnknownTerm`]
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{GoTerm, Ontology};
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    ///
    /// let term = GoTerm::try_new(&ontology, "12").unwrap();
    /// assert_eq!(term.id(), "7");
    ///
    /// assert!(GoTerm::try_new(&ontology, "666").is_err());
    /// ```
    pub fn try_new(ontology: &'a Ontology, id: &str) -> GoResult<GoTerm<'a>> {
        let term = ontology
            .get(id)
            .ok_or_else(|| GoError::UnknownTerm(id.to_string()))?;
        Ok(GoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a GoTermInternal) -> GoTerm<'a> {
        GoTerm { term, ontology }
    }

    pub(crate) fn internal(&self) -> &'a GoTermInternal {
        self.term
    }

    /// Returns the canonical [`GoTermId`] of the term
    ///
    /// e.g.: `GO:0005575`
    pub fn id(&self) -> &'a GoTermId {
        self.term.id()
    }

    /// Returns the name of the term, if present
    ///
    /// e.g.: `cellular_component`
    pub fn name(&self) -> Option<&'a str> {
        self.term.attribute("name")
    }

    /// Returns the namespace of the term, if present
    ///
    /// e.g.: `biological_process`
    pub fn namespace(&self) -> Option<&'a str> {
        self.term.attribute("namespace")
    }

    /// Returns the alternative ids of the term
    pub fn alt_ids(&self) -> &'a [GoTermId] {
        self.term.alt_ids()
    }

    /// Returns the first value of any other attribute of the term
    ///
    /// e.g. `def` or `comment`
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.term.attribute(key)
    }

    /// Returns an iterator of all `key`-`value` attributes of the term
    /// in the order they were added
    ///
    /// The attributes do not contain `id`, `alt_id` or any parent relations.
    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.term
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the ids of the direct parents of the given [`Relation`]
    ///
    /// The ids are returned as referenced in the source, without comment.
    /// They might not exist in the ontology.
    pub fn parent_ids(&self, relation: Relation) -> impl Iterator<Item = &'a str> {
        self.term
            .parent_refs(relation)
            .iter()
            .map(|raw| reference_id(raw))
    }

    /// Returns an iterator of the direct parents of the given [`Relation`]
    ///
    /// Parents that are not present in the ontology are skipped.
    pub fn parents(&self, relation: Relation) -> Parents<'a> {
        Parents {
            refs: self.term.parent_refs(relation).iter(),
            ontology: self.ontology,
        }
    }

    /// Returns `true` if the term has no parents for any relation of `kind`
    pub fn is_root(&self, kind: PathKind) -> bool {
        kind.relations()
            .iter()
            .all(|relation| self.term.parent_refs(*relation).is_empty())
    }

    /// Returns every root-ward [`Path`] of the term
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{GoTerm, Ontology, PathKind};
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// let term = GoTerm::try_new(&ontology, "4").unwrap();
    ///
    /// let paths = term.paths(PathKind::Plain).unwrap();
    /// assert_eq!(paths.len(), 1);
    /// assert_eq!(paths[0].to_string(), "4,2,1,0");
    /// ```
    pub fn paths(&self, kind: PathKind) -> GoResult<Vec<Path<'a>>> {
        path::enumerate(self.ontology, self.term, kind)
    }

    /// Returns the edge-count [`Distance`] between `self` and `other`
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{GoTerm, Ontology};
    ///
    /// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
    /// let term = GoTerm::try_new(&ontology, "11").unwrap();
    /// let root = GoTerm::try_new(&ontology, "0").unwrap();
    ///
    /// assert_eq!(term.distance(&root).unwrap().score(), Some(5.5));
    /// ```
    pub fn distance(&self, other: &GoTerm) -> GoResult<Distance> {
        distance::between(self, other)
    }

    /// Returns the G-SESAME semantic values of all ancestors of the term,
    /// using the default weights
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    pub fn semantic_values(&self) -> GoResult<SemanticValues<'a>> {
        GSesame::default().semantic_values(self)
    }

    /// Returns the G-SESAME semantic value of the term,
    /// using the default weights
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    pub fn semantic_value(&self) -> GoResult<f64> {
        GSesame::default().semantic_value(self)
    }

    /// Calculates the similarity of `self` and `other` using the provided `Similarity` algorithm
    ///
    /// # Errors
    ///
    /// Forwards any error of the [`Similarity`] implementation
    pub fn similarity_score(&self, other: &GoTerm, similarity: &impl Similarity) -> GoResult<f64> {
        similarity.calculate(self, other)
    }
}

impl PartialEq for GoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for GoTerm<'_> {}

/// Iterator of the direct parents of a [`GoTerm`]
pub struct Parents<'a> {
    refs: std::slice::Iter<'a, String>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for Parents<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.refs.by_ref() {
            if let Some(term) = self.ontology.get(reference_id(raw)) {
                return Some(GoTerm::new(self.ontology, term));
            }
        }
        None
    }
}
