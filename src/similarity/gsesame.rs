use std::collections::HashMap;

use crate::path::PathKind;
use crate::similarity::Similarity;
use crate::term::{GoTermId, Relation};
use crate::{GoError, GoResult, GoTerm};

/// The decay factors of the G-SESAME algorithm
///
/// The semantic contribution of an ancestor is multiplied
/// by the factor of every relation on the way to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemanticWeights {
    /// Factor of an `is_a` relation, default `0.8`
    pub is_a: f64,
    /// Factor of a `part_of` relation, default `0.6`
    pub part_of: f64,
}

impl Default for SemanticWeights {
    fn default() -> Self {
        Self {
            is_a: 0.8,
            part_of: 0.6,
        }
    }
}

impl SemanticWeights {
    /// Returns the factor of `relation`
    pub fn weight(&self, relation: Relation) -> f64 {
        match relation {
            Relation::IsA => self.is_a,
            Relation::PartOf => self.part_of,
        }
    }
}

/// G-SESAME semantic similarity
///
/// Every ancestor of a term contributes to its meaning. The contribution
/// decays with every `is_a` or `part_of` relation between the term and
/// the ancestor and the strongest route wins. Two terms are similar
/// if a large share of their contribution comes from shared ancestors.
///
/// For a detailed description see [Wang JZ, et. al., Bioinformatics, (2007)](https://pubmed.ncbi.nlm.nih.gov/17344234/)
///
/// # Examples
///
/// ```
/// use gosim::{GoTerm, GSesame, Ontology, Similarity};
///
/// let ontology = Ontology::from_obo("tests/article.obo").unwrap();
/// let term1 = GoTerm::try_new(&ontology, "GO:0043229").unwrap();
/// let term2 = GoTerm::try_new(&ontology, "GO:0043231").unwrap();
///
/// let sim = GSesame::default().calculate(&term1, &term2).unwrap();
/// assert_eq!(sim, 0.7727272727272726);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GSesame {
    weights: SemanticWeights,
}

impl GSesame {
    /// Constructs a new `GSesame` with the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new `GSesame` with custom weights
    ///
    /// # Examples
    ///
    /// ```
    /// use gosim::{GSesame, Ontology};
    /// use gosim::similarity::SemanticWeights;
    ///
    /// let ontology = Ontology::from_obo("tests/article.obo").unwrap();
    /// let term = ontology.term("GO:0043227").unwrap();
    ///
    /// let flat = GSesame::with_weights(SemanticWeights { is_a: 1.0, part_of: 1.0 });
    /// assert_eq!(flat.semantic_value(&term).unwrap(), 3.0);
    /// ```
    pub fn with_weights(weights: SemanticWeights) -> Self {
        Self { weights }
    }

    /// Returns the weights used by this instance
    pub fn weights(&self) -> &SemanticWeights {
        &self.weights
    }

    /// Returns the semantic values of `term` and all of its ancestors
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    pub fn semantic_values<'a>(&self, term: &GoTerm<'a>) -> GoResult<SemanticValues<'a>> {
        let paths = term.paths(PathKind::Detailed)?;
        let mut values = SemanticValues::default();
        for path in &paths {
            for id in path.terms() {
                let weight = path.relations_to(id.as_str()).map_or(0.0, |relations| {
                    relations.fold(1.0, |acc, relation| acc * self.weights.weight(relation))
                });
                values.update(id, weight);
            }
        }
        Ok(values)
    }

    /// Returns the semantic value of `term`, the sum of the semantic
    /// values of the term and its ancestors
    ///
    /// # Errors
    ///
    /// [`GoError::CyclicRelation`] if the ontology contains a cycle
    pub fn semantic_value(&self, term: &GoTerm) -> GoResult<f64> {
        Ok(self.semantic_values(term)?.total())
    }

    /// Calculates the similarity of both terms
    ///
    /// Identical terms always have a similarity of `1.0`
    ///
    /// # Errors
    ///
    /// - the ontology contains a cycle: [`GoError::CyclicRelation`]
    /// - both terms have a semantic value of `0`: [`GoError::DegenerateInput`]
    pub fn compare(&self, a: &GoTerm, b: &GoTerm) -> GoResult<f64> {
        if a.id() == b.id() {
            return Ok(1.0);
        }

        let values1 = self.semantic_values(a)?;
        let values2 = self.semantic_values(b)?;

        let denominator = values1.total() + values2.total();
        if denominator == 0.0 {
            return Err(GoError::DegenerateInput(format!(
                "{} and {} have no semantic value",
                a.id(),
                b.id()
            )));
        }

        // shared ancestors are summed in id order so that swapping
        // both terms yields the identical result
        let mut shared: Vec<(&str, f64)> = values1
            .iter()
            .filter_map(|(id, weight1)| {
                Some((id.as_str(), weight1 + values2.get(id.as_str())?))
            })
            .collect();
        shared.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let numerator = shared.iter().fold(0.0, |acc, (_, weight)| acc + weight);

        // rounding can push the ratio slightly above 1
        Ok((numerator / denominator).min(1.0))
    }
}

impl Similarity for GSesame {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> GoResult<f64> {
        self.compare(a, b)
    }
}

/// The semantic values of a term and its ancestors
///
/// Ancestors are kept in the order they are first found
/// when walking the paths of the term.
#[derive(Debug, Default)]
pub struct SemanticValues<'a> {
    values: Vec<(&'a GoTermId, f64)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> SemanticValues<'a> {
    fn update(&mut self, id: &'a GoTermId, weight: f64) {
        match self.index.get(id.as_str()) {
            Some(idx) => {
                let current = &mut self.values[*idx].1;
                *current = current.max(weight);
            }
            None => {
                self.index.insert(id.as_str(), self.values.len());
                self.values.push((id, weight));
            }
        }
    }

    /// Returns the semantic value of the ancestor `id`
    ///
    /// `None` if `id` is not an ancestor
    pub fn get(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|idx| self.values[*idx].1)
    }

    /// Returns the number of ancestors, including the term itself
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no ancestors
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator of all ancestors and their semantic value
    pub fn iter(&self) -> impl Iterator<Item = (&'a GoTermId, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns an iterator of all ancestors
    pub fn ancestors(&self) -> impl Iterator<Item = &'a GoTermId> + '_ {
        self.values.iter().map(|(id, _)| *id)
    }

    /// Returns the sum of all semantic values
    pub fn total(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, (_, weight)| acc + weight)
    }
}
