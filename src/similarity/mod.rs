//! Methods to calculate the Similarity between two terms or sets of terms

use crate::set::GoSet;
use crate::{GoError, GoResult, GoTerm};

pub(crate) mod distance;
mod gsesame;

pub use distance::Distance;
pub use gsesame::{GSesame, SemanticValues, SemanticWeights};

/// Trait for similarity score calculation between 2 [`GoTerm`]s
///
/// `gosim` comes with the [`GSesame`] algorithm. Custom algorithms
/// can be used for term and set similarity by implementing this trait.
pub trait Similarity {
    /// calculates the actual similarity between term a and term b
    ///
    /// # Errors
    ///
    /// Implementations return an error if the score cannot be calculated,
    /// e.g. [`GoError::CyclicRelation`] if a path cannot be enumerated
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> GoResult<f64>;
}

/// This trait is needed for custom implementations
///
/// For similarity calculation between sets of `GoTerm`s
/// the similarity scores must be combined
pub trait SimilarityCombiner {
    /// This method implements the actual logic to calculate a single
    /// similarity score from the best matches of both sets
    ///
    /// `forward` holds the best match in the other set for every term of the
    /// first set, `backward` the best match in the first set for every term of
    /// the other set. Both are guaranteed to be non-empty.
    fn combine(&self, forward: &[f64], backward: &[f64]) -> f64;

    /// this method is called by [`GroupSimilarity`] to combine individual term - term
    /// similarity scores into a single score for the group - group similarity
    ///
    /// # Errors
    ///
    /// [`GoError::DegenerateInput`] if one of the sets is empty
    fn calculate(&self, forward: &[f64], backward: &[f64]) -> GoResult<f64> {
        if forward.is_empty() || backward.is_empty() {
            return Err(GoError::DegenerateInput(
                "cannot compare an empty set of terms".to_string(),
            ));
        }
        Ok(self.combine(forward, backward))
    }
}

/// Standard methods to combine best matches into a set-similarity score
///
/// `m` and `n` are the number of terms of both sets,
/// `fwd` and `bwd` the best-match scores of both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardCombiner {
    /// Best match average `(Σ fwd + Σ bwd) / (m + n)`
    ///
    /// This is the gene similarity of G-SESAME
    #[default]
    Bma,
    /// Average of the per-direction averages `(Σ fwd / m + Σ bwd / n) / 2`
    FunSimAvg,
    /// Maximum of the per-direction averages `max(Σ fwd / m, Σ bwd / n)`
    FunSimMax,
}

impl StandardCombiner {
    fn bma(forward: &[f64], backward: &[f64]) -> f64 {
        let n = usize_to_f64(forward.len()) + usize_to_f64(backward.len());
        (forward.iter().sum::<f64>() + backward.iter().sum::<f64>()) / n
    }

    fn averages(forward: &[f64], backward: &[f64]) -> (f64, f64) {
        (
            forward.iter().sum::<f64>() / usize_to_f64(forward.len()),
            backward.iter().sum::<f64>() / usize_to_f64(backward.len()),
        )
    }

    fn fun_sim_avg(forward: &[f64], backward: &[f64]) -> f64 {
        let (fwd, bwd) = Self::averages(forward, backward);
        (fwd + bwd) / 2.0
    }

    fn fun_sim_max(forward: &[f64], backward: &[f64]) -> f64 {
        let (fwd, bwd) = Self::averages(forward, backward);
        fwd.max(bwd)
    }
}

impl SimilarityCombiner for StandardCombiner {
    fn combine(&self, forward: &[f64], backward: &[f64]) -> f64 {
        match self {
            StandardCombiner::Bma => Self::bma(forward, backward),
            StandardCombiner::FunSimAvg => Self::fun_sim_avg(forward, backward),
            StandardCombiner::FunSimMax => Self::fun_sim_max(forward, backward),
        }
    }
}

/// Calculates the similarity between two sets of terms
///
/// # Examples
///
/// ```
/// use gosim::{GoSet, Ontology};
/// use gosim::similarity::GroupSimilarity;
///
/// let ontology = Ontology::from_obo("tests/go_2012.obo").unwrap();
/// let gene1 = GoSet::try_new(&ontology, &["GO:0043229", "GO:0044424"]).unwrap();
/// let gene2 = GoSet::try_new(&ontology, &["GO:0043231", "GO:0043227"]).unwrap();
///
/// let sim = GroupSimilarity::default().calculate(&gene1, &gene2).unwrap();
/// assert_eq!(sim, 0.6743128041470686);
/// ```
pub struct GroupSimilarity<T, C> {
    combiner: C,
    similarity: T,
}

impl<T: Similarity, C: SimilarityCombiner> GroupSimilarity<T, C> {
    /// Constructs a new struct to calculate similarity scores
    /// between two sets of terms
    pub fn new(combiner: C, similarity: T) -> Self {
        Self {
            combiner,
            similarity,
        }
    }

    /// Calculates the similarity between two sets of terms
    ///
    /// # Errors
    ///
    /// - one of the sets is empty: [`GoError::DegenerateInput`]
    /// - errors of the term [`Similarity`] are forwarded
    pub fn calculate(&self, a: &GoSet, b: &GoSet) -> GoResult<f64> {
        compare_sets(&self.similarity, &self.combiner, a, b)
    }
}

impl Default for GroupSimilarity<GSesame, StandardCombiner> {
    fn default() -> Self {
        Self {
            combiner: StandardCombiner::default(),
            similarity: GSesame::default(),
        }
    }
}

pub(crate) fn compare_sets<T: Similarity, C: SimilarityCombiner>(
    similarity: &T,
    combiner: &C,
    a: &GoSet,
    b: &GoSet,
) -> GoResult<f64> {
    // both directions are scored separately, `similarity` does not
    // have to be symmetric
    let forward = best_matches(similarity, a, b)?;
    let backward = best_matches(similarity, b, a)?;
    combiner.calculate(&forward, &backward)
}

/// Returns the highest score in `others` for every term of `terms`
fn best_matches<T: Similarity>(similarity: &T, terms: &GoSet, others: &GoSet) -> GoResult<Vec<f64>> {
    terms
        .iter()
        .map(|term| {
            others.iter().try_fold(0.0, |best: f64, other| -> GoResult<f64> {
                Ok(best.max(similarity.calculate(&term, &other)?))
            })
        })
        .collect()
}

fn usize_to_f64(n: usize) -> f64 {
    u32::try_from(n).map_or(f64::from(u32::MAX), f64::from)
}
