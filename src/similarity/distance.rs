use std::fmt::Display;

use tracing::debug;

use crate::path::{Path, PathKind};
use crate::similarity::usize_to_f64;
use crate::{GoResult, GoTerm};

/// The edge-count distance between two terms
///
/// The distance is derived from the `is_a` paths of both terms.
/// If one term is an ancestor of the other, they are in a
/// [`Distance::Lineage`]. Otherwise the first common ancestor of
/// every pair of paths is searched and the nearest one is used.
///
/// # Examples
///
/// ```
/// use gosim::{Distance, Ontology};
///
/// let ontology = Ontology::from_obo("tests/test.obo").unwrap();
///
/// let distance = ontology.distance("7", "5").unwrap();
/// assert_eq!(distance, Distance::Cousins { steps: 5, level_delta: 1 });
/// assert_eq!(distance.score(), Some(5.1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distance {
    /// One term is an ancestor of the other
    Lineage {
        /// Number of edges between both terms
        steps: usize,
    },
    /// Both terms share a common ancestor
    Cousins {
        /// Number of edges from both terms to the common ancestor
        steps: usize,
        /// Difference of the number of edges from each term
        /// to the common ancestor
        level_delta: usize,
    },
    /// The terms have no common ancestor
    Unrelated,
}

impl Distance {
    /// Returns the distance as a single score
    ///
    /// Every step counts `1`, the level difference of cousins `0.1`.
    /// A lineage is penalized by `0.1` per step instead.
    /// Unrelated terms do not have a score.
    pub fn score(&self) -> Option<f64> {
        match self {
            Distance::Lineage { steps } => {
                let steps = usize_to_f64(*steps);
                Some(steps + steps / 10.0)
            }
            Distance::Cousins { steps, level_delta } => {
                Some(usize_to_f64(*steps) + usize_to_f64(*level_delta) / 10.0)
            }
            Distance::Unrelated => None,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.score() {
            Some(score) => write!(f, "{score}"),
            None => write!(f, "unrelated"),
        }
    }
}

pub(crate) fn between(a: &GoTerm, b: &GoTerm) -> GoResult<Distance> {
    let paths1 = a.paths(PathKind::Plain)?;
    let paths2 = b.paths(PathKind::Plain)?;

    let lineage = lineage_steps(&paths1, a.id().as_str(), b.id().as_str())
        .into_iter()
        .chain(lineage_steps(&paths2, b.id().as_str(), a.id().as_str()))
        .min();
    if let Some(steps) = lineage {
        debug!("{} and {} are in a lineage", a.id(), b.id());
        return Ok(Distance::Lineage { steps });
    }

    match cousins(&paths1, &paths2) {
        Some((steps, level_delta)) => {
            debug!("{} and {} are cousins", a.id(), b.id());
            Ok(Distance::Cousins { steps, level_delta })
        }
        None => {
            debug!("{} and {} are unrelated", a.id(), b.id());
            Ok(Distance::Unrelated)
        }
    }
}

/// Returns the fewest steps between `from` and `to` on any path
/// containing both terms
fn lineage_steps(paths: &[Path], from: &str, to: &str) -> Option<usize> {
    paths
        .iter()
        .filter_map(|path| Some(path.position(from)?.abs_diff(path.position(to)?)))
        .min()
}

/// Returns the steps and level difference to the nearest common ancestor
///
/// For every pair of paths only the first term of `paths1` that is also
/// part of the other path is considered. On ties the earlier pair wins.
fn cousins(paths1: &[Path], paths2: &[Path]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for path1 in paths1 {
        for path2 in paths2 {
            let common = path1
                .terms()
                .enumerate()
                .find_map(|(idx1, id)| Some((idx1, path2.position(id.as_str())?)));
            let Some((idx1, idx2)) = common else {
                continue;
            };
            let steps = idx1 + idx2;
            if best.map_or(true, |(fewest, _)| steps < fewest) {
                best = Some((steps, idx1.abs_diff(idx2)));
            }
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Ontology;

    #[test]
    fn scores() {
        assert_eq!(Distance::Lineage { steps: 5 }.score(), Some(5.5));
        assert_eq!(Distance::Lineage { steps: 0 }.score(), Some(0.0));
        assert_eq!(
            Distance::Cousins {
                steps: 6,
                level_delta: 0
            }
            .score(),
            Some(6.0)
        );
        assert_eq!(Distance::Unrelated.score(), None);
        assert_eq!(Distance::Unrelated.to_string(), "unrelated");
        assert_eq!(Distance::Lineage { steps: 4 }.to_string(), "4.4");
    }

    #[test]
    fn same_term() {
        let ont = Ontology::from_obo_str("[Term]\nid: r\n\n[Term]\nid: a\nis_a: r\n").unwrap();
        assert_eq!(ont.distance("a", "a").unwrap(), Distance::Lineage { steps: 0 });
        assert_eq!(ont.distance("r", "a").unwrap(), Distance::Lineage { steps: 1 });
    }

    #[test]
    fn lineage_uses_shortest_path() {
        let ont = Ontology::from_obo_str(
            "[Term]\nid: r\n\n[Term]\nid: a\nis_a: r\n\n[Term]\nid: b\nis_a: a\n\n\
             [Term]\nid: c\nis_a: b\nis_a: r\n",
        )
        .unwrap();
        assert_eq!(ont.distance("c", "r").unwrap(), Distance::Lineage { steps: 1 });
        assert_eq!(ont.distance("r", "c").unwrap(), Distance::Lineage { steps: 1 });
    }

    #[test]
    fn unrelated() {
        let ont = Ontology::from_obo_str("[Term]\nid: r\n\n[Term]\nid: s\n\n[Term]\nid: a\nis_a: r\n").unwrap();
        let distance = ont.distance("a", "s").unwrap();
        assert_eq!(distance, Distance::Unrelated);
        assert!(distance.score().is_none());
    }

    #[test]
    fn part_of_is_ignored() {
        let ont = Ontology::from_obo_str(
            "[Term]\nid: r\n\n[Term]\nid: s\n\n[Term]\nid: a\nis_a: s\nrelationship: part_of r\n",
        )
        .unwrap();
        assert_eq!(ont.distance("a", "r").unwrap(), Distance::Unrelated);
    }
}
