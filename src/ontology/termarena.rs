use std::collections::HashMap;

use tracing::warn;

use crate::term::internal::GoTermInternal;
use crate::term::GoTermId;
use crate::DEFAULT_NUM_TERMS;

/// Owns all terms of an [`crate::Ontology`]
///
/// Terms are stored in insertion order. The index maps canonical ids
/// and alternative ids to the position of the term.
pub(crate) struct Arena {
    terms: Vec<GoTermInternal>,
    ids: HashMap<GoTermId, usize>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            ids: HashMap::with_capacity(DEFAULT_NUM_TERMS),
        }
    }
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Number of alternative ids that resolve to a term
    pub fn aliases(&self) -> usize {
        self.ids.len() - self.terms.len()
    }

    /// Adds `term` unless its id is already taken
    ///
    /// Alternative ids of `term` that are already taken are dropped.
    pub fn insert(&mut self, mut term: GoTermInternal) -> bool {
        if self.ids.contains_key(term.id()) {
            warn!("Term {} is already present", term.id());
            return false;
        }
        let idx = self.terms.len();
        let alt_ids = term.take_alt_ids();
        self.ids.insert(term.id().clone(), idx);
        self.terms.push(term);

        for alt_id in alt_ids {
            self.insert_alias(idx, alt_id);
        }
        true
    }

    /// Registers `alt_id` as alternative id of the term with `id`
    ///
    /// Returns `None` if `id` does not exist and `Some(false)` if
    /// `alt_id` is already taken
    pub fn add_alias(&mut self, id: &str, alt_id: GoTermId) -> Option<bool> {
        let idx = *self.ids.get(id)?;
        Some(self.insert_alias(idx, alt_id))
    }

    fn insert_alias(&mut self, idx: usize, alt_id: GoTermId) -> bool {
        if self.ids.contains_key(&alt_id) {
            warn!("Alternative id {} is already taken", alt_id);
            return false;
        }
        self.terms[idx].add_alt_id(alt_id.clone());
        self.ids.insert(alt_id, idx);
        true
    }

    pub fn get(&self, id: &str) -> Option<&GoTermInternal> {
        self.ids.get(id).map(|idx| &self.terms[*idx])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut GoTermInternal> {
        let idx = *self.ids.get(id)?;
        self.terms.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GoTermInternal> {
        self.terms.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_id_wins() {
        let mut arena = Arena::default();
        let mut first = GoTermInternal::new("1");
        first.add_attribute("name", "first");
        let mut second = GoTermInternal::new("1");
        second.add_attribute("name", "second");

        assert!(arena.insert(first));
        assert!(!arena.insert(second));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get("1").unwrap().attribute("name"), Some("first"));
    }

    #[test]
    fn aliases_resolve() {
        let mut arena = Arena::default();
        let mut term = GoTermInternal::new("7");
        term.add_alt_id("12");
        arena.insert(term);
        arena.insert(GoTermInternal::new("8"));

        assert_eq!(arena.get("12").unwrap().id(), "7");
        assert_eq!(arena.add_alias("8", "13".into()), Some(true));
        assert_eq!(arena.add_alias("8", "12".into()), Some(false));
        assert_eq!(arena.add_alias("9", "14".into()), None);
        assert_eq!(arena.get("13").unwrap().id(), "8");
        assert_eq!(arena.get("12").unwrap().id(), "7");
        assert_eq!(arena.aliases(), 2);
        assert!(arena.get_mut("13").is_some());
    }

    #[test]
    fn taken_alt_ids_are_dropped() {
        let mut arena = Arena::default();
        arena.insert(GoTermInternal::new("1"));
        let mut term = GoTermInternal::new("2");
        term.add_alt_id("1");
        term.add_alt_id("3");
        arena.insert(term);

        assert_eq!(arena.get("1").unwrap().id(), "1");
        assert_eq!(arena.get("2").unwrap().alt_ids(), &[GoTermId::from("3")]);
        assert_eq!(arena.iter().count(), 2);
    }
}
