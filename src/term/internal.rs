use crate::term::{GoTermId, ParentRefs, Relation};

/// The owned representation of a term inside the [`crate::Ontology`]
///
/// Parent references are stored raw, i.e. including any `! comment`
/// suffix, and are only resolved during path enumeration. This allows
/// references to terms that are not part of the ontology.
#[derive(Debug, Clone, Default)]
pub(crate) struct GoTermInternal {
    id: GoTermId,
    alt_ids: Vec<GoTermId>,
    is_a: ParentRefs,
    part_of: ParentRefs,
    attributes: Vec<(String, String)>,
}

impl GoTermInternal {
    pub fn new<I: Into<GoTermId>>(id: I) -> GoTermInternal {
        GoTermInternal {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &GoTermId {
        &self.id
    }

    pub fn alt_ids(&self) -> &[GoTermId] {
        &self.alt_ids
    }

    pub fn add_alt_id<I: Into<GoTermId>>(&mut self, alt_id: I) {
        let alt_id = alt_id.into();
        if alt_id != self.id && !self.alt_ids.contains(&alt_id) {
            self.alt_ids.push(alt_id);
        }
    }

    pub fn take_alt_ids(&mut self) -> Vec<GoTermId> {
        std::mem::take(&mut self.alt_ids)
    }

    pub fn parent_refs(&self, relation: Relation) -> &ParentRefs {
        match relation {
            Relation::IsA => &self.is_a,
            Relation::PartOf => &self.part_of,
        }
    }

    pub fn add_parent(&mut self, relation: Relation, parent_ref: &str) {
        let parent_ref = parent_ref.trim().to_string();
        match relation {
            Relation::IsA => self.is_a.push(parent_ref),
            Relation::PartOf => self.part_of.push(parent_ref),
        }
    }

    /// Returns the first value of the attribute `key`
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn add_attribute(&mut self, key: &str, value: &str) {
        self.attributes
            .push((key.trim().to_string(), value.trim().to_string()));
    }
}

impl PartialEq for GoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTermInternal {}
