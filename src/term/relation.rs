use std::fmt::Display;

use crate::GoError;

/// The relation between a term and one of its parents
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    /// Subsumption, the child is a more specific kind of the parent
    IsA,
    /// Composition, the child is a component of the parent
    PartOf,
}

impl Relation {
    /// Returns the name of the relation as used in `.obo` files
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::IsA => "is_a",
            Relation::PartOf => "part_of",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Relation {
    type Error = GoError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "is_a" => Ok(Relation::IsA),
            "part_of" => Ok(Relation::PartOf),
            other => Err(GoError::InvalidInput(format!("unknown relation {other}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Relation::try_from("is_a"), Ok(Relation::IsA));
        assert_eq!(Relation::try_from(" part_of"), Ok(Relation::PartOf));
        assert!(Relation::try_from("regulates").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Relation::IsA.to_string(), "is_a");
        assert_eq!(Relation::PartOf.to_string(), "part_of");
    }
}
