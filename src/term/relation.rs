use std::fmt::Display;
use std::str::FromStr;

use crate::color::Color;
use crate::GoError;

/// The type of a directed edge between a term and its parent
///
/// GO contains more relation types than these. Only the ones listed here
/// are used for subgraphs, all others are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationType {
    /// `is_a`
    IsA,
    /// `positively_regulates`
    PositivelyRegulates,
    /// `negatively_regulates`
    NegativelyRegulates,
    /// `regulates`
    Regulates,
    /// `part_of`
    PartOf,
    /// `has_part`
    HasPart,
}

impl RelationType {
    /// All relation types
    pub const ALL: [RelationType; 6] = [
        RelationType::IsA,
        RelationType::PositivelyRegulates,
        RelationType::NegativelyRegulates,
        RelationType::Regulates,
        RelationType::PartOf,
        RelationType::HasPart,
    ];

    /// Returns the display color of edges of this type
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::RelationType;
    ///
    /// assert_eq!(RelationType::IsA.color().to_string(), "#000000");
    /// assert_eq!(RelationType::NegativelyRegulates.color().to_string(), "#FF0000");
    /// ```
    pub fn color(&self) -> Color {
        match self {
            RelationType::IsA => Color::BLACK,
            RelationType::PositivelyRegulates => Color::GREEN,
            RelationType::NegativelyRegulates => Color::RED,
            RelationType::Regulates => Color::GOLD,
            RelationType::PartOf => Color::BLUE,
            RelationType::HasPart => Color::PURPLE,
        }
    }

    /// Returns the name as used in OBO files
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::IsA => "is_a",
            RelationType::PositivelyRegulates => "positively_regulates",
            RelationType::NegativelyRegulates => "negatively_regulates",
            RelationType::Regulates => "regulates",
            RelationType::PartOf => "part_of",
            RelationType::HasPart => "has_part",
        }
    }
}

impl FromStr for RelationType {
    type Err = GoError;

    /// Parses both the OBO spelling (`part_of`) and the
    /// GO.db spelling (`part of`, `is_a`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace([' ', '-'], "_").as_str() {
            "is_a" | "isa" => Ok(RelationType::IsA),
            "positively_regulates" => Ok(RelationType::PositivelyRegulates),
            "negatively_regulates" => Ok(RelationType::NegativelyRegulates),
            "regulates" => Ok(RelationType::Regulates),
            "part_of" => Ok(RelationType::PartOf),
            "has_part" => Ok(RelationType::HasPart),
            _ => Err(GoError::UnknownRelation(s.to_string())),
        }
    }
}

impl Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_spellings() {
        assert_eq!("is_a".parse::<RelationType>().unwrap(), RelationType::IsA);
        assert_eq!(
            "part of".parse::<RelationType>().unwrap(),
            RelationType::PartOf
        );
        assert_eq!(
            "negatively-regulates".parse::<RelationType>().unwrap(),
            RelationType::NegativelyRegulates
        );
    }

    #[test]
    fn unknown_relation_is_rejected() {
        let err = "occurs_in".parse::<RelationType>().unwrap_err();
        assert!(matches!(err, GoError::UnknownRelation(name) if name == "occurs_in"));
    }

    #[test]
    fn every_type_has_distinct_color() {
        let colors: HashSet<Color> = RelationType::ALL.iter().map(|r| r.color()).collect();
        assert_eq!(colors.len(), RelationType::ALL.len());
    }

    #[test]
    fn display_matches_obo() {
        for rel in RelationType::ALL {
            assert_eq!(rel.to_string().parse::<RelationType>().unwrap(), rel);
        }
    }
}
