//! Learner feedback taxonomy.

use serde::{Deserialize, Serialize};
use crate::error::ParseError;

/// Something a learner reports struggling with on a problem.
///
/// Declaration order is the priority order used when rendering advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StruggleArea {
    /// Working out the algorithm
    #[serde(rename = "Algorithm Logic")]
    AlgorithmLogic,
    /// Picking the right data structure
    #[serde(rename = "Data Structure Choice")]
    DataStructureChoice,
    /// Boundary and degenerate inputs
    #[serde(rename = "Edge Cases")]
    EdgeCases,
    /// Reasoning about running time
    #[serde(rename = "Time Complexity")]
    TimeComplexity,
    /// Reasoning about memory use
    #[serde(rename = "Space Complexity")]
    SpaceComplexity,
    /// Turning the idea into code
    #[serde(rename = "Implementation")]
    Implementation,
    /// Reading the problem statement
    #[serde(rename = "Understanding Problem")]
    UnderstandingProblem,
    /// Finding mistakes
    #[serde(rename = "Debugging")]
    Debugging,
}

impl StruggleArea {
    /// Every area, in priority order.
    pub const ALL: [StruggleArea; 8] = [
        StruggleArea::AlgorithmLogic,
        StruggleArea::DataStructureChoice,
        StruggleArea::EdgeCases,
        StruggleArea::TimeComplexity,
        StruggleArea::SpaceComplexity,
        StruggleArea::Implementation,
        StruggleArea::UnderstandingProblem,
        StruggleArea::Debugging,
    ];

    /// Human-readable label, as shown to learners.
    pub fn label(&self) -> &'static str {
        match self {
            StruggleArea::AlgorithmLogic => "Algorithm Logic",
            StruggleArea::DataStructureChoice => "Data Structure Choice",
            StruggleArea::EdgeCases => "Edge Cases",
            StruggleArea::TimeComplexity => "Time Complexity",
            StruggleArea::SpaceComplexity => "Space Complexity",
            StruggleArea::Implementation => "Implementation",
            StruggleArea::UnderstandingProblem => "Understanding Problem",
            StruggleArea::Debugging => "Debugging",
        }
    }
}

impl std::fmt::Display for StruggleArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for StruggleArea {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StruggleArea::ALL
            .into_iter()
            .find(|area| area.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownStruggleArea(s.to_string()))
    }
}

/// How hard the learner found a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    /// Very easy
    VeryEasy,
    /// Easy
    Easy,
    /// Moderate
    Moderate,
    /// Challenging
    Challenging,
    /// Very hard
    VeryHard,
}

impl ExperienceLevel {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::VeryEasy => "very-easy",
            ExperienceLevel::Easy => "easy",
            ExperienceLevel::Moderate => "moderate",
            ExperienceLevel::Challenging => "challenging",
            ExperienceLevel::VeryHard => "very-hard",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::VeryEasy => "Very Easy",
            ExperienceLevel::Easy => "Easy",
            ExperienceLevel::Moderate => "Moderate",
            ExperienceLevel::Challenging => "Challenging",
            ExperienceLevel::VeryHard => "Very Hard",
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "very-easy" => Ok(ExperienceLevel::VeryEasy),
            "easy" => Ok(ExperienceLevel::Easy),
            "moderate" => Ok(ExperienceLevel::Moderate),
            "challenging" => Ok(ExperienceLevel::Challenging),
            "very-hard" => Ok(ExperienceLevel::VeryHard),
            _ => Err(ParseError::UnknownExperienceLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struggle_area_parses_its_own_label() {
        for area in StruggleArea::ALL {
            assert_eq!(area.label().parse::<StruggleArea>().unwrap(), area);
        }
    }

    #[test]
    fn test_struggle_area_parse_ignores_case() {
        assert_eq!(
            "edge cases".parse::<StruggleArea>().unwrap(),
            StruggleArea::EdgeCases
        );
        assert!("Recursion".parse::<StruggleArea>().is_err());
    }

    #[test]
    fn test_struggle_area_order_is_declaration_order() {
        let mut sorted = StruggleArea::ALL;
        sorted.sort();
        assert_eq!(sorted, StruggleArea::ALL);
    }

    #[test]
    fn test_struggle_area_serializes_as_label() {
        let json = serde_json::to_string(&StruggleArea::DataStructureChoice).unwrap();
        assert_eq!(json, "\"Data Structure Choice\"");
    }

    #[test]
    fn test_experience_level_wire_values() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::VeryHard).unwrap(),
            "\"very-hard\""
        );
        assert_eq!(
            "moderate".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Moderate
        );
        assert!("meh".parse::<ExperienceLevel>().is_err());
    }
}
