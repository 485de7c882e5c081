//! Learning suggestions for reported struggle areas.
//!
//! Every area maps to at most one canned suggestion. Output follows the
//! taxonomy order in [`StruggleArea::ALL`], whatever order the selection
//! was made in.

use std::collections::HashSet;
use prep_core::StruggleArea;
use serde::Serialize;
use tracing::debug;

/// A suggestion attached to a struggle area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The area this addresses
    pub area: StruggleArea,
    /// Display icon
    pub icon: &'static str,
    /// Advice text
    pub message: &'static str,
}

/// The rule for an area, if it has one.
pub fn suggestion_rule(area: StruggleArea) -> Option<Suggestion> {
    let (icon, message) = match area {
        StruggleArea::AlgorithmLogic => (
            "💡",
            "Break down the problem into smaller steps before coding",
        ),
        StruggleArea::DataStructureChoice => (
            "📚",
            "Review common data structures and their use cases",
        ),
        StruggleArea::EdgeCases => (
            "🔍",
            "Always consider empty inputs, single elements, and boundary conditions",
        ),
        StruggleArea::TimeComplexity => (
            "⚡",
            "Practice analyzing time complexity with Big O notation",
        ),
        StruggleArea::SpaceComplexity
        | StruggleArea::Implementation
        | StruggleArea::UnderstandingProblem
        | StruggleArea::Debugging => return None,
    };

    Some(Suggestion { area, icon, message })
}

/// Suggestions for the selected areas, in taxonomy order.
pub fn detailed_suggestions(selected: &HashSet<StruggleArea>) -> Vec<Suggestion> {
    StruggleArea::ALL
        .into_iter()
        .filter(|area| selected.contains(area))
        .filter_map(suggestion_rule)
        .collect()
}

/// Suggestion messages for the selected areas, in taxonomy order.
pub fn suggestions_for(selected: &HashSet<StruggleArea>) -> Vec<&'static str> {
    detailed_suggestions(selected)
        .into_iter()
        .map(|s| s.message)
        .collect()
}

/// Suggestion messages for free-text area labels.
///
/// Labels outside the taxonomy are skipped.
pub fn suggestions_for_labels<I, S>(labels: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: HashSet<StruggleArea> = labels
        .into_iter()
        .filter_map(|label| match label.as_ref().parse::<StruggleArea>() {
            Ok(area) => Some(area),
            Err(e) => {
                debug!("Ignoring struggle area label: {}", e);
                None
            }
        })
        .collect();

    suggestions_for(&selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ignores_insertion_order() {
        let mut forward = HashSet::new();
        forward.insert(StruggleArea::EdgeCases);
        forward.insert(StruggleArea::AlgorithmLogic);

        let mut backward = HashSet::new();
        backward.insert(StruggleArea::AlgorithmLogic);
        backward.insert(StruggleArea::EdgeCases);

        let expected = vec![
            "Break down the problem into smaller steps before coding",
            "Always consider empty inputs, single elements, and boundary conditions",
        ];
        assert_eq!(suggestions_for(&forward), expected);
        assert_eq!(suggestions_for(&backward), expected);
    }

    #[test]
    fn test_areas_without_rules_are_skipped() {
        let selected: HashSet<_> = [
            StruggleArea::Debugging,
            StruggleArea::SpaceComplexity,
            StruggleArea::TimeComplexity,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            suggestions_for(&selected),
            vec!["Practice analyzing time complexity with Big O notation"]
        );
    }

    #[test]
    fn test_empty_selection_has_no_suggestions() {
        assert!(suggestions_for(&HashSet::new()).is_empty());
    }

    #[test]
    fn test_every_area_selected() {
        let all: HashSet<_> = StruggleArea::ALL.into_iter().collect();
        let areas: Vec<_> = detailed_suggestions(&all).iter().map(|s| s.area).collect();

        assert_eq!(
            areas,
            vec![
                StruggleArea::AlgorithmLogic,
                StruggleArea::DataStructureChoice,
                StruggleArea::EdgeCases,
                StruggleArea::TimeComplexity,
            ]
        );
    }

    #[test]
    fn test_rule_mapping_is_total() {
        let with_rule = StruggleArea::ALL
            .into_iter()
            .filter(|a| suggestion_rule(*a).is_some())
            .count();
        assert_eq!(with_rule, 4);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let messages = suggestions_for_labels(["Edge Cases", "Recursion", "", "algorithm logic"]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Break down the problem into smaller steps before coding");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let selected: HashSet<_> = StruggleArea::ALL.into_iter().collect();
        assert_eq!(suggestions_for(&selected), suggestions_for(&selected));
    }
}
