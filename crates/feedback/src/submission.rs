//! Feedback drafts and submission checks.
//!
//! A draft is what the feedback form edits. Submitting only validates it;
//! delivering the result is up to the caller.

use std::collections::{BTreeSet, HashSet};
use prep_core::{Difficulty, ExperienceLevel, StruggleArea};
use serde::{Deserialize, Serialize};

use crate::suggestion::suggestions_for;

/// Error type for feedback operations.
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Errors that can occur when submitting feedback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    /// No experience rating was chosen
    #[error("Please select your experience level for '{0}'")]
    MissingExperience(String),
}

/// Feedback being filled in for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    /// Problem the feedback is about
    pub problem_name: String,

    /// Problem difficulty
    pub difficulty: Difficulty,

    /// Company the problem was listed under
    pub company: String,

    /// How hard it felt, once chosen
    #[serde(default)]
    pub experience: Option<ExperienceLevel>,

    /// Selected struggle areas
    #[serde(default)]
    pub struggle_areas: BTreeSet<StruggleArea>,

    /// Free-form notes
    #[serde(default)]
    pub detailed_feedback: String,
}

impl FeedbackDraft {
    /// Start an empty draft for a problem.
    pub fn new(
        problem_name: impl Into<String>,
        difficulty: Difficulty,
        company: impl Into<String>,
    ) -> Self {
        Self {
            problem_name: problem_name.into(),
            difficulty,
            company: company.into(),
            experience: None,
            struggle_areas: BTreeSet::new(),
            detailed_feedback: String::new(),
        }
    }

    /// Choose the experience rating.
    pub fn with_experience(mut self, experience: ExperienceLevel) -> Self {
        self.experience = Some(experience);
        self
    }

    /// Select an area if unselected, otherwise unselect it.
    pub fn toggle(&mut self, area: StruggleArea) {
        if !self.struggle_areas.remove(&area) {
            self.struggle_areas.insert(area);
        }
    }

    /// Suggestions for the current selection.
    pub fn suggestions(&self) -> Vec<&'static str> {
        let selected: HashSet<StruggleArea> = self.struggle_areas.iter().copied().collect();
        suggestions_for(&selected)
    }

    /// Validate the draft.
    pub fn submit(self) -> Result<FeedbackSubmission> {
        let Some(experience) = self.experience else {
            return Err(FeedbackError::MissingExperience(self.problem_name));
        };

        Ok(FeedbackSubmission {
            problem_name: self.problem_name,
            difficulty: self.difficulty,
            company: self.company,
            experience,
            struggle_areas: self.struggle_areas,
            detailed_feedback: self.detailed_feedback,
        })
    }
}

/// Validated feedback, ready to hand to whoever collects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    /// Problem the feedback is about
    pub problem_name: String,
    /// Problem difficulty
    pub difficulty: Difficulty,
    /// Company the problem was listed under
    pub company: String,
    /// How hard it felt
    pub experience: ExperienceLevel,
    /// Selected struggle areas
    pub struggle_areas: BTreeSet<StruggleArea>,
    /// Free-form notes
    pub detailed_feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FeedbackDraft {
        FeedbackDraft::new("Two Sum", Difficulty::Easy, "Google")
    }

    #[test]
    fn test_submit_requires_experience() {
        let err = draft().submit().unwrap_err();
        assert_eq!(err, FeedbackError::MissingExperience("Two Sum".to_string()));
    }

    #[test]
    fn test_submit_keeps_selection() {
        let mut d = draft().with_experience(ExperienceLevel::Challenging);
        d.toggle(StruggleArea::Debugging);
        d.toggle(StruggleArea::EdgeCases);
        d.detailed_feedback = "Off by one on the last index".to_string();

        let submission = d.submit().unwrap();
        assert_eq!(submission.experience, ExperienceLevel::Challenging);
        assert_eq!(
            submission.struggle_areas.into_iter().collect::<Vec<_>>(),
            vec![StruggleArea::EdgeCases, StruggleArea::Debugging]
        );
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let mut d = draft();
        d.toggle(StruggleArea::Implementation);
        assert!(d.struggle_areas.contains(&StruggleArea::Implementation));
        d.toggle(StruggleArea::Implementation);
        assert!(d.struggle_areas.is_empty());
    }

    #[test]
    fn test_draft_suggestions_follow_selection() {
        let mut d = draft();
        assert!(d.suggestions().is_empty());

        d.toggle(StruggleArea::TimeComplexity);
        d.toggle(StruggleArea::DataStructureChoice);
        assert_eq!(
            d.suggestions(),
            vec![
                "Review common data structures and their use cases",
                "Practice analyzing time complexity with Big O notation",
            ]
        );
    }

    #[test]
    fn test_draft_wire_shape() {
        let json = r#"{"problemName":"LRU Cache","difficulty":"Medium","company":"Amazon","experience":"very-hard","struggleAreas":["Debugging"]}"#;
        let d: FeedbackDraft = serde_json::from_str(json).unwrap();

        assert_eq!(d.experience, Some(ExperienceLevel::VeryHard));
        assert!(d.struggle_areas.contains(&StruggleArea::Debugging));
        assert!(d.detailed_feedback.is_empty());
    }
}
