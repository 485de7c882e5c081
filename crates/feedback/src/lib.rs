//! Learner feedback.
//!
//! Struggle-area suggestions and feedback submission checks.

#![warn(missing_docs)]

pub mod suggestion;
pub mod submission;

pub use suggestion::{
    detailed_suggestions, suggestion_rule, suggestions_for, suggestions_for_labels, Suggestion,
};
pub use submission::{FeedbackDraft, FeedbackError, FeedbackSubmission, Result};
