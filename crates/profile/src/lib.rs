//! Profile strength scoring.
//!
//! A weighted completeness score over the profile record, with a per-section
//! breakdown for "what to fill in next" prompts.

#![warn(missing_docs)]

pub mod section;
pub mod scorer;

pub use section::ProfileSection;
pub use scorer::{
    profile_strength, ProfileScorer, Result, ScoringError, ScoringWeights, SectionScore,
    StrengthBand,
};
