//! Errors raised when turning free text into model enums.

/// Errors that can occur while parsing model values from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not one of Easy, Medium, Hard
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Not one of all, easy, medium, hard
    #[error("Unknown difficulty filter: {0}")]
    UnknownDifficultyFilter(String),

    /// Label outside the struggle-area taxonomy
    #[error("Unknown struggle area: {0}")]
    UnknownStruggleArea(String),

    /// Not one of the experience rating values
    #[error("Unknown experience level: {0}")]
    UnknownExperienceLevel(String),
}
