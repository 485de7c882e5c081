//! PrepTrack core data models.
//!
//! This crate defines the catalog snapshots, feedback taxonomy and profile
//! records that the aggregation crates compute over.

#![warn(missing_docs)]

// Identities and parse errors
mod id;
mod error;

// Problem catalog
mod catalog;

// Learner feedback
mod feedback;

// Profile
mod profile;

// Re-exports
pub use id::*;
pub use error::ParseError;

// Catalog
pub use catalog::{Company, Difficulty, DifficultyFilter, Problem, Topic, Tracked};

// Feedback
pub use feedback::{ExperienceLevel, StruggleArea};

// Profile
pub use profile::{Education, Experience, ProfileData, Project, Skills};
