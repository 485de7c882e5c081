//! Profile strength scorer.

use prep_core::ProfileData;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::section::ProfileSection;

/// Scores are percentages; weights must add up to this.
const FULL_SCORE: u32 = 100;

/// Error type for scoring configuration.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors that can occur when configuring a scorer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// Weights do not add up to a full score
    #[error("Section weights must sum to 100, got {0}")]
    InvalidWeightTotal(u32),
}

/// Points each section is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Name
    pub name: u8,
    /// Email
    pub email: u8,
    /// Phone
    pub phone: u8,
    /// Summary
    pub summary: u8,
    /// Any experience entry
    pub experience: u8,
    /// Any project
    pub projects: u8,
    /// Any education entry
    pub education: u8,
    /// Any programming skill
    pub programming_skills: u8,
    /// Any certification
    pub certifications: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: 10,
            email: 10,
            phone: 5,
            summary: 15,
            experience: 20,
            projects: 15,
            education: 10,
            programming_skills: 10,
            certifications: 5,
        }
    }
}

impl ScoringWeights {
    /// Weight of one section.
    pub fn weight(&self, section: ProfileSection) -> u8 {
        match section {
            ProfileSection::Name => self.name,
            ProfileSection::Email => self.email,
            ProfileSection::Phone => self.phone,
            ProfileSection::Summary => self.summary,
            ProfileSection::Experience => self.experience,
            ProfileSection::Projects => self.projects,
            ProfileSection::Education => self.education,
            ProfileSection::ProgrammingSkills => self.programming_skills,
            ProfileSection::Certifications => self.certifications,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> u32 {
        ProfileSection::ALL
            .iter()
            .map(|s| u32::from(self.weight(*s)))
            .sum()
    }
}

/// One line of a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    /// Section
    pub section: ProfileSection,
    /// Points available
    pub weight: u8,
    /// Whether it is filled in
    pub present: bool,
    /// Points earned (weight or zero)
    pub earned: u8,
}

/// Coarse rating of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthBand {
    /// 80 and above
    Strong,
    /// 50 to 79
    Fair,
    /// Below 50
    Weak,
}

impl StrengthBand {
    /// Band for a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => StrengthBand::Strong,
            s if s >= 50 => StrengthBand::Fair,
            _ => StrengthBand::Weak,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthBand::Strong => "strong",
            StrengthBand::Fair => "fair",
            StrengthBand::Weak => "weak",
        }
    }
}

/// Weighted profile completeness scorer.
///
/// Holds only its weights; every score is recomputed from the profile passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileScorer {
    weights: ScoringWeights,
}

impl ProfileScorer {
    /// Create a scorer with the standard weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights.
    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        let total = weights.total();
        if total != FULL_SCORE {
            return Err(ScoringError::InvalidWeightTotal(total));
        }
        Ok(Self { weights })
    }

    /// The weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Profile strength, 0 to 100.
    pub fn score(&self, profile: &ProfileData) -> u8 {
        let score: u32 = ProfileSection::ALL
            .iter()
            .filter(|s| s.is_present(profile))
            .map(|s| u32::from(self.weights.weight(*s)))
            .sum();
        // Weights are validated to sum to FULL_SCORE
        score.min(FULL_SCORE) as u8
    }

    /// Per-section contribution, in section order.
    pub fn breakdown(&self, profile: &ProfileData) -> Vec<SectionScore> {
        ProfileSection::ALL
            .iter()
            .map(|&section| {
                let weight = self.weights.weight(section);
                let present = section.is_present(profile);
                SectionScore {
                    section,
                    weight,
                    present,
                    earned: if present { weight } else { 0 },
                }
            })
            .collect()
    }

    /// Sections still empty, most valuable first.
    pub fn missing_sections(&self, profile: &ProfileData) -> Vec<ProfileSection> {
        let mut missing: Vec<ProfileSection> = ProfileSection::ALL
            .into_iter()
            .filter(|s| !s.is_present(profile))
            .collect();
        // Stable sort keeps section order among equal weights
        missing.sort_by(|a, b| self.weights.weight(*b).cmp(&self.weights.weight(*a)));
        debug!("Profile is missing {} sections", missing.len());
        missing
    }

    /// Band for the profile's score.
    pub fn band(&self, profile: &ProfileData) -> StrengthBand {
        StrengthBand::from_score(self.score(profile))
    }
}

/// Profile strength with the standard weights.
pub fn profile_strength(profile: &ProfileData) -> u8 {
    ProfileScorer::new().score(profile)
}
