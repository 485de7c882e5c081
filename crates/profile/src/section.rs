//! Scored profile sections.

use prep_core::ProfileData;
use serde::{Deserialize, Serialize};

/// A part of the profile that contributes to its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    /// Full name
    Name,
    /// Contact email
    Email,
    /// Phone number
    Phone,
    /// Professional summary
    Summary,
    /// At least one experience entry
    Experience,
    /// At least one project
    Projects,
    /// At least one education entry
    Education,
    /// At least one programming skill
    ProgrammingSkills,
    /// At least one certification
    Certifications,
}

impl ProfileSection {
    /// Every scored section.
    pub const ALL: [ProfileSection; 9] = [
        ProfileSection::Name,
        ProfileSection::Email,
        ProfileSection::Phone,
        ProfileSection::Summary,
        ProfileSection::Experience,
        ProfileSection::Projects,
        ProfileSection::Education,
        ProfileSection::ProgrammingSkills,
        ProfileSection::Certifications,
    ];

    /// Whether the section is filled in. Presence only; length and content
    /// are not graded.
    pub fn is_present(&self, profile: &ProfileData) -> bool {
        match self {
            ProfileSection::Name => !profile.name.is_empty(),
            ProfileSection::Email => !profile.email.is_empty(),
            ProfileSection::Phone => !profile.phone.is_empty(),
            ProfileSection::Summary => !profile.summary.is_empty(),
            ProfileSection::Experience => !profile.experience.is_empty(),
            ProfileSection::Projects => !profile.projects.is_empty(),
            ProfileSection::Education => !profile.education.is_empty(),
            ProfileSection::ProgrammingSkills => !profile.skills.programming.is_empty(),
            ProfileSection::Certifications => !profile.certifications.is_empty(),
        }
    }

    /// Label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileSection::Name => "Name",
            ProfileSection::Email => "Email",
            ProfileSection::Phone => "Phone",
            ProfileSection::Summary => "Professional summary",
            ProfileSection::Experience => "Work experience",
            ProfileSection::Projects => "Projects",
            ProfileSection::Education => "Education",
            ProfileSection::ProgrammingSkills => "Programming skills",
            ProfileSection::Certifications => "Certifications",
        }
    }
}

impl std::fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
