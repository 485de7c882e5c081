//! Learner profile model - the record the profile builder edits.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// A learner profile.
///
/// Every field defaults, so partially filled snapshots deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileData {
    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Phone number
    pub phone: String,

    /// GitHub handle
    pub github: String,

    /// LinkedIn handle
    pub linkedin: String,

    /// Professional summary
    pub summary: String,

    /// Work experience, most recent first
    pub experience: Vec<Experience>,

    /// Projects
    pub projects: Vec<Project>,

    /// Education history
    pub education: Vec<Education>,

    /// Skills by category
    pub skills: Skills,

    /// Certifications
    pub certifications: Vec<String>,
}

/// A work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// Role title
    pub title: String,
    /// Employer
    pub company: String,
    /// Free-form duration, e.g. "Jun 2023-Jul 2023"
    pub duration: String,
    /// What was done
    pub description: String,
}

/// A project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Description
    pub description: String,
    /// Technologies used
    pub technologies: Vec<String>,
}

/// An education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// Degree name
    pub degree: String,
    /// School or university
    pub institution: String,
    /// Free-form duration
    pub duration: String,
    /// Grade or GPA
    pub grade: String,
}

/// Skills grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    /// Programming languages
    pub programming: BTreeSet<String>,
    /// Web frameworks and APIs
    pub web: BTreeSet<String>,
    /// Databases
    pub databases: BTreeSet<String>,
    /// Tooling
    pub tools: BTreeSet<String>,
}
