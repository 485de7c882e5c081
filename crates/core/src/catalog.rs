//! Problem catalog model - topics and companies with solved counts.

use serde::{Deserialize, Serialize};
use crate::error::ParseError;
use crate::id::{CompanyId, TopicId};

/// Anything that tracks a solved count against a total.
///
/// Implementations report the raw counts from the catalog snapshot; callers
/// must not assume `solved() <= total()` holds.
pub trait Tracked {
    /// Problems solved so far.
    fn solved(&self) -> u32;

    /// Problems available.
    fn total(&self) -> u32;
}

/// A DSA topic (arrays, graphs, ...) in the problem sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique identifier
    pub id: TopicId,

    /// Topic title
    pub title: String,

    /// Display icon
    #[serde(default)]
    pub icon: String,

    /// Problems in this topic
    #[serde(default)]
    pub total_problems: u32,

    /// Problems the learner has solved
    #[serde(default)]
    pub solved_problems: u32,
}

impl Topic {
    /// Create a topic with the given counts.
    pub fn new(id: impl Into<String>, title: impl Into<String>, total: u32, solved: u32) -> Self {
        Self {
            id: TopicId::new(id),
            title: title.into(),
            icon: String::new(),
            total_problems: total,
            solved_problems: solved,
        }
    }

    /// Set the display icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

impl Tracked for Topic {
    fn solved(&self) -> u32 {
        self.solved_problems
    }

    fn total(&self) -> u32 {
        self.total_problems
    }
}

/// A company whose interview problems are collected in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique identifier
    pub id: CompanyId,

    /// Company name
    pub title: String,

    /// Display icon
    #[serde(default)]
    pub icon: String,

    /// Problems attributed to this company
    #[serde(default)]
    pub total_problems: u32,

    /// Problems the learner has solved
    #[serde(default)]
    pub solved_problems: u32,

    /// Problem list, in catalog order
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Company {
    /// Create a company with the given counts and no problem list.
    pub fn new(id: impl Into<String>, title: impl Into<String>, total: u32, solved: u32) -> Self {
        Self {
            id: CompanyId::new(id),
            title: title.into(),
            icon: String::new(),
            total_problems: total,
            solved_problems: solved,
            problems: Vec::new(),
        }
    }

    /// Set the display icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Append a problem.
    pub fn with_problem(mut self, problem: Problem) -> Self {
        self.problems.push(problem);
        self
    }

    /// Whether at least one listed problem has the given difficulty.
    pub fn has_difficulty(&self, difficulty: Difficulty) -> bool {
        self.problems.iter().any(|p| p.difficulty == difficulty)
    }
}

impl Tracked for Company {
    fn solved(&self) -> u32 {
        self.solved_problems
    }

    fn total(&self) -> u32 {
        self.total_problems
    }
}

/// A single problem. Only the difficulty takes part in computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Problem title
    #[serde(default)]
    pub title: String,

    /// Difficulty rating
    pub difficulty: Difficulty,
}

impl Problem {
    /// Create a problem.
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            difficulty,
        }
    }
}

/// Problem difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy problem
    Easy,
    /// Medium problem
    Medium,
    /// Hard problem
    Hard,
}

impl Difficulty {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Difficulty selector for company filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyFilter {
    /// No difficulty constraint
    #[default]
    All,
    /// Require at least one problem of this difficulty
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Whether a problem of `difficulty` satisfies this filter.
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(d: Difficulty) -> Self {
        DifficultyFilter::Only(d)
    }
}

impl std::fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("all"),
            DifficultyFilter::Only(d) => f.write_str(&d.as_str().to_lowercase()),
        }
    }
}

impl std::str::FromStr for DifficultyFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        s.parse::<Difficulty>()
            .map(DifficultyFilter::Only)
            .map_err(|_| ParseError::UnknownDifficultyFilter(s.to_string()))
    }
}
