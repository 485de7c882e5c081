//! Catalog filtering.
//!
//! Filters borrow from the snapshot and keep input order.

use prep_core::{Company, DifficultyFilter, Topic};
use tracing::debug;

/// Case-insensitive substring match on a title. An empty query matches.
pub fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Search text and difficulty applied to the company list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Title search text
    pub query: String,
    /// Required problem difficulty
    pub difficulty: DifficultyFilter,
}

impl CompanyFilter {
    /// Create a filter.
    pub fn new(query: impl Into<String>, difficulty: DifficultyFilter) -> Self {
        Self {
            query: query.into(),
            difficulty,
        }
    }

    /// Whether a company passes both the title and difficulty checks.
    pub fn matches(&self, company: &Company) -> bool {
        if !title_matches(&company.title, &self.query) {
            return false;
        }
        match self.difficulty {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => company.has_difficulty(difficulty),
        }
    }

    /// Apply to a company list.
    pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        let kept: Vec<&Company> = companies.iter().filter(|c| self.matches(c)).collect();
        debug!(
            "Company filter '{}' / {} kept {} of {}",
            self.query,
            self.difficulty,
            kept.len(),
            companies.len()
        );
        kept
    }
}

/// Companies whose title contains `query` and that list a problem of the
/// requested difficulty.
pub fn filter_companies<'a>(
    companies: &'a [Company],
    query: &str,
    difficulty: DifficultyFilter,
) -> Vec<&'a Company> {
    CompanyFilter::new(query, difficulty).apply(companies)
}

/// Topics whose title contains `query`.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    topics.iter().filter(|t| title_matches(&t.title, query)).collect()
}
