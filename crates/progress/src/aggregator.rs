//! Progress aggregation service.
//!
//! Overall figures are always sum-weighted (`Σsolved / Σtotal`), never the
//! mean of per-entity percentages, so a topic with one problem cannot
//! outweigh a topic with a hundred.

use prep_core::{Company, CompanyId, Topic, TopicId, Tracked};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of topics shown in the recent activity strip.
const RECENT_TOPICS: usize = 2;

/// Number of companies shown in the recent activity strip.
const RECENT_COMPANIES: usize = 1;

/// Additive solved/total counts over a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTotals {
    /// Σ solved
    pub solved: u64,
    /// Σ total
    pub total: u64,
    /// Entities counted
    pub count: usize,
}

impl ProgressTotals {
    /// Add one entity's counts.
    pub fn add<T: Tracked + ?Sized>(&mut self, entity: &T) {
        self.solved += u64::from(entity.solved());
        self.total += u64::from(entity.total());
        self.count += 1;
    }

    /// Combine two sets of totals.
    pub fn merge(self, other: ProgressTotals) -> ProgressTotals {
        ProgressTotals {
            solved: self.solved + other.solved,
            total: self.total + other.total,
            count: self.count + other.count,
        }
    }

    /// Sum-weighted completion percentage.
    pub fn percentage(&self) -> u8 {
        percent(self.solved, self.total)
    }
}

/// Floor percentage with a zero-total guard.
///
/// Counts violating `solved <= total` are clamped to 100.
fn percent(solved: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    if solved > total {
        warn!("Solved count {} exceeds total {}; clamping to 100%", solved, total);
        return 100;
    }
    // u128 keeps the multiplication safe for any u64 sum
    (u128::from(solved) * 100 / u128::from(total)) as u8
}

/// Completion percentage of a single topic or company.
pub fn entity_progress<T: Tracked + ?Sized>(entity: &T) -> u8 {
    percent(u64::from(entity.solved()), u64::from(entity.total()))
}

/// Solved/total counts over a collection.
pub fn totals<T: Tracked>(entities: &[T]) -> ProgressTotals {
    let mut totals = ProgressTotals::default();
    for entity in entities {
        totals.add(entity);
    }
    totals
}

/// Sum-weighted completion percentage over a collection.
pub fn overall_progress<T: Tracked>(entities: &[T]) -> u8 {
    totals(entities).percentage()
}

/// Sum-weighted completion across topics and companies together.
pub fn combined_progress(topics: &[Topic], companies: &[Company]) -> u8 {
    totals(topics).merge(totals(companies)).percentage()
}

/// Whether an activity entry refers to a topic or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// DSA topic
    Topic,
    /// Company problem set
    Company,
}

/// One row of the recent activity strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Entity kind
    pub kind: ActivityKind,
    /// Catalog slug
    pub id: String,
    /// Display title
    pub title: String,
    /// Problems solved
    pub solved: u32,
    /// Problems available
    pub total: u32,
    /// Per-entity percentage
    pub progress: u8,
}

/// Recent activity: the leading topics followed by the leading company.
pub fn recent_activity(topics: &[Topic], companies: &[Company]) -> Vec<ActivityEntry> {
    let topic_rows = topics.iter().take(RECENT_TOPICS).map(|topic| ActivityEntry {
        kind: ActivityKind::Topic,
        id: topic.id.to_string(),
        title: topic.title.clone(),
        solved: topic.solved(),
        total: topic.total(),
        progress: entity_progress(topic),
    });

    let company_rows = companies.iter().take(RECENT_COMPANIES).map(|company| ActivityEntry {
        kind: ActivityKind::Company,
        id: company.id.to_string(),
        title: company.title.clone(),
        solved: company.solved(),
        total: company.total(),
        progress: entity_progress(company),
    });

    topic_rows.chain(company_rows).collect()
}

/// Progress over a catalog snapshot.
///
/// Freshly derived from the snapshot it was captured from; holding on to it
/// after the catalog changes gives stale figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Per-topic percentage, in catalog order
    pub topic_progress: Vec<(TopicId, u8)>,

    /// Per-company percentage, in catalog order
    pub company_progress: Vec<(CompanyId, u8)>,

    /// Topic roll-up
    pub topic_totals: ProgressTotals,

    /// Company roll-up
    pub company_totals: ProgressTotals,

    /// Sum-weighted percentage across both
    pub combined: u8,
}

impl ProgressSnapshot {
    /// Compute every figure for the given catalog.
    pub fn capture(topics: &[Topic], companies: &[Company]) -> Self {
        let topic_totals = totals(topics);
        let company_totals = totals(companies);

        Self {
            topic_progress: topics
                .iter()
                .map(|t| (t.id.clone(), entity_progress(t)))
                .collect(),
            company_progress: companies
                .iter()
                .map(|c| (c.id.clone(), entity_progress(c)))
                .collect(),
            topic_totals,
            company_totals,
            combined: topic_totals.merge(company_totals).percentage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, total: u32, solved: u32) -> Topic {
        Topic::new(id, id.to_uppercase(), total, solved)
    }

    #[test]
    fn test_entity_progress_floors() {
        assert_eq!(entity_progress(&topic("a", 3, 1)), 33);
        assert_eq!(entity_progress(&topic("b", 3, 2)), 66);
        assert_eq!(entity_progress(&topic("c", 7, 7)), 100);
    }

    #[test]
    fn test_entity_progress_zero_total() {
        assert_eq!(entity_progress(&topic("empty", 0, 0)), 0);
    }

    #[test]
    fn test_entity_progress_clamps_violations() {
        assert_eq!(entity_progress(&topic("bad", 4, 9)), 100);
        assert_eq!(entity_progress(&topic("bad-empty", 0, 3)), 0);
    }

    #[test]
    fn test_entity_progress_stays_in_range() {
        for total in 0..40u32 {
            for solved in 0..=total {
                let p = entity_progress(&topic("t", total, solved));
                assert!(p <= 100);
                if total == 0 {
                    assert_eq!(p, 0);
                }
            }
        }
    }

    #[test]
    fn test_overall_progress_is_sum_weighted() {
        let topics = vec![topic("small", 1, 1), topic("large", 99, 0)];

        // Mean of per-entity figures would be 50
        assert_eq!(overall_progress(&topics), 1);
    }

    #[test]
    fn test_overall_progress_empty_collections() {
        let none: Vec<Topic> = Vec::new();
        assert_eq!(overall_progress(&none), 0);

        let zeros = vec![topic("a", 0, 0), topic("b", 0, 0)];
        assert_eq!(overall_progress(&zeros), 0);
    }

    #[test]
    fn test_totals_are_additive() {
        let topics = vec![topic("a", 10, 4), topic("b", 20, 5), topic("c", 0, 0)];
        let t = totals(&topics);

        assert_eq!(t.solved, 9);
        assert_eq!(t.total, 30);
        assert_eq!(t.count, 3);
        assert_eq!(t.percentage(), 30);
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let topics = vec![topic("a", u32::MAX, u32::MAX), topic("b", u32::MAX, 0)];
        assert_eq!(overall_progress(&topics), 50);
    }

    #[test]
    fn test_combined_progress_spans_topics_and_companies() {
        let topics = vec![topic("arrays", 30, 15)];
        let companies = vec![Company::new("google", "Google", 70, 5)];

        assert_eq!(combined_progress(&topics, &companies), 20);
        assert_eq!(combined_progress(&[], &[]), 0);
    }

    #[test]
    fn test_recent_activity_takes_two_topics_and_one_company() {
        let topics = vec![topic("a", 10, 5), topic("b", 4, 1), topic("c", 1, 1)];
        let companies = vec![
            Company::new("google", "Google", 8, 2),
            Company::new("amazon", "Amazon", 8, 8),
        ];

        let rows = recent_activity(&topics, &companies);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[0].progress, 50);
        assert_eq!(rows[1].id, "b");
        assert_eq!(rows[1].progress, 25);
        assert_eq!(rows[2].kind, ActivityKind::Company);
        assert_eq!(rows[2].id, "google");
        assert_eq!(rows[2].progress, 25);
    }

    #[test]
    fn test_snapshot_matches_individual_calls() {
        let topics = vec![topic("a", 10, 3), topic("b", 0, 0)];
        let companies = vec![Company::new("meta", "Meta", 5, 5)];

        let snapshot = ProgressSnapshot::capture(&topics, &companies);
        assert_eq!(snapshot.topic_progress[0], (TopicId::new("a"), 30));
        assert_eq!(snapshot.topic_progress[1], (TopicId::new("b"), 0));
        assert_eq!(snapshot.company_progress[0].1, 100);
        assert_eq!(snapshot.topic_totals.percentage(), overall_progress(&topics));
        assert_eq!(snapshot.combined, combined_progress(&topics, &companies));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let topics = vec![topic("a", 13, 7), topic("b", 29, 11)];
        assert_eq!(overall_progress(&topics), overall_progress(&topics));
        assert_eq!(entity_progress(&topics[0]), entity_progress(&topics[0]));
        assert_eq!(
            ProgressSnapshot::capture(&topics, &[]),
            ProgressSnapshot::capture(&topics, &[])
        );
    }
}
