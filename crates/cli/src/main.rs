//! PrepTrack CLI - progress, suggestions and profile strength from catalog snapshots.

use std::path::PathBuf;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use prep_catalog::{CatalogSource, JsonCatalog};
use prep_core::{Company, DifficultyFilter, ProfileData, Topic};
use prep_feedback::suggestions_for_labels;
use prep_profile::{ProfileScorer, ProfileSection, SectionScore, StrengthBand};
use prep_progress::{
    entity_progress, recent_activity, totals, ActivityEntry, CompanyFilter, ProgressSnapshot,
    ProgressTotals,
};

#[derive(Parser)]
#[command(name = "preptrack")]
#[command(about = "Interview prep progress and feedback", long_about = None)]
struct Cli {
    /// Directory holding topics.json, companies.json and profile.json
    #[arg(long, global = true, default_value = ".preptrack")]
    catalog: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show topic and company progress
    Progress,
    /// List companies matching a search
    Companies {
        /// Title search text
        #[arg(long, default_value = "")]
        query: String,
        /// all, easy, medium or hard
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,
    },
    /// Suggest what to practice for the given struggle areas
    Suggest {
        /// Struggle area labels, e.g. "Edge Cases"
        areas: Vec<String>,
    },
    /// Show profile strength
    Profile,
}

/// Settings resolved from the command line.
#[derive(Debug, Clone)]
struct CliConfig {
    catalog_dir: PathBuf,
    json: bool,
}

#[derive(Debug, Serialize)]
struct ProgressReport {
    generated_at: DateTime<Utc>,
    snapshot: ProgressSnapshot,
    recent: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize)]
struct CompanyRow {
    id: String,
    title: String,
    solved: u32,
    total: u32,
    progress: u8,
}

#[derive(Debug, Serialize)]
struct CompanyReport {
    companies: Vec<CompanyRow>,
    totals: ProgressTotals,
}

#[derive(Debug, Serialize)]
struct ProfileReport {
    score: u8,
    band: StrengthBand,
    breakdown: Vec<SectionScore>,
    missing: Vec<ProfileSection>,
}

fn company_report(companies: &[Company], filter: &CompanyFilter) -> CompanyReport {
    let kept: Vec<Company> = filter.apply(companies).into_iter().cloned().collect();
    CompanyReport {
        companies: kept
            .iter()
            .map(|c| CompanyRow {
                id: c.id.to_string(),
                title: c.title.clone(),
                solved: c.solved_problems,
                total: c.total_problems,
                progress: entity_progress(c),
            })
            .collect(),
        totals: totals(&kept),
    }
}

fn profile_report(profile: &ProfileData, scorer: &ProfileScorer) -> ProfileReport {
    ProfileReport {
        score: scorer.score(profile),
        band: scorer.band(profile),
        breakdown: scorer.breakdown(profile),
        missing: scorer.missing_sections(profile),
    }
}

fn progress_report(topics: &[Topic], companies: &[Company]) -> ProgressReport {
    ProgressReport {
        generated_at: Utc::now(),
        snapshot: ProgressSnapshot::capture(topics, companies),
        recent: recent_activity(topics, companies),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig {
        catalog_dir: cli.catalog,
        json: cli.json,
    };
    debug!("Using catalog at {}", config.catalog_dir.display());

    let catalog = JsonCatalog::new(&config.catalog_dir);

    match cli.command {
        Commands::Progress => {
            let topics = catalog.load_topics().await?;
            let companies = catalog.load_companies().await?;
            let report = progress_report(&topics, &companies);

            if config.json {
                return print_json(&report);
            }

            println!("Topics ({})", topics.len());
            for topic in &topics {
                println!(
                    "  {} {} | {}/{} solved | {}%",
                    topic.icon,
                    topic.title,
                    topic.solved_problems,
                    topic.total_problems,
                    entity_progress(topic),
                );
            }
            let t = report.snapshot.topic_totals;
            println!("  Overall: {}/{} ({}%)", t.solved, t.total, t.percentage());

            let c = report.snapshot.company_totals;
            println!("Companies ({})", c.count);
            println!("  Overall: {}/{} ({}%)", c.solved, c.total, c.percentage());

            println!("DSA progress: {}%", report.snapshot.combined);
            println!("Recent activity");
            for entry in &report.recent {
                println!("  {} | {}/{} | {}%", entry.title, entry.solved, entry.total, entry.progress);
            }
            info!("Report generated at {}", report.generated_at);
        }
        Commands::Companies { query, difficulty } => {
            let companies = catalog.load_companies().await?;
            let report = company_report(&companies, &CompanyFilter::new(query, difficulty));

            if config.json {
                return print_json(&report);
            }

            if report.companies.is_empty() {
                println!("No companies found");
                return Ok(());
            }
            for row in &report.companies {
                println!("  {} | {}/{} problems | {}%", row.title, row.solved, row.total, row.progress);
            }
            println!(
                "Total problems: {} | Solved: {} | Companies: {}",
                report.totals.total, report.totals.solved, report.totals.count
            );
        }
        Commands::Suggest { areas } => {
            let suggestions = suggestions_for_labels(&areas);

            if config.json {
                return print_json(&suggestions);
            }

            if suggestions.is_empty() {
                println!("No suggestions for the selected areas");
            }
            for suggestion in suggestions {
                println!("  - {}", suggestion);
            }
        }
        Commands::Profile => {
            let profile = catalog.load_profile().await?;
            let report = profile_report(&profile, &ProfileScorer::new());

            if config.json {
                return print_json(&report);
            }

            println!("Profile strength: {}% ({})", report.score, report.band.as_str());
            for line in &report.breakdown {
                let mark = if line.present { "x" } else { " " };
                println!("  [{}] {} ({} pts)", mark, line.section, line.weight);
            }
            if let Some(next) = report.missing.first() {
                println!("Next: add {}", next.label().to_lowercase());
            }
        }
    }

    Ok(())
}
