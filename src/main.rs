use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DashboardConfig;
use crate::normalize::{round_display, LinearNormalizer, ScoreNormalizer};
use crate::report::ReportOptions;

mod config;
mod error;
mod input;
mod models;
mod normalize;
mod ranking;
mod report;

#[derive(Parser)]
#[command(name = "conviction-dashboard")]
#[command(about = "Normalize raw conviction scores and render ranking dashboards", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'f', long, global = true)]
    config: Option<PathBuf>,
    /// Highest attainable raw score; overrides the config file
    #[arg(long, global = true, env = "CONVICTION_MAX_SCORE")]
    max_score: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the conviction percentage for each raw score
    Normalize {
        #[arg(required = true, allow_negative_numbers = true)]
        scores: Vec<f64>,
    },
    /// Rank candidates from a CSV file by conviction
    Rank {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Render a markdown or HTML dashboard
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "dashboard.md")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Html,
}

fn build_normalizer(cli: &Cli, config: &DashboardConfig) -> anyhow::Result<LinearNormalizer> {
    LinearNormalizer::from_config(config.resolve_max_score(cli.max_score))
        .context("set --max-score, CONVICTION_MAX_SCORE, or [scoring] max_score")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conviction_dashboard=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    let normalizer = build_normalizer(&cli, &config)?;
    tracing::info!(max_score = normalizer.max_score(), "normalizer ready");

    match cli.command {
        Commands::Normalize { scores } => {
            for raw_score in scores {
                let conviction = normalizer.normalize(raw_score);
                println!("{raw_score} -> {:.1}%", round_display(conviction));
            }
        }
        Commands::Rank { csv, limit, json } => {
            let candidates = input::load_candidates(&csv)
                .with_context(|| format!("failed to read candidates from {}", csv.display()))?;
            let scores = ranking::rank_candidates(&candidates, &normalizer);

            if json {
                let top: Vec<_> = scores.into_iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&top)?);
                return Ok(());
            }

            if scores.is_empty() {
                println!("No candidates found in {}.", csv.display());
                return Ok(());
            }

            let spread = ranking::summarize_spread(&scores);
            println!(
                "Top candidates by conviction ({} distinct of {}):",
                spread.distinct, spread.count
            );
            for score in scores.iter().take(limit) {
                println!(
                    "- {} raw {:.2} conviction {:.1}%",
                    score.symbol,
                    score.raw_score,
                    round_display(score.conviction)
                );
            }
        }
        Commands::Report { csv, out, format } => {
            let candidates = input::load_candidates(&csv)
                .with_context(|| format!("failed to read candidates from {}", csv.display()))?;
            let scores = ranking::rank_candidates(&candidates, &normalizer);
            let options = ReportOptions {
                title: &config.report.title,
                max_score: normalizer.max_score(),
                top_n: config.report.top_n,
                refresh_secs: config.report.refresh_secs,
                generated_at: chrono::Utc::now(),
            };
            let rendered = match format {
                ReportFormat::Markdown => report::build_markdown(&options, &scores),
                ReportFormat::Html => report::build_html(&options, &scores),
            };
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(candidates = scores.len(), path = %out.display(), "dashboard written");
            println!("Dashboard written to {}.", out.display());
        }
    }

    Ok(())
}
