use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

mod catalog;
mod db;
mod email;
mod models;
mod report;
mod scoring;

use models::{MatchOutcome, SubmissionRecord};

#[derive(Parser)]
#[command(name = "assessment-funnel")]
#[command(about = "Career assessment scoring and lead funnel tracker for LaunchPath Academy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load realistic seed data
    Seed,
    /// Score an answer sheet without persisting anything
    Score {
        /// Comma-separated answer values, e.g. 4,5,3,...
        #[arg(long)]
        answers: String,
    },
    /// Score a quiz submission, persist it, and send the results email
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        industry: String,
        /// Comma-separated answer values, e.g. 4,5,3,...
        #[arg(long)]
        answers: String,
    },
    /// Import quiz submissions from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// List recent leads
    #[command(group(
        ArgGroup::new("scope")
            .args(["industry", "email"])
            .multiple(false)
    ))]
    Leads {
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value_t = 30)]
        since_days: i64,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Generate a markdown funnel report
    #[command(group(
        ArgGroup::new("scope")
            .args(["industry", "email"])
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value_t = 30)]
        since_days: i64,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

async fn connect_pool() -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to a production Postgres instance")?;

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")
}

fn print_result(result: &models::AssessmentResult) {
    println!("Final score: {}/100", result.final_score);
    match &result.outcome {
        MatchOutcome::Qualified(matches) => {
            println!("Qualified roles:");
            for matched in matches {
                println!(
                    "- {} (match {}%, threshold {}) {}",
                    matched.role.title,
                    matched.match_percent,
                    matched.role.score_threshold,
                    matched.role.salary_range
                );
            }
        }
        MatchOutcome::Bridge(roles) => {
            println!("Below the qualification floor; suggested entry roles:");
            for role in roles {
                println!("- {} {}", role.title, role.salary_range);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitDb => {
            let pool = connect_pool().await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect_pool().await?;
            db::seed(&pool).await?;
            println!("Seed data inserted.");
        }
        Commands::Score { answers } => {
            let answers = scoring::parse_answers(&answers)?;
            let result = scoring::calculate_result(
                &catalog::question_bank(),
                &answers,
                &catalog::roles(),
                &catalog::bridge_roles(),
            );
            print_result(&result);
        }
        Commands::Submit {
            name,
            email: lead_email,
            industry,
            answers,
        } => {
            let pool = connect_pool().await?;
            let answers = scoring::parse_answers(&answers)?;
            let result = scoring::calculate_result(
                &catalog::question_bank(),
                &answers,
                &catalog::roles(),
                &catalog::bridge_roles(),
            );

            let submission = SubmissionRecord {
                id: Uuid::new_v4(),
                full_name: name.clone(),
                email: lead_email.clone(),
                industry,
                score: result.final_score,
                matched_roles: result.matched_titles(),
                is_bridge: result.is_bridge(),
                submitted_at: Utc::now().date_naive(),
                source_key: format!("submit-{}", Uuid::new_v4()),
            };
            db::insert_submission(&pool, &submission).await?;

            let mailer = email::EmailClient::from_env();
            email::dispatch_results(mailer.as_ref(), &lead_email, &name, &result).await;

            print_result(&result);
            println!("Submission recorded for {lead_email}.");
        }
        Commands::Import { csv } => {
            let pool = connect_pool().await?;
            let inserted = db::import_csv(&pool, &csv).await?;
            println!("Inserted {inserted} submissions from {}.", csv.display());
        }
        Commands::Leads {
            industry,
            email: lead_email,
            since_days,
            limit,
        } => {
            let pool = connect_pool().await?;
            let since_date = report::cutoff_date(since_days);
            let submissions = db::fetch_submissions(
                &pool,
                since_date,
                industry.as_deref(),
                lead_email.as_deref(),
            )
            .await?;

            if submissions.is_empty() {
                println!("No submissions found for this window.");
                return Ok(());
            }

            println!("Recent leads:");
            for submission in submissions.iter().take(limit) {
                let path = if submission.is_bridge { "bridge" } else { "qualified" };
                println!(
                    "- {} ({}, {}) scored {} ({}) matching {}",
                    submission.full_name,
                    submission.email,
                    submission.industry,
                    submission.score,
                    path,
                    submission.matched_roles.join(", ")
                );
            }
        }
        Commands::Report {
            industry,
            email: lead_email,
            since_days,
            out,
        } => {
            let pool = connect_pool().await?;
            let since_date = report::cutoff_date(since_days);
            let submissions = db::fetch_submissions(
                &pool,
                since_date,
                industry.as_deref(),
                lead_email.as_deref(),
            )
            .await?;
            let report = report::build_report(
                industry.as_deref().or(lead_email.as_deref()),
                since_date,
                &submissions,
            );
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
