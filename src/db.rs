use anyhow::Context;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::SubmissionRecord;
use crate::{catalog, scoring};

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Inserts a submission. Returns false when the source key already exists;
/// existing rows are never touched.
pub async fn insert_submission(
    pool: &PgPool,
    submission: &SubmissionRecord,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO assessment_funnel.submissions
        (id, full_name, email, industry, score, matched_roles, is_bridge, submitted_at, source_key)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (source_key) DO NOTHING
        "#,
    )
    .bind(submission.id)
    .bind(&submission.full_name)
    .bind(&submission.email)
    .bind(&submission.industry)
    .bind(submission.score as i32)
    .bind(&submission.matched_roles)
    .bind(submission.is_bridge)
    .bind(submission.submitted_at)
    .bind(&submission.source_key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn fetch_submissions(
    pool: &PgPool,
    since_date: NaiveDate,
    industry: Option<&str>,
    email: Option<&str>,
) -> anyhow::Result<Vec<SubmissionRecord>> {
    let mut query = String::from(
        "SELECT id, full_name, email, industry, score, matched_roles, \
         is_bridge, submitted_at, source_key \
         FROM assessment_funnel.submissions \
         WHERE submitted_at >= $1",
    );

    if industry.is_some() {
        query.push_str(" AND industry = $2");
    } else if email.is_some() {
        query.push_str(" AND email = $2");
    }
    query.push_str(" ORDER BY submitted_at DESC");

    let mut rows = sqlx::query(&query).bind(since_date);

    if let Some(value) = industry {
        rows = rows.bind(value);
    } else if let Some(value) = email {
        rows = rows.bind(value);
    }

    let records = rows.fetch_all(pool).await?;
    let mut submissions = Vec::new();

    for row in records {
        let score: i32 = row.get("score");
        submissions.push(SubmissionRecord {
            id: row.get("id"),
            full_name: row.get("full_name"),
            email: row.get("email"),
            industry: row.get("industry"),
            score: score.max(0) as u32,
            matched_roles: row.get("matched_roles"),
            is_bridge: row.get("is_bridge"),
            submitted_at: row.get("submitted_at"),
            source_key: row.get("source_key"),
        });
    }

    Ok(submissions)
}

/// Seeds a few leads by running realistic answer sheets through the real
/// scoring engine.
pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let questions = catalog::question_bank();
    let roles = catalog::roles();
    let bridge_roles = catalog::bridge_roles();

    let leads: Vec<(&str, &str, &str, &str, Vec<u8>, NaiveDate)> = vec![
        (
            "seed-001",
            "Avery Lee",
            "avery.lee@example.com",
            "retail",
            vec![5, 4, 5, 3, 4, 4, 5, 3, 4, 4, 3, 3, 5, 4, 4, 3, 4, 5, 3, 5],
            NaiveDate::from_ymd_opt(2026, 2, 2).context("invalid date")?,
        ),
        (
            "seed-002",
            "Jules Moreno",
            "jules.moreno@example.com",
            "hospitality",
            vec![3, 3, 4, 2, 3, 3, 4, 4, 3, 3, 2, 2, 4, 3, 3, 2, 3, 5, 3, 3],
            NaiveDate::from_ymd_opt(2026, 1, 30).context("invalid date")?,
        ),
        (
            "seed-003",
            "Kiara Patel",
            "kiara.patel@example.com",
            "logistics",
            vec![2, 2, 3, 1, 2, 2, 3, 2, 3, 2, 2, 1, 3, 3, 2, 1, 3, 3, 2, 2],
            NaiveDate::from_ymd_opt(2026, 1, 28).context("invalid date")?,
        ),
    ];

    for (source_key, name, email, industry, answers, submitted_at) in leads {
        let result = scoring::calculate_result(&questions, &answers, &roles, &bridge_roles);
        let submission = SubmissionRecord {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: email.to_string(),
            industry: industry.to_string(),
            score: result.final_score,
            matched_roles: result.matched_titles(),
            is_bridge: result.is_bridge(),
            submitted_at,
            source_key: source_key.to_string(),
        };
        insert_submission(pool, &submission).await?;
    }

    Ok(())
}

pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        full_name: String,
        email: String,
        industry: String,
        /// Pipe-separated answer values, e.g. "4|5|3|...".
        answers: String,
        submitted_at: NaiveDate,
        source_key: Option<String>,
    }

    let questions = catalog::question_bank();
    let roles = catalog::roles();
    let bridge_roles = catalog::bridge_roles();

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let answers = scoring::parse_answers(&row.answers)
            .with_context(|| format!("bad answers for {}", row.email))?;
        let scored = scoring::calculate_result(&questions, &answers, &roles, &bridge_roles);

        let source_key = row
            .source_key
            .unwrap_or_else(|| format!("import-{}", Uuid::new_v4()));

        let submission = SubmissionRecord {
            id: Uuid::new_v4(),
            full_name: row.full_name,
            email: row.email,
            industry: row.industry,
            score: scored.final_score,
            matched_roles: scored.matched_titles(),
            is_bridge: scored.is_bridge(),
            submitted_at: row.submitted_at,
            source_key,
        };

        if insert_submission(pool, &submission).await? {
            inserted += 1;
        }
    }

    Ok(inserted)
}
