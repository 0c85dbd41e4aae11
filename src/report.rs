use std::fmt::Write;

use chrono::{Duration, NaiveDate, Utc};

use crate::models::{RoleDemandSummary, SubmissionRecord};

pub fn cutoff_date(since_days: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(since_days.max(1))
}

/// Counts how often each role title appears across submissions, with the
/// average score of the submissions that matched it.
pub fn summarize_roles(submissions: &[SubmissionRecord]) -> Vec<RoleDemandSummary> {
    let mut map: std::collections::HashMap<String, (usize, u64)> =
        std::collections::HashMap::new();

    for submission in submissions {
        for title in &submission.matched_roles {
            let entry = map.entry(title.clone()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += u64::from(submission.score);
        }
    }

    let mut summaries: Vec<RoleDemandSummary> = map
        .into_iter()
        .map(|(title, (count, total_score))| RoleDemandSummary {
            title,
            count,
            avg_score: if count == 0 {
                0.0
            } else {
                total_score as f64 / count as f64
            },
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.title.cmp(&b.title)));
    summaries
}

pub fn build_report(
    scope: Option<&str>,
    cutoff: NaiveDate,
    submissions: &[SubmissionRecord],
) -> String {
    let summaries = summarize_roles(submissions);
    let bridge_count = submissions.iter().filter(|s| s.is_bridge).count();

    let mut output = String::new();
    let scope_label = scope.unwrap_or("all industries");

    let _ = writeln!(output, "# Assessment Funnel Report");
    let _ = writeln!(
        output,
        "Generated for {} (submissions since {})",
        scope_label, cutoff
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Score Overview");

    if submissions.is_empty() {
        let _ = writeln!(output, "No submissions recorded for this window.");
    } else {
        let total_score: u64 = submissions.iter().map(|s| u64::from(s.score)).sum();
        let avg_score = total_score as f64 / submissions.len() as f64;
        let bridge_rate = bridge_count as f64 / submissions.len() as f64 * 100.0;
        let _ = writeln!(output, "- Submissions: {}", submissions.len());
        let _ = writeln!(output, "- Average score: {avg_score:.1}");
        let _ = writeln!(
            output,
            "- Bridge path: {bridge_count} submissions ({bridge_rate:.0}%)"
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Matched Roles");

    if summaries.is_empty() {
        let _ = writeln!(output, "No role matches recorded for this window.");
    } else {
        for summary in summaries.iter().take(10) {
            let _ = writeln!(
                output,
                "- {}: {} matches (avg score {:.1})",
                summary.title, summary.count, summary.avg_score
            );
        }
    }

    let mut recent = submissions.to_vec();
    recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Submissions");

    if recent.is_empty() {
        let _ = writeln!(output, "No submissions recorded for this window.");
    } else {
        for submission in recent.iter().take(5) {
            let path = if submission.is_bridge { "bridge" } else { "qualified" };
            let _ = writeln!(
                output,
                "- {} ({}, {}) scored {} on {} ({})",
                submission.full_name,
                submission.email,
                submission.industry,
                submission.score,
                submission.submitted_at,
                path
            );
        }
    }

    output
}
