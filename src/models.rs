use chrono::NaiveDate;
use uuid::Uuid;

/// One quiz question. The option list always holds exactly one option per
/// value 1 through 5, in increasing order.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub weight: u32,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone)]
pub struct QuestionOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Role {
    pub title: String,
    /// Minimum normalized score (0-100) required to qualify.
    pub score_threshold: u32,
    pub skills: Vec<String>,
    pub salary_range: String,
    pub certifications: Vec<String>,
}

/// Entry-level fallback suggestion shown to candidates below the
/// qualification floor. Carries no threshold.
#[derive(Debug, Clone)]
pub struct BridgeRole {
    pub title: String,
    pub skills: Vec<String>,
    pub salary_range: String,
}

#[derive(Debug, Clone)]
pub struct RoleMatch {
    pub role: Role,
    /// score / threshold as a percentage; deliberately uncapped, so an
    /// overqualified candidate can see values above 100.
    pub match_percent: u32,
    /// match_percent clamped to 100 for display surfaces.
    pub display_percent: u32,
}

#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// Up to three qualifying roles, best match first.
    Qualified(Vec<RoleMatch>),
    /// The full bridge catalog, in catalog order.
    Bridge(Vec<BridgeRole>),
}

#[derive(Debug, Clone)]
pub struct AssessmentResult {
    pub final_score: u32,
    pub outcome: MatchOutcome,
}

impl AssessmentResult {
    pub fn is_bridge(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Bridge(_))
    }

    /// Titles of the matched roles, in result order. For the bridge path
    /// this is the whole bridge catalog.
    pub fn matched_titles(&self) -> Vec<String> {
        match &self.outcome {
            MatchOutcome::Qualified(matches) => {
                matches.iter().map(|m| m.role.title.clone()).collect()
            }
            MatchOutcome::Bridge(roles) => roles.iter().map(|r| r.title.clone()).collect(),
        }
    }
}

/// A persisted quiz submission. Append-only; rows are never updated.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub industry: String,
    pub score: u32,
    pub matched_roles: Vec<String>,
    pub is_bridge: bool,
    pub submitted_at: NaiveDate,
    pub source_key: String,
}

#[derive(Debug, Clone)]
pub struct RoleDemandSummary {
    pub title: String,
    pub count: usize,
    pub avg_score: f64,
}
