use anyhow::Context;

use crate::models::{AssessmentResult, BridgeRole, MatchOutcome, Question, Role, RoleMatch};

/// Normalized scores below this floor route to the bridge catalog.
pub const BRIDGE_FLOOR: u32 = 70;
/// Qualified results are capped at this many roles.
pub const MAX_MATCHES: usize = 3;
/// Highest option value on any question.
pub const MAX_OPTION_VALUE: u8 = 5;

/// Maximum possible weighted raw score for a question bank. Depends only on
/// the static bank, so callers may compute it once.
pub fn max_score(questions: &[Question]) -> u32 {
    questions
        .iter()
        .map(|q| u32::from(MAX_OPTION_VALUE) * q.weight)
        .sum()
}

/// Scores an answer sequence against the question bank and matches roles.
///
/// Never fails: short answer sequences contribute nothing for the missing
/// positions, extra answers are ignored, out-of-range values are clamped to
/// [0, 5] (0 meaning "unanswered"), and an empty bank yields a zero score.
/// Rounding is half away from zero throughout.
pub fn calculate_result(
    questions: &[Question],
    answers: &[u8],
    roles: &[Role],
    bridge_roles: &[BridgeRole],
) -> AssessmentResult {
    let raw_score: u32 = questions
        .iter()
        .zip(answers.iter())
        .map(|(question, answer)| u32::from((*answer).min(MAX_OPTION_VALUE)) * question.weight)
        .sum();

    let max = max_score(questions);
    let final_score = if max == 0 {
        0
    } else {
        (f64::from(raw_score) / f64::from(max) * 100.0).round() as u32
    };

    if final_score < BRIDGE_FLOOR {
        return AssessmentResult {
            final_score,
            outcome: MatchOutcome::Bridge(bridge_roles.to_vec()),
        };
    }

    let mut matches: Vec<RoleMatch> = roles
        .iter()
        .filter(|role| role.score_threshold <= final_score)
        .map(|role| {
            // a threshold of 0 would divide by zero
            let floor = role.score_threshold.max(1);
            let match_percent =
                (f64::from(final_score) / f64::from(floor) * 100.0).round() as u32;
            RoleMatch {
                role: role.clone(),
                match_percent,
                display_percent: match_percent.min(100),
            }
        })
        .collect();

    // sort_by is stable, so ties keep catalog order
    matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    matches.truncate(MAX_MATCHES);

    AssessmentResult {
        final_score,
        outcome: MatchOutcome::Qualified(matches),
    }
}

/// Parses a comma-separated answer list such as "4,5,3". Also accepts the
/// pipe separator used in import CSVs.
pub fn parse_answers(raw: &str) -> anyhow::Result<Vec<u8>> {
    raw.split(|c| c == ',' || c == '|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u8>()
                .with_context(|| format!("invalid answer value '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::QuestionOption;

    fn question(id: u32, weight: u32) -> Question {
        Question {
            id,
            weight,
            options: (1..=5)
                .map(|value| QuestionOption {
                    value,
                    label: format!("option {value}"),
                })
                .collect(),
        }
    }

    fn role(title: &str, score_threshold: u32) -> Role {
        Role {
            title: title.to_string(),
            score_threshold,
            skills: vec!["troubleshooting".to_string()],
            salary_range: "$50,000 - $65,000".to_string(),
            certifications: vec!["CompTIA A+".to_string()],
        }
    }

    fn bridge(title: &str) -> BridgeRole {
        BridgeRole {
            title: title.to_string(),
            skills: vec!["curiosity".to_string()],
            salary_range: "$30,000 - $38,000".to_string(),
        }
    }

    #[test]
    fn max_score_sums_weighted_top_values() {
        let bank = vec![question(1, 2), question(2, 5)];
        assert_eq!(max_score(&bank), 35);
    }

    #[test]
    fn all_top_answers_score_one_hundred() {
        let bank = catalog::question_bank();
        let answers = vec![5u8; bank.len()];
        let result =
            calculate_result(&bank, &answers, &catalog::roles(), &catalog::bridge_roles());
        assert_eq!(result.final_score, 100);
        assert!(!result.is_bridge());
    }

    #[test]
    fn all_bottom_answers_score_twenty_regardless_of_weights() {
        let bank = vec![question(1, 2), question(2, 3), question(3, 5)];
        let answers = vec![1u8; bank.len()];
        let result = calculate_result(&bank, &answers, &[], &[bridge("Lab Assistant")]);
        assert_eq!(result.final_score, 20);
        assert!(result.is_bridge());
    }

    #[test]
    fn single_question_extremes() {
        let bank = vec![question(1, 1)];
        let bridges = vec![bridge("Lab Assistant"), bridge("Support Apprentice")];

        let top = calculate_result(&bank, &[5], &[role("Analyst", 70)], &bridges);
        assert_eq!(top.final_score, 100);
        assert!(!top.is_bridge());

        let bottom = calculate_result(&bank, &[1], &[role("Analyst", 70)], &bridges);
        assert_eq!(bottom.final_score, 20);
        assert!(bottom.is_bridge());
        assert_eq!(
            bottom.matched_titles(),
            vec!["Lab Assistant".to_string(), "Support Apprentice".to_string()]
        );
    }

    #[test]
    fn deterministic_for_fixed_answers() {
        let bank = catalog::question_bank();
        let answers: Vec<u8> = (0..bank.len()).map(|i| (i % 5) as u8 + 1).collect();
        let first =
            calculate_result(&bank, &answers, &catalog::roles(), &catalog::bridge_roles());
        let second =
            calculate_result(&bank, &answers, &catalog::roles(), &catalog::bridge_roles());
        assert_eq!(first.final_score, second.final_score);
        assert_eq!(first.matched_titles(), second.matched_titles());
        assert_eq!(first.is_bridge(), second.is_bridge());
    }

    #[test]
    fn score_stays_within_bounds_and_grows_monotonically() {
        let bank = catalog::question_bank();
        let mut answers = vec![3u8; bank.len()];
        let mut previous =
            calculate_result(&bank, &answers, &catalog::roles(), &catalog::bridge_roles())
                .final_score;
        assert!(previous <= 100);

        for i in 0..answers.len() {
            answers[i] = 5;
            let score =
                calculate_result(&bank, &answers, &catalog::roles(), &catalog::bridge_roles())
                    .final_score;
            assert!(score >= previous);
            assert!(score <= 100);
            previous = score;
        }
    }

    #[test]
    fn bridge_floor_is_exactly_seventy() {
        // one question of weight 1: answer values map straight to score * 20,
        // so drive the boundary with a 100-question bank instead
        let bank: Vec<Question> = (1..=100).map(|id| question(id, 1)).collect();
        let bridges = vec![bridge("Lab Assistant")];
        let role_catalog = vec![role("Support Specialist", 70)];

        // 345 of 500 raw -> 69
        let mut answers = vec![3u8; 100];
        for answer in answers.iter_mut().take(45) {
            *answer = 4;
        }
        let below = calculate_result(&bank, &answers, &role_catalog, &bridges);
        assert_eq!(below.final_score, 69);
        assert!(below.is_bridge());
        assert_eq!(below.matched_titles(), vec!["Lab Assistant".to_string()]);

        // 350 of 500 raw -> 70
        for answer in answers.iter_mut().take(50) {
            *answer = 4;
        }
        let at_floor = calculate_result(&bank, &answers, &role_catalog, &bridges);
        assert_eq!(at_floor.final_score, 70);
        assert!(!at_floor.is_bridge());
        assert_eq!(
            at_floor.matched_titles(),
            vec!["Support Specialist".to_string()]
        );
    }

    #[test]
    fn qualified_matches_are_capped_at_three() {
        let bank = vec![question(1, 1)];
        let role_catalog: Vec<Role> = (0..6).map(|i| role(&format!("Role {i}"), 70)).collect();
        let result = calculate_result(&bank, &[5], &role_catalog, &[]);
        match result.outcome {
            MatchOutcome::Qualified(matches) => assert_eq!(matches.len(), 3),
            MatchOutcome::Bridge(_) => panic!("expected qualified outcome"),
        }
    }

    #[test]
    fn matches_sort_by_descending_match_percent() {
        let bank: Vec<Question> = (1..=10).map(|id| question(id, 1)).collect();
        let role_catalog = vec![
            role("Stretch", 90),
            role("Solid", 80),
            role("Entry", 70),
        ];
        // 45 of 50 raw -> 90
        let mut answers = vec![4u8; 10];
        for answer in answers.iter_mut().take(5) {
            *answer = 5;
        }
        let result = calculate_result(&bank, &answers, &role_catalog, &[]);
        assert_eq!(result.final_score, 90);

        let matches = match result.outcome {
            MatchOutcome::Qualified(matches) => matches,
            MatchOutcome::Bridge(_) => panic!("expected qualified outcome"),
        };
        let summary: Vec<(String, u32, u32)> = matches
            .iter()
            .map(|m| (m.role.title.clone(), m.match_percent, m.display_percent))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Entry".to_string(), 129, 100),
                ("Solid".to_string(), 113, 100),
                ("Stretch".to_string(), 100, 100),
            ]
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        let bank = vec![question(1, 1)];
        let role_catalog = vec![
            role("First", 80),
            role("Second", 80),
            role("Third", 80),
            role("Cheaper", 70),
        ];
        let result = calculate_result(&bank, &[4], &role_catalog, &[]);
        assert_eq!(result.final_score, 80);
        assert_eq!(
            result.matched_titles(),
            vec![
                "Cheaper".to_string(),
                "First".to_string(),
                "Second".to_string()
            ]
        );
    }

    #[test]
    fn short_and_empty_answer_sequences_degrade_to_bridge() {
        let bank = catalog::question_bank();
        let bridges = catalog::bridge_roles();

        let empty = calculate_result(&bank, &[], &catalog::roles(), &bridges);
        assert_eq!(empty.final_score, 0);
        assert!(empty.is_bridge());
        assert_eq!(empty.matched_titles().len(), bridges.len());

        let short = calculate_result(&bank, &[5, 5, 5], &catalog::roles(), &bridges);
        assert!(short.final_score < BRIDGE_FLOOR);
        assert!(short.is_bridge());
    }

    #[test]
    fn out_of_range_answers_are_clamped() {
        let bank = vec![question(1, 1)];
        let clamped = calculate_result(&bank, &[200], &[role("Analyst", 70)], &[]);
        assert_eq!(clamped.final_score, 100);

        let unanswered = calculate_result(&bank, &[0], &[], &[bridge("Lab Assistant")]);
        assert_eq!(unanswered.final_score, 0);
        assert!(unanswered.is_bridge());
    }

    #[test]
    fn empty_question_bank_scores_zero() {
        let result = calculate_result(&[], &[5, 5], &[], &[bridge("Lab Assistant")]);
        assert_eq!(result.final_score, 0);
        assert!(result.is_bridge());
    }

    #[test]
    fn extra_answers_beyond_the_bank_are_ignored() {
        let bank = vec![question(1, 1)];
        let result = calculate_result(&bank, &[5, 5, 5, 5], &[role("Analyst", 70)], &[]);
        assert_eq!(result.final_score, 100);
    }

    #[test]
    fn parse_answers_accepts_both_separators() {
        assert_eq!(parse_answers("4,5,3").unwrap(), vec![4, 5, 3]);
        assert_eq!(parse_answers("4|5|3").unwrap(), vec![4, 5, 3]);
        assert_eq!(parse_answers(" 2 , 1 ").unwrap(), vec![2, 1]);
        assert!(parse_answers("4,x,3").is_err());
    }
}
