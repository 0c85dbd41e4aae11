//! Static question bank and role catalogs for the LaunchPath Academy
//! career assessment. Defined once, immutable at runtime.

use crate::models::{BridgeRole, Question, QuestionOption, Role};

fn question(id: u32, weight: u32, labels: [&str; 5]) -> Question {
    Question {
        id,
        weight,
        options: labels
            .iter()
            .enumerate()
            .map(|(index, label)| QuestionOption {
                value: index as u8 + 1,
                label: (*label).to_string(),
            })
            .collect(),
    }
}

fn role(
    title: &str,
    score_threshold: u32,
    skills: [&str; 3],
    salary_range: &str,
    certifications: &[&str],
) -> Role {
    Role {
        title: title.to_string(),
        score_threshold,
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        salary_range: salary_range.to_string(),
        certifications: certifications.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn bridge_role(title: &str, skills: [&str; 3], salary_range: &str) -> BridgeRole {
    BridgeRole {
        title: title.to_string(),
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        salary_range: salary_range.to_string(),
    }
}

pub fn question_bank() -> Vec<Question> {
    vec![
        question(
            1,
            5,
            [
                "I avoid troubleshooting problems myself",
                "I try one fix before asking for help",
                "I can usually work through common issues",
                "I enjoy diagnosing unfamiliar problems",
                "People come to me when something breaks",
            ],
        ),
        question(
            2,
            4,
            [
                "I rarely use a computer outside of messaging",
                "I handle email and web browsing comfortably",
                "I manage files, settings, and installs on my own",
                "I have set up networks or built machines",
                "I have scripted or automated tasks before",
            ],
        ),
        question(
            3,
            5,
            [
                "I give up quickly when something is confusing",
                "I push through if someone guides me",
                "I keep at problems with occasional breaks",
                "I work stubbornly until I find an answer",
                "Hard problems are the reason I show up",
            ],
        ),
        question(
            4,
            3,
            [
                "I have never written any code",
                "I have tried a tutorial or two",
                "I have finished small personal scripts",
                "I have built something others used",
                "I code regularly in more than one language",
            ],
        ),
        question(
            5,
            4,
            [
                "I prefer to be told exactly what to do",
                "I follow instructions but ask when stuck",
                "I figure most things out from documentation",
                "I teach myself new tools without prompting",
                "I learn fastest with no instructions at all",
            ],
        ),
        question(
            6,
            3,
            [
                "Math beyond arithmetic makes me anxious",
                "I get by with basic calculations",
                "I am comfortable with percentages and ratios",
                "I enjoy logic puzzles and word problems",
                "I seek out quantitative challenges",
            ],
        ),
        question(
            7,
            4,
            [
                "I cannot commit study time each week",
                "I could manage an hour or two weekly",
                "I can commit five hours a week",
                "I can commit ten hours a week",
                "I can treat this like a part-time job",
            ],
        ),
        question(
            8,
            2,
            [
                "I avoid explaining technical things to others",
                "I explain if asked, reluctantly",
                "I can walk a friend through a fix",
                "I enjoy teaching people how things work",
                "I am the designated explainer in my circle",
            ],
        ),
        question(
            9,
            3,
            [
                "Detail work drains me immediately",
                "I manage details when the stakes are high",
                "I double-check my work most of the time",
                "I catch mistakes others miss",
                "Precision is my defining work habit",
            ],
        ),
        question(
            10,
            4,
            [
                "New software intimidates me",
                "I adjust to new tools after a while",
                "I explore new tools' menus on day one",
                "I read release notes for fun",
                "I beta-test tools before they ship",
            ],
        ),
        question(
            11,
            3,
            [
                "I have never worked with a team on a deadline",
                "I have done group work in school settings",
                "I have shipped team projects at work",
                "I have coordinated others on a deadline",
                "I have led teams through crunch periods",
            ],
        ),
        question(
            12,
            2,
            [
                "I do not follow the tech industry at all",
                "I skim headlines occasionally",
                "I follow a few tech news sources",
                "I read deeply about the field weekly",
                "I participate in tech communities",
            ],
        ),
        question(
            13,
            5,
            [
                "A career change feels impossible right now",
                "I am curious but hesitant",
                "I am seriously weighing a change",
                "I have decided and am preparing",
                "I am all-in and ready to start today",
            ],
        ),
        question(
            14,
            3,
            [
                "Repetitive checks bore me into mistakes",
                "I tolerate routine when necessary",
                "I stay reliable through repetitive work",
                "I build checklists to keep routine sharp",
                "I improve the routine while doing it",
            ],
        ),
        question(
            15,
            4,
            [
                "Ambiguity paralyzes me",
                "I want requirements spelled out first",
                "I can start with a rough outline",
                "I thrive when the path is unclear",
                "I define the problem before anyone asks",
            ],
        ),
        question(
            16,
            2,
            [
                "I have no professional network in tech",
                "I know one or two people in the field",
                "I know several people I could ask for advice",
                "I have mentors in the industry",
                "I am embedded in a professional community",
            ],
        ),
        question(
            17,
            3,
            [
                "Feedback on my work puts me on the defensive",
                "I accept feedback but it stings",
                "I apply feedback after reflecting",
                "I actively ask for critical feedback",
                "I build feedback loops into everything I do",
            ],
        ),
        question(
            18,
            4,
            [
                "I have no experience helping customers",
                "I have handled complaints informally",
                "I have worked a customer-facing job",
                "I am known for calming difficult situations",
                "I have trained others in customer service",
            ],
        ),
        question(
            19,
            2,
            [
                "I lose track of passwords and accounts",
                "I keep things organized when reminded",
                "I maintain my own organized systems",
                "I organize systems for other people",
                "I audit and improve organizational systems",
            ],
        ),
        question(
            20,
            5,
            [
                "I cannot study without supervision",
                "I study when a deadline forces me",
                "I keep a loose self-study schedule",
                "I hold myself to a firm study routine",
                "I have completed self-paced programs before",
            ],
        ),
    ]
}

pub fn roles() -> Vec<Role> {
    vec![
        role(
            "IT Support Specialist",
            70,
            ["Troubleshooting", "Customer service", "Windows administration"],
            "$45,000 - $60,000",
            &["CompTIA A+"],
        ),
        role(
            "Help Desk Analyst",
            72,
            ["Ticket triage", "Communication", "Remote support tools"],
            "$42,000 - $56,000",
            &["CompTIA A+", "ITIL Foundation"],
        ),
        role(
            "QA Analyst",
            75,
            ["Test planning", "Attention to detail", "Bug reporting"],
            "$55,000 - $72,000",
            &["ISTQB Foundation"],
        ),
        role(
            "Network Administrator",
            80,
            ["Routing and switching", "Network monitoring", "Documentation"],
            "$62,000 - $80,000",
            &["CompTIA Network+"],
        ),
        role(
            "Systems Administrator",
            82,
            ["Linux administration", "Scripting", "Backup and recovery"],
            "$65,000 - $85,000",
            &["CompTIA Server+", "RHCSA"],
        ),
        role(
            "Cloud Support Engineer",
            85,
            ["Cloud platforms", "Incident response", "Infrastructure as code"],
            "$70,000 - $95,000",
            &["AWS Cloud Practitioner"],
        ),
        role(
            "Cybersecurity Analyst",
            88,
            ["Threat analysis", "Security monitoring", "Risk assessment"],
            "$75,000 - $100,000",
            &["CompTIA Security+"],
        ),
        role(
            "DevOps Engineer",
            92,
            ["CI/CD pipelines", "Containers", "Automation"],
            "$85,000 - $115,000",
            &["AWS Solutions Architect Associate", "CKA"],
        ),
    ]
}

pub fn bridge_roles() -> Vec<BridgeRole> {
    vec![
        bridge_role(
            "IT Fundamentals Trainee",
            ["Hardware basics", "Operating systems", "Study habits"],
            "$30,000 - $38,000",
        ),
        bridge_role(
            "Technical Support Apprentice",
            ["Customer empathy", "Guided troubleshooting", "Ticketing basics"],
            "$32,000 - $40,000",
        ),
        bridge_role(
            "Computer Lab Assistant",
            ["Device setup", "User assistance", "Inventory upkeep"],
            "$28,000 - $35,000",
        ),
        bridge_role(
            "Digital Literacy Tutor",
            ["Patient instruction", "Everyday software", "Clear communication"],
            "$29,000 - $36,000",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bank_holds_twenty_questions_with_unique_ids() {
        let bank = question_bank();
        assert_eq!(bank.len(), 20);
        let ids: HashSet<u32> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), bank.len());
    }

    #[test]
    fn every_question_offers_values_one_through_five_in_order() {
        for question in question_bank() {
            assert_eq!(question.options.len(), 5, "question {}", question.id);
            for (index, option) in question.options.iter().enumerate() {
                assert_eq!(option.value, index as u8 + 1, "question {}", question.id);
                assert!(!option.label.is_empty(), "question {}", question.id);
            }
        }
    }

    #[test]
    fn weights_fall_in_expected_range() {
        for question in question_bank() {
            assert!(
                (2..=5).contains(&question.weight),
                "question {} weight {}",
                question.id,
                question.weight
            );
        }
    }

    #[test]
    fn role_titles_are_unique_and_thresholds_reachable() {
        let catalog = roles();
        let titles: HashSet<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.len());
        for role in &catalog {
            assert!((70..=100).contains(&role.score_threshold), "{}", role.title);
        }
    }

    #[test]
    fn bridge_catalog_is_nonempty() {
        assert!(!bridge_roles().is_empty());
    }
}
