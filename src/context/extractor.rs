//! Keyword-driven context extraction.
//!
//! Scans free-form user text for fixed keyword and phrase tables and updates
//! the [`SessionContext`] in place. Matching is plain substring containment,
//! not word-boundary-aware; a keyword may match inside a longer word. The
//! tables are evaluated in a fixed, documented order and the first hit wins
//! per rule family per call. This never fails; the worst case is a no-op.

use crate::context::session::{CareerStage, SessionContext};

const STARTER_KEYWORDS: &[&str] =
    &["starting", "beginner", "entry level", "new graduate", "first job", "student"];
const RESTARTER_KEYWORDS: &[&str] =
    &["returning", "break", "gap", "maternity", "re-enter", "restart"];
const RISER_KEYWORDS: &[&str] =
    &["promotion", "advancing", "leadership", "senior", "manager", "director", "experienced"];

/// Industry tables, checked in this order; the first industry with a keyword
/// hit wins.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("technology", &["tech", "software", "it", "developer", "programming", "digital"]),
    ("healthcare", &["health", "medical", "nurse", "doctor", "hospital", "pharma"]),
    ("finance", &["finance", "banking", "accounting", "investment", "financial"]),
    ("education", &["education", "teaching", "teacher", "school", "academic", "professor"]),
    ("creative", &["design", "art", "writing", "creative", "media"]),
];

const SKILL_PHRASES: &[&str] = &[
    "experience in",
    "skilled in",
    "knowledge of",
    "proficient in",
    "expert in",
    "familiar with",
];
const CHALLENGE_PHRASES: &[&str] =
    &["struggle with", "challenge", "difficult", "problem", "issue", "hard time with"];
const GOAL_PHRASES: &[&str] =
    &["goal", "aim", "objective", "aspire", "want to", "hope to", "plan to"];

const SKILL_MIN_LEN: usize = 2;
const CHALLENGE_MIN_LEN: usize = 2;
const GOAL_MIN_LEN: usize = 5;

/// Scan `text` and update `context` in place.
///
/// Five independent rule families run per call: career stage, industry,
/// skills, challenges, career goal. Stage and industry only fire while their
/// slot is unset; skills and challenges append with exact-string dedup; the
/// goal is overwritten on every hit.
pub fn extract(text: &str, context: &mut SessionContext) {
    // ASCII lowering keeps byte offsets aligned with the original text, so
    // phrase captures can preserve the user's casing.
    let lower = text.to_ascii_lowercase();

    detect_stage(&lower, context);
    detect_industry(&lower, context);

    if let Some(skill) = capture_after_phrase(text, &lower, SKILL_PHRASES, SKILL_MIN_LEN) {
        context.add_skill(skill);
    }
    if let Some(challenge) = capture_after_phrase(text, &lower, CHALLENGE_PHRASES, CHALLENGE_MIN_LEN)
    {
        context.add_challenge(challenge);
    }
    if let Some(goal) = capture_after_phrase(text, &lower, GOAL_PHRASES, GOAL_MIN_LEN) {
        context.set_goal(goal);
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Stage families are checked in priority order: starter, restarter, riser.
fn detect_stage(lower: &str, context: &mut SessionContext) {
    if context.career_stage.is_set() {
        return;
    }

    let stage = if contains_any(lower, STARTER_KEYWORDS) {
        CareerStage::Starter
    } else if contains_any(lower, RESTARTER_KEYWORDS) {
        CareerStage::Restarter
    } else if contains_any(lower, RISER_KEYWORDS) {
        CareerStage::Riser
    } else {
        return;
    };

    context.set_stage_if_unset(stage);
}

fn detect_industry(lower: &str, context: &mut SessionContext) {
    if context.industry.is_some() {
        return;
    }

    for (industry, keywords) in INDUSTRY_KEYWORDS {
        if contains_any(lower, keywords) {
            context.set_industry_if_unset(*industry);
            return;
        }
    }
}

/// Phrase-anchored capture: find the first trigger phrase, take the text from
/// just after it to the next punctuation mark or end of string, and trim.
///
/// Only the first matching phrase in table order is used per call; a second
/// phrase of the same family in the same message is ignored, even when the
/// first capture fails the length check.
fn capture_after_phrase(
    original: &str,
    lower: &str,
    phrases: &[&str],
    min_len: usize,
) -> Option<String> {
    let (phrase, pos) = phrases
        .iter()
        .find_map(|phrase| lower.find(phrase).map(|pos| (phrase, pos)))?;

    let rest = &original[pos + phrase.len()..];
    let end = rest.find(['.', ',', ';', '!', '?']).unwrap_or(rest.len());
    let captured = rest[..end].trim();

    if captured.chars().count() > min_len {
        Some(captured.to_string())
    } else {
        None
    }
}
