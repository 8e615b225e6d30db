//! Response enhancement with knowledge-base content.
//!
//! Takes a raw model reply and splices in canned knowledge-base snippets
//! selected by keyword-matching the user's query: document tips, industry
//! opportunities, challenge strategies, and stage-appropriate resources, in
//! that fixed order, each capped at its item limit. Never enhances what
//! looks like a service-error message, and any fault during enhancement
//! falls back to the untouched base response.

use crate::context::CareerStage;
use crate::knowledge::{knowledge_base, ChallengeKind, DocumentKind, Resource, ResourceCategory};
use std::fmt::Write;
use tracing::warn;

const DOCUMENT_TIP_LIMIT: usize = 5;
const OPPORTUNITY_LIMIT: usize = 3;
const STRATEGY_LIMIT: usize = 3;
const RESOURCE_LIMIT: usize = 3;

/// Markers that identify a service-error message; all three must appear
const ERROR_MARKERS: [&str; 3] = ["API", "key", "connection"];

const DOCUMENT_KEYWORDS: &[(DocumentKind, &[&str])] = &[
    (DocumentKind::Resume, &["resume", "cv", "curriculum vitae"]),
    (DocumentKind::CoverLetter, &["cover letter", "application letter"]),
    (
        DocumentKind::Interview,
        &["interview", "job interview", "interview questions", "interview prep"],
    ),
    (
        DocumentKind::SalaryNegotiation,
        &["salary negotiation", "ask for raise", "compensation negotiation"],
    ),
];

const INDUSTRY_NAMES: &[&str] = &["technology", "healthcare", "finance", "education", "creative"];

const INDUSTRY_VARIANTS: &[(&str, &str)] = &[
    ("tech", "technology"),
    ("medical", "healthcare"),
    ("banking", "finance"),
    ("teaching", "education"),
    ("art", "creative"),
    ("design", "creative"),
];

const CHALLENGE_KEYWORDS: &[(ChallengeKind, &[&str])] = &[
    (
        ChallengeKind::ImposterSyndrome,
        &["imposter", "fraud", "not qualified", "don't deserve"],
    ),
    (
        ChallengeKind::WorkLifeBalance,
        &["work life", "balance", "burnout", "overwhelmed", "stress"],
    ),
    (
        ChallengeKind::SalaryNegotiation,
        &["negotiate", "salary", "pay", "compensation", "raise"],
    ),
    (
        ChallengeKind::CareerPivot,
        &["change career", "transition", "pivot", "switch field", "new industry"],
    ),
    (
        ChallengeKind::Visibility,
        &["visibility", "recognition", "noticed", "overlooked", "credit"],
    ),
    (ChallengeKind::ManagingUp, &["manager", "boss", "supervisor", "managing up"]),
];

/// Append relevant knowledge-base snippets to a model reply.
///
/// Error messages pass through byte-for-byte; a fault during enhancement
/// returns the base response verbatim, never a partial enhancement.
pub fn enhance(query: &str, stage: CareerStage, base: &str) -> String {
    if ERROR_MARKERS.iter().all(|marker| base.contains(marker)) {
        return base.to_string();
    }

    match try_enhance(query, stage, base) {
        Ok(enhanced) => enhanced,
        Err(err) => {
            warn!(error = %err, "Error enhancing response; returning base response");
            base.to_string()
        }
    }
}

fn try_enhance(query: &str, stage: CareerStage, base: &str) -> Result<String, std::fmt::Error> {
    let lower = query.to_lowercase();
    let kb = knowledge_base();
    let mut enhanced = base.to_string();

    if let Some(kind) = detect_document_kind(&lower) {
        let tips = kb.document_tips(kind);
        if !tips.is_empty() {
            write!(enhanced, "\n\nHere are some specific tips that might help:\n\n")?;
            for tip in tips.iter().take(DOCUMENT_TIP_LIMIT) {
                writeln!(enhanced, "• {}", tip)?;
            }
        }
    }

    if let Some(industry) = detect_industry_mention(&lower) {
        if let Some(insights) = kb.industry_insights(industry) {
            // Opportunities only; trends and challenges are never surfaced
            // unsolicited.
            if !insights.opportunities.is_empty() {
                write!(
                    enhanced,
                    "\n\nSome current opportunities in {} include:\n\n",
                    title_case(industry)
                )?;
                for opportunity in insights.opportunities.iter().take(OPPORTUNITY_LIMIT) {
                    writeln!(enhanced, "• {}", opportunity)?;
                }
            }
        }
    }

    if let Some(kind) = detect_challenge(&lower) {
        if let Some(advice) = kb.challenge_advice(kind) {
            write!(enhanced, "\n\nHere are some practical strategies that might help:\n\n")?;
            for strategy in advice.strategies.iter().take(STRATEGY_LIMIT) {
                writeln!(enhanced, "• {}", strategy)?;
            }
        }
    }

    if stage.is_set() {
        if let Some(category) = resource_category_for(&lower, stage) {
            let resources = kb.resources_for(stage, category);
            if !resources.is_empty() {
                write_resources(&mut enhanced, resources, category)?;
            }
        }
    }

    Ok(enhanced)
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

fn detect_document_kind(lower: &str) -> Option<DocumentKind> {
    DOCUMENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(kind, _)| *kind)
}

fn detect_industry_mention(lower: &str) -> Option<&'static str> {
    if let Some(name) = INDUSTRY_NAMES.iter().find(|name| lower.contains(*name)) {
        return Some(name);
    }

    INDUSTRY_VARIANTS
        .iter()
        .find(|(variant, _)| lower.contains(variant))
        .map(|(_, industry)| *industry)
}

fn detect_challenge(lower: &str) -> Option<ChallengeKind> {
    CHALLENGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(kind, _)| *kind)
}

/// Single-pass keyword sniff choosing which resource category fits the
/// query. Leadership is only offered to Risers.
fn resource_category_for(lower: &str, stage: CareerStage) -> Option<ResourceCategory> {
    if lower.contains("network") || lower.contains("connect") {
        Some(ResourceCategory::Networking)
    } else if lower.contains("skill") || lower.contains("learn") {
        Some(ResourceCategory::SkillBuilding)
    } else if lower.contains("job") || lower.contains("search") || lower.contains("find") {
        Some(ResourceCategory::JobSearch)
    } else if (lower.contains("lead") || lower.contains("manage")) && stage == CareerStage::Riser {
        Some(ResourceCategory::Leadership)
    } else {
        None
    }
}

fn write_resources(
    out: &mut String,
    resources: &[Resource],
    category: ResourceCategory,
) -> Result<(), std::fmt::Error> {
    write!(
        out,
        "\n\nHere are some {} resources that might help:\n\n",
        category.label()
    )?;
    for resource in resources.iter().take(RESOURCE_LIMIT) {
        writeln!(out, "• **{}**: {}", resource.name, resource.description)?;
    }
    Ok(())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "Here is my advice.";

    #[test]
    fn test_error_message_passes_through_unchanged() {
        let error = "I'm having API trouble: the key could not open a connection.";
        let enhanced = enhance("help with my resume in tech", CareerStage::Starter, error);
        assert_eq!(enhanced, error);
    }

    #[test]
    fn test_partial_error_markers_do_not_short_circuit() {
        // Only two of the three markers appear.
        let base = "The API key looks fine.";
        let enhanced = enhance("help with my resume", CareerStage::Unset, base);
        assert_ne!(enhanced, base);
    }

    #[test]
    fn test_resume_query_appends_document_tips() {
        let enhanced = enhance("how do I improve my resume", CareerStage::Unset, BASE);

        assert!(enhanced.starts_with(BASE));
        assert!(enhanced.contains("Here are some specific tips that might help:"));
        // Capped at five tips even though the table has seven.
        assert_eq!(enhanced.matches("• ").count(), 5);
    }

    #[test]
    fn test_industry_variant_appends_opportunities_only() {
        let enhanced = enhance("what's happening in tech these days", CareerStage::Unset, BASE);

        assert!(enhanced.contains("Some current opportunities in Technology include:"));
        assert_eq!(enhanced.matches("• ").count(), 3);
        // Trends and challenges stay out of unsolicited enhancements.
        assert!(!enhanced.contains("AI and machine learning"));
        assert!(!enhanced.contains("Gender gap"));
    }

    #[test]
    fn test_challenge_query_appends_strategies() {
        let enhanced = enhance("I feel like an imposter at work", CareerStage::Unset, BASE);

        assert!(enhanced.contains("Here are some practical strategies that might help:"));
        assert_eq!(enhanced.matches("• ").count(), 3);
    }

    #[test]
    fn test_stage_resources_selected_by_category_sniff() {
        let enhanced = enhance("how can I grow my network", CareerStage::Starter, BASE);

        assert!(enhanced.contains("Here are some networking resources that might help:"));
        assert!(enhanced.contains("**LinkedIn Learning - Networking Strategies**"));
    }

    #[test]
    fn test_leadership_resources_only_for_risers() {
        let riser = enhance("how do I lead my team better", CareerStage::Riser, BASE);
        assert!(riser.contains("Here are some leadership resources that might help:"));

        let starter = enhance("how do I lead my team better", CareerStage::Starter, BASE);
        assert!(!starter.contains("resources that might help"));
    }

    #[test]
    fn test_unset_stage_gets_no_resource_block() {
        let enhanced = enhance("help me find a job", CareerStage::Unset, BASE);
        assert!(!enhanced.contains("resources that might help"));
    }

    #[test]
    fn test_resume_tech_query_has_tips_then_opportunities_in_order() {
        let enhanced =
            enhance("I need help with my resume for a tech job", CareerStage::Starter, BASE);

        let tips = enhanced.find("Here are some specific tips that might help:").unwrap();
        let opportunities =
            enhanced.find("Some current opportunities in Technology include:").unwrap();
        assert!(tips < opportunities);

        // "job" also triggers the job-search resource block, after the rest.
        let resources = enhanced.find("Here are some job search resources").unwrap();
        assert!(opportunities < resources);
    }

    #[test]
    fn test_unmatched_query_returns_base_untouched() {
        let enhanced = enhance("hello there", CareerStage::Unset, BASE);
        assert_eq!(enhanced, BASE);
    }
}
