//! Static career knowledge base.
//!
//! Pure data, loaded once at first use and never mutated at runtime: career
//! resources by stage and category, industry insights, stage transition
//! advice, challenge strategies, document tips and notable women leaders by
//! field. The response enhancer splices entries from these tables into model
//! replies.

mod catalog;

use crate::context::CareerStage;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Resource category within a career stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Networking,
    SkillBuilding,
    JobSearch,
    Leadership,
}

impl ResourceCategory {
    /// Human-readable label used in response lead-ins
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Networking => "networking",
            ResourceCategory::SkillBuilding => "skill building",
            ResourceCategory::JobSearch => "job search",
            ResourceCategory::Leadership => "leadership",
        }
    }
}

/// Career document kinds with curated tip lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    Interview,
    SalaryNegotiation,
}

/// Common career challenges with curated strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeKind {
    ImposterSyndrome,
    WorkLifeBalance,
    SalaryNegotiation,
    CareerPivot,
    Visibility,
    ManagingUp,
}

/// A recommended resource (course, community, platform, ...)
#[derive(Debug, Clone)]
pub struct Resource {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
}

/// Trends, challenges and opportunities for one industry
#[derive(Debug, Clone)]
pub struct IndustryInsight {
    pub trends: Vec<&'static str>,
    pub challenges_for_women: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
}

/// Description and strategies for one career challenge
#[derive(Debug, Clone)]
pub struct ChallengeAdvice {
    pub description: &'static str,
    pub strategies: Vec<&'static str>,
}

/// An inspiring leader profile
#[derive(Debug, Clone)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub known_for: &'static str,
}

/// The assembled knowledge base
pub struct KnowledgeBase {
    resources: HashMap<CareerStage, HashMap<ResourceCategory, Vec<Resource>>>,
    industries: Vec<(&'static str, IndustryInsight)>,
    transitions: HashMap<(CareerStage, CareerStage), Vec<&'static str>>,
    challenges: HashMap<ChallengeKind, ChallengeAdvice>,
    documents: HashMap<DocumentKind, Vec<&'static str>>,
    leaders: Vec<(&'static str, Vec<Leader>)>,
}

static KNOWLEDGE_BASE: LazyLock<KnowledgeBase> = LazyLock::new(catalog::build);

/// The process-wide knowledge base instance
pub fn knowledge_base() -> &'static KnowledgeBase {
    &KNOWLEDGE_BASE
}

impl KnowledgeBase {
    /// Resources for a stage and category
    pub fn resources_for(&self, stage: CareerStage, category: ResourceCategory) -> &[Resource] {
        self.resources
            .get(&stage)
            .and_then(|by_category| by_category.get(&category))
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Categories available for a stage
    pub fn categories_for(&self, stage: CareerStage) -> Vec<ResourceCategory> {
        self.resources
            .get(&stage)
            .map(|by_category| by_category.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Insights for an industry, by exact name first and then partial match
    /// in either direction.
    pub fn industry_insights(&self, industry: &str) -> Option<&IndustryInsight> {
        let wanted = industry.to_lowercase();

        if let Some((_, insight)) = self.industries.iter().find(|(name, _)| *name == wanted) {
            return Some(insight);
        }

        self.industries
            .iter()
            .find(|(name, _)| wanted.contains(name) || name.contains(wanted.as_str()))
            .map(|(_, insight)| insight)
    }

    /// Advice for a recognized career challenge
    pub fn challenge_advice(&self, kind: ChallengeKind) -> Option<&ChallengeAdvice> {
        self.challenges.get(&kind)
    }

    /// Tips for a career document kind
    pub fn document_tips(&self, kind: DocumentKind) -> &[&'static str] {
        self.documents.get(&kind).map(|tips| tips.as_slice()).unwrap_or(&[])
    }

    /// Advice for moving from one stage to another
    pub fn transition_advice(&self, from: CareerStage, to: CareerStage) -> &[&'static str] {
        self.transitions.get(&(from, to)).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Leaders for a field, by exact name first and then partial match; with
    /// no field given, one leader from each field.
    pub fn leaders_in(&self, field: Option<&str>) -> Vec<&Leader> {
        let Some(field) = field else {
            return self.leaders.iter().filter_map(|(_, list)| list.first()).collect();
        };

        let wanted = field.to_lowercase();

        if let Some((_, list)) = self.leaders.iter().find(|(name, _)| *name == wanted) {
            return list.iter().collect();
        }

        self.leaders
            .iter()
            .find(|(name, _)| wanted.contains(name) || name.contains(wanted.as_str()))
            .map(|(_, list)| list.iter().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_stage_has_three_categories() {
        let kb = knowledge_base();
        for stage in [CareerStage::Starter, CareerStage::Restarter, CareerStage::Riser] {
            assert_eq!(kb.categories_for(stage).len(), 3, "stage {:?}", stage);
        }
    }

    #[test]
    fn test_riser_has_leadership_but_no_job_search() {
        let kb = knowledge_base();
        assert!(!kb.resources_for(CareerStage::Riser, ResourceCategory::Leadership).is_empty());
        assert!(kb.resources_for(CareerStage::Riser, ResourceCategory::JobSearch).is_empty());
    }

    #[test]
    fn test_unset_stage_has_no_resources() {
        let kb = knowledge_base();
        assert!(kb.resources_for(CareerStage::Unset, ResourceCategory::Networking).is_empty());
        assert!(kb.categories_for(CareerStage::Unset).is_empty());
    }

    #[test]
    fn test_industry_exact_lookup() {
        let kb = knowledge_base();
        let insight = kb.industry_insights("technology").unwrap();
        assert!(!insight.trends.is_empty());
        assert!(!insight.opportunities.is_empty());
    }

    #[test]
    fn test_industry_partial_lookup() {
        let kb = knowledge_base();
        assert!(kb.industry_insights("the technology sector").is_some());
        assert!(kb.industry_insights("TECHNOLOGY").is_some());
        assert!(kb.industry_insights("agriculture").is_none());
    }

    #[test]
    fn test_every_industry_has_opportunities() {
        let kb = knowledge_base();
        for name in ["technology", "healthcare", "finance", "education", "creative"] {
            let insight = kb.industry_insights(name).unwrap();
            assert!(!insight.opportunities.is_empty(), "industry {}", name);
        }
    }

    #[test]
    fn test_challenge_advice_has_strategies() {
        let kb = knowledge_base();
        let advice = kb.challenge_advice(ChallengeKind::ImposterSyndrome).unwrap();
        assert!(!advice.description.is_empty());
        assert!(advice.strategies.len() >= 3);
    }

    #[test]
    fn test_document_tips_present_for_all_kinds() {
        let kb = knowledge_base();
        for kind in [
            DocumentKind::Resume,
            DocumentKind::CoverLetter,
            DocumentKind::Interview,
            DocumentKind::SalaryNegotiation,
        ] {
            assert!(kb.document_tips(kind).len() >= 5, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_transition_advice() {
        let kb = knowledge_base();
        assert!(!kb.transition_advice(CareerStage::Starter, CareerStage::Riser).is_empty());
        assert!(!kb.transition_advice(CareerStage::Restarter, CareerStage::Riser).is_empty());
        assert!(kb.transition_advice(CareerStage::Riser, CareerStage::Starter).is_empty());
    }

    #[test]
    fn test_leaders_without_field_samples_each_field() {
        let kb = knowledge_base();
        let sampled = kb.leaders_in(None);
        assert_eq!(sampled.len(), 3);
    }

    #[test]
    fn test_leaders_by_field() {
        let kb = knowledge_base();
        let tech = kb.leaders_in(Some("technology"));
        assert_eq!(tech.len(), 3);
        assert!(kb.leaders_in(Some("sports")).is_empty());
    }
}
