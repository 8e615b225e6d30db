use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse user-lifecycle classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CareerStage {
    /// Just starting a career
    Starter,
    /// Returning to work after a career break
    Restarter,
    /// Advancing in an established career
    Riser,
    /// Not yet determined
    #[default]
    Unset,
}

impl CareerStage {
    pub fn is_set(&self) -> bool {
        *self != CareerStage::Unset
    }
}

impl fmt::Display for CareerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CareerStage::Starter => "Starter",
            CareerStage::Restarter => "Restarter",
            CareerStage::Riser => "Riser",
            CareerStage::Unset => "Not determined yet",
        };
        write!(f, "{}", name)
    }
}

/// Mutable per-session record of inferred career attributes.
///
/// Mutated only by the context extractor (and explicit stage selection).
/// Skills and challenges are append-only with exact-string dedup; stage and
/// industry are first-write-wins; the career goal is last-write-wins. The
/// record lives for the duration of one chat session and is destroyed on
/// session reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    pub career_stage: CareerStage,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    pub challenges: Vec<String>,
    pub career_goal: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stage unless one is already set
    pub fn set_stage_if_unset(&mut self, stage: CareerStage) {
        if !self.career_stage.is_set() {
            self.career_stage = stage;
        }
    }

    /// Set the industry unless one is already set
    pub fn set_industry_if_unset(&mut self, industry: impl Into<String>) {
        if self.industry.is_none() {
            self.industry = Some(industry.into());
        }
    }

    /// Append a skill unless an identical entry already exists
    pub fn add_skill(&mut self, skill: impl Into<String>) {
        let skill = skill.into();
        if !self.skills.contains(&skill) {
            self.skills.push(skill);
        }
    }

    /// Append a challenge unless an identical entry already exists
    pub fn add_challenge(&mut self, challenge: impl Into<String>) {
        let challenge = challenge.into();
        if !self.challenges.contains(&challenge) {
            self.challenges.push(challenge);
        }
    }

    /// Overwrite the career goal
    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.career_goal = Some(goal.into());
    }
}
