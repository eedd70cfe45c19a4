//! Client-held draft state and the wizard state machine.

use serde::{Deserialize, Serialize};

use crate::{AgentProfile, Property};

/// Bump when the persisted draft shape changes so old client copies can be
/// migrated instead of silently misread.
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

/// Font choice for a landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontChoice {
    #[default]
    Sans,
    Serif,
    Display,
}

/// Colour and font selections made in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    /// Hex colour, e.g. "#1d4ed8".
    pub primary_color: String,
    pub secondary_color: String,
    pub font: FontChoice,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            primary_color: "#1d4ed8".to_string(),
            secondary_color: "#0f172a".to_string(),
            font: FontChoice::Sans,
        }
    }
}

/// Stage of the publish wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    #[default]
    Editing,
    GeneratingContent,
    Previewing,
    Publishing,
    Published,
}

impl WizardStage {
    /// Whether the wizard may move from `self` to `next`.
    ///
    /// Forward movement is one stage at a time; `Editing` is reachable from
    /// any stage before `Published` so the user can go back and fix things.
    pub fn can_advance_to(self, next: WizardStage) -> bool {
        use WizardStage::*;
        match (self, next) {
            (Editing, GeneratingContent) => true,
            (GeneratingContent, Previewing) => true,
            (Previewing, Publishing) => true,
            (Publishing, Published) => true,
            (GeneratingContent | Previewing | Publishing, Editing) => true,
            _ => false,
        }
    }
}

/// The in-progress landing page, held client-side until publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub schema_version: u32,
    pub agent: AgentProfile,
    pub properties: Vec<Property>,
    pub branding: Branding,
    pub stage: WizardStage,
}

impl Draft {
    pub fn new(agent: AgentProfile) -> Self {
        Draft {
            schema_version: DRAFT_SCHEMA_VERSION,
            agent,
            properties: Vec::new(),
            branding: Branding::default(),
            stage: WizardStage::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_moves_forward_one_stage() {
        assert!(WizardStage::Editing.can_advance_to(WizardStage::GeneratingContent));
        assert!(WizardStage::Previewing.can_advance_to(WizardStage::Publishing));
        assert!(!WizardStage::Editing.can_advance_to(WizardStage::Publishing));
    }

    #[test]
    fn editing_is_reachable_until_published() {
        assert!(WizardStage::GeneratingContent.can_advance_to(WizardStage::Editing));
        assert!(WizardStage::Previewing.can_advance_to(WizardStage::Editing));
        assert!(WizardStage::Publishing.can_advance_to(WizardStage::Editing));
        assert!(!WizardStage::Published.can_advance_to(WizardStage::Editing));
    }
}
