use super::prompts;

/// The experts a user can pick on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    HealthAdvisor,
    TravelPlanner,
}

impl Persona {
    /// Display order on the form. The first entry is preselected.
    pub const ALL: [Persona; 2] = [Persona::HealthAdvisor, Persona::TravelPlanner];

    /// Accepts the wire label (`health-advisor`) or the display name.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label || p.display_name() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Persona::HealthAdvisor => "health-advisor",
            Persona::TravelPlanner => "travel-planner",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Persona::HealthAdvisor => "健康アドバイザー",
            Persona::TravelPlanner => "旅行プランナー",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Persona::HealthAdvisor => prompts::HEALTH_ADVISOR_PROMPT,
            Persona::TravelPlanner => prompts::TRAVEL_PLANNER_PROMPT,
        }
    }
}

/// Resolves any label to a system instruction. Unknown labels get the
/// general assistant prompt instead of an error.
pub fn instruction_for(label: &str) -> &'static str {
    Persona::from_label(label)
        .map(Persona::instruction)
        .unwrap_or(prompts::FALLBACK_PROMPT)
}
