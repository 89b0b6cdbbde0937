use serde::{Deserialize, Serialize};

/// Role used for every action produced by the kitchen.
pub const COOK_ROLE: &str = "Cook";
/// Verb for a dish that was found on the menu.
pub const PREPARING_VERB: &str = "Preparing";
/// Verb for a dish that is not on the menu.
pub const REPORTS_VERB: &str = "Reports";

/// One action taken by a staff role in response to one ordered item.
///
/// Serialized with camelCase keys: `{"actorRole", "verb", "detail"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAction {
    pub actor_role: String,
    pub verb: String,
    pub detail: String,
}

impl AgentAction {
    pub fn new(
        actor_role: impl Into<String>,
        verb: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            actor_role: actor_role.into(),
            verb: verb.into(),
            detail: detail.into(),
        }
    }

    /// The cook starts preparing `dish`.
    pub fn preparing(dish: &str) -> Self {
        Self::new(COOK_ROLE, PREPARING_VERB, format!("Dish {dish}"))
    }

    /// The cook reports that `dish` is not on the menu.
    pub fn unavailable(dish: &str) -> Self {
        Self::new(COOK_ROLE, REPORTS_VERB, format!("Dish {dish} unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(AgentAction::preparing("Soup")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"actorRole": "Cook", "verb": "Preparing", "detail": "Dish Soup"})
        );
    }

    #[test]
    fn unavailable_detail_names_the_dish() {
        let action = AgentAction::unavailable("Bread");

        assert_eq!(action.verb, "Reports");
        assert_eq!(action.detail, "Dish Bread unavailable");
    }
}
