//! Proactive intent resolver
//!
//! Pure function from a chat message to a ranked list of suggested
//! actions. Evaluation walks the static rule table once; each matching
//! rule contributes exactly one suggestion. Results sort by descending
//! priority weight with a stable sort, so equal-priority suggestions
//! keep rule declaration order.
//!
//! Total over all string inputs: no error path, never panics.

use crate::intent_rules::{ActionCategory, ActionKind, IntentRule, RULES};
use crate::priority::Priority;
use serde::{Deserialize, Serialize};

/// A UI-actionable recommendation derived from one fired rule.
///
/// Lives for the duration of a single chat message render; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub id: String,
    pub category: ActionCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(flatten)]
    pub action: ActionKind,
}

impl SuggestedAction {
    fn from_rule(rule: &IntentRule) -> Self {
        Self {
            id: rule.id.to_string(),
            category: rule.category,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
            action: rule.action,
        }
    }
}

/// Resolve a free-text chat message to ranked action suggestions.
///
/// The message is lowercased once; rule keywords are compared as stored.
/// Returns the full ranked sequence - truncation for display is the
/// caller's concern.
pub fn resolve(message: &str) -> Vec<SuggestedAction> {
    let normalized = message.to_lowercase();

    let mut actions: Vec<SuggestedAction> = RULES
        .iter()
        .filter(|rule| rule.matches(&normalized))
        .map(SuggestedAction::from_rule)
        .collect();

    // sort_by is stable: equal weights keep declaration order.
    actions.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(actions: &[SuggestedAction]) -> Vec<&str> {
        actions.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_message_yields_no_suggestions() {
        assert!(resolve("").is_empty());
        assert!(resolve("   ").is_empty());
    }

    #[test]
    fn test_keyword_free_message_yields_no_suggestions() {
        assert!(resolve("hello world").is_empty());
        assert!(resolve("The quick brown fox jumps over the lazy dog").is_empty());
        assert!(resolve("¿dónde está la cafetería?").is_empty());
    }

    #[test]
    fn test_vacation_any_case_fires_leave_request_only() {
        for message in ["I want to book vacation days", "VACATION please", "VaCaTiOn soon"] {
            let actions = resolve(message);
            assert_eq!(ids(&actions), vec!["create-leave-request"], "message: {message}");
            assert_eq!(actions[0].priority, Priority::High);
        }
    }

    #[test]
    fn test_rule_fires_once_even_with_multiple_keyword_hits() {
        // "leave", "vacation" and "pto" all belong to create-leave-request.
        let actions = resolve("leave of absence, vacation, pto");
        assert_eq!(ids(&actions), vec!["create-leave-request"]);
    }

    #[test]
    fn test_equal_priority_tie_keeps_declaration_order() {
        let actions = resolve("I need help with my password and also want to request vacation");
        assert_eq!(ids(&actions), vec!["create-leave-request", "create-it-ticket"]);
        assert!(actions.iter().all(|a| a.priority == Priority::High));
    }

    #[test]
    fn test_schedule_overlap_fires_both_rules_hr_first() {
        // Documented quirk: "schedule" is a keyword of both contact-hr
        // (medium) and schedule-meeting (low). Both fire; hr ranks first.
        let actions = resolve("Can we schedule a meeting to discuss my manager's schedule?");
        assert_eq!(ids(&actions), vec!["contact-hr", "schedule-meeting"]);
        assert_eq!(actions[0].priority, Priority::Medium);
        assert_eq!(actions[1].priority, Priority::Low);
    }

    #[test]
    fn test_no_lower_priority_precedes_higher() {
        let actions = resolve(
            "my laptop broke while I was booking travel, where is the expense policy, \
             and can HR schedule a meeting about my benefits?",
        );
        assert!(actions.len() >= 4);
        for pair in actions.windows(2) {
            assert!(
                pair[0].priority.weight() >= pair[1].priority.weight(),
                "{} ranked below {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let message = "password reset and vacation request";
        assert_eq!(resolve(message), resolve(message));
    }

    #[test]
    fn test_serialized_shape_carries_kind_and_param() {
        let actions = resolve("vacation");
        let json = serde_json::to_value(&actions[0]).unwrap();
        assert_eq!(json["id"], "create-leave-request");
        assert_eq!(json["category"], "workflow");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["kind"], "start_workflow");
        assert_eq!(json["param"], "leave_request");
    }
}
