//! Divergence tracking between an edit session's working state and its
//! baseline, used for "voice-modified" highlighting.
//!
//! A [`ProposedChanges`] is the partial projection an external
//! voice-intent service produces. A field counts as changed only when it
//! was actually present in the proposal; mere divergence from the original
//! is the unsaved-changes gate's business, not this one's.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ChecklistItem, Priority};

/// Partial card projection proposed by the voice-control service. Absent
/// fields were not proposed. A proposal only sets concrete values; it
/// never clears a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProposedChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<i64>,
    pub list_id: Option<i64>,
    pub label_ids: Option<Vec<i64>>,
    pub checklist: Option<Vec<String>>,
}

impl ProposedChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the proposal defines a value for `field`.
    pub fn defines(&self, field: CardField) -> bool {
        match field {
            CardField::Title => self.title.is_some(),
            CardField::Description => self.description.is_some(),
            CardField::DueDate => self.due_date.is_some(),
            CardField::Priority => self.priority.is_some(),
            CardField::Assignee => self.assignee_id.is_some(),
            CardField::List => self.list_id.is_some(),
            CardField::Labels => self.label_ids.is_some(),
        }
    }
}

/// The editable scalar fields of a card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Title,
    Description,
    DueDate,
    Priority,
    Assignee,
    List,
    Labels,
}

impl CardField {
    pub const ALL: [CardField; 7] = [
        CardField::Title,
        CardField::Description,
        CardField::DueDate,
        CardField::Priority,
        CardField::Assignee,
        CardField::List,
        CardField::Labels,
    ];
}

/// Result of a field-level diff, driving the highlight and its tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub is_changed: bool,
    /// Display string of the prior value; `None` when it was empty
    /// (callers substitute a localized placeholder).
    pub previous: Option<String>,
}

impl FieldChange {
    pub fn unchanged() -> Self {
        Self {
            is_changed: false,
            previous: None,
        }
    }
}

/// Per-item diff flags. `is_new` excludes the other two; text and done
/// state are compared independently against the matched original.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemChange {
    pub is_new: bool,
    pub text_changed: bool,
    pub done_changed: bool,
}

/// Diff a working checklist item against the original snapshot. Persisted
/// items match by id; local items match by position.
pub fn item_change(item: &ChecklistItem, originals: &[ChecklistItem]) -> ItemChange {
    let original = match item.id.persisted() {
        Some(id) => originals.iter().find(|o| o.id.persisted() == Some(id)),
        None => originals.iter().find(|o| o.position == item.position),
    };
    match original {
        None => ItemChange {
            is_new: true,
            ..Default::default()
        },
        Some(original) => ItemChange {
            is_new: false,
            text_changed: item.text != original.text,
            done_changed: item.is_done != original.is_done,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn persisted(id: i64, text: &str, done: bool, position: u32) -> ChecklistItem {
        ChecklistItem {
            id: ItemId::Persisted(id),
            text: text.to_string(),
            is_done: done,
            position,
        }
    }

    fn local(id: u64, text: &str, done: bool, position: u32) -> ChecklistItem {
        ChecklistItem {
            id: ItemId::Local(id),
            text: text.to_string(),
            is_done: done,
            position,
        }
    }

    #[test]
    fn test_defines_tracks_presence_not_value() {
        let proposed = ProposedChanges {
            title: Some("New title".to_string()),
            label_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(proposed.defines(CardField::Title));
        assert!(proposed.defines(CardField::Labels));
        assert!(!proposed.defines(CardField::Description));
        assert!(!proposed.defines(CardField::DueDate));
    }

    #[test]
    fn test_empty_proposal() {
        assert!(ProposedChanges::default().is_empty());
        let proposed = ProposedChanges {
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert!(!proposed.is_empty());
    }

    #[test]
    fn test_item_without_match_is_new() {
        let originals = vec![persisted(1, "a", false, 1)];
        let change = item_change(&persisted(2, "b", false, 2), &originals);
        assert!(change.is_new);
        assert!(!change.text_changed);
        assert!(!change.done_changed);
    }

    #[test]
    fn test_persisted_item_matches_by_id_despite_position() {
        let originals = vec![persisted(1, "a", false, 1)];
        // Same id moved to another position: matched, nothing changed.
        let change = item_change(&persisted(1, "a", false, 3), &originals);
        assert_eq!(change, ItemChange::default());
    }

    #[test]
    fn test_text_and_done_flags_are_independent() {
        let originals = vec![persisted(1, "a", false, 1)];
        let change = item_change(&persisted(1, "edited", false, 1), &originals);
        assert!(change.text_changed);
        assert!(!change.done_changed);

        let change = item_change(&persisted(1, "a", true, 1), &originals);
        assert!(!change.text_changed);
        assert!(change.done_changed);
    }

    #[test]
    fn test_local_item_matches_by_position() {
        let originals = vec![persisted(1, "a", true, 1)];
        let change = item_change(&local(1, "a", true, 1), &originals);
        assert_eq!(change, ItemChange::default());

        let change = item_change(&local(2, "b", false, 2), &originals);
        assert!(change.is_new);
    }

    #[test]
    fn test_proposed_changes_deserialize_partial_json() {
        let json = r#"{"title": "Prepare demo", "priority": "high"}"#;
        let proposed: ProposedChanges = serde_json::from_str(json).unwrap();
        assert_eq!(proposed.title.as_deref(), Some("Prepare demo"));
        assert_eq!(proposed.priority, Some(Priority::High));
        assert!(proposed.checklist.is_none());
    }
}
