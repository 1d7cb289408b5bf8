//! Display descriptors for roles and priorities.
//!
//! Roles map to an opaque badge (icon + label) rather than being matched
//! on all over the presentation code; plain-terminal fallbacks are the
//! bracketed forms.

use console::Emoji;

use crate::models::{Priority, Role};

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static VOICE: Emoji<'_, '_> = Emoji("🎙️  ", "[VOICE]");

// Role badges
static ADMIN: Emoji<'_, '_> = Emoji("👑 ", "[ADM]");
static SUPERVISOR: Emoji<'_, '_> = Emoji("🛡️  ", "[SUP]");
static EDITOR: Emoji<'_, '_> = Emoji("✏️  ", "[EDT]");
static CONTRIBUTOR: Emoji<'_, '_> = Emoji("🔧 ", "[CTR]");
static COMMENTER: Emoji<'_, '_> = Emoji("💬 ", "[COM]");
static VISITOR: Emoji<'_, '_> = Emoji("👀 ", "[VIS]");

// Priority badges
static PRIORITY_LOW: Emoji<'_, '_> = Emoji("🟢 ", "[low]");
static PRIORITY_MEDIUM: Emoji<'_, '_> = Emoji("🟡 ", "[med]");
static PRIORITY_HIGH: Emoji<'_, '_> = Emoji("🔴 ", "[high]");

/// An opaque display descriptor.
#[derive(Clone, Copy)]
pub struct Badge {
    pub icon: Emoji<'static, 'static>,
    pub label: &'static str,
}

pub fn role_badge(role: Role) -> Badge {
    match role {
        Role::Admin => Badge { icon: ADMIN, label: "admin" },
        Role::Supervisor => Badge { icon: SUPERVISOR, label: "supervisor" },
        Role::Editor => Badge { icon: EDITOR, label: "editor" },
        Role::Contributor => Badge { icon: CONTRIBUTOR, label: "contributor" },
        Role::Commenter => Badge { icon: COMMENTER, label: "commenter" },
        Role::Visitor => Badge { icon: VISITOR, label: "visitor" },
    }
}

pub fn priority_badge(priority: Priority) -> Badge {
    match priority {
        Priority::Low => Badge { icon: PRIORITY_LOW, label: "low" },
        Priority::Medium => Badge { icon: PRIORITY_MEDIUM, label: "medium" },
        Priority::High => Badge { icon: PRIORITY_HIGH, label: "high" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_distinct_label() {
        let labels: Vec<&str> = [
            Role::Visitor,
            Role::Commenter,
            Role::Contributor,
            Role::Editor,
            Role::Supervisor,
            Role::Admin,
        ]
        .iter()
        .map(|&r| role_badge(r).label)
        .collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels, deduped);
    }

    #[test]
    fn test_priority_badge_labels_match_wire_strings() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority_badge(priority).label, priority.as_str());
        }
    }
}
