//! Role-based permission checks.
//!
//! Every predicate is a pure, total function: a missing role, missing
//! resource, or missing actor yields `false` wherever that argument is
//! required, never an error. Ownership is signalled solely by a card's
//! `assignee_id` (and a comment's `user_id`); there is no separate ACL.
//!
//! The general rule shape is "minimum role OR ownership": a high enough
//! role passes outright, and some actions additionally open up to lower
//! roles acting on their own resources.

use crate::models::{Card, Comment, Role};

// ── Hierarchy predicates ──────────────────────────────────────────────
// Monotonic: admin ⇒ supervisor ⇒ editor ⇒ contributor ⇒ commenter.

pub fn is_commenter_or_above(role: Option<Role>) -> bool {
    role.is_some_and(|r| r >= Role::Commenter)
}

pub fn is_contributor_or_above(role: Option<Role>) -> bool {
    role.is_some_and(|r| r >= Role::Contributor)
}

pub fn is_editor_or_above(role: Option<Role>) -> bool {
    role.is_some_and(|r| r >= Role::Editor)
}

pub fn is_supervisor_or_above(role: Option<Role>) -> bool {
    role.is_some_and(|r| r >= Role::Supervisor)
}

pub fn is_admin(role: Option<Role>) -> bool {
    role == Some(Role::Admin)
}

/// True when the card's assignee is the acting user. False whenever
/// either side is missing.
fn owns_card(card: Option<&Card>, actor: Option<i64>) -> bool {
    match (card, actor) {
        (Some(card), Some(actor)) => card.assignee_id == Some(actor),
        _ => false,
    }
}

// ── Card actions ──────────────────────────────────────────────────────

/// Any member of the board, whatever the role, may view it.
pub fn can_view(role: Option<Role>) -> bool {
    role.is_some()
}

pub fn can_create_card(role: Option<Role>) -> bool {
    is_editor_or_above(role)
}

/// Modify a card's metadata or content: supervisor and above on any card,
/// editors only on cards assigned to them.
pub fn can_modify_card(role: Option<Role>, card: Option<&Card>, actor: Option<i64>) -> bool {
    if is_supervisor_or_above(role) {
        return true;
    }
    role == Some(Role::Editor) && owns_card(card, actor)
}

/// Move a card between lists: supervisor and above, or contributor and
/// above on their own card.
pub fn can_move_card(role: Option<Role>, card: Option<&Card>, actor: Option<i64>) -> bool {
    if is_supervisor_or_above(role) {
        return true;
    }
    is_contributor_or_above(role) && owns_card(card, actor)
}

pub fn can_delete_card(role: Option<Role>) -> bool {
    is_admin(role)
}

/// Assign a card: supervisor and above assign anyone; an editor may
/// assign on their own card; contributor and above may always assign
/// themselves.
pub fn can_assign_card(
    role: Option<Role>,
    card: Option<&Card>,
    actor: Option<i64>,
    target: Option<i64>,
) -> bool {
    if is_supervisor_or_above(role) {
        return true;
    }
    if role == Some(Role::Editor) && owns_card(card, actor) {
        return true;
    }
    is_contributor_or_above(role) && actor.is_some() && actor == target
}

// ── Comment actions ───────────────────────────────────────────────────

pub fn can_comment(role: Option<Role>) -> bool {
    is_commenter_or_above(role)
}

/// Edit a comment: admin, or its author at commenter and above.
pub fn can_edit_comment(role: Option<Role>, comment: Option<&Comment>, actor: Option<i64>) -> bool {
    if is_admin(role) {
        return true;
    }
    match (comment, actor) {
        (Some(comment), Some(actor)) => is_commenter_or_above(role) && comment.user_id == actor,
        _ => false,
    }
}

pub fn can_delete_comment(
    role: Option<Role>,
    comment: Option<&Comment>,
    actor: Option<i64>,
) -> bool {
    can_edit_comment(role, comment, actor)
}

// ── Checklist actions ─────────────────────────────────────────────────

/// Create, edit, or delete checklist items: same bar as modifying the card.
pub fn can_edit_checklist_item(
    role: Option<Role>,
    card: Option<&Card>,
    actor: Option<i64>,
) -> bool {
    can_modify_card(role, card, actor)
}

/// Check or uncheck an item. Deliberately broader than editing: a
/// contributor may tick items on their own card.
pub fn can_toggle_checklist_item(
    role: Option<Role>,
    card: Option<&Card>,
    actor: Option<i64>,
) -> bool {
    if is_supervisor_or_above(role) {
        return true;
    }
    is_contributor_or_above(role) && owns_card(card, actor)
}

// ── Board administration ──────────────────────────────────────────────

/// Manage lists, labels, users, and board settings.
pub fn can_manage_board(role: Option<Role>) -> bool {
    is_admin(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    const ALL_ROLES: [Role; 6] = [
        Role::Visitor,
        Role::Commenter,
        Role::Contributor,
        Role::Editor,
        Role::Supervisor,
        Role::Admin,
    ];

    fn card_assigned_to(assignee: Option<i64>) -> Card {
        Card {
            id: 5,
            title: "Fix login".to_string(),
            description: None,
            due_date: None,
            priority: Priority::Medium,
            assignee_id: assignee,
            list_id: 1,
            label_ids: vec![],
        }
    }

    fn comment_by(user_id: i64) -> Comment {
        Comment {
            id: 1,
            card_id: 5,
            user_id,
            body: "looks good".to_string(),
        }
    }

    // ── Hierarchy ────────────────────────────────────────────────────

    #[test]
    fn test_hierarchy_predicates_are_monotonic() {
        for role in ALL_ROLES {
            let r = Some(role);
            if is_supervisor_or_above(r) {
                assert!(is_editor_or_above(r));
            }
            if is_editor_or_above(r) {
                assert!(is_contributor_or_above(r));
            }
            if is_contributor_or_above(r) {
                assert!(is_commenter_or_above(r));
            }
        }
    }

    #[test]
    fn test_missing_role_fails_everything_but_nothing_panics() {
        let card = card_assigned_to(Some(9));
        assert!(!can_view(None));
        assert!(!can_create_card(None));
        assert!(!can_modify_card(None, Some(&card), Some(9)));
        assert!(!can_move_card(None, Some(&card), Some(9)));
        assert!(!can_delete_card(None));
        assert!(!can_assign_card(None, Some(&card), Some(9), Some(9)));
        assert!(!can_comment(None));
        assert!(!can_toggle_checklist_item(None, Some(&card), Some(9)));
        assert!(!can_manage_board(None));
    }

    #[test]
    fn test_any_role_can_view() {
        for role in ALL_ROLES {
            assert!(can_view(Some(role)));
        }
    }

    // ── Modify card ──────────────────────────────────────────────────

    #[test]
    fn test_supervisor_and_admin_modify_any_card() {
        let card = card_assigned_to(Some(42));
        for role in [Role::Supervisor, Role::Admin] {
            assert!(can_modify_card(Some(role), Some(&card), Some(9)));
            // Even with no resource or actor at hand.
            assert!(can_modify_card(Some(role), None, None));
        }
    }

    #[test]
    fn test_editor_modifies_only_own_card() {
        let own = card_assigned_to(Some(9));
        let other = card_assigned_to(Some(10));
        assert!(can_modify_card(Some(Role::Editor), Some(&own), Some(9)));
        assert!(!can_modify_card(Some(Role::Editor), Some(&other), Some(9)));
        assert!(!can_modify_card(Some(Role::Editor), Some(&own), Some(10)));
    }

    #[test]
    fn test_editor_without_resource_cannot_modify() {
        assert!(!can_modify_card(Some(Role::Editor), None, Some(9)));
        let card = card_assigned_to(Some(9));
        assert!(!can_modify_card(Some(Role::Editor), Some(&card), None));
    }

    #[test]
    fn test_lower_roles_never_modify() {
        let own = card_assigned_to(Some(9));
        for role in [Role::Visitor, Role::Commenter, Role::Contributor] {
            assert!(!can_modify_card(Some(role), Some(&own), Some(9)));
        }
    }

    #[test]
    fn test_unassigned_card_is_owned_by_nobody() {
        let card = card_assigned_to(None);
        assert!(!can_modify_card(Some(Role::Editor), Some(&card), Some(9)));
    }

    // ── Move / delete / assign ───────────────────────────────────────

    #[test]
    fn test_contributor_moves_own_card_only() {
        let own = card_assigned_to(Some(9));
        let other = card_assigned_to(Some(10));
        assert!(can_move_card(Some(Role::Contributor), Some(&own), Some(9)));
        assert!(!can_move_card(Some(Role::Contributor), Some(&other), Some(9)));
        assert!(!can_move_card(Some(Role::Commenter), Some(&own), Some(9)));
        assert!(can_move_card(Some(Role::Supervisor), Some(&other), Some(9)));
    }

    #[test]
    fn test_only_admin_deletes_cards() {
        for role in ALL_ROLES {
            assert_eq!(can_delete_card(Some(role)), role == Role::Admin);
        }
    }

    #[test]
    fn test_supervisor_assigns_anyone() {
        let card = card_assigned_to(Some(42));
        assert!(can_assign_card(Some(Role::Supervisor), Some(&card), Some(9), Some(10)));
    }

    #[test]
    fn test_editor_assigns_on_own_card() {
        let own = card_assigned_to(Some(9));
        let other = card_assigned_to(Some(10));
        assert!(can_assign_card(Some(Role::Editor), Some(&own), Some(9), Some(10)));
        assert!(!can_assign_card(Some(Role::Editor), Some(&other), Some(9), Some(10)));
    }

    #[test]
    fn test_contributor_self_assigns_unconditionally() {
        let other = card_assigned_to(Some(42));
        assert!(can_assign_card(Some(Role::Contributor), Some(&other), Some(9), Some(9)));
        assert!(!can_assign_card(Some(Role::Contributor), Some(&other), Some(9), Some(10)));
        assert!(!can_assign_card(Some(Role::Commenter), Some(&other), Some(9), Some(9)));
    }

    #[test]
    fn test_self_assign_requires_known_actor() {
        assert!(!can_assign_card(Some(Role::Contributor), None, None, None));
    }

    // ── Comments ─────────────────────────────────────────────────────

    #[test]
    fn test_commenter_and_above_may_comment() {
        assert!(!can_comment(Some(Role::Visitor)));
        assert!(can_comment(Some(Role::Commenter)));
        assert!(can_comment(Some(Role::Admin)));
    }

    #[test]
    fn test_comment_author_edits_own_comment() {
        let comment = comment_by(9);
        assert!(can_edit_comment(Some(Role::Commenter), Some(&comment), Some(9)));
        assert!(!can_edit_comment(Some(Role::Commenter), Some(&comment), Some(10)));
        assert!(!can_edit_comment(Some(Role::Visitor), Some(&comment), Some(9)));
    }

    #[test]
    fn test_admin_edits_any_comment() {
        let comment = comment_by(9);
        assert!(can_edit_comment(Some(Role::Admin), Some(&comment), Some(10)));
        assert!(can_delete_comment(Some(Role::Admin), None, None));
    }

    // ── Checklist ────────────────────────────────────────────────────

    #[test]
    fn test_toggle_is_broader_than_edit() {
        let own = card_assigned_to(Some(9));
        // A contributor can tick items on their own card but not edit them.
        assert!(can_toggle_checklist_item(Some(Role::Contributor), Some(&own), Some(9)));
        assert!(!can_edit_checklist_item(Some(Role::Contributor), Some(&own), Some(9)));
        // Whoever can edit can also toggle.
        for role in ALL_ROLES {
            for actor in [Some(9), Some(10)] {
                if can_edit_checklist_item(Some(role), Some(&own), actor) {
                    assert!(can_toggle_checklist_item(Some(role), Some(&own), actor));
                }
            }
        }
    }

    #[test]
    fn test_checklist_edit_matches_card_modify() {
        let own = card_assigned_to(Some(9));
        for role in ALL_ROLES {
            assert_eq!(
                can_edit_checklist_item(Some(role), Some(&own), Some(9)),
                can_modify_card(Some(role), Some(&own), Some(9))
            );
        }
    }

    // ── Board administration ─────────────────────────────────────────

    #[test]
    fn test_only_admin_manages_board() {
        for role in ALL_ROLES {
            assert_eq!(can_manage_board(Some(role)), role == Role::Admin);
        }
    }
}
