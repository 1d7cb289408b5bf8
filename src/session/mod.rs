//! Card edit session.
//!
//! Reconciles three possible data sources into one editable form: the
//! persisted card, an optional creation template for new cards, and an
//! optional externally proposed change set from the voice classifier.
//! Tracks two distinct kinds of divergence:
//!
//! - the *voice diff* (a field counts as changed only if the proposal
//!   defined it), driving per-field highlighting, and
//! - the *unsaved-changes gate* (any divergence from the original
//!   snapshot), driving the close-confirmation step.
//!
//! Checklist toggles and deletes persist immediately; text edits and
//! reorders stay local until submit.

pub mod checklist;
pub mod diff;

pub use checklist::Checklist;
pub use diff::{CardField, FieldChange, ItemChange, ProposedChanges};

use chrono::NaiveDate;

use crate::api::{CardBackend, CardPayload, ItemPatch};
use crate::errors::SessionError;
use crate::models::{BoardList, Card, CardDraft, ChecklistItem, ChecklistItemRecord, Priority, Role};
use crate::permissions::{can_create_card, can_modify_card};

/// The editable form fields, current or snapshotted.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub assignee_id: Option<i64>,
    pub list_id: i64,
    pub label_ids: Vec<i64>,
}

impl FormState {
    fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            due_date: card.due_date,
            priority: card.priority,
            assignee_id: card.assignee_id,
            list_id: card.list_id,
            label_ids: card.label_ids.clone(),
        }
    }

    /// Seed from a draft, falling back to empty values and the first
    /// available list.
    fn from_draft(draft: &CardDraft, lists: &[BoardList]) -> Self {
        Self {
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            due_date: draft.due_date,
            priority: draft.priority.unwrap_or_default(),
            assignee_id: draft.assignee_id,
            list_id: draft
                .list_id
                .or_else(|| lists.first().map(|l| l.id))
                .unwrap_or(0),
            label_ids: draft.label_ids.clone(),
        }
    }

    fn apply_proposed(&mut self, proposed: &ProposedChanges) {
        if let Some(title) = &proposed.title {
            self.title = title.clone();
        }
        if let Some(description) = &proposed.description {
            self.description = description.clone();
        }
        if let Some(due_date) = proposed.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(priority) = proposed.priority {
            self.priority = priority;
        }
        if let Some(assignee_id) = proposed.assignee_id {
            self.assignee_id = Some(assignee_id);
        }
        if let Some(list_id) = proposed.list_id {
            self.list_id = list_id;
        }
        if let Some(label_ids) = &proposed.label_ids {
            self.label_ids = label_ids.clone();
        }
    }

    /// Display string for a field's value, `None` when empty (callers
    /// substitute a localized placeholder).
    fn value_display(&self, field: CardField) -> Option<String> {
        match field {
            CardField::Title => (!self.title.is_empty()).then(|| self.title.clone()),
            CardField::Description => {
                (!self.description.is_empty()).then(|| self.description.clone())
            }
            CardField::DueDate => self.due_date.map(|d| d.to_string()),
            CardField::Priority => Some(self.priority.as_str().to_string()),
            CardField::Assignee => self.assignee_id.map(|id| id.to_string()),
            CardField::List => Some(self.list_id.to_string()),
            CardField::Labels => (!self.label_ids.is_empty()).then(|| {
                self.label_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
        }
    }

    fn field_eq(&self, other: &Self, field: CardField) -> bool {
        match field {
            CardField::Title => self.title == other.title,
            CardField::Description => self.description == other.description,
            CardField::DueDate => self.due_date == other.due_date,
            CardField::Priority => self.priority == other.priority,
            CardField::Assignee => self.assignee_id == other.assignee_id,
            CardField::List => self.list_id == other.list_id,
            // Label order is irrelevant for equality.
            CardField::Labels => sorted(&self.label_ids) == sorted(&other.label_ids),
        }
    }
}

fn sorted(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids
}

/// The three mutually exclusive ways a session can be seeded, chosen at
/// load time.
#[derive(Debug, Clone)]
pub enum SessionSeed {
    /// New card (id 0), optionally pre-filled from a draft.
    New { initial: Option<CardDraft> },
    /// Existing card with an externally proposed change set; the live
    /// card and its persisted checklist become the original snapshot.
    Proposed {
        card: Card,
        checklist: Vec<ChecklistItemRecord>,
        proposed: ProposedChanges,
    },
    /// Existing card, normal edit; no diff is active.
    Edit {
        card: Card,
        checklist: Vec<ChecklistItemRecord>,
    },
}

/// What to open, before the checklist has been fetched.
#[derive(Debug, Clone)]
pub enum OpenMode {
    New(Option<CardDraft>),
    Edit(Card),
    Proposed(Card, ProposedChanges),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The actor lacks edit permission; nothing was called.
    Forbidden,
    Saved {
        card: Card,
        checklist: Vec<ChecklistItem>,
        created: bool,
    },
}

/// Outcome of a close request: exactly two paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    Close,
    ConfirmDiscard,
}

#[derive(Debug)]
pub struct CardEditSession {
    card: Option<Card>,
    form: FormState,
    original: FormState,
    checklist: Checklist,
    original_items: Vec<ChecklistItem>,
    proposed: Option<ProposedChanges>,
    role: Option<Role>,
    user_id: Option<i64>,
}

impl CardEditSession {
    pub fn new(
        seed: SessionSeed,
        lists: &[BoardList],
        role: Option<Role>,
        user_id: Option<i64>,
    ) -> Self {
        match seed {
            SessionSeed::New { initial } => {
                let draft = initial.unwrap_or_default();
                let form = FormState::from_draft(&draft, lists);
                let checklist = Checklist::from_texts(&draft.checklist);
                Self {
                    card: None,
                    original: form.clone(),
                    form,
                    original_items: checklist.items().to_vec(),
                    checklist,
                    proposed: None,
                    role,
                    user_id,
                }
            }
            SessionSeed::Proposed {
                card,
                checklist,
                proposed,
            } => {
                let original = FormState::from_card(&card);
                let original_checklist = Checklist::from_records(checklist);
                let mut form = original.clone();
                form.apply_proposed(&proposed);
                let working = match &proposed.checklist {
                    Some(texts) => Checklist::from_texts(texts),
                    None => original_checklist.clone(),
                };
                Self {
                    card: Some(card),
                    form,
                    original,
                    original_items: original_checklist.items().to_vec(),
                    checklist: working,
                    proposed: Some(proposed),
                    role,
                    user_id,
                }
            }
            SessionSeed::Edit { card, checklist } => {
                let form = FormState::from_card(&card);
                let checklist = Checklist::from_records(checklist);
                Self {
                    card: Some(card),
                    original: form.clone(),
                    form,
                    original_items: checklist.items().to_vec(),
                    checklist,
                    proposed: None,
                    role,
                    user_id,
                }
            }
        }
    }

    /// Open a session, fetching the persisted checklist for existing
    /// cards. A fetch failure is a blocking load error; the form is not
    /// usable.
    pub async fn load(
        backend: &dyn CardBackend,
        mode: OpenMode,
        lists: &[BoardList],
        role: Option<Role>,
        user_id: Option<i64>,
    ) -> Result<Self, SessionError> {
        let seed = match mode {
            OpenMode::New(initial) => SessionSeed::New { initial },
            OpenMode::Edit(card) => {
                let checklist = backend
                    .fetch_checklist(card.id)
                    .await
                    .map_err(SessionError::Load)?;
                SessionSeed::Edit { card, checklist }
            }
            OpenMode::Proposed(card, proposed) => {
                let checklist = backend
                    .fetch_checklist(card.id)
                    .await
                    .map_err(SessionError::Load)?;
                SessionSeed::Proposed {
                    card,
                    checklist,
                    proposed,
                }
            }
        };
        Ok(Self::new(seed, lists, role, user_id))
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        self.checklist.items()
    }

    pub fn is_new(&self) -> bool {
        !self.card.as_ref().is_some_and(Card::is_persisted)
    }

    pub fn card_id(&self) -> i64 {
        self.card.as_ref().map(|c| c.id).unwrap_or(0)
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn can_edit(&self) -> bool {
        if self.is_new() {
            can_create_card(self.role)
        } else {
            can_modify_card(self.role, self.card.as_ref(), self.user_id)
        }
    }

    pub fn is_read_only(&self) -> bool {
        !self.can_edit()
    }

    // ── Form mutation ────────────────────────────────────────────────

    pub fn set_title(&mut self, title: &str) {
        self.form.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.form.description = description.to_string();
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.form.due_date = due_date;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.form.priority = priority;
    }

    pub fn set_assignee(&mut self, assignee_id: Option<i64>) {
        self.form.assignee_id = assignee_id;
    }

    pub fn set_list(&mut self, list_id: i64) {
        self.form.list_id = list_id;
    }

    pub fn toggle_label(&mut self, label_id: i64) {
        match self.form.label_ids.iter().position(|&id| id == label_id) {
            Some(index) => {
                self.form.label_ids.remove(index);
            }
            None => self.form.label_ids.push(label_id),
        }
    }

    // ── Change detection ─────────────────────────────────────────────

    /// Voice-diff info for one field: changed only if the proposal
    /// defined it and the current value diverges from the original
    /// snapshot.
    pub fn field_change(&self, field: CardField) -> FieldChange {
        let Some(proposed) = &self.proposed else {
            return FieldChange::unchanged();
        };
        if !proposed.defines(field) {
            return FieldChange::unchanged();
        }
        FieldChange {
            is_changed: !self.form.field_eq(&self.original, field),
            previous: self.original.value_display(field),
        }
    }

    /// Per-item voice-diff flags against the original checklist.
    pub fn item_change(&self, index: usize) -> ItemChange {
        self.checklist
            .get(index)
            .map(|item| diff::item_change(item, &self.original_items))
            .unwrap_or_default()
    }

    /// The unsaved-changes gate, distinct from voice-diff highlighting:
    /// true as soon as anything diverges from the original snapshot.
    pub fn has_unsaved_changes(&self) -> bool {
        CardField::ALL
            .iter()
            .any(|&field| !self.form.field_eq(&self.original, field))
            || self.checklist.items() != self.original_items
    }

    /// Close request: read-only or clean sessions close immediately,
    /// dirty ones need a discard confirmation.
    pub fn request_close(&self) -> CloseAction {
        if self.is_read_only() || !self.has_unsaved_changes() {
            CloseAction::Close
        } else {
            CloseAction::ConfirmDiscard
        }
    }

    // ── Checklist mutation ───────────────────────────────────────────

    pub fn add_item(&mut self, text: &str) -> bool {
        self.checklist.add(text)
    }

    pub fn edit_item_text(&mut self, index: usize, text: &str) {
        self.checklist.set_text(index, text);
    }

    pub fn reorder_item(&mut self, from: usize, to: Option<usize>) -> bool {
        self.checklist.reorder(from, to)
    }

    /// Toggle an item's done state. Persisted items on a persisted card
    /// are updated immediately and reconciled to the server-confirmed
    /// state; on failure local state is left at the pre-toggle value.
    /// Local-only items flip in memory without a network call.
    pub async fn toggle_item(
        &mut self,
        index: usize,
        backend: &dyn CardBackend,
    ) -> Result<(), SessionError> {
        let Some(item) = self.checklist.get(index) else {
            return Ok(());
        };
        let target = !item.is_done;
        let card_persisted = !self.is_new();
        match (item.id.persisted(), card_persisted) {
            (Some(id), true) => {
                let record = backend
                    .update_item(id, &ItemPatch::done(target))
                    .await
                    .map_err(SessionError::ItemToggle)?;
                self.checklist.set_done(index, record.is_done);
            }
            _ => self.checklist.set_done(index, target),
        }
        Ok(())
    }

    /// Delete an item. The remote delete is best-effort: its failure is
    /// logged and the local removal proceeds regardless. Positions are
    /// re-packed densely.
    pub async fn delete_item(&mut self, index: usize, backend: &dyn CardBackend) {
        let Some(item) = self.checklist.get(index) else {
            return;
        };
        if let Some(id) = item.id.persisted() {
            if let Err(err) = backend.delete_item(id).await {
                tracing::warn!(item_id = id, error = %err, "item delete failed, removing locally");
            }
        }
        self.checklist.remove(index);
    }

    // ── Submit ───────────────────────────────────────────────────────

    fn build_payload(&self) -> CardPayload {
        CardPayload {
            title: self.form.title.clone(),
            description: (!self.form.description.trim().is_empty())
                .then(|| self.form.description.clone()),
            due_date: self.form.due_date,
            priority: self.form.priority,
            assignee_id: self.form.assignee_id,
            list_id: self.form.list_id,
            label_ids: (!self.form.label_ids.is_empty()).then(|| self.form.label_ids.clone()),
        }
    }

    /// Persist the form. Without edit permission this is a no-op. The
    /// card call is authoritative: its failure is surfaced and the form
    /// stays open. Checklist persistence afterwards is sequential and
    /// best-effort; item failures are swallowed as a group, and the
    /// final refetch falls back to the working list.
    pub async fn submit(
        &mut self,
        backend: &dyn CardBackend,
    ) -> Result<SubmitOutcome, SessionError> {
        if !self.can_edit() {
            return Ok(SubmitOutcome::Forbidden);
        }
        let payload = self.build_payload();
        let (saved, created) = if self.is_new() {
            let card = backend
                .create_card(&payload)
                .await
                .map_err(SessionError::Save)?;
            (card, true)
        } else {
            let card = backend
                .update_card(self.card_id(), &payload)
                .await
                .map_err(SessionError::Save)?;
            (card, false)
        };

        for (index, item) in self.checklist.items().iter().enumerate() {
            if item.text.trim().is_empty() {
                continue;
            }
            let position = index as u32 + 1;
            let result = match item.id.persisted() {
                Some(id) => backend
                    .update_item(
                        id,
                        &ItemPatch {
                            text: Some(item.text.clone()),
                            is_done: Some(item.is_done),
                            position: Some(position),
                        },
                    )
                    .await
                    .map(|_| ()),
                None => backend
                    .create_item(saved.id, &item.text, position, item.is_done)
                    .await
                    .map(|_| ()),
            };
            if let Err(err) = result {
                tracing::warn!(card_id = saved.id, position, error = %err, "checklist sync failed");
            }
        }

        match backend.fetch_checklist(saved.id).await {
            Ok(records) => self.checklist = Checklist::from_records(records),
            Err(err) => {
                tracing::warn!(card_id = saved.id, error = %err, "checklist refetch failed, keeping working list");
            }
        }

        let checklist = self.checklist.items().to_vec();
        self.card = Some(saved.clone());
        self.original = self.form.clone();
        self.original_items = checklist.clone();
        self.proposed = None;
        Ok(SubmitOutcome::Saved {
            card: saved,
            checklist,
            created,
        })
    }
}
