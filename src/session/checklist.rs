//! The working checklist of an edit session.
//!
//! Positions are kept as a dense 1..N sequence after every mutation.
//! Unsaved items get a session-local id for keying and drag-reordering;
//! persistence is handled by the session, not here.

use crate::models::{ChecklistItem, ChecklistItemRecord, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    next_local_id: u64,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted records, keeping the server's ordering.
    pub fn from_records(records: Vec<ChecklistItemRecord>) -> Self {
        let mut checklist = Self {
            items: records.into_iter().map(ChecklistItem::from).collect(),
            next_local_id: 0,
        };
        checklist.renumber();
        checklist
    }

    /// Build from plain strings (a draft or a proposed checklist); every
    /// item is local and unchecked.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let mut checklist = Self::new();
        for text in texts {
            checklist.add(text.as_ref());
        }
        checklist
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ChecklistItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item. The text is trimmed and truncated to the item
    /// length limit; empty-after-trim input is rejected.
    pub fn add(&mut self, text: &str) -> bool {
        let text = ChecklistItem::clamp_text(text.trim());
        if text.is_empty() {
            return false;
        }
        let id = ItemId::Local(self.fresh_local_id());
        let position = self.items.len() as u32 + 1;
        self.items.push(ChecklistItem {
            id,
            text,
            is_done: false,
            position,
        });
        true
    }

    /// Replace an item's text, truncated to the length limit. Local-only;
    /// nothing is persisted until submit.
    pub fn set_text(&mut self, index: usize, text: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.text = ChecklistItem::clamp_text(text);
        }
    }

    pub fn set_done(&mut self, index: usize, done: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.is_done = done;
        }
    }

    /// Remove the item at `index` and re-pack positions densely from 1.
    pub fn remove(&mut self, index: usize) -> Option<ChecklistItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Move an item to a new index (drag end). A missing or identical
    /// target is a no-op; otherwise positions are re-packed densely.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else { return false };
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.renumber();
        true
    }

    fn renumber(&mut self) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.position = i as u32 + 1;
        }
    }

    fn fresh_local_id(&mut self) -> u64 {
        self.next_local_id += 1;
        self.next_local_id
    }
}
