//! Domain entities for the Yaka board.
//!
//! Wire types (cards, lists, labels, board settings) are plain serde structs
//! matching the backend's JSON. Checklist items are split into a wire record
//! (always persisted, numeric id) and a session-side type whose identity is
//! an explicit `ItemId` variant, so unsaved items can never be confused with
//! persisted ones.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of a checklist item's text, in characters.
pub const MAX_ITEM_TEXT: usize = 64;

/// Board membership role, totally ordered by privilege.
///
/// The derived `Ord` follows declaration order, so hierarchy checks are
/// plain comparisons (`role >= Role::Editor`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Visitor,
    Commenter,
    Contributor,
    Editor,
    Supervisor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Commenter => "commenter",
            Self::Contributor => "contributor",
            Self::Editor => "editor",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Self::Visitor),
            "commenter" => Ok(Self::Commenter),
            "contributor" => Ok(Self::Contributor),
            "editor" => Ok(Self::Editor),
            "supervisor" => Ok(Self::Supervisor),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Card priority. The canonical wire strings are "low"/"medium"/"high";
/// the backend may also emit French terms, see [`Priority::normalize`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Map any backend-emitted priority string to the canonical set.
    ///
    /// The backend sits on a French/English boundary and may send either
    /// language, with or without accents ("faible", "Moyen", "Élevé",
    /// "high", ...). Accents are stripped, the string lowercased, and
    /// substring-matched. Unknown strings yield `None`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let folded = fold_accents(raw);
        if folded.contains("elev") || folded.contains("high") || folded.contains("haut") {
            Some(Self::High)
        } else if folded.contains("moy") || folded.contains("med") {
            Some(Self::Medium)
        } else if folded.contains("faib") || folded.contains("low") || folded.contains("bas") {
            Some(Self::Low)
        } else {
            None
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

/// Lowercase `s` and replace the accented characters the backend is known
/// to emit with their ASCII base letter.
fn fold_accents(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// A card as the backend serves it. `id == 0` denotes an unsaved card.
/// The checklist is not embedded; it is fetched through its own resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    pub assignee_id: Option<i64>,
    pub list_id: i64,
    #[serde(default)]
    pub label_ids: Vec<i64>,
}

impl Card {
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// A list (column) on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardList {
    pub id: i64,
    pub name: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Comment fields the permission checks need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub card_id: i64,
    pub user_id: i64,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardSettings {
    pub title: String,
}

/// A checklist item as persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItemRecord {
    pub id: i64,
    pub text: String,
    pub is_done: bool,
    pub position: u32,
}

/// Identity of a checklist item inside an edit session.
///
/// `Local` ids are generated client-side for items that have not been saved
/// yet; they are used only for keying and reordering and are never sent to
/// the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemId {
    Persisted(i64),
    Local(u64),
}

impl ItemId {
    pub fn persisted(&self) -> Option<i64> {
        match self {
            Self::Persisted(id) => Some(*id),
            Self::Local(_) => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

/// A checklist item inside an edit session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: ItemId,
    pub text: String,
    pub is_done: bool,
    /// 1-based, kept dense across the whole checklist.
    pub position: u32,
}

impl ChecklistItem {
    /// Truncate item text to [`MAX_ITEM_TEXT`] characters (not bytes, so
    /// accented text is cut cleanly).
    pub fn clamp_text(text: &str) -> String {
        text.chars().take(MAX_ITEM_TEXT).collect()
    }
}

impl From<ChecklistItemRecord> for ChecklistItem {
    fn from(record: ChecklistItemRecord) -> Self {
        Self {
            id: ItemId::Persisted(record.id),
            text: record.text,
            is_done: record.is_done,
            position: record.position,
        }
    }
}

/// Seed values for a brand-new card, e.g. carried over from a quick-add
/// form. Every field is optional; the checklist is plain strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CardDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<i64>,
    pub list_id: Option<i64>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub checklist: Vec<String>,
}
