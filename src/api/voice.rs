//! Voice-control client.
//!
//! A thin wrapper around the transcript-classification endpoint: POST the
//! free-text transcript (optionally with a response-type hint) and return
//! the typed result. The actual speech-to-intent inference lives behind
//! the endpoint; nothing here validates or retries. Callers must treat the
//! result as an untrusted proposal requiring human confirmation.

use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{BoardList, Label, Priority};
use crate::session::ProposedChanges;

/// Hint for which result shape the classifier should produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VoiceResponseType {
    Card,
    Filter,
}

#[derive(Serialize)]
struct VoiceRequest<'a> {
    transcript: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_type: Option<VoiceResponseType>,
}

/// Classifier output, discriminated by the `type` tag.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VoiceResult {
    Card(VoiceCardSuggestion),
    Filter(VoiceFilterResult),
}

/// A single-card suggestion. List, priority, and labels come back as raw
/// strings in whatever language the classifier heard; resolution against
/// the board happens in [`VoiceCardSuggestion::into_proposed`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VoiceCardSuggestion {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub checklist: Option<Vec<String>>,
    pub due_date: Option<NaiveDate>,
    pub list: Option<String>,
    pub priority: Option<String>,
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

/// A filter/description result over a set of cards.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VoiceFilterResult {
    pub card_ids: Vec<i64>,
    pub description: Option<String>,
}

impl VoiceCardSuggestion {
    /// Resolve the suggestion into a [`ProposedChanges`] against the
    /// board's lists and labels. Unresolvable names are dropped rather
    /// than guessed: an unknown list or label simply proposes nothing for
    /// that field, and an unrecognized priority string is ignored.
    pub fn into_proposed(self, lists: &[BoardList], labels: &[Label]) -> ProposedChanges {
        let list_id = self.list.as_deref().and_then(|name| {
            lists
                .iter()
                .find(|l| l.name.eq_ignore_ascii_case(name))
                .map(|l| l.id)
        });
        let label_ids = self.labels.map(|names| {
            names
                .iter()
                .filter_map(|name| {
                    labels
                        .iter()
                        .find(|l| l.name.eq_ignore_ascii_case(name))
                        .map(|l| l.id)
                })
                .collect::<Vec<_>>()
        });
        ProposedChanges {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority.as_deref().and_then(Priority::normalize),
            assignee_id: self.assignee_id,
            list_id,
            label_ids,
            checklist: self.checklist,
        }
    }
}

impl ApiClient {
    /// Send a transcript to the classification endpoint.
    pub async fn classify_transcript(
        &self,
        transcript: &str,
        response_type: Option<VoiceResponseType>,
    ) -> Result<VoiceResult, ApiError> {
        let response = self
            .request(Method::POST, "/api/voice-control")
            .json(&VoiceRequest {
                transcript,
                response_type,
            })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_lists() -> Vec<BoardList> {
        vec![
            BoardList { id: 1, name: "Todo".into(), position: 1 },
            BoardList { id: 2, name: "En cours".into(), position: 2 },
        ]
    }

    fn board_labels() -> Vec<Label> {
        vec![
            Label { id: 3, name: "Bug".into(), color: "#e53935".into() },
            Label { id: 4, name: "Urgent".into(), color: "#fb8c00".into() },
        ]
    }

    #[test]
    fn test_request_omits_absent_hint() {
        let json = serde_json::to_value(VoiceRequest {
            transcript: "create a card",
            response_type: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"transcript": "create a card"}));

        let json = serde_json::to_value(VoiceRequest {
            transcript: "show my cards",
            response_type: Some(VoiceResponseType::Filter),
        })
        .unwrap();
        assert_eq!(json["response_type"], "filter");
    }

    #[test]
    fn test_result_deserializes_card_variant() {
        let json = r#"{
            "type": "card",
            "title": "Préparer la démo",
            "priority": "Élevé",
            "checklist": ["slides", "répétition"],
            "list": "en cours"
        }"#;
        let result: VoiceResult = serde_json::from_str(json).unwrap();
        let VoiceResult::Card(suggestion) = result else {
            panic!("Expected card suggestion");
        };
        assert_eq!(suggestion.title.as_deref(), Some("Préparer la démo"));
        assert_eq!(suggestion.checklist.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_result_deserializes_filter_variant() {
        let json = r#"{"type": "filter", "card_ids": [4, 9], "description": "due this week"}"#;
        let result: VoiceResult = serde_json::from_str(json).unwrap();
        let VoiceResult::Filter(filter) = result else {
            panic!("Expected filter result");
        };
        assert_eq!(filter.card_ids, vec![4, 9]);
        assert_eq!(filter.description.as_deref(), Some("due this week"));
    }

    #[test]
    fn test_into_proposed_resolves_names_and_priority() {
        let suggestion = VoiceCardSuggestion {
            title: Some("Préparer la démo".into()),
            priority: Some("Élevé".into()),
            list: Some("en cours".into()),
            labels: Some(vec!["bug".into(), "nonexistent".into()]),
            ..Default::default()
        };
        let proposed = suggestion.into_proposed(&board_lists(), &board_labels());
        assert_eq!(proposed.priority, Some(Priority::High));
        assert_eq!(proposed.list_id, Some(2));
        // Unknown labels are dropped, known ones resolved.
        assert_eq!(proposed.label_ids, Some(vec![3]));
    }

    #[test]
    fn test_into_proposed_drops_unresolvable_fields() {
        let suggestion = VoiceCardSuggestion {
            list: Some("Archive".into()),
            priority: Some("whenever".into()),
            ..Default::default()
        };
        let proposed = suggestion.into_proposed(&board_lists(), &board_labels());
        assert!(proposed.list_id.is_none());
        assert!(proposed.priority.is_none());
    }
}
