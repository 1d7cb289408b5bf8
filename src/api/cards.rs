//! Card resource calls and the create/update payload.

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Card, Priority};

/// Body for card create/update. Blank description and due date are
/// normalized to explicit nulls by the edit session before it gets here;
/// `label_ids` is only included when non-empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardPayload {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub assignee_id: Option<i64>,
    pub list_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<i64>>,
}

impl ApiClient {
    pub async fn get_card(&self, id: i64) -> Result<Card, ApiError> {
        let response = self
            .request(Method::GET, &format!("/api/cards/{}", id))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Cards on the board, optionally restricted to one list.
    pub async fn list_cards(&self, list_id: Option<i64>) -> Result<Vec<Card>, ApiError> {
        let mut request = self.request(Method::GET, "/api/cards");
        if let Some(list_id) = list_id {
            request = request.query(&[("list_id", list_id)]);
        }
        let response = request.send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_card(&self, payload: &CardPayload) -> Result<Card, ApiError> {
        let response = self
            .request(Method::POST, "/api/cards")
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_card(&self, id: i64, payload: &CardPayload) -> Result<Card, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/api/cards/{}", id))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
