//! Checklist-item resource calls.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::ChecklistItemRecord;

/// Partial update for a persisted item; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl ItemPatch {
    pub fn done(is_done: bool) -> Self {
        Self {
            is_done: Some(is_done),
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct CreateItemBody<'a> {
    text: &'a str,
    position: u32,
    is_done: bool,
}

impl ApiClient {
    pub async fn fetch_checklist(&self, card_id: i64) -> Result<Vec<ChecklistItemRecord>, ApiError> {
        let response = self
            .request(Method::GET, &format!("/api/cards/{}/items", card_id))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_item(
        &self,
        card_id: i64,
        text: &str,
        position: u32,
        is_done: bool,
    ) -> Result<ChecklistItemRecord, ApiError> {
        let response = self
            .request(Method::POST, &format!("/api/cards/{}/items", card_id))
            .json(&CreateItemBody {
                text,
                position,
                is_done,
            })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_item(
        &self,
        id: i64,
        patch: &ItemPatch,
    ) -> Result<ChecklistItemRecord, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/api/items/{}", id))
            .json(patch)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/api/items/{}", id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
