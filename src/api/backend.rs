//! The backend seam the card edit session talks through.
//!
//! Only the calls the session makes are on the trait, so session logic
//! can be exercised against an in-memory implementation in tests.
//! `ApiClient` is the production implementation.

use async_trait::async_trait;

use super::cards::CardPayload;
use super::checklist::ItemPatch;
use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Card, ChecklistItemRecord};

#[async_trait]
pub trait CardBackend: Send + Sync {
    async fn create_card(&self, payload: &CardPayload) -> Result<Card, ApiError>;

    async fn update_card(&self, id: i64, payload: &CardPayload) -> Result<Card, ApiError>;

    async fn fetch_checklist(&self, card_id: i64) -> Result<Vec<ChecklistItemRecord>, ApiError>;

    async fn create_item(
        &self,
        card_id: i64,
        text: &str,
        position: u32,
        is_done: bool,
    ) -> Result<ChecklistItemRecord, ApiError>;

    async fn update_item(&self, id: i64, patch: &ItemPatch)
        -> Result<ChecklistItemRecord, ApiError>;

    async fn delete_item(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait]
impl CardBackend for ApiClient {
    async fn create_card(&self, payload: &CardPayload) -> Result<Card, ApiError> {
        ApiClient::create_card(self, payload).await
    }

    async fn update_card(&self, id: i64, payload: &CardPayload) -> Result<Card, ApiError> {
        ApiClient::update_card(self, id, payload).await
    }

    async fn fetch_checklist(&self, card_id: i64) -> Result<Vec<ChecklistItemRecord>, ApiError> {
        ApiClient::fetch_checklist(self, card_id).await
    }

    async fn create_item(
        &self,
        card_id: i64,
        text: &str,
        position: u32,
        is_done: bool,
    ) -> Result<ChecklistItemRecord, ApiError> {
        ApiClient::create_item(self, card_id, text, position, is_done).await
    }

    async fn update_item(
        &self,
        id: i64,
        patch: &ItemPatch,
    ) -> Result<ChecklistItemRecord, ApiError> {
        ApiClient::update_item(self, id, patch).await
    }

    async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_item(self, id).await
    }
}
