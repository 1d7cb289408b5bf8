//! List (column) resource calls.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::BoardList;

#[derive(Serialize)]
struct ListBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ReorderBody<'a> {
    list_orders: &'a BTreeMap<i64, i32>,
}

/// One entry of the cards-count-per-list resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListCardsCount {
    pub list_id: i64,
    pub count: u64,
}

impl ApiClient {
    pub async fn get_lists(&self) -> Result<Vec<BoardList>, ApiError> {
        let response = self.request(Method::GET, "/api/lists").send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_list(&self, name: &str) -> Result<BoardList, ApiError> {
        let response = self
            .request(Method::POST, "/api/lists")
            .json(&ListBody { name })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn rename_list(&self, id: i64, name: &str) -> Result<BoardList, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/api/lists/{}", id))
            .json(&ListBody { name })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_list(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/api/lists/{}", id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Persist a full board ordering as an id → order mapping.
    pub async fn reorder_lists(&self, list_orders: &BTreeMap<i64, i32>) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, "/api/lists/reorder")
            .json(&ReorderBody { list_orders })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn cards_count(&self) -> Result<Vec<ListCardsCount>, ApiError> {
        let response = self
            .request(Method::GET, "/api/lists/cards-count")
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
