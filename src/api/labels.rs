//! Label resource calls.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::Label;

#[derive(Serialize)]
struct LabelBody<'a> {
    name: &'a str,
    color: &'a str,
}

impl ApiClient {
    pub async fn get_labels(&self) -> Result<Vec<Label>, ApiError> {
        let response = self.request(Method::GET, "/api/labels").send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_label(&self, name: &str, color: &str) -> Result<Label, ApiError> {
        let response = self
            .request(Method::POST, "/api/labels")
            .json(&LabelBody { name, color })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_label(&self, id: i64, name: &str, color: &str) -> Result<Label, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/api/labels/{}", id))
            .json(&LabelBody { name, color })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_label(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/api/labels/{}", id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
