//! Board-settings resource: a single title string.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::BoardSettings;

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

impl ApiClient {
    pub async fn get_board_settings(&self) -> Result<BoardSettings, ApiError> {
        let response = self.request(Method::GET, "/api/board").send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_board_title(&self, title: &str) -> Result<BoardSettings, ApiError> {
        let response = self
            .request(Method::PUT, "/api/board")
            .json(&TitleBody { title })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_body_shape() {
        let json = serde_json::to_value(TitleBody { title: "Sprint 12" }).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Sprint 12"}));
    }

    #[test]
    fn test_settings_deserialize() {
        let settings: BoardSettings = serde_json::from_str(r#"{"title": "Yaka"}"#).unwrap();
        assert_eq!(settings.title, "Yaka");
    }
}
