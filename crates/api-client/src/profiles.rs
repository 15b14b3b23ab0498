//! Profile resource endpoints.

use async_trait::async_trait;
use serde::Deserialize;

use nutrifolio_core::errors::Result;
use nutrifolio_core::onboarding::{ProfileApiTrait, ProfileRequest};

use crate::client::{seg, NutritionApiClient};

/// Response carrying a newly created resource id.
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

#[async_trait]
impl ProfileApiTrait for NutritionApiClient {
    async fn create_profile(&self, request: &ProfileRequest) -> Result<String> {
        let response = self.post("/profiles", request).await?;
        let created: CreatedResponse = Self::decode("/profiles", response).await?;
        Ok(created.id)
    }

    async fn create_goal_from_profile(&self, profile_id: &str) -> Result<String> {
        let path = format!("/profiles/{}/goal", seg(profile_id));
        let response = self.post(&path, &serde_json::json!({})).await?;
        let created: CreatedResponse = Self::decode(&path, response).await?;
        Ok(created.id)
    }

    async fn update_goal_from_profile(&self, profile_id: &str) -> Result<()> {
        let path = format!("/profiles/{}/goal", seg(profile_id));
        self.put(&path, &serde_json::json!({})).await?;
        Ok(())
    }
}
