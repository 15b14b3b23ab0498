//! Tracking resource endpoints.

use async_trait::async_trait;
use serde::Serialize;

use nutrifolio_core::errors::Result;
use nutrifolio_core::tracking::{ProgressSnapshot, TrackingApiTrait, TrackingData};

use crate::client::{seg, NutritionApiClient};

/// Body for tracking initialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTrackingRequest<'a> {
    user_id: &'a str,
}

#[async_trait]
impl TrackingApiTrait for NutritionApiClient {
    async fn create_tracking(&self, user_id: &str) -> Result<()> {
        self.post("/trackings", &CreateTrackingRequest { user_id })
            .await?;
        Ok(())
    }

    async fn get_tracking(&self, user_id: &str) -> Result<TrackingData> {
        let path = format!("/trackings/user/{}", seg(user_id));
        let response = self.get(&path).await?;
        Self::decode(&path, response).await
    }

    async fn get_progress(&self, user_id: &str) -> Result<ProgressSnapshot> {
        let path = format!("/trackings/user/{}/progress", seg(user_id));
        let response = self.get(&path).await?;
        Self::decode(&path, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tracking_wire_shape() {
        let body = serde_json::to_string(&CreateTrackingRequest { user_id: "user-1" }).unwrap();
        assert_eq!(body, r#"{"userId":"user-1"}"#);
    }

    #[test]
    fn test_tracking_payload_deserializes() {
        let payload = r#"{
            "id": "tracking-1",
            "userId": "user-1",
            "date": "2025-06-02",
            "consumed": {"calories": 1200.0, "carbs": 150.0, "protein": 60.0, "fat": 40.0},
            "trackingGoal": {
                "id": "goal-1",
                "userId": "user-1",
                "calories": 2000.0,
                "carbs": 250.0,
                "protein": 120.0,
                "fat": 70.0
            },
            "entries": [
                {"id": "entry-1", "recipeId": "recipe-9", "mealType": "Cena"}
            ]
        }"#;
        let data: TrackingData = serde_json::from_str(payload).unwrap();
        assert_eq!(data.id, "tracking-1");
        assert_eq!(data.consumed.calories, 1200.0);
        assert_eq!(data.entries.len(), 1);
        assert_eq!(data.entries[0].meal_type.as_deref(), Some("Cena"));
    }
}
