//! Goal resource endpoints.

use async_trait::async_trait;
use serde::Serialize;

use nutrifolio_core::errors::Result;
use nutrifolio_core::goals::{DietPreset, GoalApiTrait, GoalCalorieConfig, GoalSnapshotData};

use crate::client::{seg, NutritionApiClient};

/// Body for the diet-section write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DietTypeRequest {
    diet_type: DietPreset,
}

#[async_trait]
impl GoalApiTrait for NutritionApiClient {
    async fn save_goal_calories(&self, user_id: &str, config: &GoalCalorieConfig) -> Result<()> {
        let path = format!("/users/{}/goal/calories", seg(user_id));
        self.put(&path, config).await?;
        Ok(())
    }

    async fn save_diet_type(&self, user_id: &str, preset: DietPreset) -> Result<()> {
        let path = format!("/users/{}/goal/diet", seg(user_id));
        self.put(&path, &DietTypeRequest { diet_type: preset }).await?;
        Ok(())
    }

    async fn get_goal(&self, user_id: &str) -> Result<GoalSnapshotData> {
        let path = format!("/users/{}/goal", seg(user_id));
        let response = self.get(&path).await?;
        Self::decode(&path, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrifolio_core::goals::{Objective, Pace};

    #[test]
    fn test_diet_request_wire_shape() {
        let body = serde_json::to_string(&DietTypeRequest {
            diet_type: DietPreset::HighProtein,
        })
        .unwrap();
        assert_eq!(body, r#"{"dietType":"HIGH_PROTEIN"}"#);
    }

    #[test]
    fn test_calorie_config_wire_shape() {
        let config = GoalCalorieConfig {
            objective: Objective::LoseWeight,
            target_weight_kg: 70.5,
            pace: Pace::Moderate,
        };
        let body = serde_json::to_string(&config).unwrap();
        assert_eq!(
            body,
            r#"{"objective":"LOSE_WEIGHT","targetWeightKg":70.5,"pace":"MODERATE"}"#
        );
    }
}
