//! Meal plan resource endpoints.

use async_trait::async_trait;

use nutrifolio_core::errors::Result;
use nutrifolio_core::meal_plans::{MealPlanApiTrait, MealPlanData, MealPlanEntryData};

use crate::client::{seg, NutritionApiClient};

#[async_trait]
impl MealPlanApiTrait for NutritionApiClient {
    /// The backend removes the plan and detaches its entries from the
    /// tracking record in one operation.
    async fn delete_meal_plan_with_tracking(
        &self,
        meal_plan_id: &str,
        tracking_id: &str,
    ) -> Result<()> {
        let path = format!(
            "/meal-plans/{}/tracking/{}",
            seg(meal_plan_id),
            seg(tracking_id)
        );
        self.delete(&path).await?;
        Ok(())
    }

    async fn get_current_meal_plan(&self, profile_id: &str) -> Result<MealPlanData> {
        let path = format!("/profiles/{}/meal-plan/current", seg(profile_id));
        let response = self.get(&path).await?;
        Self::decode(&path, response).await
    }

    async fn get_detailed_entries(&self, meal_plan_id: &str) -> Result<Vec<MealPlanEntryData>> {
        let path = format!("/meal-plans/{}/entries", seg(meal_plan_id));
        let response = self.get(&path).await?;
        Self::decode(&path, response).await
    }
}
