use async_trait::async_trait;

use crate::errors::Result;
use crate::meal_plans::meal_plans_model::{MealPlan, MealPlanData, MealPlanEntry, MealPlanEntryData};

/// Trait for the remote meal plan resource.
#[async_trait]
pub trait MealPlanApiTrait: Send + Sync {
    /// Deletes the plan and detaches its entries from the tracking record
    /// in one server-side operation.
    async fn delete_meal_plan_with_tracking(
        &self,
        meal_plan_id: &str,
        tracking_id: &str,
    ) -> Result<()>;
    async fn get_current_meal_plan(&self, profile_id: &str) -> Result<MealPlanData>;
    async fn get_detailed_entries(&self, meal_plan_id: &str) -> Result<Vec<MealPlanEntryData>>;
}

/// Trait for meal plan service operations.
#[async_trait]
pub trait MealPlanServiceTrait: Send + Sync {
    /// Switches the active user, invalidating per-user session state.
    fn set_user(&self, user_id: &str);
    async fn delete_meal_plan_with_tracking(&self, meal_plan_id: &str) -> Result<()>;
    async fn get_current_plan(&self, profile_id: &str) -> Result<Option<MealPlan>>;
    async fn get_detailed_entries(&self, meal_plan_id: &str) -> Result<Vec<MealPlanEntry>>;
    /// The in-memory listing; may lag the server until the next full reload.
    fn plans(&self) -> Vec<MealPlan>;
}
