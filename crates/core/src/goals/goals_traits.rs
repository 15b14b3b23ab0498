use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{
    DietPreset, GoalCalorieConfig, GoalForm, GoalSnapshot, GoalSnapshotData, Objective, Pace,
};

/// Trait for the remote goal resource.
#[async_trait]
pub trait GoalApiTrait: Send + Sync {
    async fn save_goal_calories(&self, user_id: &str, config: &GoalCalorieConfig) -> Result<()>;
    async fn save_diet_type(&self, user_id: &str, preset: DietPreset) -> Result<()>;
    /// Returns the raw payload; normalization happens in the service.
    async fn get_goal(&self, user_id: &str) -> Result<GoalSnapshotData>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn set_objective(&self, objective: Option<Objective>);
    fn set_target_weight(&self, text: &str);
    fn set_pace(&self, pace: Option<Pace>);
    fn set_diet_preset(&self, preset: Option<DietPreset>);
    fn form(&self) -> GoalForm;
    async fn save_calories(&self, user_id: &str) -> Result<GoalSnapshot>;
    async fn save_diet(&self, user_id: &str) -> Result<GoalSnapshot>;
    async fn get_goal(&self, user_id: &str) -> Result<Option<GoalSnapshot>>;
}
