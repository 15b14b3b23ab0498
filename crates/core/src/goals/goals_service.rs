use log::debug;
use std::sync::{Arc, RwLock};

use super::goals_model::{DietPreset, GoalForm, GoalSnapshot, Objective, Pace};
use super::goals_traits::{GoalApiTrait, GoalServiceTrait};
use crate::errors::{Error, RemoteError, Result};

/// Service holding the in-progress goal form and talking to the remote goal
/// resource.
///
/// After every successful save the parsed server snapshot is re-applied to
/// the form, so the UI always reflects what the server acknowledged.
pub struct GoalService {
    api: Arc<dyn GoalApiTrait>,
    form: RwLock<GoalForm>,
}

impl GoalService {
    pub fn new(api: Arc<dyn GoalApiTrait>) -> Self {
        Self {
            api,
            form: RwLock::new(GoalForm::default()),
        }
    }

    /// Re-reads the server goal and makes it the form's source of truth.
    async fn refresh_form(&self, user_id: &str) -> Result<GoalSnapshot> {
        let data = self.api.get_goal(user_id).await?;
        let snapshot = GoalSnapshot::from_data(data)?;
        self.form.write().unwrap().apply_snapshot(&snapshot);
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    fn set_objective(&self, objective: Option<Objective>) {
        self.form.write().unwrap().objective = objective;
    }

    fn set_target_weight(&self, text: &str) {
        self.form.write().unwrap().target_weight = text.to_string();
    }

    fn set_pace(&self, pace: Option<Pace>) {
        self.form.write().unwrap().pace = pace;
    }

    fn set_diet_preset(&self, preset: Option<DietPreset>) {
        self.form.write().unwrap().diet_preset = preset;
    }

    fn form(&self) -> GoalForm {
        self.form.read().unwrap().clone()
    }

    /// Validates and submits the calorie section, then re-reads the goal.
    async fn save_calories(&self, user_id: &str) -> Result<GoalSnapshot> {
        let config = self.form.read().unwrap().validate_calorie_section()?;
        debug!(
            "Saving calorie goal for user {}: {:?} at {:?} pace",
            user_id, config.objective, config.pace
        );
        self.api.save_goal_calories(user_id, &config).await?;
        self.refresh_form(user_id).await
    }

    /// Validates and submits the diet section, then re-reads the goal.
    async fn save_diet(&self, user_id: &str) -> Result<GoalSnapshot> {
        let preset = self.form.read().unwrap().validate_diet_section()?;
        debug!("Saving diet preset for user {}: {:?}", user_id, preset);
        self.api.save_diet_type(user_id, preset).await?;
        self.refresh_form(user_id).await
    }

    /// Retrieves the current goal; an absent goal is "not configured yet",
    /// not a failure.
    async fn get_goal(&self, user_id: &str) -> Result<Option<GoalSnapshot>> {
        match self.api.get_goal(user_id).await {
            Ok(data) => Ok(Some(GoalSnapshot::from_data(data)?)),
            Err(Error::Remote(RemoteError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
