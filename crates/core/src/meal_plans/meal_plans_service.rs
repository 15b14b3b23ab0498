use log::debug;
use std::sync::{Arc, RwLock};

use super::meal_plans_model::{MealPlan, MealPlanEntry, MealPlanError};
use super::meal_plans_traits::{MealPlanApiTrait, MealPlanServiceTrait};
use crate::errors::{Error, RemoteError, Result};
use crate::session::UserSession;
use crate::tracking::TrackingApiTrait;

/// Keeps a user's meal plans consistent with their tracking record.
///
/// The user's tracking id is cached in the session context (write once per
/// user, invalidated on user change). The cascading delete is one logical
/// unit: no local state changes unless the remote call succeeds.
pub struct MealPlanService {
    api: Arc<dyn MealPlanApiTrait>,
    tracking_api: Arc<dyn TrackingApiTrait>,
    session: RwLock<UserSession>,
    plans: RwLock<Vec<MealPlan>>,
}

impl MealPlanService {
    pub fn new(api: Arc<dyn MealPlanApiTrait>, tracking_api: Arc<dyn TrackingApiTrait>) -> Self {
        Self {
            api,
            tracking_api,
            session: RwLock::new(UserSession::new()),
            plans: RwLock::new(Vec::new()),
        }
    }

    /// Resolves the user's tracking id, from the session cache when
    /// possible. Without one the cascading delete must not proceed.
    async fn resolve_tracking_id(&self, user_id: &str) -> Result<String> {
        if let Some(tracking_id) = self.session.read().unwrap().tracking_id() {
            return Ok(tracking_id.to_string());
        }

        match self.tracking_api.get_tracking(user_id).await {
            Ok(data) => {
                self.session.write().unwrap().cache_tracking_id(&data.id);
                Ok(data.id)
            }
            Err(Error::Remote(RemoteError::NotFound(_))) => {
                Err(MealPlanError::NoTrackingForUser(user_id.to_string()).into())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl MealPlanServiceTrait for MealPlanService {
    fn set_user(&self, user_id: &str) {
        let mut session = self.session.write().unwrap();
        if session.user_id() != Some(user_id) {
            session.set_user(user_id);
            self.plans.write().unwrap().clear();
        }
    }

    /// Deletes the plan and detaches its tracking entries as one logical
    /// operation.
    async fn delete_meal_plan_with_tracking(&self, meal_plan_id: &str) -> Result<()> {
        let user_id = self
            .session
            .read()
            .unwrap()
            .user_id()
            .map(str::to_string)
            .ok_or(MealPlanError::NoActiveUser)?;
        let tracking_id = self.resolve_tracking_id(&user_id).await?;

        debug!(
            "Deleting meal plan {} with tracking {}",
            meal_plan_id, tracking_id
        );
        self.api
            .delete_meal_plan_with_tracking(meal_plan_id, &tracking_id)
            .await?;

        // Prune by identity instead of refetching; the listing may lag the
        // server until the next full reload.
        self.plans
            .write()
            .unwrap()
            .retain(|plan| plan.id != meal_plan_id);
        Ok(())
    }

    /// Fetches the profile's current plan; an absent plan is "not
    /// configured yet", not a failure.
    async fn get_current_plan(&self, profile_id: &str) -> Result<Option<MealPlan>> {
        match self.api.get_current_meal_plan(profile_id).await {
            Ok(data) => {
                let plan = MealPlan::from_data(data);
                let mut plans = self.plans.write().unwrap();
                plans.retain(|existing| existing.id != plan.id);
                plans.push(plan.clone());
                Ok(Some(plan))
            }
            Err(Error::Remote(RemoteError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_detailed_entries(&self, meal_plan_id: &str) -> Result<Vec<MealPlanEntry>> {
        let entries = self.api.get_detailed_entries(meal_plan_id).await?;
        Ok(entries.into_iter().map(MealPlanEntry::from_data).collect())
    }

    fn plans(&self) -> Vec<MealPlan> {
        self.plans.read().unwrap().clone()
    }
}
