//! Tests for the goal service read-after-write cycle.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::errors::{RemoteError, Result};
    use crate::goals::{
        DietPreset, GoalApiTrait, GoalCalorieConfig, GoalService, GoalServiceTrait,
        GoalSnapshotData, Objective, Pace,
    };

    /// Fake goal backend that echoes saved values back as the loosely-typed
    /// locale strings the real service produces.
    #[derive(Default)]
    struct FakeGoalApi {
        saved_config: Mutex<Option<GoalCalorieConfig>>,
        saved_preset: Mutex<Option<DietPreset>>,
        goal: Mutex<Option<GoalSnapshotData>>,
    }

    fn wire_objective(objective: Objective) -> &'static str {
        match objective {
            Objective::LoseWeight => "Bajar-Peso",
            Objective::MaintainWeight => "mantener_peso",
            Objective::GainMuscle => "Ganar Músculo",
        }
    }

    fn wire_pace(pace: Pace) -> &'static str {
        match pace {
            Pace::Slow => "Lento",
            Pace::Moderate => "Moderado",
            Pace::Fast => "Rápido",
        }
    }

    #[async_trait]
    impl GoalApiTrait for FakeGoalApi {
        async fn save_goal_calories(
            &self,
            user_id: &str,
            config: &GoalCalorieConfig,
        ) -> Result<()> {
            *self.saved_config.lock().unwrap() = Some(*config);
            let mut goal = self.goal.lock().unwrap();
            let mut data = goal.take().unwrap_or_default();
            data.user_id = user_id.to_string();
            data.objective = Some(wire_objective(config.objective).to_string());
            data.pace = Some(wire_pace(config.pace).to_string());
            data.target_weight_kg = config.target_weight_kg;
            *goal = Some(data);
            Ok(())
        }

        async fn save_diet_type(&self, user_id: &str, preset: DietPreset) -> Result<()> {
            *self.saved_preset.lock().unwrap() = Some(preset);
            let mut goal = self.goal.lock().unwrap();
            let mut data = goal.take().unwrap_or_default();
            data.user_id = user_id.to_string();
            data.diet_type = Some("vegano".to_string());
            *goal = Some(data);
            Ok(())
        }

        async fn get_goal(&self, user_id: &str) -> Result<GoalSnapshotData> {
            self.goal
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| RemoteError::NotFound(format!("goal for {}", user_id)).into())
        }
    }

    fn create_service() -> (Arc<FakeGoalApi>, GoalService) {
        let api = Arc::new(FakeGoalApi::default());
        let service = GoalService::new(api.clone());
        (api, service)
    }

    // ==================== Round Trip ====================

    #[tokio::test]
    async fn test_save_calories_round_trips_through_normalization() {
        let (api, service) = create_service();
        service.set_objective(Some(Objective::LoseWeight));
        service.set_target_weight("70.5");
        service.set_pace(Some(Pace::Moderate));

        let snapshot = service.save_calories("user-1").await.unwrap();

        // The submitted write reached the backend...
        let saved = api.saved_config.lock().unwrap().unwrap();
        assert_eq!(saved.objective, Objective::LoseWeight);
        assert_eq!(saved.target_weight_kg, 70.5);

        // ...and the echoed locale strings re-normalize to what was sent.
        assert_eq!(snapshot.objective, Some(Objective::LoseWeight));
        assert_eq!(snapshot.pace, Some(Pace::Moderate));

        // The form now reflects the server report.
        let form = service.form();
        assert_eq!(form.objective, Some(Objective::LoseWeight));
        assert_eq!(form.pace, Some(Pace::Moderate));
        assert_eq!(form.target_weight, "70.5");
    }

    #[tokio::test]
    async fn test_save_diet_round_trips() {
        let (api, service) = create_service();
        service.set_diet_preset(Some(DietPreset::Vegan));

        let snapshot = service.save_diet("user-1").await.unwrap();

        assert_eq!(*api.saved_preset.lock().unwrap(), Some(DietPreset::Vegan));
        assert_eq!(snapshot.diet_preset, Some(DietPreset::Vegan));
        assert_eq!(service.form().diet_preset, Some(DietPreset::Vegan));
    }

    // ==================== Validation Gate ====================

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        let (api, service) = create_service();
        service.set_objective(Some(Objective::LoseWeight));
        service.set_pace(Some(Pace::Slow));
        // Weight left blank.

        assert!(service.save_calories("user-1").await.is_err());
        assert!(api.saved_config.lock().unwrap().is_none());
    }

    // ==================== Absent Goal ====================

    #[tokio::test]
    async fn test_get_goal_not_found_is_none() {
        let (_api, service) = create_service();
        assert_eq!(service.get_goal("user-1").await.unwrap(), None);
    }
}
