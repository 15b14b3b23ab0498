//! Tests for the onboarding orchestration sequence.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::errors::{Error, RemoteError, Result};
    use crate::onboarding::{
        OnboardingService, OnboardingServiceTrait, OnboardingState, OnboardingStep,
        ProfileApiTrait, ProfileRequest, SetupFlagStoreTrait,
    };
    use crate::tracking::{ProgressSnapshot, TrackingApiTrait, TrackingData};

    fn remote_failure(what: &str) -> Error {
        RemoteError::Http {
            status: 500,
            message: what.to_string(),
        }
        .into()
    }

    #[derive(Default)]
    struct FakeProfileApi {
        fail_profile: bool,
        fail_goal: bool,
        profile_calls: AtomicUsize,
        goal_calls: AtomicUsize,
    }

    #[async_trait]
    impl ProfileApiTrait for FakeProfileApi {
        async fn create_profile(&self, _request: &ProfileRequest) -> Result<String> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_profile {
                return Err(remote_failure("profile"));
            }
            Ok("profile-1".to_string())
        }

        async fn create_goal_from_profile(&self, _profile_id: &str) -> Result<String> {
            self.goal_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_goal {
                return Err(remote_failure("goal"));
            }
            Ok("goal-1".to_string())
        }

        async fn update_goal_from_profile(&self, _profile_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeTrackingApi {
        fail_create: bool,
        create_calls: AtomicUsize,
    }

    #[async_trait]
    impl TrackingApiTrait for FakeTrackingApi {
        async fn create_tracking(&self, _user_id: &str) -> Result<()> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(remote_failure("tracking"));
            }
            Ok(())
        }

        async fn get_tracking(&self, user_id: &str) -> Result<TrackingData> {
            Err(RemoteError::NotFound(user_id.to_string()).into())
        }

        async fn get_progress(&self, user_id: &str) -> Result<ProgressSnapshot> {
            Err(RemoteError::NotFound(user_id.to_string()).into())
        }
    }

    #[derive(Default)]
    struct FakeFlagStore {
        profile_setup: AtomicBool,
        health_profile: AtomicBool,
    }

    impl SetupFlagStoreTrait for FakeFlagStore {
        fn set_profile_setup_complete(&self, complete: bool) -> Result<()> {
            self.profile_setup.store(complete, Ordering::SeqCst);
            Ok(())
        }

        fn set_health_profile_complete(&self, complete: bool) -> Result<()> {
            self.health_profile.store(complete, Ordering::SeqCst);
            Ok(())
        }

        fn profile_setup_complete(&self) -> Result<bool> {
            Ok(self.profile_setup.load(Ordering::SeqCst))
        }

        fn health_profile_complete(&self) -> Result<bool> {
            Ok(self.health_profile.load(Ordering::SeqCst))
        }
    }

    struct Harness {
        profile_api: Arc<FakeProfileApi>,
        tracking_api: Arc<FakeTrackingApi>,
        flags: Arc<FakeFlagStore>,
        service: OnboardingService,
    }

    fn create_harness(profile_api: FakeProfileApi, tracking_api: FakeTrackingApi) -> Harness {
        let profile_api = Arc::new(profile_api);
        let tracking_api = Arc::new(tracking_api);
        let flags = Arc::new(FakeFlagStore::default());
        let service = OnboardingService::new(
            profile_api.clone(),
            tracking_api.clone(),
            flags.clone(),
        );
        Harness {
            profile_api,
            tracking_api,
            flags,
            service,
        }
    }

    fn create_request() -> ProfileRequest {
        ProfileRequest {
            user_id: "user-1".to_string(),
            height_cm: 178.0,
            weight_kg: 82.5,
            birth_date: NaiveDate::from_ymd_opt(1992, 4, 18).unwrap(),
            activity_level: Some("MODERATE".to_string()),
        }
    }

    fn unwrap_onboarding_error(err: Error) -> (OnboardingStep, Option<String>) {
        match err {
            Error::Onboarding(e) => (e.step, e.profile_id),
            other => panic!("expected onboarding error, got {other}"),
        }
    }

    // ==================== Happy Path ====================

    #[tokio::test]
    async fn test_full_run_sets_both_flags() {
        let h = create_harness(FakeProfileApi::default(), FakeTrackingApi::default());

        let profile_id = h.service.run(create_request()).await.unwrap();

        assert_eq!(profile_id, "profile-1");
        assert!(h.flags.is_onboarding_complete().unwrap());
        assert_eq!(
            h.service.state(),
            OnboardingState::Complete {
                profile_id: "profile-1".to_string()
            }
        );
    }

    // ==================== Partial Failures ====================

    #[tokio::test]
    async fn test_profile_failure_stops_everything() {
        let h = create_harness(
            FakeProfileApi {
                fail_profile: true,
                ..FakeProfileApi::default()
            },
            FakeTrackingApi::default(),
        );

        let err = h.service.run(create_request()).await.unwrap_err();
        let (step, profile_id) = unwrap_onboarding_error(err);

        assert_eq!(step, OnboardingStep::Profile);
        assert_eq!(profile_id, None);
        assert_eq!(h.profile_api.goal_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.tracking_api.create_calls.load(Ordering::SeqCst), 0);
        assert!(!h.flags.is_onboarding_complete().unwrap());
    }

    #[tokio::test]
    async fn test_goal_failure_keeps_committed_profile() {
        let h = create_harness(
            FakeProfileApi {
                fail_goal: true,
                ..FakeProfileApi::default()
            },
            FakeTrackingApi::default(),
        );

        let err = h.service.run(create_request()).await.unwrap_err();
        let (step, profile_id) = unwrap_onboarding_error(err);

        // The profile exists and is not rolled back; the error says so.
        assert_eq!(step, OnboardingStep::Goal);
        assert_eq!(profile_id, Some("profile-1".to_string()));
        assert_eq!(h.tracking_api.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            h.service.state(),
            OnboardingState::Failed {
                step: OnboardingStep::Goal,
                profile_id: Some("profile-1".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_tracking_failure_keeps_profile_and_goal() {
        let h = create_harness(
            FakeProfileApi::default(),
            FakeTrackingApi {
                fail_create: true,
                ..FakeTrackingApi::default()
            },
        );

        let err = h.service.run(create_request()).await.unwrap_err();
        let (step, profile_id) = unwrap_onboarding_error(err);

        assert_eq!(step, OnboardingStep::Tracking);
        assert_eq!(profile_id, Some("profile-1".to_string()));
        assert!(!h.flags.is_onboarding_complete().unwrap());
    }

    // ==================== Resume ====================

    #[tokio::test]
    async fn test_resume_skips_profile_creation() {
        let h = create_harness(FakeProfileApi::default(), FakeTrackingApi::default());

        h.service.resume("profile-1", "user-1").await.unwrap();

        // No duplicate profile was created.
        assert_eq!(h.profile_api.profile_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.profile_api.goal_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.tracking_api.create_calls.load(Ordering::SeqCst), 1);
        assert!(h.flags.is_onboarding_complete().unwrap());
    }

    // ==================== Local Validation ====================

    #[tokio::test]
    async fn test_invalid_request_never_reaches_the_network() {
        let h = create_harness(FakeProfileApi::default(), FakeTrackingApi::default());
        let request = ProfileRequest {
            user_id: "  ".to_string(),
            ..create_request()
        };

        let err = h.service.run(request).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(h.profile_api.profile_calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Completion Flags ====================

    #[test]
    fn test_single_flag_is_not_complete() {
        let flags = FakeFlagStore::default();
        flags.set_profile_setup_complete(true).unwrap();
        assert!(!flags.is_onboarding_complete().unwrap());

        flags.set_health_profile_complete(true).unwrap();
        assert!(flags.is_onboarding_complete().unwrap());
    }
}
