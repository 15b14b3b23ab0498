//! Aggregation of tracking and progress reads into a per-macro view.

use log::debug;
use std::sync::Arc;

use super::tracking_model::{
    DailyProgress, MacroProgress, ProgressSnapshot, ProgressView, Tracking,
};
use super::tracking_traits::{ProgressServiceTrait, TrackingApiTrait};
use crate::errors::{Error, RemoteError, Result};

/// Merges a tracking snapshot and a progress snapshot into
/// percentage-complete figures per macro.
///
/// The progress snapshot, when present, supplies both consumed and target
/// values; otherwise they fall back to the tracking record and its goal.
/// Without a positive calorie target the view is `Unconfigured`. Each macro
/// is clamped independently, so the calorie percentage and the per-macro
/// percentages may disagree; they are not re-normalized against each other.
pub fn aggregate(tracking: Option<&Tracking>, progress: Option<&ProgressSnapshot>) -> ProgressView {
    let target = progress
        .map(|p| p.target)
        .or_else(|| tracking.and_then(|t| t.goal.as_ref()).map(|g| g.targets));
    let consumed = progress.map(|p| p.consumed).or_else(|| tracking.map(|t| t.consumed));

    let (consumed, target) = match (consumed, target) {
        (Some(consumed), Some(target)) if target.calories > 0.0 => (consumed, target),
        _ => return ProgressView::Unconfigured,
    };

    ProgressView::Configured(DailyProgress {
        calories: MacroProgress::compute(consumed.calories, target.calories),
        carbs: MacroProgress::compute(consumed.carbs, target.carbs),
        protein: MacroProgress::compute(consumed.protein, target.protein),
        fat: MacroProgress::compute(consumed.fat, target.fat),
    })
}

/// Service performing the tracking and progress reads behind [`aggregate`].
pub struct ProgressService {
    tracking_api: Arc<dyn TrackingApiTrait>,
}

impl ProgressService {
    pub fn new(tracking_api: Arc<dyn TrackingApiTrait>) -> Self {
        Self { tracking_api }
    }
}

#[async_trait::async_trait]
impl ProgressServiceTrait for ProgressService {
    /// Reads the tracking record and the progress snapshot for the user,
    /// treating absence of either as "not configured yet".
    async fn get_progress(&self, user_id: &str) -> Result<ProgressView> {
        let tracking = match self.tracking_api.get_tracking(user_id).await {
            Ok(data) => Some(Tracking::from_data(data)?),
            Err(Error::Remote(RemoteError::NotFound(_))) => None,
            Err(e) => return Err(e),
        };

        let snapshot = match self.tracking_api.get_progress(user_id).await {
            Ok(snapshot) => Some(snapshot),
            Err(Error::Remote(RemoteError::NotFound(_))) => None,
            Err(e) => return Err(e),
        };

        debug!(
            "Aggregating progress for user {} (tracking: {}, snapshot: {})",
            user_id,
            tracking.is_some(),
            snapshot.is_some()
        );
        Ok(aggregate(tracking.as_ref(), snapshot.as_ref()))
    }
}
