use async_trait::async_trait;

use crate::errors::Result;
use crate::tracking::tracking_model::{ProgressSnapshot, ProgressView, TrackingData};

/// Trait for the remote tracking resource.
#[async_trait]
pub trait TrackingApiTrait: Send + Sync {
    async fn create_tracking(&self, user_id: &str) -> Result<()>;
    /// Returns the raw payload; normalization happens in the services.
    async fn get_tracking(&self, user_id: &str) -> Result<TrackingData>;
    async fn get_progress(&self, user_id: &str) -> Result<ProgressSnapshot>;
}

/// Trait for progress aggregation.
#[async_trait]
pub trait ProgressServiceTrait: Send + Sync {
    async fn get_progress(&self, user_id: &str) -> Result<ProgressView>;
}
