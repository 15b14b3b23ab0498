//! Tracking module - domain models, services, and traits.

mod progress_service;
mod tracking_model;
mod tracking_traits;


pub use progress_service::{aggregate, ProgressService};
pub use tracking_model::{
    DailyProgress, MacroProgress, MacroSet, ProgressSnapshot, ProgressView, Tracking,
    TrackingData, TrackingGoal, TrackingGoalData,
};
pub use tracking_traits::{ProgressServiceTrait, TrackingApiTrait};
