//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goals_model::{
    DietPreset, GoalCalorieConfig, GoalForm, GoalFormError, GoalSnapshot, GoalSnapshotData,
    MacroSplit, Objective, Pace,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalApiTrait, GoalServiceTrait};
