//! Meal plans module - domain models, services, and traits.

mod meal_plans_model;
mod meal_plans_service;
mod meal_plans_traits;


pub use meal_plans_model::{
    MealPlan, MealPlanData, MealPlanEntry, MealPlanEntryData, MealPlanError, MealType,
};
pub use meal_plans_service::MealPlanService;
pub use meal_plans_traits::{MealPlanApiTrait, MealPlanServiceTrait};
