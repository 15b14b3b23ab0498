//! Meal plan domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys::{normalize_lenient, DomainKey};

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl DomainKey for MealType {
    const DOMAIN: &'static str = "meal type";

    fn canonical_names() -> &'static [(&'static str, Self)] {
        &[
            ("BREAKFAST", MealType::Breakfast),
            ("LUNCH", MealType::Lunch),
            ("DINNER", MealType::Dinner),
            ("SNACK", MealType::Snack),
        ]
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("desayuno", MealType::Breakfast),
            ("almuerzo", MealType::Lunch),
            ("comida", MealType::Lunch),
            ("cena", MealType::Dinner),
            ("supper", MealType::Dinner),
            ("merienda", MealType::Snack),
            ("colacion", MealType::Snack),
            ("tentempie", MealType::Snack),
            ("snacks", MealType::Snack),
        ]
    }
}

/// Meal plan entry as the backend sends it: the slot is a free-form string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntryData {
    pub id: String,
    pub recipe_id: String,
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub meal_type: Option<String>,
}

/// A single recipe assignment within a meal plan for a given day and slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: String,
    pub recipe_id: String,
    pub recipe_name: Option<String>,
    pub day: Option<NaiveDate>,
    pub slot: Option<MealType>,
}

impl MealPlanEntry {
    /// Normalizes a backend entry; an unrecognized meal type is logged and
    /// leaves the slot unset.
    pub fn from_data(data: MealPlanEntryData) -> Self {
        Self {
            slot: normalize_lenient(data.meal_type.as_deref()),
            id: data.id,
            recipe_id: data.recipe_id,
            recipe_name: data.recipe_name,
            day: data.day,
        }
    }
}

/// Meal plan as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanData {
    pub id: String,
    pub profile_id: String,
    #[serde(default)]
    pub entries: Vec<MealPlanEntryData>,
}

/// A profile's meal plan with normalized entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub profile_id: String,
    pub entries: Vec<MealPlanEntry>,
}

impl MealPlan {
    pub fn from_data(data: MealPlanData) -> Self {
        Self {
            id: data.id,
            profile_id: data.profile_id,
            entries: data
                .entries
                .into_iter()
                .map(MealPlanEntry::from_data)
                .collect(),
        }
    }
}

/// Meal plan operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealPlanError {
    /// The cascading delete needs a resolved tracking id before it may
    /// touch anything.
    #[error("No tracking found for user {0}")]
    NoTrackingForUser(String),

    #[error("No active user in the session")]
    NoActiveUser,
}
