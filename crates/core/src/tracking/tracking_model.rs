//! Tracking and progress domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::meal_plans::{MealPlanEntry, MealPlanEntryData};

/// A set of macro quantities: calories plus grams of carbs, protein, fat.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSet {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Daily macro targets as the backend sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingGoalData {
    pub id: String,
    pub user_id: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Daily macro targets derived server-side from the profile. Referenced by
/// a tracking record, not owned by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingGoal {
    pub id: String,
    pub user_id: String,
    pub targets: MacroSet,
}

impl From<TrackingGoalData> for TrackingGoal {
    fn from(data: TrackingGoalData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            targets: MacroSet {
                calories: data.calories,
                carbs: data.carbs,
                protein: data.protein,
                fat: data.fat,
            },
        }
    }
}

/// Tracking record as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub consumed: MacroSet,
    #[serde(default)]
    pub tracking_goal: Option<TrackingGoalData>,
    #[serde(default)]
    pub entries: Vec<MealPlanEntryData>,
}

/// The per-user ledger of consumed macros and logged meal-plan entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub consumed: MacroSet,
    pub goal: Option<TrackingGoal>,
    pub entries: Vec<MealPlanEntry>,
}

impl Tracking {
    /// Normalizes a backend tracking payload.
    ///
    /// A referenced goal must belong to the same user as the tracking
    /// record; anything else is rejected.
    pub fn from_data(data: TrackingData) -> Result<Self, Error> {
        let goal = match data.tracking_goal {
            Some(goal) if goal.user_id != data.user_id => {
                return Err(Error::ConstraintViolation(format!(
                    "tracking {} references goal {} owned by another user",
                    data.id, goal.id
                )));
            }
            Some(goal) => Some(TrackingGoal::from(goal)),
            None => None,
        };

        Ok(Self {
            id: data.id,
            user_id: data.user_id,
            date: data.date,
            consumed: data.consumed,
            goal,
            entries: data
                .entries
                .into_iter()
                .map(MealPlanEntry::from_data)
                .collect(),
        })
    }
}

/// Server-derived consumed-vs-target view, recomputed on every read and
/// never stored client-side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub consumed: MacroSet,
    pub target: MacroSet,
}

/// One macro's consumed-vs-target figures.
///
/// The percentage is kept as f64; rounding happens only in the display
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProgress {
    pub consumed: f64,
    pub target: f64,
    pub percent: f64,
}

impl MacroProgress {
    pub(crate) fn compute(consumed: f64, target: f64) -> Self {
        let percent = if target > 0.0 {
            (consumed / target * 100.0).clamp(0.0, crate::constants::PROGRESS_PERCENT_MAX)
        } else {
            0.0
        };
        Self {
            consumed,
            target,
            percent,
        }
    }

    /// Nearest-integer percentage for display.
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }

    /// Nearest-integer consumed quantity for display.
    pub fn rounded_consumed(&self) -> i64 {
        self.consumed.round() as i64
    }

    /// Nearest-integer target quantity for display.
    pub fn rounded_target(&self) -> i64 {
        self.target.round() as i64
    }
}

/// Per-macro progress for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub calories: MacroProgress,
    pub carbs: MacroProgress,
    pub protein: MacroProgress,
    pub fat: MacroProgress,
}

/// Aggregated progress for the UI.
///
/// `Unconfigured` (no usable calorie target yet) is rendered distinctly
/// from a goal at 0% progress; the two are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "progress", rename_all = "camelCase")]
pub enum ProgressView {
    Unconfigured,
    Configured(DailyProgress),
}
