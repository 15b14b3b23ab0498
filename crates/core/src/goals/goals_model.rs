//! Goal domain models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{FAST_WEEKLY_DELTA_KG, MODERATE_WEEKLY_DELTA_KG, SLOW_WEEKLY_DELTA_KG};
use crate::errors::Error;
use crate::keys::{normalize_lenient, DomainKey};

/// High-level weight-change objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Objective {
    LoseWeight,
    MaintainWeight,
    GainMuscle,
}

impl DomainKey for Objective {
    const DOMAIN: &'static str = "objective";

    fn canonical_names() -> &'static [(&'static str, Self)] {
        &[
            ("LOSE_WEIGHT", Objective::LoseWeight),
            ("MAINTAIN_WEIGHT", Objective::MaintainWeight),
            ("GAIN_MUSCLE", Objective::GainMuscle),
        ]
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("bajar_peso", Objective::LoseWeight),
            ("bajar", Objective::LoseWeight),
            ("perder_peso", Objective::LoseWeight),
            ("lose", Objective::LoseWeight),
            ("lose_weight", Objective::LoseWeight),
            ("loseweight", Objective::LoseWeight),
            ("mantener_peso", Objective::MaintainWeight),
            ("mantener", Objective::MaintainWeight),
            ("maintain", Objective::MaintainWeight),
            ("maintain_weight", Objective::MaintainWeight),
            ("maintainweight", Objective::MaintainWeight),
            ("ganar_musculo", Objective::GainMuscle),
            ("ganar_masa", Objective::GainMuscle),
            ("gain", Objective::GainMuscle),
            ("gain_muscle", Objective::GainMuscle),
            ("gainmuscle", Objective::GainMuscle),
            ("build_muscle", Objective::GainMuscle),
        ]
    }
}

/// Targeted speed of weight change. The weekly delta is display-only; the
/// backend derives the actual calorie budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pace {
    Slow,
    Moderate,
    Fast,
}

impl Pace {
    /// Weekly weight delta in kilograms shown next to the pace selector.
    pub fn weekly_delta_kg(&self) -> f64 {
        match self {
            Pace::Slow => SLOW_WEEKLY_DELTA_KG,
            Pace::Moderate => MODERATE_WEEKLY_DELTA_KG,
            Pace::Fast => FAST_WEEKLY_DELTA_KG,
        }
    }
}

impl DomainKey for Pace {
    const DOMAIN: &'static str = "pace";

    fn canonical_names() -> &'static [(&'static str, Self)] {
        &[
            ("SLOW", Pace::Slow),
            ("MODERATE", Pace::Moderate),
            ("FAST", Pace::Fast),
        ]
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("lento", Pace::Slow),
            ("lenta", Pace::Slow),
            ("despacio", Pace::Slow),
            ("moderado", Pace::Moderate),
            ("moderada", Pace::Moderate),
            ("medio", Pace::Moderate),
            ("media", Pace::Moderate),
            ("rapido", Pace::Fast),
            ("rapida", Pace::Fast),
            ("agresivo", Pace::Fast),
        ]
    }
}

/// Named macro-split archetype. The suggested split is a fixed client-known
/// figure for display; authoritative percentages come from the backend
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietPreset {
    Omnivore,
    Vegetarian,
    Vegan,
    LowCarb,
    HighProtein,
    Mediterranean,
}

impl DietPreset {
    pub fn suggested_split(&self) -> MacroSplit {
        match self {
            DietPreset::Omnivore => MacroSplit::new(25.0, 45.0, 30.0),
            DietPreset::Vegetarian => MacroSplit::new(20.0, 50.0, 30.0),
            DietPreset::Vegan => MacroSplit::new(20.0, 55.0, 25.0),
            DietPreset::LowCarb => MacroSplit::new(30.0, 20.0, 50.0),
            DietPreset::HighProtein => MacroSplit::new(40.0, 30.0, 30.0),
            DietPreset::Mediterranean => MacroSplit::new(20.0, 45.0, 35.0),
        }
    }
}

impl DomainKey for DietPreset {
    const DOMAIN: &'static str = "diet preset";

    fn canonical_names() -> &'static [(&'static str, Self)] {
        &[
            ("OMNIVORE", DietPreset::Omnivore),
            ("VEGETARIAN", DietPreset::Vegetarian),
            ("VEGAN", DietPreset::Vegan),
            ("LOW_CARB", DietPreset::LowCarb),
            ("HIGH_PROTEIN", DietPreset::HighProtein),
            ("MEDITERRANEAN", DietPreset::Mediterranean),
        ]
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("omnivoro", DietPreset::Omnivore),
            ("omnivora", DietPreset::Omnivore),
            ("estandar", DietPreset::Omnivore),
            ("standard", DietPreset::Omnivore),
            ("vegetariano", DietPreset::Vegetarian),
            ("vegetariana", DietPreset::Vegetarian),
            ("veggie", DietPreset::Vegetarian),
            ("vegano", DietPreset::Vegan),
            ("vegana", DietPreset::Vegan),
            ("low_carb", DietPreset::LowCarb),
            ("lowcarb", DietPreset::LowCarb),
            ("baja_en_carbohidratos", DietPreset::LowCarb),
            ("bajo_en_carbohidratos", DietPreset::LowCarb),
            ("high_protein", DietPreset::HighProtein),
            ("highprotein", DietPreset::HighProtein),
            ("alta_en_proteina", DietPreset::HighProtein),
            ("alto_en_proteinas", DietPreset::HighProtein),
            ("proteica", DietPreset::HighProtein),
            ("mediterraneo", DietPreset::Mediterranean),
            ("mediterranea", DietPreset::Mediterranean),
            ("dieta_mediterranea", DietPreset::Mediterranean),
        ]
    }
}

/// Macro percentage split (protein/carbs/fat).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

impl MacroSplit {
    pub fn new(protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }
}

/// Calorie-section write payload. Built only by successful form validation
/// and never persisted locally beyond the current form session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCalorieConfig {
    pub objective: Objective,
    pub target_weight_kg: f64,
    pub pace: Pace,
}

/// Goal payload as the backend sends it: the enumerated fields are
/// free-form strings and the macro percentages arrive as three independent
/// optionals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshotData {
    pub user_id: String,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub target_weight_kg: f64,
    #[serde(default)]
    pub pace: Option<String>,
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub protein_pct: Option<f64>,
    #[serde(default)]
    pub carbs_pct: Option<f64>,
    #[serde(default)]
    pub fat_pct: Option<f64>,
}

/// The server's canonical current goal, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshot {
    pub user_id: String,
    pub objective: Option<Objective>,
    pub target_weight_kg: f64,
    pub pace: Option<Pace>,
    pub diet_preset: Option<DietPreset>,
    /// Absent until the backend has resolved the preset into percentages.
    pub macro_split: Option<MacroSplit>,
}

impl GoalSnapshot {
    /// Normalizes a backend goal payload.
    ///
    /// Unrecognized objective/pace/diet keys are logged and left unset. The
    /// macro percentages are all-or-none; a partially resolved payload is
    /// rejected rather than patched.
    pub fn from_data(data: GoalSnapshotData) -> Result<Self, Error> {
        let macro_split = match (data.protein_pct, data.carbs_pct, data.fat_pct) {
            (Some(protein_pct), Some(carbs_pct), Some(fat_pct)) => {
                Some(MacroSplit::new(protein_pct, carbs_pct, fat_pct))
            }
            (None, None, None) => None,
            _ => {
                return Err(Error::ConstraintViolation(format!(
                    "goal for user {} has partially resolved macro percentages",
                    data.user_id
                )))
            }
        };

        Ok(Self {
            objective: normalize_lenient(data.objective.as_deref()),
            pace: normalize_lenient(data.pace.as_deref()),
            diet_preset: normalize_lenient(data.diet_type.as_deref()),
            user_id: data.user_id,
            target_weight_kg: data.target_weight_kg,
            macro_split,
        })
    }
}

/// Goal form validation errors, one per unmet section requirement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalFormError {
    #[error("Target weight is missing or not a positive number")]
    MissingWeight,

    #[error("No pace selected")]
    MissingPace,

    #[error("No objective selected")]
    MissingObjective,

    #[error("No diet preset selected")]
    MissingPreset,
}

/// In-progress goal form state.
///
/// The calorie section (objective, weight, pace) and the diet section are
/// validated and submitted independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub objective: Option<Objective>,
    /// Target weight as typed, unparsed until validation.
    pub target_weight: String,
    pub pace: Option<Pace>,
    pub diet_preset: Option<DietPreset>,
}

impl GoalForm {
    /// Validates the calorie section into a write payload.
    ///
    /// Fields are checked weight, then pace, then objective, so the first
    /// error surfaced is deterministic.
    pub fn validate_calorie_section(&self) -> Result<GoalCalorieConfig, GoalFormError> {
        let target_weight_kg = self
            .target_weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|weight| *weight > 0.0)
            .ok_or(GoalFormError::MissingWeight)?;
        let pace = self.pace.ok_or(GoalFormError::MissingPace)?;
        let objective = self.objective.ok_or(GoalFormError::MissingObjective)?;

        Ok(GoalCalorieConfig {
            objective,
            target_weight_kg,
            pace,
        })
    }

    /// Validates the diet section.
    pub fn validate_diet_section(&self) -> Result<DietPreset, GoalFormError> {
        self.diet_preset.ok_or(GoalFormError::MissingPreset)
    }

    /// Re-applies a parsed server snapshot after a successful save. What the
    /// server reports becomes the form's source of truth, not what was last
    /// typed.
    pub fn apply_snapshot(&mut self, snapshot: &GoalSnapshot) {
        self.objective = snapshot.objective;
        self.pace = snapshot.pace;
        self.diet_preset = snapshot.diet_preset;
        if snapshot.target_weight_kg > 0.0 {
            self.target_weight = snapshot.target_weight_kg.to_string();
        }
    }
}
