/// Weekly weight delta for the slow pace, in kilograms. Display only.
pub const SLOW_WEEKLY_DELTA_KG: f64 = 0.25;

/// Weekly weight delta for the moderate pace, in kilograms. Display only.
pub const MODERATE_WEEKLY_DELTA_KG: f64 = 0.5;

/// Weekly weight delta for the fast pace, in kilograms. Display only.
pub const FAST_WEEKLY_DELTA_KG: f64 = 0.75;

/// Upper bound for displayed progress percentages.
pub const PROGRESS_PERCENT_MAX: f64 = 100.0;
