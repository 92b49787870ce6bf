//! Deterministic metric formulas for workout records
//!
//! Pure functions only: each formula maps raw sensor fields to one derived
//! metric, with no stored state. A zero duration is not guarded here and
//! divides through with IEEE semantics (inf/NaN); the dispatcher rejects
//! non-positive durations before a record is ever constructed.

/// ---------------------------------------------------------------------------
/// Conversion constants
/// ---------------------------------------------------------------------------

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by one step, in meters (running and walking).
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// km/h to m/s.
pub const KMH_TO_MS: f64 = 0.278;

/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

/// ---------------------------------------------------------------------------
/// Calorie coefficients (per variant)
/// ---------------------------------------------------------------------------

/// Running: mean-speed multiplier.
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
/// Running: mean-speed shift.
pub const RUN_SPEED_SHIFT: f64 = 1.79;

/// Sports walking: weight multiplier.
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Sports walking: speed-squared-over-height weight multiplier.
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Swimming: mean-speed multiplier.
pub const SWIM_SPEED_MULTIPLIER: f64 = 2.0;
/// Swimming: mean-speed shift.
pub const SWIM_SPEED_SHIFT: f64 = 1.1;

/// ---------------------------------------------------------------------------
/// Formulas
/// ---------------------------------------------------------------------------

/// Distance in km from a unit-of-motion count and the per-unit length.
///
/// Every variant uses this formula; swimming passes its stroke length
/// instead of the step length.
pub fn distance_km(action: u32, unit_length_m: f64) -> f64 {
  action as f64 * unit_length_m / M_IN_KM
}

/// Mean speed in km/h over the workout duration (running, walking).
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
  distance_km / duration_hours
}

/// Swimming mean speed in km/h, from pool geometry rather than strokes.
pub fn swimming_mean_speed_kmh(
  pool_length_m: f64,
  pool_lengths: f64,
  duration_hours: f64,
) -> f64 {
  pool_length_m * pool_lengths / M_IN_KM / duration_hours
}

/// Calories burned while running.
pub fn running_calories_kcal(
  mean_speed_kmh: f64,
  weight_kg: f64,
  duration_hours: f64,
) -> f64 {
  (RUN_SPEED_MULTIPLIER * mean_speed_kmh + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
    * duration_hours
    * MIN_IN_HOUR
}

/// Calories burned while sports walking.
///
/// Expects height already normalized to meters.
pub fn walking_calories_kcal(
  mean_speed_kmh: f64,
  weight_kg: f64,
  height_m: f64,
  duration_hours: f64,
) -> f64 {
  let speed_ms = mean_speed_kmh * KMH_TO_MS;

  (WALK_WEIGHT_MULTIPLIER * weight_kg
    + speed_ms.powi(2) / height_m * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
    * duration_hours
    * MIN_IN_HOUR
}

/// Calories burned while swimming.
pub fn swimming_calories_kcal(
  mean_speed_kmh: f64,
  weight_kg: f64,
  duration_hours: f64,
) -> f64 {
  (mean_speed_kmh + SWIM_SPEED_SHIFT) * SWIM_SPEED_MULTIPLIER * weight_kg * duration_hours
}
