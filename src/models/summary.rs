use serde::{Deserialize, Serialize};
use std::fmt;

/// One-line report for a completed workout.
///
/// A plain value object: no identity beyond its fields. Produced by
/// [`Workout::summary`](crate::models::workout::Workout::summary) and
/// consumed only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
  pub label: String,
  pub duration_hours: f64,
  pub distance_km: f64,
  pub mean_speed_kmh: f64,
  pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
  /// Render the summary line. Every numeric field carries exactly three
  /// digits after the decimal point.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
       Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
      self.label, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
    )
  }
}
