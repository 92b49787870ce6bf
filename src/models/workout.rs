//! Workout records: raw sensor fields plus the derived metrics
//!
//! A record is built once by the dispatcher and never mutated afterwards.
//! All unit conversions happen at construction time, so every metric getter
//! is a pure read over stored fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics;
use crate::models::summary::WorkoutSummary;

/// ---------------------------------------------------------------------------
/// Workout kind
/// ---------------------------------------------------------------------------

/// Tag identifying the workout variant.
///
/// The tag carries the per-variant constant table: wire code, display label,
/// unit-of-motion length and expected sensor field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
  Running,
  SportsWalking,
  Swimming,
}

impl WorkoutKind {
  /// Resolve a sensor wire code into a kind. Codes are case-sensitive.
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "RUN" => Some(WorkoutKind::Running),
      "WLK" => Some(WorkoutKind::SportsWalking),
      "SWM" => Some(WorkoutKind::Swimming),
      _ => None,
    }
  }

  pub fn code(&self) -> &'static str {
    match self {
      WorkoutKind::Running => "RUN",
      WorkoutKind::SportsWalking => "WLK",
      WorkoutKind::Swimming => "SWM",
    }
  }

  /// Label shown in the rendered summary line.
  pub fn label(&self) -> &'static str {
    match self {
      WorkoutKind::Running => "Running",
      WorkoutKind::SportsWalking => "SportsWalking",
      WorkoutKind::Swimming => "Swimming",
    }
  }

  /// Distance covered by one step or stroke, in meters.
  pub fn unit_length_m(&self) -> f64 {
    match self {
      WorkoutKind::Running | WorkoutKind::SportsWalking => metrics::STEP_LENGTH_M,
      WorkoutKind::Swimming => metrics::STROKE_LENGTH_M,
    }
  }

  /// Number of sensor fields the dispatcher expects for this variant.
  pub fn field_count(&self) -> usize {
    match self {
      WorkoutKind::Running => 3,
      WorkoutKind::SportsWalking => 4,
      WorkoutKind::Swimming => 5,
    }
  }
}

impl fmt::Display for WorkoutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// ---------------------------------------------------------------------------
/// Variant records
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
  /// Step count.
  pub action: u32,
  pub duration_hours: f64,
  pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
  /// Step count.
  pub action: u32,
  pub duration_hours: f64,
  pub weight_kg: f64,
  /// Athlete height, stored normalized to meters.
  pub height_m: f64,
}

impl SportsWalking {
  /// Build from the raw sensor height in centimeters.
  ///
  /// The cm to m conversion happens here, once. The stored record only ever
  /// holds meters, so repeated calorie calls cannot re-convert.
  pub fn from_sensor(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
    Self {
      action,
      duration_hours,
      weight_kg,
      height_m: height_cm / metrics::CM_IN_M,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
  /// Stroke count.
  pub action: u32,
  pub duration_hours: f64,
  pub weight_kg: f64,
  pub pool_length_m: f64,
  pub pool_lengths: f64,
}

/// ---------------------------------------------------------------------------
/// Workout record
/// ---------------------------------------------------------------------------

/// A completed workout, tagged by variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
  Running(Running),
  SportsWalking(SportsWalking),
  Swimming(Swimming),
}

impl Workout {
  pub fn kind(&self) -> WorkoutKind {
    match self {
      Workout::Running(_) => WorkoutKind::Running,
      Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
      Workout::Swimming(_) => WorkoutKind::Swimming,
    }
  }

  /// Step or stroke count.
  pub fn action(&self) -> u32 {
    match self {
      Workout::Running(r) => r.action,
      Workout::SportsWalking(w) => w.action,
      Workout::Swimming(s) => s.action,
    }
  }

  pub fn duration_hours(&self) -> f64 {
    match self {
      Workout::Running(r) => r.duration_hours,
      Workout::SportsWalking(w) => w.duration_hours,
      Workout::Swimming(s) => s.duration_hours,
    }
  }

  pub fn weight_kg(&self) -> f64 {
    match self {
      Workout::Running(r) => r.weight_kg,
      Workout::SportsWalking(w) => w.weight_kg,
      Workout::Swimming(s) => s.weight_kg,
    }
  }

  /// Distance covered, in km.
  pub fn distance_km(&self) -> f64 {
    metrics::distance_km(self.action(), self.kind().unit_length_m())
  }

  /// Mean speed, in km/h. Swimming computes from pool geometry instead of
  /// stroke count.
  pub fn mean_speed_kmh(&self) -> f64 {
    match self {
      Workout::Swimming(s) => {
        metrics::swimming_mean_speed_kmh(s.pool_length_m, s.pool_lengths, s.duration_hours)
      }
      _ => metrics::mean_speed_kmh(self.distance_km(), self.duration_hours()),
    }
  }

  /// Calories burned, per the variant's formula.
  pub fn calories_kcal(&self) -> f64 {
    match self {
      Workout::Running(r) => {
        metrics::running_calories_kcal(self.mean_speed_kmh(), r.weight_kg, r.duration_hours)
      }
      Workout::SportsWalking(w) => metrics::walking_calories_kcal(
        self.mean_speed_kmh(),
        w.weight_kg,
        w.height_m,
        w.duration_hours,
      ),
      Workout::Swimming(s) => {
        metrics::swimming_calories_kcal(self.mean_speed_kmh(), s.weight_kg, s.duration_hours)
      }
    }
  }

  /// Package the label and derived metrics for display.
  pub fn summary(&self) -> WorkoutSummary {
    WorkoutSummary {
      label: self.kind().label().to_string(),
      duration_hours: self.duration_hours(),
      distance_km: self.distance_km(),
      mean_speed_kmh: self.mean_speed_kmh(),
      calories_kcal: self.calories_kcal(),
    }
  }
}
