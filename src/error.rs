use thiserror::Error;

use crate::models::workout::WorkoutKind;

/// Errors surfaced while reading and dispatching sensor packages.
///
/// There is no recovery path for any of these: a rejected package produces
/// no workout record and the error goes straight back to the caller.
#[derive(Debug, Error)]
pub enum TrackerError {
  #[error("unknown workout type: {code}")]
  UnknownWorkoutType { code: String },

  #[error("{kind} expects {expected} sensor fields, got {got}")]
  WrongFieldCount {
    kind: WorkoutKind,
    expected: usize,
    got: usize,
  },

  #[error("duration must be positive, got {value} h")]
  NonPositiveDuration { value: f64 },

  #[error("action count must be a non-negative integer, got {value}")]
  InvalidAction { value: f64 },

  #[error("failed to read input file: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse input file: {0}")]
  Parse(#[from] serde_json::Error),
}
