//! Sensor package dispatch
//!
//! Maps a workout-type code plus a flat numeric field sequence onto the
//! matching workout record. Field order is positional: action, duration in
//! hours, weight in kg, then the variant extras (height in cm for WLK;
//! pool length in m and pool length count for SWM).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::TrackerError;
use crate::models::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// One raw reading from the sensor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
  pub workout_type: String,
  pub fields: Vec<f64>,
}

impl SensorPackage {
  pub fn new(workout_type: &str, fields: &[f64]) -> Self {
    Self {
      workout_type: workout_type.to_string(),
      fields: fields.to_vec(),
    }
  }

  /// Construct the workout record this package describes.
  pub fn dispatch(&self) -> Result<Workout, TrackerError> {
    read_package(&self.workout_type, &self.fields)
  }
}

/// Construct a workout record from a wire code and its sensor fields.
///
/// Rejects unknown codes, field counts that do not match the variant, a
/// non-positive duration and a negative or fractional action count. A
/// rejected package produces no record.
pub fn read_package(workout_type: &str, fields: &[f64]) -> Result<Workout, TrackerError> {
  let kind = WorkoutKind::from_code(workout_type).ok_or_else(|| {
    TrackerError::UnknownWorkoutType {
      code: workout_type.to_string(),
    }
  })?;

  let expected = kind.field_count();
  if fields.len() != expected {
    return Err(TrackerError::WrongFieldCount {
      kind,
      expected,
      got: fields.len(),
    });
  }

  let action = parse_action(fields[0])?;
  let duration_hours = parse_duration(fields[1])?;
  let weight_kg = fields[2];

  debug!(
    code = workout_type,
    action, duration_hours, weight_kg, "dispatching sensor package"
  );

  let workout = match kind {
    WorkoutKind::Running => Workout::Running(Running {
      action,
      duration_hours,
      weight_kg,
    }),
    WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::from_sensor(
      action,
      duration_hours,
      weight_kg,
      fields[3],
    )),
    WorkoutKind::Swimming => Workout::Swimming(Swimming {
      action,
      duration_hours,
      weight_kg,
      pool_length_m: fields[3],
      pool_lengths: fields[4],
    }),
  };

  Ok(workout)
}

/// Action arrives over the wire as a float but is a unit-of-motion count.
fn parse_action(value: f64) -> Result<u32, TrackerError> {
  if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
    return Err(TrackerError::InvalidAction { value });
  }
  Ok(value as u32)
}

/// Duration is the divisor in every speed calculation; zero or negative
/// values are rejected here so the formulas never see them.
fn parse_duration(value: f64) -> Result<f64, TrackerError> {
  if !value.is_finite() || value <= 0.0 {
    return Err(TrackerError::NonPositiveDuration { value });
  }
  Ok(value)
}

/// Read a batch of sensor packages from a JSON array file.
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>, TrackerError> {
  let raw = fs::read_to_string(path)?;
  let packages = serde_json::from_str(&raw)?;
  Ok(packages)
}

/// The fixed demo batch, used when no input file is given.
pub fn demo_packages() -> Vec<SensorPackage> {
  vec![
    SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    SensorPackage::new("RUN", &[15000.0, 1.0, 75.0]),
    SensorPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_dispatch_builds_each_variant() {
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(run.kind(), WorkoutKind::Running);
    assert_eq!(run.action(), 15000);

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(walk.kind(), WorkoutKind::SportsWalking);
    match &walk {
      Workout::SportsWalking(w) => crate::assert_approx_eq!(w.height_m, 1.8, 1e-12),
      other => panic!("expected walking record, got {:?}", other),
    }

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(swim.kind(), WorkoutKind::Swimming);
    match &swim {
      Workout::Swimming(s) => {
        crate::assert_approx_eq!(s.pool_length_m, 25.0, 1e-12);
        crate::assert_approx_eq!(s.pool_lengths, 40.0, 1e-12);
      }
      other => panic!("expected swimming record, got {:?}", other),
    }
  }

  #[test]
  fn test_unknown_workout_type_is_rejected() {
    let err = read_package("XYZ", &[720.0, 1.0, 80.0]).unwrap_err();
    assert!(matches!(err, TrackerError::UnknownWorkoutType { ref code } if code == "XYZ"));
  }

  #[test]
  fn test_wrong_field_count_is_rejected() {
    // Too few
    let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
    assert!(matches!(
      err,
      TrackerError::WrongFieldCount {
        expected: 3,
        got: 2,
        ..
      }
    ));

    // Too many
    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 5.0]).unwrap_err();
    assert!(matches!(
      err,
      TrackerError::WrongFieldCount {
        expected: 4,
        got: 5,
        ..
      }
    ));
  }

  #[test]
  fn test_non_positive_duration_is_rejected() {
    let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrackerError::NonPositiveDuration { .. }));

    let err = read_package("RUN", &[15000.0, -1.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrackerError::NonPositiveDuration { .. }));

    let err = read_package("RUN", &[15000.0, f64::NAN, 75.0]).unwrap_err();
    assert!(matches!(err, TrackerError::NonPositiveDuration { .. }));
  }

  #[test]
  fn test_invalid_action_is_rejected() {
    let err = read_package("RUN", &[-5.0, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidAction { .. }));

    let err = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidAction { .. }));
  }

  #[test]
  fn test_demo_batch_dispatches_cleanly() {
    for package in demo_packages() {
      package.dispatch().unwrap();
    }
  }

  #[test]
  fn test_load_packages_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
      file,
      r#"[
        {{"workout_type": "SWM", "fields": [720, 1, 80, 25, 40]}},
        {{"workout_type": "RUN", "fields": [15000, 1, 75]}}
      ]"#
    )
    .unwrap();

    let packages = load_packages(file.path()).unwrap();
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0], SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]));
    assert_eq!(packages[1].workout_type, "RUN");
  }

  #[test]
  fn test_load_packages_missing_file() {
    let err = load_packages(Path::new("/nonexistent/packages.json")).unwrap_err();
    assert!(matches!(err, TrackerError::Io(_)));
  }

  #[test]
  fn test_load_packages_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = load_packages(file.path()).unwrap_err();
    assert!(matches!(err, TrackerError::Parse(_)));
  }
}
