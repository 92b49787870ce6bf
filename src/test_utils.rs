//! Test utilities: mock sensor packages and float assertions

use crate::dispatch::SensorPackage;

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Demo swimming package: 720 strokes, 1 h, 80 kg, 25 m pool, 40 lengths.
pub fn mock_swim_package() -> SensorPackage {
  SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
}

/// Demo running package: 15000 steps, 1 h, 75 kg.
pub fn mock_run_package() -> SensorPackage {
  SensorPackage::new("RUN", &[15000.0, 1.0, 75.0])
}

/// Demo walking package: 9000 steps, 1 h, 75 kg, 180 cm.
pub fn mock_walk_package() -> SensorPackage {
  SensorPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0])
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {{
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  }};
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_packages_dispatch_cleanly() {
    mock_swim_package().dispatch().unwrap();
    mock_run_package().dispatch().unwrap();
    mock_walk_package().dispatch().unwrap();
  }
}
