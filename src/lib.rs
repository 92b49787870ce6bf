pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod models;

#[cfg(test)]
mod test_utils;

pub use dispatch::{demo_packages, load_packages, read_package, SensorPackage};
pub use error::TrackerError;
pub use models::summary::WorkoutSummary;
pub use models::workout::{Workout, WorkoutKind};
