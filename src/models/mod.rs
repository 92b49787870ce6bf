pub mod summary;
pub mod workout;

pub use summary::WorkoutSummary;
pub use workout::{Workout, WorkoutKind};
