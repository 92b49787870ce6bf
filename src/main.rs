use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitness_log::{demo_packages, load_packages};

/// Summarize workout sensor readings.
///
/// Reads a batch of sensor packages, computes distance, mean speed and
/// calories per workout, and prints one summary line per package.
#[derive(Parser, Debug)]
#[command(name = "fitness-log", version, about)]
struct Cli {
  /// JSON file holding an array of sensor packages
  /// (falls back to the built-in demo batch when omitted)
  #[arg(short, long, value_name = "FILE")]
  input: Option<PathBuf>,
}

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let cli = Cli::parse();

  let packages = match &cli.input {
    Some(path) => match load_packages(path) {
      Ok(packages) => packages,
      Err(err) => {
        error!("failed to load {}: {}", path.display(), err);
        return ExitCode::FAILURE;
      }
    },
    None => demo_packages(),
  };

  let mut any_rejected = false;
  for package in &packages {
    match package.dispatch() {
      Ok(workout) => println!("{}", workout.summary()),
      Err(err) => {
        error!(code = %package.workout_type, "rejected sensor package: {}", err);
        any_rejected = true;
      }
    }
  }

  if any_rejected {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
