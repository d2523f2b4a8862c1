pub mod cli;
pub mod error;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::WorkoutError;
pub use package::read_package;
pub use training::Training;
pub use types::{Running, SportsWalking, Swimming, TrainingReport, Workout, WorkoutKind};
