use crate::types::WorkoutKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("too many arguments: got {0}, at most {max} accepted", max = crate::package::MAX_FIELDS)]
    TooManyArguments(usize),

    #[error("{kind} takes {expected} fields, got {got}")]
    WrongFieldCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("action count must be a non-negative whole number, got {0}")]
    InvalidActionCount(f64),

    #[error("{kind}: {field} must be nonzero")]
    ZeroDivisor {
        kind: WorkoutKind,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
