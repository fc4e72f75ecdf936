use thiserror::Error;

/// Feil fra kjernen: ukjent kode, feil antall målinger, ugyldige tall og I/O.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("workout type {workout_type} expects {expected} readings, got {got}")]
    ArityMismatch {
        workout_type: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("parse error at {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl TrainingError {
    /// Kort, stabil årsak brukt som label i metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            TrainingError::UnknownWorkoutType(_) => "unknown_workout_type",
            TrainingError::ArityMismatch { .. } => "arity_mismatch",
            TrainingError::InvalidInput { .. } => "invalid_input",
            TrainingError::Parse(_) => "parse",
            TrainingError::Io(_) => "io",
            TrainingError::Json(_) => "json",
            TrainingError::Metrics(_) => "metrics",
        }
    }
}

pub type TrainingResult<T> = Result<T, TrainingError>;
