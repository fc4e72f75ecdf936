// core/src/package.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TrainingError, TrainingResult};
use crate::training::{whole_count, Running, SportsWalking, Swimming, Workout};

/// Kode fra sensoren for treningstypen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swm,
    Wlk,
    Run,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [WorkoutType::Swm, WorkoutType::Wlk, WorkoutType::Run];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swm => "SWM",
            WorkoutType::Wlk => "WLK",
            WorkoutType::Run => "RUN",
        }
    }

    /// Antall posisjonelle målinger konstruktøren krever.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Run => 3,
            WorkoutType::Wlk => 4,
            WorkoutType::Swm => 5,
        }
    }

    /// Bygg økten fra målingene i fast rekkefølge:
    /// action, duration, weight[, height | , length_pool, count_pool].
    pub fn build(self, data: &[f64]) -> TrainingResult<Workout> {
        if data.len() != self.arity() {
            return Err(TrainingError::ArityMismatch {
                workout_type: self.code().to_string(),
                expected: self.arity(),
                got: data.len(),
            });
        }

        let action = whole_count("action", data[0])?;
        let (duration, weight) = (data[1], data[2]);

        let workout: Workout = match self {
            WorkoutType::Run => Running::new(action, duration, weight)?.into(),
            WorkoutType::Wlk => SportsWalking::new(action, duration, weight, data[3])?.into(),
            WorkoutType::Swm => {
                let count_pool = whole_count("count_pool", data[4])?;
                Swimming::new(action, duration, weight, data[3], count_pool)?.into()
            }
        };
        Ok(workout)
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutType::Swm),
            "WLK" => Ok(WorkoutType::Wlk),
            "RUN" => Ok(WorkoutType::Run),
            other => Err(TrainingError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Les en pakke fra sensoren og returner riktig økt.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrainingResult<Workout> {
    workout_type.parse::<WorkoutType>()?.build(data)
}

/// En pakke: kode + rå målinger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self { workout_type: workout_type.into(), data }
    }

    pub fn read(&self) -> TrainingResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// INPUT-REPR (untagged): PRØV OBJECT FØRST, SÅ LEGACY (PAR)
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PackageObject {
    #[serde(alias = "type", alias = "code")]
    workout_type: String,
    #[serde(alias = "readings")]
    data: Vec<f64>,
}

// Legacy-form: ["SWM", [720, 1, 80, 25, 40]]
#[derive(Debug, Deserialize)]
struct PackagePair(String, Vec<f64>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object(PackageObject),
    Pair(PackagePair),
}

impl<'de> Deserialize<'de> for Package {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match PackageIn::deserialize(deserializer)? {
            PackageIn::Object(o) => Package::new(o.workout_type, o.data),
            PackageIn::Pair(PackagePair(code, data)) => Package::new(code, data),
        })
    }
}
