// core/src/training.rs
use serde::Serialize;

use crate::error::{TrainingError, TrainingResult};
use crate::message::InfoMessage;

pub const LEN_STEP: f64 = 0.65; // skrittlengde (m)
pub const SWIM_LEN_STEP: f64 = 1.38; // lengde per svømmetak (m)
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

// Løping
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Sportsgange
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Svømming
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

fn require_positive(field: &'static str, value: f64) -> TrainingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput { field, value })
    }
}

fn require_nonneg(field: &'static str, value: f64) -> TrainingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput { field, value })
    }
}

/// Heltall fra en posisjonell måling (f.eks. 720.0 → 720).
pub(crate) fn whole_count(field: &'static str, value: f64) -> TrainingResult<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(TrainingError::InvalidInput { field, value })
    }
}

/// Flyttalls-floordivisjon med samme resultat som Pythons `a // b`.
///
/// Kvotienten regnes fra `a - fmod(a, b)`, ikke fra `(a / b).floor()`;
/// de to skiller seg når `a / b` rundes opp til et heltall (1.0 // 0.1 == 9.0).
pub fn py_floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    // Rest med annet fortegn enn divisor: ett steg ned
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }
    if div != 0.0 {
        let f = div.floor();
        if div - f > 0.5 { f + 1.0 } else { f }
    } else {
        0.0_f64.copysign(a / b)
    }
}

/// Felles inndata for alle økter: antall skritt/tak, varighet (t) og vekt (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Base {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

impl Base {
    pub fn new(action: u64, duration: f64, weight: f64) -> TrainingResult<Self> {
        Ok(Self {
            action,
            duration: require_positive("duration", duration)?,
            weight: require_nonneg("weight", weight)?,
        })
    }

    /// Distanse i km for gitt lengde per enhet (m).
    #[inline]
    pub fn distance(&self, len_step: f64) -> f64 {
        self.action as f64 * len_step / M_IN_KM
    }

    #[inline]
    pub fn minutes(&self) -> f64 {
        self.duration * MIN_IN_HOUR
    }
}

/// Felles grensesnitt for en treningsøkt.
///
/// `distance` og `mean_speed` har standardimplementasjoner basert på
/// skritt; `spent_calories` må hver variant levere selv.
pub trait Training {
    fn base(&self) -> &Base;

    /// Navnet som vises i meldingen.
    fn training_type(&self) -> &'static str;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn distance(&self) -> f64 {
        self.base().distance(self.len_step())
    }

    /// Snittfart i km/t.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Forbrukte kilokalorier.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Løping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    pub base: Base,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> TrainingResult<Self> {
        Ok(Self { base: Base::new(action, duration, weight)? })
    }
}

impl Training for Running {
    fn base(&self) -> &Base {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * self.base.weight / M_IN_KM
            * self.base.minutes()
    }
}

/// Sportsgange. Høyde i cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    pub base: Base,
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> TrainingResult<Self> {
        Ok(Self {
            base: Base::new(action, duration, weight)?,
            height: require_positive("height", height)?,
        })
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &Base {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        // Floordivisjon av fart² på høyde – skal beholdes slik.
        let speed_term = py_floor_div(self.mean_speed().powi(2), self.height);
        (WALK_WEIGHT_MULTIPLIER * self.base.weight
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * self.base.weight)
            * self.base.minutes()
    }
}

/// Svømming. Bassenglengde i meter, antall lengder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    pub base: Base,
    pub length_pool: f64,
    pub count_pool: u64,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> TrainingResult<Self> {
        Ok(Self {
            base: Base::new(action, duration, weight)?,
            length_pool: require_nonneg("length_pool", length_pool)?,
            count_pool,
        })
    }
}

impl Training for Swimming {
    fn base(&self) -> &Base {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STEP
    }

    /// Farten regnes fra bassenglengder, ikke fra antall tak.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.base.weight
    }
}

/// En konkret økt av en av de tre typene (statisk dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &Base {
        self.inner().base()
    }

    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_count_rejects_fractions_and_negatives() {
        assert_eq!(whole_count("action", 720.0).unwrap(), 720);
        assert!(whole_count("action", 720.5).is_err());
        assert!(whole_count("action", -1.0).is_err());
        assert!(whole_count("action", f64::NAN).is_err());
        assert!(whole_count("action", 2f64.powi(64)).is_err());
    }

    #[test]
    fn py_floor_div_follows_fmod_quotient() {
        assert_eq!(py_floor_div(1.0, 0.1), 9.0);
        assert_eq!(py_floor_div(4.0, 3.0), 1.0);
        assert_eq!(py_floor_div(34.2225, 180.0), 0.0);
        assert_eq!(py_floor_div(-7.0, 2.0), -4.0);
        assert_eq!(py_floor_div(7.0, -2.0), -4.0);
    }

    #[test]
    fn base_rejects_zero_duration() {
        let err = Base::new(100, 0.0, 70.0).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidInput { field: "duration", .. }));
    }
}
