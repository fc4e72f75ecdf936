// core/src/message.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Antall desimaler i meldingen og i avrundet JSON-utdata.
pub const MESSAGE_DECIMALS: u32 = 3;

// --- RoundTo trait (offentlig, brukt av report/py) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Informasjonsmelding om en gjennomført treningsøkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // timer
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Meldingslinjen, alle tall med tre desimaler.
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// Kopi med tallene avrundet til `MESSAGE_DECIMALS` (for JSON til klienter).
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: self.duration.round_to(MESSAGE_DECIMALS),
            distance: self.distance.round_to(MESSAGE_DECIMALS),
            speed: self.speed.round_to(MESSAGE_DECIMALS),
            calories: self.calories.round_to(MESSAGE_DECIMALS),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
