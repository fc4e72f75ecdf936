use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::TrainingResult;

/// Tellere for rapportkjøringer. Egen registry per instans, så tester
/// ikke deler tilstand.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    summaries: IntCounterVec,
    rejected: IntCounterVec,
}

impl Metrics {
    pub fn new() -> TrainingResult<Self> {
        let registry = Registry::new();

        let summaries = IntCounterVec::new(
            Opts::new("training_summaries_total", "Beregnede treningsmeldinger"),
            &["workout_type"],
        )?;
        let rejected = IntCounterVec::new(
            Opts::new("training_packages_rejected_total", "Avviste pakker"),
            &["reason"],
        )?;

        registry.register(Box::new(summaries.clone()))?;
        registry.register(Box::new(rejected.clone()))?;

        Ok(Self { registry, summaries, rejected })
    }

    pub fn summaries_total(&self) -> &IntCounterVec {
        &self.summaries
    }

    pub fn rejected_total(&self) -> &IntCounterVec {
        &self.rejected
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> TrainingResult<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
