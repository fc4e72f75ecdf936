use std::io::{self, Write};

use log::{debug, info, warn};
use once_cell::sync::Lazy;

use crate::error::TrainingResult;
use crate::message::InfoMessage;
use crate::metrics::Metrics;
use crate::package::Package;
use crate::storage::ReportConfig;
use crate::training::Training;

/// Innebygde pakker som kjøres når ingen fil er oppgitt.
pub static DEFAULT_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// Én pakke → én melding. Teller resultatet i `metrics`.
pub fn process_package(package: &Package, metrics: &Metrics) -> TrainingResult<InfoMessage> {
    match package.read() {
        Ok(workout) => {
            let info = workout.show_training_info();
            metrics
                .summaries_total()
                .with_label_values(&[info.training_type.as_str()])
                .inc();
            debug!("{} -> {:?}", package.workout_type, info);
            Ok(info)
        }
        Err(e) => {
            metrics.rejected_total().with_label_values(&[e.reason()]).inc();
            Err(e)
        }
    }
}

/// Kjør alle pakker i rekkefølge.
///
/// Med `stop_on_error` returneres første feil; ellers logges feilen og
/// pakken hoppes over.
pub fn run_report(
    packages: &[Package],
    config: &ReportConfig,
    metrics: &Metrics,
) -> TrainingResult<Vec<InfoMessage>> {
    let mut out = Vec::with_capacity(packages.len());
    for (i, package) in packages.iter().enumerate() {
        match process_package(package, metrics) {
            Ok(info) => out.push(info),
            Err(e) if config.stop_on_error => return Err(e),
            Err(e) => warn!("pakke #{} ({}) hoppet over: {}", i, package.workout_type, e),
        }
    }
    Ok(out)
}

pub fn render_report(messages: &[InfoMessage]) -> String {
    messages
        .iter()
        .map(|m| m.get_message() + "\n")
        .collect()
}

pub fn print_report(messages: &[InfoMessage]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_report(messages).as_bytes())?;
    stdout.flush()
}

/// JSON inn (liste med pakker) → JSON ut (liste med avrundede meldinger).
/// Feiler på første ugyldige pakke.
pub fn summarize_packages_json(json_in: &str, metrics: &Metrics) -> TrainingResult<String> {
    let packages = crate::storage::parse_packages(json_in)?;
    let messages = run_report(&packages, &ReportConfig::default(), metrics)?;
    let rounded: Vec<InfoMessage> = messages.iter().map(InfoMessage::rounded).collect();
    Ok(serde_json::to_string(&rounded)?)
}

/// Pakkene for en kjøring: fil fra kalleren hvis oppgitt, ellers de innebygde.
pub fn resolve_packages(path: Option<&str>) -> TrainingResult<Vec<Package>> {
    match path {
        Some(p) => crate::storage::load_packages(p),
        None => {
            info!("ingen pakkefil oppgitt, bruker innebygde pakker");
            Ok(DEFAULT_PACKAGES.clone())
        }
    }
}
