use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{TrainingError, TrainingResult};
use crate::package::Package;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Stopp hele kjøringen på første ugyldige pakke.
    #[serde(default = "default_stop_on_error")]
    pub stop_on_error: bool,
    /// Fil med pakker (JSON). None => innebygde pakker.
    #[serde(default)]
    pub packages_path: Option<String>,
}

fn default_stop_on_error() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stop_on_error: default_stop_on_error(),
            packages_path: None,
        }
    }
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_config(path: impl AsRef<Path>) -> TrainingResult<ReportConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&contents)?;
        info!(
            "config lastet fra {} (stop_on_error={})",
            path.display(),
            config.stop_on_error
        );
        Ok(config)
    } else {
        warn!("fant ikke config på {}, bruker default", path.display());
        Ok(ReportConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(config: &ReportConfig, path: impl AsRef<Path>) -> TrainingResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path.as_ref(), json)?;
    info!("config lagret til {}", path.as_ref().display());
    Ok(())
}

/// Parse en JSON-liste med pakker. Feil peker på elementet (f.eks. `[1].data[2]`).
pub fn parse_packages(json_in: &str) -> TrainingResult<Vec<Package>> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let packages: Vec<Package> = spte::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        TrainingError::Parse(format!("{}: {}", path, e.into_inner()))
    })?;
    // Ingenting annet enn whitespace etter listen
    de.end().map_err(TrainingError::Json)?;
    Ok(packages)
}

pub fn load_packages(path: impl AsRef<Path>) -> TrainingResult<Vec<Package>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let packages = parse_packages(&contents)?;
    info!("{} pakker lest fra {}", packages.len(), path.as_ref().display());
    Ok(packages)
}
