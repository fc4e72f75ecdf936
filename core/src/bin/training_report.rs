//! Skriver én meldingslinje per pakke.
//!
//! Bruk: `training-report [pakker.json]`. Uten argument kjøres de
//! innebygde pakkene.

use anyhow::Context;
use log::debug;

use training_core::{print_report, resolve_packages, run_report, Metrics, ReportConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1);
    let packages = resolve_packages(path.as_deref())
        .with_context(|| format!("kunne ikke lese pakker fra {}", path.as_deref().unwrap_or("-")))?;

    let metrics = Metrics::new()?;
    let messages = run_report(&packages, &ReportConfig::default(), &metrics)
        .context("rapporten feilet")?;
    print_report(&messages)?;

    debug!("metrics:\n{}", metrics.render()?);
    Ok(())
}
