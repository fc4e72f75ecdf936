pub mod error;
pub mod message;
pub mod metrics;
pub mod package;
pub mod report;
pub mod storage;
pub mod training;

#[cfg(feature = "python")]
mod py;

pub use error::{TrainingError, TrainingResult};
pub use message::{InfoMessage, RoundTo};
pub use metrics::Metrics;
pub use package::{read_package, Package, WorkoutType};
pub use report::{
    print_report, process_package, render_report, resolve_packages, run_report,
    summarize_packages_json,
    DEFAULT_PACKAGES,
};
pub use storage::{load_config, load_packages, parse_packages, save_config, ReportConfig};
pub use training::{Base, Running, SportsWalking, Swimming, Training, Workout};
