pub mod discover;
pub mod error;
pub mod layout;
pub mod parse;
pub mod record;

pub use discover::ResultsDir;
pub use error::LogError;
pub use layout::{FieldSpec, LayoutVersion, LogLayout, comparison_layout, scaling_layout};
pub use parse::parse_log;
pub use record::{Metric, Phase, RunRecord};
