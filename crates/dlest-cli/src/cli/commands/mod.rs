//! CLI command handlers, one per file.

mod completions;
mod estimate;
mod extract;
mod probe;

pub use completions::run_completions;
pub use estimate::{run_estimate, EstimateArgs};
pub use extract::run_extract;
pub use probe::run_probe;
