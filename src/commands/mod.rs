//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the experiments directory.

pub mod browse;
pub mod config;
pub mod new;
pub mod stats;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use new::execute as new;
pub use stats::execute as stats;
