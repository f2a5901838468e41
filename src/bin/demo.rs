//! Spindle demo binary.
//!
//! Runs the headless selector script with logging enabled.

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting spindle demo");

    spindle::demo::run()
}
