//! # staffhub — employee directory demo
//!
//! Composition root that wires the storage adapter into the employee service
//! and runs the demo scenario once.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber (stderr, so stdout carries only listings)
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Run the scenario and exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod scenario;

use std::io::Write;

use staffhub_adapter_storage_memory::MemoryEmployeeRepository;
use staffhub_app::services::employee_service::EmployeeService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    // Storage
    let employee_repo = MemoryEmployeeRepository::new();

    // Services
    let employee_service = EmployeeService::new(employee_repo);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scenario::run(&employee_service, &mut out).await?;
    out.flush()?;

    tracing::info!("scenario complete");
    Ok(())
}
