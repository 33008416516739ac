//! # staffhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EmployeeRepository` — CRUD for employee records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EmployeeService` — add, list, get, update, remove
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `staffhub-domain` only (plus `tracing` for spans).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
