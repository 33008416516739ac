//! # staffhub-domain
//!
//! Pure domain model for the staffhub employee directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Employees** (records keyed by their [`EmployeeId`](id::EmployeeId))
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod employee;
