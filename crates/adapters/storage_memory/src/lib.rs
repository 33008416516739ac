//! # staffhub-adapter-storage-memory
//!
//! Process-local persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `staffhub-app::ports::storage`
//! - Keep records in insertion order behind a mutex so a repository can be
//!   shared between callers
//!
//! ## Dependency rule
//! Depends on `staffhub-app` (for port traits) and `staffhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod employee_repo;
pub mod error;

pub use employee_repo::MemoryEmployeeRepository;
pub use error::StorageError;
