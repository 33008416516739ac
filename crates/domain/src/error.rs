//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StaffHubError`] via `#[from]` (or a manual `From` for boxed storage
//! errors).

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum StaffHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Adapter-specific failure, boxed so the domain stays free of IO crates.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An insert collided with an existing identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
