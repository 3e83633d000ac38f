use std::collections::BTreeMap;

/// The closed set of domain-level failures a service can produce.
///
/// Each variant carries the human-readable message that ends up in the
/// error envelope; the HTTP layer owns the mapping to status codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Request payload failed per-field validation. The map is keyed by
    /// field name and surfaced as `validationErrors` in the envelope.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    /// A computer lookup was scoped to a maker only, and that maker has
    /// at least one record.
    #[error("{0}")]
    ModelRequired(String),

    #[error("{0}")]
    MakerNotFound(String),

    #[error("{0}")]
    ComputerNotFound(String),

    /// A computer with the same (maker, model) already exists.
    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    KeyNotFound(String),

    /// The public key content does not fit its declared type.
    #[error("{0}")]
    InvalidSshKey(String),

    /// The same public key is already registered for the server.
    #[error("{0}")]
    KeyAlreadyExists(String),

    #[error("{0}")]
    Internal(String),
}
