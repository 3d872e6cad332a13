//! Error types for the generation engine

use thiserror::Error;

/// Result type alias for engine operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// How far a failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// One schema entity cannot be generated.
    Entity,
    /// One discovered candidate (declaration or call site) cannot be generated.
    Candidate,
    /// The whole run cannot produce a consistent artifact set.
    Run,
}

/// Error type for resolution and synthesis
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Entity declares no key members
    #[error("entity `{entity}` has no keys")]
    NoKeys { entity: String },

    /// Entity declares no members at all
    #[error("entity `{entity}` has no members")]
    NoMembers { entity: String },

    /// Two members of one entity share a name
    #[error("entity `{entity}` declares member `{member}` more than once")]
    DuplicateMember { entity: String, member: String },

    /// A name cannot be used as a Rust identifier
    #[error("`{name}` is not a valid identifier (in {context})")]
    InvalidIdentifier { name: String, context: String },

    /// A type name does not parse as a Rust type or path
    #[error("`{type_name}` is not a valid type (in {context})")]
    InvalidType { type_name: String, context: String },

    /// A registration type argument is not a concrete named type
    #[error("invalid type argument `{argument}` in {origin}")]
    InvalidTypeArgument { argument: String, origin: String },

    /// A registration receiver does not resolve to anything in scope
    #[error("unresolvable receiver `{receiver}` in {origin}")]
    UnresolvableReceiver { receiver: String, origin: String },

    /// A marked declaration has no symbol in the host
    #[error("declaration `{name}` in {origin} could not be resolved")]
    UnresolvedDeclaration { name: String, origin: String },

    /// Two destinations with one display name mapped from one namespace
    #[error("`{dest}` conflicts with `{existing}` as mapping target `{display}` in `{namespace}`")]
    ConflictingMapping {
        namespace: String,
        display: String,
        dest: String,
        existing: String,
    },

    /// Two source namespaces flatten to one mapping module name
    #[error("namespace `{namespace}` and `{existing}` would share mapping module `{module}`")]
    ConflictingNamespace {
        namespace: String,
        existing: String,
        module: String,
    },

    /// Synthesized tokens are not a valid Rust file
    #[error("generated artifact `{artifact}` is not valid Rust: {message}")]
    Malformed { artifact: String, message: String },

    /// Two artifacts share one identifier
    #[error("artifact `{0}` was generated more than once")]
    DuplicateArtifact(String),

    /// Schema document could not be deserialized
    #[error("schema error: {0}")]
    Schema(#[from] serde_json::Error),

    /// Generator configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Returns a stable numeric code suitable for diagnostics
    pub fn code(&self) -> u32 {
        match self {
            GenerateError::NoKeys { .. } => 1,
            GenerateError::NoMembers { .. } => 2,
            GenerateError::DuplicateMember { .. } => 3,
            GenerateError::InvalidIdentifier { .. } => 4,
            GenerateError::InvalidType { .. } => 5,
            GenerateError::InvalidTypeArgument { .. } => 6,
            GenerateError::UnresolvableReceiver { .. } => 7,
            GenerateError::UnresolvedDeclaration { .. } => 8,
            GenerateError::ConflictingMapping { .. } => 9,
            GenerateError::Malformed { .. } => 10,
            GenerateError::DuplicateArtifact(_) => 11,
            GenerateError::Schema(_) => 12,
            GenerateError::Config(_) => 13,
            GenerateError::ConflictingNamespace { .. } => 14,
        }
    }

    /// Returns how far this failure reaches
    pub fn scope(&self) -> ErrorScope {
        match self {
            GenerateError::NoKeys { .. }
            | GenerateError::NoMembers { .. }
            | GenerateError::DuplicateMember { .. }
            | GenerateError::InvalidIdentifier { .. }
            | GenerateError::InvalidType { .. } => ErrorScope::Entity,
            GenerateError::InvalidTypeArgument { .. }
            | GenerateError::UnresolvableReceiver { .. }
            | GenerateError::UnresolvedDeclaration { .. }
            | GenerateError::ConflictingMapping { .. }
            | GenerateError::ConflictingNamespace { .. } => ErrorScope::Candidate,
            GenerateError::Malformed { .. }
            | GenerateError::DuplicateArtifact(_)
            | GenerateError::Schema(_)
            | GenerateError::Config(_) => ErrorScope::Run,
        }
    }
}
