/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The revision token supplied with a write is not the current one.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.serialization")]
    Serialization,
}
