//! Error types for groundatlas

use thiserror::Error;

/// Errors raised while declaring a planning language
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("duplicate declaration of symbol '{0}'")]
    DuplicateSymbol(String),

    #[error("duplicate parameter name '{0}' in binding")]
    DuplicateParameter(String),

    #[error("duplicate schema name '{0}'")]
    DuplicateSchema(String),

    #[error("unknown sort id {0}")]
    UnknownSort(u32),

    #[error("sort '{0}' is not an interval sort")]
    NotAnInterval(String),
}

/// Errors raised while classifying symbols or grounding schemas
///
/// All of these indicate defects in the upstream representation or in the
/// caller's contract; none are transient. Empty domains and zero-parameter
/// schemas are valid degenerate cases and never produce an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroundingError {
    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("reference to undeclared symbol (raw id {0})")]
    UndeclaredSymbol(u32),

    #[error("binding arity mismatch: {variables} variables, {values} values")]
    BindingArityMismatch { variables: usize, values: usize },

    #[error("classification left {0} reference(s) both fluent and static")]
    InconsistentClassification(usize),

    #[error("effect target in schema '{0}' is not classified fluent")]
    UnclassifiedReference(String),

    #[error("schema '{name}' would ground to {cardinality} instances, over the limit of {limit}")]
    InstanceLimitExceeded {
        name: String,
        cardinality: usize,
        limit: usize,
    },
}

/// Convenience alias for grounding results
pub type Result<T> = std::result::Result<T, GroundingError>;
