// ⚠️ Marketplace errors
// Every failure the data core can report, surfaced synchronously to the caller

use thiserror::Error;

/// Result type for marketplace operations
pub type Result<T> = std::result::Result<T, MarketplaceError>;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// A single problem with one field of a submitted record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Required field absent or blank
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// Field present but its value is not acceptable
    #[error("invalid `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

impl FieldError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::MissingField(field) => field,
            FieldError::Invalid { field, .. } => field,
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        FieldError::Invalid {
            field,
            message: message.into(),
        }
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// MARKETPLACE ERROR
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketplaceError {
    /// Submission rejected at append time (one entry per problem)
    #[error("invalid submission: {}", join(.0))]
    InvalidSubmission(Vec<FieldError>),

    /// Unrecognized sort key or price band token
    #[error("invalid filter spec: unrecognized {kind} `{token}`")]
    InvalidFilterSpec { kind: &'static str, token: String },

    /// Quote request rejected (one entry per problem)
    #[error("invalid quote request: {}", join(.0))]
    InvalidQuoteRequest(Vec<FieldError>),

    /// Referenced artist is not in the catalog
    #[error("artist not found: {0}")]
    UnknownArtist(String),

    /// Catalog seed data violates a catalog invariant
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl MarketplaceError {
    /// Field-level problems carried by a rejected submission or quote request
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            MarketplaceError::InvalidSubmission(errors)
            | MarketplaceError::InvalidQuoteRequest(errors) => errors,
            _ => &[],
        }
    }

    /// True if the caller sent something malformed (as opposed to a missing resource)
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, MarketplaceError::UnknownArtist(_))
    }
}
