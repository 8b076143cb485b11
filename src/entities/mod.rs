// Entity Models
//
// Plain records shared by the catalog, the submission store and the quote book.
// Artists are read-only for the whole session; submissions and quote requests
// are append-only and never change once created.

pub mod artist;
pub mod discipline;
pub mod quote_request;
pub mod submission;

pub use artist::Artist;
pub use discipline::Discipline;
pub use quote_request::{QuoteRequest, QuoteRequestInput};
pub use submission::{Submission, SubmissionInput};

/// True when an optional text field carries something other than whitespace
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose email shape check: non-whitespace, `@`, non-whitespace
pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace)
}
