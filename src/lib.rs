// Artist Marketplace - Core Library
// In-memory data layer for browsing artists, onboarding applications,
// quote requests and the manager dashboard. Used by the console binary,
// the optional API server, and tests.

pub mod error;
pub mod entities;
pub mod catalog;
pub mod store;
pub mod query;
pub mod stats;
pub mod onboarding;
pub mod quotes;
pub mod marketplace;
pub mod logging;

// Re-export commonly used types
pub use error::{FieldError, MarketplaceError, Result};
pub use entities::{
    Artist, Discipline,
    Submission, SubmissionInput,
    QuoteRequest, QuoteRequestInput,
};
pub use catalog::ArtistCatalog;
pub use store::SubmissionStore;
pub use query::{
    query, search,
    FilterOptions, FilterSpec, PriceBand, PriceBandOption, QueryParams, QueryResult, SortKey,
};
pub use stats::DashboardStats;
pub use onboarding::OnboardingForm;
pub use quotes::QuoteBook;
pub use marketplace::Marketplace;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
