// 🏪 Marketplace - the one explicitly owned context for a session
//
// Created at program start and handed to whoever needs it (console, HTTP
// handlers). Owns the catalog, the submission store and the quote book.

use crate::catalog::ArtistCatalog;
use crate::entities::{Artist, QuoteRequest, QuoteRequestInput, Submission, SubmissionInput};
use crate::error::Result;
use crate::onboarding::OnboardingForm;
use crate::query::{self, FilterOptions, FilterSpec, QueryResult};
use crate::quotes::QuoteBook;
use crate::stats::DashboardStats;
use crate::store::SubmissionStore;
use chrono::{DateTime, TimeZone};

pub struct Marketplace {
    catalog: ArtistCatalog,
    submissions: SubmissionStore,
    quotes: QuoteBook,
}

impl Marketplace {
    pub fn new(catalog: ArtistCatalog) -> Self {
        tracing::debug!(artists = catalog.len(), "marketplace session started");
        Marketplace {
            catalog,
            submissions: SubmissionStore::new(),
            quotes: QuoteBook::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ArtistCatalog::with_defaults())
    }

    pub fn catalog(&self) -> &ArtistCatalog {
        &self.catalog
    }

    pub fn artists(&self) -> &[Artist] {
        self.catalog.list()
    }

    pub fn artist(&self, id: &str) -> Option<&Artist> {
        self.catalog.find_by_id(id)
    }

    /// Listing page query
    pub fn search(&self, spec: &FilterSpec) -> QueryResult {
        query::search(self.catalog.list(), spec)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_catalog(self.catalog.list())
    }

    pub fn submit(&mut self, input: SubmissionInput) -> Result<Submission> {
        self.submissions.append(input)
    }

    /// Run the onboarding form rules, then append
    pub fn submit_onboarding(&mut self, form: &OnboardingForm) -> Result<Submission> {
        let input = form.validate()?;
        self.submissions.append(input)
    }

    pub fn submissions(&self) -> &[Submission] {
        self.submissions.list()
    }

    pub fn request_quote(&mut self, input: QuoteRequestInput) -> Result<QuoteRequest> {
        self.quotes.request(&self.catalog, input)
    }

    pub fn quotes(&self) -> &QuoteBook {
        &self.quotes
    }

    pub fn dashboard_stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DashboardStats {
        DashboardStats::compute(self.catalog.list(), self.submissions.list(), now)
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketplaceError;
    use crate::query::{PriceBand, SortKey};
    use chrono::{NaiveDate, Utc};

    fn onboarding_form() -> OnboardingForm {
        OnboardingForm {
            name: "Leo Martins".to_string(),
            email: "leo@example.com".to_string(),
            location: "Austin, TX".to_string(),
            price: Some(300.0),
            description: "Acoustic covers".to_string(),
            experience: "3-5 years".to_string(),
            categories: vec!["Singers".to_string()],
            languages: vec!["Portuguese".to_string()],
        }
    }

    #[test]
    fn test_onboarding_flows_to_dashboard() {
        let mut market = Marketplace::with_defaults();

        let created = market.submit_onboarding(&onboarding_form()).unwrap();
        let stats = market.dashboard_stats(&Utc::now());

        assert_eq!(market.submissions().last(), Some(&created));
        assert_eq!(stats.total_submissions, 1);
        assert_eq!(stats.submissions_this_month, 1);
        assert_eq!(stats.total_artists, 6);
        assert_eq!(stats.average_price, 733);
    }

    #[test]
    fn test_submissions_never_join_the_catalog() {
        let mut market = Marketplace::with_defaults();
        market.submit_onboarding(&onboarding_form()).unwrap();

        assert_eq!(market.artists().len(), 6);
        let result = market.search(&FilterSpec::new().with_text("Leo"));
        assert_eq!(result.shown(), 0);
    }

    #[test]
    fn test_rejected_onboarding_leaves_store_untouched() {
        let mut market = Marketplace::with_defaults();
        let mut form = onboarding_form();
        form.languages.clear();

        let err = market.submit_onboarding(&form).unwrap_err();

        assert!(matches!(err, MarketplaceError::InvalidSubmission(_)));
        assert!(market.submissions().is_empty());
    }

    #[test]
    fn test_search_and_options() {
        let market = Marketplace::with_defaults();
        let spec = FilterSpec::new()
            .with_category("DJs")
            .with_price_band(PriceBand::High)
            .sorted_by(SortKey::Price);

        let result = market.search(&spec);
        let names: Vec<&str> = result.artists.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["DJ Mike", "DJ Luna"]);
        assert_eq!(result.total, 6);
        assert_eq!(market.filter_options().categories.len(), 4);
    }

    #[test]
    fn test_request_quote() {
        let mut market = Marketplace::with_defaults();
        let input = QuoteRequestInput {
            artist_id: "6".to_string(),
            full_name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            event_type: "Festival".to_string(),
            event_date: NaiveDate::from_ymd_opt(2027, 7, 4),
            event_location: "Las Vegas, NV".to_string(),
            performance_duration: "Full day (8+ hours)".to_string(),
            budget_range: "$5,000 - $10,000".to_string(),
            ..QuoteRequestInput::default()
        };

        market.request_quote(input).unwrap();

        assert_eq!(market.quotes().for_artist("6").len(), 1);
        assert_eq!(market.artist("6").map(|a| a.name.as_str()), Some("DJ Luna"));
    }
}
