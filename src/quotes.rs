// 💬 Quote Book - append-only record of quote requests sent to artists

use crate::catalog::ArtistCatalog;
use crate::entities::{QuoteRequest, QuoteRequestInput};
use crate::error::{FieldError, MarketplaceError, Result};
use chrono::Utc;

#[derive(Debug, Default)]
pub struct QuoteBook {
    requests: Vec<QuoteRequest>,
}

impl QuoteBook {
    pub fn new() -> Self {
        QuoteBook {
            requests: Vec::new(),
        }
    }

    /// Validate against the form rules and the catalog, then append
    pub fn request(
        &mut self,
        catalog: &ArtistCatalog,
        input: QuoteRequestInput,
    ) -> Result<QuoteRequest> {
        let Some(artist) = catalog.find_by_id(&input.artist_id) else {
            return Err(MarketplaceError::UnknownArtist(input.artist_id));
        };
        let artist_name = artist.name.clone();

        let errors = input.validate();
        if !errors.is_empty() {
            return Err(MarketplaceError::InvalidQuoteRequest(errors));
        }

        let request = QuoteRequest::from_input(input, Utc::now()).ok_or_else(|| {
            MarketplaceError::InvalidQuoteRequest(vec![FieldError::MissingField("eventDate")])
        })?;
        self.requests.push(request.clone());

        tracing::info!(
            id = %request.id,
            artist = %artist_name,
            event_type = %request.event_type,
            "recorded quote request"
        );

        Ok(request)
    }

    pub fn list(&self) -> &[QuoteRequest] {
        &self.requests
    }

    /// Requests addressed to one artist, oldest first
    pub fn for_artist(&self, artist_id: &str) -> Vec<&QuoteRequest> {
        self.requests
            .iter()
            .filter(|r| r.artist_id == artist_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request_for(artist_id: &str) -> QuoteRequestInput {
        QuoteRequestInput {
            artist_id: artist_id.to_string(),
            full_name: "Jordan Smith".to_string(),
            email: "jordan@example.com".to_string(),
            phone_number: Some("555-0100".to_string()),
            event_type: "Corporate Event".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 12, 11),
            event_location: "Chicago, IL".to_string(),
            performance_duration: "2 hours".to_string(),
            budget_range: "$500 - $1,000".to_string(),
            additional_information: Some("Holiday party".to_string()),
        }
    }

    #[test]
    fn test_request_is_recorded() {
        let catalog = ArtistCatalog::with_defaults();
        let mut book = QuoteBook::new();

        let request = book.request(&catalog, request_for("4")).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.list()[0], request);
        assert_eq!(request.artist_id, "4");
        assert_eq!(request.phone_number.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_unknown_artist_rejected() {
        let catalog = ArtistCatalog::with_defaults();
        let mut book = QuoteBook::new();

        let err = book.request(&catalog, request_for("404")).unwrap_err();

        assert_eq!(err, MarketplaceError::UnknownArtist("404".to_string()));
        assert!(book.is_empty());
    }

    #[test]
    fn test_invalid_request_rejected() {
        let catalog = ArtistCatalog::with_defaults();
        let mut book = QuoteBook::new();
        let mut input = request_for("1");
        input.event_date = None;
        input.full_name.clear();

        let err = book.request(&catalog, input).unwrap_err();

        assert!(matches!(err, MarketplaceError::InvalidQuoteRequest(_)));
        assert_eq!(err.field_errors().len(), 2);
        assert!(book.is_empty());
    }

    #[test]
    fn test_for_artist() {
        let catalog = ArtistCatalog::with_defaults();
        let mut book = QuoteBook::new();
        book.request(&catalog, request_for("1")).unwrap();
        book.request(&catalog, request_for("2")).unwrap();
        book.request(&catalog, request_for("1")).unwrap();

        assert_eq!(book.for_artist("1").len(), 2);
        assert_eq!(book.for_artist("2").len(), 1);
        assert!(book.for_artist("3").is_empty());
    }
}
