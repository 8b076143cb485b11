// 💬 Quote Request Entity - a client asking an artist for pricing

use super::{is_blank, looks_like_email};
use crate::error::FieldError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const EVENT_TYPES: &[&str] = &[
    "Wedding",
    "Corporate Event",
    "Birthday Party",
    "Anniversary",
    "Concert",
    "Festival",
    "Private Party",
    "Other",
];

pub const PERFORMANCE_DURATIONS: &[&str] = &[
    "1 hour",
    "2 hours",
    "3 hours",
    "4 hours",
    "Half day (4-6 hours)",
    "Full day (8+ hours)",
    "Multiple days",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $500",
    "$500 - $1,000",
    "$1,000 - $2,500",
    "$2,500 - $5,000",
    "$5,000 - $10,000",
    "Above $10,000",
];

// ============================================================================
// QUOTE REQUEST INPUT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestInput {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub performance_duration: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub additional_information: Option<String>,
}

fn check_menu(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    menu: &[&str],
) {
    if is_blank(value) {
        errors.push(FieldError::MissingField(field));
    } else if !menu.contains(&value.trim()) {
        errors.push(FieldError::invalid(
            field,
            format!("`{}` is not one of the offered options", value.trim()),
        ));
    }
}

impl QuoteRequestInput {
    /// Field checks; does not look at the catalog
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.full_name) {
            errors.push(FieldError::MissingField("fullName"));
        }

        if is_blank(&self.email) {
            errors.push(FieldError::MissingField("email"));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(FieldError::invalid("email", "please enter a valid email"));
        }

        check_menu(&mut errors, "eventType", &self.event_type, EVENT_TYPES);

        if self.event_date.is_none() {
            errors.push(FieldError::MissingField("eventDate"));
        }

        if is_blank(&self.event_location) {
            errors.push(FieldError::MissingField("eventLocation"));
        }

        check_menu(
            &mut errors,
            "performanceDuration",
            &self.performance_duration,
            PERFORMANCE_DURATIONS,
        );
        check_menu(&mut errors, "budgetRange", &self.budget_range, BUDGET_RANGES);

        errors
    }
}

// ============================================================================
// QUOTE REQUEST ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: String,
    pub artist_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub event_location: String,
    pub performance_duration: String,
    pub budget_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    pub requested_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Build from a validated input; None only if the event date is absent
    pub(crate) fn from_input(input: QuoteRequestInput, requested_at: DateTime<Utc>) -> Option<Self> {
        let event_date = input.event_date?;
        let non_blank = |value: Option<String>| value.filter(|v| !is_blank(v));

        Some(QuoteRequest {
            id: uuid::Uuid::new_v4().to_string(),
            artist_id: input.artist_id,
            full_name: input.full_name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone_number: non_blank(input.phone_number),
            event_type: input.event_type.trim().to_string(),
            event_date,
            event_location: input.event_location.trim().to_string(),
            performance_duration: input.performance_duration.trim().to_string(),
            budget_range: input.budget_range.trim().to_string(),
            additional_information: non_blank(input.additional_information),
            requested_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedding_request() -> QuoteRequestInput {
        QuoteRequestInput {
            artist_id: "1".to_string(),
            full_name: "Jordan Smith".to_string(),
            email: "jordan@example.com".to_string(),
            phone_number: Some("".to_string()),
            event_type: "Wedding".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 6, 20),
            event_location: "Santa Monica, CA".to_string(),
            performance_duration: "3 hours".to_string(),
            budget_range: "$1,000 - $2,500".to_string(),
            additional_information: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(wedding_request().validate().is_empty());
    }

    #[test]
    fn test_empty_request_reports_all_required_fields() {
        let errors = QuoteRequestInput::default().validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();

        assert_eq!(
            fields,
            vec![
                "fullName",
                "email",
                "eventType",
                "eventDate",
                "eventLocation",
                "performanceDuration",
                "budgetRange"
            ]
        );
    }

    #[test]
    fn test_menu_values_are_enforced() {
        let mut input = wedding_request();
        input.budget_range = "A million dollars".to_string();
        input.email = "not-an-email".to_string();

        let errors = input.validate();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], FieldError::Invalid { field: "email", .. }));
        assert!(matches!(errors[1], FieldError::Invalid { field: "budgetRange", .. }));
    }

    #[test]
    fn test_blank_optional_fields_are_dropped() {
        let request = QuoteRequest::from_input(wedding_request(), Utc::now()).unwrap();

        assert_eq!(request.phone_number, None);
        assert_eq!(request.additional_information, None);
        assert_eq!(request.event_type, "Wedding");
    }
}
