// 📝 Submission Entity - an onboarding application awaiting review
//
// A submission is a pending artist: same shape minus rating/image.
// It is created only by SubmissionStore::append and never changes afterwards.

use super::is_blank;
use crate::error::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// SUBMISSION INPUT
// ============================================================================

/// What the onboarding form hands to the store (no id, no timestamp yet)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Single descriptive string, e.g. "Singers, DJs"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    /// None when the form left the rate empty
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience: Option<String>,
}

impl SubmissionInput {
    /// Check the fields the store refuses to accept without
    ///
    /// Every problem is reported, not just the first one.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("category", &self.category),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if is_blank(value) {
                errors.push(FieldError::MissingField(field));
            }
        }

        match self.price {
            None => errors.push(FieldError::MissingField("price")),
            Some(price) if !price.is_finite() || price < 0.0 => {
                errors.push(FieldError::invalid(
                    "price",
                    format!("must be a non-negative number, got {}", price),
                ));
            }
            Some(_) => {}
        }

        if is_blank(&self.description) {
            errors.push(FieldError::MissingField("description"));
        }

        errors
    }
}

// ============================================================================
// SUBMISSION ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Generated at insertion (UUID v4)
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub skills: Vec<String>,
    pub location: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// Generated at insertion, non-decreasing in store order
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Stamp an already-validated input with identity and time
    pub(crate) fn from_input(input: SubmissionInput, submitted_at: DateTime<Utc>) -> Self {
        Submission {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            category: input.category,
            skills: input.skills,
            location: input.location,
            price: input.price.unwrap_or_default(),
            description: input.description,
            experience: input.experience,
            submitted_at,
        }
    }
}
