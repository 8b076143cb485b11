// 🪪 Artist Onboarding - form rules applied before a submission reaches the store
//
// The form lets an applicant tick several categories and languages. What the
// store receives is a single descriptive category string ("Singers, DJs") with
// the ticked categories repeated as the skills list.

use crate::entities::{is_blank, looks_like_email, Discipline, SubmissionInput};
use crate::error::{FieldError, MarketplaceError, Result};
use serde::{Deserialize, Serialize};

/// Lowest rate an applicant may ask for
pub const MINIMUM_RATE: f64 = 50.0;

pub const LANGUAGE_OPTIONS: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Mandarin",
    "Japanese",
    "Korean",
    "Arabic",
    "Russian",
    "Hindi",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "1-2 years",
    "3-5 years",
    "6-10 years",
    "10+ years",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl OnboardingForm {
    /// Toggle a category on or off, keeping selection order
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_language(&mut self, language: &str) {
        toggle(&mut self.languages, language);
    }

    /// Every problem with the form, in field order
    pub fn problems(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(FieldError::MissingField("name"));
        }

        if is_blank(&self.email) {
            errors.push(FieldError::MissingField("email"));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(FieldError::invalid("email", "invalid email address"));
        }

        if is_blank(&self.location) {
            errors.push(FieldError::MissingField("location"));
        }

        match self.price {
            None => errors.push(FieldError::MissingField("price")),
            Some(price) if !price.is_finite() || price < MINIMUM_RATE => {
                errors.push(FieldError::invalid(
                    "price",
                    format!("minimum rate is ${}", MINIMUM_RATE),
                ));
            }
            Some(_) => {}
        }

        if is_blank(&self.description) {
            errors.push(FieldError::MissingField("description"));
        }

        if is_blank(&self.experience) {
            errors.push(FieldError::MissingField("experience"));
        } else if !EXPERIENCE_LEVELS.contains(&self.experience.trim()) {
            errors.push(FieldError::invalid(
                "experience",
                format!("unknown experience level `{}`", self.experience.trim()),
            ));
        }

        if self.categories.is_empty() {
            errors.push(FieldError::invalid(
                "categories",
                "please select at least one category",
            ));
        } else if let Some(unknown) = self
            .categories
            .iter()
            .find(|c| c.parse::<Discipline>().is_err())
        {
            errors.push(FieldError::invalid(
                "categories",
                format!("unknown category `{}`", unknown),
            ));
        }

        if self.languages.is_empty() {
            errors.push(FieldError::invalid(
                "languages",
                "please select at least one language",
            ));
        } else if let Some(unknown) = self
            .languages
            .iter()
            .find(|l| !LANGUAGE_OPTIONS.contains(&l.as_str()))
        {
            errors.push(FieldError::invalid(
                "languages",
                format!("unsupported language `{}`", unknown),
            ));
        }

        errors
    }

    /// Turn a complete form into the store's input record
    ///
    /// Category labels are normalized ("dj" → "DJs").
    pub fn validate(&self) -> Result<SubmissionInput> {
        let errors = self.problems();
        if !errors.is_empty() {
            return Err(MarketplaceError::InvalidSubmission(errors));
        }

        let categories: Vec<String> = self
            .categories
            .iter()
            .filter_map(|c| c.parse::<Discipline>().ok())
            .map(|d| d.as_str().to_string())
            .collect();

        Ok(SubmissionInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            category: categories.join(", "),
            skills: categories,
            location: self.location.trim().to_string(),
            price: self.price,
            description: self.description.trim().to_string(),
            experience: Some(self.experience.trim().to_string()),
        })
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(pos) = selection.iter().position(|v| v == value) {
        selection.remove(pos);
    } else {
        selection.push(value.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
