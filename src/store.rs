// 🗃️ Submission Store - append-only list of onboarding applications
//
// Sole owner and sole mutator of the submission sequence. Records are only
// ever pushed to the end; nothing is updated or removed.

use crate::entities::{Submission, SubmissionInput};
use crate::error::{MarketplaceError, Result};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct SubmissionStore {
    submissions: Vec<Submission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        SubmissionStore {
            submissions: Vec::new(),
        }
    }

    /// Validate, stamp with id + timestamp, and append
    ///
    /// Every missing required field is reported in the returned error.
    pub fn append(&mut self, input: SubmissionInput) -> Result<Submission> {
        self.append_at(input, Utc::now())
    }

    /// Same as `append`, with the clock supplied by the caller
    pub fn append_at(&mut self, input: SubmissionInput, now: DateTime<Utc>) -> Result<Submission> {
        let errors = input.validate();
        if !errors.is_empty() {
            tracing::warn!(
                problems = errors.len(),
                "rejected submission with invalid fields"
            );
            return Err(MarketplaceError::InvalidSubmission(errors));
        }

        // Never earlier than the previous record, even if the wall clock steps back
        let submitted_at = match self.submissions.last() {
            Some(last) if last.submitted_at > now => last.submitted_at,
            _ => now,
        };

        let submission = Submission::from_input(input, submitted_at);
        self.submissions.push(submission.clone());

        tracing::info!(
            id = %submission.id,
            category = %submission.category,
            total = self.submissions.len(),
            "appended submission"
        );

        Ok(submission)
    }

    /// All submissions in insertion order
    pub fn list(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
