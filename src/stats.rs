// 📊 Dashboard Statistics - read-time projection over catalog + submissions
//
// Nothing here is stored; every number is recomputed from the current
// contents each time the dashboard asks.

use crate::entities::{Artist, Submission};
use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_artists: usize,
    pub total_submissions: usize,
    /// Submissions in the same calendar month and year as "now"
    pub submissions_this_month: usize,
    /// Mean artist price rounded to the nearest integer, 0 for an empty catalog
    pub average_price: i64,
}

impl DashboardStats {
    /// Compute against an explicit "now"; the month is judged in `now`'s timezone
    pub fn compute<Tz: TimeZone>(
        artists: &[Artist],
        submissions: &[Submission],
        now: &DateTime<Tz>,
    ) -> Self {
        let tz = now.timezone();
        let submissions_this_month = submissions
            .iter()
            .filter(|s| {
                let local = s.submitted_at.with_timezone(&tz);
                local.year() == now.year() && local.month() == now.month()
            })
            .count();

        DashboardStats {
            total_artists: artists.len(),
            total_submissions: submissions.len(),
            submissions_this_month,
            average_price: average_price(artists),
        }
    }

    /// Compute against the local wall clock
    pub fn now(artists: &[Artist], submissions: &[Submission]) -> Self {
        Self::compute(artists, submissions, &Local::now())
    }
}

pub fn average_price(artists: &[Artist]) -> i64 {
    if artists.is_empty() {
        return 0;
    }

    let sum: f64 = artists.iter().map(|a| a.price).sum();
    (sum / artists.len() as f64).round() as i64
}

// ============================================================================
// TESTS
// ============================================================================
