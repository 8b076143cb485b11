// 🔎 Query Engine - filter, search and sort over the artist catalog
//
// Pure functions: same catalog + same spec always yields the same sequence.
// Filtering runs first; ordering is applied to the survivors with a stable
// sort so ties keep catalog order.

use crate::entities::Artist;
use crate::error::{MarketplaceError, Result};
use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Token the listing controls send for "no constraint"
pub const ALL: &str = "all";

// ============================================================================
// PRICE BAND
// ============================================================================

/// Fixed rate buckets; contiguous and exhaustive over non-negative prices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    #[default]
    #[serde(rename = "all")]
    Any,
    /// price < 500
    Low,
    /// 500 <= price < 800
    Medium,
    /// price >= 800
    High,
}

impl PriceBand {
    pub const MEDIUM_FLOOR: f64 = 500.0;
    pub const HIGH_FLOOR: f64 = 800.0;

    /// Every band, in dropdown order
    pub fn all() -> [PriceBand; 4] {
        [
            PriceBand::Any,
            PriceBand::Low,
            PriceBand::Medium,
            PriceBand::High,
        ]
    }

    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::Low => price < Self::MEDIUM_FLOOR,
            PriceBand::Medium => price >= Self::MEDIUM_FLOOR && price < Self::HIGH_FLOOR,
            PriceBand::High => price >= Self::HIGH_FLOOR,
        }
    }

    /// Band a given price falls into (never `Any`)
    pub fn of(price: f64) -> PriceBand {
        if price < Self::MEDIUM_FLOOR {
            PriceBand::Low
        } else if price < Self::HIGH_FLOOR {
            PriceBand::Medium
        } else {
            PriceBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Any => ALL,
            PriceBand::Low => "low",
            PriceBand::Medium => "medium",
            PriceBand::High => "high",
        }
    }

    /// Label shown in the price dropdown
    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Any => "All Prices",
            PriceBand::Low => "Under $500",
            PriceBand::Medium => "$500 - $800",
            PriceBand::High => "$800+",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBand {
    type Err = MarketplaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | ALL => Ok(PriceBand::Any),
            "low" => Ok(PriceBand::Low),
            "medium" => Ok(PriceBand::Medium),
            "high" => Ok(PriceBand::High),
            _ => Err(MarketplaceError::InvalidFilterSpec {
                kind: "price band",
                token: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

/// Name and price sort ascending; rating sorts descending (best first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    pub fn compare(&self, a: &Artist, b: &Artist) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MarketplaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            _ => Err(MarketplaceError::InvalidFilterSpec {
                kind: "sort key",
                token: s.to_string(),
            }),
        }
    }
}

/// Diacritics folded and case ignored first ("Émile" sits with "Emile"),
/// then the plain lowercase form, then case-sensitive so the order is total
fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    deunicode(&a_lower)
        .cmp(&deunicode(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| a.cmp(b))
}

// ============================================================================
// FILTER SPEC
// ============================================================================

/// Missing fields deserialize as "no constraint"; so do an empty text, an
/// empty category set and the "all" token in categories or location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring of name or description
    pub text: Option<String>,
    /// Empty set (or one holding "all") means every category
    pub categories: BTreeSet<String>,
    /// Substring of the artist's location; "all" means anywhere
    pub location: Option<String>,
    pub price_band: PriceBand,
    /// None keeps catalog order
    pub sort_key: Option<SortKey>,
}

/// Raw listing-page parameters, as they arrive from a form or query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub q: Option<String>,
    /// Comma-separated category names, or "all"
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub sort: Option<String>,
}

fn constraint(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL)
}

impl FilterSpec {
    pub fn new() -> Self {
        FilterSpec::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if category != ALL {
            self.categories.insert(category);
        }
        self
    }

    pub fn with_categories<I, S>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        categories
            .into_iter()
            .fold(self, |spec, category| spec.with_category(category))
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = constraint(Some(location.into()));
        self
    }

    pub fn with_price_band(mut self, band: PriceBand) -> Self {
        self.price_band = band;
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Build a spec from raw parameters, rejecting unknown band / sort tokens
    pub fn from_params(params: &QueryParams) -> Result<Self> {
        let mut spec = FilterSpec::new();

        if let Some(text) = params.q.as_deref() {
            spec = spec.with_text(text);
        }

        if let Some(categories) = constraint(params.category.clone()) {
            spec = spec.with_categories(
                categories
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty()),
            );
        }

        if let Some(location) = constraint(params.location.clone()) {
            spec = spec.with_location(location);
        }

        if let Some(price) = params.price.as_deref() {
            spec = spec.with_price_band(price.parse()?);
        }

        if let Some(sort) = params.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            spec = spec.sorted_by(sort.parse()?);
        }

        Ok(spec)
    }

    /// All predicates ANDed together
    pub fn matches(&self, artist: &Artist) -> bool {
        self.matches_text(artist)
            && self.matches_category(artist)
            && self.matches_location(artist)
            && self.price_band.contains(artist.price)
    }

    fn matches_text(&self, artist: &Artist) -> bool {
        let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = text.to_lowercase();
        artist.name.to_lowercase().contains(&needle)
            || artist.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, artist: &Artist) -> bool {
        self.categories.is_empty()
            || self.categories.contains(ALL)
            || self.categories.contains(&artist.category)
    }

    fn matches_location(&self, artist: &Artist) -> bool {
        self.location
            .as_deref()
            .filter(|location| !location.is_empty() && *location != ALL)
            .map_or(true, |location| artist.location.contains(location))
    }
}

// ============================================================================
// QUERY
// ============================================================================

/// Filter then (stable) sort
pub fn query(catalog: &[Artist], spec: &FilterSpec) -> Vec<Artist> {
    let mut results: Vec<Artist> = catalog
        .iter()
        .filter(|artist| spec.matches(artist))
        .cloned()
        .collect();

    if let Some(key) = spec.sort_key {
        results.sort_by(|a, b| key.compare(a, b));
    }

    tracing::debug!(
        matched = results.len(),
        total = catalog.len(),
        sort = ?spec.sort_key,
        "artist query"
    );

    results
}

/// Query result plus the catalog size, for "Showing X of Y"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub artists: Vec<Artist>,
    pub total: usize,
}

impl QueryResult {
    pub fn shown(&self) -> usize {
        self.artists.len()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} artists", self.shown(), self.total)
    }
}

pub fn search(catalog: &[Artist], spec: &FilterSpec) -> QueryResult {
    QueryResult {
        artists: query(catalog, spec),
        total: catalog.len(),
    }
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

/// One entry of the price dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBandOption {
    pub value: PriceBand,
    pub label: &'static str,
}

/// Values for the category, location and price dropdowns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub price_bands: Vec<PriceBandOption>,
}

impl FilterOptions {
    /// Distinct categories and region tokens, first-seen order
    pub fn from_catalog(catalog: &[Artist]) -> Self {
        let mut options = FilterOptions {
            price_bands: PriceBand::all()
                .into_iter()
                .map(|band| PriceBandOption {
                    value: band,
                    label: band.label(),
                })
                .collect(),
            ..FilterOptions::default()
        };

        for artist in catalog {
            if !options.categories.contains(&artist.category) {
                options.categories.push(artist.category.clone());
            }
            if let Some(region) = artist.region() {
                if !options.regions.iter().any(|r| r == region) {
                    options.regions.push(region.to_string());
                }
            }
        }

        options
    }
}

// ============================================================================
// TESTS
// ============================================================================
