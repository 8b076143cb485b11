// 📚 Artist Catalog - the fixed, read-only list of bookable artists
//
// Seeded once at start (built-in defaults or a JSON file) and never modified
// afterwards. Order is insertion order and is the order `list()` returns.

use crate::entities::Artist;
use crate::error::{MarketplaceError, Result};
use anyhow::Context as AnyhowContext;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct ArtistCatalog {
    artists: Vec<Artist>,
}

impl ArtistCatalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range numbers
    pub fn new(artists: Vec<Artist>) -> Result<Self> {
        let mut seen = HashSet::new();

        for artist in &artists {
            if !seen.insert(artist.id.as_str()) {
                return Err(MarketplaceError::InvalidCatalog(format!(
                    "duplicate artist id `{}`",
                    artist.id
                )));
            }

            if !artist.price.is_finite() || artist.price < 0.0 {
                return Err(MarketplaceError::InvalidCatalog(format!(
                    "artist `{}` has negative or non-numeric price {}",
                    artist.id, artist.price
                )));
            }

            if !(0.0..=5.0).contains(&artist.rating) {
                return Err(MarketplaceError::InvalidCatalog(format!(
                    "artist `{}` has rating {} outside 0.0 - 5.0",
                    artist.id, artist.rating
                )));
            }

            let unlisted = artist.unlisted_skills();
            if !unlisted.is_empty() {
                tracing::warn!(
                    artist = %artist.id,
                    category = %artist.category,
                    skills = ?unlisted,
                    "skills outside the category's table"
                );
            }
        }

        Ok(ArtistCatalog { artists })
    }

    /// Catalog with the built-in seed artists
    pub fn with_defaults() -> Self {
        ArtistCatalog {
            artists: default_artists(),
        }
    }

    /// Load catalog from a JSON array of artists
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;

        let artists: Vec<Artist> =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        let catalog = ArtistCatalog::new(artists)?;
        tracing::info!(
            artists = catalog.len(),
            path = %path.as_ref().display(),
            "loaded artist catalog"
        );
        Ok(catalog)
    }

    /// Full catalog in insertion order
    pub fn list(&self) -> &[Artist] {
        &self.artists
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

impl Default for ArtistCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// SEED DATA
// ============================================================================

fn default_artists() -> Vec<Artist> {
    vec![
        Artist::new("1", "Sarah Johnson", "Singers", "Los Angeles, CA", 500.0, 4.9)
            .with_image("https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400")
            .with_description(
                "Professional vocalist with 10+ years of experience in jazz and contemporary music.",
            )
            .with_skills(["Jazz", "Pop", "R&B", "Wedding Songs"])
            .with_experience("10+ years")
            .with_availability("Weekends"),
        Artist::new("2", "DJ Mike", "DJs", "New York, NY", 800.0, 4.8)
            .with_image("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400")
            .with_description("High-energy DJ specializing in weddings and corporate events.")
            .with_skills(["Wedding DJ", "Corporate Events", "Club Music", "Sound Systems"])
            .with_experience("8 years")
            .with_availability("Flexible"),
        Artist::new("3", "Maria Garcia", "Dancers", "Miami, FL", 350.0, 4.7)
            .with_image("https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?w=400")
            .with_description("Professional dancer specializing in Latin and ballroom styles.")
            .with_skills(["Salsa", "Bachata", "Ballroom", "Contemporary"])
            .with_experience("12 years")
            .with_availability("Evenings"),
        Artist::new("4", "Comedy Central", "Comedians", "Chicago, IL", 600.0, 4.6)
            .with_image("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400")
            .with_description("Stand-up comedian with clean humor perfect for corporate events.")
            .with_skills(["Stand-up", "Clean Comedy", "Corporate Entertainment", "MC Services"])
            .with_experience("6 years")
            .with_availability("Weekends"),
        Artist::new("5", "Jazz Ensemble", "Singers", "Nashville, TN", 1200.0, 4.9)
            .with_image("https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400")
            .with_description("Professional 4-piece jazz ensemble for upscale events.")
            .with_skills(["Jazz Standards", "Swing", "Bossa Nova", "Instrumental"])
            .with_experience("15+ years")
            .with_availability("Evenings"),
        Artist::new("6", "DJ Luna", "DJs", "Las Vegas, NV", 950.0, 4.8)
            .with_image("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400")
            .with_description("Electronic music specialist with state-of-the-art equipment.")
            .with_skills(["Electronic", "House", "Techno", "LED Light Shows"])
            .with_experience("9 years")
            .with_availability("Weekends"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
