// 🎤 Artist Entity - a bookable performer in the catalog

use serde::{Deserialize, Serialize};

use super::Discipline;

// ============================================================================
// ARTIST ENTITY
// ============================================================================

/// Artist record as shown on the listing page
///
/// Immutable for the session: the catalog hands out shared references or
/// clones, never mutable access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique within the catalog
    pub id: String,

    pub name: String,

    /// Free-form category label (e.g., "Singers", "DJs")
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Ordered list of skills, may be empty
    #[serde(default)]
    pub skills: Vec<String>,

    /// "City, Region" (e.g., "Los Angeles, CA")
    pub location: String,

    /// Rate per event, never negative
    pub price: f64,

    /// Average review score, 0.0 - 5.0
    pub rating: f64,

    /// Profile picture URI
    #[serde(default)]
    pub image: String,

    /// Free text, e.g. "10+ years"
    #[serde(default)]
    pub experience: String,

    /// Free text, e.g. "Weekends"
    #[serde(default)]
    pub availability: String,
}

impl Artist {
    /// Create an artist with the fields every listing needs
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Artist {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            skills: Vec::new(),
            location: location.into(),
            price,
            rating,
            image: String::new(),
            experience: String::new(),
            availability: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    /// Region token: everything after the first comma of `location`, trimmed
    ///
    /// "Los Angeles, CA" → Some("CA"); "Remote" → None
    pub fn region(&self) -> Option<&str> {
        self.location
            .split_once(',')
            .map(|(_, region)| region.trim())
            .filter(|region| !region.is_empty())
    }

    /// Skills outside the discipline's table
    ///
    /// Always empty when the category is not one of the known disciplines.
    pub fn unlisted_skills(&self) -> Vec<&str> {
        let Ok(discipline) = self.category.parse::<Discipline>() else {
            return Vec::new();
        };
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !discipline.is_allowed_skill(skill))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_builder() {
        let artist = Artist::new("1", "Sarah Johnson", "Singers", "Los Angeles, CA", 500.0, 4.9)
            .with_description("Jazz vocalist")
            .with_skills(["Jazz", "Pop"])
            .with_experience("10+ years")
            .with_availability("Weekends");

        assert_eq!(artist.id, "1");
        assert_eq!(artist.skills, vec!["Jazz".to_string(), "Pop".to_string()]);
        assert_eq!(artist.description, "Jazz vocalist");
        assert_eq!(artist.experience, "10+ years");
        assert_eq!(artist.availability, "Weekends");
        assert!(artist.image.is_empty());
    }

    #[test]
    fn test_region_token() {
        let artist = Artist::new("1", "A", "DJs", "New York, NY", 800.0, 4.8);
        assert_eq!(artist.region(), Some("NY"));

        let no_comma = Artist::new("2", "B", "DJs", "Remote", 800.0, 4.8);
        assert_eq!(no_comma.region(), None);

        let trailing_comma = Artist::new("3", "C", "DJs", "Paris, ", 800.0, 4.8);
        assert_eq!(trailing_comma.region(), None);

        let nested = Artist::new("4", "D", "DJs", "Austin, TX, USA", 800.0, 4.8);
        assert_eq!(nested.region(), Some("TX, USA"));
    }

    #[test]
    fn test_unlisted_skills() {
        let dancer = Artist::new("1", "A", "Dancers", "Miami, FL", 350.0, 4.7)
            .with_skills(["Salsa", "Juggling", "ballroom"]);
        assert_eq!(dancer.unlisted_skills(), vec!["Juggling"]);

        let free_form = Artist::new("2", "B", "Magicians", "Reno, NV", 300.0, 4.0)
            .with_skills(["Card Tricks"]);
        assert!(free_form.unlisted_skills().is_empty());
    }

    #[test]
    fn test_artist_json_uses_camel_case_and_defaults() {
        let json = r#"{
            "id": "7",
            "name": "The Brass Band",
            "category": "Bands",
            "location": "New Orleans, LA",
            "price": 1500,
            "rating": 4.5
        }"#;

        let artist: Artist = serde_json::from_str(json).unwrap();
        assert_eq!(artist.name, "The Brass Band");
        assert_eq!(artist.price, 1500.0);
        assert!(artist.skills.is_empty());
        assert!(artist.description.is_empty());
    }
}
