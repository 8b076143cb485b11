// 🎭 Discipline - fixed table of performer categories and their allowed skills

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Singers,
    DJs,
    Dancers,
    Comedians,
    Bands,
}

const SINGER_SKILLS: &[&str] = &[
    "Jazz",
    "Pop",
    "R&B",
    "Wedding Songs",
    "Jazz Standards",
    "Swing",
    "Bossa Nova",
    "Instrumental",
];

const DJ_SKILLS: &[&str] = &[
    "Wedding DJ",
    "Corporate Events",
    "Club Music",
    "Sound Systems",
    "Electronic",
    "House",
    "Techno",
    "LED Light Shows",
];

const DANCER_SKILLS: &[&str] = &["Salsa", "Bachata", "Ballroom", "Contemporary"];

const COMEDIAN_SKILLS: &[&str] = &[
    "Stand-up",
    "Clean Comedy",
    "Corporate Entertainment",
    "MC Services",
];

// No band is listed yet
const BAND_SKILLS: &[&str] = &[];

impl Discipline {
    /// Every discipline, in menu order
    pub fn all() -> [Discipline; 5] {
        [
            Discipline::Singers,
            Discipline::DJs,
            Discipline::Dancers,
            Discipline::Comedians,
            Discipline::Bands,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Singers => "Singers",
            Discipline::DJs => "DJs",
            Discipline::Dancers => "Dancers",
            Discipline::Comedians => "Comedians",
            Discipline::Bands => "Bands",
        }
    }

    /// Skills an artist of this discipline may list
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            Discipline::Singers => SINGER_SKILLS,
            Discipline::DJs => DJ_SKILLS,
            Discipline::Dancers => DANCER_SKILLS,
            Discipline::Comedians => COMEDIAN_SKILLS,
            Discipline::Bands => BAND_SKILLS,
        }
    }

    /// Case-insensitive membership test
    pub fn is_allowed_skill(&self, skill: &str) -> bool {
        self.skills()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(skill.trim()))
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = FieldError;

    /// Accepts the plural menu label or its singular form ("Singer", "DJ")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "singers" | "singer" => Ok(Discipline::Singers),
            "djs" | "dj" => Ok(Discipline::DJs),
            "dancers" | "dancer" => Ok(Discipline::Dancers),
            "comedians" | "comedian" => Ok(Discipline::Comedians),
            "bands" | "band" => Ok(Discipline::Bands),
            _ => Err(FieldError::invalid(
                "category",
                format!("unknown category `{}`", s.trim()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plural_and_singular() {
        assert_eq!("Singers".parse::<Discipline>().unwrap(), Discipline::Singers);
        assert_eq!("dj".parse::<Discipline>().unwrap(), Discipline::DJs);
        assert_eq!(" Band ".parse::<Discipline>().unwrap(), Discipline::Bands);
        assert!("Magicians".parse::<Discipline>().is_err());
    }

    #[test]
    fn test_round_trip_labels() {
        for discipline in Discipline::all() {
            assert_eq!(discipline.as_str().parse::<Discipline>().unwrap(), discipline);
        }
    }

    #[test]
    fn test_allowed_skills() {
        assert!(Discipline::Dancers.is_allowed_skill("salsa"));
        assert!(Discipline::DJs.is_allowed_skill("LED Light Shows"));
        assert!(!Discipline::DJs.is_allowed_skill("Salsa"));
        assert!(!Discipline::Comedians.is_allowed_skill(""));
        assert!(!Discipline::Bands.is_allowed_skill("Rock"));
    }
}
