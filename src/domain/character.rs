//! Character domain model.
//!
//! Characters are read-only records sourced from the remote catalog. They are
//! deserialized straight from the wire format and never mutated locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status of a character as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatus {
    /// Every status, in the order filter pickers present them.
    pub const ALL: [Self; 3] = [Self::Alive, Self::Dead, Self::Unknown];

    /// Wire value used both in query strings and JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of a character as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Gender {
    /// Every gender, in the order filter pickers present them.
    pub const ALL: [Self; 4] = [Self::Female, Self::Male, Self::Genderless, Self::Unknown];

    /// Wire value used both in query strings and JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named link to another catalog resource (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    /// Empty when the catalog has no page for the place.
    pub url: String,
}

/// A character record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Sub-type or variant; usually empty.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: Gender,
    pub origin: ResourceLink,
    pub location: ResourceLink,
    /// Avatar image URL.
    pub image: String,
    /// URLs of every episode the character appears in, in airing order.
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Character {
    /// Returns the numeric ids of the episodes this character appears in.
    ///
    /// Ids are parsed from the last path segment of each episode URL; URLs that
    /// do not end in a positive integer are skipped. Order follows the
    /// character's episode list.
    #[must_use]
    pub fn episode_ids(&self) -> Vec<u32> {
        self.episode.iter().filter_map(|url| resource_id(url)).collect()
    }
}

/// Extracts the trailing numeric id from a catalog resource URL.
///
/// Returns `None` for a missing, zero or non-numeric final segment.
///
/// # Examples
///
/// ```
/// use multiverse_catalog::domain::resource_id;
///
/// assert_eq!(resource_id("https://rickandmortyapi.com/api/episode/28"), Some(28));
/// assert_eq!(resource_id("https://rickandmortyapi.com/api/episode/"), None);
/// ```
#[must_use]
pub fn resource_id(resource_url: &str) -> Option<u32> {
    let digits = resource_url
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))?;

    digits.parse::<u32>().ok().filter(|id| *id > 0)
}

/// Formats a catalog creation timestamp for display, e.g. `"November 4, 2017"`.
#[must_use]
pub fn format_created(created: &DateTime<Utc>) -> String {
    created.format("%B %-d, %Y").to_string()
}
