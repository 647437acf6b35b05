//! Episode domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An episode record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Air date as the catalog formats it, e.g. `"December 2, 2013"`.
    pub air_date: String,
    /// Season/episode code, e.g. `"S01E01"`.
    #[serde(rename = "episode")]
    pub code: String,
    /// URLs of the characters appearing in the episode.
    pub characters: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Episode {
    /// Splits the episode code into `(season, number)`.
    ///
    /// Returns `None` if the code is not of the form `S<digits>E<digits>`.
    #[must_use]
    pub fn season_and_number(&self) -> Option<(u32, u32)> {
        let rest = self.code.strip_prefix('S')?;
        let (season, number) = rest.split_once('E')?;
        Some((season.parse().ok()?, number.parse().ok()?))
    }
}
