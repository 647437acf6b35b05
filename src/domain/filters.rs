//! Character search criteria.
//!
//! [`CharacterFilters`] is the composite key of a character list query: the
//! narrowing fields plus the page number. [`FilterPatch`] is a partial update
//! that can set or clear individual fields.

use super::character::{CharacterStatus, Gender};
use serde::{Deserialize, Serialize};

/// Active search and filter criteria for the character list.
///
/// Text fields never hold an empty string; an empty value is stored as `None`
/// so that two criteria that produce the same query also compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterFilters {
    pub name: Option<String>,
    pub status: Option<CharacterStatus>,
    pub species: Option<String>,
    pub gender: Option<Gender>,
    /// One-based page number.
    pub page: u32,
}

impl Default for CharacterFilters {
    fn default() -> Self {
        Self {
            name: None,
            status: None,
            species: None,
            gender: None,
            page: 1,
        }
    }
}

impl CharacterFilters {
    /// Builds the query parameters for a list request.
    ///
    /// Only defined fields are emitted; unset fields are left out entirely
    /// rather than sent empty. The page is always included.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiverse_catalog::domain::{CharacterFilters, CharacterStatus};
    ///
    /// let filters = CharacterFilters {
    ///     name: Some("rick".to_string()),
    ///     status: Some(CharacterStatus::Alive),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     filters.query_pairs(),
    ///     vec![("name", "rick".to_string()), ("status", "Alive".to_string()), ("page", "1".to_string())]
    /// );
    /// ```
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(species) = &self.species {
            pairs.push(("species", species.clone()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str().to_string()));
        }
        pairs.push(("page", self.page.max(1).to_string()));
        pairs
    }

    /// Returns `true` when no narrowing field is set (page is ignored).
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.species.is_none() && self.gender.is_none()
    }

    /// Merges a patch into these criteria and resets the page to 1.
    ///
    /// Fields the patch leaves as `None` keep their current value.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(name) = patch.name {
            self.name = non_empty(name);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(species) = patch.species {
            self.species = non_empty(species);
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        self.page = 1;
    }
}

/// Partial update of [`CharacterFilters`].
///
/// Each field is doubly optional: the outer `None` means "leave unchanged",
/// `Some(None)` clears the field and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub name: Option<Option<String>>,
    pub status: Option<Option<CharacterStatus>>,
    pub species: Option<Option<String>>,
    pub gender: Option<Option<Gender>>,
}

impl FilterPatch {
    /// Patch that sets (or, for an empty string, clears) the name search.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn status(status: Option<CharacterStatus>) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn species(species: impl Into<String>) -> Self {
        Self {
            species: Some(Some(species.into())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn gender(gender: Option<Gender>) -> Self {
        Self {
            gender: Some(gender),
            ..Self::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
