//! Paged list results.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of matching records across all pages.
    pub count: u32,
    /// Total number of pages.
    pub pages: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub prev: Option<String>,
}

impl PageInfo {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev.is_some()
    }
}

/// One page of a list query.
///
/// The field names match the remote list shape `{info, results}`, so a list
/// response deserializes directly into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// The page returned when the remote reports that nothing matched.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            info: PageInfo::default(),
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_zeroed_info() {
        let page: Page<u32> = Page::empty();
        assert_eq!(page.info.count, 0);
        assert_eq!(page.info.pages, 0);
        assert!(!page.info.has_next());
        assert!(!page.info.has_prev());
        assert!(page.is_empty());
    }

    #[test]
    fn deserializes_list_envelope() {
        let json = r#"{
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
            "results": [1, 2, 3]
        }"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.pages, 42);
        assert!(page.info.has_next());
        assert_eq!(page.results, vec![1, 2, 3]);
    }
}
