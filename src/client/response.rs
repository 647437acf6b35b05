//! Wire-format helpers for catalog responses.

use serde::{Deserialize, Serialize};

/// A batch lookup body that may be a bare object or an array.
///
/// The catalog answers `/character/1,2` with an array but `/character/1` with
/// a single object. Deserializing into this type accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Joins ids into the comma-separated path segment used by batch endpoints.
#[must_use]
pub fn join_ids(ids: &[u32]) -> String {
    ids.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn bare_object_becomes_single_element_list() {
        let body: OneOrMany<Item> = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(body.into_vec(), vec![Item { id: 7 }]);
    }

    #[test]
    fn array_keeps_remote_order() {
        let body: OneOrMany<Item> = serde_json::from_str(r#"[{"id": 3}, {"id": 1}]"#).unwrap();
        assert_eq!(body.into_vec(), vec![Item { id: 3 }, Item { id: 1 }]);
    }

    #[test]
    fn joins_ids_with_commas() {
        assert_eq!(join_ids(&[1, 183, 2]), "1,183,2");
        assert_eq!(join_ids(&[]), "");
    }
}
