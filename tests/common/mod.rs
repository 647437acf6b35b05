#![allow(dead_code)]

use async_trait::async_trait;
use multiverse_catalog::domain::{CatalogError, Character, CharacterFilters, Episode, Page, PageInfo, Result};
use multiverse_catalog::CatalogApi;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn character_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn episode_json(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {id}"),
        "air_date": "December 2, 2013",
        "episode": format!("S01E{id:02}"),
        "characters": ["https://rickandmortyapi.com/api/character/1"],
        "url": format!("https://rickandmortyapi.com/api/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn page_json(results: Vec<Value>, pages: u32) -> Value {
    json!({
        "info": { "count": results.len(), "pages": pages, "next": null, "prev": null },
        "results": results
    })
}

pub fn character(id: u32, name: &str) -> Character {
    serde_json::from_value(character_json(id, name)).unwrap()
}

pub fn episode(id: u32) -> Episode {
    serde_json::from_value(episode_json(id)).unwrap()
}

/// Scripted catalog that records calls and can hold a call until released.
///
/// List calls answer with one character named after the `name` filter, whose
/// id is the requested page. Unfiltered lists span `pages` pages; a name
/// filter narrows the result to one page. A name of `"broken"` fails with a
/// 500.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    pub pages: u32,
}

impl FakeApi {
    pub fn with_pages(pages: u32) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Holds the call with this key until the returned sender fires.
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (release, wait) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), wait);
        release
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, key: String) {
        self.calls.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(wait) = gate {
            let _ = wait.await;
        }
    }
}

pub fn list_key(filters: &CharacterFilters) -> String {
    let query: Vec<String> = filters
        .query_pairs()
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    format!("character?{}", query.join("&"))
}

fn ids_key(resource: &str, ids: &[u32]) -> String {
    let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
    format!("{resource}/{}", ids.join(","))
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn list_characters(&self, filters: &CharacterFilters) -> Result<Page<Character>> {
        self.enter(list_key(filters)).await;

        let name = filters.name.clone().unwrap_or_else(|| "all".to_string());
        if name == "broken" {
            return Err(CatalogError::Fetch("Request failed with status code 500".to_string()));
        }
        Ok(Page {
            info: PageInfo {
                count: 1,
                pages: if filters.name.is_some() { 1 } else { self.pages.max(1) },
                next: None,
                prev: None,
            },
            results: vec![character(filters.page, &name)],
        })
    }

    async fn get_character(&self, id: u32) -> Result<Character> {
        self.enter(format!("character/{id}")).await;
        Ok(character(id, &format!("Character {id}")))
    }

    async fn get_characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>> {
        self.enter(ids_key("character", ids)).await;
        Ok(ids.iter().map(|id| character(*id, &format!("Character {id}"))).collect())
    }

    async fn list_episodes(&self, page: u32) -> Result<Page<Episode>> {
        self.enter(format!("episode?page={page}")).await;
        Ok(Page {
            info: PageInfo::default(),
            results: vec![episode(page)],
        })
    }

    async fn get_episode(&self, id: u32) -> Result<Episode> {
        self.enter(format!("episode/{id}")).await;
        Ok(episode(id))
    }

    async fn get_episodes_by_ids(&self, ids: &[u32]) -> Result<Vec<Episode>> {
        self.enter(ids_key("episode", ids)).await;
        Ok(ids.iter().map(|id| episode(*id)).collect())
    }
}
