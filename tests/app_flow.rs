mod common;

use common::FakeApi;
use multiverse_catalog::app::{App, Event, View};
use multiverse_catalog::domain::{CharacterStatus, FilterPatch, Gender};
use multiverse_catalog::storage::{MemoryStore, Persistence, CATALOG_KEY};
use std::path::Path;
use std::sync::Arc;

async fn settle(dispatch: multiverse_catalog::app::Dispatch) {
    for handle in dispatch.pending {
        handle.await.unwrap();
    }
}

fn open(path: &Path) -> App<FakeApi> {
    App::new(Arc::new(FakeApi::with_pages(3)), Persistence::open(path))
}

#[tokio::test]
async fn favorites_and_filters_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut app = open(&path);
        for id in [1, 2, 3] {
            app.dispatch(&Event::ToggleFavorite(id)).unwrap();
        }
        app.dispatch(&Event::SetFilters(FilterPatch::status(Some(CharacterStatus::Alive))))
            .unwrap();
        app.dispatch(&Event::SetPage(3)).unwrap();
        assert!(!app.persistence().is_degraded());
    }

    let app = open(&path);
    let state = app.state();
    assert_eq!(state.favorites.ids(), &[1, 2, 3]);

    let filters = state.filters.current();
    assert_eq!(filters.status, Some(CharacterStatus::Alive));
    assert_eq!(filters.page, 1);
    assert_eq!(filters.name, None);
    assert_eq!(filters.species, None);
    assert_eq!(filters.gender, None);
}

#[tokio::test]
async fn playback_preferences_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut app = open(&path);
        app.dispatch(&Event::TogglePlayback).unwrap();
        app.dispatch(&Event::SetVolume(0.8)).unwrap();
    }

    let app = open(&path);
    assert!(app.state().playback.is_playing());
    assert!((app.state().playback.volume() - 0.8).abs() < f32::EPSILON);
}

#[tokio::test]
async fn malformed_record_starts_from_defaults() {
    let store = MemoryStore::with_entries([(CATALOG_KEY, "{not json")]);
    let app = App::new(Arc::new(FakeApi::default()), Persistence::new(Box::new(store)));

    assert!(app.state().favorites.is_empty());
    assert!(app.state().filters.current().is_unfiltered());
}

#[tokio::test]
async fn unwritable_storage_keeps_working_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let mut app = open(&blocker.join("storage.json"));
    app.dispatch(&Event::ToggleFavorite(42)).unwrap();

    assert!(app.persistence().is_degraded());
    assert!(app.state().favorites.is_favorite(42));
}

#[tokio::test]
async fn start_loads_the_first_page() {
    let api = Arc::new(FakeApi::with_pages(3));
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());

    for handle in app.start() {
        handle.await.unwrap();
    }

    let state = app.characters().snapshot();
    assert!(!state.loading);
    assert_eq!(state.data.map(|page| page.info.pages), Some(3));
    assert_eq!(api.calls(), vec!["character?page=1"]);
}

#[tokio::test]
async fn paging_stops_at_the_last_page() {
    let api = Arc::new(FakeApi::with_pages(2));
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());
    for handle in app.start() {
        handle.await.unwrap();
    }

    settle(app.dispatch(&Event::NextPage).unwrap()).await;
    assert_eq!(app.state().filters.page(), 2);

    let dispatch = app.dispatch(&Event::NextPage).unwrap();
    assert!(!dispatch.render);
    assert!(dispatch.pending.is_empty());
    assert_eq!(app.state().filters.page(), 2);

    settle(app.dispatch(&Event::PreviousPage).unwrap()).await;
    assert_eq!(app.state().filters.page(), 1);
    assert_eq!(
        api.calls(),
        vec!["character?page=1", "character?page=2", "character?page=1"]
    );
}

#[tokio::test]
async fn page_count_of_previous_filters_is_not_reused() {
    let api = Arc::new(FakeApi::with_pages(3));
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());
    for handle in app.start() {
        handle.await.unwrap();
    }

    let release = api.gate("character?name=rick&page=1");
    let pending = app.dispatch(&Event::SetFilters(FilterPatch::name("rick"))).unwrap();
    app.dispatch(&Event::ShowCharacters).unwrap();
    assert_eq!(app.state().page_count, None);

    release.send(()).unwrap();
    settle(pending).await;

    app.dispatch(&Event::ShowCharacters).unwrap();
    assert_eq!(app.state().page_count, Some(1));
    let dispatch = app.dispatch(&Event::NextPage).unwrap();
    assert!(dispatch.pending.is_empty());
    assert_eq!(app.state().filters.page(), 1);
    assert_eq!(api.calls(), vec!["character?page=1", "character?name=rick&page=1"]);
}

#[tokio::test]
async fn page_count_holds_while_the_next_page_loads() {
    let api = Arc::new(FakeApi::with_pages(2));
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());
    for handle in app.start() {
        handle.await.unwrap();
    }

    let release = api.gate("character?page=2");
    let pending = app.dispatch(&Event::NextPage).unwrap();
    let dispatch = app.dispatch(&Event::NextPage).unwrap();
    assert!(dispatch.pending.is_empty());
    assert_eq!(app.state().filters.page(), 2);
    assert_eq!(app.state().page_count, Some(2));

    release.send(()).unwrap();
    settle(pending).await;
}

#[tokio::test]
async fn filter_change_returns_to_first_page_and_refetches() {
    let api = Arc::new(FakeApi::with_pages(5));
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());

    settle(app.dispatch(&Event::SetPage(4)).unwrap()).await;
    settle(
        app.dispatch(&Event::SetFilters(FilterPatch::gender(Some(Gender::Female))))
            .unwrap(),
    )
    .await;

    assert_eq!(app.state().filters.page(), 1);
    assert_eq!(
        api.calls(),
        vec!["character?page=4", "character?gender=Female&page=1"]
    );
}

#[tokio::test]
async fn detail_view_loads_character_then_episodes() {
    let api = Arc::new(FakeApi::default());
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());

    settle(app.dispatch(&Event::OpenCharacter(1)).unwrap()).await;
    assert_eq!(app.state().view, View::CharacterDetail(1));

    let episode_ids = app
        .character_detail()
        .snapshot()
        .data
        .map(|c| c.episode_ids())
        .unwrap_or_default();
    assert_eq!(episode_ids, vec![1, 2]);

    let loaded = Event::CharacterLoaded { id: 1, episode_ids };
    settle(app.dispatch(&loaded).unwrap()).await;
    let titles: Vec<String> = app
        .episodes()
        .snapshot()
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.code)
        .collect();
    assert_eq!(titles, vec!["S01E01", "S01E02"]);
}

#[tokio::test]
async fn favorites_view_follows_toggles() {
    let api = Arc::new(FakeApi::default());
    let mut app = App::new(Arc::clone(&api), Persistence::in_memory());

    let dispatch = app.dispatch(&Event::ShowFavorites).unwrap();
    assert!(dispatch.pending.is_empty());
    assert_eq!(app.favorite_characters().snapshot().data, Some(Vec::new()));

    settle(app.dispatch(&Event::ToggleFavorite(5)).unwrap()).await;
    settle(app.dispatch(&Event::ToggleFavorite(9)).unwrap()).await;

    let ids: Vec<u32> = app
        .favorite_characters()
        .snapshot()
        .data
        .unwrap_or_default()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![5, 9]);
    assert!(api.calls().iter().all(|call| call.starts_with("character/")));
}

#[tokio::test]
async fn subscribers_hear_about_dispatched_changes() {
    let mut app = App::new(Arc::new(FakeApi::default()), Persistence::in_memory());
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    app.subscribe_favorites(move |ids| sink.lock().unwrap().push(ids.clone()));

    app.dispatch(&Event::ToggleFavorite(3)).unwrap();
    app.dispatch(&Event::ToggleFavorite(3)).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![vec![3], vec![]]);
}
