//! Background music preferences.

use super::observer::{SubscriptionId, Subscribers};
use crate::storage::PlaybackSnapshot;

/// Whether the theme music plays, and how loud.
#[derive(Debug, Default)]
pub struct PlaybackState {
    snapshot: PlaybackSnapshot,
    subscribers: Subscribers<PlaybackSnapshot>,
}

impl PlaybackState {
    #[must_use]
    pub fn new(snapshot: PlaybackSnapshot) -> Self {
        let mut state = Self::default();
        state.snapshot.is_playing = snapshot.is_playing;
        state.snapshot.volume = clamp_volume(snapshot.volume, state.snapshot.volume);
        state
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.snapshot.is_playing
    }

    #[must_use]
    pub const fn volume(&self) -> f32 {
        self.snapshot.volume
    }

    #[must_use]
    pub const fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshot
    }

    pub fn toggle(&mut self) -> bool {
        self.snapshot.is_playing = !self.snapshot.is_playing;
        self.subscribers.notify(&self.snapshot);
        self.snapshot.is_playing
    }

    /// Sets the volume, clamped to `0.0..=1.0`. Non-finite values are ignored.
    pub fn set_volume(&mut self, volume: f32) {
        self.snapshot.volume = clamp_volume(volume, self.snapshot.volume);
        self.subscribers.notify(&self.snapshot);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&PlaybackSnapshot) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

fn clamp_volume(volume: f32, fallback: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
