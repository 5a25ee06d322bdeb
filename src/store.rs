use tracing::debug;

use crate::prune::PrunePolicy;
use crate::track::{Track, TrackId};
use crate::Point;

/// Ordered set of live tracks plus the id counter of one stream.
///
/// Store order is the candidate order seen by the matcher: after every
/// prune, tracks confirmed in the frame come first (in the order they were
/// first emitted), followed by retained unmatched tracks in their previous
/// order.
#[derive(Debug, Clone)]
pub struct TrackStore {
    tracks: Vec<Track>,
    next_id: u64,
    max_history: usize,
}

impl TrackStore {
    pub fn new(max_history: usize) -> Self {
        Self {
            tracks: Vec::with_capacity(64),
            next_id: 0,
            max_history,
        }
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Id the next created track will receive.
    #[inline]
    pub fn next_id(&self) -> TrackId {
        TrackId(self.next_id)
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn create(&mut self, pos: Point) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;

        self.tracks.push(Track::new(id, pos, self.max_history));

        id
    }

    /// Appends `pos` to the track at `idx` and returns its id.
    pub fn update(&mut self, idx: usize, pos: Point) -> TrackId {
        let track = &mut self.tracks[idx];
        track.update(pos);

        track.id
    }

    /// Rebuilds the store from the ids confirmed this frame. Unconfirmed
    /// tracks survive only if `policy` retains them. Returns how many tracks
    /// were dropped.
    pub fn prune<P: PrunePolicy + ?Sized>(&mut self, confirmed: &[TrackId], policy: &P) -> usize {
        let mut old: Vec<Option<Track>> = self.tracks.drain(..).map(Some).collect();
        let mut dropped = 0;

        for id in confirmed {
            let idx = old
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|t| t.id == *id));

            // ids emitted more than once were already moved over
            if let Some(track) = idx.and_then(|i| old[i].take()) {
                self.tracks.push(track);
            }
        }

        for mut track in old.into_iter().flatten() {
            track.missed += 1;

            if policy.retain(&track) {
                self.tracks.push(track);
            } else {
                debug!(id = %track.id, missed = track.missed, "track dropped");
                dropped += 1;
            }
        }

        dropped
    }
}
