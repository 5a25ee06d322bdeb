use serde_derive::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bbox::BBox;
use crate::error::Error;
use crate::matcher::{FirstFit, Matcher};
use crate::prune::{DropUnmatched, PrunePolicy};
use crate::store::TrackStore;
use crate::track::{Track, TrackId, TrackedObject};

pub const DEFAULT_MAX_DISTANCE: f32 = 35.0;
pub const DEFAULT_MAX_HISTORY: usize = 30;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Centroid distance in px below which a detection continues a track
    pub max_distance: f32,

    /// Number of centroids kept per track
    pub max_history: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_distance must be a positive number, got {}",
                self.max_distance
            )));
        }

        if self.max_history == 0 {
            return Err(Error::InvalidConfig(
                "max_history must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Centroid tracker of a single video stream.
///
/// `update` has to be called once per frame, in frame order: matching
/// compares against the last recorded centroid of every track.
#[derive(Debug, Clone)]
pub struct Tracker<M = FirstFit, P = DropUnmatched> {
    config: TrackerConfig,
    store: TrackStore,
    matcher: M,
    policy: P,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_strategies(config, FirstFit, DropUnmatched)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<M: Matcher, P: PrunePolicy> Tracker<M, P> {
    pub fn with_strategies(config: TrackerConfig, matcher: M, policy: P) -> Self {
        Self {
            store: TrackStore::new(config.max_history),
            config,
            matcher,
            policy,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    /// Associates the boxes of one frame with tracks.
    ///
    /// Returns one entry per input box, in input order. Boxes must be
    /// well-formed (`x1 <= x2`, `y1 <= y2`); they are not checked here.
    pub fn update(&mut self, boxes: &[BBox]) -> Vec<TrackedObject> {
        let max_distance = self.config.max_distance as f64;
        let mut objects = Vec::with_capacity(boxes.len());
        let mut created = 0;

        for bbox in boxes {
            let pos = bbox.centroid();

            let track_id = match self.matcher.find(pos, self.store.tracks(), max_distance) {
                Some(idx) => {
                    let id = self.store.update(idx, pos);
                    trace!(id = %id, x = pos.x, y = pos.y, "detection matched");
                    id
                }
                None => {
                    let id = self.store.create(pos);
                    debug!(id = %id, x = pos.x, y = pos.y, "new track");
                    created += 1;
                    id
                }
            };

            objects.push(TrackedObject {
                bbox: *bbox,
                track_id,
            });
        }

        let confirmed: Vec<TrackId> = objects.iter().map(|o| o.track_id).collect();
        let dropped = self.store.prune(&confirmed, &self.policy);

        trace!(
            detections = boxes.len(),
            created,
            dropped,
            live = self.store.len(),
            "tracker updated"
        );

        objects
    }
}

impl<M: Matcher, P: PrunePolicy> crate::Tracking for Tracker<M, P> {
    #[inline]
    fn update(&mut self, boxes: &[BBox]) -> Vec<TrackedObject> {
        Tracker::<M, P>::update(self, boxes)
    }

    #[inline]
    fn tracks(&self) -> &[Track] {
        self.store.tracks()
    }
}
