use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::circular_queue::CircularQueue;
use crate::Point;

/// Identity assigned by a track store. Never reused within one store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,

    // consecutive frames without a matching detection
    pub missed: u32,

    history: CircularQueue<Point>,
}

impl Track {
    pub fn new(id: TrackId, pos: Point, max_history: usize) -> Self {
        let mut history = CircularQueue::with_capacity(max_history);
        history.push(pos);

        Self {
            id,
            missed: 0,
            history,
        }
    }

    /// Appends a confirmed centroid and resets the miss counter.
    pub fn update(&mut self, pos: Point) {
        self.history.push(pos);
        self.missed = 0;
    }

    /// Last recorded centroid.
    #[inline]
    pub fn position(&self) -> Point {
        // a track is created with one point and the queue never shrinks
        *self.history.newest().unwrap_or(&Point::origin())
    }

    /// Centroid history, oldest-first.
    #[inline]
    pub fn history(&self) -> impl Iterator<Item = &Point> {
        self.history.iter()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Box of the current frame tagged with the identity it was associated with
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedObject {
    pub bbox: BBox,
    pub track_id: TrackId,
}

impl TrackedObject {
    #[inline]
    pub fn centroid(&self) -> Point {
        self.bbox.centroid()
    }
}
