use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::bbox::BBox;
use crate::config::Config;
use crate::detection::{Detection, DetectionFilter};
use crate::occupancy;
use crate::selector::{self, SignalStatus};
use crate::track::TrackedObject;
use crate::tracker::Tracker;
use crate::zone::Zone;
use crate::Tracking;

/// Everything computed for a single frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrameResult {
    pub tracked: Vec<TrackedObject>,
    pub counts: Vec<usize>,
    pub selected: Option<usize>,
}

impl FrameResult {
    #[inline]
    pub fn signal_status(&self) -> SignalStatus {
        SignalStatus::new(self.selected, self.counts.len())
    }
}

/// One camera view: fixed zones and the tracker of its stream.
pub struct Scene<T = Tracker> {
    zones: Vec<Zone>,
    filter: DetectionFilter,
    tracker: T,
    frames: u64,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        Self::with_tracker(
            config.zones.clone(),
            config.filter.clone(),
            Tracker::new(config.tracker),
        )
    }
}

impl<T: Tracking> Scene<T> {
    pub fn with_tracker(zones: Vec<Zone>, filter: DetectionFilter, tracker: T) -> Self {
        Self {
            zones,
            filter,
            tracker,
            frames: 0,
        }
    }

    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[inline]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Number of frames processed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Filters, tracks, counts and selects for the next frame.
    pub fn process(&mut self, detections: &[Detection]) -> FrameResult {
        let boxes: Vec<BBox> = detections
            .iter()
            .filter(|d| self.filter.accepts(d))
            .map(|d| d.bbox)
            .collect();

        let tracked = self.tracker.update(&boxes);
        let counts = occupancy::count(&tracked, &self.zones);
        let selected = selector::select(&counts);

        debug!(
            frame = self.frames,
            detections = detections.len(),
            accepted = boxes.len(),
            live = self.tracker.tracks().len(),
            ?counts,
            ?selected,
            "frame processed"
        );

        self.frames += 1;

        FrameResult {
            tracked,
            counts,
            selected,
        }
    }
}
