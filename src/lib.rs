//! Centroid tracking and zone occupancy for traffic signal control.
//!
//! Per frame, detector boxes go through [`Tracker::update`], the tracked
//! objects are counted per zone with [`occupancy::count`] and the busiest
//! zone is picked with [`selector::select`]. [`Scene`] wires the three
//! together for one video stream.

pub mod bbox;
pub mod config;
pub mod detection;
pub mod error;
pub mod frame;
pub mod matcher;
pub mod occupancy;
pub mod prune;
pub mod scene;
pub mod selector;
pub mod store;
pub mod tracker;
pub mod zone;

mod circular_queue;
mod track;

pub use bbox::BBox;
pub use config::Config;
pub use detection::Detection;
pub use frame::Frame;
pub use scene::{FrameResult, Scene};
pub use track::{Track, TrackId, TrackedObject};
pub use tracker::{Tracker, TrackerConfig};
pub use zone::Zone;

use nalgebra as na;

/// Pixel position; centroids of boxes and zone corners.
pub type Point = na::Point2<i32>;

pub trait Tracking {
    /// Associates one frame of boxes with tracks, one output per input box.
    fn update(&mut self, boxes: &[BBox]) -> Vec<TrackedObject>;

    /// Live tracks after the last update.
    fn tracks(&self) -> &[Track];
}
