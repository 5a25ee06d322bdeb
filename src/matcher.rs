//! Strategies for associating a detection centroid with a known track.
//!
//! Matchers only pick a candidate; they never mutate the store. Every
//! strategy compares against the last recorded centroid of each track and
//! only accepts tracks that are strictly closer than the threshold.

use nalgebra as na;

use crate::track::Track;
use crate::Point;

pub trait Matcher {
    /// Index into `tracks` of the track `pos` belongs to, if any.
    fn find(&self, pos: Point, tracks: &[Track], max_distance: f64) -> Option<usize>;
}

/// Takes the first track in store order that is within `max_distance`,
/// even if a later one is closer. Under dense traffic this can hand a
/// detection the identity of a neighbouring object.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl Matcher for FirstFit {
    fn find(&self, pos: Point, tracks: &[Track], max_distance: f64) -> Option<usize> {
        tracks
            .iter()
            .position(|t| distance(&pos, &t.position()) < max_distance)
    }
}

/// Takes the closest track within `max_distance`. On equal distances the
/// earlier track in store order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl Matcher for NearestNeighbor {
    fn find(&self, pos: Point, tracks: &[Track], max_distance: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, t) in tracks.iter().enumerate() {
            let dist = distance(&pos, &t.position());

            if dist >= max_distance {
                continue;
            }

            match best {
                Some((_, d)) if d <= dist => (),
                _ => best = Some((idx, dist)),
            }
        }

        best.map(|(idx, _)| idx)
    }
}

/// Euclidean distance between two pixel positions.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    na::distance(
        &na::Point2::new(a.x as f64, a.y as f64),
        &na::Point2::new(b.x as f64, b.y as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackId;

    fn tracks(points: &[(i32, i32)]) -> Vec<Track> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Track::new(TrackId(i as u64), Point::new(x, y), 30))
            .collect()
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(&Point::new(0, 0), &Point::new(3, 4)), 5.0);
    }

    #[test]
    fn first_fit_prefers_store_order() {
        let tracks = tracks(&[(20, 0), (2, 0)]);

        assert_eq!(FirstFit.find(Point::new(0, 0), &tracks, 35.0), Some(0));
    }

    #[test]
    fn nearest_neighbor_prefers_closest() {
        let tracks = tracks(&[(20, 0), (2, 0)]);

        assert_eq!(NearestNeighbor.find(Point::new(0, 0), &tracks, 35.0), Some(1));
    }

    #[test]
    fn nearest_neighbor_ties_go_to_earlier_track() {
        let tracks = tracks(&[(-5, 0), (5, 0)]);

        assert_eq!(NearestNeighbor.find(Point::new(0, 0), &tracks, 35.0), Some(0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let tracks = tracks(&[(35, 0)]);

        assert_eq!(FirstFit.find(Point::new(0, 0), &tracks, 35.0), None);
        assert_eq!(NearestNeighbor.find(Point::new(0, 0), &tracks, 35.0), None);
        assert_eq!(FirstFit.find(Point::new(1, 0), &tracks, 35.0), Some(0));
    }

    #[test]
    fn no_tracks_no_match() {
        assert_eq!(FirstFit.find(Point::new(0, 0), &[], 35.0), None);
        assert_eq!(NearestNeighbor.find(Point::new(0, 0), &[], 35.0), None);
    }
}
