use crate::track::TrackedObject;
use crate::zone::Zone;

/// Number of tracked centroids inside each zone, one entry per zone.
///
/// Zones may overlap; an object inside several zones is counted in each
/// of them.
pub fn count(objects: &[TrackedObject], zones: &[Zone]) -> Vec<usize> {
    let centroids: Vec<_> = objects.iter().map(TrackedObject::centroid).collect();

    zones
        .iter()
        .map(|zone| centroids.iter().filter(|c| zone.contains(c)).count())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;
    use crate::track::TrackId;

    fn object(cx: i32, cy: i32, id: u64) -> TrackedObject {
        TrackedObject {
            bbox: BBox::centered(cx, cy, 4, 4),
            track_id: TrackId(id),
        }
    }

    fn zone(l: i32, t: i32, r: i32, b: i32) -> Zone {
        Zone::new(l, t, r, b).unwrap()
    }

    #[test]
    fn disjoint_zones() {
        let zones = [zone(0, 0, 10, 10), zone(20, 20, 30, 30)];

        assert_eq!(count(&[object(25, 25, 0)], &zones), vec![0, 1]);
    }

    #[test]
    fn overlapping_zones_count_twice() {
        let zones = [zone(0, 0, 10, 10), zone(5, 5, 15, 15)];

        assert_eq!(count(&[object(7, 7, 0)], &zones), vec![1, 1]);
    }

    #[test]
    fn objects_outside_every_zone() {
        let zones = [zone(0, 0, 10, 10)];

        assert_eq!(count(&[object(50, 50, 0), object(11, 0, 1)], &zones), vec![0]);
    }

    #[test]
    fn shared_track_id_counts_per_object() {
        let zones = [zone(0, 0, 10, 10)];

        assert_eq!(count(&[object(2, 2, 3), object(4, 4, 3)], &zones), vec![2]);
    }

    #[test]
    fn no_zones() {
        assert!(count(&[object(1, 1, 0)], &[]).is_empty());
    }
}
