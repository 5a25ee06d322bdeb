use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::Point;

/// Axis-aligned counting region, bounds inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "RawZone", into = "RawZone")]
pub struct Zone {
    top_left: Point,
    bottom_right: Point,
}

#[derive(Serialize, Deserialize)]
struct RawZone {
    top_left: [i32; 2],
    bottom_right: [i32; 2],
}

impl TryFrom<RawZone> for Zone {
    type Error = Error;

    fn try_from(raw: RawZone) -> Result<Self, Self::Error> {
        let [left, top] = raw.top_left;
        let [right, bottom] = raw.bottom_right;

        Zone::new(left, top, right, bottom)
    }
}

impl From<Zone> for RawZone {
    fn from(zone: Zone) -> Self {
        Self {
            top_left: [zone.left(), zone.top()],
            bottom_right: [zone.right(), zone.bottom()],
        }
    }
}

impl Zone {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, Error> {
        if left > right || top > bottom {
            return Err(Error::InvalidZone {
                left,
                top,
                right,
                bottom,
            });
        }

        Ok(Self {
            top_left: na::Point2::new(left, top),
            bottom_right: na::Point2::new(right, bottom),
        })
    }

    #[inline(always)]
    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    #[inline(always)]
    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    #[inline(always)]
    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    #[inline(always)]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        (self.left()..=self.right()).contains(&p.x) && (self.top()..=self.bottom()).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let zone = Zone::new(0, 0, 10, 10).unwrap();

        assert!(zone.contains(&Point::new(0, 0)));
        assert!(zone.contains(&Point::new(10, 10)));
        assert!(zone.contains(&Point::new(0, 10)));
        assert!(!zone.contains(&Point::new(11, 5)));
        assert!(!zone.contains(&Point::new(5, -1)));
    }

    #[test]
    fn degenerate_zone_is_a_point() {
        let zone = Zone::new(4, 4, 4, 4).unwrap();

        assert!(zone.contains(&Point::new(4, 4)));
        assert!(!zone.contains(&Point::new(4, 5)));
    }

    #[test]
    fn inverted_zone_is_rejected() {
        assert!(matches!(
            Zone::new(10, 0, 0, 10),
            Err(Error::InvalidZone { .. })
        ));
    }

    #[test]
    fn json_corners() {
        let zone: Zone =
            serde_json::from_str(r#"{"top_left":[20,20],"bottom_right":[30,30]}"#).unwrap();
        assert_eq!(zone, Zone::new(20, 20, 30, 30).unwrap());

        let bad = serde_json::from_str::<Zone>(r#"{"top_left":[30,30],"bottom_right":[20,20]}"#);
        assert!(bad.is_err());
    }
}
