use crate::error::Error;
use crate::Point;
use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Left-top-right-bottom pixel box, contains left top and right bottom corners
///
/// Boxes are expected to satisfy `x1 <= x2` and `y1 <= y2`. The tracking code
/// never checks this; use [`BBox::try_ltrb`] or [`BBox::validate`] where boxes
/// enter the crate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BBox([i32; 4]);

impl From<BBox> for [i32; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.0
    }
}

impl BBox {
    #[inline]
    pub fn ltrb(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        BBox([x1, y1, x2, y2])
    }

    pub fn try_ltrb(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, Error> {
        let bbox = Self::ltrb(x1, y1, x2, y2);
        bbox.validate()?;

        Ok(bbox)
    }

    /// Box of the given size whose centroid is exactly `(cx, cy)`.
    #[inline]
    pub fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        let (hw, hh) = (width / 2, height / 2);

        BBox([cx - hw, cy - hh, cx + hw, cy + hh])
    }

    pub fn validate(&self) -> Result<(), Error> {
        let [x1, y1, x2, y2] = self.0;

        if x1 > x2 || y1 > y2 {
            return Err(Error::InvalidBBox(x1, y1, x2, y2));
        }

        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32; 4] {
        &self.0
    }

    #[inline(always)]
    pub fn left(&self) -> i32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> i32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> i32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> i32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.0[2] - self.0[0]
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.0[3] - self.0[1]
    }

    /// Integer midpoint of the box. Division truncates toward zero, so for
    /// boxes reaching past the top-left edge of the frame an odd negative sum
    /// rounds up: `[-3, -3, 0, 0]` has its centroid at `(-1, -1)`, where floor
    /// division would give `(-2, -2)`.
    #[inline]
    pub fn centroid(&self) -> Point {
        na::Point2::new(midpoint(self.0[0], self.0[2]), midpoint(self.0[1], self.0[3]))
    }
}

#[inline(always)]
fn midpoint(a: i32, b: i32) -> i32 {
    // widened so that boxes near i32::MAX do not overflow
    ((a as i64 + b as i64) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_truncates() {
        let c = BBox::ltrb(0, 0, 11, 5).centroid();
        assert_eq!((c.x, c.y), (5, 2));

        let c = BBox::ltrb(-3, -3, 0, 0).centroid();
        assert_eq!((c.x, c.y), (-1, -1));

        // partially off-frame on the left only
        let c = BBox::ltrb(-5, 0, 2, 4).centroid();
        assert_eq!((c.x, c.y), (-1, 2));
    }

    #[test]
    fn centered_box_keeps_centroid() {
        let bbox = BBox::centered(6, 6, 4, 4);
        assert_eq!(bbox, BBox::ltrb(4, 4, 8, 8));
        assert_eq!(bbox.centroid(), na::Point2::new(6, 6));
    }

    #[test]
    fn inverted_box_is_rejected() {
        assert!(BBox::try_ltrb(10, 0, 0, 10).is_err());
        assert!(BBox::try_ltrb(0, 10, 10, 0).is_err());
        assert!(BBox::try_ltrb(3, 3, 3, 3).is_ok());
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&BBox::ltrb(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "[1,2,3,4]");
    }
}
