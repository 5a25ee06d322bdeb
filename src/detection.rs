use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::error::Error;

pub const CLASS_CAR: i32 = 2;
pub const CLASS_MOTORCYCLE: i32 = 3;
pub const CLASS_BUS: i32 = 5;
pub const CLASS_TRUCK: i32 = 7;

/// Contains pixel bbox, class id and confidence of a single detector output
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub bbox: BBox,
    #[serde(rename = "p")]
    pub confidence: f32,
    #[serde(rename = "c")]
    pub class: i32,
}

impl Detection {
    pub fn new(bbox: BBox, class: i32, confidence: f32) -> Self {
        Self {
            bbox,
            confidence,
            class,
        }
    }

    /// Checks the detector output before it is handed to the tracker.
    pub fn validate(&self) -> Result<(), Error> {
        self.bbox.validate()?;

        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::InvalidConfidence(self.confidence));
        }

        Ok(())
    }
}

/// Drops detections the tracker should not see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DetectionFilter {
    /// Accepted class ids, empty means every class
    pub classes: Vec<i32>,

    /// Detections must be strictly more confident than this
    pub min_confidence: f32,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self {
            classes: vec![CLASS_CAR, CLASS_MOTORCYCLE, CLASS_BUS, CLASS_TRUCK],
            min_confidence: 0.5,
        }
    }
}

impl DetectionFilter {
    pub fn accept_all() -> Self {
        Self {
            classes: Vec::new(),
            min_confidence: -1.0,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        // negative thresholds let every confidence through
        if !self.min_confidence.is_finite() || self.min_confidence > 1.0 {
            return Err(Error::InvalidConfig(format!(
                "min_confidence must be a number not above 1, got {}",
                self.min_confidence
            )));
        }

        Ok(())
    }

    /// Confidence check alone, regardless of class.
    #[inline]
    pub fn is_confident(&self, det: &Detection) -> bool {
        det.confidence > self.min_confidence
    }

    #[inline]
    pub fn accepts(&self, det: &Detection) -> bool {
        self.is_confident(det) && (self.classes.is_empty() || self.classes.contains(&det.class))
    }
}

/// Per-frame count of vehicle detections by type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTally {
    pub car: u32,
    pub truck: u32,
    pub motorcycle: u32,
    pub bus: u32,
    pub total: u32,
}

impl ClassTally {
    /// `total` counts every detection, including classes that have no
    /// dedicated slot.
    pub fn from_detections<'a, I: IntoIterator<Item = &'a Detection>>(dets: I) -> Self {
        let mut tally = Self::default();

        for det in dets {
            match det.class {
                CLASS_CAR => tally.car += 1,
                CLASS_BUS => tally.bus += 1,
                CLASS_TRUCK => tally.truck += 1,
                CLASS_MOTORCYCLE => tally.motorcycle += 1,
                _ => (),
            }

            tally.total += 1;
        }

        tally
    }
}
