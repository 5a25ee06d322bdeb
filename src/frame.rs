use serde_derive::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::error::Error;

/// Detector output for one video frame
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Frame {
    #[serde(default)]
    pub index: u64,
    pub detections: Vec<Detection>,
}

impl Frame {
    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.iter().try_for_each(Detection::validate)
    }

    /// Parses one line of a JSON-lines detection dump.
    pub fn from_json_line(line: &str) -> Result<Self, Error> {
        let frame: Frame = serde_json::from_str(line)?;
        frame.validate()?;

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line() {
        let frame = Frame::from_json_line(
            r#"{"index":3,"detections":[{"bbox":[0,0,10,10],"p":0.9,"c":2}]}"#,
        )
        .unwrap();

        assert_eq!(frame.index, 3);
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn rejects_malformed_detection() {
        let res = Frame::from_json_line(r#"{"detections":[{"bbox":[10,0,0,10],"p":0.9,"c":2}]}"#);

        assert!(matches!(res, Err(Error::InvalidBBox(..))));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(Frame::from_json_line("{"), Err(Error::Json(_))));
    }
}
