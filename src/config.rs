use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::detection::DetectionFilter;
use crate::error::Error;
use crate::tracker::TrackerConfig;
use crate::zone::Zone;

/// Session configuration: zones, tracker parameters and detection filter.
///
/// ```json
/// {
///   "tracker": { "max_distance": 35.0, "max_history": 30 },
///   "filter": { "classes": [2, 3, 5, 7], "min_confidence": 0.5 },
///   "zones": [
///     { "top_left": [0, 0], "bottom_right": [640, 360] },
///     { "top_left": [640, 0], "bottom_right": [1280, 360] }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub filter: DetectionFilter,
    pub zones: Vec<Zone>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.tracker.validate()?;
        self.filter.validate()?;

        // zones are checked on construction, nothing else to verify
        Ok(())
    }
}
