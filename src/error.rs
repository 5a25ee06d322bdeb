use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid bbox [{0}, {1}, {2}, {3}]: expected x1 <= x2 and y1 <= y2")]
    InvalidBBox(i32, i32, i32, i32),

    #[error("Invalid zone: top-left ({left}, {top}) is not above-left of bottom-right ({right}, {bottom})")]
    InvalidZone {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    #[error("Confidence {0} is outside of [0, 1]")]
    InvalidConfidence(f32),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}
