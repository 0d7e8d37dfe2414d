//! Object Detection Job Contract
//!
//! Defines the shape exchanged between the job producer and the external
//! detection worker. The worker is not part of this crate.

use serde::{Deserialize, Serialize};

/// Represents one unit of object detection work for an asset.
///
/// On the wire the fields are named `id` and `resizePath`. Both are
/// required; a payload missing either one does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionJobRequest {
    /// Unique identifier of the asset.
    pub id: String,
    /// Storage path of the pre-resized variant of the asset.
    pub resize_path: String,
}

impl DetectionJobRequest {
    /// Creates a new job request for the given asset and resized file path.
    pub fn new(id: String, resize_path: String) -> Self {
        Self { id, resize_path }
    }

    /// Encodes the request as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a request from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
