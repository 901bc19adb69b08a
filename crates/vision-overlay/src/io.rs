//! JSON request and report types for overlay rendering.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{
    BoxShape, EmotionScores, FaceLandmarks, FaceSummary, ImageFrame, ImageType, ObjectHierarchy,
    Rectangle,
};

#[derive(thiserror::Error, Debug)]
pub enum OverlayIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_true() -> bool {
    true
}

/// Which parts of the overlay to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit `width`/`height` for regions, not only their top-left corner.
    #[serde(default = "default_true")]
    pub include_size: bool,
    /// Position every landmark inside its face rectangle.
    #[serde(default = "default_true")]
    pub landmarks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_size: true,
            landmarks: true,
        }
    }
}

/// One detected face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceInput {
    pub rectangle: Rectangle,
    #[serde(default)]
    pub emotion: Option<EmotionScores>,
    #[serde(default)]
    pub landmarks: Option<FaceLandmarks>,
}

/// A text line, word or object region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionInput {
    #[serde(default)]
    pub label: Option<String>,
    pub bounding_box: BoxShape,
}

/// Detections for a single analysed image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayRequest {
    pub image: ImageFrame,
    #[serde(default)]
    pub faces: Vec<FaceInput>,
    #[serde(default)]
    pub regions: Vec<RegionInput>,
    #[serde(default)]
    pub objects: Vec<ObjectHierarchy>,
    #[serde(default)]
    pub image_type: Option<ImageType>,
    #[serde(default)]
    pub options: RenderOptions,
}

impl OverlayRequest {
    /// Load a JSON request from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, OverlayIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this request to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), OverlayIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkReport {
    pub name: String,
    pub css: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceReport {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<FaceSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<LandmarkReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionReport {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReport {
    pub name: String,
    pub confidence: String,
    /// The object and its parents, nearest first.
    pub hierarchy: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTypeReport {
    pub clip_art: String,
    pub line_drawing: String,
}

/// Rendered overlay for one request. Items that could not be rendered
/// carry an `error` and no geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayReport {
    pub image: ImageFrame,
    #[serde(default)]
    pub faces: Vec<FaceReport>,
    #[serde(default)]
    pub regions: Vec<RegionReport>,
    #[serde(default)]
    pub objects: Vec<ObjectReport>,
    #[serde(default)]
    pub image_type: Option<ImageTypeReport>,
}

impl OverlayReport {
    /// Number of faces and regions that failed to render.
    pub fn error_count(&self) -> usize {
        self.faces.iter().filter(|f| f.error.is_some()).count()
            + self.regions.iter().filter(|r| r.error.is_some()).count()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, OverlayIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), OverlayIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
