//! Human-readable labels and per-face summaries.

use serde::{Deserialize, Serialize};

use crate::css::rect_relative_to_frame;
use crate::format::descriptive_percentage;
use crate::{EmotionScores, FormatError, ImageFrame, Rectangle};

/// Label for the clip-art classification level (0..=3).
pub fn clip_art_description(code: i32) -> &'static str {
    match code {
        0 => "Non ClipArt",
        1 => "Ambiguous",
        2 => "Normal ClipArt",
        3 => "Good ClipArt",
        _ => "Unknown",
    }
}

/// Label for the line-drawing classification level (0..=1).
pub fn line_drawing_description(code: i32) -> &'static str {
    match code {
        0 => "Non LineDrawing",
        1 => "LineDrawing",
        _ => "Unknown",
    }
}

/// Image-type classification codes as reported by the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageType {
    pub clip_art_type: i32,
    pub line_drawing_type: i32,
}

impl ImageType {
    pub fn clip_art_description(&self) -> &'static str {
        clip_art_description(self.clip_art_type)
    }

    pub fn line_drawing_description(&self) -> &'static str {
        line_drawing_description(self.line_drawing_type)
    }
}

/// A detected object class and its chain of more general parents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectHierarchy {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub parent: Option<Box<ObjectHierarchy>>,
}

impl ObjectHierarchy {
    /// This node followed by its ancestors, nearest first.
    pub fn flatten(&self) -> Vec<&ObjectHierarchy> {
        std::iter::successors(Some(self), |node| node.parent.as_deref()).collect()
    }
}

/// One row of a face's emotion table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionLine {
    pub name: String,
    pub score: String,
}

/// Display-ready text for one detected face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSummary {
    pub description: String,
    pub css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotions: Vec<EmotionLine>,
}

/// Compose dimensions, placement and (when scored) emotions for a face.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn describe_face(
    face: &Rectangle,
    frame: ImageFrame,
    emotion: Option<&EmotionScores>,
) -> Result<FaceSummary, FormatError> {
    let css = rect_relative_to_frame(face, frame)?.to_css();
    let (dominant_emotion, emotions): (Option<String>, Vec<EmotionLine>) = match emotion {
        Some(scores) => (
            Some(scores.dominant().display_label().to_string()),
            scores
                .ranked()
                .into_iter()
                .map(|(name, score)| EmotionLine {
                    name: name.to_string(),
                    score: descriptive_percentage(score),
                })
                .collect(),
        ),
        None => (None, Vec::new()),
    };
    Ok(FaceSummary {
        description: face.describe(),
        css,
        dominant_emotion,
        emotions,
    })
}
