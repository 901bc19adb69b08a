//! Core geometry and text normalization for vision-analysis overlays.
//!
//! Raw detections (face rectangles, polygon regions, emotion scores, facial
//! landmarks, classification codes) go in; percentage-based CSS
//! declarations and display strings come out. The crate is purely
//! computational: no I/O, no image decoding, no provider SDK types.

mod css;
mod describe;
mod emotion;
mod error;
mod format;
mod geometry;
mod landmarks;
mod logger;

pub use css::{
    point_relative_to_frame, point_relative_to_rect, rect_origin_relative_to_frame,
    rect_relative_to_frame, RelativePosition, RelativeSize,
};
pub use describe::{
    clip_art_description, describe_face, line_drawing_description, EmotionLine, FaceSummary,
    ImageType, ObjectHierarchy,
};
pub use emotion::{dominant_emotion, ranked_distribution, Emotion, EmotionScores};
pub use error::{Axis, FormatError};
pub use format::{
    capitalize, descriptive_percentage, percentage, ratio_to_percentage_string,
    to_percentage_string, to_sentence, truncate, PERCENT_PRECISION,
};
pub use geometry::{parse_box, BoxShape, Coordinate, ImageFrame, Polygon8, Rectangle};
pub use landmarks::{FaceLandmarks, LandmarkName};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_for_targets, init_with_level, DEFAULT_TARGET_PREFIX};
