//! Percentage-based positioning against an image frame or a parent rectangle.
//!
//! Every output uses `%` units only, so overlays stay aligned however the
//! rendered image is scaled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::ratio_to_percentage_string;
use crate::{Axis, Coordinate, FormatError, ImageFrame, Rectangle};

/// Formatted left/top (and optionally width/height) percentages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativePosition {
    pub left: String,
    pub top: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<RelativeSize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeSize {
    pub width: String,
    pub height: String,
}

impl RelativePosition {
    /// Style declaration, e.g. `"left: 25%; top: 25%; width: 50%; height: 50%;"`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {}; top: {};", self.left, self.top)?;
        if let Some(size) = &self.size {
            write!(f, " width: {}; height: {};", size.width, size.height)?;
        }
        Ok(())
    }
}

fn position(dx: f64, dy: f64, ref_w: f64, ref_h: f64) -> Result<RelativePosition, FormatError> {
    Ok(RelativePosition {
        left: ratio_to_percentage_string(dx, ref_w, Axis::Width)?,
        top: ratio_to_percentage_string(dy, ref_h, Axis::Height)?,
        size: None,
    })
}

/// Position and size of `rect` as fractions of `frame`.
pub fn rect_relative_to_frame(
    rect: &Rectangle,
    frame: ImageFrame,
) -> Result<RelativePosition, FormatError> {
    let fw = frame.width as f64;
    let fh = frame.height as f64;
    let mut pos = position(rect.x, rect.y, fw, fh)?;
    pos.size = Some(RelativeSize {
        width: ratio_to_percentage_string(rect.width, fw, Axis::Width)?,
        height: ratio_to_percentage_string(rect.height, fh, Axis::Height)?,
    });
    Ok(pos)
}

/// Only the top-left corner of `rect` relative to `frame`.
pub fn rect_origin_relative_to_frame(
    rect: &Rectangle,
    frame: ImageFrame,
) -> Result<RelativePosition, FormatError> {
    point_relative_to_frame(&rect.origin(), frame)
}

/// A point relative to the whole image.
pub fn point_relative_to_frame(
    point: &Coordinate,
    frame: ImageFrame,
) -> Result<RelativePosition, FormatError> {
    position(point.x, point.y, frame.width as f64, frame.height as f64)
}

/// A point in the coordinate space of `parent`, e.g. a landmark inside its
/// face rectangle. Independent of the outer image frame.
pub fn point_relative_to_rect(
    point: &Coordinate,
    parent: &Rectangle,
) -> Result<RelativePosition, FormatError> {
    let offset = *point - parent.origin();
    position(offset.x, offset.y, parent.width, parent.height)
}
