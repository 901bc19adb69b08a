//! Bounding-shape value types and their canonical rectangle.

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::FormatError;

/// A 2D point in absolute pixel units.
pub type Coordinate = Point2<f64>;

/// Axis-aligned rectangle in absolute pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a `[x, y, w, h]` box.
    pub fn from_box(b: [f64; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Coordinate {
        Point2::new(self.x, self.y)
    }

    /// `"X: <x>; Y: <y>; W: <w>; H: <h>"`, values printed in their native form.
    pub fn describe(&self) -> String {
        format!(
            "X: {}; Y: {}; W: {}; H: {}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Width and height of the image a relative position is computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub width: u32,
    pub height: u32,
}

impl ImageFrame {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Quadrilateral given as 4 `(x, y)` pairs, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Polygon8(pub [f64; 8]);

impl Polygon8 {
    /// The four corners: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Coordinate; 4] {
        let p = &self.0;
        [
            Point2::new(p[0], p[1]),
            Point2::new(p[2], p[3]),
            Point2::new(p[4], p[5]),
            Point2::new(p[6], p[7]),
        ]
    }

    /// Canonical rectangle anchored at the first point.
    ///
    /// Width and height are the larger of the two opposite edges, so skewed
    /// or slightly rotated quadrilaterals are accepted as they are.
    pub fn to_rectangle(&self) -> Rectangle {
        let [tl, tr, br, bl] = self.corners();
        let top = tr.x - tl.x;
        let bottom = br.x - bl.x;
        let left = bl.y - tl.y;
        let right = br.y - tr.y;
        if top != bottom || left != right {
            debug!(
                "skewed polygon: horizontal edges {top}/{bottom}, vertical edges {left}/{right}"
            );
        }
        Rectangle::new(tl.x, tl.y, top.max(bottom), left.max(right))
    }

    /// `"X: <x>, Y: <y>, MaxW: <w>, MaxH: <h>"` for text regions.
    pub fn describe_extent(&self) -> String {
        let r = self.to_rectangle();
        format!(
            "X: {}, Y: {}, MaxW: {}, MaxH: {}",
            r.x, r.y, r.width, r.height
        )
    }
}

impl TryFrom<&[f64]> for Polygon8 {
    type Error = FormatError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let points: [f64; 8] = values
            .try_into()
            .map_err(|_| FormatError::PolygonLength { got: values.len() })?;
        Ok(Self(points))
    }
}

impl TryFrom<Vec<f64>> for Polygon8 {
    type Error = FormatError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

/// Parse a `"x,y,w,h"` integer box as the vision API encodes it.
pub fn parse_box(encoded: &str) -> Result<Rectangle, FormatError> {
    let parse_err = |reason: String| {
        debug!("cannot parse bounding box {encoded:?}: {reason}");
        FormatError::Parse {
            input: encoded.to_string(),
            reason,
        }
    };

    let tokens: Vec<&str> = encoded.split(',').collect();
    if tokens.len() != 4 {
        return Err(parse_err(format!("expected 4 values, got {}", tokens.len())));
    }

    let mut values = [0f64; 4];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        let v: i64 = token
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("{token:?} is not an integer ({e})")))?;
        *slot = v as f64;
    }
    Ok(Rectangle::from_box(values))
}

/// Any of the bounding shapes a detection provider hands out.
///
/// Deserialized untagged, first match wins. The array forms come before
/// `Rect` because a derived struct also accepts a `[x, y, w, h]` sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxShape {
    Polygon(Polygon8),
    Box4([f64; 4]),
    Rect(Rectangle),
    Encoded(String),
}

impl BoxShape {
    /// Normalize to the canonical rectangle.
    pub fn to_rectangle(&self) -> Result<Rectangle, FormatError> {
        match self {
            BoxShape::Rect(r) => Ok(*r),
            BoxShape::Polygon(p) => Ok(p.to_rectangle()),
            BoxShape::Box4(b) => Ok(Rectangle::from_box(*b)),
            BoxShape::Encoded(s) => parse_box(s),
        }
    }

    /// Human-readable extent; polygons keep their `MaxW`/`MaxH` wording.
    pub fn describe(&self) -> Result<String, FormatError> {
        match self {
            BoxShape::Polygon(p) => Ok(p.describe_extent()),
            other => Ok(other.to_rectangle()?.describe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_and_equivalent_polygon_agree() {
        let (x, y, w, h) = (12.0, 30.0, 140.0, 75.0);
        let from_box = Rectangle::from_box([x, y, w, h]);
        let poly = Polygon8([x, y, x + w, y, x + w, y + h, x, y + h]);
        assert_eq!(poly.to_rectangle(), from_box);
    }

    #[test]
    fn skewed_polygon_takes_longer_edges() {
        // top edge 100, bottom edge 110; left edge 40, right edge 45
        let poly = Polygon8([10.0, 20.0, 110.0, 22.0, 115.0, 67.0, 5.0, 60.0]);
        let r = poly.to_rectangle();
        assert_eq!(r, Rectangle::new(10.0, 20.0, 110.0, 45.0));
    }

    #[test]
    fn polygon_from_slice_checks_length() {
        let short = [1.0, 2.0, 3.0];
        assert_eq!(
            Polygon8::try_from(&short[..]).unwrap_err(),
            FormatError::PolygonLength { got: 3 }
        );
        let ok = [0.0, 0.0, 4.0, 0.0, 4.0, 2.0, 0.0, 2.0];
        assert!(Polygon8::try_from(&ok[..]).is_ok());
    }

    #[test]
    fn parse_box_accepts_four_integers() {
        assert_eq!(
            parse_box("10,20,30,40").unwrap(),
            Rectangle::new(10.0, 20.0, 30.0, 40.0)
        );
        assert_eq!(
            parse_box(" 1, 2 ,3,4 ").unwrap(),
            Rectangle::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn parse_box_rejects_wrong_count() {
        for bad in ["", "1,2,3", "1,2,3,4,5"] {
            assert!(
                matches!(parse_box(bad), Err(FormatError::Parse { .. })),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn parse_box_rejects_non_integers() {
        for bad in ["1,2,x,4", "1.5,2,3,4", "1,,3,4"] {
            assert!(
                matches!(parse_box(bad), Err(FormatError::Parse { .. })),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn description_keeps_native_numbers() {
        assert_eq!(
            Rectangle::new(10.0, 20.0, 30.0, 40.0).describe(),
            "X: 10; Y: 20; W: 30; H: 40"
        );
        assert_eq!(
            Rectangle::new(1.5, 2.0, 3.25, 4.0).describe(),
            "X: 1.5; Y: 2; W: 3.25; H: 4"
        );
    }

    #[test]
    fn polygon_extent_description() {
        let poly = Polygon8([5.0, 6.0, 25.0, 6.0, 25.0, 16.0, 5.0, 16.0]);
        assert_eq!(poly.describe_extent(), "X: 5, Y: 6, MaxW: 20, MaxH: 10");
    }

    #[test]
    fn every_shape_normalizes() {
        let expected = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let shapes = [
            BoxShape::Rect(expected),
            BoxShape::Box4([1.0, 2.0, 3.0, 4.0]),
            BoxShape::Polygon(Polygon8([1.0, 2.0, 4.0, 2.0, 4.0, 6.0, 1.0, 6.0])),
            BoxShape::Encoded("1,2,3,4".into()),
        ];
        for shape in &shapes {
            assert_eq!(shape.to_rectangle().unwrap(), expected, "{shape:?}");
        }
    }

    #[test]
    fn shapes_deserialize_untagged() {
        let shapes: Vec<BoxShape> = serde_json::from_str(
            r#"[
                {"x": 1, "y": 2, "width": 3, "height": 4},
                [1, 2, 4, 2, 4, 6, 1, 6],
                [1, 2, 3, 4],
                "1,2,3,4"
            ]"#,
        )
        .unwrap();
        assert!(matches!(shapes[0], BoxShape::Rect(_)));
        assert!(matches!(shapes[1], BoxShape::Polygon(_)));
        assert!(matches!(shapes[2], BoxShape::Box4(_)));
        assert!(matches!(shapes[3], BoxShape::Encoded(_)));
    }

    #[test]
    fn four_number_array_is_a_box_not_a_rect() {
        let shape: BoxShape = serde_json::from_str("[1, 2, 3, 4]").unwrap();
        assert_eq!(shape, BoxShape::Box4([1.0, 2.0, 3.0, 4.0]));
        let shape: BoxShape =
            serde_json::from_str(r#"{"x": 1, "y": 2, "width": 3, "height": 4}"#).unwrap();
        assert_eq!(shape, BoxShape::Rect(Rectangle::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn odd_length_array_is_not_a_shape() {
        assert!(serde_json::from_str::<BoxShape>("[1, 2, 3, 4, 5, 6]").is_err());
    }
}
