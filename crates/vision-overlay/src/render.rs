//! Turns an [`OverlayRequest`] into an [`OverlayReport`], one item at a time.

use log::{debug, warn};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::core::{
    capitalize, describe_face, descriptive_percentage, rect_origin_relative_to_frame,
    rect_relative_to_frame, to_sentence, FaceSummary, FormatError, ImageFrame, ObjectHierarchy,
};
use crate::io::{
    FaceInput, FaceReport, ImageTypeReport, LandmarkReport, ObjectReport, OverlayReport,
    OverlayRequest, RegionInput, RegionReport, RenderOptions,
};

/// Render every detection in `request`.
///
/// A face or region whose geometry cannot be rendered is reported with its
/// error; the remaining items are still rendered.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(request),
        fields(faces = request.faces.len(), regions = request.regions.len())
    )
)]
pub fn render(request: &OverlayRequest) -> OverlayReport {
    let frame = request.image;
    let faces = request
        .faces
        .iter()
        .enumerate()
        .map(|(index, face)| render_face(index, face, frame, &request.options))
        .collect();
    let regions = request
        .regions
        .iter()
        .enumerate()
        .map(|(index, region)| render_region(index, region, frame, &request.options))
        .collect();
    let objects = request.objects.iter().map(render_object).collect();
    let image_type = request.image_type.map(|t| ImageTypeReport {
        clip_art: t.clip_art_description().to_string(),
        line_drawing: t.line_drawing_description().to_string(),
    });

    let report = OverlayReport {
        image: frame,
        faces,
        regions,
        objects,
        image_type,
    };
    debug!(
        "rendered {} faces, {} regions ({} failed)",
        report.faces.len(),
        report.regions.len(),
        report.error_count()
    );
    report
}

fn face_overlay(
    face: &FaceInput,
    frame: ImageFrame,
    options: &RenderOptions,
) -> Result<(FaceSummary, Vec<LandmarkReport>), FormatError> {
    let summary = describe_face(&face.rectangle, frame, face.emotion.as_ref())?;
    let landmarks = match &face.landmarks {
        Some(lm) if options.landmarks => lm
            .relative_css(&face.rectangle)?
            .into_iter()
            .map(|(name, pos)| LandmarkReport {
                name: name.to_string(),
                css: pos.to_css(),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok((summary, landmarks))
}

fn render_face(
    index: usize,
    face: &FaceInput,
    frame: ImageFrame,
    options: &RenderOptions,
) -> FaceReport {
    match face_overlay(face, frame, options) {
        Ok((summary, landmarks)) => FaceReport {
            index,
            summary: Some(summary),
            landmarks,
            error: None,
        },
        Err(err) => {
            warn!("face {index} not renderable: {err}");
            FaceReport {
                index,
                summary: None,
                landmarks: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// `(description, css)` for one region.
fn region_overlay(
    region: &RegionInput,
    frame: ImageFrame,
    options: &RenderOptions,
) -> Result<(String, String), FormatError> {
    let rect = region.bounding_box.to_rectangle()?;
    let pos = if options.include_size {
        rect_relative_to_frame(&rect, frame)?
    } else {
        rect_origin_relative_to_frame(&rect, frame)?
    };
    Ok((region.bounding_box.describe()?, pos.to_css()))
}

fn render_region(
    index: usize,
    region: &RegionInput,
    frame: ImageFrame,
    options: &RenderOptions,
) -> RegionReport {
    let label = region.label.as_deref().map(to_sentence);
    match region_overlay(region, frame, options) {
        Ok((description, css)) => RegionReport {
            index,
            label,
            description: Some(description),
            css: Some(css),
            error: None,
        },
        Err(err) => {
            warn!("region {index} not renderable: {err}");
            RegionReport {
                index,
                label,
                description: None,
                css: None,
                error: Some(err.to_string()),
            }
        }
    }
}

fn render_object(object: &ObjectHierarchy) -> ObjectReport {
    ObjectReport {
        name: capitalize(&object.name),
        confidence: descriptive_percentage(object.confidence),
        hierarchy: object
            .flatten()
            .into_iter()
            .map(|o| capitalize(&o.name))
            .collect(),
    }
}
