//! High-level facade for the `vision-overlay-*` workspace.
//!
//! This crate provides:
//! - re-exports of the pure formatting core (`vision-overlay-core`)
//! - JSON request/report types for a whole analysed image
//! - [`render`], which turns a request into display-ready overlay strings
//!
//! ## Quickstart
//!
//! ```no_run
//! use vision_overlay::{render, OverlayRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = OverlayRequest::load_json("analysis.json")?;
//! let report = render(&request);
//! for face in &report.faces {
//!     if let Some(summary) = &face.summary {
//!         println!("{}", summary.css);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use vision_overlay_core as core;

pub mod io;
mod render;

pub use io::{
    FaceInput, FaceReport, ImageTypeReport, LandmarkReport, ObjectReport, OverlayIoError,
    OverlayReport, OverlayRequest, RegionInput, RegionReport, RenderOptions,
};
pub use render::render;
pub use vision_overlay_core::{BoxShape, FormatError, ImageFrame, Rectangle};
