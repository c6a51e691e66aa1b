//! Pen model: how each tablet tool maps a stroke's raw width to a rendered
//! width, opacity and color.
//!
//! The width formulas are calibration constants measured against the device
//! output and are kept exactly as the device tools render them.

use crate::model::color::{ERASER_COLOR_INDEX, HIGHLIGHT_COLOR_INDEX};
use crate::model::{ColorMode, Segment};

/// Every table width is divided by this to normalize for paper size.
pub const WIDTH_SCALE: f64 = 2.3;

/// Dynamic pens restyle their polyline every this many segments.
pub const SUBDIVISION: usize = 8;

/// Drawing tool that produced a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pen {
    Brush,
    Pencil,
    /// Pen ids 2 and 4
    Fineliner,
    Marker,
    Highlighter,
    Eraser,
    SharpPencil,
    EraseArea,
    /// Unrecognized id, rendered with the default style
    Other(u32),
}

impl Pen {
    pub const fn from_id(id: u32) -> Self {
        match id {
            0 => Pen::Brush,
            1 => Pen::Pencil,
            2 | 4 => Pen::Fineliner,
            3 => Pen::Marker,
            5 => Pen::Highlighter,
            6 => Pen::Eraser,
            7 => Pen::SharpPencil,
            8 => Pen::EraseArea,
            other => Pen::Other(other),
        }
    }

    /// Whether width/opacity are recomputed along the stroke.
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Pen::Brush | Pen::Pencil)
    }
}

/// Resolved rendering parameters for a stroke or a run of segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub width: f64,
    pub opacity: f64,
    /// Index into the active color table, after pen overrides
    pub color_index: u32,
}

/// Stroke-level style for `pen`.
///
/// For dynamic pens this is the style of the stroke before its first segment
/// is seen; `segment_style` supplies the per-run values.
pub fn stroke_style(pen: Pen, color_index: u32, base_width: f32, mode: ColorMode) -> PenStyle {
    let w = f64::from(base_width);
    let mut color_index = color_index;
    let (width, opacity) = match pen {
        Pen::Brush | Pen::Pencil => (w, 1.0),
        Pen::Fineliner => (32.0 * w * w - 116.0 * w + 107.0, 1.0),
        Pen::Marker => (64.0 * w - 112.0, 0.9),
        Pen::Highlighter => {
            if mode == ColorMode::Annotated {
                color_index = HIGHLIGHT_COLOR_INDEX;
            }
            (30.0, 0.2)
        }
        Pen::Eraser => {
            color_index = ERASER_COLOR_INDEX;
            (1280.0 * w * w - 4800.0 * w + 4510.0, 1.0)
        }
        Pen::SharpPencil => (16.0 * w - 27.0, 0.9),
        Pen::EraseArea => (w, 0.0),
        Pen::Other(_) => (w, 1.0),
    };

    PenStyle {
        width: width / WIDTH_SCALE,
        opacity,
        color_index,
    }
}

/// Width and opacity of the run starting at `segment`, for dynamic pens.
///
/// Returns `None` for pens with a fixed style.
pub fn segment_style(pen: Pen, base_width: f32, segment: &Segment) -> Option<(f64, f64)> {
    let w = f64::from(base_width);
    let tilt = f64::from(segment.tilt);
    let pressure = f64::from(segment.pressure);
    match pen {
        Pen::Brush => {
            let width = (5.0 * tilt) * (6.0 * w - 10.0) * (1.0 + 2.0 * pressure.powi(3));
            Some((width / WIDTH_SCALE, 1.0))
        }
        Pen::Pencil => {
            let width = (10.0 * tilt - 2.0) * (8.0 * w - 14.0);
            let opacity = (pressure - 0.2) * (pressure - 0.2);
            Some((width / WIDTH_SCALE, opacity))
        }
        _ => None,
    }
}

/// Whether segment `index` of a dynamic stroke opens a new run.
pub const fn starts_run(index: usize) -> bool {
    index % SUBDIVISION == 0
}
