//! Primitive emission: turns decoded strokes into styled polylines.

use serde::Serialize;

use crate::model::{ColorMode, ColorTable, Document, Stroke};
use crate::pen::{Pen, segment_style, starts_run, stroke_style};
use crate::transform::{CanvasMapper, Point};

/// An ordered point sequence drawn with one color, width and opacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
    pub points: Vec<Point>,
}

impl Polyline {
    /// Create an empty polyline. Width is floored at 0 and opacity clamped
    /// to [0, 1].
    pub fn new(color: &'static str, width: f64, opacity: f64) -> Self {
        let mut polyline = Self {
            color,
            width: 0.0,
            opacity: 0.0,
            points: Vec::new(),
        };
        polyline.restyle(width, opacity);
        polyline
    }

    /// Replace width and opacity, with the same bounds as `new`.
    pub fn restyle(&mut self, width: f64, opacity: f64) {
        self.width = width.max(0.0);
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// Decoder output: the canvas size plus every polyline in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub polylines: Vec<Polyline>,
}

impl Drawing {
    /// Total number of points across all polylines.
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|p| p.points.len()).sum()
    }
}

/// Accumulates polylines for a document, layer by layer and stroke by stroke.
#[derive(Debug)]
pub struct PrimitiveEmitter {
    mapper: CanvasMapper,
    colors: ColorTable,
    mode: ColorMode,
    polylines: Vec<Polyline>,
}

impl PrimitiveEmitter {
    pub fn new(mapper: CanvasMapper, mode: ColorMode) -> Self {
        Self {
            mapper,
            colors: mode.table(),
            mode,
            polylines: Vec::new(),
        }
    }

    /// Emit every stroke of `doc` in layer order.
    pub fn emit_document(&mut self, doc: &Document) {
        for stroke in doc.strokes() {
            self.emit_stroke(stroke);
        }
    }

    /// Emit the polylines for one stroke.
    ///
    /// Fixed-style pens produce exactly one polyline. Dynamic pens produce one
    /// per run of `SUBDIVISION` segments; each run after the first starts with
    /// the previous run's last point so the path stays connected.
    pub fn emit_stroke(&mut self, stroke: &Stroke) {
        let pen = Pen::from_id(stroke.pen);
        let style = stroke_style(pen, stroke.color_index, stroke.base_width, self.mode);
        let color = self.colors.resolve(style.color_index);
        tracing::trace!(
            "stroke pen={:?} color={} width={:.3} opacity={} segments={}",
            pen,
            color,
            style.width,
            style.opacity,
            stroke.segments.len()
        );

        let mut current = Polyline::new(color, style.width, style.opacity);
        current.points.reserve(stroke.segments.len());
        let mut last: Option<Point> = None;

        for (index, segment) in stroke.segments.iter().enumerate() {
            let point = self.mapper.map(segment.x, segment.y);
            if pen.is_dynamic() && starts_run(index) {
                if let Some((width, opacity)) = segment_style(pen, stroke.base_width, segment) {
                    match last {
                        None => current.restyle(width, opacity),
                        Some(joiner) => {
                            let mut next = Polyline::new(color, width, opacity);
                            next.points.push(joiner);
                            self.polylines.push(std::mem::replace(&mut current, next));
                        }
                    }
                }
            }
            current.points.push(point);
            last = Some(point);
        }

        self.polylines.push(current);
    }

    pub fn finish(self) -> Drawing {
        Drawing {
            width: self.mapper.width(),
            height: self.mapper.height(),
            polylines: self.polylines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_style_bounds() {
        let mut line = Polyline::new("black", -1.0, 2.0);
        assert_eq!(line.width, 0.0);
        assert_eq!(line.opacity, 1.0);

        line.restyle(3.5, -0.25);
        assert_eq!(line.width, 3.5);
        assert_eq!(line.opacity, 0.0);
    }
}
