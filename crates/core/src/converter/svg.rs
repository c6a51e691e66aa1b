//! SVG Converter - renders a decoded drawing as an SVG page.

use std::io::Write;

use crate::emitter::{Drawing, Polyline};
use crate::error::Result;

/// SVG Converter - writes one `<polyline>` per decoded polyline, in order.
pub struct SvgConverter<W: Write> {
    /// Output writer
    outfp: W,
}

impl<W: Write> SvgConverter<W> {
    /// Create a new SVG converter.
    pub const fn new(outfp: W) -> Self {
        Self { outfp }
    }

    /// Write a complete SVG document for `drawing`.
    pub fn receive_drawing(&mut self, drawing: &Drawing) -> Result<()> {
        self.write_header(drawing.width, drawing.height)?;
        for polyline in &drawing.polylines {
            self.write_polyline(polyline)?;
        }
        self.write_footer(drawing.width, drawing.height)?;
        self.outfp.flush()?;
        Ok(())
    }

    fn write_header(&mut self, width: f64, height: f64) -> Result<()> {
        write!(
            self.outfp,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{}\" width=\"{}\">",
            height, width
        )?;
        write!(self.outfp, "<g id=\"p1\" style=\"display:inline\">")?;
        Ok(())
    }

    fn write_polyline(&mut self, polyline: &Polyline) -> Result<()> {
        write!(
            self.outfp,
            "<polyline style=\"fill:none;stroke:{};stroke-width:{:.3};opacity:{}\" points=\"",
            polyline.color, polyline.width, polyline.opacity
        )?;
        for (x, y) in &polyline.points {
            write!(self.outfp, "{:.3},{:.3} ", x, y)?;
        }
        writeln!(self.outfp, "\" />")?;
        Ok(())
    }

    /// Transparent overlay rect over the page, then close the page group.
    fn write_footer(&mut self, width: f64, height: f64) -> Result<()> {
        write!(
            self.outfp,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill-opacity=\"0\"/>",
            width, height
        )?;
        write!(self.outfp, "</g></svg>")?;
        Ok(())
    }

    /// Consume the converter and return the writer.
    pub fn into_inner(self) -> W {
        self.outfp
    }
}

/// Render `drawing` to an SVG string.
pub fn render_svg(drawing: &Drawing) -> Result<String> {
    let mut converter = SvgConverter::new(Vec::new());
    converter.receive_drawing(drawing)?;
    Ok(String::from_utf8_lossy(&converter.into_inner()).into_owned())
}
