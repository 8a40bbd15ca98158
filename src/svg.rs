//! SVG serialization of a drawing
//!
//! Emits SVG 1.1 markup in the `http://www.w3.org/2000/svg` namespace,
//! one element per primitive, with the canvas pixel size as both the
//! element size and the viewBox.

use crate::drawing::{Drawing, Primitive};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

fn element_for(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1,
            y1,
            x2,
            y2,
            color.to_hex(),
            width
        ),
        Primitive::Circle { cx, cy, r, fill } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            cx,
            cy,
            r,
            fill.to_hex()
        ),
        Primitive::Rect {
            x,
            y,
            width,
            height,
            stroke,
            stroke_width,
            dash,
            opacity,
        } => {
            let dash_attr = match dash {
                Some((on, off)) => format!(r#" stroke-dasharray="{on},{off}""#),
                None => String::new(),
            };
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"{} opacity="{}"/>"#,
                x,
                y,
                width,
                height,
                stroke.to_hex(),
                stroke_width,
                dash_attr,
                opacity
            )
        }
    }
}

/// Write a drawing as a standalone SVG document
pub fn write_svg<W: Write>(drawing: &Drawing, writer: &mut W) -> Result<()> {
    let width = drawing.pixel_width();
    let height = drawing.pixel_height();
    debug!(
        "writing SVG, {} primitives on a {}x{} canvas",
        drawing.primitives().len(),
        width,
        height
    );

    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        width, height, width, height
    )?;
    for primitive in drawing.primitives() {
        writeln!(writer, "  {}", element_for(primitive))?;
    }
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Serialize a drawing to an SVG document string
pub fn to_svg_string(drawing: &Drawing) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    write_svg(drawing, &mut buf).expect("in-memory write");
    String::from_utf8(buf).expect("SVG output is valid UTF-8")
}

/// Write a drawing to an SVG file
pub fn write_svg_file<P: AsRef<Path>>(drawing: &Drawing, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_svg(drawing, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LineSpacing, PaperConfig, PaperKind};
    use crate::layout::generate;

    #[test]
    fn test_svg_document_shell() {
        let drawing = generate(&PaperConfig::new(PaperKind::Blank));
        let svg = to_svg_string(&drawing);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"viewBox="0 0 816 1056""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_lined_svg_elements() {
        let drawing = generate(&PaperConfig::new(PaperKind::Lined(LineSpacing::Narrow)));
        let svg = to_svg_string(&drawing);
        assert!(svg.contains(r##"stroke="#0000ff""##));
        // Accent line from the default 0.75 in left margin
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert_eq!(
            svg.matches("<line").count(),
            drawing.primitives().len()
        );
    }

    #[test]
    fn test_margin_guide_attributes() {
        let drawing = generate(&PaperConfig::new(PaperKind::Blank));
        let svg = to_svg_string(&drawing);
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"stroke-dasharray="5,5""#));
        assert!(svg.contains(r#"opacity="0.3""#));
    }
}
