//! PDF drawing operations for paper templates
//!
//! Primitives are converted from device pixels to PDF points (72/96) with
//! the y axis flipped to the PDF bottom-left origin. The page MediaBox
//! carries the physical page size so hard copy matches the on-screen
//! drawing scale.

use crate::constants::{DPI, POINTS_PER_INCH};
use crate::drawing::{Drawing, Primitive};
use crate::error::{PaperError, Result};
use lopdf::{
    Document, Object, ObjectId,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, trace};

/// Scale from device pixels to PDF points
const PX_TO_PT: f64 = POINTS_PER_INCH / DPI;

/// Bezier circle approximation constant
const KAPPA: f64 = 0.552_284_749_831;

/// Name prefix for opacity graphics states added to page resources
const GSTATE_PREFIX: &str = "GSpaper";

fn op(operator: &str, operands: Vec<Object>) -> Operation {
    Operation::new(operator, operands)
}

fn real(value: f64) -> Object {
    (value as f32).into()
}

/// Distinct sub-1.0 opacities used by a drawing, paired with the ExtGState
/// name each one is registered under
fn opacity_gstates(drawing: &Drawing) -> Vec<(String, f64)> {
    let mut states: Vec<(String, f64)> = Vec::new();
    for primitive in drawing.primitives() {
        if let Primitive::Rect { opacity, .. } = primitive {
            if *opacity < 1.0 && !states.iter().any(|(_, o)| o == opacity) {
                states.push((format!("{}{}", GSTATE_PREFIX, states.len()), *opacity));
            }
        }
    }
    states
}

/// Generate the content stream operations for a drawing
pub(crate) fn drawing_operations(drawing: &Drawing, gstates: &[(String, f64)]) -> Vec<Operation> {
    // Page height in points, for the y-axis flip
    let page_height = drawing.pixel_height() * PX_TO_PT;
    let flip = |y_px: f64| page_height - y_px * PX_TO_PT;

    let mut operations = vec![op("q", vec![])];

    for primitive in drawing.primitives() {
        match primitive {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                let (r, g, b) = color.to_normalized();
                operations.push(op("RG", vec![r.into(), g.into(), b.into()]));
                operations.push(op("w", vec![real(width * PX_TO_PT)]));
                operations.push(op("m", vec![real(x1 * PX_TO_PT), real(flip(*y1))]));
                operations.push(op("l", vec![real(x2 * PX_TO_PT), real(flip(*y2))]));
                operations.push(op("S", vec![]));
            }
            Primitive::Circle { cx, cy, r, fill } => {
                let (red, green, blue) = fill.to_normalized();
                operations.push(op("rg", vec![red.into(), green.into(), blue.into()]));
                operations.extend(circle_path(cx * PX_TO_PT, flip(*cy), r * PX_TO_PT));
                operations.push(op("f", vec![]));
            }
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
                // Isolate dash and opacity state from the rest of the stream
                operations.push(op("q", vec![]));
                if *opacity < 1.0 {
                    if let Some((name, _)) = gstates.iter().find(|(_, o)| o == opacity) {
                        operations.push(op("gs", vec![Object::Name(name.as_bytes().to_vec())]));
                    }
                }
                let (r, g, b) = stroke.to_normalized();
                operations.push(op("RG", vec![r.into(), g.into(), b.into()]));
                operations.push(op("w", vec![real(stroke_width * PX_TO_PT)]));
                if let Some((on, off)) = dash {
                    operations.push(op(
                        "d",
                        vec![
                            Object::Array(vec![real(on * PX_TO_PT), real(off * PX_TO_PT)]),
                            0.into(),
                        ],
                    ));
                }
                operations.push(op(
                    "re",
                    vec![
                        real(x * PX_TO_PT),
                        real(flip(y + height)),
                        real(width * PX_TO_PT),
                        real(height * PX_TO_PT),
                    ],
                ));
                operations.push(op("S", vec![]));
                operations.push(op("Q", vec![]));
            }
        }
    }

    operations.push(op("Q", vec![]));
    trace!("generated {} content operations", operations.len());
    operations
}

/// Approximate a full circle with four cubic Bezier segments
fn circle_path(cx: f64, cy: f64, r: f64) -> Vec<Operation> {
    let k = KAPPA * r;
    vec![
        op("m", vec![real(cx + r), real(cy)]),
        op(
            "c",
            vec![
                real(cx + r),
                real(cy + k),
                real(cx + k),
                real(cy + r),
                real(cx),
                real(cy + r),
            ],
        ),
        op(
            "c",
            vec![
                real(cx - k),
                real(cy + r),
                real(cx - r),
                real(cy + k),
                real(cx - r),
                real(cy),
            ],
        ),
        op(
            "c",
            vec![
                real(cx - r),
                real(cy - k),
                real(cx - k),
                real(cy - r),
                real(cx),
                real(cy - r),
            ],
        ),
        op(
            "c",
            vec![
                real(cx + k),
                real(cy - r),
                real(cx + r),
                real(cy - k),
                real(cx + r),
                real(cy),
            ],
        ),
    ]
}

/// Register the drawing's opacity graphics states in the page resources
fn ensure_gstate_resources(
    doc: &mut Document,
    page_id: ObjectId,
    gstates: &[(String, f64)],
) -> Result<()> {
    if gstates.is_empty() {
        return Ok(());
    }

    let mut ext_gstate = lopdf::Dictionary::new();
    for (name, opacity) in gstates {
        ext_gstate.set(
            name.as_bytes(),
            dictionary! {
                "Type" => "ExtGState",
                "CA" => *opacity as f32,
                "ca" => *opacity as f32,
            },
        );
    }

    // Resources may be inline, referenced, or missing entirely
    let resources_ref = match doc.get_object(page_id) {
        Ok(Object::Dictionary(page)) => match page.get(b"Resources") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        },
        _ => {
            return Err(PaperError::DocumentError(format!(
                "page {page_id:?} is not a dictionary"
            )));
        }
    };

    let resources = if let Some(id) = resources_ref {
        match doc.get_object_mut(id)? {
            Object::Dictionary(dict) => dict,
            _ => {
                return Err(PaperError::DocumentError(
                    "referenced Resources is not a dictionary".to_string(),
                ));
            }
        }
    } else {
        let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) else {
            return Err(PaperError::DocumentError(format!(
                "page {page_id:?} is not a dictionary"
            )));
        };
        if page.get(b"Resources").is_err() {
            page.set("Resources", lopdf::Dictionary::new());
        }
        match page.get_mut(b"Resources")? {
            Object::Dictionary(dict) => dict,
            _ => {
                return Err(PaperError::DocumentError(
                    "page Resources is not a dictionary".to_string(),
                ));
            }
        }
    };

    if matches!(resources.get(b"ExtGState"), Ok(Object::Dictionary(_))) {
        if let Ok(Object::Dictionary(existing)) = resources.get_mut(b"ExtGState") {
            for (key, value) in ext_gstate.iter() {
                existing.set(key.clone(), value.clone());
            }
        }
    } else {
        resources.set("ExtGState", ext_gstate);
    }

    Ok(())
}

/// Render a drawing onto an existing page of a document
pub(crate) fn add_drawing_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    drawing: &Drawing,
) -> Result<()> {
    debug!(
        "adding {} primitives to page {:?}",
        drawing.primitives().len(),
        page_id
    );

    let gstates = opacity_gstates(drawing);
    ensure_gstate_resources(doc, page_id, &gstates)?;

    let content = Content {
        operations: drawing_operations(drawing, &gstates),
    };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}

/// The page MediaBox for a drawing, in points, carrying the physical size
pub(crate) fn media_box(drawing: &Drawing) -> Vec<Object> {
    let dims = drawing.dimensions();
    vec![
        0.into(),
        0.into(),
        real(dims.width * POINTS_PER_INCH),
        real(dims.height * POINTS_PER_INCH),
    ]
}

/// Build a complete single-page PDF document for a drawing
pub fn render_document(drawing: &Drawing) -> Result<Document> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box(drawing),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    add_drawing_to_page(&mut doc, page_id, drawing)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DotDensity, PaperConfig, PaperKind};
    use crate::layout::generate;
    use crate::page::Margins;

    #[test]
    fn test_media_box_carries_physical_size() {
        let drawing = generate(&PaperConfig::new(PaperKind::Blank));
        let mb = media_box(&drawing);
        assert_eq!(mb[2], Object::Real(612.0));
        assert_eq!(mb[3], Object::Real(792.0));
    }

    #[test]
    fn test_line_operations_flip_y() {
        let drawing = generate(&PaperConfig::default());
        let ops = drawing_operations(&drawing, &[]);

        // Stream is bracketed by a graphics state save/restore
        assert_eq!(ops.first().unwrap().operator, "q");
        assert_eq!(ops.last().unwrap().operator, "Q");

        // First rule: y = 48 + 33 px from the top maps to 792 - 81 * 0.75 pt
        let first_move = ops.iter().find(|o| o.operator == "m").unwrap();
        let Object::Real(y_pt) = &first_move.operands[1] else {
            panic!("expected a real y operand");
        };
        let expected = 792.0 - (0.5 * 96.0 + (11.0 / 32.0) * 96.0) * 0.75;
        assert!((*y_pt as f64 - expected).abs() < 1e-3);
    }

    #[test]
    fn test_dot_drawing_uses_bezier_circles() {
        let drawing = generate(
            &PaperConfig::new(PaperKind::Dot(DotDensity::Sparse))
                .with_margins(Margins::uniform(1.0)),
        );
        let ops = drawing_operations(&drawing, &[]);
        let curves = ops.iter().filter(|o| o.operator == "c").count();
        let fills = ops.iter().filter(|o| o.operator == "f").count();
        assert_eq!(fills, drawing.primitives().len());
        assert_eq!(curves, fills * 4);
    }

    #[test]
    fn test_margin_guide_dash_and_gstate() {
        let drawing = generate(&PaperConfig::new(PaperKind::Blank));
        let gstates = opacity_gstates(&drawing);
        assert_eq!(gstates.len(), 1);
        assert_eq!(gstates[0].1, 0.3);

        let ops = drawing_operations(&drawing, &gstates);
        assert!(ops.iter().any(|o| o.operator == "gs"));
        assert!(ops.iter().any(|o| o.operator == "d"));
        assert!(ops.iter().any(|o| o.operator == "re"));
    }

    #[test]
    fn test_render_document_structure() {
        let drawing = generate(&PaperConfig::default());
        let doc = render_document(&drawing).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
