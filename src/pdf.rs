//! PDF writer – paints a paginated [`RenderedSurface`] into PDF bytes using
//! `printpdf` (v0.8 ops-based API).
//!
//! Text uses the builtin base-14 fonts (Helvetica or Times per theme), so
//! output needs no font embedding and strings are written in WinAnsi bytes.

use printpdf::*;

use crate::pagination::ExportLayout;
use crate::surface::{LayoutBox, RenderedSurface};
use crate::template::FontFamily;

const PT_TO_MM: f32 = 0.352778;

/// Edge lines thinner than this are layout artifacts, not drawable borders.
const MIN_BORDER_PT: f32 = 0.05;

/// Render the surface across the pages described by `layout`. Page `k`
/// repaints the whole surface shifted up by `layout.offsets[k]`; anything
/// landing outside the page box is culled.
pub fn render_pdf(
    surface: &RenderedSurface,
    layout: &ExportLayout,
    family: FontFamily,
    title: &str,
) -> Result<Vec<u8>, String> {
    let page_w = Mm(layout.page_width_pt * PT_TO_MM);
    let page_h = Mm(layout.page_height_pt * PT_TO_MM);

    let mut doc = PdfDocument::new(title);

    let mut pages = Vec::with_capacity(layout.page_count().max(1));
    for &offset in &layout.offsets {
        let mut ops = Vec::new();
        for b in &surface.boxes {
            render_box(&mut ops, b, family, layout.scale, offset, layout.page_height_pt);
        }
        pages.push(PdfPage::new(page_w, page_h, ops));
    }
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    doc.with_pages(pages);
    Ok(doc.save(&PdfSaveOptions::default(), &mut Vec::new()))
}

fn builtin_font(family: FontFamily, bold: bool, italic: bool) -> BuiltinFont {
    match (family, bold, italic) {
        (FontFamily::Sans, false, false) => BuiltinFont::Helvetica,
        (FontFamily::Sans, true, false) => BuiltinFont::HelveticaBold,
        (FontFamily::Sans, false, true) => BuiltinFont::HelveticaOblique,
        (FontFamily::Sans, true, true) => BuiltinFont::HelveticaBoldOblique,
        (FontFamily::Serif, false, false) => BuiltinFont::TimesRoman,
        (FontFamily::Serif, true, false) => BuiltinFont::TimesBold,
        (FontFamily::Serif, false, true) => BuiltinFont::TimesItalic,
        (FontFamily::Serif, true, true) => BuiltinFont::TimesBoldItalic,
    }
}

/// Convert a UTF-8 string to raw Windows-1252 bytes then wrap in a String so
/// printpdf writes the bytes unchanged into the PDF stream (builtin fonts use
/// WinAnsiEncoding, so each glyph is one byte 0x00–0xFF).
fn to_winlatin(s: &str) -> String {
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // euro
            '\u{201A}' => 0x82, // single low-9 quote
            '\u{201E}' => 0x84, // double low-9 quote
            '\u{2026}' => 0x85, // ellipsis
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201C}' => 0x93, // left double quote
            '\u{201D}' => 0x94, // right double quote
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{2122}' => 0x99, // trademark
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => b'?',
        })
        .collect();
    // SAFETY: intentionally non-UTF-8 for 0x80-0x9F range; printpdf passes
    // these bytes straight to the PDF stream, decoded by WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}

fn rgb(color: [f32; 4]) -> Color {
    Color::Rgb(Rgb {
        r: color[0],
        g: color[1],
        b: color[2],
        icc_profile: None,
    })
}

fn line(points: [(f32, f32); 2]) -> Line {
    Line {
        points: points
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point { x: Pt(x), y: Pt(y) },
                bezier: false,
            })
            .collect(),
        is_closed: false,
    }
}

/// Recursively paint one box on the page band starting at `offset` surface
/// points. Coordinates flip from top-left origin to PDF's bottom-left.
fn render_box(
    ops: &mut Vec<Op>,
    b: &LayoutBox,
    family: FontFamily,
    scale: f32,
    offset: f32,
    page_height: f32,
) {
    let x = b.x * scale;
    let top = b.y * scale - offset;
    let width = b.width * scale;
    let height = b.height * scale;

    // Cull subtrees fully outside this page band.
    if top + height < -0.01 || top > page_height + 0.01 {
        return;
    }

    let pdf_top = page_height - top;
    let pdf_bottom = pdf_top - height;

    if let Some(bg) = b.background {
        ops.push(Op::SetFillColor { col: rgb(bg) });
        ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing {
                    points: vec![
                        LinePoint {
                            p: Point {
                                x: Pt(x),
                                y: Pt(pdf_bottom),
                            },
                            bezier: false,
                        },
                        LinePoint {
                            p: Point {
                                x: Pt(x + width),
                                y: Pt(pdf_bottom),
                            },
                            bezier: false,
                        },
                        LinePoint {
                            p: Point {
                                x: Pt(x + width),
                                y: Pt(pdf_top),
                            },
                            bezier: false,
                        },
                        LinePoint {
                            p: Point {
                                x: Pt(x),
                                y: Pt(pdf_top),
                            },
                            bezier: false,
                        },
                    ],
                }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    if let Some(border) = &b.border {
        ops.push(Op::SetOutlineColor {
            col: rgb(border.color),
        });
        // Each edge draws separately; themes mostly use single-edge rules.
        let edges = [
            (border.widths.top, [(x, pdf_top), (x + width, pdf_top)]),
            (
                border.widths.bottom,
                [(x, pdf_bottom), (x + width, pdf_bottom)],
            ),
            (border.widths.left, [(x, pdf_top), (x, pdf_bottom)]),
            (
                border.widths.right,
                [(x + width, pdf_top), (x + width, pdf_bottom)],
            ),
        ];
        for (edge_width, points) in edges {
            let scaled = edge_width * scale;
            if scaled < MIN_BORDER_PT {
                continue;
            }
            ops.push(Op::SetOutlineThickness { pt: Pt(scaled) });
            ops.push(Op::DrawLine {
                line: line(points),
            });
        }
    }

    if let Some(text) = &b.text {
        let font_size = text.font_size * scale;
        let font = builtin_font(family, text.bold, text.italic);
        let line_height = font_size * text.line_height;
        // Baseline ≈ top of line + ascender (approx 0.75 × font_size)
        let ascender_offset = font_size * 0.75;

        for tline in &text.lines {
            if tline.text.is_empty() {
                continue;
            }
            let line_top = top + tline.y_offset * scale;
            if line_top + line_height < 0.0 || line_top > page_height {
                continue;
            }
            let text_x = x + tline.x_offset * scale;
            let text_y = page_height - line_top - ascender_offset;

            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(text_x),
                    y: Pt(text_y),
                },
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(font_size),
                font,
            });
            ops.push(Op::SetLineHeight {
                lh: Pt(line_height),
            });
            ops.push(Op::SetFillColor {
                col: rgb(text.color),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(to_winlatin(&tline.text))],
                font,
            });
            ops.push(Op::EndTextSection);
        }
    }

    for child in &b.children {
        render_box(ops, child, family, scale, offset, page_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::paginate;
    use crate::surface::{TextContent, TextLine};

    fn text_box(y: f32, text: &str) -> LayoutBox {
        let mut b = LayoutBox::new(24.0, y, 200.0, 20.0);
        b.text = Some(TextContent {
            lines: vec![TextLine {
                text: text.to_string(),
                x_offset: 0.0,
                y_offset: 0.0,
            }],
            font_size: 14.0,
            bold: false,
            italic: false,
            color: [0.0, 0.0, 0.0, 1.0],
            line_height: 1.4,
        });
        b
    }

    #[test]
    fn empty_surface_still_produces_a_valid_pdf() {
        let surface = RenderedSurface {
            width_pt: 595.28,
            height_pt: 100.0,
            boxes: Vec::new(),
        };
        let layout = paginate(&surface, 595.28, 841.89);
        let bytes = render_pdf(&surface, &layout, FontFamily::Sans, "Test").unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn multi_page_surface_writes_every_page() {
        let surface = RenderedSurface {
            width_pt: 595.28,
            height_pt: 2000.0,
            boxes: vec![text_box(10.0, "first page"), text_box(1900.0, "last page")],
        };
        let layout = paginate(&surface, 595.28, 841.89);
        assert_eq!(layout.page_count(), 3);
        let bytes = render_pdf(&surface, &layout, FontFamily::Serif, "Test").unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn winlatin_maps_typographic_punctuation() {
        let s = to_winlatin("a\u{2019}b \u{2013} c");
        let bytes = s.as_bytes();
        assert_eq!(bytes[1], 0x92);
        assert_eq!(bytes[4], 0x96);
    }

    #[test]
    fn winlatin_replaces_unmappable_chars() {
        let s = to_winlatin("日本");
        assert_eq!(s.as_bytes(), b"??");
    }
}
