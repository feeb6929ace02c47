//! Rendered surface – the frozen geometry that comes out of layout.
//!
//! Everything downstream of layout (pagination, the PDF writer, snapshot
//! tooling) consumes this structure instead of the display tree, so the
//! whole shape is serde-serializable and survives a JSON round trip intact.

use serde::{Deserialize, Serialize};

/// One fully laid-out page-width surface. `height_pt` is the natural content
/// height; pagination slices it into page-sized bands afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSurface {
    pub width_pt: f32,
    pub height_pt: f32,
    pub boxes: Vec<LayoutBox>,
}

/// A positioned rectangle. Coordinates are absolute, top-left origin, points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        LayoutBox {
            x,
            y,
            width,
            height,
            background: None,
            border: None,
            text: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub widths: EdgeWidths,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Text already broken into physical lines. The layout pass resolves wrap
/// points and alignment offsets so the PDF writer only positions and paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub lines: Vec<TextLine>,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: [f32; 4],
    pub line_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// Horizontal offset inside the parent box, after alignment.
    pub x_offset: f32,
    /// Vertical offset of the line's top inside the parent box.
    pub y_offset: f32,
}

impl RenderedSurface {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderedSurface {
        let mut root = LayoutBox::new(0.0, 0.0, 595.28, 400.0);
        root.background = Some([1.0, 1.0, 1.0, 1.0]);
        let mut heading = LayoutBox::new(24.0, 24.0, 547.28, 36.0);
        heading.text = Some(TextContent {
            lines: vec![TextLine {
                text: "Jane Doe".to_string(),
                x_offset: 180.0,
                y_offset: 0.0,
            }],
            font_size: 30.0,
            bold: true,
            italic: false,
            color: [0.0, 0.0, 0.0, 1.0],
            line_height: 1.4,
        });
        root.children.push(heading);
        RenderedSurface {
            width_pt: 595.28,
            height_pt: 400.0,
            boxes: vec![root],
        }
    }

    #[test]
    fn json_round_trip_preserves_geometry() {
        let surface = sample();
        let json = surface.to_json().unwrap();
        let back = RenderedSurface::from_json(&json).unwrap();
        assert_eq!(back, surface);
    }

    #[test]
    fn absent_fields_stay_out_of_the_json() {
        let surface = RenderedSurface {
            width_pt: 100.0,
            height_pt: 50.0,
            boxes: vec![LayoutBox::new(0.0, 0.0, 100.0, 50.0)],
        };
        let json = surface.to_json().unwrap();
        assert!(!json.contains("background"));
        assert!(!json.contains("text"));
        assert!(!json.contains("children"));
    }
}
