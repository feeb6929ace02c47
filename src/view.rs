//! Display-tree types – the visual document tree the renderer projects the
//! document model into, consumed by the layout engine for preview and export.

// ---------------------------------------------------------------------------
// Colour
// ---------------------------------------------------------------------------

/// RGBA colour (0.0 – 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn is_transparent(&self) -> bool {
        self.a < 0.001
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
            Some(Self { r, g, b, a: 1.0 })
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()? as f32 / 255.0;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()? as f32 / 255.0;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()? as f32 / 255.0;
            Some(Self { r, g, b, a: 1.0 })
        } else {
            None
        }
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ---------------------------------------------------------------------------
// Style attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Column,
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dim {
    Auto,
    Pt(f32),
    Percent(f32),
}

/// Per-edge lengths in points (margins, padding, border widths).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn top(v: f32) -> Self {
        Self {
            top: v,
            ..Self::ZERO
        }
    }

    pub fn bottom(v: f32) -> Self {
        Self {
            bottom: v,
            ..Self::ZERO
        }
    }

    pub fn left(v: f32) -> Self {
        Self {
            left: v,
            ..Self::ZERO
        }
    }

    pub fn x_y(x: f32, y: f32) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Visual attributes of one display node. Purely decorative properties plus
/// the flexbox inputs layout needs; no content.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    // Layout
    pub direction: Direction,
    pub wrap: bool,
    pub justify: Justify,
    pub align: Align,
    pub gap: f32,
    pub width: Dim,
    pub margin: Edges,
    pub padding: Edges,

    // Decoration
    pub border: Edges,
    pub border_color: Color,
    pub background: Color,

    // Typography
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub text_align: TextAlign,
    pub line_height: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            direction: Direction::Column,
            wrap: false,
            justify: Justify::Start,
            align: Align::Stretch,
            gap: 0.0,
            width: Dim::Auto,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            border: Edges::ZERO,
            border_color: Color::BLACK,
            background: Color::TRANSPARENT,
            font_size: 14.0,
            bold: false,
            italic: false,
            color: Color::BLACK,
            text_align: TextAlign::Left,
            line_height: 1.4,
        }
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// A node in the display tree: a styled container or a styled text run.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Block {
        style: NodeStyle,
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
        style: NodeStyle,
    },
}

impl ViewNode {
    pub fn block(style: NodeStyle, children: Vec<ViewNode>) -> Self {
        ViewNode::Block { style, children }
    }

    pub fn text(text: impl Into<String>, style: NodeStyle) -> Self {
        ViewNode::Text {
            text: text.into(),
            style,
        }
    }

    pub fn style(&self) -> &NodeStyle {
        match self {
            ViewNode::Block { style, .. } => style,
            ViewNode::Text { style, .. } => style,
        }
    }
}

/// Collect every text run in document order. Useful for asserting that a
/// projection contains (or omits) particular content.
pub fn collect_text(nodes: &[ViewNode]) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        collect_into(node, &mut out);
    }
    out
}

fn collect_into(node: &ViewNode, out: &mut Vec<String>) {
    match node {
        ViewNode::Text { text, .. } => out.push(text.clone()),
        ViewNode::Block { children, .. } => {
            for child in children {
                collect_into(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#fb923c").unwrap();
        assert!((c.r - 0.984).abs() < 0.01);
        assert!((c.g - 0.573).abs() < 0.01);
        assert!((c.b - 0.235).abs() < 0.01);
        assert!(Color::from_hex("#xyz").is_none());
        assert!(Color::from_hex("#fff").is_some());
    }

    #[test]
    fn collect_text_walks_depth_first() {
        let tree = ViewNode::block(
            NodeStyle::default(),
            vec![
                ViewNode::text("a", NodeStyle::default()),
                ViewNode::block(
                    NodeStyle::default(),
                    vec![ViewNode::text("b", NodeStyle::default())],
                ),
                ViewNode::text("c", NodeStyle::default()),
            ],
        );
        assert_eq!(collect_text(&[tree]), vec!["a", "b", "c"]);
    }
}
