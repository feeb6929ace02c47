//! Layout engine – uses Taffy to compute flexbox layout from the display
//! tree, then converts the result into absolutely positioned boxes.
//!
//! Text is word-wrapped at build time against an estimated column width, so
//! every leaf enters Taffy with a concrete size. The output is one tall
//! [`RenderedSurface`] in document coordinates; pagination slices it later.

use std::collections::HashMap;
use taffy::prelude::*;

use crate::fonts::{wrap_text, FontManager};
use crate::surface::{BorderStyle, EdgeWidths, LayoutBox, RenderedSurface, TextContent, TextLine};
use crate::template::FontFamily;
use crate::view::{self, Dim, NodeStyle, TextAlign, ViewNode};

// ---------------------------------------------------------------------------
// Taffy tree construction
// ---------------------------------------------------------------------------

struct SurfaceBuilder<'a> {
    taffy: TaffyTree<()>,
    fonts: &'a FontManager,
    family: FontFamily,
    node_styles: HashMap<NodeId, NodeStyle>,
    node_lines: HashMap<NodeId, Vec<String>>,
}

impl<'a> SurfaceBuilder<'a> {
    fn new(fonts: &'a FontManager, family: FontFamily) -> Self {
        Self {
            taffy: TaffyTree::new(),
            fonts,
            family,
            node_styles: HashMap::new(),
            node_lines: HashMap::new(),
        }
    }

    fn build_node(&mut self, node: &ViewNode, parent_width: f32) -> NodeId {
        match node {
            ViewNode::Text { text, style } => self.build_text_node(text, style, parent_width),
            ViewNode::Block { style, children } => {
                self.build_block_node(style, children, parent_width)
            }
        }
    }

    fn build_text_node(&mut self, text: &str, style: &NodeStyle, parent_width: f32) -> NodeId {
        let line_height_px = self.fonts.line_height_px(style.font_size, style.line_height);
        let wrap_width = (parent_width - style.padding.left - style.padding.right).max(1.0);
        let lines = wrap_text(
            text,
            style.font_size,
            style.bold,
            style.italic,
            self.family,
            wrap_width,
            self.fonts,
        );

        let text_width = lines
            .iter()
            .map(|l| {
                self.fonts
                    .measure_text_width(l, style.font_size, style.bold, style.italic, self.family)
            })
            .fold(0.0f32, f32::max);
        let text_height = lines.len() as f32 * line_height_px;

        // Box sizes include padding (badges carry their own). Aligned text
        // stretches to the parent width so per-line offsets have room to work.
        let box_width = text_width + style.padding.left + style.padding.right;
        let box_height = text_height + style.padding.top + style.padding.bottom;
        let width = if style.text_align == TextAlign::Left {
            Dimension::Length(box_width)
        } else {
            Dimension::Auto
        };

        let taffy_style = Style {
            size: Size {
                width,
                height: Dimension::Length(box_height),
            },
            min_size: Size {
                width: Dimension::Length(box_width.min(parent_width)),
                height: Dimension::Length(box_height),
            },
            margin: to_margin(style.margin),
            ..Default::default()
        };

        let node = self.taffy.new_leaf(taffy_style).unwrap();
        self.node_styles.insert(node, style.clone());
        self.node_lines.insert(node, lines);
        node
    }

    fn build_block_node(
        &mut self,
        style: &NodeStyle,
        children: &[ViewNode],
        parent_width: f32,
    ) -> NodeId {
        let my_width = resolve_width(style.width, parent_width);
        let inner_width =
            my_width - style.padding.left - style.padding.right - style.border.left
                - style.border.right;

        // Non-wrapping rows split the inner width evenly so text wraps to its
        // column at build time; wrapping rows let each child take what it needs.
        let is_row = style.direction == view::Direction::Row && !style.wrap;
        let n = children.len().max(1);
        let default_child_width = if is_row {
            let gap_total = style.gap * n.saturating_sub(1) as f32;
            ((inner_width - gap_total) / n as f32).max(1.0)
        } else {
            inner_width
        };

        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            let child_width = match child.style().width {
                Dim::Auto => default_child_width,
                _ => resolve_width(child.style().width, inner_width),
            };
            child_ids.push(self.build_node(child, child_width));
        }

        let taffy_style = node_to_taffy(style);
        let node = self
            .taffy
            .new_with_children(taffy_style, &child_ids)
            .unwrap();
        self.node_styles.insert(node, style.clone());
        node
    }

    /// Walk the computed Taffy tree, accumulating absolute coordinates and
    /// resolving per-line alignment offsets.
    fn extract(&self, node: NodeId, offset_x: f32, offset_y: f32) -> LayoutBox {
        let layout = self.taffy.layout(node).unwrap();
        let style = self.node_styles.get(&node).cloned().unwrap_or_default();

        let x = offset_x + layout.location.x;
        let y = offset_y + layout.location.y;
        let mut out = LayoutBox::new(x, y, layout.size.width, layout.size.height);

        if !style.background.is_transparent() {
            out.background = Some(style.background.as_array());
        }
        if !style.border.is_zero() {
            out.border = Some(BorderStyle {
                widths: EdgeWidths {
                    top: style.border.top,
                    right: style.border.right,
                    bottom: style.border.bottom,
                    left: style.border.left,
                },
                color: style.border_color.as_array(),
            });
        }

        if let Some(lines) = self.node_lines.get(&node) {
            let line_height_px = self.fonts.line_height_px(style.font_size, style.line_height);
            let inner_width =
                (layout.size.width - style.padding.left - style.padding.right).max(0.0);
            let positioned = lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let line_width = self.fonts.measure_text_width(
                        line,
                        style.font_size,
                        style.bold,
                        style.italic,
                        self.family,
                    );
                    let x_offset = match style.text_align {
                        TextAlign::Left => style.padding.left,
                        TextAlign::Center => {
                            style.padding.left + ((inner_width - line_width) / 2.0).max(0.0)
                        }
                        TextAlign::Right => {
                            style.padding.left + (inner_width - line_width).max(0.0)
                        }
                    };
                    TextLine {
                        text: line.clone(),
                        x_offset,
                        y_offset: style.padding.top + i as f32 * line_height_px,
                    }
                })
                .collect();
            out.text = Some(TextContent {
                lines: positioned,
                font_size: style.font_size,
                bold: style.bold,
                italic: style.italic,
                color: style.color.as_array(),
                line_height: style.line_height,
            });
        }

        out.children = self
            .taffy
            .children(node)
            .unwrap_or_default()
            .iter()
            .map(|&child| self.extract(child, x, y))
            .collect();
        out
    }
}

fn resolve_width(dim: Dim, parent_width: f32) -> f32 {
    match dim {
        Dim::Auto => parent_width,
        Dim::Pt(v) => v,
        Dim::Percent(p) => parent_width * p / 100.0,
    }
}

fn dim_to_taffy(dim: Dim) -> Dimension {
    match dim {
        Dim::Auto => Dimension::Auto,
        Dim::Pt(v) => Dimension::Length(v),
        Dim::Percent(p) => Dimension::Percent(p / 100.0),
    }
}

fn to_margin(edges: view::Edges) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(edges.top),
        right: LengthPercentageAuto::Length(edges.right),
        bottom: LengthPercentageAuto::Length(edges.bottom),
        left: LengthPercentageAuto::Length(edges.left),
    }
}

fn to_length(edges: view::Edges) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(edges.top),
        right: LengthPercentage::Length(edges.right),
        bottom: LengthPercentage::Length(edges.bottom),
        left: LengthPercentage::Length(edges.left),
    }
}

fn node_to_taffy(s: &NodeStyle) -> Style {
    let mut ts = Style {
        display: taffy::Display::Flex,
        flex_direction: match s.direction {
            view::Direction::Column => taffy::FlexDirection::Column,
            view::Direction::Row => taffy::FlexDirection::Row,
        },
        flex_wrap: if s.wrap {
            taffy::FlexWrap::Wrap
        } else {
            taffy::FlexWrap::NoWrap
        },
        ..Default::default()
    };
    ts.justify_content = Some(match s.justify {
        view::Justify::Start => taffy::JustifyContent::Start,
        view::Justify::Center => taffy::JustifyContent::Center,
        view::Justify::SpaceBetween => taffy::JustifyContent::SpaceBetween,
    });
    ts.align_items = Some(match s.align {
        view::Align::Start => taffy::AlignItems::Start,
        view::Align::Center => taffy::AlignItems::Center,
        view::Align::Stretch => taffy::AlignItems::Stretch,
    });

    ts.size = Size {
        width: dim_to_taffy(s.width),
        height: Dimension::Auto,
    };
    ts.min_size = Size {
        width: Dimension::Length(0.0),
        height: Dimension::Auto,
    };

    ts.margin = to_margin(s.margin);
    ts.padding = to_length(s.padding);
    ts.border = to_length(s.border);
    ts.gap = Size {
        width: LengthPercentage::Length(s.gap),
        height: LengthPercentage::Length(s.gap),
    };
    ts
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute geometry for a display tree at the given page width. The returned
/// surface is as tall as the content needs; its single root box covers the
/// full width.
pub fn lay_out(
    root: &ViewNode,
    width_pt: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> Result<RenderedSurface, String> {
    if width_pt <= 0.0 || !width_pt.is_finite() {
        return Err(format!("page width must be positive, got {width_pt}"));
    }

    let mut builder = SurfaceBuilder::new(fonts, family);
    let root_id = builder.build_node(root, width_pt);

    builder
        .taffy
        .compute_layout(
            root_id,
            Size {
                width: AvailableSpace::Definite(width_pt),
                height: AvailableSpace::MaxContent,
            },
        )
        .map_err(|e| format!("flex layout failed: {e:?}"))?;

    let root_box = builder.extract(root_id, 0.0, 0.0);
    let height_pt = root_box.height;
    if !height_pt.is_finite() {
        return Err("layout produced a non-finite height".to_string());
    }

    Ok(RenderedSurface {
        width_pt,
        height_pt: height_pt.max(1.0),
        boxes: vec![root_box],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::samples;
    use crate::template::TemplateVariant;

    fn surface_for(doc: &crate::model::ResumeDocument) -> RenderedSurface {
        let tree = render(doc, TemplateVariant::Classic);
        let fonts = FontManager::new();
        lay_out(&tree, 595.28, FontFamily::Sans, &fonts).unwrap()
    }

    fn walk(boxes: &[LayoutBox], f: &mut impl FnMut(&LayoutBox)) {
        for b in boxes {
            f(b);
            walk(&b.children, f);
        }
    }

    #[test]
    fn surface_spans_the_requested_width() {
        let surface = surface_for(&samples::jane_doe());
        assert_eq!(surface.width_pt, 595.28);
        assert!(surface.height_pt > 0.0);
        let root = &surface.boxes[0];
        assert!((root.width - 595.28).abs() < 0.5);
    }

    #[test]
    fn boxes_stay_inside_page_width() {
        let surface = surface_for(&samples::jane_doe());
        walk(&surface.boxes, &mut |b| {
            assert!(b.x >= -0.5, "box at x {}", b.x);
            assert!(
                b.x + b.width <= surface.width_pt + 1.0,
                "box overflows right edge at {}",
                b.x + b.width
            );
        });
    }

    #[test]
    fn text_boxes_carry_positioned_lines() {
        let surface = surface_for(&samples::jane_doe());
        let mut saw_text = false;
        walk(&surface.boxes, &mut |b| {
            if let Some(text) = &b.text {
                saw_text = true;
                assert!(!text.lines.is_empty());
                for line in &text.lines {
                    assert!(line.x_offset >= 0.0);
                    assert!(line.y_offset >= 0.0);
                }
            }
        });
        assert!(saw_text);
    }

    #[test]
    fn longer_documents_grow_taller() {
        let short = surface_for(&samples::jane_doe());
        let long = surface_for(&samples::multi_page());
        assert!(long.height_pt > short.height_pt);
    }

    #[test]
    fn zero_width_is_rejected() {
        let tree = render(&samples::jane_doe(), TemplateVariant::Classic);
        let fonts = FontManager::new();
        assert!(lay_out(&tree, 0.0, FontFamily::Sans, &fonts).is_err());
    }
}
