//! Template variants – named presentation styles applied at render time.
//!
//! A variant is pure decoration: it selects fonts, colours, and rules around
//! the same logical structure. It never reorders or omits content, and it is
//! held next to the document for the session, never inside it.

use serde::{Deserialize, Serialize};

use crate::view::Color;

/// Enumerated presentation style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Classic,
    Modern,
    Minimal,
    Professional,
    Creative,
    Executive,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 6] = [
        TemplateVariant::Classic,
        TemplateVariant::Modern,
        TemplateVariant::Minimal,
        TemplateVariant::Professional,
        TemplateVariant::Creative,
        TemplateVariant::Executive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Classic",
            TemplateVariant::Modern => "Modern",
            TemplateVariant::Minimal => "Minimal",
            TemplateVariant::Professional => "Professional",
            TemplateVariant::Creative => "Creative",
            TemplateVariant::Executive => "Executive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Traditional CV format with clean sections",
            TemplateVariant::Modern => "Contemporary design with accent colors",
            TemplateVariant::Minimal => "Simple, elegant design focusing on content",
            TemplateVariant::Professional => "Corporate-friendly format for business roles",
            TemplateVariant::Creative => "Artistic layout for creative professionals",
            TemplateVariant::Executive => "Premium layout for senior positions",
        }
    }

    /// The one-line blurb shown on the selection card.
    pub fn preview_blurb(&self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Clean, professional layout with clear sections",
            TemplateVariant::Modern => "Modern typography with strategic color accents",
            TemplateVariant::Minimal => "Minimalist approach with maximum readability",
            TemplateVariant::Professional => "Business-ready template for corporate positions",
            TemplateVariant::Creative => "Unique design for creative industry roles",
            TemplateVariant::Executive => "Sophisticated design for leadership roles",
        }
    }

    /// Resolve the variant into its concrete decoration parameters.
    pub fn theme(&self) -> Theme {
        match self {
            TemplateVariant::Classic => Theme {
                font_family: FontFamily::Sans,
                heading_color: GRAY_900,
                accent: ACCENT,
                frame: None,
                section_decor: SectionDecor::None,
            },
            TemplateVariant::Modern => Theme {
                font_family: FontFamily::Sans,
                heading_color: ACCENT_DARK,
                accent: ACCENT,
                frame: Some(Frame {
                    edge: FrameEdge::Left,
                    width: 4.0,
                    color: ACCENT,
                }),
                section_decor: SectionDecor::LeftRule {
                    width: 2.0,
                    color: ACCENT_PALE,
                },
            },
            TemplateVariant::Minimal => Theme {
                font_family: FontFamily::Sans,
                heading_color: GRAY_900,
                accent: ACCENT,
                frame: None,
                section_decor: SectionDecor::BottomHairline { color: GRAY_100 },
            },
            TemplateVariant::Professional => Theme {
                font_family: FontFamily::Serif,
                heading_color: GRAY_900,
                accent: ACCENT,
                frame: None,
                section_decor: SectionDecor::None,
            },
            TemplateVariant::Creative => Theme {
                font_family: FontFamily::Sans,
                heading_color: GRAY_900,
                accent: ACCENT,
                frame: Some(Frame {
                    edge: FrameEdge::Top,
                    width: 8.0,
                    color: ACCENT,
                }),
                section_decor: SectionDecor::Fill { color: ACCENT_TINT },
            },
            TemplateVariant::Executive => Theme {
                font_family: FontFamily::Serif,
                heading_color: GRAY_900,
                accent: ACCENT,
                frame: Some(Frame {
                    edge: FrameEdge::Bottom,
                    width: 4.0,
                    color: GRAY_800,
                }),
                section_decor: SectionDecor::TopRule {
                    width: 2.0,
                    color: GRAY_200,
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Base typeface family, mapped to the builtin PDF faces at export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Sans,
    Serif,
}

/// Which edge of the whole document a frame rule sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEdge {
    Top,
    Bottom,
    Left,
}

/// A rule drawn along one edge of the document surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub edge: FrameEdge,
    pub width: f32,
    pub color: Color,
}

/// Decoration applied to every section block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionDecor {
    None,
    LeftRule { width: f32, color: Color },
    TopRule { width: f32, color: Color },
    BottomHairline { color: Color },
    Fill { color: Color },
}

/// Concrete decoration parameters for one variant. Visual only: the renderer
/// builds the same tree shape for every theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub font_family: FontFamily,
    pub heading_color: Color,
    pub accent: Color,
    pub frame: Option<Frame>,
    pub section_decor: SectionDecor,
}

// Palette (shared accent plus the neutral ramp).
const ACCENT: Color = Color {
    r: 0.984,
    g: 0.573,
    b: 0.235,
    a: 1.0,
};
const ACCENT_DARK: Color = Color {
    r: 0.918,
    g: 0.345,
    b: 0.047,
    a: 1.0,
};
const ACCENT_PALE: Color = Color {
    r: 0.996,
    g: 0.843,
    b: 0.667,
    a: 1.0,
};
const ACCENT_TINT: Color = Color {
    r: 1.0,
    g: 0.969,
    b: 0.929,
    a: 1.0,
};
const GRAY_100: Color = Color {
    r: 0.953,
    g: 0.957,
    b: 0.961,
    a: 1.0,
};
const GRAY_200: Color = Color {
    r: 0.898,
    g: 0.906,
    b: 0.922,
    a: 1.0,
};
const GRAY_800: Color = Color {
    r: 0.122,
    g: 0.161,
    b: 0.216,
    a: 1.0,
};
const GRAY_900: Color = Color {
    r: 0.067,
    g: 0.094,
    b: 0.153,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_classic() {
        assert_eq!(TemplateVariant::default(), TemplateVariant::Classic);
    }

    #[test]
    fn catalog_covers_all_variants() {
        assert_eq!(TemplateVariant::ALL.len(), 6);
        for variant in TemplateVariant::ALL {
            assert!(!variant.name().is_empty());
            assert!(!variant.description().is_empty());
            assert!(!variant.preview_blurb().is_empty());
        }
    }

    #[test]
    fn serif_variants() {
        assert_eq!(
            TemplateVariant::Professional.theme().font_family,
            FontFamily::Serif
        );
        assert_eq!(
            TemplateVariant::Executive.theme().font_family,
            FontFamily::Serif
        );
        assert_eq!(TemplateVariant::Classic.theme().font_family, FontFamily::Sans);
    }

    #[test]
    fn variant_tag_serializes_lowercase() {
        let json = serde_json::to_string(&TemplateVariant::Creative).unwrap();
        assert_eq!(json, "\"creative\"");
    }
}
