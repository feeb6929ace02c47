//! Font metrics and text wrapping.
//!
//! Measurement feeds the layout engine with intrinsic text sizes. When real
//! TTF/OTF bytes are loaded we measure glyph advances with `ttf-parser`;
//! otherwise average-advance heuristics for the builtin PDF faces apply, so
//! the pipeline works without any font file on disk.

use std::collections::HashMap;

use crate::template::FontFamily;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
}

/// A loaded font face with metrics.
#[derive(Clone)]
pub struct FontData {
    /// Raw font bytes (kept alive for ttf-parser's zero-copy API).
    pub bytes: Vec<u8>,
    pub units_per_em: f32,
}

/// Holds loaded faces and answers measurement queries.
#[derive(Default)]
pub struct FontManager {
    faces: HashMap<FontKey, FontData>,
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TTF/OTF face for one (family, bold, italic) slot.
    pub fn load_font(
        &mut self,
        family: FontFamily,
        bold: bool,
        italic: bool,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        let face = ttf_parser::Face::parse(&bytes, 0)
            .map_err(|e| format!("failed to parse font: {e}"))?;
        let data = FontData {
            units_per_em: face.units_per_em() as f32,
            bytes,
        };
        self.faces.insert(
            FontKey {
                family,
                bold,
                italic,
            },
            data,
        );
        Ok(())
    }

    /// Width of a string at `font_size` points. Glyph advances when a face is
    /// loaded; otherwise an average-advance heuristic (serif faces run a
    /// touch narrower than the sans, bold a touch wider).
    pub fn measure_text_width(
        &self,
        text: &str,
        font_size: f32,
        bold: bool,
        italic: bool,
        family: FontFamily,
    ) -> f32 {
        let key = FontKey {
            family,
            bold,
            italic,
        };
        if let Some(data) = self.faces.get(&key) {
            if let Ok(face) = ttf_parser::Face::parse(&data.bytes, 0) {
                let scale = font_size / data.units_per_em;
                let mut width = 0.0f32;
                for ch in text.chars() {
                    if let Some(gid) = face.glyph_index(ch) {
                        width += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
                    } else {
                        width += font_size * 0.5;
                    }
                }
                return width;
            }
        }

        let avg = match (family, bold) {
            (FontFamily::Sans, false) => 0.50,
            (FontFamily::Sans, true) => 0.55,
            (FontFamily::Serif, false) => 0.48,
            (FontFamily::Serif, true) => 0.52,
        };
        text.chars().count() as f32 * font_size * avg
    }

    pub fn line_height_px(&self, font_size: f32, line_height_factor: f32) -> f32 {
        font_size * line_height_factor
    }
}

/// Word-wrap text to fit within `max_width` points. Hard newlines in the
/// input start new lines; words longer than the width get a line of their own.
pub fn wrap_text(
    text: &str,
    font_size: f32,
    bold: bool,
    italic: bool,
    family: FontFamily,
    max_width: f32,
    fonts: &FontManager,
) -> Vec<String> {
    if max_width <= 0.0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in &words {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            let w = fonts.measure_text_width(&candidate, font_size, bold, italic, family);
            if w > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = candidate;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
