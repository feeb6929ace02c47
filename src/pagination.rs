//! Pagination – slices the tall rendered surface into page-sized bands.
//!
//! The surface is never reflowed. Each page shows the same content shifted
//! upward by a fixed multiple of the page height, so a box sitting across a
//! page boundary is clipped on one page and continues on the next.

use crate::surface::RenderedSurface;

/// Tolerance for a sliver of content hanging past the last page boundary.
/// Sub-point remainders come from float accumulation, not real content, and
/// must not produce an extra blank page.
const REMAINDER_EPSILON_PT: f32 = 0.5;

/// How one surface maps onto a sequence of pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Uniform scale applied to the surface so its width fills the page.
    pub scale: f32,
    /// Vertical shift for each page, in page points. Page `k` draws the
    /// surface translated up by `offsets[k]`.
    pub offsets: Vec<f32>,
}

impl ExportLayout {
    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Compute the page plan for a surface. Always yields at least one page,
/// even for an empty surface.
pub fn paginate(surface: &RenderedSurface, page_width_pt: f32, page_height_pt: f32) -> ExportLayout {
    let scale = if surface.width_pt > 0.0 {
        page_width_pt / surface.width_pt
    } else {
        1.0
    };
    let scaled_height = surface.height_pt * scale;

    let mut offsets = vec![0.0];
    if page_height_pt > 0.0 {
        let mut remaining = scaled_height - page_height_pt;
        while remaining > REMAINDER_EPSILON_PT {
            offsets.push(offsets.len() as f32 * page_height_pt);
            remaining -= page_height_pt;
        }
    }

    ExportLayout {
        page_width_pt,
        page_height_pt,
        scale,
        offsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: f32, height: f32) -> RenderedSurface {
        RenderedSurface {
            width_pt: width,
            height_pt: height,
            boxes: Vec::new(),
        }
    }

    #[test]
    fn short_content_fits_one_page() {
        let layout = paginate(&surface(595.28, 400.0), 595.28, 841.89);
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.offsets, vec![0.0]);
        assert!((layout.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn overflow_adds_pages_at_page_height_strides() {
        let layout = paginate(&surface(595.28, 2000.0), 595.28, 841.89);
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.offsets[1], 841.89);
        assert_eq!(layout.offsets[2], 2.0 * 841.89);
    }

    #[test]
    fn content_exactly_one_page_tall_stays_one_page() {
        let layout = paginate(&surface(595.28, 841.89), 595.28, 841.89);
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn sub_point_remainder_does_not_add_a_blank_page() {
        let layout = paginate(&surface(595.28, 841.89 + 0.3), 595.28, 841.89);
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn remainder_past_tolerance_gets_its_page() {
        let layout = paginate(&surface(595.28, 841.89 + 10.0), 595.28, 841.89);
        assert_eq!(layout.page_count(), 2);
    }

    #[test]
    fn surface_wider_than_page_scales_down() {
        let layout = paginate(&surface(1190.56, 1683.78), 595.28, 841.89);
        assert!((layout.scale - 0.5).abs() < 1e-6);
        // 1683.78 * 0.5 = 841.89 scaled points: exactly one page.
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn empty_surface_still_yields_a_page() {
        let layout = paginate(&surface(595.28, 0.0), 595.28, 841.89);
        assert_eq!(layout.page_count(), 1);
    }
}
