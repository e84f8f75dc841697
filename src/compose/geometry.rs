use crate::error::Error;
use crate::model::{ImageSlot, ImageSpec, LayoutConfig, non_empty};

use super::layout::wrap_block;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;

pub const BODY_FONT_SIZE: f32 = 11.0;
pub const LINE_HEIGHT: f32 = 5.0;

pub const HEADER_FOOTER_FONT_SIZE: f32 = 9.0;
pub const HEADER_LINE_HEIGHT: f32 = 4.5;
pub const FOOTER_LINE_HEIGHT: f32 = 4.0;
pub const IMAGE_GAP: f32 = 4.0;
pub const HEADER_FOOTER_PADDING: f32 = 5.0;
pub const HEADER_TOP: f32 = 10.0;
pub const FOOTER_BOTTOM: f32 = 10.0;

/// Baseline position inside a line band, as a fraction of the band height.
pub const BASELINE_RATIO: f32 = 0.76;

/// Page metrics derived from a layout. All values in millimetres, Y downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub usable_width: f32,
    pub header_height: f32,
    pub footer_height: f32,
    /// First Y at which body content may be placed.
    pub content_start_y: f32,
    /// Top of the reserved footer region.
    pub footer_start_y: f32,
    /// Lowest Y body content may reach before a page break is required.
    pub content_max_y: f32,
}

impl PageGeometry {
    pub fn resolve(config: &LayoutConfig) -> PageGeometry {
        let usable_width = PAGE_WIDTH - 2.0 * MARGIN;

        let header_lines = header_text_lines(config, usable_width).len();
        let header_image_h = config.header_image.as_ref().map(|img| img.height_mm);
        let header_height = reserved_height(header_image_h, header_lines, HEADER_LINE_HEIGHT);

        let footer_lines = footer_text_lines(config, usable_width).len();
        let footer_image_h = config.footer_image.as_ref().map(|img| img.height_mm);
        let footer_height = reserved_height(footer_image_h, footer_lines, FOOTER_LINE_HEIGHT);

        PageGeometry {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margin: MARGIN,
            usable_width,
            header_height,
            footer_height,
            content_start_y: MARGIN + header_height,
            footer_start_y: PAGE_HEIGHT - FOOTER_BOTTOM - footer_height,
            content_max_y: PAGE_HEIGHT - footer_height - MARGIN,
        }
    }

    /// Number of body lines a fresh page can hold.
    pub fn lines_per_page(&self) -> usize {
        lines_fitting(self.content_max_y - self.content_start_y)
    }
}

/// Reject a declared image size that cannot be placed on the page.
pub(crate) fn check_image_size(slot: ImageSlot, spec: &ImageSpec) -> Result<(), Error> {
    let within = |v: f32, limit: f32| v.is_finite() && v > 0.0 && v <= limit;
    if within(spec.width_mm, PAGE_WIDTH) && within(spec.height_mm, PAGE_HEIGHT) {
        return Ok(());
    }
    Err(Error::InvalidImageData {
        slot,
        reason: format!(
            "declared size {}x{}mm cannot be placed on a {PAGE_WIDTH}x{PAGE_HEIGHT}mm page",
            spec.width_mm, spec.height_mm
        ),
    })
}

pub(crate) fn check_images(config: &LayoutConfig) -> Result<(), Error> {
    for slot in [ImageSlot::Header, ImageSlot::Footer] {
        if let Some(spec) = config.image(slot) {
            check_image_size(slot, spec)?;
        }
    }
    Ok(())
}

fn reserved_height(image_height: Option<f32>, text_lines: usize, line_height: f32) -> f32 {
    let mut height = 0.0;
    if let Some(h) = image_height {
        height += h + IMAGE_GAP;
    }
    height += text_lines as f32 * line_height;
    if image_height.is_some() || text_lines > 0 {
        height += HEADER_FOOTER_PADDING;
    }
    height
}

/// Slack for f32 rounding in vertical fit tests, far below any real dimension.
const FIT_TOLERANCE: f32 = 1e-3;

/// Whether `height` millimetres fit in `space`.
pub(crate) fn fits(height: f32, space: f32) -> bool {
    height <= space + FIT_TOLERANCE
}

/// Whole body lines that fit in `space` millimetres.
pub(crate) fn lines_fitting(space: f32) -> usize {
    let space = space + FIT_TOLERANCE;
    if space <= 0.0 {
        0
    } else {
        (space / LINE_HEIGHT).floor() as usize
    }
}

pub(crate) fn header_text_lines(config: &LayoutConfig, width: f32) -> Vec<String> {
    non_empty(&config.header_text)
        .map(|text| wrap_block(text, width, HEADER_FOOTER_FONT_SIZE))
        .unwrap_or_default()
}

pub(crate) fn footer_text_lines(config: &LayoutConfig, width: f32) -> Vec<String> {
    non_empty(&config.footer_text)
        .map(|text| wrap_block(text, width, HEADER_FOOTER_FONT_SIZE))
        .unwrap_or_default()
}
