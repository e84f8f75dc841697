use crate::error::Error;
use crate::model::{Document, DrawOp, ImageSlot, LayoutConfig, Page, TextAlign};

use super::geometry::{
    BASELINE_RATIO, FOOTER_BOTTOM, FOOTER_LINE_HEIGHT, HEADER_FOOTER_FONT_SIZE,
    HEADER_LINE_HEIGHT, HEADER_TOP, IMAGE_GAP, PageGeometry, footer_text_lines,
    header_text_lines,
};
use super::layout::place_text;

/// Defensive ceiling on the number of pages one composition may produce.
pub const MAX_PAGES: usize = 200;

const HEADER_RULE_GAP: f32 = 2.0;

/// Owns the page cursor. Pages are opened with their header stamped and closed
/// with their footer stamped; a closed page is never touched again.
pub(crate) struct Paginator<'a> {
    geometry: PageGeometry,
    config: &'a LayoutConfig,
    header_lines: Vec<String>,
    footer_lines: Vec<String>,
    closed: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> Paginator<'a> {
    pub(crate) fn new(geometry: PageGeometry, config: &'a LayoutConfig) -> Self {
        let mut paginator = Paginator {
            geometry,
            config,
            header_lines: header_text_lines(config, geometry.usable_width),
            footer_lines: footer_text_lines(config, geometry.usable_width),
            closed: Vec::new(),
            current: Page {
                index: 0,
                ops: Vec::new(),
            },
            y: geometry.content_start_y,
        };
        paginator.stamp_header();
        paginator
    }

    pub(crate) fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub(crate) fn current_y(&self) -> f32 {
        self.y
    }

    pub(crate) fn page_index(&self) -> usize {
        self.current.index
    }

    /// Space left above `content_max_y` on the open page.
    pub(crate) fn remaining(&self) -> f32 {
        self.geometry.content_max_y - self.y
    }

    pub(crate) fn at_page_top(&self) -> bool {
        self.y <= self.geometry.content_start_y
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub(crate) fn push(&mut self, op: DrawOp) {
        self.current.ops.push(op);
    }

    /// Close the open page and open the next one. Returns the new page's
    /// post-header Y.
    pub(crate) fn break_page(&mut self) -> Result<f32, Error> {
        let next_index = self.current.index + 1;
        if next_index >= MAX_PAGES {
            return Err(Error::RunawayPagination { limit: MAX_PAGES });
        }

        self.stamp_footer();
        let closed = std::mem::replace(
            &mut self.current,
            Page {
                index: next_index,
                ops: Vec::new(),
            },
        );
        self.closed.push(closed);
        log::debug!("page break: closed page {}, opened page {next_index}", next_index - 1);

        self.stamp_header();
        self.y = self.geometry.content_start_y;
        Ok(self.y)
    }

    /// Stamp the last page's footer and hand over the finished document.
    pub(crate) fn finish(mut self) -> Document {
        self.stamp_footer();
        self.closed.push(self.current);
        Document {
            geometry: self.geometry,
            pages: self.closed,
        }
    }

    fn stamp_header(&mut self) {
        let g = self.geometry;
        let mut y = HEADER_TOP;
        let mut bottom: Option<f32> = None;

        if let Some(img) = &self.config.header_image {
            self.current.ops.push(DrawOp::Image {
                slot: ImageSlot::Header,
                x: (g.page_width - img.width_mm) / 2.0,
                y,
                width: img.width_mm,
                height: img.height_mm,
            });
            bottom = Some(y + img.height_mm);
            y += img.height_mm + IMAGE_GAP;
        }

        for line in &self.header_lines {
            self.current.ops.push(place_text(
                line,
                TextAlign::Center,
                g.margin,
                g.usable_width,
                y + BASELINE_RATIO * HEADER_LINE_HEIGHT,
                HEADER_FOOTER_FONT_SIZE,
            ));
            y += HEADER_LINE_HEIGHT;
            bottom = Some(y);
        }

        if let Some(bottom) = bottom {
            self.current.ops.push(DrawOp::Rule {
                x1: g.margin,
                x2: g.page_width - g.margin,
                y: bottom + HEADER_RULE_GAP,
            });
        }
    }

    fn stamp_footer(&mut self) {
        let g = self.geometry;
        let mut bottom = g.page_height - FOOTER_BOTTOM;

        if let Some(img) = &self.config.footer_image {
            self.current.ops.push(DrawOp::Image {
                slot: ImageSlot::Footer,
                x: (g.page_width - img.width_mm) / 2.0,
                y: bottom - img.height_mm,
                width: img.width_mm,
                height: img.height_mm,
            });
            bottom -= img.height_mm + IMAGE_GAP;
        }

        for line in self.footer_lines.iter().rev() {
            let top = bottom - FOOTER_LINE_HEIGHT;
            self.current.ops.push(place_text(
                line,
                TextAlign::Center,
                g.margin,
                g.usable_width,
                top + BASELINE_RATIO * FOOTER_LINE_HEIGHT,
                HEADER_FOOTER_FONT_SIZE,
            ));
            bottom = top;
        }
    }
}
