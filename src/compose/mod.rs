//! Layout and pagination of a declaration into positioned page content.
//!
//! Everything here works in millimetres with Y growing down from the top edge
//! of the page, and line counts (never glyph heights) decide page breaks, so
//! the same input always paginates the same way whatever backend renders it.

mod flow;
mod geometry;
mod layout;
mod paginate;
mod paragraphs;
mod signature;

pub use flow::{NUMBERED_INDENT, PARAGRAPH_GAP};
pub use geometry::{
    BODY_FONT_SIZE, FOOTER_BOTTOM, FOOTER_LINE_HEIGHT, HEADER_FOOTER_PADDING,
    HEADER_LINE_HEIGHT, HEADER_TOP, IMAGE_GAP, LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
    PageGeometry,
};
pub use layout::{text_width, wrap_text};
pub use paginate::MAX_PAGES;
pub use paragraphs::{classify, split_paragraphs};
pub use signature::{
    SIGNATURE_BLOCK_HEIGHT, SIGNATURE_GAP, SIGNATURE_RULE_WIDTH, date_line, signatory_fields,
};

use crate::error::Error;
use crate::fonts::lost_characters;
use crate::model::{Document, LayoutConfig, ParagraphSplit};

pub(crate) use geometry::check_image_size;
use paginate::Paginator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    pub paragraph_split: ParagraphSplit,
}

/// Lay out `source` under `config` with default options.
pub fn compose(source: &str, config: &LayoutConfig) -> Result<Document, Error> {
    compose_with(source, config, &ComposeOptions::default())
}

pub fn compose_with(
    source: &str,
    config: &LayoutConfig,
    options: &ComposeOptions,
) -> Result<Document, Error> {
    geometry::check_images(config)?;
    warn_unencodable(source, config);
    let geometry = PageGeometry::resolve(config);
    let paragraphs = split_paragraphs(source, options.paragraph_split);
    log::debug!(
        "composing {} paragraphs ({:?}); content area y={:.1}..{:.1}, {} lines per page",
        paragraphs.len(),
        options.paragraph_split,
        geometry.content_start_y,
        geometry.content_max_y,
        geometry.lines_per_page(),
    );

    let mut paginator = Paginator::new(geometry, config);
    flow::flow_addressee(&mut paginator, config)?;
    flow::flow_paragraphs(&mut paginator, &paragraphs)?;
    signature::place_signature(&mut paginator, config)?;
    Ok(paginator.finish())
}

/// One warning per composition when some input text cannot be drawn in the
/// body font and will be missing from the output.
fn warn_unencodable(source: &str, config: &LayoutConfig) {
    let furniture = [
        &config.header_text,
        &config.footer_text,
        &config.addressee_name,
        &config.addressee_organization,
        &config.signature_city,
        &config.signature_date,
        &config.signatory_name,
        &config.signatory_cpf,
        &config.signatory_role,
        &config.signatory_company,
        &config.signatory_company_registration,
    ];
    let texts = std::iter::once(source).chain(furniture.into_iter().filter_map(|t| t.as_deref()));
    if let Some((first, count)) = lost_characters(texts) {
        log::warn!(
            "{count} character(s) have no glyph in the PDF font and are dropped (first: {first:?})"
        );
    }
}
