pub mod compose;
pub mod config;
mod error;
mod fonts;
mod model;
mod pdf;

pub use compose::{ComposeOptions, PageGeometry, compose, compose_with};
pub use error::Error;
pub use model::{
    Document, DrawOp, ImageSlot, ImageSpec, LayoutConfig, Page, Paragraph, ParagraphKind,
    ParagraphSplit, PlacedWord, TextAlign, default_layout_config,
};

use std::path::Path;
use std::time::Instant;

/// Render an already composed document to PDF bytes.
pub fn render_pdf(doc: &Document, config: &LayoutConfig) -> Result<Vec<u8>, Error> {
    pdf::render(doc, config)
}

/// Compose and render in one pass. Either the complete PDF is returned or nothing.
pub fn compose_pdf(
    source: &str,
    config: &LayoutConfig,
    options: &ComposeOptions,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let doc = compose_with(source, config, options)?;
    let t_compose = t0.elapsed();

    let bytes = pdf::render(&doc, config)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose={:.1}ms, render={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_compose.as_secs_f64() * 1000.0,
        (t_total - t_compose).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.page_count(),
        bytes.len(),
    );

    Ok(bytes)
}

pub fn write_pdf(
    source: &str,
    config: &LayoutConfig,
    options: &ComposeOptions,
    output: &Path,
) -> Result<(), Error> {
    let bytes = compose_pdf(source, config, options)?;
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    Ok(())
}
