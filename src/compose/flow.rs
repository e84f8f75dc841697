use crate::error::Error;
use crate::model::{LayoutConfig, Paragraph, ParagraphKind, TextAlign, non_empty};

use super::geometry::{BASELINE_RATIO, BODY_FONT_SIZE, LINE_HEIGHT, fits, lines_fitting};
use super::layout::{TextLine, break_lines, place_line};
use super::paginate::Paginator;

pub const NUMBERED_INDENT: f32 = 8.0;
pub const PARAGRAPH_GAP: f32 = 3.0;

/// Flow the declaration paragraphs, breaking pages on line boundaries.
pub(crate) fn flow_paragraphs(
    paginator: &mut Paginator<'_>,
    paragraphs: &[Paragraph],
) -> Result<(), Error> {
    for (pi, para) in paragraphs.iter().enumerate() {
        let indent = match para.kind {
            ParagraphKind::Numbered => NUMBERED_INDENT,
            ParagraphKind::Plain => 0.0,
        };
        let g = *paginator.geometry();
        let text_width = g.usable_width - indent;
        let lines = break_lines(&para.text, text_width, BODY_FONT_SIZE);

        log::debug!(
            "paragraph {pi}: {} lines at y={:.1} on page {}",
            lines.len(),
            paginator.current_y(),
            paginator.page_index(),
        );

        place_lines(paginator, &lines, TextAlign::Justify, g.margin + indent, text_width)?;
        paragraph_gap(paginator)?;
    }
    Ok(())
}

/// Addressee lines at the head of the first page, left-aligned.
pub(crate) fn flow_addressee(
    paginator: &mut Paginator<'_>,
    config: &LayoutConfig,
) -> Result<(), Error> {
    let g = *paginator.geometry();
    let mut lines: Vec<TextLine> = Vec::new();
    if let Some(name) = non_empty(&config.addressee_name) {
        lines.extend(break_lines(name, g.usable_width, BODY_FONT_SIZE));
    }
    if let Some(org) = non_empty(&config.addressee_organization) {
        for source_line in org.lines() {
            lines.extend(break_lines(source_line, g.usable_width, BODY_FONT_SIZE));
        }
    }
    if lines.is_empty() {
        return Ok(());
    }

    place_lines(paginator, &lines, TextAlign::Left, g.margin, g.usable_width)?;
    paragraph_gap(paginator)
}

/// Place a wrapped paragraph at the cursor. Whole paragraphs that fit are
/// placed as one block; otherwise as many lines as fit stay on this page and
/// the rest continue after a page break. A paragraph whose first line does not
/// fit moves to the next page in its entirety.
fn place_lines(
    paginator: &mut Paginator<'_>,
    lines: &[TextLine],
    align: TextAlign,
    x: f32,
    width: f32,
) -> Result<(), Error> {
    let total = lines.len();
    if total == 0 {
        return Ok(());
    }

    if lines_fitting(paginator.remaining()) >= total {
        emit_block(paginator, lines, 0, total, align, x, width);
        return Ok(());
    }

    let mut start = 0;
    loop {
        let available = lines_fitting(paginator.remaining());
        let take = available.min(total - start);
        if take > 0 {
            emit_block(paginator, &lines[start..start + take], start, total, align, x, width);
            start += take;
        } else if start == 0 {
            log::debug!(
                "deferring paragraph to page {}: no line fits at y={:.1}",
                paginator.page_index() + 1,
                paginator.current_y(),
            );
        }
        if start == total {
            return Ok(());
        }
        paginator.break_page()?;
    }
}

/// Emit `chunk` at the cursor. `first_line_index` and `total_line_count` locate
/// the chunk within its paragraph so only the paragraph's final line stays
/// unjustified.
fn emit_block(
    paginator: &mut Paginator<'_>,
    chunk: &[TextLine],
    first_line_index: usize,
    total_line_count: usize,
    align: TextAlign,
    x: f32,
    width: f32,
) {
    let top = paginator.current_y();
    let last_line_idx = total_line_count.saturating_sub(1);
    for (i, line) in chunk.iter().enumerate() {
        let global_line_idx = first_line_index + i;
        let baseline = top + i as f32 * LINE_HEIGHT + BASELINE_RATIO * LINE_HEIGHT;
        paginator.push(place_line(
            line,
            align,
            global_line_idx != last_line_idx,
            x,
            width,
            baseline,
            BODY_FONT_SIZE,
        ));
    }
    paginator.advance(chunk.len() as f32 * LINE_HEIGHT);
}

/// The gap after a paragraph. A gap that would overflow breaks the page instead,
/// carrying nothing over.
fn paragraph_gap(paginator: &mut Paginator<'_>) -> Result<(), Error> {
    if fits(PARAGRAPH_GAP, paginator.remaining()) {
        paginator.advance(PARAGRAPH_GAP);
    } else {
        paginator.break_page()?;
    }
    Ok(())
}
