use crate::fonts::FontMetrics;
use crate::model::{DrawOp, PlacedWord, TextAlign};

use super::geometry::BODY_FONT_SIZE;

pub(crate) struct WordChunk {
    pub(crate) text: String,
    pub(crate) x_offset: f32, // x relative to line start
    pub(crate) width: f32,
}

pub(crate) struct TextLine {
    pub(crate) chunks: Vec<WordChunk>,
    pub(crate) total_width: f32,
}

impl TextLine {
    pub(crate) fn text(&self) -> String {
        self.chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn finish_line(chunks: &mut Vec<WordChunk>) -> TextLine {
    let total_width = chunks.last().map(|c| c.x_offset + c.width).unwrap_or(0.0);
    TextLine {
        chunks: std::mem::take(chunks),
        total_width,
    }
}

/// Greedy word wrap. Words are never split: a word wider than `max_width` gets a
/// line of its own and protrudes past the boundary. Runs of whitespace collapse
/// to one space. Empty or blank input yields no lines.
pub(crate) fn break_lines(text: &str, max_width: f32, font_size: f32) -> Vec<TextLine> {
    let metrics = FontMetrics::helvetica();
    let space_w = metrics.space_width(font_size);

    let mut lines: Vec<TextLine> = Vec::new();
    let mut current_chunks: Vec<WordChunk> = Vec::new();
    let mut current_x: f32 = 0.0;

    for word in text.split_whitespace() {
        let ww = metrics.word_width(word, font_size);
        if ww > max_width {
            log::warn!("word wider than the text width ({ww:.1}mm > {max_width:.1}mm): {word:?}");
        }

        let proposed_x = if current_chunks.is_empty() {
            0.0
        } else {
            current_x + space_w
        };

        if !current_chunks.is_empty() && proposed_x + ww > max_width {
            lines.push(finish_line(&mut current_chunks));
            current_x = 0.0;
        } else {
            current_x = proposed_x;
        }

        current_chunks.push(WordChunk {
            text: word.to_string(),
            x_offset: current_x,
            width: ww,
        });
        current_x += ww;
    }

    if !current_chunks.is_empty() {
        lines.push(finish_line(&mut current_chunks));
    }
    lines
}

/// Wrap `text` into lines no wider than `max_width - indent` millimetres in the
/// body font.
pub fn wrap_text(text: &str, max_width: f32, indent: f32) -> Vec<String> {
    break_lines(text, max_width - indent, BODY_FONT_SIZE)
        .iter()
        .map(TextLine::text)
        .collect()
}

/// Width of `text` in millimetres in the body font, words joined by single spaces.
pub fn text_width(text: &str) -> f32 {
    let metrics = FontMetrics::helvetica();
    let space_w = metrics.space_width(BODY_FONT_SIZE);
    let mut width = 0.0;
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            width += space_w;
        }
        width += metrics.word_width(word, BODY_FONT_SIZE);
    }
    width
}

/// Wrap multi-line furniture text (header, footer, addressee): each non-blank
/// source line wraps on its own.
pub(crate) fn wrap_block(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    text.lines()
        .flat_map(|line| break_lines(line, max_width, font_size))
        .map(|line| line.text())
        .collect()
}

/// Resolve a wrapped line to a positioned text op. `justify` stretches the
/// inter-word gaps so the line fills `width` edge to edge; single-word lines
/// stay left-aligned.
pub(crate) fn place_line(
    line: &TextLine,
    align: TextAlign,
    justify: bool,
    margin_left: f32,
    width: f32,
    baseline: f32,
    font_size: f32,
) -> DrawOp {
    let line_start_x = match align {
        TextAlign::Center => margin_left + (width - line.total_width) / 2.0,
        TextAlign::Right => margin_left + width - line.total_width,
        TextAlign::Left | TextAlign::Justify => margin_left,
    };

    let stretch = align == TextAlign::Justify && justify && line.chunks.len() > 1;
    let extra_per_gap = if stretch {
        ((width - line.total_width) / (line.chunks.len() - 1) as f32).max(0.0)
    } else {
        0.0
    };

    let words = line
        .chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| PlacedWord {
            text: chunk.text.clone(),
            x_offset: chunk.x_offset + i as f32 * extra_per_gap,
        })
        .collect();

    DrawOp::Text {
        x: line_start_x,
        baseline,
        font_size,
        words,
    }
}

/// Single-line convenience for furniture text that never wraps mid-placement.
pub(crate) fn place_text(
    text: &str,
    align: TextAlign,
    margin_left: f32,
    width: f32,
    baseline: f32,
    font_size: f32,
) -> DrawOp {
    let line = break_lines(text, f32::INFINITY, font_size)
        .pop()
        .unwrap_or(TextLine {
            chunks: Vec::new(),
            total_width: 0.0,
        });
    place_line(&line, align, false, margin_left, width, baseline, font_size)
}
