use std::fmt;

use crate::compose::PageGeometry;

/// Which of the two layout images a draw instruction or error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Header,
    Footer,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::Header => f.write_str("header"),
            ImageSlot::Footer => f.write_str("footer"),
        }
    }
}

/// Encoded image bytes (PNG or JPEG) plus the size they are drawn at.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSpec {
    pub data: Vec<u8>,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Everything about a declaration's page furniture. Immutable during composition;
/// an edited layout is a new value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutConfig {
    pub header_image: Option<ImageSpec>,
    pub footer_image: Option<ImageSpec>,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub addressee_name: Option<String>,
    pub addressee_organization: Option<String>,
    pub signature_city: Option<String>,
    /// Free-form display string, never parsed.
    pub signature_date: Option<String>,
    pub signatory_name: Option<String>,
    pub signatory_role: Option<String>,
    pub signatory_cpf: Option<String>,
    pub signatory_company: Option<String>,
    pub signatory_company_registration: Option<String>,
}

impl LayoutConfig {
    pub fn image(&self, slot: ImageSlot) -> Option<&ImageSpec> {
        match slot {
            ImageSlot::Header => self.header_image.as_ref(),
            ImageSlot::Footer => self.footer_image.as_ref(),
        }
    }
}

/// The layout used when none is selected: every field empty.
pub fn default_layout_config() -> LayoutConfig {
    LayoutConfig::default()
}

/// Returns the trimmed value when the field holds visible text.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParagraphKind {
    Plain,
    /// Starts with "N. " or "N) "; rendered with a left indent.
    Numbered,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub text: String,
}

/// How the declaration body is cut into paragraphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParagraphSplit {
    /// Every non-blank line is a paragraph.
    #[default]
    EveryLine,
    /// Blank lines separate paragraphs; lines inside one are joined.
    BlankLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// A word placed on a line, `x_offset` relative to the line's `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x_offset: f32,
}

/// A positioned draw instruction. Coordinates are millimetres from the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        baseline: f32,
        font_size: f32,
        words: Vec<PlacedWord>,
    },
    Image {
        slot: ImageSlot,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

impl DrawOp {
    /// The words of a text op joined by single spaces.
    pub fn text(&self) -> Option<String> {
        match self {
            DrawOp::Text { words, .. } => Some(
                words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub index: usize,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn text_lines(&self) -> Vec<String> {
        self.ops.iter().filter_map(DrawOp::text).collect()
    }

    pub fn images(&self) -> impl Iterator<Item = ImageSlot> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image { slot, .. } => Some(*slot),
            _ => None,
        })
    }
}

/// Closed pages in order, ready for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn text_lines(&self) -> Vec<Vec<String>> {
        self.pages.iter().map(Page::text_lines).collect()
    }
}
