use crate::error::Error;
use crate::model::{DrawOp, LayoutConfig, TextAlign, non_empty};

use super::geometry::{BASELINE_RATIO, BODY_FONT_SIZE, LINE_HEIGHT, fits};
use super::layout::place_text;
use super::paginate::Paginator;

/// Height reserved for the whole block, leading gap included.
pub const SIGNATURE_BLOCK_HEIGHT: f32 = 55.0;
pub const SIGNATURE_GAP: f32 = 10.0;
/// Blank space between the date line and the rule, for the handwritten signature.
const SIGNING_SPACE: f32 = 12.0;
const RULE_FIELD_GAP: f32 = 3.0;
pub const SIGNATURE_RULE_WIDTH: f32 = 80.0;

/// The "city, date." line, or `None` when both are empty.
pub fn date_line(config: &LayoutConfig) -> Option<String> {
    let joined = match (non_empty(&config.signature_city), non_empty(&config.signature_date)) {
        (Some(city), Some(date)) => format!("{city}, {date}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => return None,
    };
    if joined.ends_with('.') {
        Some(joined)
    } else {
        Some(format!("{joined}."))
    }
}

/// Signatory fields in render order, empty ones dropped.
pub fn signatory_fields(config: &LayoutConfig) -> Vec<&str> {
    [
        &config.signatory_name,
        &config.signatory_cpf,
        &config.signatory_role,
        &config.signatory_company,
        &config.signatory_company_registration,
    ]
    .into_iter()
    .filter_map(non_empty)
    .collect()
}

/// Height of the block below its leading gap: date line and signing space,
/// rule, then one line per field.
fn content_height(config: &LayoutConfig) -> f32 {
    let date = if date_line(config).is_some() {
        LINE_HEIGHT + SIGNING_SPACE
    } else {
        0.0
    };
    date + RULE_FIELD_GAP + signatory_fields(config).len() as f32 * LINE_HEIGHT
}

/// Place the signature block. It never straddles a page: when the reserved
/// height does not fit below the cursor the page is broken first, and a block
/// that cannot fit even there is an error rather than an overflow.
pub(crate) fn place_signature(
    paginator: &mut Paginator<'_>,
    config: &LayoutConfig,
) -> Result<(), Error> {
    // At the top of a page the block starts flush, without its leading gap.
    if !paginator.at_page_top() {
        if fits(SIGNATURE_BLOCK_HEIGHT, paginator.remaining()) {
            paginator.advance(SIGNATURE_GAP);
        } else {
            log::debug!(
                "signature block does not fit at y={:.1} on page {}, breaking",
                paginator.current_y(),
                paginator.page_index(),
            );
            paginator.break_page()?;
        }
    }

    let required = content_height(config);
    let available = paginator.remaining();
    if !fits(required, available) {
        log::warn!(
            "signature block ({required:.1}mm) does not fit the {available:.1}mm left on page {}",
            paginator.page_index(),
        );
        return Err(Error::SignatureDoesNotFit {
            required,
            available,
        });
    }

    let g = *paginator.geometry();

    if let Some(line) = date_line(config) {
        let baseline = paginator.current_y() + BASELINE_RATIO * LINE_HEIGHT;
        paginator.push(place_text(
            &line,
            TextAlign::Right,
            g.margin,
            g.usable_width,
            baseline,
            BODY_FONT_SIZE,
        ));
        paginator.advance(LINE_HEIGHT + SIGNING_SPACE);
    }

    let rule_x = (g.page_width - SIGNATURE_RULE_WIDTH) / 2.0;
    let rule_y = paginator.current_y();
    paginator.push(DrawOp::Rule {
        x1: rule_x,
        x2: rule_x + SIGNATURE_RULE_WIDTH,
        y: rule_y,
    });
    paginator.advance(RULE_FIELD_GAP);

    for field in signatory_fields(config) {
        let baseline = paginator.current_y() + BASELINE_RATIO * LINE_HEIGHT;
        paginator.push(place_text(
            field,
            TextAlign::Center,
            g.margin,
            g.usable_width,
            baseline,
            BODY_FONT_SIZE,
        ));
        paginator.advance(LINE_HEIGHT);
    }
    Ok(())
}
