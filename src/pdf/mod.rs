mod images;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::{FONT_RESOURCE, PT_TO_MM, to_winansi_bytes};
use crate::model::{Document, DrawOp, ImageSlot, LayoutConfig, Page, PlacedWord};

use images::{DecodedImage, decode_image, embed_image};

const RULE_WIDTH_PT: f32 = 0.5;

fn mm(v: f32) -> f32 {
    v / PT_TO_MM
}

fn image_name(slot: ImageSlot) -> &'static str {
    match slot {
        ImageSlot::Header => "ImHeader",
        ImageSlot::Footer => "ImFooter",
    }
}

/// Images referenced by any page, decoded up front so a bad image fails the
/// whole render before any output exists.
fn decode_used_images(doc: &Document, config: &LayoutConfig) -> Result<Vec<DecodedImage>, Error> {
    let mut decoded = Vec::new();
    for slot in [ImageSlot::Header, ImageSlot::Footer] {
        if !doc.pages.iter().any(|p| p.images().any(|s| s == slot)) {
            continue;
        }
        let spec = config.image(slot).ok_or_else(|| Error::InvalidImageData {
            slot,
            reason: "page references an image the layout does not provide".into(),
        })?;
        decoded.push(decode_image(slot, spec)?);
    }
    Ok(decoded)
}

fn write_words(
    content: &mut Content,
    x: f32,
    baseline_pt: f32,
    font_size: f32,
    words: &[PlacedWord],
) {
    if words.is_empty() {
        return;
    }
    content.begin_text();
    content.set_font(Name(FONT_RESOURCE.as_bytes()), font_size);
    let mut td_x = 0.0_f32;
    let mut td_y = 0.0_f32;
    for word in words {
        let wx = mm(x + word.x_offset);
        content.next_line(wx - td_x, baseline_pt - td_y);
        td_x = wx;
        td_y = baseline_pt;
        content.show(Str(&to_winansi_bytes(&word.text)));
    }
    content.end_text();
}

fn page_content(page: &Page, page_height: f32) -> Content {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                baseline,
                font_size,
                words,
            } => {
                write_words(&mut content, *x, mm(page_height - baseline), *font_size, words);
            }
            DrawOp::Image {
                slot,
                x,
                y,
                width,
                height,
            } => {
                content.save_state();
                content.transform([
                    mm(*width),
                    0.0,
                    0.0,
                    mm(*height),
                    mm(*x),
                    mm(page_height - y - height),
                ]);
                content.x_object(Name(image_name(*slot).as_bytes()));
                content.restore_state();
            }
            DrawOp::Rule { x1, x2, y } => {
                let y_pt = mm(page_height - y);
                content.save_state();
                content.set_line_width(RULE_WIDTH_PT);
                content.move_to(mm(*x1), y_pt);
                content.line_to(mm(*x2), y_pt);
                content.stroke();
                content.restore_state();
            }
        }
    }
    content
}

/// Serialize a composed document to PDF bytes.
pub fn render(doc: &Document, config: &LayoutConfig) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let decoded = decode_used_images(doc, config)?;
    let t_images = t0.elapsed();

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let image_xobjects: Vec<(&'static str, Ref)> = decoded
        .iter()
        .map(|img| (image_name(img.slot), embed_image(&mut pdf, img, &mut alloc)))
        .collect();

    let g = &doc.geometry;
    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in doc.pages.iter().enumerate() {
        let raw = page_content(page, g.page_height).finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, mm(g.page_width), mm(g.page_height)))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(Name(FONT_RESOURCE.as_bytes()), font_id);
        if !image_xobjects.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &image_xobjects {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "Render phases: images={:.1}ms, assembly={:.1}ms ({} pages, {} bytes)",
        t_images.as_secs_f64() * 1000.0,
        (t0.elapsed() - t_images).as_secs_f64() * 1000.0,
        n,
        bytes.len(),
    );
    Ok(bytes)
}
