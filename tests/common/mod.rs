#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use declaration_pdf::compose::{LINE_HEIGHT, wrap_text};
use declaration_pdf::{Document, DrawOp, ImageSpec, LayoutConfig, Page};

pub const WORD: &str = "declaração";

pub fn png_bytes(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([180, 20, 40, alpha]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 40, 180]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Jpeg)
        .expect("encode jpeg");
    buf.into_inner()
}

pub fn image(data: Vec<u8>, width_mm: f32, height_mm: f32) -> ImageSpec {
    ImageSpec {
        data,
        width_mm,
        height_mm,
    }
}

pub fn signatory_layout() -> LayoutConfig {
    LayoutConfig {
        signature_city: Some("São Paulo".into()),
        signature_date: Some("1 de janeiro de 2025".into()),
        signatory_name: Some("Maria da Silva".into()),
        signatory_role: Some("Diretora Comercial".into()),
        signatory_cpf: Some("CPF 123.456.789-00".into()),
        signatory_company: Some("Exemplo Engenharia Ltda".into()),
        signatory_company_registration: Some("CNPJ 12.345.678/0001-90".into()),
        ..LayoutConfig::default()
    }
}

/// Letterhead layout: images and text in both header and footer plus signatory.
pub fn full_layout() -> LayoutConfig {
    LayoutConfig {
        header_image: Some(image(png_bytes(8, 2, 255), 170.0, 20.0)),
        footer_image: Some(image(jpeg_bytes(8, 2), 170.0, 15.0)),
        header_text: Some("EXEMPLO ENGENHARIA LTDA\nCNPJ 12.345.678/0001-90".into()),
        footer_text: Some("Rua Exemplo, 100 - São Paulo/SP".into()),
        addressee_name: Some("Ao Pregoeiro".into()),
        addressee_organization: Some("Prefeitura Municipal\nPregão Eletrônico 12/2025".into()),
        ..signatory_layout()
    }
}

/// A paragraph that wraps to exactly `n` body lines at full width.
pub fn paragraph_with_lines(n: usize) -> String {
    let mut words: Vec<&str> = Vec::new();
    loop {
        let text = words.join(" ");
        if wrap_text(&text, 170.0, 0.0).len() == n {
            return text;
        }
        words.push(WORD);
    }
}

/// `n` one-line paragraphs, one per line.
pub fn short_paragraphs(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Item {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rules(page: &Page) -> usize {
    page.ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Rule { .. }))
        .count()
}

/// Lowest point reached by any body-size text line on each page.
pub fn lowest_body_band(doc: &Document) -> Vec<f32> {
    doc.pages
        .iter()
        .map(|page| {
            page.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Text {
                        baseline,
                        font_size,
                        ..
                    } if *font_size == 11.0 => Some(baseline + (1.0 - 0.76) * LINE_HEIGHT),
                    _ => None,
                })
                .fold(0.0f32, f32::max)
        })
        .collect()
}

pub fn page_of(doc: &Document, line: &str) -> Option<usize> {
    doc.pages
        .iter()
        .position(|p| p.text_lines().iter().any(|l| l == line))
}

pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "declaration-pdf-{}-{name}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
