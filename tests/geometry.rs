mod common;

use declaration_pdf::compose::{
    FOOTER_LINE_HEIGHT, HEADER_FOOTER_PADDING, HEADER_LINE_HEIGHT, IMAGE_GAP, MARGIN,
    PAGE_HEIGHT, PAGE_WIDTH,
};
use declaration_pdf::{LayoutConfig, PageGeometry, default_layout_config};

#[test]
fn empty_layout_reserves_nothing() {
    let g = PageGeometry::resolve(&default_layout_config());
    assert_eq!(g.page_width, 210.0);
    assert_eq!(g.page_height, 297.0);
    assert_eq!(g.usable_width, 170.0);
    assert_eq!(g.header_height, 0.0);
    assert_eq!(g.footer_height, 0.0);
    assert_eq!(g.content_start_y, MARGIN);
    assert_eq!(g.content_max_y, PAGE_HEIGHT - MARGIN);
    assert_eq!(g.lines_per_page(), 51);
}

#[test]
fn header_and_footer_reservations_follow_formula() {
    let config = LayoutConfig {
        header_image: Some(common::image(common::png_bytes(4, 4, 255), 170.0, 20.0)),
        header_text: Some("Linha um\nLinha dois".into()),
        footer_image: Some(common::image(common::png_bytes(4, 4, 255), 170.0, 20.0)),
        footer_text: Some("Rodapé".into()),
        ..LayoutConfig::default()
    };
    let g = PageGeometry::resolve(&config);

    let header = 20.0 + IMAGE_GAP + 2.0 * HEADER_LINE_HEIGHT + HEADER_FOOTER_PADDING;
    let footer = 20.0 + IMAGE_GAP + FOOTER_LINE_HEIGHT + HEADER_FOOTER_PADDING;
    assert_eq!(g.header_height, header);
    assert_eq!(g.footer_height, footer);
    assert_eq!(g.content_max_y, PAGE_HEIGHT - footer - MARGIN);
    assert!(g.content_max_y < PAGE_HEIGHT - 20.0);
    assert!(g.content_start_y > g.header_height);
    assert!(g.footer_start_y > g.content_max_y);
}

#[test]
fn text_only_footer_gets_line_allowance_and_padding() {
    let config = LayoutConfig {
        footer_text: Some("Rua Exemplo, 100".into()),
        ..LayoutConfig::default()
    };
    let g = PageGeometry::resolve(&config);
    assert_eq!(g.footer_height, FOOTER_LINE_HEIGHT + HEADER_FOOTER_PADDING);
    assert_eq!(g.header_height, 0.0);
}

#[test]
fn blank_furniture_text_counts_as_absent() {
    let config = LayoutConfig {
        header_text: Some("  \n ".into()),
        footer_text: Some(String::new()),
        ..LayoutConfig::default()
    };
    assert_eq!(
        PageGeometry::resolve(&config),
        PageGeometry::resolve(&default_layout_config())
    );
}

#[test]
fn long_header_text_wraps_into_more_reserved_lines() {
    let long = ["palavra"; 60].join(" ");
    let config = LayoutConfig {
        header_text: Some(long),
        ..LayoutConfig::default()
    };
    let g = PageGeometry::resolve(&config);
    assert!(g.header_height > 2.0 * HEADER_LINE_HEIGHT + HEADER_FOOTER_PADDING);
}

#[test]
fn resolution_is_pure() {
    let config = common::full_layout();
    let a = PageGeometry::resolve(&config);
    let b = PageGeometry::resolve(&config);
    assert_eq!(a, b);
    assert_eq!(a.page_width, PAGE_WIDTH);
}

#[test]
fn fractional_image_heights_count_whole_lines_exactly() {
    // Heights in tenths of a millimetre; the content area is 239mm minus both.
    for header_tenths in 1..=200u32 {
        for footer_tenths in 1..=200u32 {
            let config = LayoutConfig {
                header_image: Some(common::image(
                    Vec::new(),
                    170.0,
                    header_tenths as f32 / 10.0,
                )),
                footer_image: Some(common::image(
                    Vec::new(),
                    170.0,
                    footer_tenths as f32 / 10.0,
                )),
                ..LayoutConfig::default()
            };
            let expected = ((2390 - header_tenths - footer_tenths) / 50) as usize;
            assert_eq!(
                PageGeometry::resolve(&config).lines_per_page(),
                expected,
                "header {header_tenths}/10mm, footer {footer_tenths}/10mm"
            );
        }
    }
}
