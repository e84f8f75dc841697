use declaration_pdf::compose::{text_width, wrap_text};

const DECLARATION: &str = "Declaramos, para os devidos fins, que a empresa não possui em seu quadro \
    de pessoal empregado menor de dezoito anos em trabalho noturno, perigoso ou insalubre, \
    e que cumpre plenamente os requisitos de habilitação exigidos no edital do certame.";

fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[test]
fn empty_and_blank_input_yield_no_lines() {
    assert!(wrap_text("", 170.0, 0.0).is_empty());
    assert!(wrap_text("  \t \n ", 170.0, 0.0).is_empty());
}

#[test]
fn words_survive_wrapping_in_order() {
    for width in [20.0, 45.0, 80.0, 170.0] {
        let lines = wrap_text(DECLARATION, width, 0.0);
        let rewrapped: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rewrapped, words(DECLARATION), "width {width}");
    }
}

#[test]
fn narrower_width_never_produces_fewer_lines() {
    let wide = wrap_text(DECLARATION, 170.0, 0.0).len();
    let narrow = wrap_text(DECLARATION, 60.0, 0.0).len();
    assert!(wide >= 2);
    assert!(narrow > wide);
}

#[test]
fn indent_reduces_the_available_width() {
    let plain = wrap_text(DECLARATION, 170.0, 0.0);
    let indented = wrap_text(DECLARATION, 170.0, 100.0);
    assert_eq!(indented, wrap_text(DECLARATION, 70.0, 0.0));
    assert!(indented.len() > plain.len());
}

#[test]
fn oversized_word_stands_alone_unbroken() {
    let giant = "inconstitucionalissimamente".repeat(3);
    let text = format!("a {giant} b");
    let lines = wrap_text(&text, 10.0, 0.0);
    assert_eq!(lines, vec!["a".to_string(), giant, "b".to_string()]);
}

#[test]
fn whitespace_collapses_to_single_spaces() {
    let lines = wrap_text("a   b\t\tc \n d", 170.0, 0.0);
    assert_eq!(lines, vec!["a b c d".to_string()]);
}

#[test]
fn wrapping_is_deterministic() {
    assert_eq!(
        wrap_text(DECLARATION, 97.5, 8.0),
        wrap_text(DECLARATION, 97.5, 8.0)
    );
}

#[test]
fn lines_are_greedy_and_stay_within_the_width() {
    for (width, indent) in [(20.0, 0.0), (45.0, 0.0), (80.0, 8.0), (120.0, 0.0), (170.0, 8.0)] {
        let available = width - indent;
        let lines = wrap_text(DECLARATION, width, indent);
        for (i, line) in lines.iter().enumerate() {
            if line.split_whitespace().count() > 1 {
                let w = text_width(line);
                assert!(w <= available + 1e-3, "{line:?} is {w}mm at width {available}");
            }
            // The next word would not have fit on this line.
            if let Some(next) = lines.get(i + 1) {
                let first = next.split_whitespace().next().expect("non-empty line");
                let grown = format!("{line} {first}");
                assert!(text_width(&grown) > available, "{grown:?} fits in {available}");
            }
        }
    }
}
