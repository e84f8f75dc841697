use declaration_pdf::compose::{classify, split_paragraphs};
use declaration_pdf::{ParagraphKind, ParagraphSplit};

#[test]
fn numbered_prefixes() {
    assert_eq!(classify("1. Primeiro"), ParagraphKind::Numbered);
    assert_eq!(classify("12) Décimo segundo"), ParagraphKind::Numbered);
    assert_eq!(classify("   3.\tRecuado"), ParagraphKind::Numbered);
}

#[test]
fn non_numbered_prefixes() {
    assert_eq!(classify("Declaramos que"), ParagraphKind::Plain);
    assert_eq!(classify("1.5 milhão"), ParagraphKind::Plain);
    assert_eq!(classify("2025."), ParagraphKind::Plain);
    assert_eq!(classify("a) alínea"), ParagraphKind::Plain);
    assert_eq!(classify("1-item"), ParagraphKind::Plain);
    assert_eq!(classify(""), ParagraphKind::Plain);
}

#[test]
fn every_line_mode_makes_each_line_a_paragraph() {
    let paras = split_paragraphs("Primeiro\nSegundo\n\n\n1. Terceiro\n", ParagraphSplit::EveryLine);
    let texts: Vec<&str> = paras.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["Primeiro", "Segundo", "1. Terceiro"]);
    assert_eq!(paras[2].kind, ParagraphKind::Numbered);
}

#[test]
fn blank_line_mode_joins_lines_within_a_paragraph() {
    let source = "Primeira linha\n  continua aqui\n\n \n2) Segundo parágrafo\n";
    let paras = split_paragraphs(source, ParagraphSplit::BlankLine);
    let texts: Vec<&str> = paras.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["Primeira linha continua aqui", "2) Segundo parágrafo"]);
    assert_eq!(paras[0].kind, ParagraphKind::Plain);
    assert_eq!(paras[1].kind, ParagraphKind::Numbered);
}

#[test]
fn empty_source_has_no_paragraphs() {
    assert!(split_paragraphs("", ParagraphSplit::EveryLine).is_empty());
    assert!(split_paragraphs("\n \n", ParagraphSplit::BlankLine).is_empty());
}

#[test]
fn crlf_line_endings_are_handled() {
    let paras = split_paragraphs("Um\r\nDois\r\n", ParagraphSplit::EveryLine);
    let texts: Vec<&str> = paras.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["Um", "Dois"]);
}
