use crate::model::{Paragraph, ParagraphKind, ParagraphSplit};

/// A paragraph is numbered when its trimmed text starts with one or more ASCII
/// digits, then `.` or `)`, then whitespace.
pub fn classify(text: &str) -> ParagraphKind {
    let trimmed = text.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return ParagraphKind::Plain;
    }
    let mut rest = trimmed[digits..].chars();
    match (rest.next(), rest.next()) {
        (Some('.' | ')'), Some(ws)) if ws.is_whitespace() => ParagraphKind::Numbered,
        _ => ParagraphKind::Plain,
    }
}

/// Cut the declaration body into classified paragraphs.
pub fn split_paragraphs(source: &str, mode: ParagraphSplit) -> Vec<Paragraph> {
    let texts: Vec<String> = match mode {
        ParagraphSplit::EveryLine => source
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        ParagraphSplit::BlankLine => {
            let mut out = Vec::new();
            let mut current: Vec<&str> = Vec::new();
            for line in source.lines().map(str::trim) {
                if line.is_empty() {
                    if !current.is_empty() {
                        out.push(current.join(" "));
                        current.clear();
                    }
                } else {
                    current.push(line);
                }
            }
            if !current.is_empty() {
                out.push(current.join(" "));
            }
            out
        }
    };

    texts
        .into_iter()
        .map(|text| Paragraph {
            kind: classify(&text),
            text,
        })
        .collect()
}
