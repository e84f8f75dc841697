use std::sync::OnceLock;

/// Millimetres per PDF point.
pub(crate) const PT_TO_MM: f32 = 25.4 / 72.0;

pub(crate) const FONT_RESOURCE: &str = "F1";

/// Standard 14 Helvetica metrics. Everything is measured and drawn with this one
/// face, so layout does not depend on fonts installed on the host.
pub(crate) struct FontMetrics {
    widths_1000: Vec<f32>,
}

impl FontMetrics {
    pub(crate) fn helvetica() -> &'static FontMetrics {
        static HELVETICA: OnceLock<FontMetrics> = OnceLock::new();
        HELVETICA.get_or_init(|| FontMetrics {
            widths_1000: helvetica_widths(),
        })
    }

    /// Width of a single character in 1000-units; unencodable chars measure zero
    /// since the renderer drops them.
    pub(crate) fn char_width_1000(&self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        if byte >= 32 {
            self.widths_1000[(byte - 32) as usize]
        } else {
            0.0
        }
    }

    /// Width of `word` in millimetres at `font_size` points.
    pub(crate) fn word_width(&self, word: &str, font_size: f32) -> f32 {
        let units: f32 = word.chars().map(|ch| self.char_width_1000(ch)).sum();
        units * font_size / 1000.0 * PT_TO_MM
    }

    pub(crate) fn space_width(&self, font_size: f32) -> f32 {
        self.word_width(" ", font_size)
    }
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b >= 32)
        .collect()
}

/// The first printable character the WinAnsi encoding cannot carry, and how
/// many such characters `texts` hold in total. `None` when nothing is lost.
pub(crate) fn lost_characters<'a>(
    texts: impl IntoIterator<Item = &'a str>,
) -> Option<(char, usize)> {
    let mut lost = texts
        .into_iter()
        .flat_map(|text| text.chars())
        .filter(|&c| !c.is_control() && char_to_winansi(c) == 0);
    let first = lost.next()?;
    Some((first, 1 + lost.count()))
}

/// Helvetica AFM widths at 1000 units/em for WinAnsi bytes 32..=255.
fn helvetica_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 | 33 => 278.0,
            34 => 355.0,
            35 | 36 => 556.0,
            37 => 889.0,
            38 => 667.0,
            39 => 191.0,
            40 | 41 => 333.0,
            42 => 389.0,
            43 => 584.0,
            44 => 278.0,
            45 => 333.0,
            46 | 47 => 278.0,
            48..=57 => 556.0,
            58 | 59 => 278.0,
            60..=62 => 584.0,
            63 => 556.0,
            64 => 1015.0,
            65 | 66 => 667.0,
            67 | 68 => 722.0,
            69 => 667.0,
            70 => 611.0,
            71 => 778.0,
            72 => 722.0,
            73 => 278.0,
            74 => 500.0,
            75 => 667.0,
            76 => 556.0,
            77 => 833.0,
            78 => 722.0,
            79 => 778.0,
            80 => 667.0,
            81 => 778.0,
            82 => 722.0,
            83 => 667.0,
            84 => 611.0,
            85 => 722.0,
            86 => 667.0,
            87 => 944.0,
            88 | 89 => 667.0,
            90 => 611.0,
            91..=93 => 278.0,
            94 => 469.0,
            95 => 556.0,
            96 => 333.0,
            97 | 98 => 556.0,
            99 => 500.0,
            100 | 101 => 556.0,
            102 => 278.0,
            103 | 104 => 556.0,
            105 | 106 => 222.0,
            107 => 500.0,
            108 => 222.0,
            109 => 833.0,
            110..=113 => 556.0,
            114 => 333.0,
            115 => 500.0,
            116 => 278.0,
            117 => 556.0,
            118 => 500.0,
            119 => 722.0,
            120..=122 => 500.0,
            123 => 334.0,
            124 => 260.0,
            125 => 334.0,
            126 => 584.0,
            // 0x80..=0x9F: Windows-1252 specials
            0x80 => 556.0,
            0x82 => 222.0,
            0x83 => 556.0,
            0x84 => 333.0,
            0x85 => 1000.0,
            0x86 | 0x87 => 556.0,
            0x88 => 333.0,
            0x89 => 1000.0,
            0x8A => 667.0,
            0x8B => 333.0,
            0x8C => 1000.0,
            0x8E => 611.0,
            0x91 | 0x92 => 222.0,
            0x93 | 0x94 => 333.0,
            0x95 => 350.0,
            0x96 => 556.0,
            0x97 => 1000.0,
            0x98 => 333.0,
            0x99 => 1000.0,
            0x9A => 500.0,
            0x9B => 333.0,
            0x9C => 944.0,
            0x9E => 500.0,
            0x9F => 667.0,
            // Latin-1 supplement
            0xA0 => 278.0,
            0xA1 => 333.0,
            0xA2..=0xA5 => 556.0,
            0xA6 => 260.0,
            0xA7 => 556.0,
            0xA8 => 333.0,
            0xA9 => 737.0,
            0xAA => 370.0,
            0xAB => 556.0,
            0xAC => 584.0,
            0xAD => 333.0,
            0xAE => 737.0,
            0xAF => 333.0,
            0xB0 => 400.0,
            0xB1 => 584.0,
            0xB2..=0xB4 => 333.0,
            0xB5 => 556.0,
            0xB6 => 537.0,
            0xB7 => 278.0,
            0xB8 | 0xB9 => 333.0,
            0xBA => 365.0,
            0xBB => 556.0,
            0xBC..=0xBE => 834.0,
            0xBF => 611.0,
            0xC0..=0xC5 => 667.0,
            0xC6 => 1000.0,
            0xC7 => 722.0,
            0xC8..=0xCB => 667.0,
            0xCC..=0xCF => 278.0,
            0xD0 | 0xD1 => 722.0,
            0xD2..=0xD6 => 778.0,
            0xD7 => 584.0,
            0xD8 => 778.0,
            0xD9..=0xDC => 722.0,
            0xDD | 0xDE => 667.0,
            0xDF => 611.0,
            0xE0..=0xE5 => 556.0,
            0xE6 => 889.0,
            0xE7 => 500.0,
            0xE8..=0xEB => 556.0,
            0xEC..=0xEF => 278.0,
            0xF0..=0xF6 => 556.0,
            0xF7 => 584.0,
            0xF8 => 611.0,
            0xF9..=0xFC => 556.0,
            0xFD => 500.0,
            0xFE => 556.0,
            0xFF => 500.0,
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_letters_measure_like_their_base() {
        let m = FontMetrics::helvetica();
        assert_eq!(m.char_width_1000('ç'), m.char_width_1000('c'));
        assert_eq!(m.char_width_1000('ã'), m.char_width_1000('a'));
    }

    #[test]
    fn unmappable_chars_are_dropped_and_weightless() {
        let m = FontMetrics::helvetica();
        assert_eq!(m.char_width_1000('\u{4E2D}'), 0.0);
        assert_eq!(to_winansi_bytes("a\u{4E2D}b"), b"ab".to_vec());
    }

    #[test]
    fn lost_characters_counts_across_texts() {
        assert_eq!(lost_characters(["Declaração", "São Paulo\n\t"]), None);
        assert_eq!(
            lost_characters(["a\u{4E2D}b", "ok", "\u{1F600}\u{1F600}"]),
            Some(('\u{4E2D}', 3))
        );
    }

    #[test]
    fn word_width_scales_with_font_size() {
        let m = FontMetrics::helvetica();
        let w11 = m.word_width("Declaração", 11.0);
        let w22 = m.word_width("Declaração", 22.0);
        assert!((w22 - 2.0 * w11).abs() < 1e-4);
    }
}
