// src/layout/fonts.rs
//! Glyph metrics for the four standard fonts the engine draws with.
//!
//! Widths come from the Adobe AFM tables (thousandths of an em at size 1.0)
//! for ASCII 0x20..=0x7E, indexed as `(char as usize) - 32`. A handful of
//! WinAnsi characters that actually occur in resume text (bullet, dashes,
//! typographic quotes, ellipsis) are special-cased; anything else falls back
//! to the font's average width. Measurement is pure: the same inputs always
//! produce the same width, which pagination depends on.

use serde::{Deserialize, Serialize};

/// One of the built-in PDF fonts. No font files are loaded or embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

struct FontMetricTable {
    /// ASCII 0x20..=0x7E advance widths.
    widths: [u16; 95],
    /// Fallback for codepoints outside the table.
    average_width: u16,
    ascent: i16,
    descent: i16,
}

impl Font {
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::TimesRoman,
        Font::TimesBold,
    ];

    /// BaseFont name used in the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
        }
    }

    fn table(&self) -> &'static FontMetricTable {
        match self {
            Font::Helvetica => &HELVETICA,
            Font::HelveticaBold => &HELVETICA_BOLD,
            Font::TimesRoman => &TIMES_ROMAN,
            Font::TimesBold => &TIMES_BOLD,
        }
    }

    fn advance(&self, c: char) -> u16 {
        let table = self.table();
        let code = c as usize;
        if (32..=126).contains(&code) {
            return table.widths[code - 32];
        }
        // WinAnsi extras the resume renderers actually draw.
        match c {
            '\u{2022}' => 350, // bullet, 350 in all four fonts
            '\u{2013}' => match self {
                Font::Helvetica | Font::HelveticaBold => 556,
                Font::TimesRoman | Font::TimesBold => 500,
            },
            '\u{2014}' | '\u{2026}' => 1000,
            '\u{2018}' | '\u{2019}' => match self {
                Font::Helvetica => 222,
                Font::HelveticaBold => 278,
                Font::TimesRoman | Font::TimesBold => 333,
            },
            '\u{201C}' | '\u{201D}' => match self {
                Font::Helvetica => 333,
                Font::HelveticaBold | Font::TimesBold => 500,
                Font::TimesRoman => 444,
            },
            _ => table.average_width,
        }
    }

    /// Rendered width of `text` at `size`, in points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.advance(c) as u32).sum();
        units as f32 / 1000.0 * size
    }

    /// Distance from the baseline to the top of the em box, in points.
    pub fn ascent(&self, size: f32) -> f32 {
        self.table().ascent as f32 / 1000.0 * size
    }

    /// Distance from the baseline to the bottom of the em box, in points.
    /// Negative, as in the AFM data.
    pub fn descent(&self, size: f32) -> f32 {
        self.table().descent as f32 / 1000.0 * size
    }
}

/// Maps text to the WinAnsi byte encoding declared in the PDF font
/// dictionaries. The repertoire must agree with `Font::advance`, so both
/// live in this module. Characters outside WinAnsi become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{0020}'..='\u{007E}' => c as u8,
            '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85,
            '\u{20AC}' => 0x80,
            _ => b'?',
        })
        .collect()
}

static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0 .. 9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         278,  278,  584,  584,  584,  556, 1015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         278,  278,  278,  469,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
        // {     |     }     ~
         334,  260,  334,  584,
    ],
    average_width: 556,
    ascent: 718,
    descent: -207,
};

static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0 .. 9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         333,  333,  584,  584,  584,  611,  975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         333,  278,  333,  584,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         611,  611,  611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,
        // {     |     }     ~
         389,  280,  389,  584,
    ],
    average_width: 611,
    ascent: 718,
    descent: -207,
};

static TIMES_ROMAN: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         250,  333,  408,  500,  500,  833,  778,  180,  333,  333,  500,  564,  250,  333,  250,  278,
        // 0 .. 9
         500,  500,  500,  500,  500,  500,  500,  500,  500,  500,
        // :     ;     <     =     >     ?     @
         278,  278,  564,  564,  564,  444,  921,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  667,  667,  722,  611,  556,  722,  722,  333,  389,  722,  611,  889,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  722,  556,  722,  667,  556,  611,  722,  722,  944,  722,  722,  611,
        // [     \     ]     ^     _     `
         333,  278,  333,  469,  500,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         444,  500,  444,  500,  444,  333,  500,  500,  278,  278,  500,  278,  778,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         500,  500,  500,  500,  333,  389,  278,  500,  500,  722,  500,  500,  444,
        // {     |     }     ~
         480,  200,  480,  541,
    ],
    average_width: 500,
    ascent: 683,
    descent: -217,
};

static TIMES_BOLD: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         250,  333,  555,  500,  500, 1000,  833,  278,  333,  333,  500,  570,  250,  333,  250,  278,
        // 0 .. 9
         500,  500,  500,  500,  500,  500,  500,  500,  500,  500,
        // :     ;     <     =     >     ?     @
         333,  333,  570,  570,  570,  500,  930,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  667,  722,  722,  667,  611,  778,  778,  389,  500,  778,  667,  944,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  611,  778,  722,  556,  667,  722,  722, 1000,  722,  722,  667,
        // [     \     ]     ^     _     `
         333,  278,  333,  581,  500,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         500,  556,  444,  556,  444,  333,  500,  556,  278,  333,  556,  278,  833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         556,  500,  556,  556,  444,  389,  333,  556,  500,  722,  500,  500,  444,
        // {     |     }     ~
         394,  220,  394,  520,
    ],
    average_width: 556,
    ascent: 676,
    descent: -205,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(Font::Helvetica.text_width("", 12.0), 0.0);
    }

    #[test]
    fn helvetica_known_word() {
        // H(722) + e(556) + l(222) + l(222) + o(556) = 2278 units
        let width = Font::Helvetica.text_width("Hello", 12.0);
        assert!((width - 27.336).abs() < 0.01, "got {width}");
    }

    #[test]
    fn bold_wider_than_regular() {
        let text = "Senior Software Engineer";
        assert!(
            Font::HelveticaBold.text_width(text, 11.0) > Font::Helvetica.text_width(text, 11.0)
        );
        assert!(Font::TimesBold.text_width(text, 11.0) > Font::TimesRoman.text_width(text, 11.0));
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let w10 = Font::TimesRoman.text_width("Resume", 10.0);
        let w20 = Font::TimesRoman.text_width("Resume", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }

    #[test]
    fn measurement_is_deterministic() {
        let text = "jane.doe@example.com";
        let a = Font::Helvetica.text_width(text, 9.5);
        let b = Font::Helvetica.text_width(text, 9.5);
        assert_eq!(a, b);
    }

    #[test]
    fn bullet_has_real_advance() {
        let width = Font::Helvetica.text_width("\u{2022}", 10.0);
        assert!((width - 3.5).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn unknown_codepoint_falls_back_to_average() {
        let width = Font::TimesRoman.text_width("\u{4E16}", 10.0);
        assert!((width - 5.0).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn ascent_descent_span_the_em_box() {
        for font in Font::ALL {
            assert!(font.ascent(12.0) > 0.0);
            assert!(font.descent(12.0) < 0.0);
            let span = font.ascent(12.0) - font.descent(12.0);
            assert!(span > 10.0 && span < 12.0, "{:?} span {span}", font);
        }
    }

    #[test]
    fn win_ansi_maps_typographic_characters() {
        assert_eq!(encode_win_ansi("a\u{2022}b"), vec![b'a', 0x95, b'b']);
        assert_eq!(encode_win_ansi("\u{2013}\u{2014}"), vec![0x96, 0x97]);
        // Outside WinAnsi degrades to '?', never panics.
        assert_eq!(encode_win_ansi("\u{4E16}"), vec![b'?']);
    }

    #[test]
    fn latin1_passthrough() {
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }
}
