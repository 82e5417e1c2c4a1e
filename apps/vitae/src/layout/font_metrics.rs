//! Static character-width metrics for the editor's font choices.
//!
//! Widths are in em units (relative to font size). One base table is kept for
//! Inter; every other face is modelled as a uniform horizontal scale of it.
//! That is coarse, but the estimator only needs line counts, and a wrong
//! guess by a few percent moves a break by at most one word.
//!
//! The table covers ASCII 0x20..=0x7E. Index = (char as usize) - 32.

use crate::models::settings::FontChoice;

/// Inter advance widths at 1em.
///
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[rustfmt::skip]
const BASE_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0     1     2     3     4     5     6     7     8     9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

/// Fallback for codepoints outside the table.
const AVERAGE_CHAR_WIDTH: f32 = 0.52;

/// Width multiplier relative to Inter.
fn width_scale(font: FontChoice) -> f32 {
    match font {
        FontChoice::Inter => 1.0,
        FontChoice::Merriweather => 1.08,
        FontChoice::Lora => 0.95,
        FontChoice::Montserrat => 1.07,
        FontChoice::OpenSans => 1.0,
        FontChoice::Roboto => 0.97,
        FontChoice::RobotoCondensed => 0.85,
    }
}

/// Width metrics for one face, with the user's letter spacing folded in.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    scale: f32,
    /// Extra advance per character, in em.
    letter_spacing_em: f32,
}

impl FontMetrics {
    pub fn new(font: FontChoice, letter_spacing_em: f32) -> Self {
        FontMetrics {
            scale: width_scale(font),
            letter_spacing_em,
        }
    }

    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        let base = if (32..=126).contains(&code) {
            BASE_WIDTHS[code - 32]
        } else {
            AVERAGE_CHAR_WIDTH
        };
        base * self.scale + self.letter_spacing_em
    }

    pub fn space_width(&self) -> f32 {
        self.char_width(' ')
    }

    /// Rendered width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Lines `s` occupies when greedily word-wrapped at `width_em`.
    ///
    /// Blank text occupies zero lines. A single word wider than the line still
    /// counts as one line; real renderers overflow it rather than break it.
    pub fn estimated_lines(&self, s: &str, width_em: f32) -> u32 {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return 0;
        };
        let space = self.space_width();
        let mut lines = 1u32;
        let mut current = self.measure_str(first);

        for word in words {
            let w = self.measure_str(word);
            if current + space + w > width_em {
                lines += 1;
                current = w;
            } else {
                current += space + w;
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inter() -> FontMetrics {
        FontMetrics::new(FontChoice::Inter, 0.0)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(inter().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let m = inter();
        let w = m.measure_str("ab");
        assert!((w - 1.12).abs() < 1e-5, "got {w}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let w = inter().measure_str("é");
        assert!((w - AVERAGE_CHAR_WIDTH).abs() < 1e-5);
    }

    #[test]
    fn test_letter_spacing_widens_each_char() {
        let plain = inter().measure_str("abcd");
        let spaced = FontMetrics::new(FontChoice::Inter, 0.05).measure_str("abcd");
        assert!((spaced - plain - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_condensed_font_narrower_than_wide_font() {
        let s = "Engineered distributed systems";
        let condensed = FontMetrics::new(FontChoice::RobotoCondensed, 0.0).measure_str(s);
        let wide = FontMetrics::new(FontChoice::Merriweather, 0.0).measure_str(s);
        assert!(condensed < wide);
    }

    #[test]
    fn test_estimated_lines_blank_is_zero() {
        assert_eq!(inter().estimated_lines("   ", 40.0), 0);
    }

    #[test]
    fn test_estimated_lines_single_word_is_one_line() {
        assert_eq!(inter().estimated_lines("Supercalifragilistic", 2.0), 1);
    }

    #[test]
    fn test_estimated_lines_long_text_wraps() {
        let text = "word ".repeat(40);
        // "word" is 2.17em and a space 0.25em: nine words per 23em line.
        let lines = inter().estimated_lines(&text, 23.0);
        assert_eq!(lines, 5);
    }
}
