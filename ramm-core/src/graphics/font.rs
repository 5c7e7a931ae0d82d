//! 5x5 glyph table
//!
//! Only digits and uppercase letters have glyphs. Each glyph is five column
//! bytes; bit `j` of column `i` is the pixel at `(i, j)` of the cell.

/// Width and height of a glyph cell in pixels
pub const GLYPH_SIZE: u8 = 5;

/// One glyph, stored column by column
pub type Glyph = [u8; GLYPH_SIZE as usize];

/// Blank cell, drawn for characters without a glyph
pub const BLANK: Glyph = [0x00; GLYPH_SIZE as usize];

/// Row 0 is blank, rows 1..=10 are `'0'..='9'`, rows 11..=36 are `'A'..='Z'`
const FONT_5X5: [Glyph; 37] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // blank
    [0x0E, 0x19, 0x15, 0x13, 0x0E], // '0'
    [0x00, 0x12, 0x1F, 0x10, 0x00], // '1'
    [0x19, 0x15, 0x15, 0x15, 0x12], // '2'
    [0x11, 0x15, 0x15, 0x15, 0x0A], // '3'
    [0x07, 0x04, 0x04, 0x1F, 0x04], // '4'
    [0x17, 0x15, 0x15, 0x15, 0x09], // '5'
    [0x0E, 0x15, 0x15, 0x15, 0x08], // '6'
    [0x01, 0x19, 0x05, 0x03, 0x01], // '7'
    [0x0A, 0x15, 0x15, 0x15, 0x0A], // '8'
    [0x02, 0x15, 0x15, 0x15, 0x0E], // '9'
    [0x1E, 0x05, 0x05, 0x05, 0x1E], // 'A'
    [0x1F, 0x15, 0x15, 0x15, 0x0A], // 'B'
    [0x0E, 0x11, 0x11, 0x11, 0x11], // 'C'
    [0x1F, 0x11, 0x11, 0x11, 0x0E], // 'D'
    [0x1F, 0x15, 0x15, 0x15, 0x11], // 'E'
    [0x1F, 0x05, 0x05, 0x05, 0x01], // 'F'
    [0x0E, 0x11, 0x11, 0x15, 0x0D], // 'G'
    [0x1F, 0x04, 0x04, 0x04, 0x1F], // 'H'
    [0x11, 0x11, 0x1F, 0x11, 0x11], // 'I'
    [0x09, 0x11, 0x11, 0x0F, 0x01], // 'J'
    [0x1F, 0x04, 0x04, 0x0A, 0x11], // 'K'
    [0x1F, 0x10, 0x10, 0x10, 0x10], // 'L'
    [0x1F, 0x02, 0x04, 0x02, 0x1F], // 'M'
    [0x1F, 0x02, 0x04, 0x08, 0x1F], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1F, 0x05, 0x05, 0x05, 0x02], // 'P'
    [0x0E, 0x11, 0x15, 0x09, 0x16], // 'Q'
    [0x1F, 0x05, 0x05, 0x0D, 0x12], // 'R'
    [0x12, 0x15, 0x15, 0x15, 0x09], // 'S'
    [0x01, 0x01, 0x1F, 0x01, 0x01], // 'T'
    [0x0F, 0x10, 0x10, 0x10, 0x0F], // 'U'
    [0x07, 0x08, 0x10, 0x08, 0x07], // 'V'
    [0x1F, 0x08, 0x04, 0x08, 0x1F], // 'W'
    [0x11, 0x0A, 0x04, 0x0A, 0x11], // 'X'
    [0x01, 0x02, 0x1C, 0x02, 0x01], // 'Y'
    [0x11, 0x19, 0x15, 0x13, 0x11], // 'Z'
];

/// Index of the first digit row
const DIGIT_ROW: usize = 1;

/// Index of the first letter row
const LETTER_ROW: usize = 11;

/// Look up the glyph for a character
///
/// Returns `None` for anything outside `'0'..='9'` and `'A'..='Z'`.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let row = match c {
        '0'..='9' => DIGIT_ROW + (c as usize - '0' as usize),
        'A'..='Z' => LETTER_ROW + (c as usize - 'A' as usize),
        _ => return None,
    };
    FONT_5X5.get(row)
}
