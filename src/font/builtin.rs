//! Glyph tables for the built-in faces.
//!
//! Rows are listed top to bottom; within a row the leftmost pixel is the
//! most significant of the low `width` bits.

/// 3x5 face: letters, digits, punctuation. A few wide letters (m, n, q, w)
/// take extra columns to stay legible.
pub(super) const TINY: &[(char, u8, &[u8])] = &[
    (' ', 1, &[0b0, 0b0, 0b0, 0b0, 0b0]),
    ('a', 3, &[0b010, 0b101, 0b111, 0b101, 0b101]),
    ('b', 3, &[0b110, 0b101, 0b110, 0b101, 0b110]),
    ('c', 3, &[0b011, 0b100, 0b100, 0b100, 0b011]),
    ('d', 3, &[0b110, 0b101, 0b101, 0b101, 0b110]),
    ('e', 3, &[0b111, 0b100, 0b110, 0b100, 0b111]),
    ('f', 3, &[0b111, 0b100, 0b110, 0b100, 0b100]),
    ('g', 3, &[0b011, 0b100, 0b101, 0b101, 0b011]),
    ('h', 3, &[0b101, 0b101, 0b111, 0b101, 0b101]),
    ('i', 3, &[0b111, 0b010, 0b010, 0b010, 0b111]),
    ('j', 3, &[0b011, 0b001, 0b001, 0b101, 0b010]),
    ('k', 3, &[0b101, 0b110, 0b100, 0b110, 0b101]),
    ('l', 3, &[0b100, 0b100, 0b100, 0b100, 0b111]),
    ('m', 5, &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001]),
    ('n', 4, &[0b1001, 0b1101, 0b1011, 0b1001, 0b1001]),
    ('o', 3, &[0b010, 0b101, 0b101, 0b101, 0b010]),
    ('p', 3, &[0b110, 0b101, 0b110, 0b100, 0b100]),
    ('q', 4, &[0b0110, 0b1001, 0b1001, 0b1010, 0b0101]),
    ('r', 3, &[0b110, 0b101, 0b110, 0b101, 0b101]),
    ('s', 3, &[0b011, 0b100, 0b010, 0b001, 0b110]),
    ('t', 3, &[0b111, 0b010, 0b010, 0b010, 0b010]),
    ('u', 3, &[0b101, 0b101, 0b101, 0b101, 0b111]),
    ('v', 3, &[0b101, 0b101, 0b101, 0b101, 0b010]),
    ('w', 5, &[0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
    ('x', 3, &[0b101, 0b101, 0b010, 0b101, 0b101]),
    ('y', 3, &[0b101, 0b101, 0b010, 0b010, 0b010]),
    ('z', 3, &[0b111, 0b001, 0b010, 0b100, 0b111]),
    ('0', 3, &[0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', 3, &[0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', 3, &[0b110, 0b001, 0b010, 0b100, 0b111]),
    ('3', 3, &[0b111, 0b001, 0b011, 0b001, 0b111]),
    ('4', 3, &[0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', 3, &[0b111, 0b100, 0b110, 0b001, 0b110]),
    ('6', 3, &[0b011, 0b100, 0b111, 0b101, 0b111]),
    ('7', 3, &[0b111, 0b001, 0b010, 0b010, 0b010]),
    ('8', 3, &[0b111, 0b101, 0b111, 0b101, 0b111]),
    ('9', 3, &[0b111, 0b101, 0b111, 0b001, 0b110]),
    ('!', 1, &[0b1, 0b1, 0b1, 0b0, 0b1]),
    ('?', 3, &[0b110, 0b001, 0b010, 0b000, 0b010]),
    ('.', 1, &[0b0, 0b0, 0b0, 0b0, 0b1]),
    (',', 2, &[0b00, 0b00, 0b00, 0b01, 0b10]),
    (':', 1, &[0b0, 0b1, 0b0, 0b1, 0b0]),
    (';', 2, &[0b00, 0b01, 0b00, 0b01, 0b10]),
    ('\'', 1, &[0b1, 0b1, 0b0, 0b0, 0b0]),
    ('"', 3, &[0b101, 0b101, 0b000, 0b000, 0b000]),
    ('-', 3, &[0b000, 0b000, 0b111, 0b000, 0b000]),
    ('_', 3, &[0b000, 0b000, 0b000, 0b000, 0b111]),
    ('+', 3, &[0b000, 0b010, 0b111, 0b010, 0b000]),
    ('=', 3, &[0b000, 0b111, 0b000, 0b111, 0b000]),
    ('/', 3, &[0b001, 0b001, 0b010, 0b100, 0b100]),
    ('\\', 3, &[0b100, 0b100, 0b010, 0b001, 0b001]),
    ('(', 2, &[0b01, 0b10, 0b10, 0b10, 0b01]),
    (')', 2, &[0b10, 0b01, 0b01, 0b01, 0b10]),
    ('[', 2, &[0b11, 0b10, 0b10, 0b10, 0b11]),
    (']', 2, &[0b11, 0b01, 0b01, 0b01, 0b11]),
    ('<', 3, &[0b001, 0b010, 0b100, 0b010, 0b001]),
    ('>', 3, &[0b100, 0b010, 0b001, 0b010, 0b100]),
    ('*', 3, &[0b000, 0b101, 0b010, 0b101, 0b000]),
    ('%', 3, &[0b101, 0b001, 0b010, 0b100, 0b101]),
];

/// 5x7 numeric face for clocks and scores.
pub(super) const DIGITS: &[(char, u8, &[u8])] = &[
    (' ', 2, &[0b00, 0b00, 0b00, 0b00, 0b00, 0b00, 0b00]),
    ('0', 5, &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', 3, &[0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111]),
    ('2', 5, &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
    ('3', 5, &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', 5, &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', 5, &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', 5, &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', 5, &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', 5, &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', 5, &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    (':', 1, &[0b0, 0b0, 0b1, 0b0, 0b1, 0b0, 0b0]),
    ('.', 1, &[0b0, 0b0, 0b0, 0b0, 0b0, 0b0, 0b1]),
    ('-', 4, &[0b0000, 0b0000, 0b0000, 0b1111, 0b0000, 0b0000, 0b0000]),
    ('/', 5, &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
];
