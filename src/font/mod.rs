//! Bitmap fonts for the text engine.
//!
//! A [`Font`] maps characters to [`Glyph`]s of a fixed height and variable
//! width. Lookup folds to ASCII lowercase, matching how the glyph tables are
//! keyed, so `draw_text("HI", ..)` and `draw_text("hi", ..)` render the same
//! pixels. Two fonts ship built in: [`Font::tiny`], a 3x5 face covering
//! letters, digits and common punctuation, and [`Font::digits`], a 5x7
//! numeric face for clock and score readouts.
//!
//! # Example
//!
//! ```
//! use pixoo_client::Font;
//!
//! let font = Font::tiny();
//! assert_eq!(font.height(), 5);
//! assert!(font.glyph('a').is_some());
//! assert_eq!(font.advance('A'), font.advance('a'));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

mod builtin;

/// Tallest glyph any font can hold, in rows.
pub const MAX_GLYPH_HEIGHT: usize = 8;

/// One character bitmap: a width plus one bit row per scanline.
///
/// Within a row the leftmost column is the most significant of the low
/// `width` bits, so a 3-wide row of `0b110` lights the two left pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    rows: [u8; MAX_GLYPH_HEIGHT],
}

impl Glyph {
    /// Builds a glyph from its row bitmaps. Rows beyond the font height are
    /// ignored; missing trailing rows read as empty.
    pub fn new(width: u8, rows: &[u8]) -> Self {
        let mut padded = [0u8; MAX_GLYPH_HEIGHT];
        for (slot, row) in padded.iter_mut().zip(rows.iter()) {
            *slot = *row;
        }
        Self {
            width,
            rows: padded,
        }
    }

    /// Advance width in pixels, not counting inter-glyph spacing.
    #[inline]
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Whether the pixel at column `x`, row `y` is set.
    #[inline]
    pub fn bit(&self, x: u32, y: u32) -> bool {
        if y as usize >= MAX_GLYPH_HEIGHT {
            return false;
        }
        // A degenerate zero-width glyph still indexes as one column wide.
        let width = u32::from(self.width).max(1);
        if x >= width {
            return false;
        }
        (self.rows[y as usize] >> (width - 1 - x)) & 1 == 1
    }
}

/// A fixed-height bitmap font.
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    height: u32,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Creates an empty font of the given glyph height.
    pub fn new(name: impl Into<String>, height: u32) -> Self {
        Self {
            name: name.into(),
            height,
            glyphs: HashMap::new(),
        }
    }

    /// Adds a glyph, keyed case-insensitively.
    pub fn with_glyph(mut self, character: char, width: u8, rows: &[u8]) -> Self {
        self.glyphs
            .insert(character.to_ascii_lowercase(), Glyph::new(width, rows));
        self
    }

    fn from_table(name: &str, height: u32, table: &[(char, u8, &[u8])]) -> Self {
        let mut font = Font::new(name, height);
        for (character, width, rows) in table {
            font = font.with_glyph(*character, *width, rows);
        }
        font
    }

    /// Font name, for diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph height in pixels; also the line advance of boxed text.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Looks up the glyph for a character, folding to ASCII lowercase.
    /// Returns `None` for characters the font does not cover.
    #[inline]
    pub fn glyph(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character.to_ascii_lowercase())
    }

    /// Advance width of a character, `0` when the font has no glyph for it.
    #[inline]
    pub fn advance(&self, character: char) -> u32 {
        self.glyph(character).map_or(0, Glyph::width)
    }

    /// Rendered width of a run of characters: every glyph advance plus one
    /// pixel of spacing after each character.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|c| self.advance(c) + 1).sum()
    }

    /// Built-in 3x5 face covering ASCII letters, digits and punctuation.
    pub fn tiny() -> &'static Font {
        static FONT: OnceLock<Font> = OnceLock::new();
        FONT.get_or_init(|| Font::from_table("tiny", 5, builtin::TINY))
    }

    /// Built-in 5x7 numeric face for clock and score readouts.
    pub fn digits() -> &'static Font {
        static FONT: OnceLock<Font> = OnceLock::new();
        FONT.get_or_init(|| Font::from_table("digits", 7, builtin::DIGITS))
    }
}
