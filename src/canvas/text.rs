//! Glyph rendering, word wrapping and aligned text boxes.
//!
//! Characters the font does not cover are skipped without advancing more
//! than the single spacing pixel, so mixed known/unknown input degrades
//! gracefully instead of failing.

use crate::color::Rgb;
use crate::font::Font;
use crate::geometry::Point;

use super::FrameBuffer;

/// Horizontal placement of wrapped lines inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Lines start at the caller's x origin.
    #[default]
    Left,
    /// Lines are centered on half the box width.
    Center,
    /// Lines end at the right edge of the box.
    Right,
}

/// Wrapping constraints for [`FrameBuffer::draw_text_boxed`].
///
/// A `width` of `0` disables wrapping entirely; the text renders as a
/// single unconstrained run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    /// Box width in pixels; `0` means unconstrained.
    pub width: u32,
    /// Placement of each wrapped line.
    pub align: TextAlign,
}

impl TextBox {
    /// Left-aligned box of the given width.
    pub const fn new(width: u32) -> Self {
        Self {
            width,
            align: TextAlign::Left,
        }
    }

    /// Box with an explicit alignment.
    pub const fn aligned(width: u32, align: TextAlign) -> Self {
        Self { width, align }
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameBuffer {
    /// Draws a single glyph with its top-left corner at `origin`.
    /// Characters without a glyph in `font` draw nothing.
    pub fn draw_character(&mut self, character: char, origin: Point, color: Rgb, font: &Font) {
        let Some(glyph) = font.glyph(character) else {
            return;
        };
        // Degenerate zero-width glyphs still occupy one column.
        let width = glyph.width().max(1);
        for y in 0..font.height() {
            for x in 0..width {
                if glyph.bit(x, y) {
                    self.write_pixel(
                        Point::new(origin.x + x as i32, origin.y + y as i32),
                        color,
                    );
                }
            }
        }
    }

    /// Draws a single unconstrained run of text, advancing the cursor by
    /// each glyph's width plus one pixel of spacing.
    pub fn draw_text(&mut self, text: &str, origin: Point, color: Rgb, font: &Font) {
        let mut cursor = 0i32;
        for character in text.chars() {
            self.draw_character(
                character,
                Point::new(origin.x + cursor, origin.y),
                color,
                font,
            );
            cursor += font.advance(character) as i32 + 1;
        }
    }

    /// Draws text wrapped into a box, one font-height per line.
    ///
    /// Lines break between words where possible; a word wider than the box
    /// is split greedily into fragments that fill the space each line has
    /// left. With [`TextAlign::Left`] lines start at `origin.x`; centered
    /// and right-aligned lines are positioned against the box width alone.
    pub fn draw_text_boxed(
        &mut self,
        text: &str,
        origin: Point,
        color: Rgb,
        font: &Font,
        text_box: TextBox,
    ) {
        if text_box.width == 0 {
            self.draw_text(text, origin, color, font);
            return;
        }

        let width = text_box.width as i32;
        let mut y = origin.y;
        for line in wrap_words(text, text_box.width, font) {
            let line_width = font.text_width(&line) as i32;
            let x = match text_box.align {
                TextAlign::Left => origin.x,
                TextAlign::Right => width - line_width + 1,
                TextAlign::Center => width / 2 - line_width / 2,
            };
            self.draw_text(&line, Point::new(x, y), color, font);
            y += font.height() as i32;
        }
    }
}

/// Greedy word wrap: words are appended while they fit, and a word wider
/// than the whole box is split into fragments, each packed into the space
/// its line has left. The remainder after a split is re-examined, so even a
/// word several box-widths long comes out as full lines.
fn wrap_words(text: &str, width: u32, font: &Font) -> Vec<String> {
    let space_width = font.text_width(" ");
    let mut lines = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_width = 0u32;

    for word in text.split(' ') {
        let mut word = word.to_string();
        let mut word_width = font.text_width(&word);

        if current_width + word_width <= width {
            current_width += word_width + space_width;
            current.push(word);
            continue;
        }

        if word_width <= width {
            lines.push(current.join(" "));
            current_width = word_width + space_width;
            current = vec![word];
            continue;
        }

        // The word alone overflows the box.
        while word_width > width {
            let available = width.saturating_sub(current_width);
            let (mut fragment, rest) = split_word(&word, available, font);
            if fragment.is_empty() && current.is_empty() {
                // A single glyph wider than the box is emitted alone.
                let mut characters = word.chars();
                fragment.push(characters.next().expect("overflowing word is non-empty"));
                word = characters.as_str().to_string();
            } else {
                word = rest;
            }
            if !fragment.is_empty() {
                current.push(fragment);
            }
            lines.push(current.join(" "));
            current.clear();
            current_width = 0;
            word_width = font.text_width(&word);
        }
        if !word.is_empty() {
            current_width = word_width + space_width;
            current.push(word);
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Packs as many leading characters of `word` as fit in `available` pixels.
/// Returns the packed fragment and the untouched remainder.
fn split_word(word: &str, available: u32, font: &Font) -> (String, String) {
    let mut fragment = String::new();
    let mut used = 0u32;
    let mut rest_start = 0usize;

    for (index, character) in word.char_indices() {
        let advance = font.advance(character) + 1;
        if used + advance > available {
            break;
        }
        fragment.push(character);
        used += advance;
        rest_start = index + character.len_utf8();
    }

    (fragment, word[rest_start..].to_string())
}
