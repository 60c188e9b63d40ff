//! Text and item overlays rendered by the device itself.
//!
//! Overlays live on top of whatever animation is playing: the device takes
//! a declarative description (position, color, font, scroll behavior) and
//! does the rendering. [`TextOverlay`] drives the single-text command;
//! [`OverlayItem`]s are batched in an [`ItemBuffer`] and shipped as one
//! item list that replaces the previous one.

use serde_json::Value;

use crate::canvas::TextAlign;
use crate::color::{palette, Rgb};
use crate::geometry::Point;
use crate::protocol::{commands, Command};

/// Scroll direction of overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextScrollDirection {
    /// Text moves right to left.
    #[default]
    Left,
    /// Text moves left to right.
    Right,
}

impl TextScrollDirection {
    pub(crate) fn wire_value(self) -> u8 {
        match self {
            TextScrollDirection::Left => 0,
            TextScrollDirection::Right => 1,
        }
    }
}

/// What an overlay item displays. Values match the device's display-type
/// table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Seconds (SS).
    Seconds = 1,
    /// Minutes (MM).
    Minutes = 2,
    /// Hours (HH).
    Hours = 3,
    /// AM/PM marker.
    AmPm = 4,
    /// HH:MM.
    Time = 5,
    /// HH:MM:SS.
    TimeWithSeconds = 6,
    /// Year (YYYY).
    Year = 7,
    /// Day of month (DD).
    Day = 8,
    /// Month (MM).
    Month = 9,
    /// MM-YYYY.
    MonthYear = 10,
    /// MMM-DD.
    MonthDay = 11,
    /// DD-MMM-YYYY.
    Date = 12,
    /// Weekday, two letters.
    WeekdayTwo = 13,
    /// Weekday, three letters.
    WeekdayThree = 14,
    /// Weekday, full name.
    Weekday = 15,
    /// Month name (MMM).
    MonthName = 16,
    /// Current temperature.
    Temperature = 17,
    /// Daily high temperature.
    HighTemperature = 18,
    /// Daily low temperature.
    LowTemperature = 19,
    /// Weather forecast.
    Forecast = 20,
    /// Noise meter value.
    NoiseValue = 21,
    /// Caller-supplied text.
    Text = 22,
    /// Text polled from a URL returning `{"DispData": "..."}`.
    UrlRequest = 23,
}

impl ItemType {
    pub(crate) fn wire_value(self) -> u8 {
        self as u8
    }
}

fn align_wire_value(align: TextAlign) -> u8 {
    match align {
        TextAlign::Left => 1,
        TextAlign::Center => 2,
        TextAlign::Right => 3,
    }
}

/// A scrolling text overlay for `Draw/SendHttpText`.
///
/// Defaults mirror the device's: white text at the origin, identifier 1,
/// font 2, a 64 pixel scroll window, and no movement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    text: String,
    position: Point,
    color: Rgb,
    identifier: u8,
    font: u8,
    width: u32,
    scroll_speed: u32,
    direction: TextScrollDirection,
    lcd_index: u8,
}

impl TextOverlay {
    /// Creates an overlay showing `text` with default placement.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: Point::ORIGIN,
            color: palette::WHITE,
            identifier: 1,
            font: 2,
            width: 64,
            scroll_speed: 0,
            direction: TextScrollDirection::Left,
            lcd_index: 0,
        }
    }

    /// Top-left position of the scroll window.
    pub fn position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    /// Text color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Overlay slot, 0 to 19. Larger values clamp when sent.
    pub fn identifier(mut self, identifier: u8) -> Self {
        self.identifier = identifier;
        self
    }

    /// Device font index.
    pub fn font(mut self, font: u8) -> Self {
        self.font = font;
        self
    }

    /// Scroll window width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Scroll speed; 0 leaves the text static.
    pub fn scroll_speed(mut self, speed: u32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Scroll direction.
    pub fn direction(mut self, direction: TextScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Target panel on multi-panel devices, 0 to 4.
    pub fn lcd_index(mut self, lcd_index: u8) -> Self {
        self.lcd_index = lcd_index;
        self
    }

    pub(crate) fn to_command(&self) -> Command {
        Command::new(commands::SEND_TEXT)
            .with("LcdIndex", self.lcd_index.min(4))
            .with("TextId", self.identifier.min(19))
            .with("x", self.position.x)
            .with("y", self.position.y)
            .with("dir", self.direction.wire_value())
            .with("font", self.font)
            .with("TextWidth", self.width)
            .with("speed", self.scroll_speed)
            .with("TextString", self.text.as_str())
            .with("color", self.color.to_hex())
    }
}

/// One entry of an overlay item list.
///
/// Defaults mirror the device's: white at the origin, identifier 1, font
/// 2, a 64 by 16 pixel window, scroll speed 100, left aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayItem {
    item_type: ItemType,
    text: Option<String>,
    position: Point,
    color: Rgb,
    identifier: u8,
    direction: TextScrollDirection,
    font: u8,
    width: u32,
    height: u32,
    scroll_speed: u32,
    update_interval: Option<u32>,
    align: TextAlign,
}

impl OverlayItem {
    /// Creates an item of the given display type.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            text: None,
            position: Point::ORIGIN,
            color: palette::WHITE,
            identifier: 1,
            direction: TextScrollDirection::Left,
            font: 2,
            width: 64,
            height: 16,
            scroll_speed: 100,
            update_interval: None,
            align: TextAlign::Left,
        }
    }

    /// Shorthand for a [`ItemType::Text`] item with its content set.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ItemType::Text).with_text(text)
    }

    /// Displayed string; meaningful for text and URL request items.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Top-left position of the item window.
    pub fn position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    /// Item color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Item slot, 0 to 40. Larger values clamp when sent.
    pub fn identifier(mut self, identifier: u8) -> Self {
        self.identifier = identifier;
        self
    }

    /// Scroll direction.
    pub fn direction(mut self, direction: TextScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Device font index.
    pub fn font(mut self, font: u8) -> Self {
        self.font = font;
        self
    }

    /// Item window width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Item window height in pixels.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Scroll speed of the item content.
    pub fn scroll_speed(mut self, speed: u32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Refresh cadence in seconds for items that poll (URL requests).
    pub fn update_interval(mut self, seconds: u32) -> Self {
        self.update_interval = Some(seconds);
        self
    }

    /// Horizontal alignment inside the item window.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("TextId".into(), self.identifier.min(40).into());
        object.insert("type".into(), self.item_type.wire_value().into());
        object.insert("x".into(), self.position.x.into());
        object.insert("y".into(), self.position.y.into());
        object.insert("dir".into(), self.direction.wire_value().into());
        object.insert("font".into(), self.font.into());
        object.insert("TextWidth".into(), self.width.into());
        // The device expects this exact lowercase-h spelling.
        object.insert("Textheight".into(), self.height.into());
        object.insert("speed".into(), self.scroll_speed.into());
        object.insert("color".into(), self.color.to_hex().into());
        object.insert("align".into(), align_wire_value(self.align).into());
        if let Some(text) = &self.text {
            object.insert("TextString".into(), text.clone().into());
        }
        if let Some(seconds) = self.update_interval {
            object.insert("update_time".into(), seconds.into());
        }
        Value::Object(object)
    }
}

/// Items collected locally until [`ItemBuffer::to_command`] ships them.
#[derive(Debug, Clone, Default)]
pub struct ItemBuffer {
    items: Vec<OverlayItem>,
}

impl ItemBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an item. Order is preserved on the wire.
    pub fn add(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops all queued items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Builds the item list envelope. `NewFlag` is always 1: the shipped
    /// list replaces whatever the device showed before.
    pub(crate) fn to_command(&self, lcd_index: u8) -> Command {
        let items: Vec<Value> = self.items.iter().map(OverlayItem::to_json).collect();
        Command::new(commands::SEND_ITEM_LIST)
            .with("LcdIndex", lcd_index.min(4))
            .with("NewFlag", 1)
            .with("ItemList", items)
    }
}
