//! Colours and glyphs
//!
//! Items share one lookup table keyed by kind; nothing else in the game
//! knows what an item looks like.

use crate::settings::GlyphStyle;
use crate::sim::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const BORDER: Rgb = Rgb(93, 216, 228);
pub const SNAKE: Rgb = Rgb(0, 255, 0);

/// Per-kind colour and ascii glyph
const ITEM_LOOK: [(ItemKind, Rgb, &str); 3] = [
    (ItemKind::Apple, Rgb(255, 0, 0), "@@"),
    (ItemKind::InedibleApple, Rgb(127, 123, 32), "xx"),
    (ItemKind::Stone, Rgb(224, 224, 224), "##"),
];

fn look(kind: ItemKind) -> (Rgb, &'static str) {
    ITEM_LOOK
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, rgb, glyph)| (*rgb, *glyph))
        .unwrap_or((BORDER, "??"))
}

pub fn item_color(kind: ItemKind) -> Rgb {
    look(kind).0
}

/// What one board cell looks like on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Empty,
    SnakeHead,
    SnakeBody,
    Item(ItemKind),
}

impl Paint {
    pub fn color(&self) -> Rgb {
        match self {
            Paint::Empty => BACKGROUND,
            Paint::SnakeHead | Paint::SnakeBody => SNAKE,
            Paint::Item(kind) => item_color(*kind),
        }
    }

    /// Two terminal columns for one cell
    pub fn glyph(&self, style: GlyphStyle) -> &'static str {
        match style {
            GlyphStyle::Blocks => match self {
                Paint::Empty => "  ",
                _ => "██",
            },
            GlyphStyle::Ascii => match self {
                Paint::Empty => "  ",
                Paint::SnakeHead => "OO",
                Paint::SnakeBody => "oo",
                Paint::Item(kind) => look(*kind).1,
            },
        }
    }
}
