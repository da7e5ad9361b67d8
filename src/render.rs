//! Board rendering
//!
//! Rendering happens in two steps. [`glyphs`] projects the board onto a grid
//! of glyph kinds and color tags without knowing anything about terminals.
//! A [`RenderBackend`] then turns each glyph into styled text: ANSI escapes
//! through crossterm, plain text, or ratatui spans for the TUI.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Board};
use crate::settings::{PaletteSettings, RenderSettings};
use crate::tetromino::ColorTag;
use crossterm::style::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Empty,
    Block,
}

/// What to draw for one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub kind: GlyphKind,
    pub color: Option<ColorTag>,
}

pub type GlyphGrid = [[Glyph; BOARD_WIDTH]; BOARD_HEIGHT];

/// Project the board onto glyphs, row 0 first
pub fn glyphs(board: &Board) -> GlyphGrid {
    let mut grid = [[Glyph {
        kind: GlyphKind::Empty,
        color: None,
    }; BOARD_WIDTH]; BOARD_HEIGHT];
    for (out, row) in grid.iter_mut().zip(board.rows()) {
        for (glyph, cell) in out.iter_mut().zip(row.iter()) {
            if let Some(color) = cell.color() {
                *glyph = Glyph {
                    kind: GlyphKind::Block,
                    color: Some(color),
                };
            }
        }
    }
    grid
}

/// Characters used for each glyph kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub block: char,
    pub empty: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            block: '█',
            empty: '·',
        }
    }
}

impl GlyphSet {
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self {
            block: settings.block_glyph,
            empty: settings.empty_glyph,
        }
    }

    /// The glyph's character repeated `width` times
    pub fn text(&self, kind: GlyphKind, width: usize) -> String {
        let ch = match kind {
            GlyphKind::Block => self.block,
            GlyphKind::Empty => self.empty,
        };
        std::iter::repeat_n(ch, width).collect()
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse "#rrggbb" (leading '#' optional)
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        crossterm::style::Color::Rgb { r, g, b }
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ratatui::style::Color::Rgb(r, g, b)
    }
}

/// Foreground color for every color tag, plus the dim filler color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub cyan: Rgb,
    pub yellow: Rgb,
    pub purple: Rgb,
    pub green: Rgb,
    pub red: Rgb,
    pub blue: Rgb,
    pub orange: Rgb,
    pub empty: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cyan: Rgb(0x7a, 0xa2, 0xf7),
            yellow: Rgb(0xe0, 0xaf, 0x68),
            purple: Rgb(0x95, 0x7f, 0xb8),
            green: Rgb(0x76, 0x94, 0x6a),
            red: Rgb(0xe4, 0x68, 0x76),
            blue: Rgb(0x7e, 0x9c, 0xd8),
            orange: Rgb(0xff, 0xa0, 0x66),
            empty: Rgb(0x54, 0x54, 0x6d),
        }
    }
}

impl Palette {
    /// Build from settings. Unparseable entries keep the default color.
    pub fn from_settings(settings: &PaletteSettings) -> Self {
        let defaults = Palette::default();
        let pick = |name: &str, hex: &str, fallback: Rgb| {
            Rgb::parse_hex(hex).unwrap_or_else(|| {
                tracing::warn!(color = name, value = hex, "invalid palette color, using default");
                fallback
            })
        };
        Self {
            cyan: pick("cyan", &settings.cyan, defaults.cyan),
            yellow: pick("yellow", &settings.yellow, defaults.yellow),
            purple: pick("purple", &settings.purple, defaults.purple),
            green: pick("green", &settings.green, defaults.green),
            red: pick("red", &settings.red, defaults.red),
            blue: pick("blue", &settings.blue, defaults.blue),
            orange: pick("orange", &settings.orange, defaults.orange),
            empty: pick("empty", &settings.empty, defaults.empty),
        }
    }

    pub fn color(&self, tag: ColorTag) -> Rgb {
        match tag {
            ColorTag::Cyan => self.cyan,
            ColorTag::Yellow => self.yellow,
            ColorTag::Purple => self.purple,
            ColorTag::Green => self.green,
            ColorTag::Red => self.red,
            ColorTag::Blue => self.blue,
            ColorTag::Orange => self.orange,
        }
    }

    /// Foreground for a glyph: its tag's color, or the filler color
    pub fn foreground(&self, glyph: Glyph) -> Rgb {
        glyph.color.map_or(self.empty, |tag| self.color(tag))
    }
}

/// Turns a glyph's text into backend-specific styled text
pub trait RenderBackend {
    fn paint(&self, glyph: Glyph, text: &str) -> String;
}

/// Unstyled text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl RenderBackend for PlainBackend {
    fn paint(&self, _glyph: Glyph, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI foreground colors via crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiBackend {
    pub palette: Palette,
}

impl RenderBackend for AnsiBackend {
    fn paint(&self, glyph: Glyph, text: &str) -> String {
        let color: crossterm::style::Color = self.palette.foreground(glyph).into();
        text.with(color).to_string()
    }
}

/// Render with an explicit backend and glyph set.
///
/// Each cell is `2 * scale` characters wide and each board row is repeated
/// on `scale` lines. `scale` below 1 is treated as 1. No trailing newline.
pub fn render_with<B: RenderBackend + ?Sized>(
    board: &Board,
    backend: &B,
    glyph_set: &GlyphSet,
    scale: i32,
) -> String {
    let scale = scale.max(1) as usize;
    let width = 2 * scale;

    let mut lines = Vec::with_capacity(BOARD_HEIGHT * scale);
    for row in glyphs(board).iter() {
        let line: String = row
            .iter()
            .map(|&glyph| backend.paint(glyph, &glyph_set.text(glyph.kind, width)))
            .collect();
        for _ in 0..scale {
            lines.push(line.clone());
        }
    }
    lines.join("\n")
}

impl Board {
    /// Render the board as ANSI-colored text with the default palette
    pub fn render(&self, scale: i32) -> String {
        render_with(self, &AnsiBackend::default(), &GlyphSet::default(), scale)
    }
}

/// Board as ratatui lines, same layout rules as [`render_with`]
pub fn board_lines(
    board: &Board,
    palette: &Palette,
    glyph_set: &GlyphSet,
    scale: i32,
) -> Vec<Line<'static>> {
    let scale = scale.max(1) as usize;
    let width = 2 * scale;

    let mut lines = Vec::with_capacity(BOARD_HEIGHT * scale);
    for row in glyphs(board).iter() {
        let spans: Vec<Span<'static>> = row
            .iter()
            .map(|&glyph| {
                Span::styled(
                    glyph_set.text(glyph.kind, width),
                    Style::default().fg(palette.foreground(glyph).into()),
                )
            })
            .collect();
        for _ in 0..scale {
            lines.push(Line::from(spans.clone()));
        }
    }
    lines
}
