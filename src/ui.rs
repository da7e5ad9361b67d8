//! Terminal showcase: Stats | Board | Next panels with a controls footer

use crate::bag::Bag;
use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Board};
use crate::piece::Piece;
use crate::render::{GlyphKind, GlyphSet, Palette, Rgb, board_lines};
use crate::settings::Settings;
use crate::tetromino::{Rotation, TetrominoType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TITLE: Rgb = Rgb(0x7e, 0x9c, 0xd8);
const STATS_BORDER: Rgb = Rgb(0x76, 0x94, 0x6a);
const BOARD_BORDER: Rgb = Rgb(0x7e, 0x9c, 0xd8);
const NEXT_BORDER: Rgb = Rgb(0x95, 0x7f, 0xb8);
const CONTROLS: Rgb = Rgb(0xc0, 0xa3, 0x6e);

/// Pieces shown in the Next panel
const PREVIEW_COUNT: usize = 3;

/// Border (2) plus padding (4) per panel, three panels, plus gaps
const LAYOUT_OVERHEAD: u16 = 3 * 6 + 4;

/// Everything the showcase draws
#[derive(Debug, Clone)]
pub struct Showcase {
    pub board: Board,
    pub active: Piece,
    pub bag: Bag,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    palette: Palette,
    glyph_set: GlyphSet,
    scale: i32,
}

impl Showcase {
    pub fn new(settings: &Settings, mut bag: Bag) -> Self {
        let active = spawn(bag.next());
        Self {
            board: sample_stack(),
            active,
            bag,
            score: 0,
            level: 1,
            lines: 0,
            palette: Palette::from_settings(&settings.palette),
            glyph_set: GlyphSet::from_settings(&settings.render),
            scale: settings.render.scale,
        }
    }

    /// Board with the active piece drawn in
    pub fn composed_board(&self) -> Board {
        let mut board = self.board;
        board.stamp(&self.active);
        board
    }
}

/// Anchor a piece at the top center, bounding box centered on the 10 columns
fn spawn(kind: TetrominoType) -> Piece {
    let col = (BOARD_WIDTH as i32 - kind.box_size()) / 2;
    Piece::new(kind, 0, col)
}

/// A few locked pieces so the board is not blank
fn sample_stack() -> Board {
    let mut board = Board::new();
    let placed = [
        Piece::new(TetrominoType::I, 18, 0),
        Piece::new(TetrominoType::O, 18, 3),
        Piece::new(TetrominoType::J, 18, 6),
        Piece {
            rotation: Rotation::Flip,
            ..Piece::new(TetrominoType::T, 16, 0)
        },
        Piece::new(TetrominoType::S, 17, 7),
        Piece {
            rotation: Rotation::Left,
            ..Piece::new(TetrominoType::L, 15, 7)
        },
    ];
    for piece in &placed {
        board.stamp(piece);
    }
    board
}

/// Widths of (side panel, board panel) for a terminal `width` columns wide
pub fn panel_widths(width: u16) -> (u16, u16) {
    let available = width.saturating_sub(LAYOUT_OVERHEAD).max(60);
    let side = (available / 5).max(16);
    let board = available.saturating_sub(2 * side).max(20);
    (side, board)
}

/// Largest cell scale that fits `area`, capped by the configured scale
pub fn fit_scale(area: Rect, configured: i32) -> i32 {
    let by_width = area.width as i32 / (2 * BOARD_WIDTH as i32);
    let by_height = area.height as i32 / BOARD_HEIGHT as i32;
    configured.min(by_width).min(by_height).max(1)
}

fn title(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default().fg(TITLE.into()).bold(),
    )
}

fn panel(border: Rgb) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border.into()))
}

pub fn render_showcase(frame: &mut Frame, showcase: &Showcase) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let (side, board_width) = panel_widths(area.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Length(2),
            Constraint::Length(board_width),
            Constraint::Length(2),
            Constraint::Length(side),
        ])
        .split(rows[0]);

    render_stats(frame, columns[0], showcase);
    render_board(frame, columns[2], showcase);
    render_next(frame, columns[4], showcase);

    let controls = Paragraph::new(Line::styled(
        "q / Esc / Ctrl+C = Quit",
        Style::default().fg(CONTROLS.into()),
    ));
    frame.render_widget(controls, rows[1]);
}

fn render_stats(frame: &mut Frame, area: Rect, showcase: &Showcase) {
    let lines = vec![
        title("Stats"),
        Line::raw(""),
        Line::raw(format!("Score: {}", showcase.score)),
        Line::raw(format!("Level: {}", showcase.level)),
        Line::raw(format!("Lines: {}", showcase.lines)),
        Line::raw(""),
        Line::raw(format!("Piece: {:?}", showcase.active.kind)),
        Line::raw(format!("Facing: {:?}", showcase.active.rotation)),
    ];
    let block = panel(STATS_BORDER);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_board(frame: &mut Frame, area: Rect, showcase: &Showcase) {
    let block = panel(BOARD_BORDER)
        .title(title(" Tetris "))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scale = fit_scale(inner, showcase.scale);
    let lines = board_lines(
        &showcase.composed_board(),
        &showcase.palette,
        &showcase.glyph_set,
        scale,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_next(frame: &mut Frame, area: Rect, showcase: &Showcase) {
    let mut lines = vec![title("Next"), Line::raw("")];
    for kind in showcase.bag.preview(PREVIEW_COUNT) {
        lines.extend(mini_piece(kind, &showcase.palette, &showcase.glyph_set));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines).block(panel(NEXT_BORDER)), area);
}

/// Spawn orientation of `kind`, skipping bounding-box rows it does not touch
fn mini_piece(kind: TetrominoType, palette: &Palette, glyph_set: &GlyphSet) -> Vec<Line<'static>> {
    let shape = kind.shape(Rotation::Spawn);
    let style = Style::default().fg(palette.color(kind.color()).into());
    (0..kind.box_size())
        .filter(|&row| shape.iter().any(|&(r, _)| r == row))
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..kind.box_size())
                .map(|col| {
                    if shape.contains(&(row, col)) {
                        Span::styled(glyph_set.text(GlyphKind::Block, 2), style)
                    } else {
                        Span::raw("  ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
