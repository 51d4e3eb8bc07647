use rand::Rng;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{GridSize, Palette};
use crate::game_loop::GameLoop;
use crate::snake::Position;

/// Terminal columns per board cell; two columns keep cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

const CELL_GLYPH: &str = "  ";
const CONTROLS_HINT: &str = "WASD/arrows move · q quit";

/// Renders the full game frame from a completed tick.
pub fn render<R: Rng>(frame: &mut Frame<'_>, game: &GameLoop<R>, palette: &Palette) {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(palette.border));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let state = game.state();
    render_board(frame, inner, state.bounds(), palette);
    render_cell(frame, inner, state.bounds(), state.apple(), Style::new().bg(palette.apple));

    let snake_style = Style::new().bg(palette.snake);
    for segment in state.segments().iter().rev() {
        render_cell(frame, inner, state.bounds(), *segment, snake_style);
    }

    let summary = format!(
        " length {}  apples {}  round {}  tick {}",
        state.len(),
        game.apples_eaten(),
        game.round(),
        game.tick_count()
    );
    frame.render_widget(
        Paragraph::new(status_line(&summary, CONTROLS_HINT, status_area.width)).style(
            Style::new()
                .fg(palette.status)
                .add_modifier(Modifier::DIM),
        ),
        status_area,
    );
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, palette: &Palette) {
    let style = Style::new().bg(palette.background);
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            render_cell(frame, inner, bounds, Position { x, y }, style);
        }
    }
}

fn render_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, CELL_GLYPH, style);
}

/// Maps a board cell to the terminal column/row of its left half.
///
/// Returns `None` for off-board positions and for cells the terminal is too
/// small to show.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

/// Left-aligns `left` and right-aligns `right` within `width` columns.
///
/// When both do not fit, only `left` is kept.
fn status_line(left: &str, right: &str, width: u16) -> String {
    let width = usize::from(width);
    let used = left.width() + right.width();
    if used >= width {
        return left.to_owned();
    }

    format!("{left}{}{right}", " ".repeat(width - used))
}
