use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameStatus, Snapshot};
use crate::grid::{Cell, Grid};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_game_over_menu;

const GLYPH_SNAKE: &str = "\u{2588}"; // █
const GLYPH_FOOD: &str = "\u{25cf}"; // ●

/// Renders one full frame from an immutable snapshot.
///
/// The frame is a pure function of the snapshot and HUD values; rendering
/// never feeds back into the simulation.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, grid: Grid, info: HudInfo, theme: &Theme) {
    let area = frame.area();
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let board = board_rect(play_area, grid);
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border_fg))
        .style(Style::default().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, grid, snapshot.food, theme);
    render_body(frame, inner, grid, snapshot, theme);
    render_hud(frame, hud_area, snapshot, info, theme);

    if snapshot.status == GameStatus::GameOver {
        render_game_over_menu(frame, play_area, snapshot.score, info.high_score, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, grid: Grid, food: Cell, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, grid, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::default().fg(theme.food));
}

fn render_body(frame: &mut Frame<'_>, inner: Rect, grid: Grid, snapshot: &Snapshot, theme: &Theme) {
    let head = snapshot.body.first().copied();

    let buffer = frame.buffer_mut();
    for segment in &snapshot.body {
        let Some((x, y)) = cell_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let style = if Some(*segment) == head {
            Style::default()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Returns the bordered board rectangle centered in `area`.
fn board_rect(area: Rect, grid: Grid) -> Rect {
    let side = grid.size().saturating_add(2);
    let width = side.min(area.width);
    let height = side.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
