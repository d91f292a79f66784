use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::collision::Collision;
use crate::game::{GameController, GameStatus};
use crate::grid::Grid;
use crate::snake::Cell;

const GLYPH_SNAKE_HEAD: &str = "█";
const GLYPH_SNAKE_BODY: &str = "█";
const GLYPH_FOOD: &str = "●";

const COLOR_HEAD: Color = Color::Green;
const COLOR_BODY: Color = Color::Cyan;
const COLOR_FOOD: Color = Color::Yellow;

/// Renders one full frame from the controller's read-only state.
pub fn render(frame: &mut Frame<'_>, game: &GameController, high_score: u32) {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, game);
    render_snake(frame, inner, game);
    render_overlay(frame, inner, game);
    render_hud(frame, hud_area, game, high_score);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &GameController) {
    let Some((x, y)) = cell_to_screen(inner, game.grid(), game.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &GameController) {
    let head = game.snake.head();

    let buffer = frame.buffer_mut();
    for segment in game.snake.segments() {
        let Some((x, y)) = cell_to_screen(inner, game.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(COLOR_HEAD).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(COLOR_BODY));
        }
    }
}

fn render_overlay(frame: &mut Frame<'_>, inner: Rect, game: &GameController) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let message = match game.status {
        GameStatus::Running => return,
        GameStatus::Idle => "Press an arrow key or space to start".to_string(),
        GameStatus::Paused => "Paused - press space to resume".to_string(),
        GameStatus::GameOver => {
            let cause = match game.death_cause {
                Some(Collision::Wall) => "hit the wall",
                Some(Collision::SelfHit) => "ran into yourself",
                None => "game over",
            };
            format!("Game over ({cause}), score {} - press space to play again", game.score)
        }
        GameStatus::Won => format!(
            "You filled the grid! Score {} - press space to play again",
            game.score
        ),
    };

    let row = inner.y + inner.height / 2;
    let line_area = Rect::new(inner.x, row.min(inner.bottom().saturating_sub(1)), inner.width, 1);
    let paragraph = Paragraph::new(Line::from(message))
        .alignment(Alignment::Center)
        .style(Style::new().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, line_area);
}

fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &GameController, high_score: u32) {
    let line = Line::from(vec![
        Span::styled("Score ", Style::new().fg(Color::DarkGray)),
        Span::styled(game.score.to_string(), Style::new().fg(Color::White)),
        Span::styled("  High ", Style::new().fg(Color::DarkGray)),
        Span::styled(high_score.to_string(), Style::new().fg(Color::White)),
        Span::styled("  Speed ", Style::new().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2} cells/s", game.speed),
            Style::new().fg(Color::White),
        ),
        Span::styled("  [q]uit [r]estart [space] pause", Style::new().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Maps a logical grid cell to a terminal coordinate inside `inner`.
///
/// Cells that fall outside the visible area (small terminal) are skipped.
fn cell_to_screen(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
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
