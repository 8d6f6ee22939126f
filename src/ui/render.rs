use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;
use crate::grid::SegmentGrid;

use super::widget::grid_size;

const HELP: &str = "Tab: focus  Ctrl+W: stop  Ctrl+F/B: colors  Esc: quit";

/// Bordered area a grid needs, clamped to `available`.
pub fn matrix_area(grid: &SegmentGrid, available: Rect) -> Rect {
    let (width, height) = grid_size(grid.rows(), grid.cols());
    Rect {
        x: available.x,
        y: available.y,
        width: width.saturating_add(2).min(available.width),
        height: height.saturating_add(2).min(available.height),
    }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_matrices(model, frame, chunks[0]);
    render_status_bar(model, frame, chunks[1]);
}

/// Stack the matrices top to bottom in start order; whatever does not fit
/// is left out.
fn render_matrices(model: &Model, frame: &mut Frame, area: Rect) {
    let mut remaining = area;
    for (id, animation) in model.registry.iter() {
        if remaining.height < 3 {
            break;
        }
        let grid = animation.grid();
        let outer = matrix_area(grid, remaining);
        let focused = model.focused == Some(id);
        let block = Block::default()
            .title(format!(" {id} {} ", animation.kind()))
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        frame.render_widget(grid, inner);

        remaining.y = remaining.y.saturating_add(outer.height);
        remaining.height = remaining.height.saturating_sub(outer.height);
    }
}

fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status = format!(" {}  {HELP}", model.status_text());
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}
