use ratatui::{prelude::*, widgets::*};

use crate::app::state::{AppState, CardTile};
use crate::assets::ImageLoadState;
use crate::ui::components::utils::{split_vertical, tile_rects, visible_tiles};
use crate::ui::styles::{heading, hint_line, tile_status_style};
use crate::utils::truncate_to_width;

/// Rows used by a single gallery tile, borders included.
pub const TILE_HEIGHT: u16 = 4;

pub fn render_cards(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = split_vertical(area, &[Constraint::Length(2), Constraint::Min(1)]);

    let title = Paragraph::new(heading(state.catalog().title.clone())).alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let gallery = chunks[1];
    let total = state.tiles().len();
    let window = visible_tiles(total, state.scroll(), gallery.height, TILE_HEIGHT);
    let rects = tile_rects(gallery, TILE_HEIGHT, window.len());

    for (rect, idx) in rects.into_iter().zip(window) {
        render_tile(f, rect, idx, total, &state.tiles()[idx]);
    }
}

fn render_tile(f: &mut Frame, area: Rect, idx: usize, total: usize, tile: &CardTile) {
    let label_width = usize::from(area.width.saturating_sub(12));
    let title = format!(
        " {} ",
        truncate_to_width(tile.display_name.trim(), label_width)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title(block::Title::from(format!(" {}/{} ", idx + 1, total)).alignment(Alignment::Right));

    let lines = tile_lines(tile);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn tile_lines(tile: &CardTile) -> Vec<Line<'static>> {
    let filename = tile.filename.clone();
    let state = tile.slot.state();
    let status = tile_status_style(state);
    match state {
        ImageLoadState::Loading => {
            vec![Line::styled(format!("Loading {filename}..."), status)]
        }
        ImageLoadState::Loaded(image) => vec![
            Line::from(vec![Span::styled("■ ", status), Span::raw(filename)]),
            hint_line(format!(
                "{}x{} px, {} bytes",
                image.width, image.height, image.byte_len
            )),
        ],
        ImageLoadState::NotFound => vec![
            Line::styled(format!("Error loading: {filename}"), status),
            hint_line("not found"),
        ],
        ImageLoadState::Failed(reason) => vec![
            Line::styled(format!("Error loading: {filename}"), status),
            hint_line(reason.clone()),
        ],
    }
}
