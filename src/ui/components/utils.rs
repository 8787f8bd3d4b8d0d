use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}

/// Box of `height` rows vertically centered in `area`, full width.
pub fn middle_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    Rect::new(area.x, top, area.width, height)
}

/// Indices of the tiles that fit in `rows` when the gallery starts at `scroll`.
pub fn visible_tiles(total: usize, scroll: usize, rows: u16, tile_height: u16) -> Range<usize> {
    let per_page = usize::from(rows / tile_height.max(1)).max(1);
    let start = scroll.min(total);
    start..(start + per_page).min(total)
}

/// Stack `count` tiles of `tile_height` rows from the top of `area`,
/// dropping any that would spill past its bottom edge.
pub fn tile_rects(area: Rect, tile_height: u16, count: usize) -> Vec<Rect> {
    let bottom = area.y.saturating_add(area.height);
    (0..count)
        .map_while(|i| {
            let offset = u16::try_from(i).ok()?.checked_mul(tile_height)?;
            let y = area.y.checked_add(offset)?;
            (y.checked_add(tile_height)? <= bottom)
                .then(|| Rect::new(area.x, y, area.width, tile_height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_clamps_to_catalog_end() {
        assert_eq!(visible_tiles(10, 0, 8, 4), 0..2);
        assert_eq!(visible_tiles(10, 9, 8, 4), 9..10);
        assert_eq!(visible_tiles(3, 7, 8, 4), 3..3);
        assert_eq!(visible_tiles(5, 0, 2, 4), 0..1);
    }

    #[test]
    fn tiles_stop_at_the_bottom_edge() {
        let area = Rect::new(0, 2, 40, 10);
        let rects = tile_rects(area, 4, 5);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1], Rect::new(0, 6, 40, 4));
    }

    #[test]
    fn band_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 30, 11);
        assert_eq!(middle_band(area, 3), Rect::new(0, 4, 30, 3));
        assert_eq!(middle_band(area, 40), area);
    }
}
