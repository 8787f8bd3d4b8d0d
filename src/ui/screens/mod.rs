pub mod cards;
pub mod pages;

use ratatui::{prelude::*, widgets::*};

use crate::app::state::AppState;
use crate::ui::components::utils::split_vertical;
use crate::ui::navigation::Tab;
use crate::ui::styles::{active_tab_style, hint_span};

/// Render the whole app: tab bar, the selected page and the key help line.
pub fn draw(f: &mut Frame, state: &AppState) {
    let chunks = split_vertical(
        f.size(),
        &[
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ],
    );

    render_tab_bar(f, chunks[0], state);

    match state.tab() {
        Tab::Quiz => pages::render_quiz(f, chunks[1]),
        Tab::Cards => cards::render_cards(f, chunks[1], state),
        Tab::Settings => pages::render_settings(f, chunks[1], state),
    }

    render_help(f, chunks[2], state);
}

fn render_tab_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.settings().title.clone()),
        )
        .select(state.tab().index())
        .highlight_style(active_tab_style());
    f.render_widget(tabs, area);
}

fn render_help(f: &mut Frame, area: Rect, state: &AppState) {
    let help = Line::from(vec![
        hint_span("←/→ or 1-3 switch tabs • ↑/↓ scroll • r reload • q quit"),
        Span::raw("  "),
        hint_span(format!("catalog loaded {}", state.catalog_loaded_at())),
    ]);
    f.render_widget(Paragraph::new(help), area);
}


#[cfg(test)]
mod tests {
    use super::test_support::render_rows;
    use super::*;
    use crate::app::state::SettingsSummary;
    use crate::cards::CardCatalog;
    use std::sync::Arc;

    #[test]
    fn tab_bar_lists_all_sections() {
        let state = AppState::new(Arc::new(CardCatalog::builtin()), SettingsSummary::default());
        let rows = render_rows(&state, 80, 20);
        let bar = rows[1].clone();
        assert!(bar.contains("Quiz"), "tab bar: {bar}");
        assert!(bar.contains("Cards"), "tab bar: {bar}");
        assert!(bar.contains("Settings"), "tab bar: {bar}");
    }

    #[test]
    fn quiz_tab_shows_greeting() {
        let state = AppState::new(Arc::new(CardCatalog::builtin()), SettingsSummary::default());
        let rows = render_rows(&state, 80, 20);
        assert!(rows.iter().any(|row| row.contains("Hello Quiz Page!")));
    }
}
