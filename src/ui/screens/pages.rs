use ratatui::{prelude::*, widgets::*};

use crate::app::state::AppState;
use crate::ui::components::utils::middle_band;
use crate::ui::styles::{heading, hint_line};

fn greeting(name: &str) -> String {
    format!("Hello {name}!")
}

pub fn render_quiz(f: &mut Frame, area: Rect) {
    let area = middle_band(area, 5);
    let body = Paragraph::new(heading(greeting("Quiz Page")))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    f.render_widget(body, area);
}

pub fn render_settings(f: &mut Frame, area: Rect, state: &AppState) {
    let settings = state.settings();
    let on_off = if settings.watch_catalog { "on" } else { "off" };

    let lines = vec![
        Line::from(greeting("Settings Page").bold()),
        Line::default(),
        Line::from(format!("Assets directory   {}", settings.assets_dir.display())),
        Line::from(format!("Image namespace    {}", settings.image_namespace)),
        Line::from(format!("Images available   {}", settings.available_images)),
        Line::from(format!("Catalog file       {}", settings.catalog_file.display())),
        Line::from(format!("Watch catalog      {on_off}")),
        Line::from(format!("Cards in catalog   {}", state.catalog().len())),
        Line::default(),
        hint_line("Filenames: trim, drop periods, lowercase, spaces to '-', append .png"),
    ];

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SettingsSummary;
    use crate::cards::CardCatalog;
    use crate::ui::navigation::{Tab, UiAction};
    use crate::ui::screens::test_support::render_rows;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn settings_page_reports_configuration() {
        let settings = SettingsSummary {
            title: "LearnCR".to_string(),
            assets_dir: PathBuf::from("assets"),
            image_namespace: "cards".to_string(),
            catalog_file: PathBuf::from("assets/cards.json"),
            watch_catalog: false,
            available_images: 6,
        };
        let mut state = AppState::new(Arc::new(CardCatalog::builtin()), settings);
        state.handle(UiAction::Select(Tab::Settings));

        let rows = render_rows(&state, 100, 24);
        assert!(rows.iter().any(|row| row.contains("Hello Settings Page!")));
        assert!(rows.iter().any(|row| row.contains("Images available   6")));
        assert!(rows.iter().any(|row| row.contains("Watch catalog      off")));
        assert!(rows.iter().any(|row| row.contains("Cards in catalog   10")));
    }
}
