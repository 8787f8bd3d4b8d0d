use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The three sections of the app, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Quiz,
    Cards,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Quiz, Tab::Cards, Tab::Settings];

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Quiz => "Quiz",
            Tab::Cards => "Cards",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Quiz => 0,
            Tab::Cards => 1,
            Tab::Settings => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Select(Tab),
    NextTab,
    PreviousTab,
    ScrollUp,
    ScrollDown,
    Reload,
    Quit,
}

pub fn action_for_key(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(UiAction::NextTab),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(UiAction::PreviousTab),
        KeyCode::Up | KeyCode::Char('k') => Some(UiAction::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiAction::ScrollDown),
        KeyCode::Char('r') => Some(UiAction::Reload),
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            Tab::from_index(index).map(UiAction::Select)
        }
        _ => None,
    }
}
