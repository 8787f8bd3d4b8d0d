use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{execute, terminal, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// RAII wrapper that keeps terminal raw/alternate mode scoped to the gallery loop.
///
/// The guard also owns the loop's tick: `next_key` waits at most one tick so
/// the caller can drain image loads and catalog updates between key presses.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    tick: Duration,
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw + alternate screen modes and hide the cursor.
    pub fn new(tick: Duration) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            tick,
            restored: false,
        })
    }

    /// Give callers mutable access so they can draw frames while the guard is alive.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<std::io::Stdout>> {
        &mut self.terminal
    }

    /// Wait up to one tick for a key press. `None` means the tick elapsed or
    /// the event was not a press (releases, repeats, mouse, resize).
    pub fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        if !event::poll(self.tick)? {
            return Ok(None);
        }
        Ok(pressed_key(event::read()?))
    }

    /// Restore the terminal once, regardless of how many times it is called.
    pub fn restore(&mut self) -> Result<()> {
        if !self.restored {
            self.terminal.show_cursor()?;
            self.terminal
                .backend_mut()
                .execute(terminal::LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.restored = true;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Keep only key presses; Windows terminals also report releases.
pub fn pressed_key(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn only_presses_reach_the_gallery() {
        assert_eq!(
            pressed_key(Event::Key(key(KeyEventKind::Press))),
            Some(key(KeyEventKind::Press))
        );
        assert_eq!(pressed_key(Event::Key(key(KeyEventKind::Release))), None);
        assert_eq!(pressed_key(Event::Key(key(KeyEventKind::Repeat))), None);
        assert_eq!(pressed_key(Event::Resize(80, 24)), None);
        assert_eq!(pressed_key(Event::FocusGained), None);
    }
}
