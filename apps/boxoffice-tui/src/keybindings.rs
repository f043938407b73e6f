//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action while a chart is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Dismiss the chart and return to the menu
    Close,
}

/// Get the action for a key in the chart view
pub fn chart_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => {
            Some(Action::Close)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc, KeyCode::Enter] {
            assert_eq!(chart_action(code), Some(Action::Close));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(chart_action(KeyCode::Char('x')), None);
        assert_eq!(chart_action(KeyCode::Down), None);
    }
}
