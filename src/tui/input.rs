use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::widget::Control;

/// What a key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Generate,
    Copy,
    FocusNext,
    FocusPrev,
    Length(isize),
    Toggle,
    ExcludePush(char),
    ExcludePop,
    ExcludeClear,
    Ignore,
}

/// Map a key press to an action. Printable keys go to the exclusion field while it is focused.
pub fn action(key: KeyEvent, focus: Control) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Esc => return Action::Quit,
        KeyCode::Enter => return Action::Generate,
        KeyCode::Tab | KeyCode::Down => return Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => return Action::FocusPrev,
        _ => {}
    }

    if focus == Control::Exclude {
        return match key.code {
            KeyCode::Char('u') if ctrl => Action::ExcludeClear,
            KeyCode::Char(c) if !ctrl => Action::ExcludePush(c),
            KeyCode::Backspace | KeyCode::Delete => Action::ExcludePop,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Left if focus == Control::Length => Action::Length(-1),
        KeyCode::Right if focus == Control::Length => Action::Length(1),
        KeyCode::PageDown if focus == Control::Length => Action::Length(-10),
        KeyCode::PageUp if focus == Control::Length => Action::Length(10),
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Ignore,
    }
}
