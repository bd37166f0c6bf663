//! Interactive password generator widget.

mod input;
mod text;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use crate::clipboard::LazyClipboard;
use crate::settings::GenerationConfig;
use crate::terminal::{ScreenGuard, clear};
use crate::widget::Widget;

use input::{Action, action};

/// Redraw interval while idle, so copy feedback expires on time.
const TICK: Duration = Duration::from_millis(200);

/// Run the TUI until the user quits.
pub fn run(config: GenerationConfig) -> io::Result<()> {
    let mut widget = Widget::new(config);
    let mut clipboard = LazyClipboard::default();
    let mut guard = ScreenGuard::new()?;
    clear();

    loop {
        text::draw(&widget, Instant::now());

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action(key, widget.focus()) {
            Action::Quit => break,
            Action::Generate => widget.regenerate(),
            Action::Copy => {
                if let Err(e) = widget.copy(&mut clipboard, Instant::now()) {
                    debug!("copy refused: {e}");
                }
            }
            Action::FocusNext => widget.focus_next(),
            Action::FocusPrev => widget.focus_prev(),
            Action::Length(delta) => widget.step_length(delta),
            Action::Toggle => widget.toggle_focused(),
            Action::ExcludePush(c) => widget.push_excluded(c),
            Action::ExcludePop => widget.pop_excluded(),
            Action::ExcludeClear => widget.set_excluded(""),
            Action::Ignore => {}
        }
    }

    guard.restore();
    Ok(())
}
