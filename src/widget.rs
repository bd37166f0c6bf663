//! Presentation adapter between the controls and the generator.
//!
//! Holds the current config, what is on screen and the copy feedback state.
//! Every control change regenerates. Nothing here touches the terminal, so
//! the TUI only has to render a `Widget` and forward key presses to it.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::error::{CopyError, GenerateError};
use crate::pass::strength::{self, StrengthReport};
use crate::pass::{self, Generated, StrengthLevel, charset};
use crate::settings::{GenerationConfig, Policy};

/// How long "Copied!" stays visible.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// What the password field currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    Password {
        generated: Generated,
        report: StrengthReport,
    },
    Placeholder(GenerateError),
}

/// Focusable controls, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    Exclude,
    Strict,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::Length,
        Control::Uppercase,
        Control::Lowercase,
        Control::Numbers,
        Control::Symbols,
        Control::Exclude,
        Control::Strict,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct Widget {
    config: GenerationConfig,
    display: Display,
    focus: Control,
    /// The exclusion field as typed; `config.excluded` is derived from it.
    exclude_text: String,
    copied_at: Option<Instant>,
    status: Option<String>,
    rng: SmallRng,
}

impl Widget {
    /// Create the widget and generate the initial password.
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    pub fn with_rng(config: GenerationConfig, rng: SmallRng) -> Self {
        let exclude_text = config.excluded_string();
        let mut widget = Self {
            config,
            display: Display::Placeholder(GenerateError::NoCharacterClassSelected),
            focus: Control::Length,
            exclude_text,
            copied_at: None,
            status: None,
            rng,
        };
        widget.regenerate();
        widget
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn exclude_text(&self) -> &str {
        &self.exclude_text
    }

    /// Text for the password field: the password or the error message.
    pub fn text(&self) -> String {
        match &self.display {
            Display::Password { generated, .. } => generated.password.clone(),
            Display::Placeholder(err) => err.to_string(),
        }
    }

    pub fn strength(&self) -> StrengthLevel {
        match &self.display {
            Display::Password { generated, .. } => generated.strength,
            Display::Placeholder(_) => StrengthLevel::None,
        }
    }

    /// One-shot message from the last copy attempt.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn regenerate(&mut self) {
        let result = pass::generate_with(&self.config, &mut self.rng);
        self.show(result);
    }

    fn show(&mut self, result: Result<Generated, GenerateError>) {
        let next = match result {
            Ok(generated) => {
                let alphabet_len = charset::build(&self.config).map(|c| c.len()).unwrap_or(0);
                let report = strength::report(&generated.password, alphabet_len);
                Display::Password { generated, report }
            }
            Err(err) => Display::Placeholder(err),
        };
        if let Display::Password { generated, .. } = &mut self.display {
            generated.password.zeroize();
        }
        self.display = next;
        self.status = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn step_length(&mut self, delta: isize) {
        self.config.step_length(delta);
        self.regenerate();
    }

    /// Flip the focused toggle. Does nothing on the length or exclusion fields.
    pub fn toggle_focused(&mut self) {
        match self.focus {
            Control::Uppercase => self.config.include_uppercase ^= true,
            Control::Lowercase => self.config.include_lowercase ^= true,
            Control::Numbers => self.config.include_numbers ^= true,
            Control::Symbols => self.config.include_symbols ^= true,
            Control::Strict => {
                self.config.policy = match self.config.policy {
                    Policy::Uniform => Policy::Strict,
                    Policy::Strict => Policy::Uniform,
                }
            }
            Control::Length | Control::Exclude => return,
        }
        self.regenerate();
    }

    pub fn set_excluded(&mut self, chars: &str) {
        self.exclude_text = chars.to_owned();
        self.exclusions_edited();
    }

    pub fn push_excluded(&mut self, c: char) {
        self.exclude_text.push(c);
        self.exclusions_edited();
    }

    /// Drop the last typed exclusion character.
    pub fn pop_excluded(&mut self) {
        if self.exclude_text.pop().is_some() {
            self.exclusions_edited();
        }
    }

    fn exclusions_edited(&mut self) {
        self.config.set_excluded(&self.exclude_text);
        self.regenerate();
    }

    /// Copy the shown password. Placeholders are never copied.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Instant) -> Result<(), CopyError> {
        let result = match &self.display {
            Display::Password { generated, .. } if !generated.password.is_empty() => clipboard
                .write(&generated.password)
                .map_err(CopyError::from),
            _ => Err(CopyError::NothingToCopy),
        };

        match &result {
            Ok(()) => {
                self.copied_at = Some(now);
                self.status = None;
            }
            Err(err) => {
                self.copied_at = None;
                self.status = Some(err.to_string());
            }
        }
        result
    }

    /// Whether "Copied!" should still be shown at `now`.
    pub fn copied_feedback(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK)
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        if let Display::Password { generated, .. } = &mut self.display {
            generated.password.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Vec<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("denied".into()));
            }
            self.contents.push(text.to_owned());
            Ok(())
        }
    }

    fn no_classes() -> GenerationConfig {
        GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_a_password() {
        let widget = Widget::new(GenerationConfig::default());
        assert_eq!(widget.text().chars().count(), 12);
        assert_ne!(widget.strength(), StrengthLevel::None);
    }

    #[test]
    fn no_class_shows_placeholder_with_no_strength() {
        let widget = Widget::new(no_classes());
        assert_eq!(widget.text(), "Select at least one character type");
        assert_eq!(widget.strength(), StrengthLevel::None);
        assert_eq!(
            widget.display(),
            &Display::Placeholder(GenerateError::NoCharacterClassSelected)
        );
    }

    #[test]
    fn emptied_alphabet_shows_explicit_message() {
        let mut config = no_classes();
        config.include_numbers = true;
        let mut widget = Widget::new(config);
        widget.set_excluded("0123456789");
        assert_eq!(widget.text(), "No characters available after exclusions");
        assert_eq!(widget.strength(), StrengthLevel::None);

        widget.pop_excluded();
        assert_eq!(widget.text(), "999999999999");
        assert_eq!(widget.strength(), StrengthLevel::Fair);
    }

    #[test]
    fn exclusion_field_keeps_typed_order() {
        let mut widget = Widget::new(GenerationConfig::default());
        for c in "0O1l".chars() {
            widget.push_excluded(c);
        }
        assert_eq!(widget.exclude_text(), "0O1l");
        assert_eq!(widget.config().excluded.len(), 4);

        widget.pop_excluded();
        assert_eq!(widget.exclude_text(), "0O1");
        assert!(!widget.config().excluded.contains(&'l'));
        assert!(widget.config().excluded.contains(&'O'));

        // A repeated char stays excluded until every copy is erased.
        widget.push_excluded('0');
        widget.pop_excluded();
        assert!(widget.config().excluded.contains(&'0'));

        widget.set_excluded("");
        assert_eq!(widget.exclude_text(), "");
        assert!(widget.config().excluded.is_empty());
    }

    #[test]
    fn enabling_a_class_recovers() {
        let mut widget = Widget::new(no_classes());
        widget.focus_next();
        assert_eq!(widget.focus(), Control::Uppercase);
        widget.toggle_focused();
        assert_eq!(widget.text().len(), 12);
        assert!(widget.text().chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn length_changes_regenerate() {
        let mut widget = Widget::new(GenerationConfig::default());
        widget.step_length(8);
        assert_eq!(widget.text().len(), 20);
        widget.step_length(-100);
        assert_eq!(widget.text().len(), crate::settings::MIN_LENGTH);
    }

    #[test]
    fn toggle_ignored_on_fields() {
        let mut widget = Widget::new(GenerationConfig::default());
        let before = widget.config().clone();
        widget.toggle_focused();
        assert_eq!(widget.config(), &before);
    }

    #[test]
    fn strict_toggle() {
        let mut widget = Widget::new(GenerationConfig::default());
        while widget.focus() != Control::Strict {
            widget.focus_next();
        }
        widget.toggle_focused();
        assert_eq!(widget.config().policy, Policy::Strict);
        assert_eq!(widget.focus().next(), Control::Length);
        assert_eq!(Control::Length.prev(), Control::Strict);
    }

    #[test]
    fn seeded_regeneration_is_reproducible() {
        let seeded = || SmallRng::seed_from_u64(7);
        let mut a = Widget::with_rng(GenerationConfig::default(), seeded());
        let mut b = Widget::with_rng(GenerationConfig::default(), seeded());
        assert_eq!(a.text(), b.text());
        a.regenerate();
        b.regenerate();
        assert_eq!(a.text(), b.text());
    }

    #[test]
    fn copy_writes_password_and_shows_feedback() {
        let mut widget = Widget::new(GenerationConfig::default());
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();

        widget.copy(&mut clipboard, now).unwrap();
        assert_eq!(clipboard.contents, vec![widget.text()]);
        assert!(widget.copied_feedback(now + Duration::from_millis(1500)));
        assert!(!widget.copied_feedback(now + COPY_FEEDBACK));
    }

    #[test]
    fn copy_refuses_placeholder() {
        let mut widget = Widget::new(no_classes());
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();

        assert_eq!(widget.copy(&mut clipboard, now), Err(CopyError::NothingToCopy));
        assert!(clipboard.contents.is_empty());
        assert!(!widget.copied_feedback(now));
        assert_eq!(widget.status(), Some("Please generate a password first!"));
    }

    #[test]
    fn copy_failure_is_reported_once() {
        let mut widget = Widget::new(GenerationConfig::default());
        let mut clipboard = FakeClipboard { fail: true, ..Default::default() };

        let err = widget.copy(&mut clipboard, Instant::now()).unwrap_err();
        assert_eq!(err, CopyError::Clipboard(ClipboardError::Write("denied".into())));
        assert!(widget.status().is_some());

        widget.regenerate();
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn report_matches_alphabet() {
        let widget = Widget::new(GenerationConfig::default());
        match widget.display() {
            Display::Password { report, generated } => {
                assert_eq!(report.score, generated.score);
                assert!((report.entropy_bits - strength::entropy(12, 88)).abs() < 1e-9);
            }
            Display::Placeholder(err) => panic!("unexpected placeholder: {err}"),
        }
    }
}
