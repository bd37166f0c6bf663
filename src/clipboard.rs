//! Clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;

use crate::error::ClipboardError;

/// Somewhere a password can be copied to. One attempt per call, no retries.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.set_contents(text.to_owned()).map_err(|e| {
            debug!("clipboard write failed: {e}");
            ClipboardError::Write(e.to_string())
        })
    }
}

/// Clipboard opened on first use, so a missing clipboard only fails the copy.
#[derive(Default)]
pub struct LazyClipboard {
    inner: Option<SystemClipboard>,
}

impl Clipboard for LazyClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(SystemClipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.write(text),
            None => Err(ClipboardError::Unavailable("not initialized".into())),
        }
    }
}
