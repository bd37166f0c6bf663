//! CLI run: generate from flags, then print, emit JSON, or copy.

use anyhow::{Context as _, Result};
use log::{info, warn};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::ClipboardError;
use crate::pass::{self, Generated};

/// Where generated passwords go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Terminal,
    Json,
    Clipboard,
}

impl Output {
    fn from_flags(flags: &CliFlags) -> Self {
        if flags.board {
            Output::Clipboard
        } else if flags.json {
            Output::Json
        } else {
            Output::Terminal
        }
    }
}

/// Run one-shot generation from parsed flags.
pub fn run(flags: &CliFlags) -> Result<()> {
    quiet::set(flags.quiet);

    let config = flags.to_config();
    let count = flags.number as usize;
    let mut batch = pass::generate_batch(&config, count)
        .inspect_err(|e| warn!("generation failed: {e}"))
        .context("cannot generate password")?;
    info!("generated {} password(s) of length {}", batch.len(), config.length);

    let result = match Output::from_flags(flags) {
        Output::Terminal => {
            print_plain(&batch);
            Ok(())
        }
        Output::Json => print_json(&batch),
        Output::Clipboard => copy(&batch),
    };

    for generated in &mut batch {
        generated.password.zeroize();
    }
    result
}

fn print_plain(batch: &[Generated]) {
    for generated in batch {
        println!("{}", generated.password);
        prompts::strength(generated);
    }
}

fn print_json(batch: &[Generated]) -> Result<()> {
    for generated in batch {
        let mut line = serde_json::to_string(generated).context("cannot encode password as JSON")?;
        println!("{line}");
        line.zeroize();
    }
    Ok(())
}

fn copy(batch: &[Generated]) -> Result<()> {
    let mut clipboard = match SystemClipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e @ ClipboardError::Unavailable(_)) => {
            prompts::warn(&e.to_string());
            if prompts::clipboard_fallback_prompt() {
                print_plain(batch);
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    copy_to(&mut clipboard, batch)
}

fn copy_to<C: Clipboard>(clipboard: &mut C, batch: &[Generated]) -> Result<()> {
    let mut joined = batch
        .iter()
        .map(|g| g.password.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let result = clipboard.write(&joined);
    joined.zeroize();

    result.inspect_err(|e| warn!("{e}"))?;
    prompts::clipboard_copied(batch.len());
    if let [single] = batch {
        prompts::strength(single);
    }
    Ok(())
}
