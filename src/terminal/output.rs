//! Terminal output utilities.
//!
//! Box drawing, strength bar, ANSI helpers. Lines end in `\r\n` so the same
//! helpers work in raw mode.

use std::io::{self, Write};

use crate::pass::StrengthLevel;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;214m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const BLUE: &str = "\x1b[38;5;33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

fn line(s: &str) {
    print!("{s}\r\n");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    line(&format!("│ {}{} │", content, " ".repeat(padding)));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    line(&format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

/// Print a horizontal rule inside a box.
pub fn box_rule() {
    line(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
}

/// Display width of `s`, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Bar
// ============================================================================

pub fn strength_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::None => DIM,
        StrengthLevel::Weak => RED,
        StrengthLevel::Fair => ORANGE,
        StrengthLevel::Good => GREEN,
        StrengthLevel::Strong => BLUE,
    }
}

/// Filled/empty bar of `width` cells for a strength level.
pub fn strength_bar(level: StrengthLevel, width: usize) -> String {
    let filled = ((level.percent() / 100.0) * width as f32) as usize;
    format!(
        "{}{}{}{}",
        strength_color(level),
        "█".repeat(filled),
        RESET,
        "░".repeat(width - filled)
    )
}
