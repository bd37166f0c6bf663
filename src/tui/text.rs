use std::time::Instant;

use zeroize::Zeroize;

use crate::pass::charset::SYMBOLS;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Policy};
use crate::terminal::{
    BOX_WIDTH, DIM, GREEN, RED, RESET, REVERSE, box_bottom, box_line, box_line_center, box_rule,
    box_top, flush, strength_bar, strength_color,
};
use crate::widget::{Control, Display, Widget};

const BAR_WIDTH: usize = 30;

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn control_label(widget: &Widget, control: Control) -> String {
    let config = widget.config();
    match control {
        Control::Length => format!("Length  ◀ {:>3} ▶   ({MIN_LENGTH}-{MAX_LENGTH})", config.length),
        Control::Uppercase => format!("{} Uppercase Letters (A-Z)", checkbox(config.include_uppercase)),
        Control::Lowercase => format!("{} Lowercase Letters (a-z)", checkbox(config.include_lowercase)),
        Control::Numbers => format!("{} Numbers (0-9)", checkbox(config.include_numbers)),
        Control::Symbols => format!("{} Symbols ({SYMBOLS})", checkbox(config.include_symbols)),
        Control::Exclude => format!("Exclude: [{}]", widget.exclude_text()),
        Control::Strict => format!(
            "{} Strict rules (every class, no repeats)",
            checkbox(config.policy == Policy::Strict)
        ),
    }
}

fn draw_password(widget: &Widget) {
    box_line("Generated Password");
    let mut text = widget.text();
    match widget.display() {
        Display::Password { .. } => {
            let chars: Vec<char> = text.chars().collect();
            for chunk in chars.chunks(BOX_WIDTH - 8) {
                let mut part: String = chunk.iter().collect();
                box_line(&format!("  {part}"));
                part.zeroize();
            }
        }
        Display::Placeholder(_) => box_line(&format!("  {RED}{text}{RESET}")),
    }
    text.zeroize();
}

fn draw_strength(widget: &Widget) {
    let level = widget.strength();
    let detail = match widget.display() {
        Display::Password { report, .. } => format!(
            "{}/7 · {:.1} bits · {}/8 criteria",
            report.score, report.entropy_bits, report.criteria_met
        ),
        Display::Placeholder(_) => String::new(),
    };
    box_line(&format!(
        "Strength: {}{:<11}{} {}",
        strength_color(level),
        level.label(),
        RESET,
        strength_bar(level, BAR_WIDTH)
    ));
    if !detail.is_empty() {
        box_line(&format!("{DIM}{detail}{RESET}"));
    }
}

fn draw_status(widget: &Widget, now: Instant) {
    if widget.copied_feedback(now) {
        box_line_center(&format!("{GREEN}✓ Copied!{RESET}"));
    } else if let Some(status) = widget.status() {
        box_line_center(&format!("{RED}{status}{RESET}"));
    } else {
        box_line("");
    }
}

/// Redraw the whole widget from the top-left corner.
pub fn draw(widget: &Widget, now: Instant) {
    print!("\x1b[H");
    box_top("Password Generator");
    draw_password(widget);
    box_line("");
    draw_strength(widget);
    box_rule();
    for control in Control::ALL {
        let label = control_label(widget, control);
        if control == widget.focus() {
            box_line(&format!("{REVERSE}> {label}{RESET}"));
        } else {
            box_line(&format!("  {label}"));
        }
    }
    box_rule();
    draw_status(widget, now);
    box_line(&format!(
        "{DIM}↑/↓ select · ←/→ length · Space toggle · Enter/g generate{RESET}"
    ));
    box_line(&format!("{DIM}c copy · Esc/q quit · Ctrl+U clear exclusions{RESET}"));
    box_bottom();
    print!("\x1b[J");
    flush();
}
