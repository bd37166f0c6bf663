use std::env;
use std::process;

use clap::Parser;
use env_logger::Env;

mod cli;
mod clipboard;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;
mod widget;

use cli::{CliFlags, prompts};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    // No core dumps: they would carry password buffers to disk.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let flags = CliFlags::parse();

    let result = if env::args_os().len() == 1 || flags.interactive {
        tui::run(flags.to_config()).map_err(anyhow::Error::from)
    } else {
        cli::run(&flags)
    };

    if let Err(e) = result {
        prompts::error(&format!("{e:#}"));
        process::exit(1);
    }
}
