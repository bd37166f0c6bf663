mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::run;
pub use flags::CliFlags;
