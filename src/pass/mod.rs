//! Password generation and strength scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use generate::Generated;
pub use generate::generate_batch;
pub use generate::generate_with;
pub use strength::StrengthLevel;
