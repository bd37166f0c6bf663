use clap::Parser;

use crate::settings::{GenerationConfig, MAX_LENGTH, MIN_LENGTH, Policy};

/// Generate passwords from selectable character classes and score their strength.
///
/// Run without arguments for the interactive widget.
#[derive(Debug, Parser)]
#[command(name = "strongpass", version, about)]
pub struct CliFlags {
    /// Characters per password
    #[arg(
        short,
        long,
        env = "STRONGPASS_LENGTH",
        default_value_t = 12,
        value_parser = clap::value_parser!(u64).range(MIN_LENGTH as u64..=MAX_LENGTH as u64)
    )]
    pub length: u64,

    /// Leave out uppercase letters (A-Z)
    #[arg(long, env = "STRONGPASS_NO_UPPER")]
    pub no_upper: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long, env = "STRONGPASS_NO_LOWER")]
    pub no_lower: bool,

    /// Leave out numbers (0-9)
    #[arg(long, env = "STRONGPASS_NO_NUMBERS")]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long, env = "STRONGPASS_NO_SYMBOLS")]
    pub no_symbols: bool,

    /// Characters never to use, e.g. "0O1l"
    #[arg(short = 'x', long, env = "STRONGPASS_EXCLUDE", default_value = "")]
    pub exclude: String,

    /// At least one character of every class and no repeated neighbours
    #[arg(long, env = "STRONGPASS_STRICT")]
    pub strict: bool,

    /// How many passwords to generate
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub number: u64,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Print one JSON object per password
    #[arg(long, conflicts_with = "board")]
    pub json: bool,

    /// Suppress everything except the passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive widget with these settings
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    pub fn to_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig {
            length: self.length as usize,
            include_uppercase: !self.no_upper,
            include_lowercase: !self.no_lower,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            policy: if self.strict { Policy::Strict } else { Policy::Uniform },
            ..Default::default()
        };
        config.set_excluded(&self.exclude);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("strongpass").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_widget_defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.to_config(), GenerationConfig::default());
        assert_eq!(flags.number, 1);
    }

    #[test]
    fn class_flags_and_exclusions() {
        let flags = parse(&["-l", "20", "--no-symbols", "--no-lower", "-x", "0O1l", "--strict"]).unwrap();
        let config = flags.to_config();
        assert_eq!(config.length, 20);
        assert!(config.include_uppercase);
        assert!(!config.include_lowercase);
        assert!(config.include_numbers);
        assert!(!config.include_symbols);
        assert_eq!(config.excluded_string(), "01Ol");
        assert_eq!(config.policy, Policy::Strict);
    }

    #[test]
    fn length_out_of_range_rejected() {
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "129"]).is_err());
        assert!(parse(&["-l", "128"]).is_ok());
    }

    #[test]
    fn zero_count_rejected() {
        assert!(parse(&["-n", "0"]).is_err());
        assert_eq!(parse(&["-n", "5"]).unwrap().number, 5);
    }

    #[test]
    fn json_and_board_conflict() {
        assert!(parse(&["--json", "-b"]).is_err());
    }
}
