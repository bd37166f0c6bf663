//! Character set building for password generation.

use crate::error::GenerateError;
use crate::settings::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Literal set of each enabled class, in canonical order.
fn enabled_classes(config: &GenerationConfig) -> impl Iterator<Item = &'static str> {
    [
        (config.include_uppercase, UPPERCASE),
        (config.include_lowercase, LOWERCASE),
        (config.include_numbers, DIGITS),
        (config.include_symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(enabled, chars)| enabled.then_some(chars))
}

fn filtered(config: &GenerationConfig, chars: &str) -> Vec<char> {
    chars.chars().filter(|c| !config.excluded.contains(c)).collect()
}

/// Build the alphabet to sample from.
pub fn build(config: &GenerationConfig) -> Result<Vec<char>, GenerateError> {
    if !config.any_class_enabled() {
        return Err(GenerateError::NoCharacterClassSelected);
    }

    let chars: Vec<char> = enabled_classes(config)
        .flat_map(|class| filtered(config, class))
        .collect();

    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    Ok(chars)
}

/// Filtered pool of each enabled class. Classes emptied by exclusions are skipped.
pub fn class_pools(config: &GenerationConfig) -> Vec<Vec<char>> {
    enabled_classes(config)
        .map(|class| filtered(config, class))
        .filter(|pool| !pool.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(upper: bool, lower: bool, numbers: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            ..Default::default()
        }
    }

    #[test]
    fn alphanumeric_alphabet_has_62_chars() {
        let chars = build(&only(true, true, true, false)).unwrap();
        assert_eq!(chars.len(), 62);
        assert_eq!(chars[0], 'A');
        assert_eq!(chars[26], 'a');
        assert_eq!(chars[52], '0');
    }

    #[test]
    fn canonical_order_is_fixed() {
        let chars: String = build(&GenerationConfig::default()).unwrap().into_iter().collect();
        assert_eq!(chars, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn symbols_literal() {
        let chars = build(&only(false, false, false, true)).unwrap();
        assert_eq!(chars.len(), 26);
        assert!(chars.contains(&'?'));
        assert!(!chars.contains(&'~'));
    }

    #[test]
    fn no_class_is_rejected_before_exclusions() {
        let mut config = only(false, false, false, false);
        config.set_excluded("ABC");
        assert_eq!(build(&config), Err(GenerateError::NoCharacterClassSelected));
    }

    #[test]
    fn fully_excluded_class_is_empty_alphabet() {
        let mut config = only(true, false, false, false);
        config.set_excluded(UPPERCASE);
        assert_eq!(build(&config), Err(GenerateError::EmptyAlphabet));
    }

    #[test]
    fn exclusion_removes_members_only() {
        let mut config = only(false, false, true, false);
        config.set_excluded("01xyz");
        let chars: String = build(&config).unwrap().into_iter().collect();
        assert_eq!(chars, "23456789");
    }

    #[test]
    fn exclusion_is_order_independent_and_idempotent() {
        let mut a = GenerationConfig::default();
        a.set_excluded("O0l1");
        let mut b = GenerationConfig::default();
        b.set_excluded("1lO00Ol");
        assert_eq!(build(&a), build(&b));
    }

    #[test]
    fn class_pools_skip_emptied_classes() {
        let mut config = GenerationConfig::default();
        config.set_excluded(DIGITS);
        let pools = class_pools(&config);
        assert_eq!(pools.len(), 3);
        assert!(pools.iter().all(|p| p.iter().all(|c| !c.is_ascii_digit())));
    }
}
