//! Generation settings.

use std::collections::BTreeSet;

/// Shortest length the length controls allow.
pub const MIN_LENGTH: usize = 4;
/// Longest length the length controls allow.
pub const MAX_LENGTH: usize = 128;

/// How characters are drawn from the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Every character drawn independently and uniformly.
    #[default]
    Uniform,
    /// At least one character per enabled class, no two equal neighbours.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub excluded: BTreeSet<char>,
    pub policy: Policy,
}

impl GenerationConfig {
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }

    /// Replace the exclusion set with the characters of `chars`.
    pub fn set_excluded(&mut self, chars: &str) {
        self.excluded = chars.chars().collect();
    }

    /// Exclusion set as a string, in sorted order.
    pub fn excluded_string(&self) -> String {
        self.excluded.iter().collect()
    }

    /// Move length by `delta`, clamped to the control range.
    pub fn step_length(&mut self, delta: isize) {
        let next = self.length.saturating_add_signed(delta);
        self.length = next.clamp(MIN_LENGTH, MAX_LENGTH);
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            excluded: BTreeSet::new(),
            policy: Policy::Uniform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_class() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert!(config.any_class_enabled());
        assert!(config.excluded.is_empty());
        assert_eq!(config.policy, Policy::Uniform);
    }

    #[test]
    fn set_excluded_collapses_duplicates() {
        let mut config = GenerationConfig::default();
        config.set_excluded("l1O0l1");
        assert_eq!(config.excluded.len(), 4);
        assert_eq!(config.excluded_string(), "01Ol");
    }

    #[test]
    fn step_length_stays_in_range() {
        let mut config = GenerationConfig { length: MIN_LENGTH, ..Default::default() };
        config.step_length(-1);
        assert_eq!(config.length, MIN_LENGTH);

        config.length = MAX_LENGTH;
        config.step_length(5);
        assert_eq!(config.length, MAX_LENGTH);

        config.length = 12;
        config.step_length(4);
        assert_eq!(config.length, 16);
    }

    #[test]
    fn no_class_enabled_detected() {
        let config = GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert!(!config.any_class_enabled());
    }
}
