//! Password generation.
//!
//! Sampling uses [`SmallRng`], a general-purpose PRNG seeded from the OS.
//! It is fast and uniform but NOT cryptographically secure: its output can
//! be predicted by someone who observes enough of it. Callers needing secret
//! material with that guarantee should pass their own CSPRNG to
//! [`generate_with`].

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::{charset, strength};
use crate::error::GenerateError;
use crate::pass::strength::StrengthLevel;
use crate::settings::{GenerationConfig, Policy};

/// A password and its strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub password: String,
    pub strength: StrengthLevel,
    pub score: u8,
}

/// Generate a single password from the default random source.
pub fn generate(config: &GenerationConfig) -> Result<Generated, GenerateError> {
    generate_with(config, &mut SmallRng::from_entropy())
}

/// Generate a single password drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Generated, GenerateError> {
    if config.length == 0 {
        return Err(GenerateError::InvalidLength);
    }
    let chars = charset::build(config)?;

    let password = match config.policy {
        Policy::Uniform => sample(&chars, config.length, rng),
        Policy::Strict => sample_strict(config, &chars, rng),
    };

    let score = strength::score(&password);
    debug!(
        "generated password: length={} alphabet={} score={}",
        config.length,
        chars.len(),
        score
    );

    Ok(Generated {
        password,
        strength: StrengthLevel::from_score(score),
        score,
    })
}

/// Generate `count` independent passwords.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Result<Vec<Generated>, GenerateError> {
    (0..count).map(|_| generate(config)).collect()
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}

fn sample<R: Rng + ?Sized>(chars: &[char], length: usize, rng: &mut R) -> String {
    (0..length).map(|_| random_char(chars, rng)).collect()
}

/// One character from each non-empty class pool, the rest from the full
/// alphabet, shuffled, then equal neighbours replaced where possible.
fn sample_strict<R: Rng + ?Sized>(config: &GenerationConfig, chars: &[char], rng: &mut R) -> String {
    let mut picked: Vec<char> = charset::class_pools(config)
        .iter()
        .map(|pool| random_char(pool, rng))
        .collect();
    while picked.len() < config.length {
        picked.push(random_char(chars, rng));
    }
    picked.shuffle(rng);

    for i in 1..picked.len() {
        if picked[i] == picked[i - 1] {
            let prev = picked[i - 1];
            let next = picked.get(i + 1).copied();
            let others: Vec<char> = chars
                .iter()
                .copied()
                .filter(|&c| c != prev && Some(c) != next)
                .collect();
            if let Some(&c) = others.choose(rng) {
                picked[i] = c;
            }
        }
    }

    picked.truncate(config.length);
    picked.into_iter().collect()
}
