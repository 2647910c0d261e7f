use log::{debug, warn};
use rand::Rng;

use crate::charset::build_charset;
use crate::config::GenerationConfig;
use crate::error::{PasswordError, Result};

/// Source of uniformly distributed indices for character draws.
///
/// Every `rand::Rng` is a source, so callers can pass `thread_rng()`, a
/// seeded `StdRng` in tests, or `OsRng` when the password becomes an
/// account credential.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Generates a password using the thread-local generator.
pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    generate_password_with(config, &mut rand::thread_rng())
}

/// Generates a password of exactly `config.length` characters, each drawn
/// uniformly (with replacement) from the configured charset.
pub fn generate_password_with<R: RandomSource + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String> {
    let charset = build_charset(config);

    if charset.is_empty() {
        warn!("rejecting password options with no usable characters: {config:?}");
        return Err(PasswordError::InvalidConfiguration(
            "at least one character class must be enabled".to_string(),
        ));
    }

    debug!(
        "generating {} characters from a pool of {}",
        config.length,
        charset.len()
    );

    Ok((0..config.length)
        .map(|_| charset[rng.next_index(charset.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::is_similar;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Walks the charset in order, wrapping around.
    struct Cycle(usize);

    impl RandomSource for Cycle {
        fn next_index(&mut self, bound: usize) -> usize {
            let index = self.0 % bound;
            self.0 += 1;
            index
        }
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate_password(&GenerationConfig::default()).unwrap();

        assert_eq!(password.chars().count(), 12);
        assert!(!password.chars().any(is_similar));
    }

    #[test]
    fn test_generate_with_injected_source() {
        let config = GenerationConfig::default().length(5);
        let password = generate_password_with(&config, &mut Cycle(0)).unwrap();

        assert_eq!(password, "abcde");
    }

    #[test]
    fn test_generate_with_constant_rng() {
        let config = GenerationConfig::default().lowercase(false).length(4);
        let password = generate_password_with(&config, &mut StepRng::new(0, 0)).unwrap();

        assert_eq!(password, "AAAA");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GenerationConfig::default().length(24);
        let first = generate_password_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = generate_password_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let config = GenerationConfig::default().length(0);
        assert_eq!(generate_password(&config).unwrap(), "");
    }

    #[test]
    fn test_no_classes_is_invalid_configuration() {
        let config = GenerationConfig::default()
            .uppercase(false)
            .lowercase(false)
            .numbers(false)
            .symbols(false);
        let result = generate_password_with(&config, &mut Cycle(0));

        assert!(result.is_err());
        if let Err(err) = result {
            assert!(matches!(err, PasswordError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_long_password_stays_in_pool() {
        let config = GenerationConfig::default().symbols(false).length(500);
        let password = generate_password(&config).unwrap();

        assert_eq!(password.len(), 500);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric() && !is_similar(c)));
    }
}
