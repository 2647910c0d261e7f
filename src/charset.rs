use crate::config::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with one another when read back.
pub const SIMILAR: &str = "0O1lI";

pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}

/// Assembles the pool of characters a password may be drawn from.
///
/// Classes are appended in a fixed order (lowercase, uppercase, numbers,
/// symbols), then the similar characters are filtered out if requested.
/// An empty pool is returned as-is; the generator rejects it.
pub fn build_charset(config: &GenerationConfig) -> Vec<char> {
    let mut charset = String::new();

    if config.include_lowercase {
        charset.push_str(LOWERCASE);
    }

    if config.include_uppercase {
        charset.push_str(UPPERCASE);
    }

    if config.include_numbers {
        charset.push_str(NUMBERS);
    }

    if config.include_symbols {
        charset.push_str(SYMBOLS);
    }

    charset
        .chars()
        .filter(|c| !(config.exclude_similar && is_similar(*c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charset_drops_similar() {
        let charset = build_charset(&GenerationConfig::default());

        assert_eq!(charset.len(), 26 + 26 + 10 + SYMBOLS.len() - SIMILAR.len());
        assert!(!charset.iter().any(|c| is_similar(*c)));
        assert_eq!(charset.first(), Some(&'a'));
        assert_eq!(charset.last(), Some(&'?'));
    }

    #[test]
    fn test_class_order_is_fixed() {
        let config = GenerationConfig::default()
            .symbols(false)
            .exclude_similar(false);
        let charset: String = build_charset(&config).into_iter().collect();

        assert_eq!(charset, format!("{LOWERCASE}{UPPERCASE}{NUMBERS}"));
    }

    #[test]
    fn test_numbers_only_with_filter() {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .symbols(false);
        let charset: String = build_charset(&config).into_iter().collect();

        assert_eq!(charset, "23456789");
    }

    #[test]
    fn test_no_classes_gives_empty_pool() {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .numbers(false)
            .symbols(false);

        assert!(build_charset(&config).is_empty());
    }

    #[test]
    fn test_symbols_are_untouched_by_filter() {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .numbers(false);
        let charset: String = build_charset(&config).into_iter().collect();

        assert_eq!(charset, SYMBOLS);
    }
}
