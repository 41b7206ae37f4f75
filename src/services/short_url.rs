// src/services/short_url.rs - Short URL formatting
use log::debug;

use crate::config::ShortUrlConfig;
use crate::errors::AppError;
use crate::generators::{RandomAlphanumericGenerator, SequenceGenerator};
use crate::validations::validate_seo_keyword;

type Result<T> = std::result::Result<T, AppError>;

const URL_SCHEME_DEFAULT: &str = "http://";
const SHORT_DOMAIN_NAME_DEFAULT: &str = "short.com";
const PATH_DELIMITER: &str = "/";
const MAX_KEYWORD_LENGTH_DEFAULT: usize = 20;

/// Formats short URLs from a configured scheme and domain.
///
/// The path segment is either a caller-supplied SEO keyword (validated
/// against the configured maximum length) or a sequence drawn from the
/// owned generator. Settings are resolved once at construction and stay
/// immutable afterwards.
pub struct ShortUrlGenerator<G: SequenceGenerator = RandomAlphanumericGenerator> {
    url_scheme: String,
    short_domain_name: String,
    max_keyword_length: usize,
    sequence_generator: G,
}

impl ShortUrlGenerator<RandomAlphanumericGenerator> {
    /// Creates a generator with default settings: scheme "http://", domain
    /// "short.com", max keyword length 20, 4-character random sequences.
    pub fn new() -> Self {
        Self::with_config(ShortUrlConfig::default())
    }

    /// Creates a generator with custom settings and the default random
    /// sequence source.
    pub fn with_config(config: ShortUrlConfig) -> Self {
        Self::with_generator(config, RandomAlphanumericGenerator::default())
    }
}

impl Default for ShortUrlGenerator<RandomAlphanumericGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: SequenceGenerator> ShortUrlGenerator<G> {
    /// Creates a generator with custom settings and a caller-supplied
    /// sequence source.
    ///
    /// Any setting left unset in `config` falls back to its default; a zero
    /// `max_keyword_length` counts as unset.
    pub fn with_generator(config: ShortUrlConfig, sequence_generator: G) -> Self {
        let url_scheme = config
            .url_scheme
            .unwrap_or_else(|| URL_SCHEME_DEFAULT.to_string());
        let short_domain_name = config
            .short_domain_name
            .unwrap_or_else(|| SHORT_DOMAIN_NAME_DEFAULT.to_string());
        let max_keyword_length = config
            .max_keyword_length
            .filter(|&length| length > 0)
            .unwrap_or(MAX_KEYWORD_LENGTH_DEFAULT);

        Self {
            url_scheme,
            short_domain_name,
            max_keyword_length,
            sequence_generator,
        }
    }

    /// Generates a short URL. It replaces the domain name with the
    /// configured short one and the path with the SEO keyword.
    ///
    /// The original `url` is not stored or mapped; only the keyword ends up
    /// in the result.
    ///
    /// ### Arguments
    /// * `url` - The long URL whose path is being replaced
    /// * `seo_keyword` - Replacement for the path
    ///
    /// ### Errors
    /// * `AppError::Validation` - If the keyword is missing, empty, or
    ///   longer than the configured maximum
    pub fn generate_with_seo_keyword(
        &self,
        url: &str,
        seo_keyword: Option<&str>,
    ) -> Result<String> {
        let keyword = seo_keyword
            .ok_or_else(|| AppError::Validation("SEO keyword is required".to_string()))?;
        validate_seo_keyword(keyword, self.max_keyword_length)?;

        debug!("Replacing path of {} with SEO keyword {}", url, keyword);

        Ok(self.build_url(keyword))
    }

    /// Generates a short URL whose path is a random alphanumeric sequence
    /// drawn from the owned generator.
    ///
    /// ### Arguments
    /// * `url` - The long URL whose path is being replaced
    pub fn generate_with_random_path(&mut self, url: &str) -> String {
        let sequence = self.sequence_generator.next_sequence();

        debug!("Replacing path of {} with random sequence {}", url, sequence);

        self.build_url(&sequence)
    }

    /// Concatenates all parts of the short URL.
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}{}{}{}",
            self.url_scheme, self.short_domain_name, PATH_DELIMITER, path
        )
    }

    /// Resolved URL scheme.
    pub fn url_scheme(&self) -> &str {
        &self.url_scheme
    }

    /// Resolved short domain name.
    pub fn short_domain_name(&self) -> &str {
        &self.short_domain_name
    }

    /// Resolved maximum SEO keyword length.
    pub fn max_keyword_length(&self) -> usize {
        self.max_keyword_length
    }
}
