//! Short URL formatting library.
//!
//! Builds short URLs from a configured scheme and domain, with the path
//! segment supplied either as a caller-chosen SEO keyword (validated
//! against a maximum length) or as a randomly generated alphanumeric
//! sequence. Nothing is persisted or looked up; the long URL is accepted
//! for symmetry but never stored.
//!
//! # Examples
//!
//! ```
//! use short_url_generator::{ShortUrlConfig, ShortUrlGenerator};
//!
//! let generator = ShortUrlGenerator::new();
//! let short = generator
//!     .generate_with_seo_keyword("http://looooong.com/somepath", Some("MY-NEW-WS"))
//!     .unwrap();
//! assert_eq!(short, "http://short.com/MY-NEW-WS");
//!
//! let config = ShortUrlConfig::new().with_short_domain_name("new-short-name.com");
//! let mut generator = ShortUrlGenerator::with_config(config);
//! let random = generator.generate_with_random_path("http://looooong.com/somepath");
//! assert!(random.starts_with("http://new-short-name.com/"));
//! ```

/// Optional settings and environment loading.
pub mod config;
/// Library error types.
pub mod errors;
/// Random sequence generation.
pub mod generators;
/// Short URL formatting.
pub mod services;
/// Input validation helpers.
pub mod validations;

pub use config::ShortUrlConfig;
pub use errors::{AppError, AppResult, ConfigError, GeneratorError};
pub use generators::{RandomAlphanumericGenerator, SequenceGenerator};
pub use services::ShortUrlGenerator;
