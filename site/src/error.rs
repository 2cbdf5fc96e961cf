//! Error type for the site crate.
//!
//! Content is compiled in and cannot fail, so the only fallible surface is
//! configuration loading.

use thiserror::Error;

/// Errors raised while loading `site.toml`.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The TOML document did not parse or did not match the expected shape.
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The document parsed but a value is out of range.
    #[error("invalid site config: {field}: {reason}")]
    InvalidConfig {
        /// Dotted path of the offending key, e.g. `particles.link_distance`.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

impl SiteError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;
