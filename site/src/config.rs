//! `site.toml` configuration.
//!
//! The landing app embeds its `site.toml` at compile time. Every table and
//! key is optional; missing values take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::particles::ParticleParams;

/// Root configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Wordmark and tagline.
    pub brand: BrandConfig,
    /// Hero particle field.
    pub particles: ParticleParams,
    /// Navbar behaviour.
    pub nav: NavConfig,
    /// Third-party media.
    pub media: MediaConfig,
    /// Browser console logging.
    pub logging: LoggingConfig,
}

/// Brand strings shown in the navbar and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Plain part of the wordmark.
    pub wordmark: String,
    /// Gradient part of the wordmark.
    pub wordmark_accent: String,
    /// Letter in the square logo.
    pub logo_letter: String,
    /// Footer tagline.
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            wordmark: "Tcha".into(),
            wordmark_accent: "PBX".into(),
            logo_letter: "T".into(),
            tagline: "Carrier-grade cloud telephony for developers.".into(),
        }
    }
}

impl BrandConfig {
    /// Full product name, e.g. `TchaPBX`.
    pub fn product_name(&self) -> String {
        format!("{}{}", self.wordmark, self.wordmark_accent)
    }
}

/// Navbar settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Vertical offset (px) past which the navbar switches to its scrolled style.
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

/// Video embed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Base URL the demo embed ids are appended to.
    pub embed_host: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            embed_host: "https://www.youtube.com/embed".into(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` (case-insensitive).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level.
    pub fn max_level(&self) -> Result<tracing::Level> {
        self.level
            .trim()
            .parse()
            .map_err(|_| SiteError::invalid("logging.level", format!("unknown level `{}`", self.level)))
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_toml_str`], but logs the problem and falls
    /// back to defaults instead of failing.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "using default site config");
                Self::default()
            }
        }
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> Result<()> {
        let p = &self.particles;
        if p.area_per_particle == 0 {
            return Err(SiteError::invalid(
                "particles.area_per_particle",
                "must be greater than zero",
            ));
        }
        if !(p.link_distance.is_finite() && p.link_distance > 0.0) {
            return Err(SiteError::invalid(
                "particles.link_distance",
                format!("must be positive, got {}", p.link_distance),
            ));
        }
        if !(p.max_speed.is_finite() && p.max_speed >= 0.0) {
            return Err(SiteError::invalid(
                "particles.max_speed",
                format!("must be non-negative, got {}", p.max_speed),
            ));
        }
        if !(p.min_radius > 0.0 && p.min_radius <= p.max_radius && p.max_radius.is_finite()) {
            return Err(SiteError::invalid(
                "particles.min_radius",
                format!(
                    "need 0 < min_radius <= max_radius, got {}..{}",
                    p.min_radius, p.max_radius
                ),
            ));
        }
        if !(self.nav.scroll_threshold.is_finite() && self.nav.scroll_threshold >= 0.0) {
            return Err(SiteError::invalid(
                "nav.scroll_threshold",
                "must be a non-negative number",
            ));
        }
        let host = self.media.embed_host.trim();
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Err(SiteError::invalid(
                "media.embed_host",
                format!("expected an http(s) URL, got `{host}`"),
            ));
        }
        self.logging.max_level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.nav.scroll_threshold, 50.0);
        assert_eq!(config.particles.max_particles, 100);
        assert_eq!(config.brand.product_name(), "TchaPBX");
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[particles]
link_distance = 120.0

[logging]
level = "DEBUG"
"#,
        )
        .expect("partial config");
        assert_eq!(config.particles.link_distance, 120.0);
        assert_eq!(config.particles.area_per_particle, 15_000);
        assert_eq!(config.logging.max_level().expect("level"), tracing::Level::DEBUG);
        assert_eq!(config.media, MediaConfig::default());
    }

    #[test]
    fn rejects_non_positive_link_distance() {
        let err = SiteConfig::from_toml_str("[particles]\nlink_distance = 0.0\n")
            .expect_err("zero link distance");
        assert!(matches!(
            err,
            SiteError::InvalidConfig {
                field: "particles.link_distance",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_radius_range() {
        let err = SiteConfig::from_toml_str("[particles]\nmin_radius = 4.0\nmax_radius = 2.0\n")
            .expect_err("inverted radii");
        assert!(err.to_string().contains("particles.min_radius"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = SiteConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").expect_err("bad level");
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn rejects_non_url_embed_host() {
        let err = SiteConfig::from_toml_str("[media]\nembed_host = \"youtube\"\n")
            .expect_err("bad host");
        assert!(matches!(
            err,
            SiteError::InvalidConfig {
                field: "media.embed_host",
                ..
            }
        ));
    }

    #[test]
    fn syntax_errors_surface_as_parse_errors() {
        let err = SiteConfig::from_toml_str("[nav\nscroll_threshold = 1").expect_err("syntax");
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn load_or_default_swallows_errors() {
        let config = SiteConfig::load_or_default("[nav]\nscroll_threshold = -5.0\n");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn bundled_site_toml_is_valid() {
        let source = include_str!("../../landing/site.toml");
        let config = SiteConfig::from_toml_str(source).expect("bundled config");
        assert_eq!(config.nav.scroll_threshold, 50.0);
    }
}
