//! Static marketing content.
//!
//! Everything the page displays lives here as `'static` literals, so the
//! sections can borrow it freely and the compiler checks it. Optional
//! pieces are `Option`s or possibly-empty slices; the views omit whatever
//! is absent instead of failing.

mod api;
mod demos;
mod metrics;
mod page;
mod pricing;

pub use api::{API_FEATURES, CURL_EXAMPLE, NODEJS_EXAMPLE, PYTHON_EXAMPLE};
pub use demos::DEMOS;
pub use metrics::{METRICS, SERVICES};
pub use page::{ARCHITECTURE_FEATURES, FOOTER_GROUPS, HA_FEATURES, HERO_SPECS};
pub use pricing::PLANS;

use crate::style::Accent;

/// A code sample shown in the API demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeExample {
    /// Language hint (`bash`, `javascript`, `python`).
    pub language: &'static str,
    /// Name shown in the window header.
    pub filename: &'static str,
    /// Source text.
    pub code: &'static str,
}

impl CodeExample {
    /// Source lines paired with 1-based line numbers, for the gutter.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &'static str)> {
        self.code.lines().enumerate().map(|(idx, line)| (idx + 1, line))
    }

    /// Number of source lines.
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Line-comment marker for the sample's language.
    pub fn comment_prefix(&self) -> &'static str {
        match self.language {
            "javascript" => "//",
            _ => "#",
        }
    }

    /// Whether `line` is a whole-line comment; the viewer dims these.
    pub fn is_comment(&self, line: &str) -> bool {
        line.trim_start().starts_with(self.comment_prefix())
    }
}

/// Detail content for the metric modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDetails {
    /// One-sentence lead paragraph.
    pub headline: &'static str,
    /// Bullet points.
    pub points: &'static [&'static str],
}

/// A headline number in the performance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// Big figure, e.g. `<30ms`.
    pub value: &'static str,
    /// Card title.
    pub label: &'static str,
    /// One-line explanation.
    pub description: &'static str,
    /// SVG path data, see [`crate::icons`].
    pub icon: &'static str,
    /// Accent colour.
    pub accent: Accent,
    /// Modal content. Cards without details open a modal with just the header.
    pub details: Option<MetricDetails>,
}

/// Health of one public service in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Service name.
    pub name: &'static str,
    /// Status text.
    pub status: &'static str,
    /// Whether the service is healthy.
    pub operational: bool,
}

/// Prices for one plan, in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanPrice {
    /// Per month, billed monthly.
    pub monthly: u32,
    /// Per month, billed yearly.
    pub yearly: u32,
    /// First-month promotional price.
    pub promo: u32,
    /// Promotional line shown under the monthly price.
    pub promo_text: &'static str,
}

/// Server resources included in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSpecs {
    /// CPU line.
    pub cpu: &'static str,
    /// Memory line.
    pub ram: &'static str,
    /// Disk line.
    pub storage: &'static str,
}

/// A column in the pricing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    /// Plan name.
    pub name: &'static str,
    /// Audience blurb.
    pub description: &'static str,
    /// Prices.
    pub price: PlanPrice,
    /// Included resources.
    pub specs: PlanSpecs,
    /// Feature bullet list.
    pub features: &'static [&'static str],
    /// Draws the card raised, with the accent border.
    pub highlight: bool,
    /// Corner ribbon, if any.
    pub label: Option<&'static str>,
    /// Accent colour.
    pub accent: Accent,
}

/// A card in the dashboard video gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoVideo {
    /// Stable key.
    pub id: u32,
    /// Card and modal title.
    pub title: &'static str,
    /// Card and modal description.
    pub description: &'static str,
    /// Thumbnail image URL, loaded lazily.
    pub thumbnail: &'static str,
    /// Opaque identifier handed to the video host. Empty means no player.
    pub embed_id: &'static str,
    /// Duration badge.
    pub duration: &'static str,
    /// Feature tags.
    pub features: &'static [&'static str],
}

impl DemoVideo {
    /// Player URL under `embed_host`, or `None` when there is nothing to embed.
    ///
    /// ```rust
    /// use tchapbx_site::content::DEMOS;
    ///
    /// let url = DEMOS[0].embed_url("https://www.youtube.com/embed").unwrap();
    /// assert!(url.ends_with("?autoplay=1&rel=0"));
    /// ```
    pub fn embed_url(&self, embed_host: &str) -> Option<String> {
        let id = self.embed_id.trim();
        if id.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}?autoplay=1&rel=0",
            embed_host.trim_end_matches('/'),
            id
        ))
    }
}

/// A small spec tile under the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechSpec {
    /// Caption.
    pub label: &'static str,
    /// Figure.
    pub value: &'static str,
    /// Emoji glyph.
    pub glyph: &'static str,
}

/// A card under the architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    /// Emoji glyph.
    pub glyph: &'static str,
    /// Title.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Top border accent.
    pub accent: Accent,
}

/// A row in the high-availability feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaFeature {
    /// SVG path data.
    pub icon: &'static str,
    /// Title.
    pub title: &'static str,
    /// Subtitle under the title.
    pub subtitle: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Accent colour.
    pub accent: Accent,
    /// Badge figure, e.g. `0ms`.
    pub stat_value: &'static str,
    /// Badge caption, e.g. `Failover Time`.
    pub stat_label: &'static str,
}

/// A footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    /// Text.
    pub label: &'static str,
    /// Target.
    pub href: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterGroup {
    /// Column heading.
    pub title: &'static str,
    /// Links.
    pub links: &'static [FooterLink],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_sample_line_numbers_start_at_one() {
        let lines: Vec<_> = PYTHON_EXAMPLE.numbered_lines().collect();
        assert_eq!(lines.first(), Some(&(1, "from tchapbx import Client")));
        assert_eq!(lines.len(), PYTHON_EXAMPLE.line_count());
        assert_eq!(lines.last().map(|(n, _)| *n), Some(PYTHON_EXAMPLE.line_count()));
    }

    #[test]
    fn comment_lines_follow_language() {
        assert!(CURL_EXAMPLE.is_comment("# Response"));
        assert!(NODEJS_EXAMPLE.is_comment("  // Output: Call initiated"));
        assert!(!NODEJS_EXAMPLE.is_comment("# not a js comment"));
        assert!(PYTHON_EXAMPLE.is_comment("    # Get call details"));
        assert!(!PYTHON_EXAMPLE.is_comment("import asyncio"));
    }

    #[test]
    fn samples_have_expected_filenames() {
        assert_eq!(CURL_EXAMPLE.filename, "terminal");
        assert_eq!(NODEJS_EXAMPLE.filename, "app.js");
        assert_eq!(PYTHON_EXAMPLE.filename, "main.py");
    }

    #[test]
    fn six_metrics_and_one_without_details() {
        assert_eq!(METRICS.len(), 6);
        let without: Vec<_> = METRICS.iter().filter(|m| m.details.is_none()).collect();
        assert_eq!(without.len(), 1);
        for metric in METRICS.iter().filter_map(|m| m.details) {
            assert!(!metric.points.is_empty());
        }
    }

    #[test]
    fn plans_are_consistent() {
        assert_eq!(PLANS.len(), 4);
        assert_eq!(PLANS.iter().filter(|p| p.highlight).count(), 1);
        for plan in PLANS {
            assert!(plan.price.yearly < plan.price.monthly, "{}", plan.name);
            assert!(
                plan.price.promo_text.contains(&format!("${}", plan.price.promo)),
                "{}",
                plan.name
            );
            assert!(!plan.features.is_empty());
        }
        assert_eq!(PLANS[0].label, None);
    }

    #[test]
    fn embed_url_uses_host_and_id() {
        let demo = DemoVideo {
            embed_id: "abc123",
            ..DEMOS[0]
        };
        assert_eq!(
            demo.embed_url("https://player.example/embed/").as_deref(),
            Some("https://player.example/embed/abc123?autoplay=1&rel=0")
        );
    }

    #[test]
    fn empty_embed_id_yields_no_player() {
        let demo = DemoVideo {
            embed_id: "  ",
            ..DEMOS[1]
        };
        assert_eq!(demo.embed_url("https://www.youtube.com/embed"), None);
    }

    #[test]
    fn demo_ids_are_unique() {
        let mut ids: Vec<u32> = DEMOS.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEMOS.len());
    }
}
