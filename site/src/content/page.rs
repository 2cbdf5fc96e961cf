//! Smaller content blocks: hero specs, architecture cards, HA features, footer.

use super::{FeatureCard, FooterGroup, FooterLink, HaFeature, TechSpec};
use crate::icons::{ICON_CLOCK, ICON_GLOBE, ICON_REFRESH};
use crate::style::Accent;

/// Spec tiles under the hero headline.
pub static HERO_SPECS: &[TechSpec] = &[
    TechSpec {
        label: "Latency",
        value: "<30ms",
        glyph: "⚡",
    },
    TechSpec {
        label: "Protocol",
        value: "SIP/TLS",
        glyph: "🔒",
    },
    TechSpec {
        label: "Media",
        value: "SRTP",
        glyph: "📡",
    },
    TechSpec {
        label: "Codec",
        value: "Opus/G.711",
        glyph: "🎵",
    },
];

/// Cards under the architecture diagram.
pub static ARCHITECTURE_FEATURES: &[FeatureCard] = &[
    FeatureCard {
        glyph: "🔐",
        title: "End-to-End Encryption",
        description: "TLS 1.3 for signaling, SRTP for media. Your calls are always secure.",
        accent: Accent::Cyan,
    },
    FeatureCard {
        glyph: "🌍",
        title: "Global POPs",
        description: "Edge servers in 15+ regions. Route calls via the nearest POP automatically.",
        accent: Accent::Purple,
    },
    FeatureCard {
        glyph: "📊",
        title: "Real-time Analytics",
        description: "Live MOS scores, jitter, packet loss. Debug issues before users notice.",
        accent: Accent::Cyan,
    },
];

/// Rows beside the high-availability diagram.
pub static HA_FEATURES: &[HaFeature] = &[
    HaFeature {
        icon: ICON_CLOCK,
        title: "Zero Downtime",
        subtitle: "Active-Active Cluster Architecture",
        description: "Both servers actively handle traffic simultaneously. No standby waste. Instant load distribution with health-aware routing.",
        accent: Accent::Cyan,
        stat_value: "0ms",
        stat_label: "Failover Time",
    },
    HaFeature {
        icon: ICON_REFRESH,
        title: "Automatic Failover",
        subtitle: "Self-Healing Infrastructure",
        description: "Continuous health monitoring every 5 seconds. Automatic traffic rerouting in milliseconds when issues are detected. Zero dropped calls.",
        accent: Accent::Purple,
        stat_value: "<100ms",
        stat_label: "Detection Time",
    },
    HaFeature {
        icon: ICON_GLOBE,
        title: "Geo-Redundancy",
        subtitle: "Multi-Region Data Sync",
        description: "Data synchronously replicated across 3+ geographic regions. Automatic DNS failover routes users to the nearest healthy datacenter.",
        accent: Accent::Cyan,
        stat_value: "3+",
        stat_label: "Regions",
    },
];

/// Footer link columns.
pub static FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Product",
        links: &[
            FooterLink {
                label: "Architecture",
                href: "#architecture",
            },
            FooterLink {
                label: "High Availability",
                href: "#ha-architecture",
            },
            FooterLink {
                label: "Pricing",
                href: "#pricing",
            },
        ],
    },
    FooterGroup {
        title: "Developers",
        links: &[
            FooterLink {
                label: "API Reference",
                href: "#api",
            },
            FooterLink {
                label: "SDKs",
                href: "#api",
            },
            FooterLink {
                label: "Status",
                href: "#performance",
            },
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            FooterLink {
                label: "Contact Sales",
                href: "mailto:sales@tchapbx.io",
            },
            FooterLink {
                label: "Support",
                href: "mailto:support@tchapbx.io",
            },
        ],
    },
];
