//! Class lookups for accent colours and state-dependent styling.
//!
//! Sections never build class names from strings; they ask an enum. Every
//! class returned here exists in `landing/style/main.css`.

use serde::{Deserialize, Serialize};

use crate::state::{ApiTab, BillingCycle, ScrollState};

/// Brand accent colour of a card, badge or diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Neon cyan, the primary brand colour.
    #[default]
    Cyan,
    /// Neon purple.
    Purple,
    /// Status green.
    Green,
}

impl Accent {
    /// Lowercase name, also the CSS modifier suffix.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Purple => "purple",
            Accent::Green => "green",
        }
    }

    /// Foreground text colour.
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan",
            Accent::Purple => "text-purple",
            Accent::Green => "text-green",
        }
    }

    /// Translucent background, used behind icons.
    pub fn soft_bg_class(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-cyan-soft",
            Accent::Purple => "bg-purple-soft",
            Accent::Green => "bg-green-soft",
        }
    }

    /// Coloured top border on feature cards.
    pub fn border_top_class(self) -> &'static str {
        match self {
            Accent::Cyan => "border-top-cyan",
            Accent::Purple => "border-top-purple",
            Accent::Green => "border-top-green",
        }
    }

    /// Corner brackets on metric cards.
    pub fn corner_class(self) -> &'static str {
        match self {
            Accent::Cyan => "corner-cyan",
            Accent::Purple => "corner-purple",
            Accent::Green => "corner-green",
        }
    }

    /// Gradient fill for buttons and plan ribbons.
    pub fn gradient_class(self) -> &'static str {
        match self {
            Accent::Cyan => "gradient-cyan",
            Accent::Purple => "gradient-purple",
            Accent::Green => "gradient-green",
        }
    }

    /// Hover glow.
    pub fn glow_class(self) -> &'static str {
        match self {
            Accent::Cyan => "glow-cyan",
            Accent::Purple => "glow-purple",
            Accent::Green => "glow-green",
        }
    }

    /// Raw colour, for SVG attributes.
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Cyan => "#00f5ff",
            Accent::Purple => "#a855f7",
            Accent::Green => "#22c55e",
        }
    }
}

impl ApiTab {
    /// Tab button class; only the active tab is highlighted.
    pub fn tab_class(self, active: ApiTab) -> &'static str {
        if self == active {
            "code-tab active"
        } else {
            "code-tab"
        }
    }
}

impl BillingCycle {
    /// Track of the toggle switch.
    pub fn switch_class(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "billing-switch",
            BillingCycle::Yearly => "billing-switch on",
        }
    }

    /// Label beside the switch for `side`; lit when it matches the current cycle.
    pub fn label_class(self, side: BillingCycle) -> &'static str {
        if self == side {
            "billing-label active"
        } else {
            "billing-label"
        }
    }
}

impl ScrollState {
    /// Navbar class: translucent at the top, blurred and bordered once scrolled.
    pub fn nav_class(self) -> &'static str {
        match self {
            ScrollState::Top => "nav",
            ScrollState::Scrolled => "nav scrolled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Accent; 3] = [Accent::Cyan, Accent::Purple, Accent::Green];

    #[test]
    fn lookups_carry_accent_name() {
        for accent in ALL {
            let name = accent.name();
            for class in [
                accent.text_class(),
                accent.soft_bg_class(),
                accent.border_top_class(),
                accent.corner_class(),
                accent.gradient_class(),
                accent.glow_class(),
            ] {
                assert!(class.contains(name), "{class} for {accent:?}");
            }
        }
    }

    #[test]
    fn hex_values_are_distinct() {
        assert_eq!(Accent::Cyan.hex(), "#00f5ff");
        assert_ne!(Accent::Purple.hex(), Accent::Green.hex());
    }

    #[test]
    fn exactly_one_tab_is_active() {
        for active in ApiTab::ALL {
            let lit = ApiTab::ALL
                .into_iter()
                .filter(|tab| tab.tab_class(active).ends_with("active"))
                .count();
            assert_eq!(lit, 1);
        }
    }

    #[test]
    fn billing_classes_follow_cycle() {
        let yearly = BillingCycle::Yearly;
        assert_eq!(yearly.switch_class(), "billing-switch on");
        assert_eq!(yearly.label_class(BillingCycle::Yearly), "billing-label active");
        assert_eq!(yearly.label_class(BillingCycle::Monthly), "billing-label");
        assert_eq!(BillingCycle::Monthly.switch_class(), "billing-switch");
    }

    #[test]
    fn nav_class_tracks_scroll() {
        assert_eq!(ScrollState::from_offset(10.0, 50.0).nav_class(), "nav");
        assert_eq!(ScrollState::from_offset(80.0, 50.0).nav_class(), "nav scrolled");
    }

    #[test]
    fn accent_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            accent: Accent,
        }
        let parsed: Wrap = toml::from_str("accent = \"purple\"").expect("parse");
        assert_eq!(parsed.accent, Accent::Purple);
    }
}
