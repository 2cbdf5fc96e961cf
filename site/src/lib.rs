//! # tchapbx-site
//!
//! Everything the TchaPBX landing page knows that is not DOM glue.
//!
//! The Leptos app in `landing/` renders sections; this crate owns the data
//! and the logic behind them so it can be exercised natively with
//! `cargo test`, without a browser.
//!
//! ## Architecture
//!
//! - [`content`] - Static marketing content (code samples, metrics, plans, demos)
//! - [`particles`] - Particle-network simulation behind the hero
//! - [`state`] - Tab, billing toggle, modal and scroll state machines
//! - [`style`] - Accent lookup replacing runtime class concatenation
//! - [`icons`] - Inline SVG path data shared by the sections
//! - [`config`] - `site.toml` configuration
//! - [`seo`] - JSON-LD structured data for the pricing table
//! - [`error`] - Error type for configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::SmallRng};
//! use tchapbx_site::particles::{ParticleField, ParticleParams};
//! use tchapbx_site::state::{ApiTab, BillingCycle, PriceDisplay};
//! use tchapbx_site::content::PLANS;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut field = ParticleField::seed(1200, 800, ParticleParams::default(), &mut rng);
//! assert_eq!(field.len(), 64);
//! field.step();
//!
//! assert_eq!(ApiTab::Python.example().filename, "main.py");
//!
//! let basic = &PLANS[0];
//! assert_eq!(PriceDisplay::for_plan(basic, BillingCycle::Yearly).headline(), "$8/mo");
//! ```
//!
//! ---
//!
//! Developed by The TchaPBX Web Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod particles;
pub mod seo;
pub mod state;
pub mod style;

pub use config::SiteConfig;
pub use error::SiteError;
