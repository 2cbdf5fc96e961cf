// TchaPBX Landing Page (Leptos 0.8)
// Developed by The TchaPBX Web Team (c)2025

mod components;
mod sections;
mod telemetry;

use anyhow::Context;
use leptos::prelude::*;
use sections::*;
use tchapbx_site::content::PLANS;
use tchapbx_site::{SiteConfig, seo};
use wasm_bindgen::JsValue;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let config = run().unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!("tchapbx bootstrap: {err:#}")));
        SiteConfig::load_or_default(SITE_TOML)
    });

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

fn run() -> anyhow::Result<SiteConfig> {
    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let level = parsed
        .as_ref()
        .ok()
        .and_then(|config| config.logging.max_level().ok())
        .unwrap_or(tracing::Level::INFO);
    telemetry::init(level)?;

    let config = parsed.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "site.toml rejected, using defaults");
        SiteConfig::default()
    });

    if let Err(err) = inject_structured_data(&config) {
        tracing::warn!(error = %format!("{err:#}"), "structured data not injected");
    }

    tracing::info!(
        product = %config.brand.product_name(),
        particles = config.particles.max_particles,
        "landing page starting"
    );
    Ok(config)
}

/// Append the pricing JSON-LD to `<head>`.
fn inject_structured_data(config: &SiteConfig) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;
    let head = document.head().context("no <head>")?;
    let data = seo::pricing_structured_data(&config.brand.product_name(), PLANS);

    let script = document
        .create_element("script")
        .map_err(|err| anyhow::anyhow!("create <script>: {err:?}"))?;
    script
        .set_attribute("type", "application/ld+json")
        .map_err(|err| anyhow::anyhow!("set type: {err:?}"))?;
    script.set_text_content(Some(&data.to_string()));
    head.append_child(&script)
        .map_err(|err| anyhow::anyhow!("append <script>: {err:?}"))?;
    Ok(())
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Nav />
        <main>
            <Hero />
            <Architecture />
            <HaArchitecture />
            <ApiDemo />
            <PerformanceGrid />
            <DashboardDemo />
            <Pricing />
        </main>
        <Footer />
    }
}
