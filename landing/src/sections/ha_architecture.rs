use leptos::prelude::*;
use tchapbx_site::content::HA_FEATURES;
use tchapbx_site::icons::ICON_ARROW_RIGHT;
use tchapbx_site::style::Accent;

use crate::components::Icon;

const NODE_FILL: &str = "#151d35";
const MONO: &str = "JetBrains Mono";

#[component]
pub fn HaArchitecture() -> impl IntoView {
    view! {
        <section id="ha-architecture" class="section section-alt">
            <div class="section-bg-grid faint"></div>
            <div class="container ha-layout">
                <div class="ha-copy">
                    <span class="section-eyebrow">"HIGH AVAILABILITY"</span>
                    <h2 class="section-title">
                        "Built for " <span class="gradient-text">"99.999%"</span> " Uptime"
                    </h2>
                    <p class="section-lead left">
                        "Our High Availability architecture ensures your business communications "
                        "never go down. Every component is redundant, every failure is anticipated, "
                        "and recovery is automatic."
                    </p>

                    <div class="ha-features">
                        {HA_FEATURES
                            .iter()
                            .map(|feature| {
                                let accent = feature.accent;
                                view! {
                                    <div class="ha-feature">
                                        <div class=format!("ha-feature-icon {} {}", accent.soft_bg_class(), accent.text_class())>
                                            <Icon path=feature.icon class="icon-lg" stroke_width="1.5" />
                                        </div>
                                        <div class="ha-feature-body">
                                            <div class="ha-feature-head">
                                                <h3 class="ha-feature-title">{feature.title}</h3>
                                                <span class=format!("stat-pill mono {} {}", accent.soft_bg_class(), accent.text_class())>
                                                    {feature.stat_value} " " {feature.stat_label}
                                                </span>
                                            </div>
                                            <p class="ha-feature-subtitle">{feature.subtitle}</p>
                                            <p class="ha-feature-desc">{feature.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a href="#" class="btn-primary ha-cta">
                        <span>"Read HA Documentation"</span>
                        <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                    </a>
                </div>

                <div class="ha-diagram-wrap">
                    <div class="glass-card ha-diagram-card">
                        <HaDiagram />
                        <div class="legend">
                            <span class="legend-item"><span class="legend-dot bg-green"></span>"Active Server"</span>
                            <span class="legend-item"><span class="legend-dot bg-cyan"></span>"Data Flow"</span>
                            <span class="legend-item"><span class="legend-dot bg-purple"></span>"Sync"</span>
                        </div>
                    </div>

                    <div class="glass-card floating-stat top-right border-cyan">
                        <span class="floating-stat-label">"Recovery Time:"</span>
                        <span class="floating-stat-value text-cyan mono">"<100ms"</span>
                    </div>
                    <div class="glass-card floating-stat bottom-left border-purple">
                        <span class="floating-stat-label">"Data Loss:"</span>
                        <span class="floating-stat-value text-purple mono">"0 bytes"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Region box at the bottom of the diagram.
fn region(x: i32, name: &'static str, accent: Accent) -> impl IntoView {
    let rect_x = (x - 40).to_string();
    let text_x = x.to_string();
    view! {
        <g>
            <rect x=rect_x y="420" width="80" height="30" rx="4" fill=NODE_FILL stroke=accent.hex() stroke-width="1"></rect>
            <text x=text_x y="440" text-anchor="middle" fill=accent.hex() font-size="9" font-family=MONO>{name}</text>
        </g>
    }
}

/// Active server box; `blink_delayed` offsets its status-dot blink.
fn server(x: i32, name: &'static str, blink_delayed: bool) -> impl IntoView {
    let green = Accent::Green.hex();
    let rect_x = x.to_string();
    let text_x = (x + 60).to_string();
    let dot_x = (x + 10).to_string();
    let dot_class = if blink_delayed { "blink-dot delayed" } else { "blink-dot" };
    view! {
        <g>
            <rect x=rect_x y="200" width="120" height="80" rx="8" fill=NODE_FILL stroke=green stroke-width="2"></rect>
            <text x=text_x.clone() y="230" text-anchor="middle" fill=green font-size="11" font-family=MONO>{name}</text>
            <text x=text_x y="250" text-anchor="middle" fill="#fff" font-size="10">"Active"</text>
            <circle class=dot_class cx=dot_x cy="215" r="5" fill=green></circle>
        </g>
    }
}

#[component]
fn HaDiagram() -> impl IntoView {
    let cyan = Accent::Cyan.hex();
    let purple = Accent::Purple.hex();

    view! {
        <svg
            viewBox="0 0 400 500"
            class="diagram"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            role="img"
            aria-label="Users reach a load balancer in front of two active servers kept in sync, backed by a replicated database cluster across three regions"
        >
            <defs>
                <linearGradient id="haGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color=cyan></stop>
                    <stop offset="100%" stop-color=purple></stop>
                </linearGradient>
                <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">
                    <polygon points="0 0, 10 3.5, 0 7" fill=purple></polygon>
                </marker>
            </defs>

            <g>
                <rect x="150" y="20" width="100" height="50" rx="8" fill=NODE_FILL stroke=cyan stroke-width="2"></rect>
                <text x="200" y="50" text-anchor="middle" fill="#fff" font-size="12" font-family="Inter">"Users"</text>
                <circle cx="200" cy="35" r="8" fill=cyan opacity="0.3"></circle>
            </g>

            <g class="breathe">
                <rect class="svg-glow-cyan" x="125" y="100" width="150" height="50" rx="8" fill=NODE_FILL stroke="url(#haGradient)" stroke-width="2"></rect>
                <text x="200" y="130" text-anchor="middle" fill=cyan font-size="11" font-family=MONO>"Load Balancer"</text>
            </g>

            <line class="dash-flow" x1="200" y1="70" x2="200" y2="100" stroke=cyan stroke-width="2" stroke-dasharray="4 4"></line>

            {server(50, "Primary", false)}
            {server(230, "Secondary", true)}

            <path class="dash-flow" d="M 175 150 L 110 200" stroke=cyan stroke-width="2" stroke-dasharray="4 4"></path>
            <path class="dash-flow delayed" d="M 225 150 L 290 200" stroke=purple stroke-width="2" stroke-dasharray="4 4"></path>

            <g>
                <line x1="170" y1="240" x2="230" y2="240" stroke=purple stroke-width="2" marker-end="url(#arrowhead)"></line>
                <line x1="230" y1="250" x2="170" y2="250" stroke=purple stroke-width="2" marker-end="url(#arrowhead)"></line>
                <text x="200" y="270" text-anchor="middle" fill=purple font-size="9" font-family=MONO>"Real-time Sync"</text>
            </g>

            <g>
                <rect x="100" y="330" width="200" height="60" rx="8" fill=NODE_FILL stroke=cyan stroke-width="2"></rect>
                <text x="200" y="355" text-anchor="middle" fill=cyan font-size="11" font-family=MONO>"Database Cluster"</text>
                <text x="200" y="375" text-anchor="middle" fill="#666" font-size="10">"3x Replicas | Auto Failover"</text>
            </g>

            <line x1="110" y1="280" x2="150" y2="330" stroke="#666" stroke-width="1" stroke-dasharray="4 4"></line>
            <line x1="290" y1="280" x2="250" y2="330" stroke="#666" stroke-width="1" stroke-dasharray="4 4"></line>

            {region(65, "US-East", Accent::Cyan)}
            {region(200, "EU-West", Accent::Purple)}
            {region(335, "AP-South", Accent::Cyan)}

            <line x1="150" y1="390" x2="65" y2="420" stroke=cyan stroke-width="1" opacity="0.5"></line>
            <line x1="200" y1="390" x2="200" y2="420" stroke=purple stroke-width="1" opacity="0.5"></line>
            <line x1="250" y1="390" x2="335" y2="420" stroke=cyan stroke-width="1" opacity="0.5"></line>
        </svg>
    }
}
