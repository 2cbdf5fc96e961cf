use leptos::prelude::*;
use tchapbx_site::content::ARCHITECTURE_FEATURES;
use tchapbx_site::style::Accent;

const NODE_FILL: &str = "#151d35";
const LABEL_FILL: &str = "#0a0e1a";
const MUTED: &str = "#666";
const MONO: &str = "JetBrains Mono";

/// SIP/TLS over SRTP badge pair between two nodes, centred on `x`.
fn protocol_labels(x: i32) -> impl IntoView {
    let left = (x - 50).to_string();
    let x = x.to_string();
    view! {
        <g class="diagram-fade">
            <rect x=left.clone() y="160" width="100" height="30" rx="6" fill=LABEL_FILL stroke=Accent::Cyan.hex() stroke-width="1"></rect>
            <text x=x.clone() y="180" text-anchor="middle" fill=Accent::Cyan.hex() font-size="11" font-family=MONO>"SIP/TLS"</text>
            <rect x=left y="200" width="100" height="30" rx="6" fill=LABEL_FILL stroke=Accent::Purple.hex() stroke-width="1"></rect>
            <text x=x y="220" text-anchor="middle" fill=Accent::Purple.hex() font-size="11" font-family=MONO>"SRTP"</text>
        </g>
    }
}

/// Horizontal glow gradient, transparent at both ends.
fn fade_gradient(id: &'static str, accent: Accent) -> impl IntoView {
    view! {
        <linearGradient id=id x1="0%" y1="0%" x2="100%" y2="0%">
            <stop offset="0%" stop-color=accent.hex() stop-opacity="0"></stop>
            <stop offset="50%" stop-color=accent.hex() stop-opacity="1"></stop>
            <stop offset="100%" stop-color=accent.hex() stop-opacity="0"></stop>
        </linearGradient>
    }
}

#[component]
pub fn Architecture() -> impl IntoView {
    view! {
        <section id="architecture" class="section section-alt">
            <div class="section-bg-grid"></div>
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow">"ARCHITECTURE"</span>
                    <h2 class="section-title">
                        "How " <span class="gradient-text">"TchaPBX"</span> " Works"
                    </h2>
                    <p class="section-lead">
                        "Enterprise-grade infrastructure with carrier-grade reliability. "
                        "Built on proven SIP standards with modern security."
                    </p>
                </div>

                <div class="glass-card diagram-card">
                    <svg
                        viewBox="0 0 1000 400"
                        class="diagram"
                        fill="none"
                        xmlns="http://www.w3.org/2000/svg"
                        role="img"
                        aria-label="Your app connects over SIP/TLS and SRTP to TchaPBX Core, which connects to the PSTN carrier"
                    >
                        <defs>
                            {fade_gradient("cyanGradient", Accent::Cyan)}
                            {fade_gradient("purpleGradient", Accent::Purple)}
                        </defs>

                        <path class="flow-line svg-glow-cyan" d="M 200 200 L 400 200" stroke="url(#cyanGradient)" stroke-width="3" stroke-dasharray="10 5"></path>
                        <path class="flow-line svg-glow-purple" d="M 600 200 L 800 200" stroke="url(#purpleGradient)" stroke-width="3" stroke-dasharray="10 5"></path>

                        // Your App
                        <g class="diagram-fade">
                            <rect class="svg-glow-cyan" x="50" y="150" width="150" height="100" rx="12" fill=NODE_FILL stroke=Accent::Cyan.hex() stroke-width="2"></rect>
                            <text x="125" y="190" text-anchor="middle" fill=Accent::Cyan.hex() font-size="14" font-family=MONO>"Your App"</text>
                            <text x="125" y="220" text-anchor="middle" fill=MUTED font-size="12" font-family=MONO>"WebRTC / SDK"</text>
                            <circle class="pulse-dot" cx="185" cy="165" r="6" fill=Accent::Green.hex()></circle>
                        </g>

                        {protocol_labels(300)}

                        // TchaPBX Core
                        <g class="diagram-fade">
                            <rect class="svg-glow-cyan" x="400" y="120" width="200" height="160" rx="16" fill=NODE_FILL stroke="url(#cyanGradient)" stroke-width="3"></rect>
                            <rect x="410" y="130" width="180" height="140" rx="12" fill="none" stroke=Accent::Cyan.hex() stroke-width="1" opacity="0.3"></rect>
                            <text x="500" y="165" text-anchor="middle" fill="#fff" font-size="16" font-weight="bold" font-family="Inter">"TchaPBX Core"</text>
                            <text x="500" y="190" text-anchor="middle" fill=Accent::Cyan.hex() font-size="12" font-family=MONO>"SIP Proxy"</text>
                            <text x="500" y="210" text-anchor="middle" fill=MUTED font-size="11" font-family=MONO>"Load Balancer"</text>
                            <text x="500" y="230" text-anchor="middle" fill=MUTED font-size="11" font-family=MONO>"Media Server"</text>
                            <text x="500" y="250" text-anchor="middle" fill=MUTED font-size="11" font-family=MONO>"Recording Engine"</text>
                            <circle class="pulse-dot" cx="585" cy="135" r="8" fill=Accent::Green.hex()></circle>
                        </g>

                        {protocol_labels(700)}

                        // PSTN / Carrier
                        <g class="diagram-fade">
                            <rect class="svg-glow-purple" x="800" y="150" width="150" height="100" rx="12" fill=NODE_FILL stroke=Accent::Purple.hex() stroke-width="2"></rect>
                            <text x="875" y="190" text-anchor="middle" fill=Accent::Purple.hex() font-size="14" font-family=MONO>"PSTN / Carrier"</text>
                            <text x="875" y="220" text-anchor="middle" fill=MUTED font-size="12" font-family=MONO>"SIP Trunk"</text>
                            <circle class="pulse-dot" cx="935" cy="165" r="6" fill=Accent::Green.hex()></circle>
                        </g>

                        // Data flow dots travel 200px along each link
                        <circle class="flow-dot svg-glow-cyan" cx="200" cy="200" r="4" fill=Accent::Cyan.hex()></circle>
                        <circle class="flow-dot flow-dot-delayed svg-glow-purple" cx="600" cy="200" r="4" fill=Accent::Purple.hex()></circle>
                    </svg>
                </div>

                <div class="feature-grid">
                    {ARCHITECTURE_FEATURES
                        .iter()
                        .map(|feature| {
                            let accent = feature.accent;
                            view! {
                                <div class=format!("glass-card feature-card {} {}", accent.border_top_class(), accent.glow_class())>
                                    <span class="feature-glyph">{feature.glyph}</span>
                                    <h3 class="feature-title">{feature.title}</h3>
                                    <p class="feature-desc">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
