use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tchapbx_site::SiteConfig;
use tchapbx_site::content::HERO_SPECS;
use tchapbx_site::icons::ICON_DOCUMENT;
use tchapbx_site::particles::{PARTICLE_FILL, ParticleField, ParticleParams};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::{CancelToken, FrameLoop, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-bg-grid"></div>
            <div class="hero-glow hero-glow-purple"></div>
            <div class="hero-glow hero-glow-cyan"></div>

            <ParticleCanvas />

            <div class="container hero-content">
                <div class="hero-badge">
                    <span class="status-dot pulse"></span>
                    <span class="hero-badge-text">"All Systems Operational"</span>
                    <span class="text-cyan mono">"99.99% Uptime"</span>
                </div>

                <h1 class="hero-title">
                    "Enterprise-Grade "
                    <span class="gradient-text">"Cloud PBX"</span>
                    <br />
                    "for Developers"
                </h1>

                <p class="hero-subtitle mono">
                    <span class="text-cyan">"99.99% Uptime"</span>
                    " • "
                    <span class="text-purple">"Global Low-latency Zones"</span>
                    " • "
                    <span class="text-white">"Native WebRTC Support"</span>
                </p>

                <div class="hero-ctas">
                    <a href="#api" class="btn-primary">
                        <Icon path=ICON_DOCUMENT class="icon-md" />
                        "Read Documentation"
                    </a>
                    <a href="#performance" class="btn-secondary">
                        <span class="status-dot"></span>
                        "View Status"
                    </a>
                </div>

                <div class="hero-specs">
                    {HERO_SPECS
                        .iter()
                        .map(|spec| {
                            view! {
                                <div class="glass-card spec-card">
                                    <span class="spec-glyph">{spec.glyph}</span>
                                    <div class="spec-value mono text-cyan">{spec.value}</div>
                                    <div class="spec-label">{spec.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}

fn viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Full-viewport particle network behind the hero copy.
#[component]
fn ParticleCanvas() -> impl IntoView {
    let params = expect_context::<SiteConfig>().particles;
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let token = CancelToken::new();
    let pending_size: Rc<Cell<Option<(u32, u32)>>> = Rc::new(Cell::new(None));

    let resize = window_event_listener(ev::resize, {
        let pending_size = Rc::clone(&pending_size);
        move |_| pending_size.set(viewport_size())
    });

    {
        let token = token.clone();
        Effect::new(move |started: Option<bool>| {
            if started == Some(true) {
                return true;
            }
            let Some(canvas) = canvas_ref.get() else {
                return false;
            };
            if let Err(err) = start_animation(canvas, params, token.clone(), Rc::clone(&pending_size)) {
                tracing::warn!(error = ?err, "particle animation disabled");
            }
            true
        });
    }

    on_cleanup(move || {
        token.cancel();
        resize.remove();
    });

    view! { <canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true"></canvas> }
}

fn start_animation(
    canvas: HtmlCanvasElement,
    params: ParticleParams,
    token: CancelToken,
    pending_size: Rc<Cell<Option<(u32, u32)>>>,
) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let (width, height) = viewport_size().unwrap_or((canvas.width(), canvas.height()));
    canvas.set_width(width);
    canvas.set_height(height);

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    let mut field = ParticleField::seed(width, height, params, &mut rng);

    let frames = FrameLoop::start(token, move || {
        if let Some((w, h)) = pending_size.take() {
            canvas.set_width(w);
            canvas.set_height(h);
            field.resize(w, h);
        }
        field.step();
        draw(&ctx, &field);
    })?;
    tracing::debug!(width, height, running = frames.is_running(), "particle animation started");
    Ok(())
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.bounds();
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(PARTICLE_FILL);
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }

    let particles = field.particles();
    ctx.set_line_width(1.0);
    for link in field.links() {
        let (a, b) = (&particles[link.from], &particles[link.to]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&link.stroke_style());
        ctx.stroke();
    }
}
