use leptos::ev;
use leptos::prelude::*;
use tchapbx_site::SiteConfig;
use tchapbx_site::state::ScrollState;

const LINKS: &[(&str, &str)] = &[
    ("#architecture", "Architecture"),
    ("#ha-architecture", "High Availability"),
    ("#api", "API"),
    ("#performance", "Performance"),
    ("#dashboard-demo", "Dashboard"),
    ("#pricing", "Pricing"),
];

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn Nav() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let threshold = config.nav.scroll_threshold;
    let brand = config.brand;

    let (scroll, set_scroll) = signal(ScrollState::from_offset(current_offset(), threshold));

    let listener = window_event_listener(ev::scroll, move |_| {
        let next = ScrollState::from_offset(current_offset(), threshold);
        if next != scroll.get_untracked() {
            tracing::trace!(?next, "navbar scroll state");
            set_scroll.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <nav class=move || scroll.get().nav_class()>
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <span>{brand.logo_letter}</span>
                    </div>
                    <span class="nav-title">
                        {brand.wordmark}
                        <span class="text-cyan">{brand.wordmark_accent}</span>
                    </span>
                </a>
                <div class="nav-links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                </div>
                <div class="nav-actions">
                    <a href="#" class="nav-signin">"Sign In"</a>
                    <a href="#pricing" class="btn-primary btn-sm">"Get Started"</a>
                </div>
            </div>
        </nav>
    }
}
