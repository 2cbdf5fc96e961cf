use leptos::prelude::*;
use tchapbx_site::content::{METRICS, Metric, SERVICES};
use tchapbx_site::icons::{ICON_ARROW_RIGHT, ICON_CHECK};
use tchapbx_site::state::{DismissTrigger, ModalState};
use web_sys::KeyboardEvent;

use crate::components::{Icon, Modal};

fn is_activation_key(ev: &KeyboardEvent) -> bool {
    matches!(ev.key().as_str(), "Enter" | " ")
}

#[component]
pub fn PerformanceGrid() -> impl IntoView {
    let (modal, set_modal) = signal(ModalState::<&'static Metric>::default());

    let open = move |metric: &'static Metric| {
        tracing::debug!(metric = metric.label, "metric modal opened");
        set_modal.update(|m| m.open(metric));
    };
    let on_dismiss = Callback::new(move |trigger: DismissTrigger| {
        set_modal.update(|m| {
            if m.dismiss(trigger) {
                tracing::debug!(?trigger, "metric modal closed");
            }
        });
    });

    view! {
        <section id="performance" class="section section-alt">
            <div class="section-bg-grid"></div>
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow">"PERFORMANCE"</span>
                    <h2 class="section-title">
                        "Built for " <span class="gradient-text">"Scale"</span>
                    </h2>
                    <p class="section-lead">
                        "Enterprise-grade infrastructure that handles millions of calls while "
                        "maintaining exceptional quality metrics."
                    </p>
                </div>

                <div class="metric-grid">
                    {METRICS
                        .iter()
                        .map(|metric| {
                            let accent = metric.accent;
                            view! {
                                <div
                                    class="glass-card metric-card"
                                    role="button"
                                    tabindex="0"
                                    aria-haspopup="dialog"
                                    on:click=move |_| open(metric)
                                    on:keydown=move |ev: KeyboardEvent| {
                                        if is_activation_key(&ev) {
                                            ev.prevent_default();
                                            open(metric);
                                        }
                                    }
                                >
                                    <div class=format!("metric-card-wash {}", accent.soft_bg_class())></div>
                                    <div class="metric-card-body">
                                        <div class=accent.text_class()>
                                            <Icon path=metric.icon class="icon-xl" stroke_width="1.5" />
                                        </div>
                                        <div class=format!("metric-value mono {}", accent.text_class())>{metric.value}</div>
                                        <h3 class="metric-label">{metric.label}</h3>
                                        <p class="metric-desc">{metric.description}</p>
                                    </div>
                                    <div class=format!("metric-corner {}", accent.corner_class())></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <StatusBar />
            </div>

            {move || {
                modal
                    .get()
                    .active()
                    .copied()
                    .map(|metric| view! { <MetricModal metric=metric on_dismiss=on_dismiss /> })
            }}
        </section>
    }
}

#[component]
fn MetricModal(metric: &'static Metric, on_dismiss: Callback<DismissTrigger>) -> impl IntoView {
    let accent = metric.accent;

    view! {
        <Modal on_dismiss=on_dismiss label=metric.label panel_class="modal-panel modal-metric">
            <div class="modal-metric-head">
                <div class=format!("modal-metric-icon {} {}", accent.soft_bg_class(), accent.text_class())>
                    <Icon path=metric.icon class="icon-lg" stroke_width="1.5" />
                </div>
                <div>
                    <div class=format!("metric-value mono {}", accent.text_class())>{metric.value}</div>
                    <h3 class="modal-title">{metric.label}</h3>
                </div>
            </div>
            <p class="modal-lead">{metric.description}</p>
            {metric.details.map(|details| {
                view! {
                    <div class="modal-details">
                        <p class="modal-details-headline">{details.headline}</p>
                        <ul class="check-list compact">
                            {details
                                .points
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li>
                                            <span class=format!("check-bubble {} {}", accent.soft_bg_class(), accent.text_class())>
                                                <Icon path=ICON_CHECK class="icon-xs" stroke_width="3" />
                                            </span>
                                            <span>{*point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })}
        </Modal>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let all_up = SERVICES.iter().all(|s| s.operational);
    let (summary_dot, summary) = if all_up {
        ("status-dot pulse", "All Systems Operational")
    } else {
        ("status-dot degraded", "Partial Outage")
    };

    view! {
        <div class="glass-card status-bar">
            <div class="status-summary">
                <span class=summary_dot></span>
                <span class="status-headline">{summary}</span>
                <span class="status-sep">"|"</span>
                <span class="status-updated mono">"Last updated: Just now"</span>
            </div>
            <div class="status-services">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let (dot, tone) = if service.operational {
                            ("status-dot small", "text-green")
                        } else {
                            ("status-dot small degraded", "text-purple")
                        };
                        view! {
                            <div class="status-service">
                                <div class="status-service-name">{service.name}</div>
                                <div class="status-service-state">
                                    <span class=dot></span>
                                    <span class=format!("mono {tone}")>{service.status}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="#" class="text-link mono">
                "View Status Page"
                <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
            </a>
        </div>
    }
}
