use leptos::prelude::*;
use tchapbx_site::SiteConfig;
use tchapbx_site::content::{DEMOS, DemoVideo};
use tchapbx_site::icons::{ICON_ARROW_RIGHT, ICON_PLAY};
use tchapbx_site::state::{DismissTrigger, ModalState};
use web_sys::KeyboardEvent;

use crate::components::{Icon, Modal, SolidIcon};

const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn DashboardDemo() -> impl IntoView {
    let embed_host = expect_context::<SiteConfig>().media.embed_host;
    let (modal, set_modal) = signal(ModalState::<&'static DemoVideo>::default());

    let open = move |demo: &'static DemoVideo| {
        tracing::debug!(demo = demo.id, "video modal opened");
        set_modal.update(|m| m.open(demo));
    };
    let on_dismiss = Callback::new(move |trigger: DismissTrigger| {
        set_modal.update(|m| {
            m.dismiss(trigger);
        });
    });

    view! {
        <section id="dashboard-demo" class="section">
            <div class="section-bg-grid"></div>
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow text-purple">"DASHBOARD DEMO"</span>
                    <h2 class="section-title">
                        "See " <span class="gradient-text">"TchaPBX"</span> " in Action"
                    </h2>
                    <p class="section-lead">
                        "Experience our powerful admin interface. Watch how easy it is to manage "
                        "enterprise telephony at scale."
                    </p>
                </div>

                <div class="demo-grid">
                    {DEMOS
                        .iter()
                        .map(|demo| {
                            view! {
                                <div
                                    class="demo-card"
                                    role="button"
                                    tabindex="0"
                                    aria-haspopup="dialog"
                                    on:click=move |_| open(demo)
                                    on:keydown=move |ev: KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            open(demo);
                                        }
                                    }
                                >
                                    <div class="demo-thumb">
                                        <img src=demo.thumbnail alt=demo.title loading="lazy" />
                                        <div class="demo-overlay">
                                            <div class="play-button">
                                                <SolidIcon path=ICON_PLAY class="icon-md" />
                                            </div>
                                        </div>
                                        <span class="duration-badge mono">{demo.duration}</span>
                                    </div>
                                    <h3 class="demo-title">{demo.title}</h3>
                                    <p class="demo-desc">{demo.description}</p>
                                    <div class="tag-row">
                                        {demo
                                            .features
                                            .iter()
                                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section-cta">
                    <a href="#" class="text-link">
                        <span>"View All Demo Videos"</span>
                        <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                    </a>
                </div>
            </div>

            {move || {
                let embed_host = embed_host.clone();
                modal
                    .get()
                    .active()
                    .copied()
                    .map(|demo| view! { <VideoModal demo=demo embed_host=embed_host on_dismiss=on_dismiss /> })
            }}
        </section>
    }
}

#[component]
fn VideoModal(
    demo: &'static DemoVideo,
    embed_host: String,
    on_dismiss: Callback<DismissTrigger>,
) -> impl IntoView {
    let player = demo.embed_url(&embed_host).map(|src| {
        view! {
            <div class="video-frame">
                {view! {
                    <iframe
                        src=src
                        title=demo.title
                        allow=PLAYER_ALLOW
                        allowfullscreen=true
                    ></iframe>
                }
                .attr("loading", "lazy")}
            </div>
        }
    });
    if player.is_none() {
        tracing::warn!(demo = demo.id, "demo has no embed id, showing details only");
    }

    view! {
        <Modal on_dismiss=on_dismiss label=demo.title panel_class="modal-panel modal-video">
            {player}
            <div class="video-info">
                <h3 class="modal-title">{demo.title}</h3>
                <p class="modal-lead">{demo.description}</p>
            </div>
        </Modal>
    }
}
