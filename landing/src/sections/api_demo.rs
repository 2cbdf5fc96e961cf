use leptos::prelude::*;
use tchapbx_site::content::API_FEATURES;
use tchapbx_site::icons::{ICON_ARROW_RIGHT, ICON_CHECK};
use tchapbx_site::state::ApiTab;

use crate::components::Icon;

#[component]
pub fn ApiDemo() -> impl IntoView {
    let (active, set_active) = signal(ApiTab::default());

    view! {
        <section id="api" class="section">
            <div class="section-bg-grid"></div>
            <div class="section-glow-left"></div>
            <div class="container split">
                <div class="api-copy">
                    <span class="section-eyebrow text-purple">"DEVELOPER FIRST"</span>
                    <h2 class="section-title">
                        "Build with our " <span class="gradient-text">"Powerful API"</span>
                    </h2>
                    <p class="section-lead left">
                        "Integrate enterprise telephony in minutes. Our REST API and SDKs "
                        "handle the complexity so you can focus on building great products."
                    </p>
                    <ul class="check-list">
                        {API_FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li>
                                        <span class="check-bubble bg-cyan-soft text-cyan">
                                            <Icon path=ICON_CHECK class="icon-xs" stroke_width="3" />
                                        </span>
                                        <span>{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <a href="#" class="text-link mono">
                        <span>"View Full API Reference"</span>
                        <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                    </a>
                </div>

                <div class="laptop">
                    <div class="laptop-bezel">
                        <div class="laptop-camera"></div>
                        <div class="code-window">
                            <div class="code-header">
                                <div class="code-dots">
                                    <span class="code-dot red"></span>
                                    <span class="code-dot yellow"></span>
                                    <span class="code-dot green"></span>
                                </div>
                                <div class="code-tabs" role="tablist">
                                    {ApiTab::ALL
                                        .into_iter()
                                        .map(|tab| {
                                            view! {
                                                <button
                                                    role="tab"
                                                    aria-selected=move || (active.get() == tab).to_string()
                                                    class=move || tab.tab_class(active.get())
                                                    on:click=move |_| set_active.set(tab)
                                                >
                                                    <span class="code-tab-glyph">{tab.glyph()}</span>
                                                    {tab.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <span class="code-filename mono">{move || active.get().example().filename}</span>
                            </div>
                            <CodeBody tab=active />
                        </div>
                    </div>
                    <div class="laptop-base"></div>

                    <div class="glass-card floating-stat bottom-right border-cyan">
                        <span class="floating-stat-label">"Avg Response:"</span>
                        <span class="floating-stat-value text-cyan mono">"<50ms"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Line-numbered sample for the active tab. Re-rendered on tab change.
#[component]
fn CodeBody(tab: ReadSignal<ApiTab>) -> impl IntoView {
    move || {
        let example = tab.get().example();
        view! {
            <pre class="code-body" data-lang=example.language>
                <code>
                    {example
                        .numbered_lines()
                        .map(|(number, line)| {
                            let class = if example.is_comment(line) { "code-line comment" } else { "code-line" };
                            view! {
                                <span class=class>
                                    <span class="line-number">{number}</span>
                                    <span class="line-text">{line}</span>
                                    "\n"
                                </span>
                            }
                        })
                        .collect_view()}
                </code>
            </pre>
        }
    }
}
