use leptos::prelude::*;
use tchapbx_site::content::{PLANS, PricingPlan};
use tchapbx_site::icons::{ICON_CHECK, ICON_CHIP, ICON_COLLECTION, ICON_DATABASE};
use tchapbx_site::state::{BillingCycle, PriceDisplay, best_savings_percent};

use crate::components::Icon;

#[component]
pub fn Pricing() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::default());
    let savings = best_savings_percent(PLANS);

    view! {
        <section id="pricing" class="section section-alt">
            <div class="section-bg-grid"></div>
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow">"PRICING"</span>
                    <h2 class="section-title">
                        "Choose Your " <span class="gradient-text">"Perfect Plan"</span>
                    </h2>
                    <p class="section-lead">
                        "Flexible pricing for teams of all sizes. Start with a promotional rate "
                        "and scale as you grow."
                    </p>

                    <div class="billing-toggle">
                        <span class=move || cycle.get().label_class(BillingCycle::Monthly)>"Monthly"</span>
                        <button
                            class=move || cycle.get().switch_class()
                            role="switch"
                            aria-label="Bill yearly"
                            aria-checked=move || cycle.get().is_yearly().to_string()
                            on:click=move |_| {
                                set_cycle.update(|c| *c = c.toggle());
                                tracing::debug!(cycle = ?cycle.get_untracked(), "billing cycle toggled");
                            }
                        >
                            <span class="billing-knob"></span>
                        </button>
                        <span class=move || cycle.get().label_class(BillingCycle::Yearly)>"Yearly"</span>
                        <Show when=move || cycle.get().is_yearly() && savings.is_some()>
                            <span class="save-badge mono">
                                {move || savings.map(|pct| format!("Save {pct}%"))}
                            </span>
                        </Show>
                    </div>
                </div>

                <div class="plan-grid">
                    {PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=plan cycle=cycle /> })
                        .collect_view()}
                </div>

                <div class="pricing-note">
                    <p class="pricing-note-small">
                        "All plans include 24/7 monitoring, automatic backups, and free SSL certificates."
                    </p>
                    <p class="pricing-note-cta">
                        "Need a custom solution? "
                        <a href="mailto:sales@tchapbx.io" class="text-link">"Contact our sales team →"</a>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static PricingPlan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let accent = plan.accent;
    let (card_class, ribbon_class, title_class, check_class, button_class) = if plan.highlight {
        (
            "plan-card highlight",
            "plan-ribbon highlight",
            "plan-name text-cyan",
            "plan-check text-cyan",
            "btn-buy primary",
        )
    } else {
        (
            "glass-card plan-card",
            "plan-ribbon",
            "plan-name",
            "plan-check text-green",
            "btn-buy",
        )
    };
    let display = move || PriceDisplay::for_plan(plan, cycle.get());

    view! {
        <div class=card_class>
            {plan.label.map(|label| view! { <div class=ribbon_class>{label}</div> })}
            <div class="plan-body">
                <h3 class=title_class>{plan.name}</h3>
                <p class="plan-desc">{plan.description}</p>

                <div class="plan-price">
                    <div class="plan-price-line">
                        <span class="plan-amount">{move || display().amount_label()}</span>
                        <span class="plan-period">{move || display().period}</span>
                    </div>
                    {move || {
                        let display = display();
                        match (display.promo, display.annual) {
                            (Some(promo), _) => {
                                view! { <div class="plan-promo mono text-cyan">"🎉 " {promo}</div> }
                                    .into_any()
                            }
                            (None, Some(annual)) => {
                                view! {
                                    <div class="plan-annual">
                                        <span class="strike">{annual.list_label()}</span>
                                        <span class="text-cyan">{annual.discounted_label()}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                            (None, None) => ().into_any(),
                        }
                    }}
                </div>

                <div class="plan-specs mono">
                    <div class="plan-spec">
                        <span class=accent.text_class()><Icon path=ICON_CHIP class="icon-sm" /></span>
                        <span>{plan.specs.cpu}</span>
                    </div>
                    <div class="plan-spec">
                        <span class="text-purple"><Icon path=ICON_COLLECTION class="icon-sm" /></span>
                        <span>{plan.specs.ram}</span>
                    </div>
                    <div class="plan-spec">
                        <span class="text-cyan"><Icon path=ICON_DATABASE class="icon-sm" /></span>
                        <span>{plan.specs.storage}</span>
                    </div>
                </div>

                <ul class="plan-features">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li>
                                    <span class=check_class><Icon path=ICON_CHECK class="icon-md" /></span>
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <a href="#" class=button_class>"Buy Now"</a>
            </div>
        </div>
    }
}
