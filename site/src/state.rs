//! UI state machines.
//!
//! Each section owns one of these through a Leptos signal; nothing here is
//! shared or persisted. Transitions are plain synchronous method calls.

use crate::content::{self, CodeExample, PlanPrice, PricingPlan};

/// Code-sample tab in the API demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiTab {
    /// Raw HTTP via cURL (initial tab).
    #[default]
    Curl,
    /// Node.js SDK.
    NodeJs,
    /// Python SDK.
    Python,
}

impl ApiTab {
    /// Tabs in display order.
    pub const ALL: [ApiTab; 3] = [ApiTab::Curl, ApiTab::NodeJs, ApiTab::Python];

    /// Stable identifier (`curl`, `nodejs`, `python`).
    pub fn id(self) -> &'static str {
        match self {
            ApiTab::Curl => "curl",
            ApiTab::NodeJs => "nodejs",
            ApiTab::Python => "python",
        }
    }

    /// Parse an identifier produced by [`ApiTab::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ApiTab::Curl => "cURL",
            ApiTab::NodeJs => "Node.js",
            ApiTab::Python => "Python",
        }
    }

    /// Glyph shown before the label.
    pub fn glyph(self) -> &'static str {
        match self {
            ApiTab::Curl => "⌘",
            ApiTab::NodeJs => "⬢",
            ApiTab::Python => "🐍",
        }
    }

    /// The code sample visible while this tab is active.
    pub fn example(self) -> &'static CodeExample {
        match self {
            ApiTab::Curl => &content::CURL_EXAMPLE,
            ApiTab::NodeJs => &content::NODEJS_EXAMPLE,
            ApiTab::Python => &content::PYTHON_EXAMPLE,
        }
    }
}

/// Pricing toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BillingCycle {
    /// Billed monthly (initial).
    #[default]
    Monthly,
    /// Billed yearly at a discounted monthly rate.
    Yearly,
}

impl BillingCycle {
    /// The other cycle.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    /// True for [`BillingCycle::Yearly`].
    pub fn is_yearly(self) -> bool {
        self == BillingCycle::Yearly
    }

    /// Monthly figure charged under this cycle.
    pub fn price(self, price: &PlanPrice) -> u32 {
        match self {
            BillingCycle::Monthly => price.monthly,
            BillingCycle::Yearly => price.yearly,
        }
    }

    /// Suffix printed after the amount.
    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/mo",
        }
    }
}

/// Strike-through comparison shown under a yearly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualComparison {
    /// Twelve months at the monthly rate.
    pub list: u32,
    /// Twelve months at the yearly rate.
    pub discounted: u32,
}

impl AnnualComparison {
    /// `$120/year`
    pub fn list_label(&self) -> String {
        format!("${}/year", self.list)
    }

    /// `$96/year`
    pub fn discounted_label(&self) -> String {
        format!("${}/year", self.discounted)
    }
}

/// What a plan card shows for the current billing cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    /// Dollar amount.
    pub amount: u32,
    /// `/month` or `/mo`.
    pub period: &'static str,
    /// Promotional line, monthly billing only.
    pub promo: Option<&'static str>,
    /// Annual totals, yearly billing only.
    pub annual: Option<AnnualComparison>,
}

impl PriceDisplay {
    /// Derive the displayed figures for `plan` under `cycle`.
    pub fn for_plan(plan: &PricingPlan, cycle: BillingCycle) -> Self {
        let price = &plan.price;
        match cycle {
            BillingCycle::Monthly => Self {
                amount: price.monthly,
                period: cycle.period(),
                promo: (!price.promo_text.is_empty()).then_some(price.promo_text),
                annual: None,
            },
            BillingCycle::Yearly => Self {
                amount: price.yearly,
                period: cycle.period(),
                promo: None,
                annual: Some(AnnualComparison {
                    list: price.monthly * 12,
                    discounted: price.yearly * 12,
                }),
            },
        }
    }

    /// `$` + amount.
    pub fn amount_label(&self) -> String {
        format!("${}", self.amount)
    }

    /// Amount and period, e.g. `$10/month` or `$8/mo`.
    pub fn headline(&self) -> String {
        format!("${}{}", self.amount, self.period)
    }
}

/// Discount of the yearly rate against the monthly rate, rounded to the
/// nearest percent. Zero when the plan has no monthly price.
pub fn savings_percent(price: &PlanPrice) -> u32 {
    if price.monthly == 0 || price.yearly >= price.monthly {
        return 0;
    }
    let saved = price.monthly - price.yearly;
    (saved * 100 + price.monthly / 2) / price.monthly
}

/// Best discount across `plans`, for the "Save N%" badge.
pub fn best_savings_percent(plans: &[PricingPlan]) -> Option<u32> {
    plans
        .iter()
        .map(|plan| savings_percent(&plan.price))
        .filter(|pct| *pct > 0)
        .max()
}

/// What the user did to try to close a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The × button.
    CloseButton,
    /// A click on the dimmed area around the dialog.
    Backdrop,
    /// The Escape key.
    EscapeKey,
    /// A click inside the dialog body.
    BodyClick,
}

impl DismissTrigger {
    /// Whether this trigger closes the dialog.
    pub fn dismisses(self) -> bool {
        !matches!(self, DismissTrigger::BodyClick)
    }
}

/// Dialog visibility: closed, or open on one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState<T> {
    /// Nothing shown (initial).
    Closed,
    /// Showing the detail view of `T`.
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    /// Show `entity`, replacing whatever was open.
    pub fn open(&mut self, entity: T) {
        *self = ModalState::Open(entity);
    }

    /// Apply a dismissal attempt. Returns `true` if the dialog closed.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if !self.is_open() || !trigger.dismisses() {
            return false;
        }
        *self = ModalState::Closed;
        true
    }

    /// True while a dialog is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// The entity being shown, if any.
    pub fn active(&self) -> Option<&T> {
        match self {
            ModalState::Open(entity) => Some(entity),
            ModalState::Closed => None,
        }
    }
}

/// Navbar affordance driven by the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// At or above the threshold (initial).
    #[default]
    Top,
    /// Scrolled past the threshold.
    Scrolled,
}

impl ScrollState {
    /// State for a scroll offset. Recomputed on every scroll event, so it
    /// follows the offset in both directions.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    /// True once past the threshold.
    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DEMOS, METRICS, PLANS};
    use pretty_assertions::assert_eq;

    #[test]
    fn api_tab_starts_on_curl() {
        assert_eq!(ApiTab::default(), ApiTab::Curl);
        assert_eq!(ApiTab::default().example().filename, "terminal");
    }

    #[test]
    fn python_tab_shows_main_py() {
        let example = ApiTab::Python.example();
        assert_eq!(example.filename, "main.py");
        assert_eq!(example.language, "python");
        assert!(example.code.contains("from tchapbx import Client"));
    }

    #[test]
    fn each_tab_selects_its_own_sample() {
        for tab in ApiTab::ALL {
            let visible = tab.example();
            let others: Vec<_> = ApiTab::ALL.into_iter().filter(|t| *t != tab).collect();
            assert_eq!(others.len(), 2);
            for other in others {
                assert_ne!(visible, other.example(), "{tab:?} vs {other:?}");
            }
        }
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in ApiTab::ALL {
            assert_eq!(ApiTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(ApiTab::from_id("ruby"), None);
    }

    #[test]
    fn billing_toggle_flips() {
        let cycle = BillingCycle::default();
        assert_eq!(cycle, BillingCycle::Monthly);
        assert_eq!(cycle.toggle(), BillingCycle::Yearly);
        assert_eq!(cycle.toggle().toggle(), BillingCycle::Monthly);
    }

    #[test]
    fn basic_plan_yearly_is_eight_per_mo() {
        let basic = PLANS.iter().find(|p| p.name == "Basic").expect("basic plan");
        assert_eq!(PriceDisplay::for_plan(basic, BillingCycle::Monthly).headline(), "$10/month");
        assert_eq!(PriceDisplay::for_plan(basic, BillingCycle::Yearly).headline(), "$8/mo");
    }

    #[test]
    fn toggling_changes_every_plan_and_back() {
        let mut cycle = BillingCycle::Monthly;
        let monthly: Vec<u32> = PLANS.iter().map(|p| PriceDisplay::for_plan(p, cycle).amount).collect();

        cycle = cycle.toggle();
        let yearly: Vec<u32> = PLANS.iter().map(|p| PriceDisplay::for_plan(p, cycle).amount).collect();

        cycle = cycle.toggle();
        let back: Vec<u32> = PLANS.iter().map(|p| PriceDisplay::for_plan(p, cycle).amount).collect();

        for (plan, (m, y)) in PLANS.iter().zip(monthly.iter().zip(&yearly)) {
            assert_eq!(*m, plan.price.monthly);
            assert_eq!(*y, plan.price.yearly);
            assert_ne!(m, y, "{} did not change", plan.name);
        }
        assert_eq!(monthly, back);
    }

    #[test]
    fn monthly_shows_promo_yearly_shows_annual_totals() {
        let plan = &PLANS[1];
        let monthly = PriceDisplay::for_plan(plan, BillingCycle::Monthly);
        assert_eq!(monthly.promo, Some("First month only $9"));
        assert_eq!(monthly.annual, None);

        let yearly = PriceDisplay::for_plan(plan, BillingCycle::Yearly);
        assert_eq!(yearly.promo, None);
        let annual = yearly.annual.expect("annual comparison");
        assert_eq!(annual.list_label(), "$1440/year");
        assert_eq!(annual.discounted_label(), "$1152/year");
    }

    #[test]
    fn every_plan_saves_twenty_percent() {
        for plan in PLANS {
            assert_eq!(savings_percent(&plan.price), 20, "{}", plan.name);
        }
        assert_eq!(best_savings_percent(PLANS), Some(20));
        assert_eq!(best_savings_percent(&[]), None);
    }

    #[test]
    fn savings_handles_degenerate_prices() {
        let free = PlanPrice {
            monthly: 0,
            yearly: 0,
            promo: 0,
            promo_text: "",
        };
        assert_eq!(savings_percent(&free), 0);
        let pricier = PlanPrice {
            monthly: 10,
            yearly: 12,
            ..free
        };
        assert_eq!(savings_percent(&pricier), 0);
    }

    #[test]
    fn modal_opens_on_card_and_closes_on_dismiss() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());

        modal.open(&METRICS[1]);
        assert_eq!(modal.active().map(|m| m.label), Some("MOS Score"));

        for trigger in [DismissTrigger::CloseButton, DismissTrigger::Backdrop, DismissTrigger::EscapeKey] {
            modal.open(&METRICS[0]);
            assert!(modal.dismiss(trigger), "{trigger:?}");
            assert_eq!(modal, ModalState::Closed);
        }
    }

    #[test]
    fn body_click_does_not_dismiss() {
        let mut modal = ModalState::default();
        modal.open(&DEMOS[0]);
        assert!(!modal.dismiss(DismissTrigger::BodyClick));
        assert_eq!(modal.active().map(|d| d.id), Some(DEMOS[0].id));
    }

    #[test]
    fn opening_another_card_replaces_entity() {
        let mut modal = ModalState::default();
        modal.open(&DEMOS[0]);
        modal.open(&DEMOS[2]);
        assert_eq!(modal.active().map(|d| d.title), Some(DEMOS[2].title));
    }

    #[test]
    fn dismissing_closed_modal_is_noop() {
        let mut modal: ModalState<u8> = ModalState::Closed;
        assert!(!modal.dismiss(DismissTrigger::Backdrop));
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn scroll_state_is_not_latching() {
        let offsets = [0.0, 20.0, 50.0, 51.0, 400.0, 50.0, 10.0];
        let states: Vec<ScrollState> = offsets
            .iter()
            .map(|y| ScrollState::from_offset(*y, 50.0))
            .collect();
        assert_eq!(
            states,
            vec![
                ScrollState::Top,
                ScrollState::Top,
                ScrollState::Top,
                ScrollState::Scrolled,
                ScrollState::Scrolled,
                ScrollState::Top,
                ScrollState::Top,
            ]
        );
    }
}
