//! schema.org structured data for search engines.

use serde_json::{Value, json};

use crate::content::PricingPlan;
use crate::state::BillingCycle;

/// JSON-LD `Product` describing the plans, with one monthly and one
/// yearly `Offer` per plan. Prices are monthly figures in USD.
pub fn pricing_structured_data(product: &str, plans: &[PricingPlan]) -> Value {
    let offers: Vec<Value> = plans
        .iter()
        .flat_map(|plan| {
            [BillingCycle::Monthly, BillingCycle::Yearly].map(|cycle| {
                json!({
                    "@type": "Offer",
                    "name": format!("{} ({})", plan.name, cycle_name(cycle)),
                    "description": plan.description,
                    "price": cycle.price(&plan.price).to_string(),
                    "priceCurrency": "USD",
                    "priceSpecification": {
                        "@type": "UnitPriceSpecification",
                        "price": cycle.price(&plan.price),
                        "priceCurrency": "USD",
                        "unitCode": "MON",
                    },
                })
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product,
        "category": "Cloud PBX",
        "offers": offers,
    })
}

fn cycle_name(cycle: BillingCycle) -> &'static str {
    match cycle {
        BillingCycle::Monthly => "monthly billing",
        BillingCycle::Yearly => "yearly billing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLANS;

    #[test]
    fn two_offers_per_plan() {
        let data = pricing_structured_data("TchaPBX", PLANS);
        assert_eq!(data["@type"], "Product");
        assert_eq!(data["name"], "TchaPBX");
        let offers = data["offers"].as_array().expect("offers array");
        assert_eq!(offers.len(), PLANS.len() * 2);
    }

    #[test]
    fn basic_offers_carry_both_prices() {
        let data = pricing_structured_data("TchaPBX", &PLANS[..1]);
        let offers = data["offers"].as_array().expect("offers array");
        assert_eq!(offers[0]["price"], "10");
        assert_eq!(offers[1]["price"], "8");
        assert_eq!(offers[1]["name"], "Basic (yearly billing)");
    }
}
