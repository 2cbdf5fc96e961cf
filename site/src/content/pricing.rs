//! Pricing plans.

use super::{PlanPrice, PlanSpecs, PricingPlan};
use crate::style::Accent;

/// Plans in display order. Yearly prices are roughly 20% below monthly.
pub static PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        description: "Perfect for Startups",
        price: PlanPrice {
            monthly: 10,
            yearly: 8,
            promo: 2,
            promo_text: "First month only $2",
        },
        specs: PlanSpecs {
            cpu: "1 Core CPU",
            ram: "2 GB RAM",
            storage: "20 GB Storage",
        },
        features: &[
            "12 Extensions",
            "Unlimited Concurrent Calls",
            "2 VitXi Clients",
            "Basic Support",
        ],
        highlight: false,
        label: None,
        accent: Accent::Cyan,
    },
    PricingPlan {
        name: "Enterprise Cloud",
        description: "For growing businesses",
        price: PlanPrice {
            monthly: 120,
            yearly: 96,
            promo: 9,
            promo_text: "First month only $9",
        },
        specs: PlanSpecs {
            cpu: "8 Cores CPU",
            ram: "8 GB RAM",
            storage: "200 GB Storage",
        },
        features: &[
            "Unlimited Extensions",
            "50 VitXi Clients",
            "Switchboard Included",
            "Billing Module",
            "Call Recording",
            "Priority Support",
        ],
        highlight: false,
        label: Some("Premium"),
        accent: Accent::Purple,
    },
    PricingPlan {
        name: "Call Center Cloud",
        description: "Full-featured call center",
        price: PlanPrice {
            monthly: 240,
            yearly: 192,
            promo: 9,
            promo_text: "First month only $9",
        },
        specs: PlanSpecs {
            cpu: "10 Cores CPU",
            ram: "16 GB RAM",
            storage: "500 GB Storage",
        },
        features: &[
            "Unlimited Extensions",
            "Full Sonata Suite",
            "Auto Dialer",
            "Advanced Statistics",
            "Billing System",
            "Call Recording",
            "Real-time Monitoring",
            "24/7 Premium Support",
        ],
        highlight: true,
        label: Some("Best Seller"),
        accent: Accent::Cyan,
    },
    PricingPlan {
        name: "Multi-Tenant Cloud",
        description: "For service providers",
        price: PlanPrice {
            monthly: 300,
            yearly: 240,
            promo: 9,
            promo_text: "First month only $9",
        },
        specs: PlanSpecs {
            cpu: "12 Cores CPU",
            ram: "32 GB RAM",
            storage: "500 GB Storage",
        },
        features: &[
            "Multi-Tenant Architecture",
            "VitXi WebRTC",
            "Full Suite Access",
            "White-label Ready",
            "API Access",
            "Dedicated Support",
        ],
        highlight: false,
        label: Some("Enterprise"),
        accent: Accent::Purple,
    },
];
