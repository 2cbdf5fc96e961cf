//! Performance grid metrics and the live status bar.

use super::{Metric, MetricDetails, ServiceStatus};
use crate::icons::{
    ICON_BEAKER, ICON_BOLT, ICON_CHART_BAR, ICON_GLOBE, ICON_PHONE, ICON_SHIELD_CHECK,
};
use crate::style::Accent;

/// Metric cards in display order.
pub static METRICS: &[Metric] = &[
    Metric {
        value: "<30ms",
        label: "Global Latency",
        description: "P99 latency across all regions",
        icon: ICON_BOLT,
        accent: Accent::Cyan,
        details: Some(MetricDetails {
            headline: "Calls are anchored at the point of presence closest to the caller.",
            points: &[
                "Anycast SIP ingress in every region",
                "Media relayed over a private backbone",
                "Latency sampled every 10 seconds per POP",
            ],
        }),
    },
    Metric {
        value: ">4.2",
        label: "MOS Score",
        description: "Mean Opinion Score for call quality",
        icon: ICON_CHART_BAR,
        accent: Accent::Purple,
        details: Some(MetricDetails {
            headline: "Voice quality is scored on every call, not on a sample.",
            points: &[
                "Opus wideband with G.711 fallback",
                "Adaptive jitter buffers per leg",
                "Per-call MOS exposed through webhooks",
            ],
        }),
    },
    Metric {
        value: "15+",
        label: "Global POPs",
        description: "Edge locations worldwide",
        icon: ICON_GLOBE,
        accent: Accent::Cyan,
        details: Some(MetricDetails {
            headline: "Edge locations across North America, Europe and Asia-Pacific.",
            points: &[
                "Automatic nearest-POP routing",
                "Regional data residency options",
                "New regions added without client changes",
            ],
        }),
    },
    Metric {
        value: "99.99%",
        label: "Uptime SLA",
        description: "Carrier-grade reliability",
        icon: ICON_SHIELD_CHECK,
        accent: Accent::Green,
        details: Some(MetricDetails {
            headline: "Backed by a financially guaranteed service level agreement.",
            points: &[
                "Active-active clusters in every region",
                "Health checks every 5 seconds",
                "Service credits applied automatically",
            ],
        }),
    },
    Metric {
        value: "10M+",
        label: "Calls/Month",
        description: "Processed reliably at scale",
        icon: ICON_PHONE,
        accent: Accent::Purple,
        details: None,
    },
    Metric {
        value: "<0.1%",
        label: "Packet Loss",
        description: "Crystal clear audio quality",
        icon: ICON_BEAKER,
        accent: Accent::Cyan,
        details: Some(MetricDetails {
            headline: "Loss is measured end to end on the media path.",
            points: &[
                "Forward error correction on lossy links",
                "Redundant carrier interconnects",
                "Packet loss alerts in the dashboard",
            ],
        }),
    },
];

/// Services listed in the status bar under the grid.
pub static SERVICES: &[ServiceStatus] = &[
    ServiceStatus {
        name: "API",
        status: "Operational",
        operational: true,
    },
    ServiceStatus {
        name: "SIP Proxy",
        status: "Operational",
        operational: true,
    },
    ServiceStatus {
        name: "Media Servers",
        status: "Operational",
        operational: true,
    },
];
