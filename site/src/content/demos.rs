//! Dashboard demo videos.

use super::DemoVideo;

// Embed ids are placeholders until the product videos are published.
/// Gallery cards in display order.
pub static DEMOS: &[DemoVideo] = &[
    DemoVideo {
        id: 1,
        title: "Real-time Call Monitoring",
        description: "Monitor all active calls with live MOS scores, duration, and participant details.",
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        embed_id: "dQw4w9WgXcQ",
        duration: "2:30",
        features: &["Live call status", "Quality metrics", "Agent performance"],
    },
    DemoVideo {
        id: 2,
        title: "Drag & Drop Call Flow Editor",
        description: "Build complex IVR trees visually without writing a single line of code.",
        thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop",
        embed_id: "dQw4w9WgXcQ",
        duration: "2:30",
        features: &["Visual builder", "Instant preview", "Version control"],
    },
    DemoVideo {
        id: 3,
        title: "Detailed Analytics Report",
        description: "Comprehensive reports on call volume, peak hours, and customer satisfaction.",
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        embed_id: "dQw4w9WgXcQ",
        duration: "2:30",
        features: &["Custom dashboards", "Export to PDF", "Scheduled reports"],
    },
];
