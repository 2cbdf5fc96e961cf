//! SVG path data for the page's outline icons.
//!
//! All paths are drawn on a 24×24 viewBox with `stroke="currentColor"` and
//! no fill (Heroicons outline set). The landing app wraps them in its
//! `Icon` component.

/// Lightning bolt (latency)
pub const ICON_BOLT: &str = "M13 10V3L4 14h7v7l9-11h-7z";

/// Bar chart (MOS score)
pub const ICON_CHART_BAR: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";

/// Globe (points of presence, geo-redundancy)
pub const ICON_GLOBE: &str = "M3.055 11H5a2 2 0 012 2v1a2 2 0 002 2 2 2 0 012 2v2.945M8 3.935V5.5A2.5 2.5 0 0010.5 8h.5a2 2 0 012 2 2 2 0 104 0 2 2 0 012-2h1.064M15 20.488V18a2 2 0 012-2h3.064M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

/// Shield with check mark (uptime SLA)
pub const ICON_SHIELD_CHECK: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";

/// Phone handset (call volume)
pub const ICON_PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";

/// Beaker (packet loss)
pub const ICON_BEAKER: &str = "M19.428 15.428a2 2 0 00-1.022-.547l-2.387-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z";

/// Clock (zero downtime)
pub const ICON_CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";

/// Circular arrows (automatic failover)
pub const ICON_REFRESH: &str = "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15";

/// Document (documentation links)
pub const ICON_DOCUMENT: &str = "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z";

/// Arrow pointing right (call-to-action links)
pub const ICON_ARROW_RIGHT: &str = "M14 5l7 7m0 0l-7 7m7-7H3";

/// Check mark (feature bullets)
pub const ICON_CHECK: &str = "M5 13l4 4L19 7";

/// Cross (close buttons)
pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

/// Chip (CPU spec)
pub const ICON_CHIP: &str = "M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z";

/// Stacked cards (memory spec)
pub const ICON_COLLECTION: &str = "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10";

/// Database cylinder (storage spec)
pub const ICON_DATABASE: &str = "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4";

/// Filled play triangle (video thumbnails). Drawn with fill, not stroke.
pub const ICON_PLAY: &str = "M8 5v14l11-7z";
