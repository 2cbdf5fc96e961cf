//! Inline outline icons.

use leptos::prelude::*;

/// Renders a 24×24 outline icon from path data in `tchapbx_site::icons`.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BOLT class="metric-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
    /// Stroke width
    #[prop(default = "2")]
    stroke_width: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width=stroke_width
                d=path
            ></path>
        </svg>
    }
}

/// Filled variant, for glyphs like the play triangle.
#[component]
pub fn SolidIcon(
    path: &'static str,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="currentColor"
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}
