//! Shared dialog shell used by the metric and video modals.

use leptos::ev;
use leptos::prelude::*;
use tchapbx_site::icons::ICON_CLOSE;
use tchapbx_site::state::DismissTrigger;
use web_sys::MouseEvent;

use super::icon::Icon;

/// Backdrop plus panel. Mount it only while the dialog is open; every
/// dismissal attempt is reported through `on_dismiss` and the owner's
/// `ModalState` decides whether it closes.
#[component]
pub fn Modal(
    on_dismiss: Callback<DismissTrigger>,
    /// Accessible title
    label: &'static str,
    #[prop(default = "modal-panel")]
    panel_class: &'static str,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_dismiss.run(DismissTrigger::EscapeKey);
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            class="modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label=label
            on:click=move |_| on_dismiss.run(DismissTrigger::Backdrop)
        >
            <div
                class=panel_class
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_dismiss.run(DismissTrigger::BodyClick);
                }
            >
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        on_dismiss.run(DismissTrigger::CloseButton);
                    }
                >
                    <Icon path=ICON_CLOSE class="icon-md" />
                </button>
                {children()}
            </div>
        </div>
    }
}
