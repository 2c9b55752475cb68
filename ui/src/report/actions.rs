use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::ReportPlatform;
use crate::t;

use super::{Notice, ReportEffect, ReportEvent};

/// Hand an effect to the host platform. Failures are logged, never raised.
pub fn perform_effect(effect: ReportEffect, platform: &dyn ReportPlatform) {
    let outcome = match effect {
        ReportEffect::Notify(notice) => {
            info!(?notice, "showing report notice");
            platform.notify(&notice.message())
        }
        ReportEffect::Print => {
            info!("opening print dialog");
            platform.print().or_else(|err| {
                warn!(%err, "print dialog unavailable");
                platform.notify(&Notice::PrintUnavailable.message())
            })
        }
    };

    if let Err(err) = outcome {
        warn!(%err, ?effect, "report effect could not be delivered");
    }
}

#[component]
pub fn ReportActions(on_event: EventHandler<ReportEvent>) -> Element {
    rsx! {
        div { class: "report-actions",
            div { class: "report-actions__group",
                button {
                    r#type: "button",
                    class: "button button--danger",
                    onclick: move |_| on_event.call(ReportEvent::RequestRetake),
                    {t!("report-retake")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_event.call(ReportEvent::Finish),
                    {t!("report-finish")}
                }
            }
            div { class: "report-actions__group",
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |_| on_event.call(ReportEvent::SaveReport),
                    {t!("report-save")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_event.call(ReportEvent::PrintReport),
                    {t!("report-print")}
                }
            }
        }
    }
}

#[component]
pub fn ConfirmRetakeDialog(open: bool, on_event: EventHandler<ReportEvent>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "report-dialog__backdrop",
            div {
                class: "report-dialog",
                role: "alertdialog",
                aria_modal: "true",
                p { class: "report-dialog__message", {t!("report-confirm-message")} }
                div { class: "report-dialog__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_event.call(ReportEvent::CancelRetake),
                        {t!("report-confirm-cancel")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| on_event.call(ReportEvent::ConfirmRetake),
                        {t!("report-confirm-accept")}
                    }
                }
            }
        }
    }
}
