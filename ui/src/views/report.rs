use dioxus::prelude::*;
use tracing::debug;

use crate::core::{format, resolve_responses, ReportHost, ResponseEntry, ScoreOverrides};
use crate::i18n;
use crate::report::{
    perform_effect, ConfirmRetakeDialog, ReportActions, ReportChart, ReportData, ReportEvent,
    ReportRecommendations, ReportScoreList, ReportState, Transition, ViewMode,
};
use crate::t;

/// Wellness assessment report: score chart or list, recommendations and actions.
///
/// Hosts may provide a [`ReportHost`] via context to route notices and printing;
/// otherwise the native window capabilities are used.
#[component]
pub fn Report(
    #[props(default)] initial_scores: ScoreOverrides,
    #[props(default)] responses: Vec<ResponseEntry>,
) -> Element {
    i18n::init();

    let host = try_use_context::<ReportHost>().unwrap_or_else(ReportHost::native);
    let mut state = use_signal(ReportState::default);

    // Recomputed in the same render that receives new overrides.
    let data = use_memo(use_reactive((&initial_scores,), |(overrides,)| {
        debug!(?overrides, "resolving report scores");
        ReportData::resolve(&overrides, format::today())
    }));

    let on_event = use_callback(move |event: ReportEvent| {
        debug!(?event, "report event");
        let Transition { state: next, effect } = state.peek().apply(event);
        state.set(next);
        if let Some(effect) = effect {
            perform_effect(effect, host.platform());
        }
    });

    let ReportData {
        scores,
        chart,
        date_label,
    } = data();
    let snapshot = state();
    let entries = resolve_responses(&responses).into_owned();
    let chart_active = snapshot.view == ViewMode::Chart;
    let scores_active = !chart_active;

    rsx! {
        article { class: "page report",
            header { class: "report__header",
                h1 { class: "report__title", {t!("report-title")} }
                p { class: "report__date", "{date_label}" }
            }

            div { class: "report__toggle", role: "group",
                button {
                    r#type: "button",
                    class: toggle_class(chart_active),
                    aria_pressed: "{chart_active}",
                    onclick: move |_| on_event.call(ReportEvent::ShowView(ViewMode::Chart)),
                    {t!("report-show-chart")}
                }
                button {
                    r#type: "button",
                    class: toggle_class(scores_active),
                    aria_pressed: "{scores_active}",
                    onclick: move |_| on_event.call(ReportEvent::ShowView(ViewMode::Scores)),
                    {t!("report-show-scores")}
                }
            }

            if chart_active {
                ReportChart { data: chart }
            } else {
                section { class: "report-card",
                    ReportScoreList { scores: scores }
                }
            }

            ReportRecommendations { responses: entries }
            ReportActions { on_event: on_event }
            ConfirmRetakeDialog { open: snapshot.dialog_open(), on_event: on_event }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "button report__toggle-button report__toggle-button--active"
    } else {
        "button report__toggle-button"
    }
}
