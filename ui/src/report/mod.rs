//! Report state and the pure transitions driving it.
//!
//! Every user interaction is a [`ReportEvent`]. [`ReportState::apply`] never
//! mutates in place: it returns the next state together with at most one
//! [`ReportEffect`] for the host platform to carry out. Everything derived
//! from the supplied scores lives in [`ReportData`] and is rebuilt from props.

use time::Date;

use crate::core::{format, ScoreMap, ScoreOverrides};

mod actions;
mod chart;
mod recommendations;
mod score_list;

pub use actions::{perform_effect, ConfirmRetakeDialog, ReportActions};
pub use chart::{BarShape, ChartData, ChartDataset, ChartLayout, ReportChart, ValueAxis};
pub use recommendations::ReportRecommendations;
pub use score_list::{score_rows, ReportScoreList, ScoreRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Chart,
    Scores,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Chart => ViewMode::Scores,
            ViewMode::Scores => ViewMode::Chart,
        }
    }
}

/// Visibility of the retake confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    ShowView(ViewMode),
    ToggleView,
    RequestRetake,
    ConfirmRetake,
    CancelRetake,
    Finish,
    SaveReport,
    PrintReport,
}

/// Work handed to the platform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEffect {
    Notify(Notice),
    Print,
}

/// User-facing acknowledgements the report can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Finished,
    Saved,
    RetakeRequested,
    PrintUnavailable,
}

impl Notice {
    pub fn message(self) -> String {
        match self {
            Notice::Finished => crate::t!("notice-finished"),
            Notice::Saved => crate::t!("notice-saved"),
            Notice::RetakeRequested => crate::t!("notice-retake"),
            Notice::PrintUnavailable => crate::t!("notice-print-unavailable"),
        }
    }
}

/// Score-derived part of the report. A pure function of the overrides and the date.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub scores: ScoreMap,
    pub chart: ChartData,
    pub date_label: String,
}

impl ReportData {
    pub fn resolve(overrides: &ScoreOverrides, today: Date) -> Self {
        let scores = ScoreMap::resolve(overrides);
        Self {
            chart: ChartData::from_scores(&scores),
            scores,
            date_label: format::format_report_date(today),
        }
    }
}

/// Interaction state: which view is showing and whether the retake prompt is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportState {
    pub view: ViewMode,
    pub dialog: DialogState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ReportState,
    pub effect: Option<ReportEffect>,
}

impl ReportState {
    pub fn dialog_open(&self) -> bool {
        self.dialog == DialogState::Shown
    }

    pub fn apply(&self, event: ReportEvent) -> Transition {
        let mut next = *self;
        let effect = match event {
            ReportEvent::ShowView(mode) => {
                next.view = mode;
                None
            }
            ReportEvent::ToggleView => {
                next.view = self.view.toggled();
                None
            }
            ReportEvent::RequestRetake => {
                next.dialog = DialogState::Shown;
                None
            }
            ReportEvent::CancelRetake => {
                next.dialog = DialogState::Hidden;
                None
            }
            ReportEvent::ConfirmRetake => {
                next.dialog = DialogState::Hidden;
                Some(ReportEffect::Notify(Notice::RetakeRequested))
            }
            ReportEvent::Finish => Some(ReportEffect::Notify(Notice::Finished)),
            ReportEvent::SaveReport => Some(ReportEffect::Notify(Notice::Saved)),
            ReportEvent::PrintReport => Some(ReportEffect::Print),
        };

        Transition {
            state: next,
            effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 16);

    fn fresh() -> ReportState {
        ReportState::default()
    }

    #[test]
    fn initial_state_shows_chart_with_dialog_hidden() {
        let state = fresh();
        assert_eq!(state.view, ViewMode::Chart);
        assert_eq!(state.dialog, DialogState::Hidden);
    }

    #[test]
    fn data_merges_overrides_and_formats_the_date() {
        let data = ReportData::resolve(&ScoreOverrides::new(), TODAY);
        assert_eq!(data.scores, ScoreMap::defaults());
        assert_eq!(data.date_label, "October 16, 2026");
        assert_eq!(data.chart, ChartData::from_scores(&data.scores));
    }

    #[test]
    fn data_follows_new_overrides() {
        let before = ReportData::resolve(&ScoreOverrides::new().with(Category::Diet, 1), TODAY);
        let after = ReportData::resolve(
            &ScoreOverrides::new().with(Category::Mental, 3),
            date!(2026 - 10 - 17),
        );
        assert_eq!(before.scores.diet, 1);
        assert_eq!(after.scores.diet, 6);
        assert_eq!(after.scores.mental, 3);
        assert_eq!(after.chart.datasets[0].data, [7, 3, 6, 5]);
        assert_eq!(after.date_label, "October 17, 2026");
    }

    #[test]
    fn toggling_view_flips_back_and_forth() {
        let toggled = fresh().apply(ReportEvent::ToggleView);
        assert_eq!(toggled.state.view, ViewMode::Scores);
        assert_eq!(toggled.effect, None);

        let back = toggled.state.apply(ReportEvent::ToggleView).state;
        assert_eq!(back, fresh());
    }

    #[test]
    fn show_view_selects_requested_mode() {
        let state = fresh();
        let scores = state.apply(ReportEvent::ShowView(ViewMode::Scores)).state;
        assert_eq!(scores.view, ViewMode::Scores);
        let again = scores.apply(ReportEvent::ShowView(ViewMode::Scores)).state;
        assert_eq!(again.view, ViewMode::Scores);
    }

    #[test]
    fn retake_request_opens_dialog_without_effect() {
        let transition = fresh().apply(ReportEvent::RequestRetake);
        assert!(transition.state.dialog_open());
        assert_eq!(transition.state.view, ViewMode::Chart);
        assert_eq!(transition.effect, None);
    }

    #[test]
    fn cancel_closes_dialog_silently() {
        let shown = fresh().apply(ReportEvent::RequestRetake).state;
        let transition = shown.apply(ReportEvent::CancelRetake);
        assert_eq!(transition.state.dialog, DialogState::Hidden);
        assert_eq!(transition.effect, None);
    }

    #[test]
    fn confirm_closes_dialog_and_notifies() {
        let shown = fresh().apply(ReportEvent::RequestRetake).state;
        let transition = shown.apply(ReportEvent::ConfirmRetake);
        assert_eq!(transition.state.dialog, DialogState::Hidden);
        assert_eq!(
            transition.effect,
            Some(ReportEffect::Notify(Notice::RetakeRequested))
        );
    }

    #[test]
    fn terminal_actions_never_open_dialog() {
        for (event, effect) in [
            (ReportEvent::Finish, ReportEffect::Notify(Notice::Finished)),
            (ReportEvent::SaveReport, ReportEffect::Notify(Notice::Saved)),
            (ReportEvent::PrintReport, ReportEffect::Print),
        ] {
            let transition = fresh().apply(event);
            assert_eq!(transition.state, fresh());
            assert_eq!(transition.effect, Some(effect));
        }
    }

    #[test]
    fn terminal_actions_keep_an_open_dialog_open() {
        let shown = fresh().apply(ReportEvent::RequestRetake).state;
        let after = shown.apply(ReportEvent::SaveReport).state;
        assert!(after.dialog_open());
    }
}
