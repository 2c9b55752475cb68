use dioxus::prelude::*;

use crate::core::{format, Category, ScoreMap};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub category: Category,
    pub score: i32,
    pub percent: String,
}

pub fn score_rows(scores: &ScoreMap) -> Vec<ScoreRow> {
    scores
        .iter()
        .map(|(category, score)| ScoreRow {
            category,
            score,
            percent: format::format_percent(score),
        })
        .collect()
}

#[component]
pub fn ReportScoreList(scores: ScoreMap) -> Element {
    let rows = score_rows(&scores);

    rsx! {
        ul { class: "report-scores",
            for row in rows {
                li {
                    key: "{row.category.id()}",
                    class: "report-scores__row",
                    title: row.category.tooltip(),
                    div { class: "report-scores__category",
                        span {
                            class: "report-scores__icon report-scores__icon--{row.category.id()}",
                            aria_hidden: "true",
                            "{row.category.icon()}"
                        }
                        span { class: "report-scores__name", "{row.category.name()}" }
                    }
                    span { class: "report-scores__value", "{row.percent}" }
                }
            }
        }
    }
}
