use dioxus::prelude::*;

use crate::core::ResponseEntry;
use crate::t;

#[component]
pub fn ReportRecommendations(responses: Vec<ResponseEntry>) -> Element {
    let answer_label = t!("report-your-answer");

    rsx! {
        section { class: "report-card report-recommendations",
            h2 { class: "report-card__title", {t!("report-recommendations-title")} }
            ol { class: "report-recommendations__items",
                for (index, response) in responses.into_iter().enumerate() {
                    li { key: "{index}", class: "report-recommendations__item",
                        p { class: "report-recommendations__question",
                            "{index + 1}. {response.question}"
                        }
                        p { class: "report-recommendations__answer",
                            "{answer_label} {response.choice}"
                        }
                        p { class: "report-recommendations__advice", "{response.advice}" }
                    }
                }
            }
        }
    }
}
