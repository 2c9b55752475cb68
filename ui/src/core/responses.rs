//! Question/answer/advice entries shown in the recommendations list.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub question: String,
    pub choice: String,
    pub advice: String,
}

impl ResponseEntry {
    pub fn new(
        question: impl Into<String>,
        choice: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            choice: choice.into(),
            advice: advice.into(),
        }
    }
}

/// Example entries rendered when the host supplies none.
pub fn fallback_responses() -> Vec<ResponseEntry> {
    vec![
        ResponseEntry::new(
            "How often do you exercise?",
            "3-4 times a week",
            "Keep up the good work! Consistency is key.",
        ),
        ResponseEntry::new(
            "How often do you experience stress?",
            "Frequently",
            "Practice mindfulness or yoga to reduce stress levels.",
        ),
        ResponseEntry::new(
            "Do you eat vegetables daily?",
            "Sometimes",
            "Increase your daily vegetable intake for better nutrition.",
        ),
    ]
}

pub fn resolve_responses(supplied: &[ResponseEntry]) -> Cow<'_, [ResponseEntry]> {
    if supplied.is_empty() {
        Cow::Owned(fallback_responses())
    } else {
        Cow::Borrowed(supplied)
    }
}
