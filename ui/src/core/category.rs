//! The fixed set of wellness dimensions a report scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four wellness dimensions, each scored 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physical,
    Mental,
    Diet,
    Lifestyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}` (expected physical, mental, diet or lifestyle)")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Canonical display order for score rows and chart bars.
    pub const ALL: [Category; 4] = [
        Category::Physical,
        Category::Mental,
        Category::Diet,
        Category::Lifestyle,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Physical => "physical",
            Category::Mental => "mental",
            Category::Diet => "diet",
            Category::Lifestyle => "lifestyle",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Physical => "Physical Fitness",
            Category::Mental => "Mental Wellness",
            Category::Diet => "Diet",
            Category::Lifestyle => "Daily Routine",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Category::Physical => "Track your physical activity and stamina.",
            Category::Mental => "Measure your mental clarity and stress levels.",
            Category::Diet => "Evaluate your daily nutritional habits.",
            Category::Lifestyle => "Analyze your daily routine and productivity.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Physical => "🏋",
            Category::Mental => "🧠",
            Category::Diet => "🥗",
            Category::Lifestyle => "🚲",
        }
    }

    /// Bar fill used by the comparison chart.
    pub fn color(self) -> &'static str {
        match self {
            Category::Physical => "#42a5f5",
            Category::Mental => "#ab47bc",
            Category::Diet => "#66bb6a",
            Category::Lifestyle => "#ffa726",
        }
    }

    pub fn default_score(self) -> i32 {
        match self {
            Category::Physical => 7,
            Category::Mental => 8,
            Category::Diet => 6,
            Category::Lifestyle => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == raw.trim())
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}
