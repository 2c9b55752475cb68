//! Caller-supplied score overrides and the resolved per-category map.
//!
//! Scores are passed through unvalidated: a caller handing in `12` or `-3`
//! gets exactly that value back from the resolved map. Only chart geometry
//! adapts to out-of-range values (see `report::chart`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::{Category, UnknownCategory};

/// Partial score mapping as handed to the report by its host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreOverrides(BTreeMap<Category, i32>);

impl ScoreOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, score: i32) -> Self {
        self.0.insert(category, score);
        self
    }

    /// Build overrides from string identifiers, failing on the first unknown one.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, UnknownCategory>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut overrides = Self::new();
        for (id, score) in pairs {
            overrides.0.insert(id.parse()?, score);
        }
        Ok(overrides)
    }

    pub fn get(&self, category: Category) -> Option<i32> {
        self.0.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Category, i32)> for ScoreOverrides {
    fn from_iter<T: IntoIterator<Item = (Category, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Score for every category after merging overrides over the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    pub physical: i32,
    pub mental: i32,
    pub diet: i32,
    pub lifestyle: i32,
}

impl ScoreMap {
    pub fn defaults() -> Self {
        Self::resolve(&ScoreOverrides::default())
    }

    pub fn resolve(overrides: &ScoreOverrides) -> Self {
        let pick = |category: Category| {
            overrides
                .get(category)
                .unwrap_or_else(|| category.default_score())
        };
        Self {
            physical: pick(Category::Physical),
            mental: pick(Category::Mental),
            diet: pick(Category::Diet),
            lifestyle: pick(Category::Lifestyle),
        }
    }

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Physical => self.physical,
            Category::Mental => self.mental,
            Category::Diet => self.diet,
            Category::Lifestyle => self.lifestyle,
        }
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, i32)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Default for ScoreMap {
    fn default() -> Self {
        Self::defaults()
    }
}
