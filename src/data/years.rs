use std::collections::{BTreeMap, BTreeSet};

use super::model::Observation;

// ---------------------------------------------------------------------------
// YearIndex – distinct years, globally and per model
// ---------------------------------------------------------------------------

/// Sorted distinct years present in the dataset.
///
/// Both lists are strictly ascending and every per-model list is a subset
/// of the global one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearIndex {
    all: Vec<i32>,
    by_model: BTreeMap<String, Vec<i32>>,
}

impl YearIndex {
    pub fn build(observations: &[Observation]) -> Self {
        let mut all: BTreeSet<i32> = BTreeSet::new();
        let mut by_model: BTreeMap<String, BTreeSet<i32>> = BTreeMap::new();

        for obs in observations {
            all.insert(obs.year);
            by_model
                .entry(obs.model.clone())
                .or_default()
                .insert(obs.year);
        }

        YearIndex {
            all: all.into_iter().collect(),
            by_model: by_model
                .into_iter()
                .map(|(model, years)| (model, years.into_iter().collect()))
                .collect(),
        }
    }

    /// Every distinct year across all models, ascending.
    pub fn all_years(&self) -> &[i32] {
        &self.all
    }

    /// Distinct years for `model`, ascending.
    ///
    /// An unknown model gets the global list so neighbour lookups never
    /// run against an empty list.
    pub fn years_for_model(&self, model: &str) -> &[i32] {
        self.by_model
            .get(model)
            .map(Vec::as_slice)
            .unwrap_or(self.all.as_slice())
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.by_model.contains_key(model)
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.by_model.keys().map(String::as_str)
    }

    /// Year at slider position `idx`, clamped into range.
    pub fn year_at(&self, idx: usize) -> Option<i32> {
        let last = self.all.len().checked_sub(1)?;
        Some(self.all[idx.min(last)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Month;

    fn obs(model: &str, year: i32) -> Observation {
        Observation {
            model: model.to_string(),
            year,
            month: Month::Jan,
            value: 1.0,
        }
    }

    fn sample() -> YearIndex {
        YearIndex::build(&[
            obs("ssp2-45", 2030),
            obs("ssp2-45", 2020),
            obs("ssp2-45", 2025),
            obs("ssp2-45", 2025),
            obs("ssp1-26", 2040),
            obs("ssp1-26", 2020),
        ])
    }

    #[test]
    fn all_years_sorted_and_distinct() {
        assert_eq!(sample().all_years(), &[2020, 2025, 2030, 2040]);
    }

    #[test]
    fn per_model_years_are_subset_of_all() {
        let idx = sample();
        assert_eq!(idx.years_for_model("ssp2-45"), &[2020, 2025, 2030]);
        assert_eq!(idx.years_for_model("ssp1-26"), &[2020, 2040]);
        for model in idx.models() {
            let years = idx.years_for_model(model);
            assert!(years.windows(2).all(|w| w[0] < w[1]));
            assert!(years.iter().all(|y| idx.all_years().contains(y)));
        }
    }

    #[test]
    fn unknown_model_falls_back_to_all_years() {
        let idx = sample();
        assert!(!idx.has_model("SSP2-45"));
        assert_eq!(idx.years_for_model("SSP2-45"), idx.all_years());
    }

    #[test]
    fn year_at_clamps_slider_position() {
        let idx = sample();
        assert_eq!(idx.year_at(0), Some(2020));
        assert_eq!(idx.year_at(3), Some(2040));
        assert_eq!(idx.year_at(99), Some(2040));
        assert_eq!(YearIndex::default().year_at(0), None);
    }
}
