use std::collections::BTreeMap;

use super::years::YearIndex;

// ---------------------------------------------------------------------------
// Month – the twelve fixed labels, always iterated jan..dec
// ---------------------------------------------------------------------------

/// One of the twelve calendar months used as keys in `mean_pr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order. Every scan over monthly data goes
    /// through this array so min/max tie-breaks stay reproducible.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Lowercase key as it appears in the input file (`"jan"`).
    pub fn key(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// Capitalised display label (`"Jan"`).
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Zero-based position in the calendar (jan = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn season(self) -> Season {
        match self {
            Month::Nov | Month::Dec | Month::Jan | Month::Feb | Month::Mar => Season::Wet,
            _ => Season::Dry,
        }
    }
}

/// California rainy season classification of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Wet,
    Dry,
}

impl Season {
    pub fn legend_label(self) -> &'static str {
        match self {
            Season::Wet => "Wet months",
            Season::Dry => "Dry months",
        }
    }
}

// ---------------------------------------------------------------------------
// PrecipRecord – one raw row of the input file
// ---------------------------------------------------------------------------

/// One model/year record as read from disk, before flattening.
///
/// Months absent from `mean_pr` are not an error; they flatten to `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipRecord {
    pub model: String,
    pub year: i32,
    pub mean_pr: BTreeMap<Month, f64>,
}

// ---------------------------------------------------------------------------
// Observation – one (model, year, month, value) point
// ---------------------------------------------------------------------------

/// A single monthly precipitation rate (mm/day) for one model and year.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub model: String,
    pub year: i32,
    pub month: Month,
    pub value: f64,
}

/// Cross every record with the twelve months, in record order then
/// calendar order.
pub fn flatten(records: &[PrecipRecord]) -> Vec<Observation> {
    records
        .iter()
        .flat_map(|rec| {
            Month::ALL.into_iter().map(move |month| Observation {
                model: rec.model.clone(),
                year: rec.year,
                month,
                value: rec.mean_pr.get(&month).copied().unwrap_or(f64::NAN),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// PrecipDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable, fully indexed dataset every query runs against.
#[derive(Debug, Clone)]
pub struct PrecipDataset {
    observations: Vec<Observation>,
    index: YearIndex,
    record_count: usize,
}

impl PrecipDataset {
    /// Flatten the records and build the year index.
    pub fn from_records(records: Vec<PrecipRecord>) -> Self {
        let mut seen: BTreeMap<(&str, i32), usize> = BTreeMap::new();
        for rec in &records {
            *seen.entry((rec.model.as_str(), rec.year)).or_default() += 1;
        }
        for ((model, year), count) in seen.iter().filter(|(_, c)| **c > 1) {
            // Both copies stay in the dataset and are averaged together.
            log::warn!("{count} records for model '{model}' year {year}");
        }

        let observations = flatten(&records);
        let index = YearIndex::build(&observations);
        PrecipDataset {
            observations,
            index,
            record_count: records.len(),
        }
    }

    /// Observations for one (model, year), in stored order.
    pub fn rows_for<'a>(
        &'a self,
        model: &'a str,
        year: i32,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations
            .iter()
            .filter(move |o| o.model == model && o.year == year)
    }

    pub fn years(&self) -> &YearIndex {
        &self.index
    }

    /// Distinct model identifiers, sorted.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.index.models()
    }

    /// Number of raw records the dataset was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
