use super::model::{Month, Observation, PrecipDataset};

/// Shown wherever a value or label is unavailable.
pub const MISSING: &str = "—";

// ---------------------------------------------------------------------------
// YearStats – summary card for one (model, year)
// ---------------------------------------------------------------------------

/// The driest or wettest month of a year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    /// `None` when the year has no observations.
    pub month: Option<Month>,
    pub value: f64,
}

impl Extreme {
    const NONE: Extreme = Extreme {
        month: None,
        value: f64::NAN,
    };

    fn of(obs: &Observation) -> Self {
        Extreme {
            month: Some(obs.month),
            value: obs.value,
        }
    }

    /// Month label, or the missing sentinel.
    pub fn label(&self) -> &'static str {
        self.month.map(Month::label).unwrap_or(MISSING)
    }
}

/// Aggregate and comparative statistics for one model and year.
///
/// Numeric fields are `NaN` when there is nothing to aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct YearStats {
    pub year: i32,
    pub avg: f64,
    pub min: Extreme,
    pub max: Extreme,
    pub prev_year: Option<i32>,
    pub next_year: Option<i32>,
    pub prev_avg: f64,
    pub next_avg: f64,
}

impl YearStats {
    fn empty(year: i32) -> Self {
        YearStats {
            year,
            avg: f64::NAN,
            min: Extreme::NONE,
            max: Extreme::NONE,
            prev_year: None,
            next_year: None,
            prev_avg: f64::NAN,
            next_avg: f64::NAN,
        }
    }

    /// `"2049 (3.12)"`, or the missing sentinel when there is no previous year.
    pub fn prev_text(&self) -> String {
        neighbour_text(self.prev_year, self.prev_avg)
    }

    pub fn next_text(&self) -> String {
        neighbour_text(self.next_year, self.next_avg)
    }
}

/// Arithmetic mean; `NaN` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

fn year_mean(dataset: &PrecipDataset, model: &str, year: i32) -> f64 {
    mean(dataset.rows_for(model, year).map(|o| o.value))
}

/// Compute the statistics card for `model` in `year`.
///
/// Ties are broken by scan order: the minimum keeps the earliest month
/// among equals, the maximum keeps the latest.
pub fn compute_year_stats(dataset: &PrecipDataset, model: &str, year: i32) -> YearStats {
    let curr: Vec<&Observation> = dataset.rows_for(model, year).collect();

    let Some((first, rest)) = curr.split_first() else {
        log::debug!("no observations for model '{model}' year {year}");
        return YearStats::empty(year);
    };

    let avg = mean(curr.iter().map(|o| o.value));

    let min = rest
        .iter()
        .copied()
        .fold(*first, |a, b| if a.value <= b.value { a } else { b });
    let max = rest
        .iter()
        .copied()
        .fold(*first, |a, b| if a.value >= b.value { a } else { b });

    let list = dataset.years().years_for_model(model);
    let (prev_year, next_year) = match list.iter().position(|&y| y == year) {
        Some(idx) => (
            idx.checked_sub(1).map(|i| list[i]),
            list.get(idx + 1).copied(),
        ),
        None => {
            log::debug!("year {year} is not indexed for model '{model}'");
            (None, None)
        }
    };

    YearStats {
        year,
        avg,
        min: Extreme::of(min),
        max: Extreme::of(max),
        prev_year,
        next_year,
        prev_avg: prev_year.map_or(f64::NAN, |y| year_mean(dataset, model, y)),
        next_avg: next_year.map_or(f64::NAN, |y| year_mean(dataset, model, y)),
    }
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Two decimals, or the missing sentinel for non-finite values.
pub fn format_value(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        MISSING.to_string()
    }
}

fn neighbour_text(year: Option<i32>, avg: f64) -> String {
    match year {
        Some(y) => format!("{y} ({})", format_value(avg)),
        None => MISSING.to_string(),
    }
}
