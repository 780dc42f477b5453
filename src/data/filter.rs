use super::model::{Month, PrecipDataset};

// ---------------------------------------------------------------------------
// Chart series: one bar per month for a (model, year)
// ---------------------------------------------------------------------------

/// A single bar of a monthly chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthValue {
    pub month: Month,
    pub value: f64,
}

/// Return the monthly series for `model` in `year`, in jan..dec order.
///
/// Months without an observation are omitted, so the series may be
/// shorter than twelve; an unknown model or year gives an empty series.
pub fn series_for(dataset: &PrecipDataset, model: &str, year: i32) -> Vec<MonthValue> {
    let mut series: Vec<MonthValue> = dataset
        .rows_for(model, year)
        .map(|o| MonthValue {
            month: o.month,
            value: o.value,
        })
        .collect();
    // Stable, so duplicate records keep their file order within a month.
    series.sort_by_key(|mv| mv.month);
    series
}

/// Upper bound of the y axis: at least 11 mm/day so panels stay comparable
/// across years, higher when a month exceeds it.
pub fn y_axis_max(series: &[MonthValue]) -> f64 {
    series
        .iter()
        .map(|mv| mv.value)
        .filter(|v| v.is_finite())
        .fold(11.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PrecipRecord;

    fn record(model: &str, year: i32, months: &[Month]) -> PrecipRecord {
        PrecipRecord {
            model: model.to_string(),
            year,
            mean_pr: months.iter().map(|&m| (m, m.index() as f64 + 0.5)).collect(),
        }
    }

    #[test]
    fn series_is_in_calendar_order() {
        let ds = PrecipDataset::from_records(vec![
            record("ssp1-26", 2050, &Month::ALL),
            record("ssp2-45", 2050, &Month::ALL),
        ]);
        let series = series_for(&ds, "ssp2-45", 2050);
        let months: Vec<Month> = series.iter().map(|mv| mv.month).collect();
        assert_eq!(months, Month::ALL.to_vec());
        assert_eq!(series[3].value, 3.5);
    }

    #[test]
    fn missing_months_keep_their_nan_bar() {
        // Flattening always emits twelve observations per record.
        let ds = PrecipDataset::from_records(vec![record("ssp2-45", 2050, &[Month::Jan])]);
        let series = series_for(&ds, "ssp2-45", 2050);
        assert_eq!(series.len(), 12);
        assert!(series[1].value.is_nan());
    }

    #[test]
    fn unknown_selection_is_empty() {
        let ds = PrecipDataset::from_records(vec![record("ssp2-45", 2050, &Month::ALL)]);
        assert!(series_for(&ds, "ssp2-45", 2051).is_empty());
        assert!(series_for(&ds, "SSP2-45", 2050).is_empty());
    }

    #[test]
    fn y_axis_has_a_floor_of_eleven() {
        let low = [MonthValue { month: Month::Jan, value: 4.0 }];
        assert_eq!(y_axis_max(&low), 11.0);

        let high = [
            MonthValue { month: Month::Jan, value: 14.5 },
            MonthValue { month: Month::Feb, value: f64::NAN },
        ];
        assert_eq!(y_axis_max(&high), 14.5);
        assert_eq!(y_axis_max(&[]), 11.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = PrecipDataset::from_records(vec![record("ssp2-45", 2050, &Month::ALL)]);
        assert_eq!(series_for(&ds, "ssp2-45", 2050), series_for(&ds, "ssp2-45", 2050));
    }
}
