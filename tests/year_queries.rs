//! End-to-end checks: JSON text → dataset → statistics and chart series.

use approx::assert_relative_eq;

use cmip_precip_viewer::data::filter::series_for;
use cmip_precip_viewer::data::loader::parse_json;
use cmip_precip_viewer::data::model::{Month, PrecipDataset};
use cmip_precip_viewer::data::stats::{compute_year_stats, MISSING};

const SSP245_2050: [f64; 12] = [3.1, 2.0, 2.6, 1.1, 0.4, 0.1, 0.02, 0.03, 0.2, 0.7, 1.6, 1.5];

fn dataset() -> PrecipDataset {
    let text = r#"[
        {"model": "ssp2-45", "year": 2045,
         "mean_pr": {"jan": 2.0, "feb": 2.0, "mar": 2.0, "apr": 2.0, "may": 2.0, "jun": 2.0,
                     "jul": 2.0, "aug": 2.0, "sep": 2.0, "oct": 2.0, "nov": 2.0, "dec": 2.0}},
        {"model": "ssp2-45", "year": "2050",
         "mean_pr": {"jan": 3.1, "feb": 2.0, "mar": 2.6, "apr": 1.1, "may": 0.4, "jun": 0.1,
                     "jul": 0.02, "aug": 0.03, "sep": 0.2, "oct": 0.7, "nov": 1.6, "dec": 1.5}},
        {"model": "ssp2-45", "year": 2060,
         "mean_pr": {"jan": 4.0, "feb": 4.0, "mar": 4.0, "apr": 4.0, "may": 4.0, "jun": 4.0,
                     "jul": 4.0, "aug": 4.0, "sep": 4.0, "oct": 4.0, "nov": 4.0, "dec": 4.0}},
        {"model": "ssp1-26", "year": 2055,
         "mean_pr": {"jan": 1.0}}
    ]"#;
    PrecipDataset::from_records(parse_json(text).unwrap())
}

#[test]
fn series_returns_the_twelve_months_unchanged() {
    let ds = dataset();
    let series = series_for(&ds, "ssp2-45", 2050);

    assert_eq!(series.len(), 12);
    for ((mv, month), expected) in series.iter().zip(Month::ALL).zip(SSP245_2050) {
        assert_eq!(mv.month, month);
        assert_eq!(mv.value, expected);
    }
}

#[test]
fn stats_for_a_full_year() {
    let ds = dataset();
    let stats = compute_year_stats(&ds, "ssp2-45", 2050);

    let expected = SSP245_2050.iter().sum::<f64>() / 12.0;
    assert_relative_eq!(stats.avg, expected, epsilon = 1e-9);
    assert_eq!(stats.min.label(), "Jul");
    assert_eq!(stats.max.label(), "Jan");

    // Neighbours are this model's years, not the global list (2055 belongs to ssp1-26).
    assert_eq!(stats.prev_year, Some(2045));
    assert_eq!(stats.next_year, Some(2060));
    assert_relative_eq!(stats.prev_avg, 2.0);
    assert_relative_eq!(stats.next_avg, 4.0);
    assert_eq!(stats.prev_text(), "2045 (2.00)");
}

#[test]
fn partial_record_degrades_to_sentinels() {
    let ds = dataset();
    let stats = compute_year_stats(&ds, "ssp1-26", 2055);

    // Eleven months are missing and flatten to NaN.
    assert!(stats.avg.is_nan());
    assert_eq!(stats.prev_year, None);
    assert_eq!(stats.next_year, None);
    assert_eq!(stats.next_text(), MISSING);
}

#[test]
fn year_outside_the_model_list() {
    let ds = dataset();

    // 2055 is a global year, but ssp2-45 has no record for it.
    assert!(ds.years().all_years().contains(&2055));
    let stats = compute_year_stats(&ds, "ssp2-45", 2055);
    assert!(stats.avg.is_nan());
    assert_eq!(stats.min.label(), MISSING);
    assert_eq!(stats.prev_year, None);
    assert_eq!(stats.next_year, None);
    assert!(series_for(&ds, "ssp2-45", 2055).is_empty());
}

#[test]
fn model_years_are_a_subset_of_all_years() {
    let ds = dataset();
    let all = ds.years().all_years();
    assert_eq!(all, &[2045, 2050, 2055, 2060]);
    for model in ds.models() {
        assert!(ds
            .years()
            .years_for_model(model)
            .iter()
            .all(|y| all.contains(y)));
    }
}

#[test]
fn queries_are_repeatable() {
    let ds = dataset();
    for year in ds.years().all_years() {
        for model in ["ssp2-45", "ssp1-26", "unknown"] {
            let a = compute_year_stats(&ds, model, *year);
            let b = compute_year_stats(&ds, model, *year);
            assert_eq!(a.avg.to_bits(), b.avg.to_bits());
            assert_eq!(a.min.month, b.min.month);
            assert_eq!(a.max.month, b.max.month);
            assert_eq!(a.min.value.to_bits(), b.min.value.to_bits());
            assert_eq!(a.max.value.to_bits(), b.max.value.to_bits());
            assert_eq!((a.prev_year, a.next_year), (b.prev_year, b.next_year));

            let first = series_for(&ds, model, *year);
            let second = series_for(&ds, model, *year);
            assert_eq!(first.len(), second.len());
            for (x, y) in first.iter().zip(&second) {
                assert_eq!(x.month, y.month);
                assert_eq!(x.value.to_bits(), y.value.to_bits());
            }
        }
    }
}
