use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{Month, PrecipDataset, PrecipRecord};

/// Failures that prevent a dataset from being loaded at all.
///
/// Individual malformed records never produce one of these; they are
/// skipped or degrade to `NaN` values instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("expected a top-level JSON array of records")]
    NotAnArray,

    #[error("reading CSV")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing the '{0}' column")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a precipitation dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "model": "ssp2-45", "year": 2050, "mean_pr": { "jan": 3.1, ... } }, ...]`
/// * `.csv`  – header `model,year,jan,feb,...,dec`
pub fn load_file(path: &Path) -> Result<PrecipDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json(&text)?
        }
        "csv" => {
            let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_csv(file)?
        }
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    let dataset = PrecipDataset::from_records(records);
    log::info!(
        "Loaded {} records ({} models, {} years) from {}",
        dataset.record_count(),
        dataset.models().count(),
        dataset.years().all_years().len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse the records-oriented JSON document.
///
/// `year` may be a number or a numeric string. Records that are not
/// objects or lack a usable `model`/`year` are skipped with a warning.
pub fn parse_json(text: &str) -> Result<Vec<PrecipRecord>, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match json_record(row) {
            Some(rec) => records.push(rec),
            None => log::warn!("Skipping JSON record {i}: no usable model/year"),
        }
    }
    Ok(records)
}

fn json_record(row: &JsonValue) -> Option<PrecipRecord> {
    let obj = row.as_object()?;
    let model = obj.get("model")?.as_str()?.to_string();
    let year = json_year(obj.get("year")?)?;
    let mean_pr = obj
        .get("mean_pr")
        .and_then(JsonValue::as_object)
        .map(json_months)
        .unwrap_or_default();

    Some(PrecipRecord {
        model,
        year,
        mean_pr,
    })
}

fn json_year(val: &JsonValue) -> Option<i32> {
    let year = match val {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        JsonValue::String(s) => text_year(s),
        _ => None,
    }?;
    i32::try_from(year).ok()
}

/// Numeric text, integral once parsed: `"2050"`, `"2050.0"`, `"2.05e3"`.
fn text_year(s: &str) -> Option<i64> {
    s.trim().parse::<f64>().ok().and_then(whole_number)
}

/// `2050.0` and `2.05e3` are years; `2050.5` is not.
fn whole_number(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// Known month keys only; a key that is present but not numeric maps to `NaN`.
fn json_months(obj: &Map<String, JsonValue>) -> BTreeMap<Month, f64> {
    obj.iter()
        .filter_map(|(key, v)| {
            let month = Month::from_key(key)?;
            let value = match v {
                JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                JsonValue::String(s) => s.trim().parse().unwrap_or(f64::NAN),
                _ => f64::NAN,
            };
            Some((month, value))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with `model`, `year` and any of the month keys.
/// Empty month cells are treated as absent; non-numeric cells as `NaN`.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<PrecipRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let model_idx = column("model")?;
    let year_idx = column("year")?;
    let month_cols: Vec<(Month, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| Month::from_key(h.trim()).map(|m| (m, i)))
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;

        let model = row.get(model_idx).unwrap_or("").trim();
        let year = row
            .get(year_idx)
            .and_then(text_year)
            .and_then(|y| i32::try_from(y).ok());
        let year = match year {
            Some(y) if !model.is_empty() => y,
            _ => {
                log::warn!("Skipping CSV row {row_no}: no usable model/year");
                continue;
            }
        };

        let mean_pr = month_cols
            .iter()
            .filter_map(|&(m, i)| {
                let cell = row.get(i)?.trim();
                if cell.is_empty() {
                    return None;
                }
                Some((m, cell.parse().unwrap_or(f64::NAN)))
            })
            .collect();

        records.push(PrecipRecord {
            model: model.to_string(),
            year,
            mean_pr,
        });
    }
    Ok(records)
}
