use std::path::PathBuf;

use cmip_precip_viewer::data::filter::{series_for, MonthValue};
use cmip_precip_viewer::data::model::PrecipDataset;
use cmip_precip_viewer::data::stats::{compute_year_stats, YearStats};

use crate::config::ViewerConfig;

// ---------------------------------------------------------------------------
// Per-panel view data
// ---------------------------------------------------------------------------

/// Everything one chart panel draws for the selected year.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub label: String,
    pub year: i32,
    pub series: Vec<MonthValue>,
    pub stats: YearStats,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; replaced wholesale by File → Open.
    pub dataset: PrecipDataset,

    /// Where `dataset` was read from.
    pub source: PathBuf,

    pub config: ViewerConfig,

    /// Slider position in `dataset.years().all_years()`.
    pub year_idx: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: PrecipDataset, source: PathBuf, config: ViewerConfig) -> Self {
        let mut state = AppState {
            dataset,
            source,
            config,
            year_idx: 0,
            status_message: None,
        };
        state.check_tracked_models();
        state
    }

    /// Ingest a newly loaded dataset and rewind the slider.
    pub fn set_dataset(&mut self, dataset: PrecipDataset, source: PathBuf) {
        self.dataset = dataset;
        self.source = source;
        self.year_idx = 0;
        self.status_message = None;
        self.check_tracked_models();
    }

    fn check_tracked_models(&self) {
        for panel in &self.config.panels {
            if !self.dataset.years().has_model(&panel.model) {
                log::warn!(
                    "Model '{}' has no data in {}",
                    panel.model,
                    self.source.display()
                );
            }
        }
    }

    /// Highest slider position.
    pub fn slider_max(&self) -> usize {
        self.dataset.years().all_years().len().saturating_sub(1)
    }

    /// Year under the slider, `None` for an empty dataset.
    pub fn current_year(&self) -> Option<i32> {
        self.dataset.years().year_at(self.year_idx)
    }

    /// Series and statistics for both panels at the current year.
    ///
    /// Recomputed on every call.
    pub fn panel_views(&self) -> Option<[PanelView; 2]> {
        let year = self.current_year()?;
        Some(self.config.panels.clone().map(|panel| PanelView {
            series: series_for(&self.dataset, &panel.model, year),
            stats: compute_year_stats(&self.dataset, &panel.model, year),
            label: panel.label,
            year,
        }))
    }
}
