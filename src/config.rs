use std::path::PathBuf;

use clap::{ArgAction, Parser};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cmip-precip-viewer",
    about = "Compare monthly precipitation of two CMIP scenarios year by year"
)]
pub struct Args {
    /// Dataset to open at startup (.json or .csv).
    #[arg(default_value = "cmip_california_precip.json")]
    pub data: PathBuf,

    /// Model shown in the left panel.
    #[arg(long, default_value = "ssp2-45")]
    pub left_model: String,

    #[arg(long, default_value = "SSP2.45")]
    pub left_label: String,

    /// Model shown in the right panel.
    #[arg(long, default_value = "ssp1-26")]
    pub right_model: String,

    #[arg(long, default_value = "SSP1.26")]
    pub right_label: String,

    /// Slider step, in positions of the year list.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub step: u32,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            panels: [
                TrackedModel {
                    model: self.left_model.clone(),
                    label: self.left_label.clone(),
                },
                TrackedModel {
                    model: self.right_model.clone(),
                    label: self.right_label.clone(),
                },
            ],
            step: self.step as usize,
        }
    }
}

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// A model identifier as it appears in the data, plus its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedModel {
    pub model: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Left and right panel, in that order.
    pub panels: [TrackedModel; 2],
    pub step: usize,
}
