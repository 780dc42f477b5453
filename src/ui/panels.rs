use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Slider, Ui};

use cmip_precip_viewer::data::loader::load_file;
use cmip_precip_viewer::data::model::Season;
use cmip_precip_viewer::data::stats::format_value;

use crate::color::season_swatch;
use crate::state::{AppState, PanelView};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}: {} records, {} years",
            state.source.display(),
            state.dataset.record_count(),
            state.dataset.years().all_years().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Year slider
// ---------------------------------------------------------------------------

pub fn year_slider(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Year");
        let max = state.slider_max();
        ui.add(
            Slider::new(&mut state.year_idx, 0..=max)
                .step_by(state.config.step as f64)
                .show_value(false),
        );
        match state.current_year() {
            Some(year) => ui.heading(year.to_string()),
            None => ui.label("No data"),
        };
    });
}

// ---------------------------------------------------------------------------
// Per-panel header, statistics card and legend
// ---------------------------------------------------------------------------

pub fn panel_header(ui: &mut Ui, view: &PanelView) {
    ui.heading(format!("Model {} — {}", view.label, view.year));
}

/// Render the statistics card for one panel.
pub fn stats_card(ui: &mut Ui, id: usize, view: &PanelView) {
    let stats = &view.stats;
    ui.strong(format!("{} — {}", view.label, stats.year));

    egui::Grid::new(("stats_card", id))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("Year Avg");
            ui.label(format!("{} mm/day", format_value(stats.avg)));
            ui.end_row();

            ui.label("Lowest");
            ui.label(format!("{}: {}", stats.min.label(), format_value(stats.min.value)));
            ui.end_row();

            ui.label("Highest");
            ui.label(format!("{}: {}", stats.max.label(), format_value(stats.max.value)));
            ui.end_row();

            ui.label("Prev Year");
            ui.label(stats.prev_text());
            ui.end_row();

            ui.label("Next Year");
            ui.label(stats.next_text());
            ui.end_row();
        });
}

pub fn season_legend(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        for season in [Season::Wet, Season::Dry] {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, season_swatch(season));
            ui.label(season.legend_label());
            ui.add_space(8.0);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open precipitation data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match load_file(&path).with_context(|| format!("opening {}", path.display())) {
        Ok(dataset) => state.set_dataset(dataset, path),
        Err(e) => {
            // The previous dataset stays on screen.
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
