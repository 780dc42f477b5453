use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PrecipViewerApp {
    pub state: AppState,
}

impl PrecipViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PrecipViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Year slider ----
        egui::TopBottomPanel::top("year_slider").show(ctx, |ui| {
            panels::year_slider(ui, &mut self.state);
        });

        // ---- Central panel: two charts side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(views) = self.state.panel_views() else {
                ui.centered_and_justified(|ui| {
                    ui.heading("The dataset has no years  (File → Open…)");
                });
                return;
            };

            ui.columns(2, |columns| {
                for (id, (ui, view)) in columns.iter_mut().zip(&views).enumerate() {
                    panels::panel_header(ui, view);
                    panels::stats_card(ui, id, view);
                    ui.separator();
                    panels::season_legend(ui);
                    plot::month_chart(ui, id, view);
                }
            });
        });
    }
}
