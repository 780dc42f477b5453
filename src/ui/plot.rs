use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use cmip_precip_viewer::data::filter::y_axis_max;
use cmip_precip_viewer::data::model::Month;

use crate::color::{bar_color, season_band};
use crate::state::PanelView;

// ---------------------------------------------------------------------------
// Monthly bar chart (one per panel)
// ---------------------------------------------------------------------------

/// Bar width relative to the month slot.
const BAR_WIDTH: f64 = 0.82;

fn month_tick(mark: GridMark) -> String {
    let i = mark.value.round();
    if (mark.value - i).abs() > 1e-6 || !(0.0..12.0).contains(&i) {
        return String::new();
    }
    Month::ALL[i as usize].label().to_string()
}

/// Render the bar chart for one panel, with wet/dry bands behind the bars.
pub fn month_chart(ui: &mut Ui, id: usize, view: &PanelView) {
    let y_max = y_axis_max(&view.series);

    let bands: Vec<Bar> = Month::ALL
        .into_iter()
        .map(|m| {
            Bar::new(m.index() as f64, y_max)
                .width(1.0)
                .fill(season_band(m.season()))
                .stroke(Stroke::NONE)
                .name(m.season().legend_label())
        })
        .collect();

    // Months with a non-finite value are left without a bar.
    let bars: Vec<Bar> = view
        .series
        .iter()
        .filter(|mv| mv.value.is_finite())
        .map(|mv| {
            Bar::new(mv.month.index() as f64, mv.value)
                .width(BAR_WIDTH)
                .fill(bar_color())
                .name(format!("{} — {}", mv.month.key().to_uppercase(), view.year))
        })
        .collect();

    Plot::new(("month_chart", id))
        .x_axis_label("Month")
        .y_axis_label("Avg Precipitation (mm/day)")
        .x_axis_formatter(|mark, _range| month_tick(mark))
        .include_x(-0.5)
        .include_x(11.5)
        .include_y(0.0)
        .include_y(y_max)
        .show_grid([false, true])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bands)
                    .element_formatter(Box::new(|bar: &Bar, _: &BarChart| bar.name.clone())),
            );
            plot_ui.bar_chart(BarChart::new(bars).element_formatter(Box::new(
                |bar: &Bar, _: &BarChart| format!("{}\n{:.2} mm/day", bar.name, bar.value),
            )));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(value: f64) -> GridMark {
        GridMark {
            value,
            step_size: 1.0,
        }
    }

    #[test]
    fn ticks_label_whole_month_positions_only() {
        assert_eq!(month_tick(mark(0.0)), "Jan");
        assert_eq!(month_tick(mark(11.0)), "Dec");
        assert_eq!(month_tick(mark(2.5)), "");
        assert_eq!(month_tick(mark(-1.0)), "");
        assert_eq!(month_tick(mark(12.0)), "");
    }
}
