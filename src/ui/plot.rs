use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::chart::figure::{CategoryBar, Figure, HistogramBin};
use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current figure in the central panel.
pub fn chart_plot(ui: &mut Ui, state: &AppState) {
    let figure = match &state.figure {
        Some(figure) => figure,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.table.is_some() {
                    ui.heading("Pick a graph type and axis columns, then press Visualize");
                } else {
                    ui.heading("Open a file to get started  (File → Open…)");
                }
            });
            return;
        }
    };

    match figure {
        Figure::Scatter {
            x_label,
            y_label,
            points,
        } => scatter_plot(ui, x_label, y_label, points),
        Figure::Bar {
            x_label,
            y_label,
            bars,
        } => bar_plot(ui, x_label, y_label, bars),
        Figure::Histogram {
            x_label,
            bin_width,
            bins,
            density,
        } => histogram_plot(ui, x_label, *bin_width, bins, density),
    }
}

fn scatter_plot(ui: &mut Ui, x_label: &str, y_label: &str, points: &[[f64; 2]]) {
    let plot_points: PlotPoints = points.iter().copied().collect();

    Plot::new("scatter_plot")
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(plot_points)
                    .color(Color32::LIGHT_BLUE)
                    .shape(MarkerShape::Circle)
                    .radius(2.5)
                    .filled(true),
            );
        });
}

fn bar_plot(ui: &mut Ui, x_label: &str, y_label: &str, bars: &[CategoryBar]) {
    let palette = generate_palette(bars.len());
    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(i as f64, bar.mean)
                .name(&bar.label)
                .width(0.7)
                .fill(palette.get(i).copied().unwrap_or(Color32::LIGHT_BLUE))
        })
        .collect();
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

    Plot::new("bar_plot")
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        // Integer positions carry the category names.
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars));
        });
}

fn histogram_plot(
    ui: &mut Ui,
    x_label: &str,
    bin_width: f64,
    bins: &[HistogramBin],
    density: &[[f64; 2]],
) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center, bin.count as f64)
                .width(bin_width * 0.95)
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("count"));
            if !density.is_empty() {
                let curve: PlotPoints = density.iter().copied().collect();
                plot_ui.line(
                    Line::new(curve)
                        .name("density")
                        .color(Color32::from_rgb(220, 80, 80))
                        .width(1.5),
                );
            }
        });
}
