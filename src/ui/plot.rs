use eframe::egui::{self, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::chart::{self, ChartSpec, FigureSpec, Layout, Scale};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Figure (central panel)
// ---------------------------------------------------------------------------

/// Render both charts of `figure` into the available space.
pub fn figure(ui: &mut Ui, figure: &FigureSpec, dataset: &Dataset) {
    match figure.layout {
        Layout::SideBySide => {
            ui.columns(figure.charts.len(), |columns: &mut [Ui]| {
                for (column, spec) in columns.iter_mut().zip(&figure.charts) {
                    chart_panel(column, spec, dataset);
                }
            });
        }
        Layout::Stacked => {
            let rows = figure.charts.len() as f32;
            let gap = ui.spacing().item_spacing.y;
            let row_height = ((ui.available_height() - gap * (rows - 1.0)) / rows).max(0.0);
            for spec in &figure.charts {
                let size = egui::vec2(ui.available_width(), row_height);
                ui.allocate_ui(size, |ui: &mut Ui| chart_panel(ui, spec, dataset));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Single chart
// ---------------------------------------------------------------------------

fn chart_panel(ui: &mut Ui, spec: &ChartSpec, dataset: &Dataset) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let color = spec.color.color32();
    let points = spec.points(dataset);
    let segments = spec.segments(dataset);

    let x_scale = spec.x.scale;
    let y_scale = spec.y.scale;
    let x_label = spec.x.label.clone();
    let y_label = spec.y.label.clone();

    let mut plot = Plot::new(spec.id)
        .x_axis_label(&spec.x.label)
        .y_axis_label(&spec.y.label)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |_name, point: &PlotPoint| {
            format!(
                "{x_label}: {}\n{y_label}: {}",
                chart::format_value(x_scale.from_plot(point.x)),
                chart::format_value(y_scale.from_plot(point.y)),
            )
        });

    if x_scale == Scale::Log {
        plot = plot.x_axis_formatter(|mark, range| {
            chart::log_tick_label(mark.value, range.end() - range.start())
        });
    }
    if y_scale == Scale::Log {
        plot = plot.y_axis_formatter(|mark, range| {
            chart::log_tick_label(mark.value, range.end() - range.start())
        });
    }

    plot.show(ui, |plot_ui| {
        for segment in &segments {
            let line_points: PlotPoints = segment.iter().copied().collect();
            plot_ui.line(
                Line::new(line_points)
                    .name(&spec.y.label)
                    .color(color)
                    .width(1.5),
            );
        }

        let markers: PlotPoints = points.iter().copied().collect();
        plot_ui.points(
            Points::new(markers)
                .name(&spec.y.label)
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(3.5)
                .color(color),
        );
    });
}
