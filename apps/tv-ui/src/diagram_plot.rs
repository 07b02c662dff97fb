//! Trace rendering and interaction capture for the diagram plot.
//!
//! egui_plot has no native log axis, so ph diagrams are drawn in log10
//! pressure space: trace y-values are transformed on the way in, axis labels
//! and captured viewport bounds are transformed back, and everything outside
//! this module stays in physical units.

use egui::{Color32, Stroke, Vec2};
use egui_plot::{Line, LineStyle as PlotLineStyle, Plot, PlotBounds, PlotPoints, Points, Polygon};
use tv_core::{AxisBounds, AxisConfig, AxisScale};
use tv_session::InteractionEvent;
use tv_traces::{LineStyle, Rgb, Rgba, Trace, TraceRole};

#[derive(Default)]
pub struct DiagramPlot {
    last_bounds: Option<PlotBounds>,
}

impl DiagramPlot {
    /// Render the traces; returns an interaction event when the user moved
    /// the viewport (zoom/pan) or requested a reset (double-click).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        traces: &[Trace],
        axis: &AxisConfig,
    ) -> Option<InteractionEvent> {
        let log_y = axis.y_scale == AxisScale::Log10;

        let mut plot = Plot::new("diagram")
            .x_axis_label(axis.x_label)
            .y_axis_label(axis.y_label);
        if log_y {
            plot = plot
                .y_axis_formatter(|mark, _range| format_decade(mark.value))
                .label_formatter(|name, point| {
                    let pressure = 10f64.powf(point.y);
                    if name.is_empty() {
                        format!("{:.1}, {:.2}", point.x, pressure)
                    } else {
                        format!("{name}\n{:.1}, {:.2}", point.x, pressure)
                    }
                });
        }

        let mut bounds = None;
        let response = plot.show(ui, |plot_ui| {
            for trace in traces {
                draw_trace(plot_ui, trace, log_y);
            }
            bounds = Some(plot_ui.plot_bounds());
        });

        let resp = &response.response;
        if resp.double_clicked() {
            // egui_plot restores auto-bounds on its own; tell the session to
            // drop the zoom window and refetch the default range.
            self.last_bounds = None;
            return Some(InteractionEvent::reset());
        }

        let bounds = bounds?;
        let moved = self.last_bounds.is_some_and(|previous| previous != bounds);
        let user_input = resp.dragged()
            || (resp.hovered()
                && ui.input(|i| i.smooth_scroll_delta != Vec2::ZERO || i.zoom_delta() != 1.0));
        self.last_bounds = Some(bounds);

        if !(moved && user_input) {
            return None;
        }

        let x = AxisBounds::new(bounds.min()[0], bounds.max()[0]).ok()?;
        let (y_min, y_max) = if log_y {
            (10f64.powf(bounds.min()[1]), 10f64.powf(bounds.max()[1]))
        } else {
            (bounds.min()[1], bounds.max()[1])
        };
        let y = AxisBounds::new(y_min, y_max).ok()?;
        Some(InteractionEvent::zoom(x, y))
    }
}

fn draw_trace(plot_ui: &mut egui_plot::PlotUi, trace: &Trace, log_y: bool) {
    let points: Vec<[f64; 2]> = trace
        .points
        .iter()
        .filter(|point| !log_y || point[1] > 0.0)
        .map(|point| {
            if log_y {
                [point[0], point[1].log10()]
            } else {
                *point
            }
        })
        .collect();

    let color = to_color32(trace.color);
    // With the legend disabled a plot-item name is hover-only, which is
    // exactly what family curves want.
    let display_name = trace.hover.as_deref().or(trace.name.as_deref());

    match trace.role {
        TraceRole::SaturationDome => {
            let mut polygon =
                Polygon::new(PlotPoints::from(points)).stroke(Stroke::new(1.5, color));
            if let Some(fill) = trace.fill {
                polygon = polygon.fill_color(to_color32_alpha(fill));
            }
            if let Some(name) = display_name {
                polygon = polygon.name(name);
            }
            plot_ui.polygon(polygon);
        }
        TraceRole::CriticalPoint => {
            let mut marker = Points::new(PlotPoints::from(points))
                .radius(4.0)
                .color(color);
            if let Some(name) = display_name {
                marker = marker.name(name);
            }
            plot_ui.points(marker);
        }
        TraceRole::FamilyCurve | TraceRole::QualityLine => {
            let mut line = Line::new(PlotPoints::from(points))
                .color(color)
                .style(to_plot_style(trace.line));
            if let Some(name) = display_name {
                line = line.name(name);
            }
            plot_ui.line(line);
        }
    }
}

fn to_plot_style(style: LineStyle) -> PlotLineStyle {
    match style {
        LineStyle::Solid => PlotLineStyle::Solid,
        LineStyle::Dotted => PlotLineStyle::Dotted { spacing: 4.0 },
        LineStyle::Dashed => PlotLineStyle::Dashed { length: 8.0 },
    }
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_color32_alpha(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn format_decade(log_value: f64) -> String {
    let value = 10f64.powf(log_value);
    if value >= 10.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
