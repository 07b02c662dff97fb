use std::time::{Duration, Instant};

use tv_core::{AxisConfig, DiagramType, Fluid};
use tv_data::DiagramDataClient;
use tv_session::{DiagramSession, InteractionDebouncer, InteractionEvent, ViewPhase};
use tv_traces::{Trace, build_traces};

use crate::diagram_plot::DiagramPlot;
use crate::fetch_worker::FetchWorker;
use crate::fluid_picker::SearchableFluidPicker;

pub struct ThermoviewApp {
    session: DiagramSession,
    worker: FetchWorker,
    picker: SearchableFluidPicker,
    plot: DiagramPlot,
    debouncer: InteractionDebouncer,
    traces: Vec<Trace>,
    axis: AxisConfig,
}

impl ThermoviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, base_url: String) -> Self {
        let worker = FetchWorker::start(DiagramDataClient::new(base_url));
        let (session, initial) = DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        worker.submit(initial);

        let axis = session.selection().diagram.axis_config();
        Self {
            session,
            worker,
            picker: SearchableFluidPicker::default(),
            plot: DiagramPlot::default(),
            debouncer: InteractionDebouncer::default(),
            traces: Vec::new(),
            axis,
        }
    }

    fn rebuild_traces(&mut self) {
        self.axis = self.session.selection().diagram.axis_config();
        self.traces = match self.session.view() {
            ViewPhase::Ready(dataset) => build_traces(dataset),
            _ => Vec::new(),
        };
    }

    fn handle_interaction(&mut self, event: InteractionEvent, now: Instant) {
        if event.is_reset() {
            // Resets skip the debouncer: the user expects them immediately.
            self.debouncer = InteractionDebouncer::default();
            if let Some(request) = self.session.on_interaction(event) {
                self.worker.submit(request);
            }
        } else {
            self.debouncer.push(event, now);
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Fluid:");
            let mut fluid = self.session.selection().fluid;
            if self.picker.show(ui, "fluid_picker", &mut fluid) {
                if let Some(request) = self.session.set_fluid(fluid) {
                    self.rebuild_traces();
                    self.worker.submit(request);
                }
            }

            ui.separator();

            ui.label("Diagram:");
            let mut diagram = self.session.selection().diagram;
            let mut changed = false;
            changed |= ui
                .selectable_value(&mut diagram, DiagramType::PressureEnthalpy, "p–h")
                .changed();
            changed |= ui
                .selectable_value(&mut diagram, DiagramType::TemperatureEntropy, "T–s")
                .changed();
            if changed {
                if let Some(request) = self.session.set_diagram(diagram) {
                    self.rebuild_traces();
                    self.worker.submit(request);
                }
            }

            if self.session.in_flight() {
                ui.separator();
                ui.spinner();
            }
        });
    }

    fn show_diagram(&mut self, ui: &mut egui::Ui, now: Instant) {
        let selection = *self.session.selection();
        ui.heading(format!(
            "{} diagram for {}",
            selection.diagram.wire_name().to_uppercase(),
            selection.fluid.display_name()
        ));
        ui.separator();

        match self.session.view() {
            ViewPhase::Loading => {
                ui.label("Loading…");
            }
            ViewPhase::Unavailable(message) => {
                let message = message.clone();
                ui.colored_label(egui::Color32::RED, format!("Data unavailable: {message}"));
                if ui.button("Retry").clicked() {
                    self.handle_interaction(InteractionEvent::reset(), now);
                }
            }
            ViewPhase::Ready(_) => {
                let axis = self.axis.clone();
                if let Some(event) = self.plot.show(ui, &self.traces, &axis) {
                    self.handle_interaction(event, now);
                }
            }
        }
    }
}

impl eframe::App for ThermoviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        while let Some(tagged) = self.worker.try_recv() {
            if self.session.apply(tagged) {
                self.rebuild_traces();
            }
        }

        if let Some(event) = self.debouncer.poll(now) {
            if let Some(request) = self.session.on_interaction(event) {
                self.worker.submit(request);
            }
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_diagram(ui, now);
        });

        // Keep polling while work is pending; otherwise idle until input.
        if self.session.in_flight() || !self.debouncer.is_idle() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
