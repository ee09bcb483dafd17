use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GrainPlotApp {
    pub state: AppState,
}

impl GrainPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GrainPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: layout switch ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure(ui, &self.state.figure, &self.state.dataset);
        });
    }
}
