use eframe::egui::{self, Color32, RichText, Ui};

use crate::chart::Layout;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: layout switch and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for layout in Layout::ALL {
            if ui
                .selectable_label(state.layout() == layout, layout.label())
                .clicked()
            {
                state.set_layout(layout);
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Title(
                    state.figure.window_title.clone(),
                ));
            }
        }

        ui.separator();

        ui.label(format!(
            "{} samples from {}",
            state.dataset.len(),
            state.source.display()
        ));

        let hidden: usize = state
            .figure
            .charts
            .iter()
            .map(|chart| chart.hidden_samples(&state.dataset))
            .max()
            .unwrap_or(0);
        if hidden > 0 {
            ui.separator();
            ui.label(
                RichText::new(format!("{hidden} non-positive values not shown on log axes"))
                    .color(Color32::DARK_RED),
            );
        }
    });
}
