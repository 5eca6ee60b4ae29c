use egui::Context;

use crate::QuizApp;
use crate::ui::layout::centered_panel;

/// Pantalla inicial: carga del CSV de preguntas. También es la vista
/// de "nada que mostrar" cuando el conjunto activo queda vacío.
pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Project Management Quiz");
            ui.add_space(14.0);

            ui.label("Questions file (CSV):");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.source_input);
                if ui.button("📋 Load").clicked() {
                    app.cargar_banco();
                }
            });

            ui.add_space(10.0);
            if !app.tiene_banco() {
                ui.label("Please load a CSV file with questions to begin.");
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
