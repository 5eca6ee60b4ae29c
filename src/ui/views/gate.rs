use egui::{Context, Key, TextEdit};

use crate::QuizApp;
use crate::gate::GateState;
use crate::ui::layout::centered_panel;

pub fn ui_gate(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 160.0, 360.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🔒 Access required");
            ui.add_space(12.0);

            let field = ui.add(
                TextEdit::singleline(&mut app.secret_input)
                    .password(true)
                    .hint_text("Password"),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(8.0);
            if ui.button("Enter").clicked() || submitted {
                app.introducir_secreto();
            }

            if app.gate.state() == GateState::Denied && !app.message.is_empty() {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::LIGHT_RED, &app.message);
            }
        });
    });
}
