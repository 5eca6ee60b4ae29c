use egui::{Button, CentralPanel, ComboBox, Context, Frame, Ui};

use crate::QuizApp;

/// Barra superior: nombre del usuario y arranque del quiz.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label("Your name:");
            let name = ui.text_edit_singleline(&mut app.user_input);
            if name.lost_focus() {
                app.cambiar_nombre();
            }

            if app.tiene_banco() && ui.button("▶ Start Quiz").clicked() {
                app.cambiar_nombre();
                app.empezar_quiz();
            }
        });
    });

    if app.tiene_banco() {
        filter_panel(app, ctx);
    }
}

/// Panel lateral con el filtro de dificultad y el modo repaso,
/// como la barra lateral del original.
fn filter_panel(app: &mut QuizApp, ctx: &Context) {
    egui::SidePanel::left("filter_panel").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading("Filters");
        ui.add_space(6.0);

        let current = app
            .difficulty_filter
            .clone()
            .unwrap_or_else(|| "All".to_string());
        let mut selected = current.clone();
        ComboBox::from_label("Difficulty")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, "All".to_string(), "All");
                for d in app.opciones_dificultad() {
                    ui.selectable_value(&mut selected, d.clone(), d);
                }
            });
        if selected != current {
            let filter = if selected == "All" { None } else { Some(selected) };
            app.cambiar_filtro(filter);
        }

        ui.add_space(6.0);
        let mut retry = app.retry_wrong;
        if ui.checkbox(&mut retry, "Retry wrong answers only").changed() {
            app.alternar_repaso(retry);
        }
        if app.retry_wrong {
            ui.label(format!("Retrying {} wrong questions", app.retry_set.len()));
        }
    });
}

/// Panel centrado en vertical con anchura máxima y contenido `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dos botones del mismo tamaño en una fila. Devuelve (izquierdo, derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
