use std::time::Instant;

use egui::{Align, CentralPanel, Context, Layout, ProgressBar, ScrollArea};

use crate::QuizApp;
use crate::session::QuizView;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = Instant::now();
    let banner_active = app.timeout_banner_until.is_some();

    // Datos de la vista primero; los botones mutan `app` después.
    let (index, total, question, remaining_secs, remaining_frac) =
        match app.engine.view(now) {
            QuizView::Question {
                index,
                total,
                question,
                remaining_secs,
                remaining_frac,
            } => (index, total, question.clone(), remaining_secs, remaining_frac),
            // Completed y Empty se despachan desde ui::update.
            _ => return,
        };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let est_height = 420.0;
        let extra_space = (ui.available_height() - est_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    ui.heading(format!("Question {}/{}", index + 1, total));
                    ui.add_space(10.0);

                    let prompt_max_height = 120.0;
                    ScrollArea::vertical()
                        .max_height(prompt_max_height)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(&question.question).strong().size(16.0));
                        });

                    ui.add_space(12.0);

                    ui.with_layout(Layout::top_down(Align::Min), |ui| {
                        for (i, option) in question.options().iter().enumerate() {
                            ui.radio_value(&mut app.selected_option, Some(i), *option);
                        }
                    });

                    ui.add_space(12.0);
                    ui.add(
                        ProgressBar::new(remaining_frac)
                            .text(format!("⏳ Time left: {remaining_secs} seconds")),
                    );

                    ui.add_space(10.0);
                    let submit = ui
                        .add_enabled(!banner_active, egui::Button::new("Submit Answer"))
                        .clicked();
                    if submit {
                        app.procesar_respuesta();
                    }

                    ui.add_space(8.0);
                    if banner_active {
                        ui.colored_label(egui::Color32::LIGHT_RED, &app.message);
                    } else if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
