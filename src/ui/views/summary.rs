use std::time::Instant;

use egui::{Context, ScrollArea};

use crate::QuizApp;
use crate::session::QuizView;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let now = Instant::now();
    let (score, total_time, wrongs) = match app.engine.view(now) {
        QuizView::Finished {
            score,
            total_time,
            wrongs,
        } => (score, total_time, wrongs.to_vec()),
        _ => {
            // Sin estado terminal no hay resumen que enseñar.
            app.state = crate::model::AppState::Welcome;
            return;
        }
    };

    centered_panel(ctx, 560.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏁 Quiz Completed!");
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(format!(
                    "Score: {}/{} ({:.1}%)",
                    score.correct,
                    score.total,
                    score.percent()
                ))
                .strong()
                .size(18.0),
            );
            ui.label(format!("Total time: {total_time} seconds"));
            ui.label(format!(
                "Results have been logged to {}",
                app.sink.path().display()
            ));
            ui.add_space(12.0);

            if wrongs.is_empty() {
                ui.label("No wrong answers. Well done!");
            } else {
                ui.heading("Wrong Answers");
                ui.add_space(6.0);
                ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for (i, w) in wrongs.iter().enumerate() {
                        ui.label(
                            egui::RichText::new(format!(
                                "Question {}: {}",
                                i + 1,
                                w.question.question
                            ))
                            .strong(),
                        );
                        ui.label(format!("Your answer: {}", w.given));
                        ui.label(format!("Correct answer: {}", w.question.correct_option()));
                        ui.label(format!("Explanation: {}", w.question.explanation));
                        ui.separator();
                    }
                });
            }

            ui.add_space(14.0);
            let panel_width = ui.available_width().min(480.0);
            let (export, restart) =
                two_button_row(ui, panel_width, "📄 Download report (PDF)", "🔄 Restart");
            if export {
                app.exportar_informe();
            }
            if restart {
                app.empezar_quiz();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
