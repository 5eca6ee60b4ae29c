pub mod layout;
pub mod views;

use std::time::{Duration, Instant};

use eframe::{App, Frame};
use egui::Context;

use crate::QuizApp;
use crate::model::AppState;
use crate::session::Phase;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // El propio ciclo de repintado es el único "tick": la cuenta
        // atrás se deriva del reloj en cada pasada, sin hilo de fondo.
        if self.state == AppState::Quiz {
            let now = Instant::now();

            if let Some(until) = self.timeout_banner_until {
                if now >= until {
                    self.timeout_banner_until = None;
                    self.message.clear();
                }
            }

            if matches!(self.engine.phase(), Phase::AwaitingAnswer(_))
                && self.engine.time_remaining(now).is_zero()
            {
                self.expirar_tiempo();
            }

            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if self.state != AppState::Locked {
            layout::top_panel(self, ctx);
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Locked => views::gate::ui_gate(self, ctx),
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }
    }
}
