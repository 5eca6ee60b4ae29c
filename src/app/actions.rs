use std::time::Duration;

use super::*;
use crate::report;
use crate::session::{Phase, QuizEvent, ResultRow};

/// Duración del aviso de tiempo agotado. Puramente cosmético:
/// la transición ya se ha aplicado cuando el aviso aparece.
pub const TIMEOUT_BANNER: Duration = Duration::from_secs(2);

impl QuizApp {
    /// Envía la opción marcada para la pregunta en curso.
    pub fn procesar_respuesta(&mut self) {
        let i = match self.engine.phase() {
            Phase::AwaitingAnswer(i) => i,
            _ => return,
        };
        let option = match self.selected_option {
            Some(idx) => self.engine.questions()[i].options()[idx].to_string(),
            None => {
                self.message = "⚠ Pick an option before submitting".to_string();
                return;
            }
        };

        let now = Instant::now();
        match self.engine.apply(QuizEvent::Submit { option }, now) {
            Ok(row) => {
                self.selected_option = None;
                self.message.clear();
                if let Some(row) = row {
                    self.entregar_al_sink(&row);
                }
            }
            Err(e) => {
                // La opción viene de los radios, así que esto no debería
                // pasar; si pasa, se informa sin tocar el estado.
                self.message = format!("⚠ {e}");
            }
        }

        self.comprobar_final();
    }

    /// Salta cuando el tiempo restante llega a cero sin envío.
    /// Registra el centinela y deja el aviso cosmético en pantalla.
    pub fn expirar_tiempo(&mut self) {
        let now = Instant::now();
        match self.engine.apply(QuizEvent::Timeout, now) {
            Ok(Some(row)) => {
                self.selected_option = None;
                self.message = "⏰ Time's up! Moving to next question.".to_string();
                self.timeout_banner_until = Some(now + TIMEOUT_BANNER);
                self.entregar_al_sink(&row);
            }
            Ok(None) | Err(_) => {}
        }
        self.comprobar_final();
    }

    /// Entrega al registro externo. Mejor esfuerzo: un fallo se
    /// informa (mensaje + log) y la transición sigue adelante.
    fn entregar_al_sink(&mut self, row: &ResultRow) {
        if let Err(e) = self.sink.append(row) {
            log::warn!("fallo al guardar el resultado: {e}");
            self.message = format!("⚠ Could not save result: {e}");
        }
    }

    /// Exporta el informe de fallos en PDF desde el resumen.
    /// Un fallo de exportación no afecta a la vista ya renderizada.
    pub fn exportar_informe(&mut self) {
        let wrongs = self.engine.session().wrong_answers.clone();
        let path = self.config.report_path.clone();
        match report::export_wrong_answers(&wrongs, &path) {
            Ok(()) => {
                log::info!("informe exportado en {}", path.display());
                self.message = format!("📄 Report saved to {}", path.display());
            }
            Err(e) => {
                log::warn!("fallo al exportar el informe: {e}");
                self.message = format!("⚠ Could not export report: {e}");
            }
        }
    }

    fn comprobar_final(&mut self) {
        if self.engine.phase() == Phase::Completed {
            self.state = AppState::Summary;
        }
    }
}
