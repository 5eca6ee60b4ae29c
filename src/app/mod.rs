use std::time::Instant;

use crate::config::Config;
use crate::gate::AccessGate;
use crate::model::{AppState, Question};
use crate::session::{DEFAULT_USER, QuizEngine};
use crate::sink::ResultSink;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

pub struct QuizApp {
    pub gate: AccessGate,
    pub engine: QuizEngine,
    pub sink: ResultSink,
    pub state: AppState,
    pub config: Config,

    /// Banco completo cargado del CSV; los filtros nunca lo mutan.
    pub bank: Vec<Question>,
    pub difficulty_filter: Option<String>,
    pub retry_wrong: bool,
    /// Instantánea de las preguntas falladas al armar el modo repaso;
    /// se captura antes del reinicio porque el reset vacía la lista.
    pub retry_set: Vec<Question>,

    // Buffers de la UI
    pub secret_input: String,
    pub source_input: String,
    pub user_input: String,
    pub selected_option: Option<usize>,
    pub message: String,

    /// Aviso cosmético de "Time's up"; la transición ya ocurrió.
    pub timeout_banner_until: Option<Instant>,
}

impl QuizApp {
    pub fn new(config: Config) -> Self {
        let engine = QuizEngine::new(
            Vec::new(),
            config.time_limit,
            DEFAULT_USER.to_string(),
        );
        let sink = ResultSink::new(config.results_path.clone());
        Self {
            gate: AccessGate::new(config.secret.clone()),
            engine,
            sink,
            state: AppState::Locked,
            config,
            bank: Vec::new(),
            difficulty_filter: None,
            retry_wrong: false,
            retry_set: Vec::new(),
            secret_input: String::new(),
            source_input: String::from("questions.csv"),
            user_input: DEFAULT_USER.to_string(),
            selected_option: None,
            message: String::new(),
            timeout_banner_until: None,
        }
    }

    /// Intento de desbloqueo. El buffer se vacía siempre: el secreto
    /// introducido no se retiene tras la comparación.
    pub fn introducir_secreto(&mut self) {
        let entered = std::mem::take(&mut self.secret_input);
        if self.gate.try_unlock(&entered) {
            self.state = AppState::Welcome;
            self.message.clear();
        } else {
            self.message = "😕 Wrong password".to_string();
        }
    }

    pub fn cambiar_nombre(&mut self) {
        let name = self.user_input.trim().to_string();
        if !name.is_empty() {
            self.engine.set_user(&name);
        }
    }
}
