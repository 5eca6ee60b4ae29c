use super::*;
use crate::data;
use crate::session::QuizEvent;

impl QuizApp {
    /// Carga (o recarga) el banco desde la ruta escrita en la UI.
    /// Un fallo de parseo bloquea el arranque y no toca el estado.
    pub fn cargar_banco(&mut self) {
        let path = std::path::PathBuf::from(self.source_input.trim());
        match data::load_questions(&path) {
            Ok(questions) => {
                self.bank = questions;
                self.difficulty_filter = None;
                self.retry_wrong = false;
                self.message = format!("📋 Loaded {} questions", self.bank.len());
                // La primera carga correcta arranca el quiz directamente.
                self.empezar_quiz();
            }
            Err(e) => {
                log::warn!("fallo al cargar {}: {e}", path.display());
                self.message = format!("⚠ {e}");
            }
        }
    }

    /// Reconstruye el motor sobre el conjunto activo y arranca de cero.
    /// Vale igual para "Start Quiz", cambio de filtro o modo repaso.
    pub fn empezar_quiz(&mut self) {
        let questions = self.conjunto_activo();
        let empty = questions.is_empty();
        let mut engine = QuizEngine::new(
            questions,
            self.config.time_limit,
            self.engine.session().user.clone(),
        );
        let now = Instant::now();
        // Start nunca falla; sobre un conjunto vacío se queda en NotStarted.
        let _ = engine.apply(QuizEvent::Start, now);
        self.engine = engine;
        self.selected_option = None;
        self.timeout_banner_until = None;

        if empty {
            self.state = AppState::Welcome;
            self.message = "ℹ No questions to show for this selection".to_string();
        } else {
            self.state = AppState::Quiz;
            self.message.clear();
        }
    }

    /// Cambiar el filtro a mitad de quiz fuerza un reinicio implícito.
    pub fn cambiar_filtro(&mut self, filter: Option<String>) {
        if self.difficulty_filter == filter {
            return;
        }
        self.difficulty_filter = filter;
        self.empezar_quiz();
    }

    /// Activa o desactiva el repaso de falladas. El conjunto de repaso
    /// se captura de la sesión actual *antes* de reiniciar.
    pub fn alternar_repaso(&mut self, retry: bool) {
        if self.retry_wrong == retry {
            return;
        }
        if retry {
            self.retry_set = self
                .engine
                .session()
                .wrong_answers
                .iter()
                .map(|w| w.question.clone())
                .collect();
        } else {
            self.retry_set.clear();
        }
        self.retry_wrong = retry;
        self.empezar_quiz();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use crate::session::{Phase, QuizEvent};

    fn question(n: usize, difficulty: &str) -> Question {
        Question {
            question: format!("Q{n}"),
            option_a: format!("q{n}-a"),
            option_b: format!("q{n}-b"),
            option_c: format!("q{n}-c"),
            option_d: format!("q{n}-d"),
            correct_answer: "A".into(),
            difficulty: difficulty.into(),
            explanation: String::new(),
        }
    }

    fn app_with_bank(bank: Vec<Question>) -> QuizApp {
        let dir = std::env::temp_dir();
        let mut app = QuizApp::new(Config::for_tests(&dir));
        app.bank = bank;
        app
    }

    #[test]
    fn start_on_empty_bank_stays_in_welcome() {
        let mut app = app_with_bank(Vec::new());
        app.empezar_quiz();
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.engine.phase(), Phase::NotStarted);
    }

    #[test]
    fn difficulty_filter_narrows_without_mutating_bank() {
        let mut app = app_with_bank(vec![
            question(0, "Easy"),
            question(1, "Hard"),
            question(2, "Easy"),
        ]);
        app.cambiar_filtro(Some("Easy".into()));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.engine.questions().len(), 2);
        assert_eq!(app.bank.len(), 3);
        // Filtro sin resultados: no hay nada que mostrar.
        app.cambiar_filtro(Some("Medium".into()));
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.engine.phase(), Phase::NotStarted);
    }

    #[test]
    fn retry_wrong_rebuilds_set_in_encounter_order() {
        let mut app = app_with_bank(vec![
            question(0, "Easy"),
            question(1, "Easy"),
            question(2, "Easy"),
        ]);
        app.empezar_quiz();
        let now = Instant::now();
        // Q0 mal, Q1 bien, Q2 mal.
        for opt in ["q0-b", "q1-a", "q2-c"] {
            app.engine
                .apply(QuizEvent::Submit { option: opt.into() }, now)
                .expect("submit ok");
        }
        assert_eq!(app.engine.session().wrong_answers.len(), 2);

        app.alternar_repaso(true);
        assert_eq!(app.state, AppState::Quiz);
        let names: Vec<&str> = app
            .engine
            .questions()
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(names, ["Q0", "Q2"]);
        assert_eq!(app.engine.session().current_index, 0);
        assert!(app.engine.session().answers.is_empty());

        // Al desactivar el repaso volvemos al banco completo.
        app.alternar_repaso(false);
        assert_eq!(app.engine.questions().len(), 3);
    }

    #[test]
    fn retry_with_no_wrong_answers_shows_nothing() {
        let mut app = app_with_bank(vec![question(0, "Easy")]);
        app.empezar_quiz();
        app.alternar_repaso(true);
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.engine.phase(), Phase::NotStarted);
    }
}
