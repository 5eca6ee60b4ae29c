use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::model::Question;

/// Valor centinela que se registra cuando el tiempo expira sin respuesta.
pub const NO_ANSWER: &str = "Time's up";

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);
pub const DEFAULT_USER: &str = "User1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub given: String, // texto de la opción elegida, o NO_ANSWER
    pub is_correct: bool,
    pub time_spent: u64, // segundos, ya recortado a [0, time_limit]
}

impl AnswerRecord {
    pub fn is_sentinel(&self) -> bool {
        self.given == NO_ANSWER
    }
}

/// Entrada de la lista de fallos, en orden de aparición.
/// Guarda la pregunta completa para poder reconstruir el modo repaso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub question: Question,
    pub given: String,
}

/// Fila que el motor devuelve al avanzar para que el anfitrión
/// la vuelque al sink. El motor nunca escribe por su cuenta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub user: String,
    pub question: String,
    pub difficulty: String,
    pub is_correct: bool,
    pub time_spent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingAnswer(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Start,
    Submit { option: String },
    Timeout,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no hay ninguna pregunta en curso")]
    NotAwaiting,
    #[error("la opción \"{0}\" no pertenece a la pregunta actual")]
    InvalidOption(String),
}

/// Estado autoritativo de la sesión. Se sustituye entero en cada reset;
/// no sobrevive al proceso.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub current_index: usize,
    pub answers: BTreeMap<usize, AnswerRecord>,
    pub wrong_answers: Vec<WrongAnswer>,
    pub total_time: u64,
    pub question_started: Instant,
    pub time_limit: Duration,
    pub user: String,
}

impl SessionState {
    fn new(time_limit: Duration, user: String, now: Instant) -> Self {
        Self {
            current_index: 0,
            answers: BTreeMap::new(),
            wrong_answers: Vec::new(),
            total_time: 0,
            question_started: now,
            time_limit,
            user,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32 * 100.0
        }
    }
}

/// Proyección de solo lectura que consume la capa de render.
pub enum QuizView<'a> {
    /// Sin banco o banco filtrado vacío: no hay nada que mostrar.
    Empty,
    Question {
        index: usize,
        total: usize,
        question: &'a Question,
        remaining_secs: u64,
        remaining_frac: f32,
    },
    Finished {
        score: Score,
        total_time: u64,
        wrongs: &'a [WrongAnswer],
    },
}

/// Máquina de estados del quiz. Cada transición es
/// `(estado, evento, now) -> estado`; el reloj entra como argumento
/// para que los tests no dependan del reloj real.
pub struct QuizEngine {
    questions: Vec<Question>,
    session: SessionState,
    started: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, time_limit: Duration, user: String) -> Self {
        let now = Instant::now();
        Self {
            questions,
            session: SessionState::new(time_limit, user, now),
            started: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn set_user(&mut self, user: &str) {
        // Cambiar el nombre no reinicia nada.
        self.session.user = user.to_string();
    }

    pub fn phase(&self) -> Phase {
        if !self.started || self.questions.is_empty() {
            Phase::NotStarted
        } else if self.session.current_index >= self.questions.len() {
            Phase::Completed
        } else {
            Phase::AwaitingAnswer(self.session.current_index)
        }
    }

    /// Tiempo restante derivado del reloj; se recalcula en cada render,
    /// no hay ningún temporizador de fondo.
    pub fn time_remaining(&self, now: Instant) -> Duration {
        self.session
            .time_limit
            .saturating_sub(now.duration_since(self.session.question_started))
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self
                .session
                .answers
                .values()
                .filter(|r| r.is_correct)
                .count(),
            total: self.session.answers.len(),
        }
    }

    pub fn view(&self, now: Instant) -> QuizView<'_> {
        match self.phase() {
            Phase::NotStarted => QuizView::Empty,
            Phase::AwaitingAnswer(i) => {
                let remaining = self.time_remaining(now);
                let limit = self.session.time_limit.as_secs_f32().max(1.0);
                QuizView::Question {
                    index: i,
                    total: self.questions.len(),
                    question: &self.questions[i],
                    remaining_secs: remaining.as_secs(),
                    remaining_frac: remaining.as_secs_f32() / limit,
                }
            }
            Phase::Completed => QuizView::Finished {
                score: self.score(),
                total_time: self.session.total_time,
                wrongs: &self.session.wrong_answers,
            },
        }
    }

    /// Aplica un evento. Devuelve la fila para el sink cuando la
    /// transición abandona una pregunta; la entrega (y sus fallos)
    /// son cosa del anfitrión y nunca revierten la transición.
    pub fn apply(
        &mut self,
        event: QuizEvent,
        now: Instant,
    ) -> Result<Option<ResultRow>, EngineError> {
        match event {
            QuizEvent::Start => {
                self.reset(now);
                Ok(None)
            }
            QuizEvent::Submit { option } => {
                let i = match self.phase() {
                    Phase::AwaitingAnswer(i) => i,
                    _ => return Err(EngineError::NotAwaiting),
                };
                let q = &self.questions[i];
                if !q.options().contains(&option.as_str()) {
                    return Err(EngineError::InvalidOption(option));
                }
                let is_correct = option == q.correct_option();
                let elapsed = now.duration_since(self.session.question_started);
                let time_spent = elapsed.as_secs().min(self.session.time_limit.as_secs());
                Ok(Some(self.leave_question(i, option, is_correct, time_spent, now)))
            }
            QuizEvent::Timeout => {
                let i = match self.phase() {
                    Phase::AwaitingAnswer(i) => i,
                    _ => return Err(EngineError::NotAwaiting),
                };
                // Sin respuesta: centinela, incorrecta, tiempo completo.
                let time_spent = self.session.time_limit.as_secs();
                Ok(Some(self.leave_question(i, NO_ANSWER.to_string(), false, time_spent, now)))
            }
        }
    }

    /// Reinicio incondicional desde cualquier fase: índice a 0,
    /// registros vacíos, tiempo acumulado 0, plazo rearmado.
    pub fn reset(&mut self, now: Instant) {
        self.session = SessionState::new(
            self.session.time_limit,
            self.session.user.clone(),
            now,
        );
        // Con banco vacío nunca se llega a AwaitingAnswer.
        self.started = !self.questions.is_empty();
    }

    /// Registro único al abandonar la pregunta `i`, por envío o por
    /// tiempo agotado; ambas rutas comparten la misma contabilidad.
    fn leave_question(
        &mut self,
        i: usize,
        given: String,
        is_correct: bool,
        time_spent: u64,
        now: Instant,
    ) -> ResultRow {
        let q = self.questions[i].clone();
        self.session.answers.insert(
            i,
            AnswerRecord {
                given: given.clone(),
                is_correct,
                time_spent,
            },
        );
        if !is_correct {
            self.session.wrong_answers.push(WrongAnswer {
                question: q.clone(),
                given: given.clone(),
            });
        }
        self.session.total_time += time_spent;
        self.session.current_index += 1;
        self.session.question_started = now;

        ResultRow {
            user: self.session.user.clone(),
            question: q.question,
            difficulty: q.difficulty,
            is_correct,
            time_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize, correct: &str) -> Question {
        Question {
            question: format!("Q{n}"),
            option_a: format!("q{n}-a"),
            option_b: format!("q{n}-b"),
            option_c: format!("q{n}-c"),
            option_d: format!("q{n}-d"),
            correct_answer: correct.to_string(),
            difficulty: "Medium".to_string(),
            explanation: format!("E{n}"),
        }
    }

    fn engine(n: usize) -> QuizEngine {
        let qs = (0..n).map(|i| question(i, "A")).collect();
        QuizEngine::new(qs, Duration::from_secs(60), "User1".to_string())
    }

    #[test]
    fn empty_set_never_reaches_awaiting_answer() {
        let mut e = engine(0);
        let now = Instant::now();
        e.apply(QuizEvent::Start, now).expect("start ok");
        assert_eq!(e.phase(), Phase::NotStarted);
        assert_eq!(
            e.apply(QuizEvent::Submit { option: "x".into() }, now),
            Err(EngineError::NotAwaiting)
        );
    }

    #[test]
    fn start_arms_first_question() {
        let mut e = engine(3);
        assert_eq!(e.phase(), Phase::NotStarted);
        let now = Instant::now();
        e.apply(QuizEvent::Start, now).expect("start ok");
        assert_eq!(e.phase(), Phase::AwaitingAnswer(0));
        assert_eq!(e.time_remaining(now), Duration::from_secs(60));
    }

    #[test]
    fn index_equals_transitions_and_answer_count() {
        let mut e = engine(3);
        let t0 = Instant::now();
        e.apply(QuizEvent::Start, t0).expect("start ok");
        for n in 1..=3 {
            let opt = match e.phase() {
                Phase::AwaitingAnswer(i) => e.questions()[i].option_a.clone(),
                other => panic!("fase inesperada: {other:?}"),
            };
            e.apply(QuizEvent::Submit { option: opt }, t0).expect("submit ok");
            assert_eq!(e.session().current_index, n);
            assert_eq!(e.session().answers.len(), n);
        }
        assert_eq!(e.phase(), Phase::Completed);
    }

    #[test]
    fn invalid_option_is_rejected_without_state_change() {
        let mut e = engine(2);
        let now = Instant::now();
        e.apply(QuizEvent::Start, now).expect("start ok");
        let err = e
            .apply(QuizEvent::Submit { option: "nope".into() }, now)
            .expect_err("debe rechazar");
        assert_eq!(err, EngineError::InvalidOption("nope".into()));
        assert_eq!(e.phase(), Phase::AwaitingAnswer(0));
        assert!(e.session().answers.is_empty());
        assert!(e.session().wrong_answers.is_empty());
    }

    // Escenario canónico: Q1 bien (5s), Q2 mal (10s), Q3 sin responder (60s).
    #[test]
    fn three_question_scenario() {
        let mut e = engine(3);
        let t0 = Instant::now();
        e.apply(QuizEvent::Start, t0).expect("start ok");

        let row = e
            .apply(
                QuizEvent::Submit { option: "q0-a".into() },
                t0 + Duration::from_secs(5),
            )
            .expect("submit ok")
            .expect("fila para el sink");
        assert!(row.is_correct);
        assert_eq!(row.time_spent, 5);
        assert!(e.session().wrong_answers.is_empty());

        let t1 = t0 + Duration::from_secs(5);
        let row = e
            .apply(
                QuizEvent::Submit { option: "q1-b".into() },
                t1 + Duration::from_secs(10),
            )
            .expect("submit ok")
            .expect("fila para el sink");
        assert!(!row.is_correct);
        assert_eq!(row.time_spent, 10);
        assert_eq!(e.session().wrong_answers.len(), 1);
        assert_eq!(e.session().wrong_answers[0].given, "q1-b");

        let t2 = t1 + Duration::from_secs(10);
        assert_eq!(e.time_remaining(t2 + Duration::from_secs(60)), Duration::ZERO);
        let row = e
            .apply(QuizEvent::Timeout, t2 + Duration::from_secs(60))
            .expect("timeout ok")
            .expect("fila para el sink");
        assert!(!row.is_correct);
        assert_eq!(row.time_spent, 60);

        assert_eq!(e.phase(), Phase::Completed);
        assert_eq!(e.session().wrong_answers.len(), 2);
        assert_eq!(e.session().wrong_answers[1].given, NO_ANSWER);
        assert_eq!(e.session().total_time, 75);

        let score = e.score();
        assert_eq!(score, Score { correct: 1, total: 3 });
        assert!((score.percent() - 33.333_332).abs() < 0.001);
    }

    #[test]
    fn timeout_records_sentinel_as_incorrect_even_if_option_a_empty() {
        // El centinela jamás cuenta como acierto, pase lo que pase.
        let mut qs = vec![question(0, "A")];
        qs[0].option_a = NO_ANSWER.to_string();
        let mut e = QuizEngine::new(qs, Duration::from_secs(60), "u".into());
        let now = Instant::now();
        e.apply(QuizEvent::Start, now).expect("start ok");
        e.apply(QuizEvent::Timeout, now + Duration::from_secs(60))
            .expect("timeout ok");
        let rec = &e.session().answers[&0];
        assert!(rec.is_sentinel());
        assert!(!rec.is_correct);
        assert_eq!(e.score(), Score { correct: 0, total: 1 });
    }

    #[test]
    fn time_spent_clamps_to_limit() {
        let mut e = engine(1);
        let t0 = Instant::now();
        e.apply(QuizEvent::Start, t0).expect("start ok");
        // Envío tardío (el render no puede interrumpir): se recorta al límite.
        let row = e
            .apply(
                QuizEvent::Submit { option: "q0-a".into() },
                t0 + Duration::from_secs(90),
            )
            .expect("submit ok")
            .expect("fila");
        assert_eq!(row.time_spent, 60);
        assert_eq!(e.session().total_time, 60);
    }

    #[test]
    fn wrong_list_is_subsequence_of_incorrect_answers() {
        let mut e = engine(4);
        let t = Instant::now();
        e.apply(QuizEvent::Start, t).expect("start ok");
        for opt in ["q0-b", "q1-a", "q2-c", "q3-d"] {
            e.apply(QuizEvent::Submit { option: opt.into() }, t)
                .expect("submit ok");
        }
        let wrongs = &e.session().wrong_answers;
        assert_eq!(wrongs.len(), 3);
        assert!(wrongs.len() <= e.session().answers.len());
        // Orden de aparición: Q0, Q2, Q3.
        let names: Vec<&str> = wrongs.iter().map(|w| w.question.question.as_str()).collect();
        assert_eq!(names, ["Q0", "Q2", "Q3"]);
        for w in wrongs {
            let rec = e
                .session()
                .answers
                .values()
                .find(|r| r.given == w.given && !r.is_correct);
            assert!(rec.is_some());
        }
    }

    #[test]
    fn reset_from_completed_clears_everything() {
        let mut e = engine(2);
        let t = Instant::now();
        e.apply(QuizEvent::Start, t).expect("start ok");
        e.apply(QuizEvent::Submit { option: "q0-b".into() }, t + Duration::from_secs(3))
            .expect("submit ok");
        e.apply(QuizEvent::Timeout, t + Duration::from_secs(63))
            .expect("timeout ok");
        assert_eq!(e.phase(), Phase::Completed);

        let t2 = t + Duration::from_secs(70);
        e.apply(QuizEvent::Start, t2).expect("reset ok");
        assert_eq!(e.phase(), Phase::AwaitingAnswer(0));
        assert_eq!(e.session().current_index, 0);
        assert!(e.session().answers.is_empty());
        assert!(e.session().wrong_answers.is_empty());
        assert_eq!(e.session().total_time, 0);
        assert_eq!(e.time_remaining(t2), Duration::from_secs(60));
    }

    #[test]
    fn set_user_does_not_reset() {
        let mut e = engine(2);
        let t = Instant::now();
        e.apply(QuizEvent::Start, t).expect("start ok");
        e.apply(QuizEvent::Submit { option: "q0-a".into() }, t)
            .expect("submit ok");
        e.set_user("Alex");
        assert_eq!(e.session().current_index, 1);
        let row = e
            .apply(QuizEvent::Submit { option: "q1-a".into() }, t)
            .expect("submit ok")
            .expect("fila");
        assert_eq!(row.user, "Alex");
    }

    #[test]
    fn score_arithmetic_is_exact() {
        let mut e = engine(5);
        let t = Instant::now();
        e.apply(QuizEvent::Start, t).expect("start ok");
        for opt in ["q0-a", "q1-a", "q2-b", "q3-a", "q4-c"] {
            e.apply(QuizEvent::Submit { option: opt.into() }, t)
                .expect("submit ok");
        }
        let score = e.score();
        let correct = e.session().answers.values().filter(|r| r.is_correct).count();
        assert_eq!(score.correct, correct);
        assert_eq!(score.total, e.session().answers.len());
    }
}
