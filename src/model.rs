use serde::{Deserialize, Serialize};

/// Una pregunta del banco, tal cual viene del CSV.
/// Inmutable una vez cargada; su identidad es la posición de fila.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String, // letra A–D
    pub difficulty: String,
    pub explanation: String,
}

impl Question {
    pub fn options(&self) -> [&str; 4] {
        [
            self.option_a.as_str(),
            self.option_b.as_str(),
            self.option_c.as_str(),
            self.option_d.as_str(),
        ]
    }

    /// Índice 0..=3 de la opción correcta. Una letra fuera de rango
    /// cae en la opción A (no se valida más allá de la presencia de columnas).
    pub fn correct_index(&self) -> usize {
        match self
            .correct_answer
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
        {
            Some('B') => 1,
            Some('C') => 2,
            Some('D') => 3,
            _ => 0,
        }
    }

    pub fn correct_option(&self) -> &str {
        self.options()[self.correct_index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Locked,
    Welcome,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Locked
    }
}
