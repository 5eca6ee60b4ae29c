use super::*;

impl QuizApp {
    /// Conjunto de preguntas sobre el que se construye el motor.
    /// En modo repaso manda la instantánea de falladas; si no,
    /// el banco filtrado por dificultad. El banco nunca se muta.
    pub fn conjunto_activo(&self) -> Vec<Question> {
        if self.retry_wrong {
            return self.retry_set.clone();
        }
        match &self.difficulty_filter {
            Some(d) => self
                .bank
                .iter()
                .filter(|q| &q.difficulty == d)
                .cloned()
                .collect(),
            None => self.bank.clone(),
        }
    }

    /// Etiquetas de dificultad presentes en el banco, sin repetir,
    /// en orden de primera aparición (para el desplegable del filtro).
    pub fn opciones_dificultad(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for q in &self.bank {
            if !seen.contains(&q.difficulty) {
                seen.push(q.difficulty.clone());
            }
        }
        seen
    }

    pub fn tiene_banco(&self) -> bool {
        !self.bank.is_empty()
    }
}
