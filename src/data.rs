use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::model::Question;

const REQUIRED_COLUMNS: [&str; 8] = [
    "question",
    "option_a",
    "option_b",
    "option_c",
    "option_d",
    "correct_answer",
    "difficulty",
    "explanation",
];

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo abrir el fichero de preguntas: {0}")]
    Io(#[from] std::io::Error),
    #[error("falta la columna obligatoria \"{0}\"")]
    MissingColumn(&'static str),
    #[error("fila {0} mal formada: {1}")]
    BadRow(usize, csv::Error),
    #[error("el fichero no contiene ninguna pregunta")]
    Empty,
}

/// Carga el banco de preguntas desde un CSV con cabecera.
/// Solo se valida la presencia de columnas y que haya al menos una fila;
/// el motor nunca arranca sin un banco no vacío.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, DataError> {
    let file = File::open(path)?;
    let questions = parse_questions(file)?;
    log::info!("cargadas {} preguntas de {}", questions.len(), path.display());
    Ok(questions)
}

pub fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| DataError::BadRow(1, e))?;
    if headers.is_empty() {
        return Err(DataError::Empty);
    }
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col));
        }
    }

    let mut questions = Vec::new();
    for (i, row) in rdr.deserialize::<Question>().enumerate() {
        questions.push(row.map_err(|e| DataError::BadRow(i + 2, e))?);
    }
    if questions.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(questions)
}
