use std::fs::OpenOptions;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::ResultRow;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("no se pudo abrir el registro de resultados: {0}")]
    Io(#[from] std::io::Error),
    #[error("no se pudo escribir la fila de resultado: {0}")]
    Write(#[from] csv::Error),
}

/// Registro externo de solo añadido: una fila CSV por pregunta
/// respondida. Los fallos se informan y se ignoran; jamás abortan
/// la transición en curso.
pub struct ResultSink {
    path: PathBuf,
}

impl ResultSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn append(&self, row: &ResultRow) -> Result<(), SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record([
            chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .as_str(),
            row.user.as_str(),
            row.question.as_str(),
            row.difficulty.as_str(),
            if row.is_correct { "YES" } else { "NO" },
            row.time_spent.to_string().as_str(),
        ])?;
        wtr.flush().map_err(SinkError::Io)?;
        Ok(())
    }
}
