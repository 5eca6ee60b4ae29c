use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::session::WrongAnswer;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_H: f32 = 6.0;
const FONT_SIZE: f32 = 11.0;
const WRAP_COLS: usize = 95;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no se pudo crear el fichero del informe: {0}")]
    Io(#[from] std::io::Error),
    #[error("no se pudo generar el PDF: {0}")]
    Pdf(String),
}

/// Contenido del informe como líneas de texto plano. Función pura:
/// el mismo estado terminal produce siempre las mismas líneas.
pub fn render_lines(wrongs: &[WrongAnswer]) -> Vec<String> {
    let mut lines = vec!["Wrong Answers Report".to_string(), String::new()];
    if wrongs.is_empty() {
        lines.push("No wrong answers. Well done!".to_string());
        return lines;
    }
    for (i, w) in wrongs.iter().enumerate() {
        lines.push(format!("Question {}: {}", i + 1, w.question.question));
        lines.push(format!("Your answer: {}", w.given));
        lines.push(format!("Correct answer: {}", w.question.correct_option()));
        lines.push(format!("Explanation: {}", w.question.explanation));
        lines.push(String::new());
    }
    lines
}

/// Exporta el informe de fallos como PDF de maquetación fija.
/// Una lista vacía produce un documento válido con solo la cabecera.
pub fn export_wrong_answers(wrongs: &[WrongAnswer], path: &Path) -> Result<(), ReportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Wrong Answers Report", Mm(PAGE_W), Mm(PAGE_H), "layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_H - MARGIN;

    for line in render_lines(wrongs) {
        for piece in wrap(&line, WRAP_COLS) {
            if y < MARGIN {
                let (page, inner) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "layer 1");
                layer = doc.get_page(page).get_layer(inner);
                y = PAGE_H - MARGIN;
            }
            layer.use_text(piece, FONT_SIZE, Mm(MARGIN), Mm(y), &font);
            y -= LINE_H;
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(())
}

/// Corte burdo por número de caracteres, suficiente para texto de quiz.
fn wrap(line: &str, cols: usize) -> Vec<String> {
    if line.chars().count() <= cols {
        return vec![line.to_string()];
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > cols {
            pieces.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
