use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::session::DEFAULT_TIME_LIMIT;

pub const SECRET_VAR: &str = "PM_QUIZ_SECRET";
pub const TIME_LIMIT_VAR: &str = "PM_QUIZ_TIME_LIMIT";
pub const RESULTS_VAR: &str = "PM_QUIZ_RESULTS";
pub const REPORT_VAR: &str = "PM_QUIZ_REPORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("falta la variable {SECRET_VAR} con el secreto de acceso")]
    MissingSecret,
    #[error("{TIME_LIMIT_VAR} debe ser un número de segundos mayor que cero")]
    BadTimeLimit,
}

/// Configuración fuera de banda: el secreto nunca va embebido en el
/// binario ni en ningún fichero del repositorio.
#[derive(Debug, Clone)]
pub struct Config {
    pub secret: String,
    pub time_limit: Duration,
    pub results_path: PathBuf,
    pub report_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(SECRET_VAR).map_err(|_| ConfigError::MissingSecret)?;
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let time_limit = match std::env::var(TIME_LIMIT_VAR) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::BadTimeLimit)?;
                if secs == 0 {
                    return Err(ConfigError::BadTimeLimit);
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIME_LIMIT,
        };

        let results_path = std::env::var(RESULTS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("quiz_results.csv"));
        let report_path = std::env::var(REPORT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("wrong_answers.pdf"));

        Ok(Self {
            secret,
            time_limit,
            results_path,
            report_path,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Config de pruebas con rutas dentro de un directorio temporal.
    pub fn for_tests(dir: &std::path::Path) -> Self {
        Self {
            secret: "test-secret".into(),
            time_limit: DEFAULT_TIME_LIMIT,
            results_path: dir.join("quiz_results.csv"),
            report_path: dir.join("wrong_answers.pdf"),
        }
    }
}
