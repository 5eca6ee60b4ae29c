use pm_quiz::QuizApp;
use pm_quiz::config::Config;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error de configuración: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Project Management Quiz",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}
