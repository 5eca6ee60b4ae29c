pub mod app;
pub mod config;
pub mod data;
pub mod gate;
pub mod model;
pub mod report;
pub mod session;
pub mod sink;
pub mod ui;

pub use app::QuizApp;
