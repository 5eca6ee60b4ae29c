pub mod gate;
pub mod quiz;
pub mod summary;
pub mod welcome;
