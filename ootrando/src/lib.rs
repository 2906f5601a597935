pub mod error;
pub mod patch;
pub mod rom;
pub mod settings;
