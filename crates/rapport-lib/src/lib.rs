// rapport-lib: colored, leveled console reporting shared by the rapport binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logger;
pub mod output;
pub mod platform;

pub use errors::{Exit, RapportError, Result};
pub use output::color::ColorTag;
