pub mod cli;
pub mod commands;
mod context;
pub mod options;

pub use context::AppContext;
