pub mod cli;
pub mod env;

pub use env::{Env, LogLevel, setup_tracing};
