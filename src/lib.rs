pub mod actions;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod scanner;
