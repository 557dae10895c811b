#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;

pub use commands::{Command, CommandResult, Dispatcher};
pub use config::Config;
pub use error::{BotError, CommandError, RequestError};
