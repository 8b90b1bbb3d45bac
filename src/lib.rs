pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::app::run;
pub use crate::core::greeter::{greet, write_greetings, write_hello, write_usage};
pub use domain::model::Invocation;
pub use utils::error::{GreeterError, Result};
