use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    /// No name was supplied after the program name.
    #[error("Usage: {program} <name>")]
    MissingArgument { program: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GreeterError {
    pub fn exit_code(&self) -> i32 {
        match self {
            GreeterError::MissingArgument { .. } => 1,
            GreeterError::IoError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
