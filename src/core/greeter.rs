use crate::utils::error::Result;
use std::io::{self, Write};

pub fn hello_message(name: &str) -> String {
    format!("Hello, {}!\n", name)
}

pub fn greetings_message(name: &str) -> String {
    format!("Greetings, {}!\n", name)
}

pub fn usage_message(program: &str) -> String {
    format!("Usage: {} <name>\n", program)
}

/// Writes `Hello, <name>!` with a single write call.
pub fn write_hello<W: Write>(out: &mut W, name: &str) -> Result<()> {
    tracing::debug!(name, "writing hello greeting");
    out.write_all(hello_message(name).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn write_usage<W: Write>(err: &mut W, program: &str) -> Result<()> {
    tracing::debug!(program, "name argument missing, writing usage");
    err.write_all(usage_message(program).as_bytes())?;
    err.flush()?;
    Ok(())
}

pub fn write_greetings<W: Write>(out: &mut W, name: &str) -> Result<()> {
    out.write_all(greetings_message(name).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Prints `Greetings, <name>!` to stdout.
///
/// Library-only: the CLI path never calls this. Any name is accepted as-is.
pub fn greet(name: &str) {
    tracing::debug!(name, "writing greetings");
    if let Err(e) = write_greetings(&mut io::stdout(), name) {
        tracing::debug!("could not write greetings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_message() {
        assert_eq!(hello_message("World"), "Hello, World!\n");
        assert_eq!(hello_message(""), "Hello, !\n");
    }

    #[test]
    fn test_greetings_message() {
        assert_eq!(greetings_message("Alice"), "Greetings, Alice!\n");
        assert_eq!(greetings_message(""), "Greetings, !\n");
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(usage_message("prog"), "Usage: prog <name>\n");
        assert_eq!(usage_message("./bin/greeter"), "Usage: ./bin/greeter <name>\n");
    }

    #[test]
    fn test_write_hello() {
        let mut out = Vec::new();
        write_hello(&mut out, "World").unwrap();
        assert_eq!(out, b"Hello, World!\n");
    }

    #[test]
    fn test_write_hello_keeps_unicode_and_spaces() {
        let mut out = Vec::new();
        write_hello(&mut out, "  Zoë 世界 ").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello,   Zoë 世界 !\n");
    }

    #[test]
    fn test_write_greetings() {
        let mut out = Vec::new();
        write_greetings(&mut out, "Alice").unwrap();
        assert_eq!(out, b"Greetings, Alice!\n");

        let mut out = Vec::new();
        write_greetings(&mut out, "").unwrap();
        assert_eq!(out, b"Greetings, !\n");
    }

    #[test]
    fn test_write_usage() {
        let mut err = Vec::new();
        write_usage(&mut err, "prog").unwrap();
        assert_eq!(err, b"Usage: prog <name>\n");
    }

    #[test]
    fn test_greet_never_fails() {
        greet("Alice");
        greet("");
    }

    #[test]
    fn test_write_hello_reports_io_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = write_hello(&mut Closed, "World").unwrap_err();
        assert!(matches!(err, crate::GreeterError::IoError(_)));
    }
}
