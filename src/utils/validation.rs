use crate::utils::error::{GreeterError, Result};

/// Returns the positional value, or the usage error for `program` when it is absent.
///
/// The value itself is never inspected: empty or arbitrary text passes.
pub fn validate_required_argument<T>(program: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| GreeterError::MissingArgument {
        program: program.to_string(),
    })
}
