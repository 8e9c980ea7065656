use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};

pub type Result<T> = std::result::Result<T, ScriptError>;

/// Any error that occurs during the execution of a script.
///
/// Every one of these errors is local to the line of input that raised it.  The interpreter
/// reports the error as a single line of text on its output stream, abandons the rest of the
/// offending line and stays live for the next one.  The stack, the dictionary, and the mode
/// flags are left exactly as the already executed tokens committed them.
#[derive(Clone)]
pub struct ScriptError {
    /// The description of the error.
    error: String,
}

impl Error for ScriptError {}

/// Pretty print the ScriptError.  This is the exact text reported to the user, so the
/// formatting here is part of the language's observable output.
impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Debug for ScriptError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ScriptError {
    /// Create a new ScriptError.
    pub fn new(error: String) -> ScriptError {
        ScriptError { error }
    }

    /// Create a new ScriptError and wrap it in a Result::Err.
    pub fn new_as_result<T>(error: String) -> Result<T> {
        Err(ScriptError::new(error))
    }

    /// The description of the error.
    pub fn error(&self) -> &String {
        &self.error
    }
}

/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError {
    fn from(error: std::io::Error) -> ScriptError {
        ScriptError::new(format!("I/O error: {}", error))
    }
}

/// A convenience function for creating a ScriptError and wrapping it in a Result::Err.
pub fn script_error<T>(message: String) -> Result<T> {
    ScriptError::new_as_result(message)
}

pub fn script_error_str<T>(message: &str) -> Result<T> {
    script_error(message.to_string())
}
