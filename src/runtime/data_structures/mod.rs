/// The dictionary module provides the core word dictionary used by the interpreter.
pub mod dictionary;
