/// Words that manipulate the operand stack.
mod stack_words;

/// Arithmetic and comparison words.
mod arithmetic_words;

/// Conditional and interpreter state words.
mod control_words;

/// Words that print to the output stream.
mod io_words;

/// Infix words that consume the next raw token of the input instead of the stack.
mod meta_words;

use crate::runtime::{
    built_ins::{
        arithmetic_words::register_arithmetic_words, control_words::register_control_words,
        io_words::register_io_words, meta_words::register_meta_words,
        stack_words::register_stack_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_arithmetic_words(interpreter);
    register_control_words(interpreter);
    register_io_words(interpreter);
    register_meta_words(interpreter);
}
