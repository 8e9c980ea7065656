use crate::runtime::{data_structures::dictionary::WordInfo, error};
use std::rc::Rc;

pub mod forth_interpreter;

/// The operand stack of signed machine integers managed by the interpreter.
pub type OperandStack = Vec<i64>;

/// Definition of a word handler function.  This is the function that is called when a native
/// word is to be executed.  Can be a lambda, a callable object or a Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Definition of an infix word handler function.  Infix words consume the next raw token of
/// the input as their argument instead of operating on the operand stack.
pub type InfixHandler = dyn Fn(&mut dyn Interpreter, &str) -> error::Result<()>;

/// What should happen to the rest of the token stream after a token has been processed?
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenOutcome {
    /// Keep going with the next token.
    Continue,

    /// Stop processing the remaining tokens of the current line or word body.  This is the
    /// normal outcome of the `\` line comment, not an error.
    EndOfLine,
}

/// Trait for managing the interpreter's operand stack.  Intended to be called by words, both
/// native and user defined.
pub trait InterpreterStack {
    /// Use to examine the full operand stack when required.  One example is the stack dump
    /// word `.s`.
    fn stack(&self) -> &OperandStack;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: i64);

    /// Pop a value from the stack.  This is the primary way of receiving outputs from words.
    /// If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<i64>;

    /// Copy the value at the given index, where 0 is the top of the stack.  An out of range
    /// index is reported as a stack underflow error.
    fn pick(&self, index: usize) -> error::Result<i64>;

    /// Remove and return the value at the given index, where 0 is the top of the stack.  An
    /// out of range index is reported as a stack underflow error.
    fn take(&mut self, index: usize) -> error::Result<i64>;
}

/// Trait for reading and updating the interpreter's mode flags.
///
/// The conditional words flip the dead-branch flag, `hex` changes the numeric base, and the
/// file executor sets the newline suppression flag.  Everything else only reads them.
pub trait ModeManagement {
    /// The radix used to parse numeric literals and to format numeric output.
    fn numeric_base(&self) -> u32;

    /// Change the radix used to parse numeric literals and to format numeric output.
    fn set_numeric_base(&mut self, base: u32);

    /// Are we currently discarding tokens because a conditional evaluated false?
    fn dead_branch(&self) -> bool;

    /// Enter or leave the non-executing branch of a conditional.
    fn set_dead_branch(&mut self, flag: bool);

    /// Should printing words terminate their output with a space instead of a newline?
    /// This is set while executing file input so that batch results run together on one
    /// line.
    fn newline_suppressed(&self) -> bool;

    /// Switch the output terminator used by the printing words.
    fn set_newline_suppressed(&mut self, flag: bool);
}

/// Trait for writing to the interpreter's output stream.
///
/// All output of the language goes through this sink, error reports included.  The sink is
/// standard output by default but tests substitute an in-memory buffer to check the printed
/// bytes exactly.
pub trait InterpreterOutput {
    /// Write raw text to the output stream.
    fn print_text(&mut self, text: &str) -> error::Result<()>;

    /// Write a number formatted per the current numeric base, followed by the current line
    /// terminator.  Base 16 formats as at least two lowercase hex digits, base 10 as signed
    /// decimal.
    fn print_number(&mut self, value: i64) -> error::Result<()>;
}

/// Trait for managing the words known to the interpreter.
pub trait WordManagement {
    /// Add a new native word to the interpreter's dictionary.
    fn add_word(
        &mut self,
        name: String,
        handler: Rc<WordHandler>,
        description: String,
        signature: String,
    );

    /// Add a new infix word.  Infix words live beside the dictionary and consume the next
    /// raw token of the input as their argument.
    fn add_infix_word(&mut self, name: String, handler: Rc<InfixHandler>);

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, name: &str) -> Option<&WordInfo>;

    /// Is the name registered as an infix word?  Infix words have no dictionary entry, but
    /// they are still part of the known vocabulary and listable as opaque code.
    fn is_infix_word(&self, name: &str) -> bool;
}

/// Trait for feeding source code through the interpreter.
pub trait CodeManagement {
    /// Process a single token through the mode-aware decision chain.  Reports whether the
    /// rest of the current token stream should still be processed.
    fn process_token(&mut self, token: &str) -> error::Result<TokenOutcome>;

    /// Process one logical line of input.  The line is tokenized and each token dispatched
    /// in order.  Errors are reported on the output stream and abandon the rest of the line,
    /// they are never returned to the caller because the interpreter stays live.
    fn process_line(&mut self, line: &str);

    /// Read a file and feed each of its lines through the dispatcher sequentially, exactly
    /// as if they had been typed at the interactive prompt.  Sets the newline suppression
    /// flag for batch-mode output formatting.  Fails if the file can not be read.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;
}

/// Core interpreter trait.
///
/// This trait brings together the traits that define the core functionality of the
/// interpreter: the operand stack, the mode flags, the output sink, the word dictionary, and
/// the token dispatcher.
///
/// A single interpreter instance is not safe for concurrent calls from multiple threads.
/// Every operation runs to completion before the next token is processed, and there are no
/// suspension points.  Create one engine per thread, or synchronize externally.
pub trait Interpreter:
    InterpreterStack + ModeManagement + InterpreterOutput + WordManagement + CodeManagement
{
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word
/// to register.  The word function handler to execute for the word.  A simple description of
/// the word.  As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_word(
            $name.to_string(),
            Rc::new($function),
            $description.to_string(),
            $signature.to_string(),
        );
    }};
}

/// Simplify registering an infix word with the interpreter.  That is, a word that consumes
/// the next raw token of the input as its argument instead of the stack.
#[macro_export]
macro_rules! add_infix_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_infix_word($name.to_string(), Rc::new($function));
    }};
}
