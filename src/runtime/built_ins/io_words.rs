use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Pop the top value and print it formatted per the current numeric base.
///
/// Signature: `value -- `
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.print_number(value)
}

/// Print the stack depth and the stack's contents from the bottom up, without disturbing
/// them.  The contents are always printed in decimal.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let contents: Vec<String> = interpreter.stack().iter().map(i64::to_string).collect();
    let terminator = if interpreter.newline_suppressed() { " " } else { "\n" };

    let text = format!(
        "<{}> {}{}",
        interpreter.stack().len(),
        contents.join(" "),
        terminator
    );

    interpreter.print_text(&text)
}

/// Register the printing words.
pub fn register_io_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ".",
        word_print,
        "Pop the top value and print it formatted per the current numeric base.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        ".s",
        word_print_stack,
        "Print the stack depth and contents without disturbing them.",
        " -- "
    );
}
