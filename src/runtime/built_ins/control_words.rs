use crate::{
    add_native_word,
    runtime::{
        error,
        interpreter::Interpreter,
    },
};

/// Pop a condition and enter the non-executing branch when it is zero.  The tokens that
/// follow are then discarded until the matching `else` or `then`.
///
/// Signature: `condition -- `
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let condition = interpreter.pop()?;

    if condition == 0 {
        interpreter.set_dead_branch(true);
    }

    Ok(())
}

/// Toggle the branch flag, so whichever arm of the conditional was executing stops and the
/// other one starts.  The flag is flat, nested conditionals share it.
///
/// Signature: ` -- `
fn word_else(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let flag = interpreter.dead_branch();
    interpreter.set_dead_branch(!flag);

    Ok(())
}

/// Close a conditional, unconditionally resuming execution.
///
/// Signature: ` -- `
fn word_then(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.set_dead_branch(false);

    Ok(())
}

/// Switch the numeric base to 16 for both literal parsing and printed output.
///
/// Signature: ` -- `
fn word_hex(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.set_numeric_base(16);

    Ok(())
}

/// Register the conditional and interpreter state words.
pub fn register_control_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "if",
        word_if,
        "Pop a condition and skip to the matching else or then when it is zero.",
        "condition -- "
    );

    add_native_word!(
        interpreter,
        "else",
        word_else,
        "Switch between the arms of a conditional.",
        " -- "
    );

    add_native_word!(
        interpreter,
        "then",
        word_then,
        "Close a conditional.",
        " -- "
    );

    add_native_word!(
        interpreter,
        "hex",
        word_hex,
        "Switch the numeric base to 16.",
        " -- "
    );
}
