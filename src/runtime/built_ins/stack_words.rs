use crate::{
    add_native_word,
    runtime::{
        error::{self, script_error_str},
        interpreter::Interpreter,
    },
};

/// Duplicate the top value on the operand stack.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value);
    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the operand stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Swap the top 2 values on the operand stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Push a copy of the second value from the top.  Underflow leaves the stack untouched.
///
/// Signature: `a b -- a b a`
fn word_over(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pick(1)?;

    interpreter.push(a);

    Ok(())
}

/// Rotate the top 3 values, bringing the third from the top to the top.
///
/// Signature: `a b c -- b c a`
fn word_rot(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let c = interpreter.pop()?;
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(c);
    interpreter.push(a);

    Ok(())
}

/// Remove the second value from the top, keeping the top.  Underflow leaves the stack
/// untouched.
///
/// Signature: `a b -- b`
fn word_nip(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.take(1)?;

    Ok(())
}

/// Insert a copy of the top value just below the second value from the top.  Underflow
/// leaves the stack untouched.
///
/// Signature: `a b -- b a b`
fn word_tuck(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pick(0)?;
    let a = interpreter.take(1)?;

    interpreter.push(a);
    interpreter.push(b);

    Ok(())
}

/// Pop an index and push a copy of the value that many positions below the new top of the
/// stack, so `0 pick` duplicates the top.
///
/// Signature: `index -- picked-value`
fn word_pick(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter.pop()?;

    if index < 0 {
        return script_error_str("empty stack");
    }

    let value = interpreter.pick(index as usize)?;
    interpreter.push(value);

    Ok(())
}

/// Like `pick`, but the indexed value is also removed from its original position, so the
/// value moves to the top instead of being copied there.
///
/// Signature: `index -- rolled-value`
fn word_roll(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter.pop()?;

    if index < 0 {
        return script_error_str("empty stack");
    }

    let value = interpreter.take(index as usize)?;
    interpreter.push(value);

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "dup",
        word_dup,
        "Duplicate the top value on the operand stack.",
        "value -- value value"
    );

    add_native_word!(
        interpreter,
        "drop",
        word_drop,
        "Discard the top value on the operand stack.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        "swap",
        word_swap,
        "Swap the top 2 values on the operand stack.",
        "a b -- b a"
    );

    add_native_word!(
        interpreter,
        "over",
        word_over,
        "Push a copy of the second value from the top.",
        "a b -- a b a"
    );

    add_native_word!(
        interpreter,
        "rot",
        word_rot,
        "Rotate the top 3 values, bringing the third from the top to the top.",
        "a b c -- b c a"
    );

    add_native_word!(
        interpreter,
        "nip",
        word_nip,
        "Remove the second value from the top, keeping the top.",
        "a b -- b"
    );

    add_native_word!(
        interpreter,
        "tuck",
        word_tuck,
        "Insert a copy of the top value just below the second value from the top.",
        "a b -- b a b"
    );

    add_native_word!(
        interpreter,
        "pick",
        word_pick,
        "Copy the indexed value to the top of the stack, 0 being the top.",
        "index -- picked-value"
    );

    add_native_word!(
        interpreter,
        "roll",
        word_roll,
        "Move the indexed value to the top of the stack, 0 being the top.",
        "index -- rolled-value"
    );
}
