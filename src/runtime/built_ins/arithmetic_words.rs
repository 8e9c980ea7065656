use crate::{
    add_native_word,
    runtime::{
        error::{self, script_error_str},
        interpreter::Interpreter,
    },
};

/// Add the top two values.  Results wrap on overflow, machine-integer style.
///
/// Signature: `a b -- a+b`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(a.wrapping_add(b));

    Ok(())
}

/// Subtract the top value from the second value.  Results wrap on overflow.
///
/// Signature: `a b -- a-b`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(a.wrapping_sub(b));

    Ok(())
}

/// Multiply the top two values.  Results wrap on overflow.
///
/// Signature: `a b -- a*b`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(a.wrapping_mul(b));

    Ok(())
}

/// Pop the divisor and then the dividend, and push the flooring integer quotient, rounded
/// toward negative infinity.
///
/// Signature: `dividend divisor -- quotient`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let divisor = interpreter.pop()?;
    let dividend = interpreter.pop()?;

    if divisor == 0 {
        return script_error_str("division by zero");
    }

    // Wrapping division so that i64::MIN divided by -1 yields i64::MIN instead of
    // overflowing.  The remainder is zero in that case, so no floor adjustment follows.
    let quotient = dividend.wrapping_div(divisor);
    let remainder = dividend.wrapping_rem(divisor);

    // Machine division truncates toward zero, so step the quotient down whenever the
    // remainder and the divisor disagree in sign.
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        interpreter.push(quotient - 1);
    } else {
        interpreter.push(quotient);
    }

    Ok(())
}

/// Compare the top two values for equality.  True is -1, false is 0.
///
/// Signature: `a b -- flag`
fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(if a == b { -1 } else { 0 });

    Ok(())
}

/// Compare the top two values for inequality.  True is -1, false is 0.
///
/// Signature: `a b -- flag`
fn word_not_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(if a != b { -1 } else { 0 });

    Ok(())
}

/// Is the second value from the top greater than the top value?  True is -1, false is 0.
///
/// Signature: `a b -- flag`
fn word_greater(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(if a > b { -1 } else { 0 });

    Ok(())
}

/// Register the arithmetic and comparison words.
pub fn register_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "+",
        word_add,
        "Add the top two values.",
        "a b -- a+b"
    );

    add_native_word!(
        interpreter,
        "-",
        word_subtract,
        "Subtract the top value from the second value.",
        "a b -- a-b"
    );

    add_native_word!(
        interpreter,
        "*",
        word_multiply,
        "Multiply the top two values.",
        "a b -- a*b"
    );

    add_native_word!(
        interpreter,
        "/",
        word_divide,
        "Divide the second value by the top value, flooring the quotient.",
        "dividend divisor -- quotient"
    );

    add_native_word!(
        interpreter,
        "=",
        word_equal,
        "Compare the top two values for equality.",
        "a b -- flag"
    );

    add_native_word!(
        interpreter,
        "<>",
        word_not_equal,
        "Compare the top two values for inequality.",
        "a b -- flag"
    );

    add_native_word!(
        interpreter,
        ">",
        word_greater,
        "Is the second value from the top greater than the top value?",
        "a b -- flag"
    );
}
