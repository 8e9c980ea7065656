use crate::{
    add_infix_word,
    runtime::{
        data_structures::dictionary::WordCode,
        error::{self, script_error},
        interpreter::Interpreter,
    },
};

/// Show the definition of a word.  The word's name arrives as the next raw token of the
/// input, it is never evaluated and the operand stack is left untouched.
///
/// A user defined word is listed as `: name` followed by its stored body tokens and `;`.  A
/// native or infix word has no listable body, only an opaque-code marker.
fn word_see(interpreter: &mut dyn Interpreter, name: &str) -> error::Result<()> {
    let suppressed = interpreter.newline_suppressed();
    let terminator = if suppressed { "" } else { "\n" };

    let word = match interpreter.find_word(name) {
        Some(info) => info.clone(),

        None => {
            if interpreter.is_infix_word(name) {
                return interpreter.print_text(&format!("code {}{}", name, terminator));
            }

            return script_error(format!("symbol '{}' not defined", name));
        }
    };

    match &word.code {
        WordCode::Compiled(tokens) => {
            // Batch output may have a partial line pending, so open the listing on a
            // fresh line.
            if suppressed {
                interpreter.print_text("\n")?;
            }

            let text = format!(": {}  \n  {} ;{}", name, tokens.join(" "), terminator);
            interpreter.print_text(&text)
        }

        WordCode::Native(_) => interpreter.print_text(&format!("code {}{}", name, terminator)),
    }
}

/// Execute a source file.  The path arrives as the next raw token of the input.  Every line
/// of the file runs through the full dispatcher before the outer input stream resumes, and
/// all interpreter state is shared with it.
fn word_include(interpreter: &mut dyn Interpreter, path: &str) -> error::Result<()> {
    interpreter.process_source_file(path)
}

/// Register the infix words.
pub fn register_meta_words(interpreter: &mut dyn Interpreter) {
    add_infix_word!(interpreter, "see", word_see);
    add_infix_word!(interpreter, "include", word_include);
}
