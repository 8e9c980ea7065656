use bootforth::runtime::{
    built_ins::register_base_words,
    error,
    interpreter::{CodeManagement, forth_interpreter::ForthInterpreter},
};
use clap::Parser;
use std::io::{BufRead, stdin};

#[derive(Parser)]
#[command(name = "bootforth", version)]
/// A small interactive Forth-style interpreter.
///
/// With no arguments, lines are read from standard input until end of input.  With a script
/// argument the file is executed line by line in batch mode, where printed results are
/// separated by spaces instead of newlines.
struct CliArgs {
    /// Source file to execute.  Reads interactively from standard input when omitted.
    script: Option<String>,
}

fn main() -> error::Result<()> {
    let args = CliArgs::parse();

    // Create the core instance of the interpreter and register the built-in vocabulary.
    let mut interpreter = ForthInterpreter::new();

    register_base_words(&mut interpreter);

    if let Some(path) = &args.script {
        // A script was given, execute it in batch mode.
        interpreter.process_source_file(path)?;
    } else {
        // Interactive usage.  Each line is dispatched as it arrives, and errors only ever
        // abandon the line that raised them, so we keep reading until end of input.
        let stdin = stdin();
        let mut input = stdin.lock();
        let mut line = String::new();

        loop {
            line.clear();

            if input.read_line(&mut line)? == 0 {
                break;
            }

            if line.ends_with('\n') {
                line.pop();
            }

            interpreter.process_line(&line);
        }
    }

    Ok(())
}
