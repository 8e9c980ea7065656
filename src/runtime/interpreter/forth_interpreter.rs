use crate::{
    lang::tokenizing::tokenize_line,
    runtime::{
        data_structures::dictionary::{Dictionary, WordCode, WordInfo},
        error::{self, script_error, script_error_str},
        interpreter::{
            CodeManagement, InfixHandler, Interpreter, InterpreterOutput, InterpreterStack,
            ModeManagement, OperandStack, TokenOutcome, WordHandler, WordManagement,
        },
    },
};
use std::{
    cell::RefCell,
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Write, stdout},
    rc::Rc,
};

/// One-shot state machine for the infix words.
///
/// When a token names an infix word the machine arms itself with that word's handler, and
/// the very next raw token is handed to the handler as its argument.  The machine is reset
/// before the handler runs, otherwise a nested `include` would swallow the first token of
/// the included file as a stray argument.
enum InfixState {
    /// No infix word is waiting for an argument.
    Idle,

    /// The named infix word has been seen and the next raw token belongs to it.
    AwaitingArgument(Rc<InfixHandler>),
}

/// The core interpreter implementation.
///
/// All of the interpreter's state lives here as plain fields: the operand stack, the word
/// dictionary, and the mode flags that drive the token dispatcher.  Nothing is ambient or
/// global, so independent engines can coexist within a process.  A single engine is not
/// safe for concurrent use from multiple threads.
pub struct ForthInterpreter {
    /// The operand stack used by the interpreter.
    stack: OperandStack,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// The table of infix words.  These are kept apart from the dictionary because their
    /// handlers consume the next raw input token instead of the stack.
    infix_words: HashMap<String, Rc<InfixHandler>>,

    /// Are tokens currently being appended to a new definition instead of executed?
    compiling: bool,

    /// The name of the definition under construction.  Unset while `compiling` is true but
    /// the name token has not been read yet.
    compiling_symbol: Option<String>,

    /// Is the tokenizer currently inside a `( ... )` comment?  Reset at the start of every
    /// line.
    in_comment: bool,

    /// Are tokens being discarded because a conditional evaluated false?
    dead_branch: bool,

    /// The infix one-shot state machine.
    infix_state: InfixState,

    /// The radix used to parse numeric literals and to format numeric output.
    numeric_base: u32,

    /// Terminate printed results with a space instead of a newline.  Set while executing
    /// file input, so batch results run together on one line.
    suppress_newline: bool,

    /// The output stream shared by every printing word and by the error reporting.
    output: Rc<RefCell<dyn Write>>,
}

impl Default for ForthInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForthInterpreter {
    /// Create a new interpreter writing to standard output.
    pub fn new() -> ForthInterpreter {
        ForthInterpreter::with_output(Rc::new(RefCell::new(stdout())))
    }

    /// Create a new interpreter writing to the given sink.  Used by the tests to capture
    /// and examine the exact bytes the language prints.
    pub fn with_output(output: Rc<RefCell<dyn Write>>) -> ForthInterpreter {
        ForthInterpreter {
            stack: OperandStack::new(),
            dictionary: Dictionary::new(),
            infix_words: HashMap::new(),
            compiling: false,
            compiling_symbol: None,
            in_comment: false,
            dead_branch: false,
            infix_state: InfixState::Idle,
            numeric_base: 10,
            suppress_newline: false,
            output,
        }
    }

    /// Execute the stored body of a compiled word.
    ///
    /// The body's tokens are re-dispatched through the full decision chain using the
    /// current global mode state, so a nested `:` inside a body legally begins a fresh
    /// definition, and a `\` comments out the rest of the body without ending the invoking
    /// line.
    fn execute_compiled(&mut self, tokens: &[String]) -> error::Result<()> {
        for token in tokens {
            if let TokenOutcome::EndOfLine = self.process_token(token)? {
                break;
            }
        }

        Ok(())
    }
}

impl Interpreter for ForthInterpreter {}

impl InterpreterStack for ForthInterpreter {
    fn stack(&self) -> &OperandStack {
        &self.stack
    }

    fn push(&mut self, value: i64) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<i64> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None => script_error_str("empty stack"),
        }
    }

    fn pick(&self, index: usize) -> error::Result<i64> {
        if index >= self.stack.len() {
            return script_error_str("empty stack");
        }

        Ok(self.stack[self.stack.len() - 1 - index])
    }

    fn take(&mut self, index: usize) -> error::Result<i64> {
        if index >= self.stack.len() {
            return script_error_str("empty stack");
        }

        let position = self.stack.len() - 1 - index;
        Ok(self.stack.remove(position))
    }
}

impl ModeManagement for ForthInterpreter {
    fn numeric_base(&self) -> u32 {
        self.numeric_base
    }

    fn set_numeric_base(&mut self, base: u32) {
        self.numeric_base = base;
    }

    fn dead_branch(&self) -> bool {
        self.dead_branch
    }

    fn set_dead_branch(&mut self, flag: bool) {
        self.dead_branch = flag;
    }

    fn newline_suppressed(&self) -> bool {
        self.suppress_newline
    }

    fn set_newline_suppressed(&mut self, flag: bool) {
        self.suppress_newline = flag;
    }
}

impl InterpreterOutput for ForthInterpreter {
    fn print_text(&mut self, text: &str) -> error::Result<()> {
        let mut output = self.output.borrow_mut();

        output.write_all(text.as_bytes())?;

        // Suppressed-newline output leaves partial lines behind, so flush every write.
        output.flush()?;

        Ok(())
    }

    fn print_number(&mut self, value: i64) -> error::Result<()> {
        let text = if self.numeric_base == 16 {
            format!("{:02x}", value)
        } else {
            value.to_string()
        };

        let terminator = if self.suppress_newline { " " } else { "\n" };

        self.print_text(&format!("{}{}", text, terminator))
    }
}

impl WordManagement for ForthInterpreter {
    fn add_word(
        &mut self,
        name: String,
        handler: Rc<WordHandler>,
        description: String,
        signature: String,
    ) {
        let info = WordInfo::new_native(name.clone(), handler, description, signature);
        self.dictionary.insert(name, info);
    }

    fn add_infix_word(&mut self, name: String, handler: Rc<InfixHandler>) {
        let _ = self.infix_words.insert(name, handler);
    }

    fn find_word(&self, name: &str) -> Option<&WordInfo> {
        self.dictionary.try_get(name)
    }

    fn is_infix_word(&self, name: &str) -> bool {
        self.infix_words.contains_key(name)
    }
}

impl CodeManagement for ForthInterpreter {
    fn process_token(&mut self, token: &str) -> error::Result<TokenOutcome> {
        // Runs of separators produce empty tokens, which mean nothing.
        if token.is_empty() {
            return Ok(TokenOutcome::Continue);
        }

        // ( comments ) come ahead of everything else, so a comment inside a dead branch
        // or a definition still consumes its tokens.
        if self.in_comment {
            if token == ")" {
                self.in_comment = false;
            }

            return Ok(TokenOutcome::Continue);
        } else if token == "(" {
            self.in_comment = true;
            return Ok(TokenOutcome::Continue);
        }

        // The non-executing part of a conditional discards everything except the words
        // that can close it, which must still run.
        if self.dead_branch && token != "else" && token != "then" {
            return Ok(TokenOutcome::Continue);
        }

        // Resolve the infix state machine before compile handling, so an armed infix word
        // always owns the very next raw token.
        match std::mem::replace(&mut self.infix_state, InfixState::Idle) {
            InfixState::AwaitingArgument(handler) => {
                (*handler)(self, token)?;
                return Ok(TokenOutcome::Continue);
            }

            InfixState::Idle => {
                if let Some(handler) = self.infix_words.get(token) {
                    self.infix_state = InfixState::AwaitingArgument(handler.clone());
                    return Ok(TokenOutcome::Continue);
                }
            }
        }

        // Handle compiling tokens, : <symbol> <tokens> ;
        if self.compiling {
            if token == ";" {
                self.compiling = false;
                self.compiling_symbol = None;
            } else if let Some(name) = &self.compiling_symbol {
                self.dictionary.append_token(name, token);
            } else {
                // The first token after : names the definition and installs an empty
                // body, replacing any previous word of that name.
                self.compiling_symbol = Some(token.to_string());
                self.dictionary
                    .insert(token.to_string(), WordInfo::new_compiled(token.to_string()));
            }

            return Ok(TokenOutcome::Continue);
        } else if token == ":" {
            self.compiling = true;
            return Ok(TokenOutcome::Continue);
        }

        // A number, push it.  A failed parse is not an error, the token simply falls
        // through to the dictionary lookup.
        if let Ok(number) = i64::from_str_radix(token, self.numeric_base) {
            self.push(number);
            return Ok(TokenOutcome::Continue);
        }

        // Line comment, discard all the rest of the tokens in the stream.
        if token == "\\" {
            return Ok(TokenOutcome::EndOfLine);
        }

        // If it is not a number or a control token, it needs to be a known symbol.
        let word = match self.dictionary.try_get(token) {
            Some(info) => info.clone(),
            None => return script_error(format!("symbol '{}' not defined", token)),
        };

        match &word.code {
            WordCode::Compiled(tokens) => self.execute_compiled(tokens)?,
            WordCode::Native(handler) => (*handler)(self)?,
        }

        Ok(TokenOutcome::Continue)
    }

    fn process_line(&mut self, line: &str) {
        // A comment never spans lines.
        self.in_comment = false;

        for token in tokenize_line(line) {
            match self.process_token(token) {
                Ok(TokenOutcome::Continue) => {}

                Ok(TokenOutcome::EndOfLine) => break,

                Err(error) => {
                    // Errors land on the same stream as regular output.  If the sink
                    // itself is failing there is nowhere left to report to.
                    let _ = self.print_text(&format!("{}\n", error));
                    break;
                }
            }
        }
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => return script_error(format!("could not open {}: {}", path, err)),
        };

        let mut reader = BufReader::new(file);
        let mut line = String::new();

        loop {
            line.clear();

            if reader.read_line(&mut line)? == 0 {
                break;
            }

            // Batch output drops the automatic newline after each printed result.  The
            // flag is sticky on purpose, output stays in batch form for the rest of the
            // session once a file has been executed.
            self.set_newline_suppressed(true);

            // The line supplier strips exactly one trailing newline, everything else in
            // the line passes through untouched.
            if line.ends_with('\n') {
                line.pop();
            }

            self.process_line(&line);
        }

        Ok(())
    }
}
