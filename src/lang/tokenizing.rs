/// Check if the given character is considered whitespace.
fn is_whitespace(next: &char) -> bool {
    *next == ' ' || *next == '\t' || *next == '\r' || *next == '\n'
}

/// A lazy iterator over the whitespace-separated tokens of a single line of source code.
///
/// The tokenizer does no semantic interpretation of its own, it only yields the raw
/// substrings between separators, one per call.  Runs of separators produce empty tokens,
/// which are legal and expected to be skipped by the consumer of the token stream.  The
/// tokenizer only holds a reference to the line, the text is not copied and is expected to
/// outlive the tokenizer.
pub struct Tokenizer<'a> {
    /// The line of source code being split.
    line: &'a str,

    /// Byte offset of the start of the next token within the line.
    position: usize,

    /// Set once the last token of the line has been yielded.
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer over one line of source code.
    pub fn new(line: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            line,
            position: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        let rest = &self.line[self.position..];

        match rest.find(|next: char| is_whitespace(&next)) {
            Some(index) => {
                // All of the separator characters are a single byte wide, so we can step
                // past the separator by adding one to the index.
                let token = &rest[..index];

                self.position += index + 1;
                Some(token)
            }

            None => {
                self.finished = true;
                Some(rest)
            }
        }
    }
}

/// Tokenize one line of source code.
pub fn tokenize_line(line: &str) -> Tokenizer<'_> {
    Tokenizer::new(line)
}

#[cfg(test)]
mod tests {
    use super::tokenize_line;

    #[test]
    fn splits_on_whitespace() {
        let tokens: Vec<&str> = tokenize_line("1 2 +").collect();
        assert_eq!(tokens, vec!["1", "2", "+"]);
    }

    #[test]
    fn repeated_separators_yield_empty_tokens() {
        let tokens: Vec<&str> = tokenize_line("1  2").collect();
        assert_eq!(tokens, vec!["1", "", "2"]);
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        let tokens: Vec<&str> = tokenize_line(" dup ").collect();
        assert_eq!(tokens, vec!["", "dup", ""]);
    }

    #[test]
    fn tabs_are_separators() {
        let tokens: Vec<&str> = tokenize_line("1\t2").collect();
        assert_eq!(tokens, vec!["1", "2"]);
    }

    #[test]
    fn empty_line_yields_one_empty_token() {
        let tokens: Vec<&str> = tokenize_line("").collect();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn tokenizer_is_finite() {
        let mut tokens = tokenize_line("dup");

        assert_eq!(tokens.next(), Some("dup"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
