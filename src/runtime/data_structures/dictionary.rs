use crate::runtime::interpreter::WordHandler;
use std::{collections::HashMap, rc::Rc};

/// The executable part of a word in the dictionary.
///
/// Resolution between the two shapes happens with a pattern match at invocation time, never
/// earlier.  In particular a compiled sequence stores the raw token strings of its body, not
/// resolved references to other words.  The body is re-interpreted on every call, so
/// redefining a word that a body mentions changes what the body does on its next call.
#[derive(Clone)]
pub enum WordCode {
    /// A built-in word implemented as a native Rust handler.
    Native(Rc<WordHandler>),

    /// A user defined word stored as its literal constituent tokens.
    Compiled(Vec<String>),
}

/// The information stored in the word dictionary for each word.
#[derive(Clone)]
pub struct WordInfo {
    /// The name of the word.
    pub name: String,

    /// The executable behind the name.
    pub code: WordCode,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,
}

impl WordInfo {
    /// Create a new entry for a native word.
    pub fn new_native(
        name: String,
        handler: Rc<WordHandler>,
        description: String,
        signature: String,
    ) -> WordInfo {
        WordInfo {
            name,
            code: WordCode::Native(handler),
            description,
            signature,
        }
    }

    /// Create a new entry for a user defined word with an empty body.  Tokens are appended
    /// to the body as the definition is read.
    pub fn new_compiled(name: String) -> WordInfo {
        WordInfo {
            name: name.clone(),
            code: WordCode::Compiled(Vec::new()),
            description: String::new(),
            signature: String::new(),
        }
    }
}

/// The word dictionary used by the interpreter.
///
/// This is a single flat namespace of case-sensitive names.  Defining a name that already
/// exists silently replaces the previous word, and words are never deleted.
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a new word and its info into the dictionary, replacing any previous word of
    /// the same name.
    pub fn insert(&mut self, name: String, info: WordInfo) {
        let _ = self.words.insert(name, info);
    }

    /// Try to get a word from the dictionary.
    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(name)
    }

    /// Append a raw token to the body of the named word.  Does nothing if the name is
    /// missing or refers to a native word, which can not happen while a definition is being
    /// compiled.
    pub fn append_token(&mut self, name: &str, token: &str) {
        if let Some(info) = self.words.get_mut(name)
            && let WordCode::Compiled(tokens) = &mut info.code
        {
            tokens.push(token.to_string());
        }
    }
}
