/// Module for turning one line of source code into a sequence of tokens for further
/// processing.
pub mod tokenizing;
