/*!
# Rust Language Module

This Rust module provides lexical analysis of the ubasic+ language.
Programs are never parsed into a tree. The interpreter pulls one token
at a time from a [`Tokenizer`](struct.Tokenizer.html) and rewinds it to a
saved [`Mark`](struct.Mark.html) to repeat a loop.

*/

/// Byte offset into a program text.
pub type Offset = usize;

#[macro_use]
mod error;
mod tokenizer;

pub use error::Error;
pub use error::ErrorCode;
pub use tokenizer::Mark;
pub use tokenizer::Tokenizer;
pub use tokenizer::MAX_NUMLEN;

pub mod token;

#[cfg(test)]
mod tests;
