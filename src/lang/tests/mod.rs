use super::token::*;
use super::*;

mod mark_test;

fn tokens(s: &str) -> Vec<Token> {
    let mut t = Tokenizer::new(s.as_bytes());
    let mut v = vec![];
    while t.token() != Token::EndOfInput {
        v.push(t.token());
        t.advance();
    }
    v
}
