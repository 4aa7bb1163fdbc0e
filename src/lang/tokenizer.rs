use super::{token::*, Offset};

/// Longest digit run accepted as a number.
pub const MAX_NUMLEN: usize = 6;

fn is_ubasic_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\n' || ch == b'\r'
}

/// ## Scan position
///
/// Resuming from a saved mark reproduces exactly the token stream
/// that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(Offset);

impl Mark {
    pub fn offset(&self) -> Offset {
        self.0
    }
}

/// ## Two cursor tokenizer
///
/// Only the current token and the start of the next one exist.
/// Everything else is recomputed from the program text on demand.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a [u8],
    ptr: Offset,
    next_ptr: Offset,
    token: Token,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a [u8]) -> Tokenizer<'a> {
        let mut tokenizer = Tokenizer {
            text,
            ptr: 0,
            next_ptr: 0,
            token: Token::Error,
        };
        tokenizer.init(text);
        tokenizer
    }

    pub fn init(&mut self, text: &'a [u8]) {
        self.text = text;
        self.ptr = 0;
        self.next_ptr = 0;
        self.token = Token::Error;
        self.scan_from(0);
    }

    pub fn token(&self) -> Token {
        self.token
    }

    /// Byte offset of the current token.
    pub fn offset(&self) -> Offset {
        self.ptr
    }

    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.scan_from(self.next_ptr);
    }

    pub fn is_finished(&self) -> bool {
        self.byte_at(self.ptr) == 0 || self.token == Token::EndOfInput
    }

    pub fn position(&self) -> Mark {
        Mark(self.ptr)
    }

    pub fn set_position(&mut self, mark: Mark) {
        self.ptr = mark.0;
        self.token = self.next_token();
    }

    /// Value of the current `Number` token.
    pub fn number(&self) -> u32 {
        debug_assert_eq!(self.token, Token::Number);
        self.text[self.ptr..self.next_ptr]
            .iter()
            .fold(0, |n, digit| n * 10 + u32::from(digit - b'0'))
    }

    /// Index of the current `Variable` token, 0 for `a` through 25 for `z`.
    pub fn variable_index(&self) -> usize {
        debug_assert_eq!(self.token, Token::Variable);
        usize::from(self.byte_at(self.ptr).wrapping_sub(b'a'))
    }

    /// Contents of the current `String` token without the quotes,
    /// truncated to at most `max_len` bytes on a character boundary.
    pub fn string(&self, max_len: usize) -> String {
        if self.token != Token::String {
            return String::new();
        }
        let start = self.ptr + 1;
        let close = self.next_ptr.saturating_sub(1).max(start);
        let mut end = close.min(start + max_len);
        while end > start && end < close && self.text[end] & 0xC0 == 0x80 {
            end -= 1;
        }
        String::from_utf8_lossy(&self.text[start..end]).into_owned()
    }

    fn scan_from(&mut self, offset: Offset) {
        self.ptr = offset;
        while is_ubasic_whitespace(self.byte_at(self.ptr)) {
            self.ptr += 1;
        }
        self.token = self.next_token();
        log::trace!("token {:?} at {}", self.token, self.ptr);
    }

    fn byte_at(&self, offset: Offset) -> u8 {
        self.text.get(offset).copied().unwrap_or(0)
    }

    /// Classifies the text at `ptr` and moves `next_ptr` past it.
    fn next_token(&mut self) -> Token {
        let ch = self.byte_at(self.ptr);
        if ch == 0 {
            self.next_ptr = self.ptr;
            return Token::EndOfInput;
        }
        // Error tokens are one byte wide so a scan can always move on.
        self.next_ptr = self.ptr + 1;
        if ch.is_ascii_digit() {
            return self.number_token();
        }
        if let Some(token) = Token::from_byte(ch) {
            return token;
        }
        if ch == b'\'' {
            return self.string_token();
        }
        if let Some((word, len)) = Token::keyword(&self.text[self.ptr..]) {
            self.next_ptr = self.ptr + len;
            return Token::Word(word);
        }
        if ch.is_ascii_lowercase() {
            return Token::Variable;
        }
        Token::Error
    }

    fn number_token(&mut self) -> Token {
        let len = (self.ptr..)
            .take_while(|&i| self.byte_at(i).is_ascii_digit())
            .count();
        if len > MAX_NUMLEN {
            return Token::Error;
        }
        self.next_ptr = self.ptr + len;
        Token::Number
    }

    fn string_token(&mut self) -> Token {
        let start = self.ptr + 1;
        let close = (start..)
            .take_while(|&i| self.byte_at(i) != 0)
            .find(|&i| self.byte_at(i) == b'\'');
        match close {
            Some(close) => {
                self.next_ptr = close + 1;
                Token::String
            }
            None => Token::Error,
        }
    }
}
