/// Keywords in lookup order. The first entry that prefixes the scan
/// position wins, so every word must come before any shorter entry
/// that is a prefix of it.
const KEYWORDS: &[(&str, Word)] = &[
    ("if", Word::If),
    ("else", Word::Else),
    ("for", Word::For),
    ("tone", Word::Note),
    ("text", Word::Display),
    ("to", Word::To),
    ("end", Word::End),
    ("while", Word::While),
    ("rem", Word::Rem),
    ("#", Word::Rem),
    ("wait", Word::Wait),
    ("wa", Word::Wait),
    ("leds", Word::Leds),
    ("le", Word::Leds),
    ("motors", Word::Motors),
    ("move", Word::Move),
    ("mo", Word::Motors),
    ("speed", Word::Speed),
    ("sp", Word::Speed),
    ("display", Word::Display),
    ("di", Word::Display),
    ("print", Word::Print),
    ("pr", Word::Print),
    ("sense", Word::Sense),
    ("se", Word::Sense),
    ("read", Word::Read),
    ("re", Word::Read),
    ("note", Word::Note),
    ("no", Word::Note),
    ("turn", Word::Turn),
    ("cal", Word::Cal),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Error,
    EndOfInput,
    Number,
    String,
    Variable,
    Word(Word),
    Operator(Operator),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    /// Statement terminator.
    Semicolon,
}

impl Token {
    /// Single character tokens, one byte consumed.
    pub fn from_byte(ch: u8) -> Option<Token> {
        use Operator::*;
        Some(match ch {
            b';' => Token::Semicolon,
            b',' => Token::Comma,
            b'+' => Token::Operator(Plus),
            b'-' => Token::Operator(Minus),
            b'&' => Token::Operator(And),
            b'|' => Token::Operator(Or),
            b'*' => Token::Operator(Multiply),
            b'/' => Token::Operator(Divide),
            b'%' => Token::Operator(Modulus),
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b'<' => Token::Operator(Less),
            b'>' => Token::Operator(Greater),
            b'=' => Token::Operator(Equal),
            _ => return None,
        })
    }

    /// Matches the keyword table against the start of `text`.
    /// Returns the word and the length of the matched spelling.
    pub fn keyword(text: &[u8]) -> Option<(Word, usize)> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| text.starts_with(spelling.as_bytes()))
            .map(|(spelling, word)| (*word, spelling.len()))
    }

    /// Ends a statement without being part of it. Only `;` is consumed
    /// by the statement itself; the others belong to the enclosing block.
    pub fn is_terminator(&self) -> bool {
        match self {
            Token::Semicolon | Token::RBrace | Token::EndOfInput => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Error => write!(f, "?"),
            EndOfInput => write!(f, "END OF PROGRAM"),
            Number => write!(f, "NUMBER"),
            String => write!(f, "STRING"),
            Variable => write!(f, "VARIABLE"),
            Word(w) => write!(f, "{}", w),
            Operator(o) => write!(f, "{}", o),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBrace => write!(f, "{{"),
            RBrace => write!(f, "}}"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    If,
    Else,
    For,
    To,
    End,
    While,
    Rem,
    Wait,
    Leds,
    Motors,
    Speed,
    Display,
    Print,
    Sense,
    Read,
    Note,
    Move,
    Turn,
    Cal,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            If => write!(f, "if"),
            Else => write!(f, "else"),
            For => write!(f, "for"),
            To => write!(f, "to"),
            End => write!(f, "end"),
            While => write!(f, "while"),
            Rem => write!(f, "rem"),
            Wait => write!(f, "wait"),
            Leds => write!(f, "leds"),
            Motors => write!(f, "motors"),
            Speed => write!(f, "speed"),
            Display => write!(f, "display"),
            Print => write!(f, "print"),
            Sense => write!(f, "sense"),
            Read => write!(f, "read"),
            Note => write!(f, "note"),
            Move => write!(f, "move"),
            Turn => write!(f, "turn"),
            Cal => write!(f, "cal"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    And,
    Or,
    Multiply,
    Divide,
    Modulus,
    Less,
    Greater,
    Equal,
}

impl Operator {
    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Less | Greater | Equal => true,
            _ => false,
        }
    }

    pub fn is_additive(&self) -> bool {
        use Operator::*;
        match self {
            Plus | Minus | And | Or => true,
            _ => false,
        }
    }

    pub fn is_multiplicative(&self) -> bool {
        use Operator::*;
        match self {
            Multiply | Divide | Modulus => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            And => write!(f, "&"),
            Or => write!(f, "|"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Equal => write!(f, "="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword() {
        assert_eq!(Token::keyword(b"rem x"), Some((Word::Rem, 3)));
        assert_eq!(Token::keyword(b"re 0 a"), Some((Word::Read, 2)));
        assert_eq!(Token::keyword(b"pickles"), None);
    }

    #[test]
    fn test_longer_words_first() {
        assert_eq!(Token::keyword(b"tone 1 2"), Some((Word::Note, 4)));
        assert_eq!(Token::keyword(b"to 3"), Some((Word::To, 2)));
        assert_eq!(Token::keyword(b"move 10"), Some((Word::Move, 4)));
        assert_eq!(Token::keyword(b"mo 1 1"), Some((Word::Motors, 2)));
    }

    #[test]
    fn test_no_entry_shadowed() {
        for (index, (spelling, _)) in KEYWORDS.iter().enumerate() {
            for (earlier, _) in &KEYWORDS[..index] {
                assert!(
                    !spelling.starts_with(earlier),
                    "{} is shadowed by {}",
                    spelling,
                    earlier
                );
            }
        }
    }
}
