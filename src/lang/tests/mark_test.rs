use super::*;

#[test]
fn test_set_position_of_position() {
    let text = b"for i=1 to 300 { print 'x', i; }";
    let mut t = Tokenizer::new(text);
    while !t.is_finished() {
        let token = t.token();
        let offset = t.offset();
        t.set_position(t.position());
        assert_eq!(t.token(), token);
        assert_eq!(t.offset(), offset);
        match token {
            Token::Number => {
                let n = t.number();
                t.set_position(t.position());
                assert_eq!(t.number(), n);
            }
            Token::Variable => assert_eq!(t.variable_index(), 8),
            Token::String => assert_eq!(t.string(40), "x"),
            _ => {}
        }
        t.advance();
    }
}

#[test]
fn test_rewind_replays_stream() {
    let mut t = Tokenizer::new(b"a=1; while a<3 { a=a+1 };");
    for _ in 0..5 {
        t.advance();
    }
    let mark = t.position();
    let mut first = vec![];
    while !t.is_finished() {
        first.push((t.token(), t.offset()));
        t.advance();
    }
    t.set_position(mark);
    let mut second = vec![];
    while !t.is_finished() {
        second.push((t.token(), t.offset()));
        t.advance();
    }
    assert_eq!(first, second);
}
