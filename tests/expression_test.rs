mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(exec("print 2 + 3 * 4"), "14\n");
    assert_eq!(exec("print (2 + 3) * 4"), "20\n");
    assert_eq!(exec("print 10 % 3"), "1\n");
    assert_eq!(exec("print 1 < 2 = 1"), "1\n");
    assert_eq!(exec("print 8 - 2 - 1, 16 / 4 / 2"), "5 2\n");
}

#[test]
fn test_relations() {
    assert_eq!(exec("print 1 < 2, 2 < 1, 3 > 2, 2 = 2, 2 = 3"), "1 0 1 1 0\n");
    assert_eq!(exec("print 1 + 1 = 2"), "1\n");
}

#[test]
fn test_bitwise() {
    assert_eq!(exec("print 6 & 3, 6 | 3"), "2 7\n");
    assert_eq!(exec("print 1 | 2 * 2"), "5\n");
}

#[test]
fn test_negative() {
    assert_eq!(exec("print 0 - 7 / 2"), "-3\n");
    assert_eq!(exec("print -7 / 2, -7 % 2"), "-3 -1\n");
    assert_eq!(exec("a = 5; print -a * 2, -(a + 1)"), "-10 -6\n");
}

#[test]
fn test_wraps() {
    assert_eq!(exec("a = 32767; a = a + 1; print a"), "-32768\n");
    assert_eq!(exec("print 300 * 300"), "24464\n");
}

#[test]
fn test_overflow() {
    assert_eq!(exec("a = 32768"), "OVERFLOW AT 4\n");
    assert_eq!(exec("print 32767"), "32767\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(exec("a = 1 / 0"), "DIVISION BY ZERO AT 6\n");
    assert_eq!(exec("a = 5 % (1 - 1)"), "DIVISION BY ZERO AT 6\n");
}

#[test]
fn test_missing_operand() {
    assert_eq!(exec("a = 2 *"), "SYNTAX ERROR AT 7; EXPECTED EXPRESSION\n");
    assert_eq!(
        exec("a = (1 + 2"),
        "SYNTAX ERROR AT 10; EXPECTED RIGHT PARENTHESIS\n"
    );
}
