use super::*;

#[test]
fn test_condition_rechecked() {
    assert_eq!(run("a = 0; while a < 3 { a = a + 1; print a }"), "1\n2\n3\n");
}

#[test]
fn test_false_skips_body() {
    assert_eq!(run("while 0 { print 'x' }; print 'y'"), "y\n");
}

#[test]
fn test_skips_nested_braces() {
    assert_eq!(
        run("while 0 { if 1 { print 'x' } else { print 'z' } }; print 'y'"),
        "y\n"
    );
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        run("i = 0; while i < 2 { i = i + 1; j = 0; while j < i { j = j + 1; print i, j } }"),
        "1 1\n2 1\n2 2\n"
    );
}
