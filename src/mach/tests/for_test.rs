use super::*;

#[test]
fn test_counts_up_inclusive() {
    assert_eq!(run("for i = 1 to 3 { print i }"), "1\n2\n3\n");
}

#[test]
fn test_always_runs_once() {
    assert_eq!(run("for i = 5 to 1 { print i }"), "5\n");
}

#[test]
fn test_variable_after_loop() {
    assert_eq!(run("for i = 1 to 3 { a = a + i }; print a, i"), "6 4\n");
}

#[test]
fn test_limit_evaluated_once() {
    assert_eq!(run("n = 2; for i = 1 to n { n = 9; print i }"), "1\n2\n");
}

#[test]
fn test_nested() {
    assert_eq!(
        run("for i = 1 to 2 { for j = 1 to 2 { print i, j } }"),
        "1 1\n1 2\n2 1\n2 2\n"
    );
}

#[test]
fn test_end_inside_body() {
    assert_eq!(run("for i = 1 to 9 { print i; if i = 2 { end } }; print 'no'"), "1\n2\n");
}

#[test]
fn test_missing_closing_brace() {
    assert_eq!(
        run("for i = 1 to 3 { print i"),
        "1\nMISSING CLOSING BRACE AT 24\n"
    );
}
