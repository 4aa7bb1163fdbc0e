mod common;
use common::*;
use std::fs;
use std::path::PathBuf;
use ubasic::lang::ErrorCode;
use ubasic::mach::{Download, Program, ProgramStore, Transfer};

const SOURCE: &str = "# count to three
for i = 1 to 3 {      # loop
\tprint 'i=', i
}
end
";

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ubasic-test-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_source_is_squeezed() {
    let program = Program::from_source(SOURCE).unwrap();
    assert_eq!(program.listing(), "for i = 1 to 3 {\nprint 'i=', i\n}\nend\n");
    assert_eq!(exec(&program.listing()), "i= 1\ni= 2\ni= 3\n");
}

#[test]
fn test_program_too_big() {
    let line = "a = a + 1;\n";
    let source = line.repeat(60);
    let error = Program::from_source(&source).unwrap_err();
    assert!(error.is(ErrorCode::OutOfMemory));
}

#[test]
fn test_store_round_trip() {
    let store = ProgramStore::new(temp_dir("round-trip"));
    let program = Program::from_source(SOURCE).unwrap();
    store.save(3, &program).unwrap();
    let loaded = store.load(3).unwrap();
    assert_eq!(loaded, program);
    assert_eq!(exec(&loaded.listing()), "i= 1\ni= 2\ni= 3\n");
    assert!(store.load(0).unwrap_err().is(ErrorCode::FileNotFound));
}

#[test]
fn test_download_to_store() {
    let store = ProgramStore::new(temp_dir("download"));
    let mut session = Download::new();
    let mut echoes = vec![];
    for line in "%P1\n  speed 50 50;\n\n  motors 1 1 # go\n@\n".split_inclusive('\n') {
        match session.feed(line).unwrap() {
            Transfer::Continue(echo) => echoes.push(echo),
            Transfer::Complete(_) => break,
            Transfer::Truncated => panic!("truncated"),
        }
    }
    assert_eq!(echoes, vec!["%P1", "speed 50 50;\n", "", "motors 1 1\n"]);
    let (slot, program) = session.finish();
    assert_eq!(slot, 1);
    store.save(slot, &program).unwrap();
    assert_eq!(store.load(1).unwrap().listing(), "speed 50 50;\nmotors 1 1\n");
}
