use super::*;

#[test]
fn both_streams_must_be_terminals() {
    assert!(ensure_interactive(true, true).is_ok());

    let err = |stdin, stdout| {
        ensure_interactive(stdin, stdout)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default()
    };
    assert!(err(false, true).contains("stdin is not a TTY"));
    assert!(err(true, false).contains("stdout is not a TTY"));
    assert!(err(false, false).contains("interactive terminal"));
}
