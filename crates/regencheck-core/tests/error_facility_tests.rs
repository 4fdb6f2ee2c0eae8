use regencheck_core::errors::{CheckError, ExError, ExErrorKind};
use std::path::PathBuf;

#[test]
fn test_precondition_read_carries_paths() {
    let err = CheckError::PreconditionRead {
        paths: vec![PathBuf::from("a.out"), PathBuf::from("b.out")],
    };

    let ex_err: ExError = (&err).into();

    assert_eq!(ex_err.kind(), ExErrorKind::PreconditionRead);
    assert_eq!(ex_err.code(), "ERR_PRECONDITION_READ");
    assert_eq!(ex_err.op(), Some("read_originals"));
    assert_eq!(
        ex_err.paths(),
        &[PathBuf::from("a.out"), PathBuf::from("b.out")]
    );
    assert_eq!(
        err.to_string(),
        "2 target file(s) could not be read before running the command"
    );
}

#[test]
fn test_spawn_distinct_from_command_failed() {
    let spawn: ExError = CheckError::CommandSpawn {
        program: "gen".to_string(),
        reason: "No such file or directory (os error 2)".to_string(),
    }
    .into();
    let failed: ExError = CheckError::CommandFailed {
        status: "exit status 1".to_string(),
    }
    .into();

    assert_eq!(spawn.kind(), ExErrorKind::CommandSpawn);
    assert_eq!(failed.kind(), ExErrorKind::CommandFailed);
    assert_ne!(spawn.code(), failed.code());
    assert!(spawn.message().starts_with("gen:"));
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: CheckError = io.into();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert!(ex_err.message().contains("pipe closed"));
}

#[test]
fn test_empty_command_is_invalid_input() {
    let ex_err: ExError = CheckError::EmptyCommand.into();
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(CheckError::EmptyCommand.exit_code(), 2);
}
