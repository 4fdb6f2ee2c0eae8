use regencheck_core::{CommandRunner, CommandSpec, CommandStatus, Result};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A runner that applies a closure instead of spawning a process
///
/// Records every invocation so tests can assert whether (and how often)
/// the command was started.
pub struct ScriptedRunner<F>
where
    F: Fn() -> CommandStatus,
{
    action: F,
    calls: Cell<usize>,
    seen: RefCell<Vec<CommandSpec>>,
}

impl<F> ScriptedRunner<F>
where
    F: Fn() -> CommandStatus,
{
    pub fn new(action: F) -> Self {
        Self {
            action,
            calls: Cell::new(0),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    #[allow(dead_code)]
    pub fn seen(&self) -> Vec<CommandSpec> {
        self.seen.borrow().clone()
    }
}

impl<F> CommandRunner for ScriptedRunner<F>
where
    F: Fn() -> CommandStatus,
{
    fn run(&self, command: &CommandSpec) -> Result<CommandStatus> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(command.clone());
        Ok((self.action)())
    }
}

/// Placeholder command vector; scripted runners never execute it
pub fn generator() -> CommandSpec {
    CommandSpec::from_argv(["generate", "--all"]).unwrap()
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_target(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn overwrite(path: &Path, content: &[u8]) {
    std::fs::write(path, content).unwrap();
}
