//! Shared fixtures for engine tests

#![allow(dead_code)]

use batcher_core::{CommandResult, Layout, WorkItem};
use batcher_engine::{CommandRunner, EngineError, Result};
use std::cell::{Cell, RefCell};
use std::path::Path;

/// Runner that answers from a script and records every invocation
pub struct ScriptedRunner {
    respond: Box<dyn Fn(&[String]) -> CommandResult>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(respond: impl Fn(&[String]) -> CommandResult + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every item is dirty and every command succeeds
    pub fn all_ok() -> Self {
        Self::new(|args| match args[0].as_str() {
            "status" => dirty(),
            _ => ok(),
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Subcommand of each invocation, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c[0].clone()).collect()
    }

    pub fn count(&self, subcommand: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c[0] == subcommand).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, args: &[String], _cwd: &Path) -> Result<CommandResult> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok((self.respond)(args))
    }
}

/// Runner whose client executable cannot be found
#[derive(Default)]
pub struct MissingClient {
    calls: Cell<usize>,
}

impl MissingClient {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CommandRunner for MissingClient {
    fn execute(&self, _args: &[String], _cwd: &Path) -> Result<CommandResult> {
        self.calls.set(self.calls.get() + 1);
        Err(EngineError::ClientNotFound("no-such-vcs".to_string()))
    }
}

pub fn ok() -> CommandResult {
    CommandResult::new(0, "", "")
}

pub fn dirty() -> CommandResult {
    CommandResult::new(0, "?? file.txt\n", "")
}

pub fn clean() -> CommandResult {
    CommandResult::new(0, "", "")
}

/// Last argument of an invocation (the pathspec for status/add/commit)
pub fn target(args: &[String]) -> &str {
    args.last().map(String::as_str).unwrap_or("")
}

pub fn items(names: &[&str]) -> Vec<WorkItem> {
    names
        .iter()
        .map(|n| WorkItem::new(Layout::Packages, Path::new("/repo"), n))
        .collect()
}
