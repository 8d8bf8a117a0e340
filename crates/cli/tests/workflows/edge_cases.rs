//! Edge cases: missing workspace, re-init, subdirectories, deleted files

use crate::common::cli::MvCommand;
use crate::common::TestWorkspace;
use crate::mv;
use anyhow::Result;

#[test]
fn test_commands_outside_workspace_fail() -> Result<()> {
    let ws = TestWorkspace::with_files(&["a.rs"])?;

    let commands: [&[&str]; 4] = [&["list"], &["mark", "a.rs"], &["status"], &["config", "list"]];
    for args in commands {
        let mut cmd = MvCommand::new(ws.root());
        cmd.args(args);
        let result = cmd.assert_failure()?;
        assert!(result.contains_stderr("Failed to find workspace"));
    }
    Ok(())
}

#[test]
fn test_init_twice_fails() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    let result = mv!(ws.root(), "init").assert_failure()?;
    assert!(result.contains_stderr("already initialized"));
    Ok(())
}

#[test]
fn test_commands_work_from_subdirectory() -> Result<()> {
    let ws = TestWorkspace::initialized(&["src/deep/a.rs"])?;

    mv!(ws.path("src/deep"), "mark", "a.rs", "--branch", "main").assert_success()?;

    let json = mv!(ws.path("src"), "list", "--json").assert_success()?.json()?;
    assert_eq!(json["branches"][0]["files"][0]["label"], "src/deep/a.rs");
    Ok(())
}

#[test]
fn test_empty_workspace_lists_nothing() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("No marked files"));

    let status = mv!(ws.root(), "status").assert_success()?;
    assert!(status.contains_stdout("0 files across 0 branches"));
    Ok(())
}

#[test]
fn test_deleted_file_stays_marked() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;
    mv!(ws.root(), "mark", "a.rs", "--branch", "main").assert_success()?;

    std::fs::remove_file(ws.path("a.rs"))?;

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("a.rs"));

    // still removable by its relative path
    mv!(ws.root(), "remove", "main", "a.rs").assert_success()?;
    Ok(())
}
