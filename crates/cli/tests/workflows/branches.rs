//! Branch resolution through git

use crate::common::TestWorkspace;
use crate::mv;
use anyhow::Result;
use std::process::Command;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(ws: &TestWorkspace, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .arg("-C")
        .arg(ws.root())
        .args(args)
        .status()?;
    anyhow::ensure!(status.success(), "git {:?} failed", args);
    Ok(())
}

#[test]
fn test_outside_repository_uses_fallback() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;

    let branch = mv!(ws.root(), "branch").assert_success()?;
    assert_eq!(branch.stdout.trim(), "(no branch)");

    let status = mv!(ws.root(), "status").assert_success()?;
    assert!(status.contains_stdout("not a git repository"));
    Ok(())
}

#[test]
fn test_marks_follow_current_branch() -> Result<()> {
    if !git_available() {
        eprintln!("git not available, skipping");
        return Ok(());
    }

    let ws = TestWorkspace::initialized(&["a.rs", "b.rs"])?;
    git(&ws, &["init", "-q"])?;
    git(&ws, &["checkout", "-q", "-b", "feature"])?;

    let branch = mv!(ws.root(), "branch").assert_success()?;
    assert_eq!(branch.stdout.trim(), "feature");

    mv!(ws.root(), "mark", "a.rs").assert_success()?;
    git(&ws, &["checkout", "-q", "-b", "other"])?;
    mv!(ws.root(), "mark", "b.rs").assert_success()?;

    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    let branches = json["branches"].as_array().cloned().unwrap_or_default();
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0]["branch"], "feature");
    assert_eq!(branches[0]["files"][0]["label"], "a.rs");
    assert_eq!(branches[1]["branch"], "other");
    assert_eq!(branches[1]["files"][0]["label"], "b.rs");
    Ok(())
}
