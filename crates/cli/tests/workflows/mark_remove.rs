//! Marking and removing files across invocations

use crate::common::TestWorkspace;
use crate::mv;
use anyhow::Result;

#[test]
fn test_mark_folder_adds_every_file() -> Result<()> {
    let ws = TestWorkspace::initialized(&["src/a.ts", "src/b.ts", "src/nested/c.ts", "README.md"])?;

    let result = mv!(ws.root(), "mark", "src").assert_success()?;
    assert!(result.contains_stdout("Marked 3 files"));

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("src/a.ts"));
    assert!(list.contains_stdout("src/b.ts"));
    assert!(list.contains_stdout("src/nested/c.ts"));
    assert!(!list.contains_stdout("README.md"));
    Ok(())
}

#[test]
fn test_marking_twice_adds_nothing_new() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;

    mv!(ws.root(), "mark", "a.rs").assert_success()?;
    let again = mv!(ws.root(), "mark", "a.rs").assert_success()?;
    assert!(again.contains_stdout("(0 new)"));

    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    assert_eq!(json["branches"][0]["files"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn test_mark_missing_path_fails() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    let result = mv!(ws.root(), "mark", "nope.rs").assert_failure()?;
    assert!(result.contains_stderr("Failed to mark"));
    Ok(())
}

#[test]
fn test_removing_only_file_drops_branch() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;
    mv!(ws.root(), "mark", "a.rs", "--branch", "main").assert_success()?;

    let result = mv!(ws.root(), "remove", "main", "a.rs").assert_success()?;
    assert!(result.contains_stdout("Removed 1 file"));
    assert!(result.contains_stdout("no marked files left"));

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("No marked files"));

    mv!(ws.root(), "tree").assert_success()?;
    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    assert_eq!(json["branches"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_remove_whole_branch_keeps_others() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs", "b.rs"])?;
    mv!(ws.root(), "mark", "a.rs", "--branch", "feature").assert_success()?;
    mv!(ws.root(), "mark", "b.rs", "--branch", "main").assert_success()?;

    mv!(ws.root(), "remove", "feature").assert_success()?;

    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    let branches = json["branches"].as_array().cloned().unwrap_or_default();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["branch"], "main");
    Ok(())
}

#[test]
fn test_remove_folder_in_tree_view() -> Result<()> {
    let ws = TestWorkspace::initialized(&["src/a.ts", "src/b.ts", "top.rs"])?;
    mv!(ws.root(), "mark", ".", "--branch", "main").assert_success()?;

    // folders only exist in the tree view
    mv!(ws.root(), "remove", "main", "src").assert_failure()?;

    mv!(ws.root(), "tree").assert_success()?;
    let result = mv!(ws.root(), "remove", "main", "src").assert_success()?;
    assert!(result.contains_stdout("Removed 2 files"));

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("top.rs"));
    assert!(!list.contains_stdout("a.ts"));
    Ok(())
}

#[test]
fn test_remove_unknown_node_fails() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;
    mv!(ws.root(), "mark", "a.rs", "--branch", "main").assert_success()?;

    let result = mv!(ws.root(), "remove", "main", "other.rs").assert_failure()?;
    assert!(result.contains_stderr("Nothing named 'other.rs'"));

    mv!(ws.root(), "remove", "ghost").assert_failure()?;
    Ok(())
}

#[test]
fn test_remove_accepts_dot_relative_path() -> Result<()> {
    let ws = TestWorkspace::initialized(&["src/a.rs", "src/b.rs"])?;
    mv!(ws.root(), "mark", "src", "--branch", "main").assert_success()?;

    let result = mv!(ws.root(), "remove", "main", "./src/a.rs").assert_success()?;
    assert!(result.contains_stdout("Removed 1 file"));

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(!list.contains_stdout("src/a.rs"));
    assert!(list.contains_stdout("src/b.rs"));
    Ok(())
}
