//! Workspace configuration commands

use crate::common::TestWorkspace;
use crate::mv;
use anyhow::Result;

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    assert!(ws.path(".markview/config.toml").exists());
    assert!(ws.path(".markview/.gitignore").exists());

    let path = mv!(ws.root(), "config", "path").assert_success()?;
    assert!(path.contains_stdout("config.toml"));

    let fallback = mv!(ws.root(), "config", "get", "branch.fallback").assert_success()?;
    assert_eq!(fallback.stdout.trim(), "(no branch)");
    Ok(())
}

#[test]
fn test_set_and_get() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    mv!(ws.root(), "config", "set", "expand.exclude", "target/,*.log").assert_success()?;
    let value = mv!(ws.root(), "config", "get", "expand.exclude").assert_success()?;
    assert_eq!(value.stdout.trim(), "target/,*.log");

    let list = mv!(ws.root(), "config", "list").assert_success()?;
    assert!(list.contains_stdout("exclude"));
    Ok(())
}

#[test]
fn test_invalid_values_rejected() -> Result<()> {
    let ws = TestWorkspace::initialized(&[])?;

    mv!(ws.root(), "config", "set", "expand.follow_links", "sometimes").assert_failure()?;
    mv!(ws.root(), "config", "set", "branch.fallback", "").assert_failure()?;
    let unknown = mv!(ws.root(), "config", "get", "no.such.key").assert_failure()?;
    assert!(unknown.contains_stderr("Unknown config key"));
    Ok(())
}

#[test]
fn test_exclude_patterns_apply_to_folder_marks() -> Result<()> {
    let ws = TestWorkspace::initialized(&["src/lib.rs", "src/debug.log", "target/out.bin"])?;
    mv!(ws.root(), "config", "set", "expand.exclude", "target/,*.log").assert_success()?;

    let result = mv!(ws.root(), "mark", ".").assert_success()?;
    assert!(result.contains_stdout("Marked 1 file "));

    let list = mv!(ws.root(), "list").assert_success()?;
    assert!(list.contains_stdout("src/lib.rs"));
    assert!(!list.contains_stdout("debug.log"));
    assert!(!list.contains_stdout("out.bin"));
    Ok(())
}

#[test]
fn test_fallback_branch_is_configurable() -> Result<()> {
    let ws = TestWorkspace::initialized(&["a.rs"])?;
    mv!(ws.root(), "config", "set", "branch.fallback", "scratch").assert_success()?;

    let branch = mv!(ws.root(), "branch").assert_success()?;
    assert_eq!(branch.stdout.trim(), "scratch");

    mv!(ws.root(), "mark", "a.rs").assert_success()?;
    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    assert_eq!(json["branches"][0]["branch"], "scratch");
    Ok(())
}

#[test]
fn test_example_config() -> Result<()> {
    let ws = TestWorkspace::new()?;
    let result = mv!(ws.root(), "config", "example").assert_success()?;
    assert!(result.contains_stdout("[expand]"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_follow_links_setting_changes_folder_marks() -> Result<()> {
    let ws = TestWorkspace::initialized(&["real/x.rs", "pkg/own.rs"])?;
    std::os::unix::fs::symlink(ws.path("real"), ws.path("pkg/link"))?;

    let result = mv!(ws.root(), "mark", "pkg", "--branch", "plain").assert_success()?;
    assert!(result.contains_stdout("Marked 2 files"));

    mv!(ws.root(), "config", "set", "expand.follow_links", "true").assert_success()?;
    mv!(ws.root(), "mark", "pkg", "--branch", "followed").assert_success()?;

    let json = mv!(ws.root(), "list", "--json").assert_success()?.json()?;
    let labels = |index: usize| -> Vec<String> {
        json["branches"][index]["files"]
            .as_array()
            .map(|files| {
                files
                    .iter()
                    .filter_map(|f| f["label"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    };

    assert_eq!(json["branches"][0]["branch"], "followed");
    assert_eq!(labels(0), vec!["pkg/link/x.rs", "pkg/own.rs"]);
    assert_eq!(json["branches"][1]["branch"], "plain");
    assert_eq!(labels(1), vec!["pkg/link", "pkg/own.rs"]);
    Ok(())
}
