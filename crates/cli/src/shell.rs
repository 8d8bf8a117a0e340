//! Line-oriented interactive session
//!
//! Keeps one [`MarkSession`] open so session-only state (the name filter and
//! the focused file) lives across commands.

use crate::render;
use crate::util::{absolutize, plural, split_words};
use anyhow::Result;
use markview_core::{BranchId, BranchResolver, MarkSession, StateStore};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  ls                     show marked files in the current view
  mark <path>            mark a file or folder on the current branch
  rm <branch> [path]     remove a branch, folder or file from the view
  flat | tree            switch view mode
  filter [text]          set the name filter (prompts when no text given;
                         empty input clears, end of input cancels)
  focus [path]           highlight a marked file (no path clears)
  branch                 show the current branch
  help                   show this help
  quit                   leave the session";

/// Run the session until `quit` or end of input
pub fn run<S, R, I, W>(session: &mut MarkSession<S, R>, mut input: I, out: &mut W, prompt: bool) -> Result<()>
where
    S: StateStore,
    R: BranchResolver,
    I: BufRead,
    W: Write,
{
    loop {
        if prompt {
            write!(out, "{} ", "markview>".cyan())?;
            out.flush()?;
        }

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let words = split_words(&line);
        let Some((command, args)) = words.split_first() else {
            continue;
        };

        match command.as_str() {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP)?,
            "ls" | "list" => show(session, out)?,
            "mark" => match args.first() {
                Some(target) => match session.mark(&absolutize(Path::new(target))) {
                    Ok(outcome) => writeln!(
                        out,
                        "{} Marked {} on '{}'",
                        "✓".green(),
                        plural(outcome.files.len(), "file", "files"),
                        outcome.branch.yellow()
                    )?,
                    Err(e) => writeln!(out, "{} {}", "Error:".red(), e)?,
                },
                None => writeln!(out, "Usage: mark <path>")?,
            },
            "rm" | "remove" => match args.split_first() {
                Some((branch, rest)) => {
                    let branch = BranchId::from(branch.as_str());
                    let path = rest.first().map(String::as_str).unwrap_or("");
                    match session.locate(&branch, Path::new(path)) {
                        Some(node) => {
                            let outcome = session.remove(&node);
                            writeln!(
                                out,
                                "{} Removed {} from '{}'{}",
                                "✓".green(),
                                plural(outcome.removed, "file", "files"),
                                branch.yellow(),
                                if outcome.branch_pruned { " (branch removed)" } else { "" }
                            )?;
                        }
                        None => writeln!(
                            out,
                            "{} Nothing named '{}' on branch '{}' in the {} view",
                            "Error:".red(),
                            path,
                            branch,
                            session.view().mode
                        )?,
                    }
                }
                None => writeln!(out, "Usage: rm <branch> [path]")?,
            },
            "flat" => {
                session.switch_to_flat();
                show(session, out)?;
            }
            "tree" => {
                session.switch_to_tree();
                show(session, out)?;
            }
            "filter" => {
                let answer = if args.is_empty() {
                    write!(out, "Filter: ")?;
                    out.flush()?;
                    read_line(&mut input)?
                } else {
                    Some(args.join(" "))
                };
                session.apply_filter_input(answer);
                show(session, out)?;
            }
            "focus" => {
                let path = args.first().map(|p| absolutize(Path::new(p)));
                let requested = path.is_some();
                if !session.set_active_file(path) && requested {
                    writeln!(out, "{}", "File is not marked; nothing highlighted".dimmed())?;
                }
                show(session, out)?;
            }
            "branch" => writeln!(out, "{}", session.current_branch())?,
            other => writeln!(out, "Unknown command: {} (type 'help')", other)?,
        }
    }
    Ok(())
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn show<S, R, W>(session: &MarkSession<S, R>, out: &mut W) -> Result<()>
where
    S: StateStore,
    R: BranchResolver,
    W: Write,
{
    let view = session.view();
    let groups = session.project_flat();
    let nodes = session.project_tree();
    render::render(view.mode, &groups, &nodes, view.filter(), out)?;
    Ok(())
}
