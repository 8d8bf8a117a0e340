//! Terminal rendering of the flat and tree projections

use markview_core::{BranchGroup, TreeNode, ViewMode};
use owo_colors::OwoColorize;
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Render branch groups as `branch (n)` followed by one line per file
pub fn render_flat<W: Write>(groups: &[BranchGroup], out: &mut W) -> io::Result<()> {
    for group in groups {
        writeln!(
            out,
            "{} {}",
            group.branch.to_string().yellow().bold(),
            format!("({})", group.files.len()).dimmed()
        )?;
        for entry in &group.files {
            write_leaf(out, 1, &entry.label, entry.active)?;
        }
    }
    Ok(())
}

/// Render branch nodes as an indented folder hierarchy
pub fn render_tree<W: Write>(nodes: &[TreeNode], out: &mut W) -> io::Result<()> {
    for node in nodes {
        writeln!(out, "{}", node.label().yellow().bold())?;
        if node.children().next().is_none() {
            writeln!(out, "{}{}", INDENT, "(no matching files)".dimmed())?;
            continue;
        }
        for child in node.children() {
            write_node(out, child, 1)?;
        }
    }
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &TreeNode, depth: usize) -> io::Result<()> {
    match node {
        TreeNode::Leaf { label, active, .. } => write_leaf(out, depth, label, *active),
        TreeNode::Folder { label, full_path, children, .. } => {
            // a marked path that now also holds marked files
            let marked = if full_path.is_some() { " (marked)" } else { "" };
            writeln!(
                out,
                "{}{}{}",
                INDENT.repeat(depth),
                format!("{}/", label).cyan(),
                marked.dimmed()
            )?;
            for child in children.values() {
                write_node(out, child, depth + 1)?;
            }
            Ok(())
        }
    }
}

fn write_leaf<W: Write>(out: &mut W, depth: usize, label: &str, active: bool) -> io::Result<()> {
    if active {
        writeln!(out, "{}{} {}", INDENT.repeat(depth), label.green().bold(), "(active)".green())
    } else {
        writeln!(out, "{}{}", INDENT.repeat(depth), label)
    }
}

/// Render the projection for `mode`, or a hint when there is nothing to show
pub fn render<W: Write>(
    mode: ViewMode,
    groups: &[BranchGroup],
    nodes: &[TreeNode],
    filter: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    let empty = match mode {
        ViewMode::Flat => groups.is_empty(),
        ViewMode::Tree => nodes.is_empty(),
    };

    if empty {
        match filter {
            Some(filter) => writeln!(out, "{}", format!("No marked files match '{}'", filter).dimmed()),
            None => writeln!(out, "{}", "No marked files".dimmed()),
        }
    } else {
        match mode {
            ViewMode::Flat => render_flat(groups, out),
            ViewMode::Tree => render_tree(nodes, out),
        }
    }
}
