//! Show marked files in the current view

use crate::{render, util};
use anyhow::{Context, Result};
use markview_core::ViewMode;
use serde_json::json;
use std::io::Write;
use std::path::Path;

/// Render the projection for the persisted view mode
///
/// `filter` and `active` only apply to this invocation.
pub fn run(filter: Option<String>, active: Option<&Path>, as_json: bool) -> Result<()> {
    let mut session = util::open_current_session()?;

    session.apply_filter_input(filter);
    if let Some(active) = active {
        session.set_active_file(Some(util::absolutize(active)));
    }

    let view = session.view();
    let groups = session.project_flat();
    let nodes = session.project_tree();
    let mut out = std::io::stdout().lock();

    if as_json {
        let branches = match view.mode {
            ViewMode::Flat => serde_json::to_value(&groups),
            ViewMode::Tree => serde_json::to_value(&nodes),
        }
        .context("Failed to serialize view")?;
        let document = json!({
            "mode": view.mode,
            "filter": view.filter(),
            "branches": branches,
        });
        serde_json::to_writer_pretty(&mut out, &document).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    render::render(view.mode, &groups, &nodes, view.filter(), &mut out)?;
    Ok(())
}
