//! Switch between the flat and tree views

use crate::{render, util};
use anyhow::Result;
use markview_core::ViewMode;
use owo_colors::OwoColorize;

pub fn run(mode: ViewMode) -> Result<()> {
    let mut session = util::open_current_session()?;
    session.set_mode(mode);

    println!("{} Switched to {} view", "✓".green(), mode.cyan());
    println!();

    let view = session.view();
    render::render(
        view.mode,
        &session.project_flat(),
        &session.project_tree(),
        view.filter(),
        &mut std::io::stdout().lock(),
    )?;
    Ok(())
}
