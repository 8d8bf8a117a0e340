//! Print the branch marks are recorded under

use crate::util;
use anyhow::Result;

pub fn run() -> Result<()> {
    let session = util::open_current_session()?;
    println!("{}", session.current_branch());
    Ok(())
}
