//! Interactive session over stdin/stdout

use crate::{shell, util};
use anyhow::Result;
use std::io::{self, IsTerminal};

pub fn run() -> Result<()> {
    let mut session = util::open_current_session()?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("markview shell in {} (type 'help')", session.root().display());
    }

    shell::run(&mut session, stdin.lock(), &mut io::stdout().lock(), interactive)
}
