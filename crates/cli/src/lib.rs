//! markview command-line front end
//!
//! Commands open a [`markview_core::MarkSession`] backed by the sled state
//! store and the git branch resolver, do one thing, and exit.

pub mod cmd;
pub mod config;
pub mod render;
pub mod shell;
pub mod util;
