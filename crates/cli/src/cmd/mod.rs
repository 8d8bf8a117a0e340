//! CLI command implementations

pub mod branch;
pub mod config;
pub mod init;
pub mod list;
pub mod mark;
pub mod remove;
pub mod shell;
pub mod status;
pub mod view;
