//! Workflow integration tests
//!
//! Tests for complete workflows that exercise multiple commands
//! and validate end-to-end behavior.

pub mod branches;
pub mod config;
pub mod edge_cases;
pub mod mark_remove;
