//! Human Suite Library
//!
//! A menu-driven bundle of small productivity utilities. The pieces are
//! exported for testing and reuse.

pub mod cli;
pub mod config;
pub mod email;
pub mod error;
pub mod format;
pub mod logging;
pub mod menu;
pub mod notes;
pub mod organizer;
pub mod store;
pub mod tasks;
pub mod timelog;
pub mod types;
