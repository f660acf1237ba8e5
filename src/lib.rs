//! Library surface for the prodcat CLI.
//!
//! The binary (`main.rs`) wires these modules into clap commands. Keeping
//! the client, models, and view controller in the library makes the sync
//! flow testable against an in-process mock backend.

pub mod api;
pub mod config;
pub mod models;
pub mod ui;
