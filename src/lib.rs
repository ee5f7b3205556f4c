//! Revanth Recreations single-page site.
//!
//! The binary entry point lives in `main.rs`; modules are public so the
//! browser tests under `tests/` can mount components directly.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod hooks;
pub mod mailer;
pub mod notify;
pub mod state;
