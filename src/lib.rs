//! zoomiz: search-then-jump navigation
//!
//! The [`jump`] module is the editor-independent core. Everything else is the
//! terminal viewer that hosts it.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod jump;
pub mod logging;
pub mod scroll;
pub mod theme;
