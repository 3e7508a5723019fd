//! console-menus - numbered console menus driven by line input
//!
//! This library provides stack-based menu navigation with paging and
//! multi-selection, validated prompts, and console doubles for testing
//! applications built on blocking line-oriented I/O.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod inputs;
pub mod io;
pub mod menu;
pub mod testing;

pub use error::{MenuError, Result};
