//! Core functionality for console-menus
//!
//! This module contains shared settings:
//! - Application configuration

pub mod config;

pub use config::{Config, UnresolvedSelectionMode};
