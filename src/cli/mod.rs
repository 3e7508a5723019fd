//! CLI module for console-menus
//!
//! This module contains the command definitions and their handlers using clap.

pub mod commands;
pub mod config;
pub mod demo;

pub use commands::{Cli, Commands};
