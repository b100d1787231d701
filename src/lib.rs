//! Shared library for the spécialités advisor
//! Contains the subject catalog, scoring, formation filtering and export used by the CLI

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
