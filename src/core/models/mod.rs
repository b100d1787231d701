//! Data models

pub mod program;

pub use program::Program;
