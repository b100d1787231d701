//! Core module: catalog, scoring, track selection, formation filtering and export

pub mod advisor;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod profile;
pub mod report;
pub mod scorer;
pub mod selection;

pub use advisor::{Advisor, Recommendation};
pub use catalog::{Catalog, CategoryKind};
pub use dataset::ProgramTable;
pub use error::{AdvisorError, Result};
pub use models::Program;
pub use profile::StudentProfile;
pub use scorer::{score, SubjectScore};
pub use selection::{select_track, Track};

/// Returns the current version of the crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
