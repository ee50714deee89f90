//! Project data model
//!
//! This module contains the core data structures for a timeline project.

mod project;
mod track;
mod clip;
mod settings;
mod persistence;

pub use project::Project;
pub use track::{Track, TrackType};
pub use clip::{Clip, ClipKind};
pub use settings::ProjectSettings;
