//! State management module
//!
//! This module contains the core data structures of the timeline editor:
//! - Project: tracks and clips, plus persistence
//! - EditorState: the immutable snapshot the timeline renders from
//! - TimelineAction / apply: the pure edit surface
//! - TimelineStore: single owner of the current snapshot and playback

mod ids;
mod project;
mod selection;
mod editor;
mod action;
mod store;

pub use ids::{ClipId, TrackId};
pub use project::*;
pub use selection::*;
pub use editor::EditorState;
pub use action::{apply, TimelineAction, Transition};
pub use store::{HotkeyOutcome, TimelineStore};
