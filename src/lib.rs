//! NLA Timeline
//!
//! The editing model behind the timeline panel of a non-linear editor:
//! tracks and time-positioned clips, a pure reducer over them, the
//! time/pixel coordinate mapper used by every rendering pass, and the
//! playback driver that advances the playhead.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod hotkeys;
pub mod state;
pub mod timeline;

pub use config::EditorConfig;
pub use error::{EditorError, Result};
