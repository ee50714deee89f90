pub mod coords;
pub mod playback;

pub use coords::ScaleConvention;
pub use playback::{drive, Clock, PlaybackDriver, SystemClock, TickOutcome, TickToken, TransportState};
